use contracts::system::preference::PreferenceStore;
use web_sys::window;

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// `window.localStorage` backed preference store.
///
/// Storage can be missing or blocked (private mode, sandboxed iframes); reads
/// then return `None` and writes are dropped with a warning.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageStore;

impl PreferenceStore for LocalStorageStore {
    fn read(&self, key: &str) -> Option<String> {
        get_local_storage()?.get_item(key).ok()?
    }

    fn write(&self, key: &str, value: &str) {
        match get_local_storage() {
            Some(storage) => {
                if let Err(e) = storage.set_item(key, value) {
                    log::warn!("Failed to persist {}: {:?}", key, e);
                }
            }
            None => log::warn!("localStorage unavailable, {} not persisted", key),
        }
    }
}
