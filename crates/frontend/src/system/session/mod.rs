pub mod context;
pub mod storage;

pub use context::{use_session, SessionContext, SessionProvider};
