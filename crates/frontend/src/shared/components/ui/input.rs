use leptos::prelude::*;

/// Labelled single-line input.
///
/// The value is bound as a DOM property so clearing the signal clears the box.
#[component]
pub fn Input(
    /// Reactive label; follows the active language
    #[prop(into)]
    label: Signal<String>,
    /// `id` and `name` of the element
    name: &'static str,
    #[prop(into)]
    value: Signal<String>,
    on_input: Callback<String>,
    /// "text" unless set
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    #[prop(optional, into)]
    autocomplete: MaybeProp<String>,
) -> impl IntoView {
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());
    let input_autocomplete = move || autocomplete.get().unwrap_or_else(|| "off".to_string());

    view! {
        <div class="form__group">
            <label class="form__label" for=name>
                {move || label.get()}
            </label>
            <input
                id=name
                name=name
                class="form__input"
                type=input_t
                prop:value=move || value.get()
                required=true
                disabled=move || disabled.get().unwrap_or(false)
                autocomplete=input_autocomplete
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}
