use leptos::prelude::*;

/// Labelled multi-line input, bound the same way as [`super::Input`].
#[component]
pub fn Textarea(
    #[prop(into)]
    label: Signal<String>,
    name: &'static str,
    #[prop(into)]
    value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    #[prop(optional)]
    rows: Option<u32>,
) -> impl IntoView {
    let textarea_rows = rows.unwrap_or(5);

    view! {
        <div class="form__group">
            <label class="form__label" for=name>
                {move || label.get()}
            </label>
            <textarea
                id=name
                name=name
                class="form__textarea"
                required=true
                rows=textarea_rows
                disabled=move || disabled.get().unwrap_or(false)
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            ></textarea>
        </div>
    }
}
