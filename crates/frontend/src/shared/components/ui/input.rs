use leptos::prelude::*;

/// Border color of an input with a visible error
pub const ERROR_BORDER_COLOR: &str = "#B44D4D";

/// Inline style of an input: error border while `error` is set, none otherwise
pub fn error_border_style(error: Option<&str>) -> String {
    match error {
        Some(_) => format!("border-color: {}", ERROR_BORDER_COLOR),
        None => String::new(),
    }
}

/// Form input with label and inline error message.
///
/// The error element and the input border are both driven by `error`, so they
/// are shown and cleared together.
#[component]
pub fn Input(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Input value
    #[prop(into)]
    value: Signal<String>,
    /// Error message, `None` when the field is clean
    #[prop(into)]
    error: Signal<Option<String>>,
    /// Input event handler
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Input type: "text" (default), "password", "email", etc.
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    /// ID for the input element
    #[prop(optional, into)]
    id: MaybeProp<String>,
    /// Autocomplete attribute
    #[prop(optional, into)]
    autocomplete: MaybeProp<String>,
) -> impl IntoView {
    let input_id = move || id.get().unwrap_or_default();
    let input_placeholder = move || placeholder.get().unwrap_or_default();
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());
    let input_autocomplete = move || autocomplete.get().unwrap_or_default();
    let border = move || error.with(|e| error_border_style(e.as_deref()));

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=input_id>
                    {l}
                </label>
            })}
            <input
                id=input_id
                class="form__input"
                type=input_t
                prop:value=move || value.get()
                placeholder=input_placeholder
                autocomplete=input_autocomplete
                style=border
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            />
            <span class="form__error" class:visible=move || error.with(Option::is_some)>
                {move || error.get().unwrap_or_default()}
            </span>
        </div>
    }
}
