use api::FieldState;
use dioxus::prelude::*;

fn input_class(state: &FieldState) -> &'static str {
    match state {
        FieldState::Empty => "field__input",
        FieldState::Invalid(_) => "field__input field__input--invalid",
        FieldState::Valid => "field__input field__input--valid",
    }
}

/// Labelled input with its inline validation message.
#[component]
pub fn TextField(
    id: String,
    label: String,
    value: String,
    state: FieldState,
    oninput: EventHandler<String>,
    onblur: EventHandler<()>,
    #[props(default = "text".to_string())] kind: String,
    #[props(default)] placeholder: String,
    list: Option<String>,
) -> Element {
    let message = state.message();

    rsx! {
        div {
            class: "field",
            label { class: "field__label", r#for: "{id}", "{label}" }
            input {
                id: "{id}",
                class: input_class(&state),
                r#type: "{kind}",
                placeholder: "{placeholder}",
                value: "{value}",
                list: list.unwrap_or_default(),
                oninput: move |evt: FormEvent| oninput.call(evt.value()),
                onblur: move |_| onblur.call(()),
            }
            if let Some(message) = message {
                span { class: "field__error", "{message}" }
            }
        }
    }
}

/// Image picker. Reads the chosen file fully and hands back its name and bytes.
#[component]
pub fn FileField(
    id: String,
    label: String,
    state: FieldState,
    onpick: EventHandler<(String, Vec<u8>)>,
) -> Element {
    let message = state.message();

    rsx! {
        div {
            class: "field",
            label { class: "field__label", r#for: "{id}", "{label}" }
            input {
                id: "{id}",
                class: input_class(&state),
                r#type: "file",
                accept: "image/*",
                onchange: move |evt: FormEvent| async move {
                    let Some(engine) = evt.files() else {
                        return;
                    };
                    let Some(name) = engine.files().into_iter().next() else {
                        return;
                    };
                    match engine.read_file(&name).await {
                        Some(bytes) => onpick.call((name, bytes)),
                        None => tracing::warn!("Could not read selected file {}", name),
                    }
                },
            }
            if let Some(message) = message {
                span { class: "field__error", "{message}" }
            }
        }
    }
}
