use dioxus::prelude::*;

use crate::form::SubmitControl;

/// Submit button bound to a form's [`SubmitControl`].
#[component]
pub fn SubmitButton(control: ReadOnlySignal<SubmitControl>) -> Element {
    let control = control.read();

    rsx! {
        button {
            class: "btn btn--primary",
            r#type: "submit",
            disabled: control.disabled(),
            "{control.label()}"
        }
    }
}
