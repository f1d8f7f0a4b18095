//! Seller registration page.

use api::Field;
use dioxus::prelude::*;
use ui::components::{SubmitButton, TextField};
use ui::controllers::{RegisterController, RegisterFields, RegisterForm};
use ui::{use_portal, Destination, FieldRules, FieldStates, Notice, NoticeBanner, SubmitControl, SubmitOutcome};

use super::follow;
use crate::Route;

#[component]
pub fn Register() -> Element {
    let ctx = use_portal();
    let title = Destination::Register.title();
    let nav = use_navigator();
    let mut fields = use_signal(RegisterFields::default);
    let mut states = use_signal(FieldStates::default);
    let mut control = use_signal(SubmitControl::for_form::<RegisterForm>);
    let mut notice = use_signal(|| Option::<Notice>::None);

    let probe_ctx = ctx.clone();
    use_effect(move || {
        let controller = RegisterController::new(probe_ctx.clone());
        spawn(async move {
            if let Some(warning) = controller.check_database().await {
                notice.set(Some(warning));
            }
        });
    });

    let mut edit = move |field: Field, value: String| {
        {
            let mut f = fields.write();
            match field {
                Field::Name => f.name = value,
                Field::Email => f.email = value,
                Field::Password => f.password = value,
                Field::ConfirmPassword => f.confirm_password = value,
                _ => {}
            }
        }
        let updates = fields.read().on_input(field);
        states.write().apply(updates);
    };
    let mut leave = move |field: Field| {
        let updates = fields.read().on_blur(field);
        states.write().apply(updates);
    };

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        let controller = RegisterController::new(ctx.clone());
        spawn(async move {
            notice.set(None);
            let current = fields();
            match controller.submit(&mut control, &current).await {
                SubmitOutcome::Succeeded(redirect) => follow(redirect, notice, nav).await,
                SubmitOutcome::Invalid(errors) => states.write().show_errors(&errors),
                SubmitOutcome::Failed(message) => notice.set(Some(Notice::error(message))),
                SubmitOutcome::Busy => {}
            }
        });
    };

    rsx! {
        document::Title { "{title}" }
        div {
            class: "auth-page",
            h1 { class: "auth-page__title", "Seller Portal" }
            p { class: "auth-page__subtitle", "Create your seller account" }

            form {
                class: "auth-form",
                novalidate: true,
                onsubmit: handle_register,

                TextField {
                    id: "name",
                    label: "Name",
                    value: fields.read().name.clone(),
                    state: states.read().get(Field::Name),
                    oninput: move |v| edit(Field::Name, v),
                    onblur: move |_| leave(Field::Name),
                }
                TextField {
                    id: "email",
                    label: "Email",
                    kind: "email",
                    placeholder: "you@example.com",
                    value: fields.read().email.clone(),
                    state: states.read().get(Field::Email),
                    oninput: move |v| edit(Field::Email, v),
                    onblur: move |_| leave(Field::Email),
                }
                TextField {
                    id: "password",
                    label: "Password",
                    kind: "password",
                    value: fields.read().password.clone(),
                    state: states.read().get(Field::Password),
                    oninput: move |v| edit(Field::Password, v),
                    onblur: move |_| leave(Field::Password),
                }
                TextField {
                    id: "confirm_password",
                    label: "Confirm password",
                    kind: "password",
                    value: fields.read().confirm_password.clone(),
                    state: states.read().get(Field::ConfirmPassword),
                    oninput: move |v| edit(Field::ConfirmPassword, v),
                    onblur: move |_| leave(Field::ConfirmPassword),
                }

                SubmitButton { control }
                NoticeBanner { notice: notice() }
            }

            p {
                class: "auth-page__switch",
                "Already registered? "
                Link { to: Route::Login {}, "Sign in" }
            }
        }
    }
}
