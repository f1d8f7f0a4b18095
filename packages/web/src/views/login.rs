//! Seller login page.

use api::Field;
use dioxus::prelude::*;
use ui::components::{SubmitButton, TextField};
use ui::controllers::{LoginController, LoginFields, LoginForm};
use ui::{use_portal, Destination, FieldRules, FieldStates, Notice, NoticeBanner, SubmitControl, SubmitOutcome};

use super::follow;
use crate::Route;

#[component]
pub fn Login() -> Element {
    let ctx = use_portal();
    let title = Destination::Login.title();
    let nav = use_navigator();
    let mut fields = use_signal(LoginFields::default);
    let mut states = use_signal(FieldStates::default);
    let mut control = use_signal(SubmitControl::for_form::<LoginForm>);
    let mut notice = use_signal(|| Option::<Notice>::None);

    let probe_ctx = ctx.clone();
    use_effect(move || {
        let controller = LoginController::new(probe_ctx.clone());
        if let Some(to) = controller.already_logged_in() {
            nav.replace(Route::from(to));
            return;
        }
        spawn(async move {
            if let Some(warning) = controller.check_database().await {
                notice.set(Some(warning));
            }
        });
    });

    let mut edit = move |field: Field, value: String| {
        match field {
            Field::Email => fields.write().email = value,
            Field::Password => fields.write().password = value,
            _ => {}
        }
        let updates = fields.read().on_input(field);
        states.write().apply(updates);
    };
    let mut leave = move |field: Field| {
        let updates = fields.read().on_blur(field);
        states.write().apply(updates);
    };

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let controller = LoginController::new(ctx.clone());
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
            p { class: "auth-page__subtitle", "Sign in to your account" }

            form {
                class: "auth-form",
                novalidate: true,
                onsubmit: handle_login,

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

                SubmitButton { control }
                NoticeBanner { notice: notice() }
            }

            p {
                class: "auth-page__switch",
                "Don't have an account? "
                Link { to: Route::Register {}, "Register" }
            }
        }
    }
}
