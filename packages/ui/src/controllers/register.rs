//! Registration page controller.

use api::validation::{
    check_confirmation, check_email, check_name, check_password, live_confirmation, live_email,
    live_name, live_password, submit_state,
};
use api::{ApiError, Field, FieldError, FieldState, PortalApi, Registration};
use store::KeyValueStore;

use crate::context::PortalContext;
use crate::form::{self, collect, FieldRules, FormSpec, SubmitLock, SubmitOutcome};
use crate::nav::{Destination, Redirect};
use crate::notice::Notice;

pub const REGISTERED_NOTICE: &str = "User registered successfully! Redirecting to login...";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegisterFields {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterFields {
    fn confirmation_state(&self) -> FieldState {
        live_confirmation(&self.password, &self.confirm_password)
    }
}

impl FieldRules for RegisterFields {
    fn on_input(&self, field: Field) -> Vec<(Field, FieldState)> {
        match field {
            Field::Name => vec![(Field::Name, live_name(&self.name))],
            Field::Email => vec![(Field::Email, live_email(&self.email))],
            Field::Password => {
                let mut updates = vec![(Field::Password, live_password(&self.password))];
                // Typing in the password re-checks an already filled confirmation
                if !self.confirm_password.is_empty() {
                    updates.push((Field::ConfirmPassword, self.confirmation_state()));
                }
                updates
            }
            Field::ConfirmPassword => vec![(Field::ConfirmPassword, self.confirmation_state())],
            _ => Vec::new(),
        }
    }

    fn on_blur(&self, field: Field) -> Vec<(Field, FieldState)> {
        let state = match field {
            Field::Name => submit_state(&check_name(&self.name)),
            Field::Email => submit_state(&check_email(&self.email)),
            Field::Password => submit_state(&check_password(&self.password)),
            Field::ConfirmPassword => {
                submit_state(&check_confirmation(&self.password, &self.confirm_password))
            }
            _ => return Vec::new(),
        };
        vec![(field, state)]
    }
}

pub struct RegisterForm;

impl FormSpec for RegisterForm {
    type Fields = RegisterFields;
    type Payload = Registration;
    type Success = Option<String>;

    const IDLE_LABEL: &'static str = "Register";
    const BUSY_LABEL: &'static str = "Registering...";
    const FALLBACK_ERROR: &'static str = "Error registering user";

    fn validate(&self, fields: &RegisterFields) -> Result<Registration, Vec<FieldError>> {
        let mut errors = Vec::new();
        let name = collect(&mut errors, Field::Name, check_name(&fields.name));
        let email = collect(&mut errors, Field::Email, check_email(&fields.email));
        let password = collect(&mut errors, Field::Password, check_password(&fields.password));
        let confirmed = collect(
            &mut errors,
            Field::ConfirmPassword,
            check_confirmation(&fields.password, &fields.confirm_password),
        );
        match (name, email, password, confirmed) {
            (Some(name), Some(email), Some(()), Some(())) => Ok(Registration {
                name,
                email,
                password: fields.password.clone(),
                confirm_password: fields.confirm_password.clone(),
            }),
            _ => Err(errors),
        }
    }

    async fn send<A: PortalApi>(
        &self,
        api: &A,
        payload: Registration,
    ) -> Result<Option<String>, ApiError> {
        api.register(&payload).await?.into_result()
    }
}

pub struct RegisterController<A, S> {
    ctx: PortalContext<A, S>,
}

impl<A: PortalApi, S: KeyValueStore> RegisterController<A, S> {
    pub fn new(ctx: PortalContext<A, S>) -> Self {
        Self { ctx }
    }

    /// Validate and post the registration; on success, show a notice and go to login.
    pub async fn submit<L: SubmitLock>(
        &self,
        lock: &mut L,
        fields: &RegisterFields,
    ) -> SubmitOutcome<Redirect> {
        let delay_ms = self.ctx.config.redirect.after_register_ms;
        form::run(&RegisterForm, &self.ctx.api, lock, fields)
            .await
            .and_then(|_| {
                tracing::info!("Registered {}", fields.email.trim());
                SubmitOutcome::Succeeded(Redirect::after(
                    Destination::Login,
                    delay_ms,
                    Notice::success(REGISTERED_NOTICE),
                ))
            })
    }

    pub async fn check_database(&self) -> Option<Notice> {
        super::login::check_database(&self.ctx.api).await
    }
}
