//! Login page controller.

use api::validation::{check_email, check_password, live_email, live_password, submit_state};
use api::{ApiError, Credentials, Field, FieldError, FieldState, PortalApi, UserSession};
use store::KeyValueStore;

use crate::context::PortalContext;
use crate::form::{self, collect, FieldRules, FormSpec, SubmitLock, SubmitOutcome};
use crate::nav::{Destination, Redirect};
use crate::notice::Notice;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginFields {
    pub email: String,
    pub password: String,
}

impl FieldRules for LoginFields {
    fn on_input(&self, field: Field) -> Vec<(Field, FieldState)> {
        match field {
            Field::Email => vec![(Field::Email, live_email(&self.email))],
            Field::Password => vec![(Field::Password, live_password(&self.password))],
            _ => Vec::new(),
        }
    }

    fn on_blur(&self, field: Field) -> Vec<(Field, FieldState)> {
        match field {
            Field::Email => vec![(Field::Email, submit_state(&check_email(&self.email)))],
            Field::Password => vec![(
                Field::Password,
                submit_state(&check_password(&self.password)),
            )],
            _ => Vec::new(),
        }
    }
}

pub struct LoginForm;

impl FormSpec for LoginForm {
    type Fields = LoginFields;
    type Payload = Credentials;
    type Success = UserSession;

    const IDLE_LABEL: &'static str = "Login";
    const BUSY_LABEL: &'static str = "Signing in...";
    const FALLBACK_ERROR: &'static str = "Error signing in";

    fn validate(&self, fields: &LoginFields) -> Result<Credentials, Vec<FieldError>> {
        let mut errors = Vec::new();
        let email = collect(&mut errors, Field::Email, check_email(&fields.email));
        let password = collect(&mut errors, Field::Password, check_password(&fields.password));
        match (email, password) {
            (Some(email), Some(())) => Ok(Credentials {
                email,
                password: fields.password.clone(),
            }),
            _ => Err(errors),
        }
    }

    async fn send<A: PortalApi>(
        &self,
        api: &A,
        payload: Credentials,
    ) -> Result<UserSession, ApiError> {
        api.validate_user(&payload).await?.into_user()
    }
}

pub struct LoginController<A, S> {
    ctx: PortalContext<A, S>,
}

impl<A: PortalApi, S: KeyValueStore> LoginController<A, S> {
    pub fn new(ctx: PortalContext<A, S>) -> Self {
        Self { ctx }
    }

    /// Where to send a visitor who already has a session.
    pub fn already_logged_in(&self) -> Option<Destination> {
        self.ctx.current_user().map(|_| Destination::Overview)
    }

    /// Validate, post the credentials and persist the returned profile.
    pub async fn submit<L: SubmitLock>(
        &self,
        lock: &mut L,
        fields: &LoginFields,
    ) -> SubmitOutcome<Redirect> {
        form::run(&LoginForm, &self.ctx.api, lock, fields)
            .await
            .and_then(|user| match self.ctx.session.save(&user) {
                Ok(()) => {
                    tracing::info!("Logged in as {}", user.email);
                    SubmitOutcome::Succeeded(Redirect::now(Destination::Overview))
                }
                Err(e) => {
                    tracing::error!("Failed to persist session: {}", e);
                    SubmitOutcome::Failed("Could not save your session".to_string())
                }
            })
    }

    /// Probe the backend on page load. Returns a notice only when something is wrong.
    pub async fn check_database(&self) -> Option<Notice> {
        check_database(&self.ctx.api).await
    }
}

/// Shared by the login and registration pages.
pub(crate) async fn check_database<A: PortalApi>(api: &A) -> Option<Notice> {
    match api.check_db().await {
        Ok(status) if status.success => {
            tracing::info!(
                "Database connected: {}",
                status.message.as_deref().unwrap_or("ok")
            );
            None
        }
        Ok(status) => {
            tracing::warn!(
                "Database problem: {}",
                status.message.as_deref().unwrap_or("unknown")
            );
            Some(Notice::info("Warning: database connection problem"))
        }
        Err(ApiError::Network(e)) => {
            tracing::warn!("Could not reach the server: {}", e);
            Some(Notice::info("Warning: the server is not reachable"))
        }
        Err(e) => {
            tracing::warn!("Database check failed: {}", e);
            Some(Notice::info("Warning: database connection problem"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::SubmitControl;
    use crate::testing::{context, Call, MockApi};
    use api::{LoginResponse, ValidationError};

    fn fields(email: &str, password: &str) -> LoginFields {
        LoginFields {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_short_password_stays_local() {
        let api = MockApi::default();
        let controller = LoginController::new(context(api.clone()));
        let mut control = SubmitControl::for_form::<LoginForm>();

        let outcome = controller
            .submit(&mut control, &fields("a@b.com", "short"))
            .await;

        assert_eq!(
            outcome,
            SubmitOutcome::Invalid(vec![FieldError::new(
                Field::Password,
                ValidationError::PasswordTooShort
            )])
        );
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_valid_login_posts_once_and_persists() {
        let api = MockApi::default();
        let ctx = context(api.clone());
        let controller = LoginController::new(ctx.clone());
        let mut control = SubmitControl::for_form::<LoginForm>();

        let outcome = controller
            .submit(&mut control, &fields(" A@B.com ", "longenough1"))
            .await;

        assert_eq!(
            outcome,
            SubmitOutcome::Succeeded(Redirect::now(Destination::Overview))
        );
        // Email is normalised before it leaves the client
        assert_eq!(api.calls(), vec![Call::ValidateUser("a@b.com".to_string())]);
        assert_eq!(ctx.current_user().unwrap().name, "Ana");
        assert_eq!(controller.already_logged_in(), Some(Destination::Overview));
    }

    #[tokio::test]
    async fn test_refused_login_shows_server_message() {
        let api = MockApi {
            login: Ok(LoginResponse {
                valid: false,
                user: None,
                message: Some("Invalid email or password".to_string()),
            }),
            ..MockApi::default()
        };
        let ctx = context(api.clone());
        let controller = LoginController::new(ctx.clone());
        let mut control = SubmitControl::for_form::<LoginForm>();

        let outcome = controller
            .submit(&mut control, &fields("a@b.com", "longenough1"))
            .await;

        assert_eq!(
            outcome,
            SubmitOutcome::Failed("Invalid email or password".to_string())
        );
        assert!(ctx.current_user().is_none());
        assert!(!control.disabled());
        assert_eq!(control.label(), "Login");
    }

    #[tokio::test]
    async fn test_database_probe() {
        let healthy = MockApi::default();
        let controller = LoginController::new(context(healthy.clone()));
        assert!(controller.check_database().await.is_none());
        assert_eq!(healthy.count(&Call::CheckDb), 1);

        let offline = MockApi {
            db: Err(ApiError::Network("connection refused".to_string())),
            ..MockApi::default()
        };
        let controller = LoginController::new(context(offline));
        let notice = controller.check_database().await.unwrap();
        assert_eq!(notice.kind, crate::notice::NoticeKind::Info);
    }

    #[test]
    fn test_live_and_blur_rules() {
        let empty = fields("", "");
        assert_eq!(empty.on_input(Field::Email), vec![(Field::Email, FieldState::Empty)]);
        assert_eq!(
            empty.on_blur(Field::Email),
            vec![(
                Field::Email,
                FieldState::Invalid(ValidationError::EmailRequired)
            )]
        );

        let typed = fields("a@b", "longenough1");
        assert_eq!(
            typed.on_input(Field::Email),
            vec![(Field::Email, FieldState::Invalid(ValidationError::InvalidEmail))]
        );
        assert_eq!(
            typed.on_input(Field::Password),
            vec![(Field::Password, FieldState::Valid)]
        );
    }
}
