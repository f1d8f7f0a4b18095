//! # Validated form submission
//!
//! Every form in the portal follows the same lifecycle:
//!
//! 1. **validate** the current field values (pure, no network);
//! 2. **lock** the submit control (disabled, busy label);
//! 3. **submit** exactly one request;
//! 4. **unlock** the control (original label, enabled) whatever the result;
//! 5. **branch**: hand the success value to the page controller, or turn the
//!    failure into one user-facing message.
//!
//! A form plugs in through [`FormSpec`]; [`run`] drives the lifecycle. The
//! submit control is abstracted as [`SubmitLock`] so the same code drives a
//! plain [`SubmitControl`] in tests and a `Signal<SubmitControl>` in the UI.
//! A submit attempted while the lock is held returns [`SubmitOutcome::Busy`]
//! without touching the network, which is the only duplicate-submit guard.

use std::collections::HashMap;
use std::future::Future;

use api::{ApiError, Field, FieldError, FieldState, PortalApi};
use dioxus::prelude::*;

/// A form: how to validate its fields and how to send the resulting payload.
pub trait FormSpec {
    type Fields;
    type Payload;
    type Success;

    /// Submit label while no request is in flight.
    const IDLE_LABEL: &'static str;
    /// Submit label while the request is in flight.
    const BUSY_LABEL: &'static str;
    /// Shown when the server refuses without a message.
    const FALLBACK_ERROR: &'static str;

    fn validate(&self, fields: &Self::Fields) -> Result<Self::Payload, Vec<FieldError>>;

    fn send<A: PortalApi>(
        &self,
        api: &A,
        payload: Self::Payload,
    ) -> impl Future<Output = Result<Self::Success, ApiError>>;
}

/// Advisory per-field feedback, separate from submit-time validation.
pub trait FieldRules {
    /// States to apply while the user types in `field`. Never blocks input.
    fn on_input(&self, field: Field) -> Vec<(Field, FieldState)>;
    /// States to apply when `field` loses focus.
    fn on_blur(&self, field: Field) -> Vec<(Field, FieldState)>;
}

/// The submit button as seen by [`run`].
pub trait SubmitLock {
    fn is_locked(&self) -> bool;
    fn lock(&mut self, busy_label: &'static str);
    fn unlock(&mut self);
}

/// Label and enabled state of a submit button.
#[derive(Clone, Debug, PartialEq)]
pub struct SubmitControl {
    idle_label: &'static str,
    label: &'static str,
    disabled: bool,
}

impl SubmitControl {
    pub fn new(idle_label: &'static str) -> Self {
        Self {
            idle_label,
            label: idle_label,
            disabled: false,
        }
    }

    pub fn for_form<F: FormSpec>() -> Self {
        Self::new(F::IDLE_LABEL)
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn disabled(&self) -> bool {
        self.disabled
    }
}

impl SubmitLock for SubmitControl {
    fn is_locked(&self) -> bool {
        self.disabled
    }

    fn lock(&mut self, busy_label: &'static str) {
        self.disabled = true;
        self.label = busy_label;
    }

    fn unlock(&mut self) {
        self.disabled = false;
        self.label = self.idle_label;
    }
}

impl SubmitLock for Signal<SubmitControl> {
    fn is_locked(&self) -> bool {
        self.read().is_locked()
    }

    fn lock(&mut self, busy_label: &'static str) {
        self.write().lock(busy_label);
    }

    fn unlock(&mut self) {
        self.write().unlock();
    }
}

/// Result of one user-initiated submit.
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitOutcome<T> {
    /// A request was already in flight; nothing happened.
    Busy,
    /// Validation failed; nothing was sent.
    Invalid(Vec<FieldError>),
    /// The request failed; the message is ready for display.
    Failed(String),
    Succeeded(T),
}

impl<T> SubmitOutcome<T> {
    pub fn and_then<U>(self, f: impl FnOnce(T) -> SubmitOutcome<U>) -> SubmitOutcome<U> {
        match self {
            Self::Busy => SubmitOutcome::Busy,
            Self::Invalid(errors) => SubmitOutcome::Invalid(errors),
            Self::Failed(message) => SubmitOutcome::Failed(message),
            Self::Succeeded(value) => f(value),
        }
    }
}

/// Drive `form` through validate → lock → submit → unlock.
pub async fn run<F, A, L>(
    form: &F,
    api: &A,
    lock: &mut L,
    fields: &F::Fields,
) -> SubmitOutcome<F::Success>
where
    F: FormSpec,
    A: PortalApi,
    L: SubmitLock,
{
    if lock.is_locked() {
        tracing::debug!("Ignoring submit while a request is in flight");
        return SubmitOutcome::Busy;
    }

    let payload = match form.validate(fields) {
        Ok(payload) => payload,
        Err(errors) => return SubmitOutcome::Invalid(errors),
    };

    lock.lock(F::BUSY_LABEL);
    let result = form.send(api, payload).await;
    lock.unlock();

    match result {
        Ok(value) => SubmitOutcome::Succeeded(value),
        Err(e) => {
            tracing::warn!("Form submission failed: {}", e);
            SubmitOutcome::Failed(e.user_message(F::FALLBACK_ERROR))
        }
    }
}

/// Current state of every field of one form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldStates {
    states: HashMap<Field, FieldState>,
}

impl FieldStates {
    pub fn get(&self, field: Field) -> FieldState {
        self.states.get(&field).cloned().unwrap_or_default()
    }

    pub fn set(&mut self, field: Field, state: FieldState) {
        self.states.insert(field, state);
    }

    pub fn apply(&mut self, updates: Vec<(Field, FieldState)>) {
        for (field, state) in updates {
            self.set(field, state);
        }
    }

    /// Mark every field named in `errors` invalid (first error per field wins).
    pub fn show_errors(&mut self, errors: &[FieldError]) {
        for e in errors.iter().rev() {
            self.set(e.field, FieldState::Invalid(e.error.clone()));
        }
    }

    pub fn message(&self, field: Field) -> Option<String> {
        self.states.get(&field).and_then(FieldState::message)
    }

    pub fn has_errors(&self) -> bool {
        self.states.values().any(FieldState::is_invalid)
    }
}

/// Collect a validation result into `errors`, returning the value if it passed.
pub(crate) fn collect<T>(
    errors: &mut Vec<FieldError>,
    field: Field,
    result: Result<T, api::ValidationError>,
) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(error) => {
            errors.push(FieldError::new(field, error));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Call, MockApi};
    use api::{Ack, ValidationError};

    /// Minimal form: one required field, sent as an id to the delete endpoint.
    struct EchoForm;

    impl FormSpec for EchoForm {
        type Fields = String;
        type Payload = String;
        type Success = Option<String>;

        const IDLE_LABEL: &'static str = "Send";
        const BUSY_LABEL: &'static str = "Sending...";
        const FALLBACK_ERROR: &'static str = "Could not send";

        fn validate(&self, fields: &String) -> Result<String, Vec<FieldError>> {
            let mut errors = Vec::new();
            let name = collect(&mut errors, Field::Name, api::validation::check_name(fields));
            match name {
                Some(name) if errors.is_empty() => Ok(name),
                _ => Err(errors),
            }
        }

        async fn send<A: PortalApi>(&self, api: &A, payload: String) -> Result<Option<String>, ApiError> {
            api.delete_product(payload.len() as i64).await?.into_result()
        }
    }

    #[tokio::test]
    async fn test_invalid_fields_never_reach_network() {
        let api = MockApi::default();
        let mut control = SubmitControl::new("Send");

        let outcome = run(&EchoForm, &api, &mut control, &"A".to_string()).await;

        assert_eq!(
            outcome,
            SubmitOutcome::Invalid(vec![FieldError::new(
                Field::Name,
                ValidationError::NameTooShort
            )])
        );
        assert!(api.calls().is_empty());
        assert!(!control.disabled());
    }

    #[tokio::test]
    async fn test_success_unlocks_control() {
        let api = MockApi::default();
        let mut control = SubmitControl::for_form::<EchoForm>();

        let outcome = run(&EchoForm, &api, &mut control, &"Ana".to_string()).await;

        assert_eq!(outcome, SubmitOutcome::Succeeded(None));
        assert_eq!(api.calls(), vec![Call::DeleteProduct(3)]);
        assert!(!control.disabled());
        assert_eq!(control.label(), "Send");
    }

    #[tokio::test]
    async fn test_locked_control_blocks_duplicate_submit() {
        let api = MockApi::default();
        let mut control = SubmitControl::new("Send");
        control.lock("Sending...");

        let outcome = run(&EchoForm, &api, &mut control, &"Ana".to_string()).await;

        assert_eq!(outcome, SubmitOutcome::Busy);
        assert!(api.calls().is_empty());
        // The in-flight request still owns the control
        assert!(control.disabled());
        assert_eq!(control.label(), "Sending...");
    }

    #[tokio::test]
    async fn test_failures_map_to_messages() {
        let mut control = SubmitControl::new("Send");

        let refused = MockApi {
            delete: Ok(Ack::refused("Duplicate entry")),
            ..MockApi::default()
        };
        let outcome = run(&EchoForm, &refused, &mut control, &"Ana".to_string()).await;
        assert_eq!(outcome, SubmitOutcome::Failed("Duplicate entry".to_string()));

        let silent = MockApi {
            delete: Ok(Ack::default()),
            ..MockApi::default()
        };
        let outcome = run(&EchoForm, &silent, &mut control, &"Ana".to_string()).await;
        assert_eq!(outcome, SubmitOutcome::Failed("Could not send".to_string()));

        let offline = MockApi {
            delete: Err(ApiError::Network("refused".to_string())),
            ..MockApi::default()
        };
        let outcome = run(&EchoForm, &offline, &mut control, &"Ana".to_string()).await;
        assert_eq!(outcome, SubmitOutcome::Failed(api::CONNECTION_ERROR.to_string()));
        assert!(!control.disabled());
    }

    #[test]
    fn test_field_states_first_error_wins() {
        let mut states = FieldStates::default();
        states.show_errors(&[
            FieldError::new(Field::Password, ValidationError::PasswordTooShort),
            FieldError::new(Field::Password, ValidationError::PasswordContainsSpace),
        ]);
        assert_eq!(
            states.message(Field::Password).as_deref(),
            Some("Password must be at least 8 characters")
        );
        assert!(states.has_errors());
        assert_eq!(states.get(Field::Email), FieldState::Empty);
    }
}
