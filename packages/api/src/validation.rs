//! # Field validation rules
//!
//! Pure functions over raw input strings. Nothing here touches the network or
//! the DOM; the UI calls them both for advisory live feedback (`live_*`, which
//! stay quiet on empty input) and for the authoritative check at submit time
//! (`check_*` / `parse_*`, which reject empty input).
//!
//! | Rule | Accepts |
//! |------|---------|
//! | email | trimmed value matching `^[^\s@]+@[^\s@]+\.[^\s@]+$` |
//! | password | non-empty, at least [`MIN_PASSWORD_LENGTH`] characters, no space |
//! | name | trimmed, at least [`MIN_NAME_LENGTH`] characters |
//! | confirmation | non-empty and equal to the password |
//! | price | a finite number ≥ 0 |
//! | quantity | a whole number ≥ 0 |

use std::sync::LazyLock;

use regex::Regex;

pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const MIN_NAME_LENGTH: usize = 2;

#[allow(clippy::expect_used)] // good regex, it doesn't panic
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("static regex should not panic")
});

/// Form inputs known to the portal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Password,
    ConfirmPassword,
    ProductName,
    Price,
    Quantity,
    Category,
    Image,
}

/// A single rule violation. `Display` is the message shown next to the field.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Name is required")]
    NameRequired,
    #[error("Name must be at least {} characters", MIN_NAME_LENGTH)]
    NameTooShort,
    #[error("Email is required")]
    EmailRequired,
    #[error("Invalid email")]
    InvalidEmail,
    #[error("Password is required")]
    PasswordRequired,
    #[error("Password must be at least {} characters", MIN_PASSWORD_LENGTH)]
    PasswordTooShort,
    #[error("Password cannot contain spaces")]
    PasswordContainsSpace,
    #[error("Password confirmation is required")]
    ConfirmationRequired,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Product name is required")]
    ProductNameRequired,
    #[error("Please enter a valid price")]
    InvalidPrice,
    #[error("Please enter a valid quantity")]
    InvalidQuantity,
    #[error("Category is required")]
    CategoryRequired,
    #[error("Product image is required")]
    ImageRequired,
}

/// A violation attached to the input it belongs to.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{error}")]
pub struct FieldError {
    pub field: Field,
    pub error: ValidationError,
}

impl FieldError {
    pub fn new(field: Field, error: ValidationError) -> Self {
        Self { field, error }
    }
}

/// Transient per-input validity, reset on every input/blur event.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FieldState {
    #[default]
    Empty,
    Invalid(ValidationError),
    Valid,
}

impl FieldState {
    fn from_check<T>(raw: &str, result: Result<T, ValidationError>) -> Self {
        if raw.trim().is_empty() {
            return Self::Empty;
        }
        match result {
            Ok(_) => Self::Valid,
            Err(e) => Self::Invalid(e),
        }
    }

    /// Error message to render next to the input, if any.
    pub fn message(&self) -> Option<String> {
        match self {
            Self::Invalid(e) => Some(e.to_string()),
            _ => None,
        }
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Returns the normalised (trimmed, lowercased) address.
pub fn check_email(raw: &str) -> Result<String, ValidationError> {
    let email = raw.trim();
    if email.is_empty() {
        return Err(ValidationError::EmailRequired);
    }
    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(email.to_lowercase())
}

pub fn check_password(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        return Err(ValidationError::PasswordRequired);
    }
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ValidationError::PasswordTooShort);
    }
    if password.contains(' ') {
        return Err(ValidationError::PasswordContainsSpace);
    }
    Ok(())
}

/// Returns the trimmed name.
pub fn check_name(raw: &str) -> Result<String, ValidationError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(ValidationError::NameRequired);
    }
    if name.chars().count() < MIN_NAME_LENGTH {
        return Err(ValidationError::NameTooShort);
    }
    Ok(name.to_string())
}

pub fn check_confirmation(password: &str, confirmation: &str) -> Result<(), ValidationError> {
    if confirmation.is_empty() {
        return Err(ValidationError::ConfirmationRequired);
    }
    if confirmation != password {
        return Err(ValidationError::PasswordMismatch);
    }
    Ok(())
}

pub fn check_product_name(raw: &str) -> Result<String, ValidationError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(ValidationError::ProductNameRequired);
    }
    Ok(name.to_string())
}

pub fn check_category(raw: &str) -> Result<String, ValidationError> {
    let category = raw.trim();
    if category.is_empty() {
        return Err(ValidationError::CategoryRequired);
    }
    Ok(category.to_string())
}

pub fn parse_price(raw: &str) -> Result<f64, ValidationError> {
    match raw.trim().parse::<f64>() {
        Ok(price) if price.is_finite() && price >= 0.0 => Ok(price),
        _ => Err(ValidationError::InvalidPrice),
    }
}

pub fn parse_quantity(raw: &str) -> Result<u32, ValidationError> {
    raw.trim()
        .parse::<u32>()
        .map_err(|_| ValidationError::InvalidQuantity)
}

/// Live clamp for numeric inputs: a value that parses as negative becomes `"0"`,
/// anything else is left exactly as typed.
pub fn clamp_non_negative(raw: &str) -> String {
    match raw.trim().parse::<f64>() {
        Ok(value) if value < 0.0 => "0".to_string(),
        _ => raw.to_string(),
    }
}

pub fn live_email(raw: &str) -> FieldState {
    FieldState::from_check(raw, check_email(raw))
}

pub fn live_password(raw: &str) -> FieldState {
    if raw.is_empty() {
        return FieldState::Empty;
    }
    submit_state(&check_password(raw))
}

pub fn live_name(raw: &str) -> FieldState {
    FieldState::from_check(raw, check_name(raw))
}

pub fn live_confirmation(password: &str, confirmation: &str) -> FieldState {
    if confirmation.is_empty() {
        return FieldState::Empty;
    }
    submit_state(&check_confirmation(password, confirmation))
}

/// Submit-time state of a field: empty input counts as a violation here.
pub fn submit_state<T>(result: &Result<T, ValidationError>) -> FieldState {
    match result {
        Ok(_) => FieldState::Valid,
        Err(e) => FieldState::Invalid(e.clone()),
    }
}
