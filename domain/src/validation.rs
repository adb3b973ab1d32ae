use thiserror::Error;
use validator::ValidateEmail;

use crate::forms::{SignInForm, SignUpForm};

/// One variant per form rule. The `Display` text is what the screen shows.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please Enter your Name")]
    NameMissing,

    #[error("Please Enter your Email")]
    EmailMissing,

    #[error("Please Enter a valid Email")]
    EmailInvalid,

    #[error("Please Enter your Password")]
    PasswordMissing,

    #[error("Please Confirm your Password")]
    ConfirmPasswordMissing,

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Please Select a Profile Image")]
    ImageMissing,
}

const MAX_LOCAL_PART: usize = 256;
const MAX_FIRST_LABEL: usize = 65;
const MAX_LABEL: usize = 26;

/// Address check used by both screens: a syntactically valid address that
/// also fits the mobile platform's pattern. The local part is limited to
/// letters, digits and `+._%-`. The domain is two or more dot-separated
/// labels of letters, digits and `-`, each starting with a letter or digit.
/// IP literals are rejected.
pub fn is_valid_email(email: &str) -> bool {
    if !email.validate_email() {
        return false;
    }

    email
        .split_once('@')
        .is_some_and(|(local, domain)| is_platform_local_part(local) && is_platform_domain(domain))
}

fn is_platform_local_part(local: &str) -> bool {
    (1..=MAX_LOCAL_PART).contains(&local.len())
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '.' | '_' | '%' | '-'))
}

fn is_platform_label(label: &str, max_len: usize) -> bool {
    let mut chars = label.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphanumeric())
        && label.len() <= max_len
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '-')
}

fn is_platform_domain(domain: &str) -> bool {
    let mut labels = domain.split('.');
    let first_ok = labels
        .next()
        .is_some_and(|label| is_platform_label(label, MAX_FIRST_LABEL));

    let mut rest = 0;
    let rest_ok = labels.all(|label| {
        rest += 1;
        is_platform_label(label, MAX_LABEL)
    });

    first_ok && rest_ok && rest > 0
}

fn check_email(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() {
        return Err(ValidationError::EmailMissing);
    }
    if !is_valid_email(email) {
        return Err(ValidationError::EmailInvalid);
    }
    Ok(())
}

/// Checks run in a fixed order; only the first violated rule is reported.
pub fn validate_sign_in(form: &SignInForm) -> Result<(), ValidationError> {
    check_email(&form.email)?;

    if form.password().is_empty() {
        return Err(ValidationError::PasswordMissing);
    }

    Ok(())
}

/// Checks run in a fixed order; only the first violated rule is reported.
pub fn validate_sign_up(form: &SignUpForm) -> Result<(), ValidationError> {
    if form.name.is_empty() {
        return Err(ValidationError::NameMissing);
    }

    check_email(&form.email)?;

    if form.password().is_empty() {
        return Err(ValidationError::PasswordMissing);
    }
    if form.confirm_password().is_empty() {
        return Err(ValidationError::ConfirmPasswordMissing);
    }
    if form.password() != form.confirm_password() {
        return Err(ValidationError::PasswordMismatch);
    }
    if form.avatar.is_none() {
        return Err(ValidationError::ImageMissing);
    }

    Ok(())
}
