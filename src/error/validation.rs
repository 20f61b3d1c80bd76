//! Local input checks that run before any request is sent.

use thiserror::Error;

/// Required OTP length.
pub const OTP_LENGTH: usize = 6;

/// A local validation failure. The display text is what the user sees.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter your username or email and password.")]
    MissingCredentials,

    #[error("Please fill in all fields.")]
    MissingFields,

    #[error("Passwords do not match.")]
    PasswordMismatch,

    #[error("Please enter your email.")]
    MissingEmail,

    #[error("The code must be 6 digits.")]
    InvalidOtp,

    #[error("{field} must be a number.")]
    InvalidNumber { field: &'static str },
}

/// True when the value is empty or whitespace only.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Login needs both an identifier and a password.
pub fn check_login(identifier: &str, password: &str) -> Result<(), ValidationError> {
    if is_blank(identifier) || is_blank(password) {
        return Err(ValidationError::MissingCredentials);
    }
    Ok(())
}

/// Registration needs every field, and the confirmation must match.
pub fn check_register(
    email: &str,
    username: &str,
    phone: &str,
    password: &str,
    confirmation: &str,
) -> Result<(), ValidationError> {
    if [email, username, phone, password, confirmation]
        .iter()
        .any(|value| is_blank(value))
    {
        return Err(ValidationError::MissingFields);
    }
    if password != confirmation {
        return Err(ValidationError::PasswordMismatch);
    }
    Ok(())
}

/// Activation needs an email and exactly six ASCII digits.
pub fn check_otp(email: &str, otp: &str) -> Result<(), ValidationError> {
    if is_blank(email) {
        return Err(ValidationError::MissingEmail);
    }
    if otp.len() != OTP_LENGTH || !otp.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::InvalidOtp);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_login() {
        assert!(check_login("maria", "pw").is_ok());
        assert_eq!(
            check_login("", "pw"),
            Err(ValidationError::MissingCredentials)
        );
        assert_eq!(
            check_login("maria", "   "),
            Err(ValidationError::MissingCredentials)
        );
    }

    #[test]
    fn test_check_register_blank_field() {
        assert_eq!(
            check_register("a@b.c", "", "555", "pw", "pw"),
            Err(ValidationError::MissingFields)
        );
    }

    #[test]
    fn test_check_register_mismatch() {
        assert_eq!(
            check_register("a@b.c", "ana", "555", "pw1", "pw2"),
            Err(ValidationError::PasswordMismatch)
        );
        assert!(check_register("a@b.c", "ana", "555", "pw", "pw").is_ok());
    }

    #[test]
    fn test_check_otp() {
        assert!(check_otp("a@b.c", "123456").is_ok());
        assert_eq!(check_otp("", "123456"), Err(ValidationError::MissingEmail));
        assert_eq!(check_otp("a@b.c", "12345"), Err(ValidationError::InvalidOtp));
        assert_eq!(check_otp("a@b.c", "1234567"), Err(ValidationError::InvalidOtp));
        assert_eq!(check_otp("a@b.c", "12a456"), Err(ValidationError::InvalidOtp));
        // Non-ASCII digits are rejected too
        assert_eq!(check_otp("a@b.c", "١٢٣٤٥٦"), Err(ValidationError::InvalidOtp));
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            ValidationError::PasswordMismatch.to_string(),
            "Passwords do not match."
        );
        assert_eq!(
            ValidationError::InvalidNumber { field: "Stock" }.to_string(),
            "Stock must be a number."
        );
    }
}
