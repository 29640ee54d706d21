//! Registration validation

use validator::ValidateEmail;

use crate::domain::validation::ValidationReport;

const MIN_PASSWORD_LENGTH: usize = 6;

/// Validate a registration request.
///
/// All checks run so every violation is reported in one pass:
/// - email required and well-formed
/// - password required, at least 6 characters, and containing an
///   uppercase letter, a lowercase letter, and a digit
///
/// The role is a closed enum rejected at the request boundary, so it
/// never reaches this function in an invalid state.
pub fn validate_registration(email: &str, password: &str) -> ValidationReport {
    let mut errors = Vec::new();

    if email.trim().is_empty() {
        errors.push("Email is required".to_string());
    } else if !email.validate_email() {
        errors.push("Please enter a valid email address".to_string());
    }

    if password.is_empty() {
        errors.push("Password is required".to_string());
    } else {
        if password.len() < MIN_PASSWORD_LENGTH {
            errors.push("Password must be at least 6 characters".to_string());
        }

        let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
        let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
        let has_digit = password.chars().any(|c| c.is_ascii_digit());

        if !(has_upper && has_lower && has_digit) {
            errors.push(
                "Password must contain at least one uppercase letter, one lowercase letter, and one number"
                    .to_string(),
            );
        }
    }

    ValidationReport::new(errors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_registration() {
        let report = validate_registration("jo@example.com", "Abc123!");
        assert!(report.is_valid());
        assert!(report.errors.is_empty());
    }

    #[test]
    fn test_missing_email() {
        let report = validate_registration("", "Abc123!");
        assert_eq!(report.errors, vec!["Email is required"]);
    }

    #[test]
    fn test_blank_email_counts_as_missing() {
        let report = validate_registration("   ", "Abc123!");
        assert_eq!(report.errors, vec!["Email is required"]);
    }

    #[test]
    fn test_malformed_email() {
        let report = validate_registration("not-an-email", "Abc123!");
        assert_eq!(report.errors, vec!["Please enter a valid email address"]);
    }

    #[test]
    fn test_short_password() {
        let report = validate_registration("jo@example.com", "Ab1");
        assert_eq!(report.errors, vec!["Password must be at least 6 characters"]);
    }

    #[test]
    fn test_password_missing_character_classes() {
        let report = validate_registration("jo@example.com", "abcdef");
        assert_eq!(
            report.errors,
            vec![
                "Password must contain at least one uppercase letter, one lowercase letter, and one number"
            ]
        );
    }

    #[test]
    fn test_all_violations_reported_in_order() {
        let report = validate_registration("nope", "ab1");
        assert_eq!(
            report.errors,
            vec![
                "Please enter a valid email address",
                "Password must be at least 6 characters",
                "Password must contain at least one uppercase letter, one lowercase letter, and one number",
            ]
        );
    }

    #[test]
    fn test_missing_password_reports_single_error() {
        let report = validate_registration("jo@example.com", "");
        assert_eq!(report.errors, vec!["Password is required"]);
    }
}
