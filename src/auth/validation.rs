//! Stateless signup validation

use regex::Regex;

/// Validate signup fields, accumulating every violation so the client sees
/// all of them at once. An empty result means the input is acceptable.
pub fn validate_signup(name: &str, email: &str, password: &str) -> Vec<String> {
    let mut errors = Vec::new();

    if name.chars().count() < 2 {
        errors.push("Name must be at least 2 characters long".to_string());
    }

    // This regex is a compile-time constant, panicking is acceptable here
    // as it indicates a programming error in the codebase, not a runtime issue
    let email_re = Regex::new(r"^\S+@\S+\.\S+$")
        .expect("Invalid regex pattern - this is a bug in the codebase");
    if !email_re.is_match(email) {
        errors.push("Invalid email format".to_string());
    }

    if password.chars().count() < 6 {
        errors.push("Password must be at least 6 characters long".to_string());
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_signup() {
        assert!(validate_signup("Alice", "a@b.com", "secret1").is_empty());
    }

    #[test]
    fn test_boundary_lengths_pass() {
        // exactly 2-char name and 6-char password are acceptable
        assert!(validate_signup("Al", "a@b.com", "secret").is_empty());
    }

    #[test]
    fn test_short_name() {
        let errors = validate_signup("A", "a@b.com", "secret1");
        assert_eq!(errors, vec!["Name must be at least 2 characters long"]);
    }

    #[test]
    fn test_short_password() {
        let errors = validate_signup("Alice", "a@b.com", "short");
        assert_eq!(
            errors,
            vec!["Password must be at least 6 characters long"]
        );
    }

    #[test]
    fn test_bad_emails() {
        for email in ["", "plain", "a@b", "no-at.com", "spa ce@b.com", "a@ b.com"] {
            let errors = validate_signup("Alice", email, "secret1");
            assert_eq!(errors, vec!["Invalid email format"], "email: {:?}", email);
        }
    }

    #[test]
    fn test_errors_accumulate() {
        let errors = validate_signup("A", "bad", "short");
        assert_eq!(errors.len(), 3);
    }
}
