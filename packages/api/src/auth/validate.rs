//! Pure validation predicates for signup input.
//!
//! Both checks are side-effect-free and return a plain bool; the signup flow
//! turns a `false` into its single inline error message.

/// Structural email check: one `@`, a non-empty local part, and a dotted
/// domain with non-empty labels. No whitespace anywhere.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.splitn(2, '@');
    let (Some(local), Some(domain)) = (parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain.contains('.') && domain.split('.').all(|label| !label.is_empty())
}

/// Minimum password strength: at least 8 characters, containing at least one
/// letter and one digit.
pub fn is_valid_password(password: &str) -> bool {
    password.chars().count() >= 8
        && password.chars().any(|c| c.is_alphabetic())
        && password.chars().any(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("a@x.com"));
        assert!(is_valid_email("first.last@mail.example.org"));
        assert!(is_valid_email("user+tag@sub.domain.io"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("plainaddress"));
        assert!(!is_valid_email("@no-local.com"));
        assert!(!is_valid_email("no-domain@"));
        assert!(!is_valid_email("no-dot@domain"));
        assert!(!is_valid_email("two@@at.com"));
        assert!(!is_valid_email("trailing.dot@domain."));
        assert!(!is_valid_email("space in@mail.com"));
    }

    #[test]
    fn test_password_strength() {
        assert!(is_valid_password("P@ssw0rd!"));
        assert!(is_valid_password("abcdefg1"));
        assert!(!is_valid_password("short1"));
        assert!(!is_valid_password("nodigitshere"));
        assert!(!is_valid_password("12345678"));
        assert!(!is_valid_password(""));
    }
}
