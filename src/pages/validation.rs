use crate::error::FormError;

pub const MIN_PASSWORD_LEN: usize = 5;
pub const MIN_TITLE_LEN: usize = 3;
pub const MIN_DESCRIPTION_LEN: usize = 5;

fn required(field: &'static str, value: &str) -> Result<(), FormError> {
    if value.trim().is_empty() {
        Err(FormError::MissingField(field))
    } else {
        Ok(())
    }
}

fn min_len(field: &'static str, value: &str, min: usize) -> Result<(), FormError> {
    if value.trim().chars().count() < min {
        Err(FormError::TooShort { field, min })
    } else {
        Ok(())
    }
}

/// Loose shape check: `local@domain.tld`, no whitespace.
pub fn validate_email(email: &str) -> Result<(), FormError> {
    let email = email.trim();
    required("Email", email)?;
    if email.chars().any(char::is_whitespace) {
        return Err(FormError::InvalidEmail);
    }
    let Some((local, domain)) = email.split_once('@') else {
        return Err(FormError::InvalidEmail);
    };
    let domain_ok = domain
        .split_once('.')
        .is_some_and(|(name, tld)| !name.is_empty() && !tld.is_empty() && !tld.ends_with('.'));
    if local.is_empty() || domain.contains('@') || !domain_ok {
        return Err(FormError::InvalidEmail);
    }
    Ok(())
}

pub fn validate_login(email: &str, password: &str) -> Result<(), FormError> {
    validate_email(email)?;
    required("Password", password)
}

pub fn validate_sign_up(
    name: &str,
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<(), FormError> {
    required("Name", name)?;
    validate_email(email)?;
    required("Password", password)?;
    min_len("Password", password, MIN_PASSWORD_LEN)?;
    if password != confirm {
        return Err(FormError::PasswordMismatch);
    }
    Ok(())
}

pub fn validate_note(title: &str, description: &str) -> Result<(), FormError> {
    required("Title", title)?;
    min_len("Title", title, MIN_TITLE_LEN)?;
    required("Description", description)?;
    min_len("Description", description, MIN_DESCRIPTION_LEN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        for email in ["a@b.co", "first.last@example.com", "  padded@mail.org "] {
            assert_eq!(validate_email(email), Ok(()), "{email}");
        }
    }

    #[test]
    fn test_invalid_emails() {
        assert_eq!(validate_email(""), Err(FormError::MissingField("Email")));
        for email in ["plain", "@example.com", "a@", "a@b", "a@.com", "a@b.", "a b@c.d", "a@b@c.d"] {
            assert_eq!(validate_email(email), Err(FormError::InvalidEmail), "{email}");
        }
    }

    #[test]
    fn test_login_requires_password() {
        assert_eq!(
            validate_login("user@example.com", "   "),
            Err(FormError::MissingField("Password"))
        );
        assert_eq!(validate_login("user@example.com", "secret"), Ok(()));
    }

    #[test]
    fn test_sign_up_checks_in_order() {
        assert_eq!(
            validate_sign_up("", "bad", "", ""),
            Err(FormError::MissingField("Name"))
        );
        assert_eq!(
            validate_sign_up("Ana", "bad", "", ""),
            Err(FormError::InvalidEmail)
        );
        assert_eq!(
            validate_sign_up("Ana", "ana@example.com", "abc", "abc"),
            Err(FormError::TooShort {
                field: "Password",
                min: MIN_PASSWORD_LEN
            })
        );
        assert_eq!(
            validate_sign_up("Ana", "ana@example.com", "hunter22", "hunter23"),
            Err(FormError::PasswordMismatch)
        );
        assert_eq!(
            validate_sign_up("Ana", "ana@example.com", "hunter22", "hunter22"),
            Ok(())
        );
    }

    #[test]
    fn test_note_validation() {
        assert_eq!(validate_note(" ", "body text"), Err(FormError::MissingField("Title")));
        assert_eq!(
            validate_note("ab", "body text"),
            Err(FormError::TooShort {
                field: "Title",
                min: MIN_TITLE_LEN
            })
        );
        assert_eq!(
            validate_note("Groceries", "milk"),
            Err(FormError::TooShort {
                field: "Description",
                min: MIN_DESCRIPTION_LEN
            })
        );
        assert_eq!(validate_note("Groceries", "milk and eggs"), Ok(()));
    }

    #[test]
    fn test_error_messages_read_as_alerts() {
        assert_eq!(FormError::MissingField("Title").to_string(), "Title is required");
        assert_eq!(
            FormError::TooShort {
                field: "Password",
                min: 5
            }
            .to_string(),
            "Password must be at least 5 characters"
        );
    }
}
