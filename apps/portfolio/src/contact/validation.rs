use crate::contact::models::{ContactSubmission, Field, ValidationError};

/// Checks the required fields, then the email shape.
///
/// Required fields are checked in form order (name, email, message) and the
/// first empty one is reported. The email check is only a `@` test.
pub fn validate(submission: &ContactSubmission) -> Result<(), ValidationError> {
    let required = [
        (Field::Name, &submission.name),
        (Field::Email, &submission.email),
        (Field::Message, &submission.message),
    ];

    if let Some((field, _)) = required.iter().find(|(_, value)| value.is_empty()) {
        return Err(ValidationError::MissingField(*field));
    }

    if !submission.email.contains('@') {
        return Err(ValidationError::InvalidEmail);
    }

    Ok(())
}
