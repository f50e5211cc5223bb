use validator::{ValidationErrors, ValidationErrorsKind};

/// Flattens validator output to the first human-readable message, for the
/// `{ success: false, error }` envelope.
pub fn first_message(errors: &ValidationErrors) -> String {
    for kind in errors.errors().values() {
        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                if let Some(message) = field_errors.iter().find_map(|e| e.message.clone()) {
                    return message.into_owned();
                }
            }
            ValidationErrorsKind::Struct(nested) => return first_message(nested),
            ValidationErrorsKind::List(items) => {
                if let Some(nested) = items.values().next() {
                    return first_message(nested);
                }
            }
        }
    }

    String::from("Invalid request payload")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::borrow::Cow;
    use validator::ValidationError;

    #[test]
    fn returns_the_field_message() {
        let mut errors = ValidationErrors::new();
        let mut error = ValidationError::new("regex");
        error.message = Some(Cow::from("Invalid phone number format"));
        errors.add("phone", error);

        assert_eq!(first_message(&errors), "Invalid phone number format");
    }

    #[test]
    fn falls_back_to_a_generic_message() {
        let mut errors = ValidationErrors::new();
        errors.add("phone", ValidationError::new("regex"));

        assert_eq!(first_message(&errors), "Invalid request payload");
    }
}
