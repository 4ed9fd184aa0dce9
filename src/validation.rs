use validator::{Validate, ValidationErrors, ValidationErrorsKind};

use crate::errors::ServerError;

/// Run declared validations and fold every violation into a single
/// 400 error whose message joins all field messages.
pub fn check<T: Validate>(input: &T) -> Result<(), ServerError> {
    input.validate().map_err(|errs| {
        let mut messages = collect_messages(&errs);
        messages.sort();
        ServerError::BadRequest(messages.join(", "))
    })
}

fn collect_messages(errs: &ValidationErrors) -> Vec<String> {
    let mut out = Vec::new();
    for (field, kind) in errs.errors() {
        match kind {
            ValidationErrorsKind::Field(violations) => {
                for v in violations {
                    match &v.message {
                        Some(msg) => out.push(msg.to_string()),
                        None => out.push(format!("{field} is invalid")),
                    }
                }
            }
            ValidationErrorsKind::Struct(nested) => {
                out.extend(collect_messages(nested));
            }
            ValidationErrorsKind::List(items) => {
                for nested in items.values() {
                    out.extend(collect_messages(nested));
                }
            }
        }
    }
    out
}
