use juniper::{FieldError, IntoFieldError, ScalarValue, graphql_value};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Book not found: {0}")]
    NotFound(String),
}

impl<S: ScalarValue> IntoFieldError<S> for StoreError {
    fn into_field_error(self) -> FieldError<S> {
        match self {
            StoreError::NotFound(_) => FieldError::new(
                self.to_string(),
                graphql_value!({ "code": "NOT_FOUND" }),
            ),
        }
    }
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;
    use juniper::DefaultScalarValue;

    #[test]
    fn not_found_carries_code_extension() {
        let err: FieldError<DefaultScalarValue> =
            StoreError::NotFound("9999".to_string()).into_field_error();
        assert_eq!(err.message(), "Book not found: 9999");
        assert_eq!(err.extensions(), &graphql_value!({ "code": "NOT_FOUND" }));
    }
}
