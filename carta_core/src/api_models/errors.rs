use serde::Serialize;
use utoipa::ToSchema;


/// JSON body returned on every failed request.
///
/// `message` is a short human-readable description of what went wrong;
/// `error` optionally carries the underlying error string when one exists
/// (e.g. a storage error message).
#[derive(Serialize, Clone, PartialEq, Eq, Debug, ToSchema)]
#[cfg_attr(feature = "serde_impls_for_client_on_models", derive(serde::Deserialize))]
pub struct ErrorResponse {
    pub message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorResponse {
    pub fn new<M>(message: M) -> Self
    where
        M: Into<String>,
    {
        Self {
            message: message.into(),
            error: None,
        }
    }

    pub fn with_error<M, E>(message: M, error: E) -> Self
    where
        M: Into<String>,
        E: Into<String>,
    {
        Self {
            message: message.into(),
            error: Some(error.into()),
        }
    }
}



#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn omits_error_field_when_absent() {
        let serialized = serde_json::to_value(ErrorResponse::new("Category not found")).unwrap();

        assert_eq!(
            serialized,
            serde_json::json!({ "message": "Category not found" })
        );
    }

    #[test]
    fn includes_error_field_when_present() {
        let serialized = serde_json::to_value(ErrorResponse::with_error(
            "Error fetching items",
            "connection reset",
        ))
        .unwrap();

        assert_eq!(
            serialized,
            serde_json::json!({
                "message": "Error fetching items",
                "error": "connection reset",
            })
        );
    }
}
