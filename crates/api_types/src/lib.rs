use serde::{Deserialize, Serialize};
use serde_json::Value;

pub mod category {
    use super::*;

    /// Category as returned by the categories service.
    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct CategoryDto {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub id: Option<i64>,
        pub nome: String,
    }

    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct CategoryCreate {
        pub nome: String,
    }

    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct CategoryUpdate {
        pub id: i64,
        pub nome: String,
    }

    /// Write request for a category.
    ///
    /// The variant decides the endpoint; on the wire both are plain objects,
    /// `Create` simply has no `id` key.
    #[derive(Clone, Debug, PartialEq, Eq, Serialize)]
    #[serde(untagged)]
    pub enum CategoryRequest {
        Create(CategoryCreate),
        Update(CategoryUpdate),
    }

    impl CategoryRequest {
        /// Builds an `Update` when `id` is known, a `Create` otherwise.
        pub fn new(id: Option<i64>, nome: impl Into<String>) -> Self {
            let nome = nome.into();
            match id {
                Some(id) => Self::Update(CategoryUpdate { id, nome }),
                None => Self::Create(CategoryCreate { nome }),
            }
        }

        pub fn id(&self) -> Option<i64> {
            match self {
                Self::Create(_) => None,
                Self::Update(update) => Some(update.id),
            }
        }

        pub fn nome(&self) -> &str {
            match self {
                Self::Create(create) => &create.nome,
                Self::Update(update) => &update.nome,
            }
        }
    }
}

pub mod error {
    use super::*;

    #[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
    pub struct FieldError {
        #[serde(default)]
        pub message: String,
    }

    /// Error payload produced by the backend.
    ///
    /// Two shapes are in use: `{ "error": "..." }` for single failures and
    /// `{ "errors": [{ "message": "..." }, ...] }` for validation failures.
    #[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
    pub struct ErrorBody {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub error: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub errors: Option<Vec<FieldError>>,
    }

    impl ErrorBody {
        /// Reads an error payload without failing on unexpected shapes.
        ///
        /// A non-string `error` is ignored, a non-array `errors` is ignored,
        /// and list items without a string `message` contribute an empty one.
        pub fn from_json(value: &Value) -> Self {
            let error = value
                .get("error")
                .and_then(Value::as_str)
                .map(str::to_string);
            let errors = value.get("errors").and_then(Value::as_array).map(|items| {
                items
                    .iter()
                    .map(|item| FieldError {
                        message: item
                            .get("message")
                            .and_then(Value::as_str)
                            .unwrap_or_default()
                            .to_string(),
                    })
                    .collect()
            });
            Self { error, errors }
        }

        /// The single `error` string, when present and non-empty.
        pub fn error_message(&self) -> Option<&str> {
            self.error.as_deref().filter(|message| !message.is_empty())
        }
    }
}
