use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ColocError {
    /// Text does not follow the `chromosome<sep>position<sep>ref<sep>alt` grammar.
    #[error("Malformed variant identifier: {0}")]
    MalformedIdentifier(String),

    /// A row has the wrong number of fields, or a field could not be coerced.
    #[error("Malformed row ({reason}): {text}")]
    MalformedRow { reason: String, text: String },

    /// A causal variant entry that is not a `variant,pip,beta` triple.
    #[error("Malformed causal variant entry: {0}")]
    MalformedCausalVariant(String),
}

impl ColocError {
    pub fn malformed_row(reason: impl Into<String>, text: impl Into<String>) -> Self {
        Self::MalformedRow {
            reason: reason.into(),
            text: text.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ColocError>;
