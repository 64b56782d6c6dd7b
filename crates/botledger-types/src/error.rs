use thiserror::Error;

/// Errors caused by asking for a collection the schema does not define.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("unknown collection: '{0}'")]
    UnknownCollection(String),
}

/// Errors caused by a document that cannot be keyed for its collection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("document for '{collection}' is not an object (got {found})")]
    NotAnObject { collection: String, found: String },

    #[error("document for '{collection}' is missing key field(s) [{}]: {document}", .missing.join(", "))]
    MissingKeyFields {
        collection: String,
        missing: Vec<String>,
        document: String,
    },

    #[error("key field '{field}' of '{collection}' must be a scalar (got {found})")]
    NonScalarKeyField {
        collection: String,
        field: String,
        found: String,
    },

    #[error("malformed '{collection}' document: {reason}")]
    Malformed { collection: String, reason: String },
}

/// Errors from primary-key derivation.
///
/// Both kinds indicate caller error; neither is transient.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl KeyError {
    pub fn is_configuration(&self) -> bool {
        matches!(self, KeyError::Configuration(_))
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, KeyError::Validation(_))
    }
}
