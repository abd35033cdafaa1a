use thiserror::Error;

/// Content-definition errors. These indicate a broken content library or a
/// character that references content the library does not have.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("Unknown class '{0}'")]
    UnknownClass(String),

    #[error("Unknown subclass '{subclass}' for class '{class}'")]
    UnknownSubclass { class: String, subclass: String },

    #[error("Unknown feature '{0}'")]
    UnknownFeature(String),

    #[error("Feature '{0}' is already registered")]
    DuplicateFeature(String),
}
