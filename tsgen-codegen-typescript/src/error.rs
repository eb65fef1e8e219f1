use thiserror::Error;

/// Errors raised while turning a type descriptor into a class.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("declared type '{declared_type}' has no namespace separator")]
    MissingNamespace { declared_type: String },

    #[error("cannot map field '{field}' of '{class}'")]
    Field {
        class: String,
        field: String,
        #[source]
        source: Box<Error>,
    },
}
