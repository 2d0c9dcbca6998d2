use thiserror::Error;

/// Library error taxonomy.
///
/// The scoring paths themselves are total over the closed enum domains and
/// never fail; the only fallible operation is constructing a category value
/// from untyped text (form payloads, query strings).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid value '{value}' for category '{field}'")]
    InvalidCategory {
        field: &'static str,
        value: String,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
