use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MirrorError {
    /// A dynamic lookup named a key no slice defines. Slots are never created
    /// on the fly.
    #[error("unknown mirror key `{0}`")]
    UnknownKey(String),
    #[error("value registered under `{key}` is not a `{expected}`")]
    TypeMismatch {
        key: &'static str,
        expected: &'static str,
    },
}
