use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("map {0} has not been initialised")]
    UnknownMap(String),

    #[error("stored record in {map} does not match the expected shape: {reason}")]
    Corrupt { map: String, reason: String },

    #[error("serialization error: {0}")]
    Serialization(String),
}
