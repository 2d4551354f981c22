use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum Error {
    #[error("mixed modes not allowed for {operator}: use either a single value or fields")]
    MixedModes { operator: &'static str },
    #[error("at least one sort required for {operator}")]
    MissingSort { operator: &'static str },
    #[error("{stage} requires at least one entry")]
    EmptyStage { stage: &'static str },
    #[error("{field} is reserved in {stage}")]
    ReservedField {
        stage: &'static str,
        field: &'static str,
    },
    #[error("no codec found for type {0}")]
    NoCodec(String),
    #[error("codec for type {type_name} failed: {message}")]
    Codec { type_name: String, message: String },
    #[error("unsupported operation: {0}")]
    Unsupported(String),
}

pub type Result<T> = std::result::Result<T, Error>;
