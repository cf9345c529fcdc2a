use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum FigureError {
    #[error("Degenerate segment: endpoints {first} and {second} coincide")]
    DegenerateSegment { first: String, second: String },
    #[error("Missing input: {0}")]
    MissingInput(&'static str),
    #[error("Point name {name} is already registered at a different position")]
    DuplicateName { name: String },
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type FigureResult<T> = Result<T, FigureError>;
