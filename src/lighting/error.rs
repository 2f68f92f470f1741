use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected 3 dash-delimited segments, found {0}")]
    Segmentation(usize),

    #[error("unrecognized date format: '{0}'")]
    DateFormat(String),

    #[error("invalid range format: '{0}'")]
    RangeFormat(String),

    #[error("invalid input: color must not be empty")]
    EmptyColor,
}
