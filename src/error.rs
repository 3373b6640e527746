use thiserror::Error;

/// Errors raised while setting up or assembling a board
#[derive(Debug, Error, PartialEq)]
pub enum BoardError {
    #[error(
        "subdivision count must be between 1 and {max} (got {0})",
        max = crate::config::MAX_SUBDIVISIONS
    )]
    InvalidSubdivisions(u32),

    #[error("board radii must be strictly increasing from inner bull to double ring: {0:?}")]
    RadiiOutOfOrder([f64; 6]),

    #[error("sector numbers must be a permutation of 1..=20: {0:?}")]
    InvalidNumbers([u32; 20]),
}

/// Errors raised while reading a target file
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: unexpected end of file, expected {expected}")]
    MissingLine { line: usize, expected: &'static str },

    #[error("line {line}: invalid {what} '{token}'")]
    InvalidToken {
        line: usize,
        what: &'static str,
        token: String,
    },

    #[error("line {line}: header has {found} fields, format {version} expects {expected}")]
    HeaderArity {
        line: usize,
        version: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: expected {expected} coordinates, found {found}")]
    CoordinateCount {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: polygon needs at least 3 vertices, found {found}")]
    TooFewVertices { line: usize, found: usize },

    #[error("line {line}: trailing content after {beds} beds")]
    TrailingContent { line: usize, beds: usize },
}
