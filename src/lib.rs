//! dartboard - Polygonal scoring-bed model of a standard dartboard

pub mod board;
pub mod config;
pub mod domain;
pub mod error;
pub mod format;
pub mod geometry;

pub use board::{BED_COUNT, generate, generate_target};
pub use config::{BoardDimensions, Subdivisions};
pub use domain::{Bed, BedColor, BedKind, Target};
pub use error::{BoardError, FormatError};
pub use format::{FormatVersion, read_target, write_target};
