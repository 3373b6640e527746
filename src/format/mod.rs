//! Line-oriented target file format
//!
//! ```text
//! N                               bed count
//! score vertex_count [color kind] bed header, repeated N times
//! x1 y1 x2 y2 ... xP yP           vertices, 6 decimal places
//! ```
//!
//! `v1` headers carry only `score vertex_count`. `v2` headers append the
//! hex color and the bed kind. The version is never inferred from the file.

pub mod reader;
pub mod writer;

pub use reader::{BedRecord, read_target, read_target_file};
pub use writer::{write_target, write_target_to};

use serde::Deserialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FormatVersion {
    /// `score vertex_count`
    #[default]
    V1,
    /// `score vertex_count color kind`
    V2,
}

impl FormatVersion {
    /// Number of fields on a bed header line
    pub fn header_fields(self) -> usize {
        match self {
            FormatVersion::V1 => 2,
            FormatVersion::V2 => 4,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            FormatVersion::V1 => "v1",
            FormatVersion::V2 => "v2",
        }
    }
}

impl fmt::Display for FormatVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
