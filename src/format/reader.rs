use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use super::FormatVersion;
use crate::domain::{BedColor, BedKind};
use crate::error::FormatError;
use crate::geometry::{Point, Polygon};

/// One bed as read back from a target file
#[derive(Debug, Clone, PartialEq)]
pub struct BedRecord {
    pub score: u32,
    pub polygon: Polygon,
    /// Present for `v2` files only
    pub color: Option<BedColor>,
    /// Present for `v2` files only
    pub kind: Option<BedKind>,
}

/// Non-blank lines with their 1-based line numbers
struct Lines<R> {
    inner: std::iter::Enumerate<std::io::Lines<R>>,
    consumed: usize,
}

impl<R: BufRead> Lines<R> {
    fn new(reader: R) -> Self {
        Self {
            inner: reader.lines().enumerate(),
            consumed: 0,
        }
    }

    fn next_line(&mut self) -> Result<Option<(usize, String)>, FormatError> {
        for (i, line) in self.inner.by_ref() {
            let line = line?;
            self.consumed = i + 1;
            if !line.trim().is_empty() {
                return Ok(Some((i + 1, line)));
            }
        }
        Ok(None)
    }

    fn expect_line(&mut self, expected: &'static str) -> Result<(usize, String), FormatError> {
        match self.next_line()? {
            Some(line) => Ok(line),
            None => Err(FormatError::MissingLine {
                line: self.consumed + 1,
                expected,
            }),
        }
    }
}

fn parse_token<T: FromStr>(
    token: &str,
    line: usize,
    what: &'static str,
) -> Result<T, FormatError> {
    token.parse().map_err(|_| FormatError::InvalidToken {
        line,
        what,
        token: token.to_string(),
    })
}

/// Parse a target file written in `version`
pub fn read_target<R: BufRead>(
    reader: R,
    version: FormatVersion,
) -> Result<Vec<BedRecord>, FormatError> {
    let mut lines = Lines::new(reader);

    let (line_no, line) = lines.expect_line("bed count")?;
    let count: usize = parse_token(line.trim(), line_no, "bed count")?;

    let mut beds = Vec::with_capacity(count.min(crate::board::BED_COUNT));
    for _ in 0..count {
        let (line_no, header) = lines.expect_line("bed header")?;
        let fields: Vec<&str> = header.split_whitespace().collect();
        if fields.len() != version.header_fields() {
            return Err(FormatError::HeaderArity {
                line: line_no,
                version: version.name(),
                expected: version.header_fields(),
                found: fields.len(),
            });
        }

        let score: u32 = parse_token(fields[0], line_no, "score")?;
        let vertex_count: usize = parse_token(fields[1], line_no, "vertex count")?;
        if vertex_count < 3 {
            return Err(FormatError::TooFewVertices {
                line: line_no,
                found: vertex_count,
            });
        }
        let (color, kind) = match version {
            FormatVersion::V1 => (None, None),
            FormatVersion::V2 => (
                Some(parse_token(fields[2], line_no, "color")?),
                Some(parse_token(fields[3], line_no, "bed kind")?),
            ),
        };

        let (line_no, coords) = lines.expect_line("vertex coordinates")?;
        let values = coords
            .split_whitespace()
            .map(|t| parse_token::<f64>(t, line_no, "coordinate"))
            .collect::<Result<Vec<_>, _>>()?;
        if values.len() != 2 * vertex_count {
            return Err(FormatError::CoordinateCount {
                line: line_no,
                expected: 2 * vertex_count,
                found: values.len(),
            });
        }

        let vertices = values
            .chunks_exact(2)
            .map(|xy| Point::new(xy[0], xy[1]))
            .collect();

        beds.push(BedRecord {
            score,
            polygon: Polygon::new(vertices),
            color,
            kind,
        });
    }

    if let Some((line, _)) = lines.next_line()? {
        return Err(FormatError::TrailingContent { line, beds: count });
    }

    Ok(beds)
}

/// Open and parse a target file
pub fn read_target_file(path: &Path, version: FormatVersion) -> Result<Vec<BedRecord>, FormatError> {
    let file = File::open(path)?;
    read_target(BufReader::new(file), version)
}
