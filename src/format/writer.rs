use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use super::FormatVersion;
use crate::domain::Target;

/// Write a target to a file, truncating any existing content
///
/// # Arguments
/// * `path` - Output file path
/// * `target` - Assembled board
/// * `version` - Header layout to emit
pub fn write_target(path: &Path, target: &Target, version: FormatVersion) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create target file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    write_target_to(&mut writer, target, version)
        .with_context(|| format!("Failed to write target file: {}", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("Failed to flush target file: {}", path.display()))?;

    Ok(())
}

/// Serialize a target to any writer
pub fn write_target_to<W: Write>(
    writer: &mut W,
    target: &Target,
    version: FormatVersion,
) -> io::Result<()> {
    writeln!(writer, "{}", target.len())?;

    for bed in target.beds() {
        match version {
            FormatVersion::V1 => writeln!(writer, "{} {}", bed.score, bed.polygon.len())?,
            FormatVersion::V2 => writeln!(
                writer,
                "{} {} {} {}",
                bed.score,
                bed.polygon.len(),
                bed.color,
                bed.kind
            )?,
        }

        for (i, p) in bed.polygon.vertices().iter().enumerate() {
            if i > 0 {
                writer.write_all(b" ")?;
            }
            write!(writer, "{:.6} {:.6}", p.x, p.y)?;
        }
        writer.write_all(b"\n")?;
    }

    Ok(())
}
