pub mod bull;
pub mod sectors;

pub use bull::{generate_inner_bull, generate_outer_bull};
pub use sectors::generate_sector_beds;

use crate::config::standard::SECTOR_COUNT;
use crate::config::{BoardDimensions, Subdivisions};
use crate::domain::Target;
use crate::error::BoardError;

/// Total number of beds on a board: inner bull, 20 outer-bull wedges and
/// four numbered beds per sector
pub const BED_COUNT: usize = 1 + SECTOR_COUNT + 4 * SECTOR_COUNT;

/// Assemble every scoring bed of the board
///
/// # Arguments
/// * `dims` - Board radii and number sequence (see `BoardDimensions::validate`)
/// * `subdivisions` - Segments per arc
///
/// # Returns
/// Target with the inner bull first, then the outer-bull wedges, then the
/// numbered beds sector by sector
pub fn generate_target(dims: &BoardDimensions, subdivisions: Subdivisions) -> Target {
    let mut beds = Vec::with_capacity(BED_COUNT);

    beds.push(generate_inner_bull(dims, subdivisions));
    beds.extend(generate_outer_bull(dims, subdivisions));
    for index in 0..SECTOR_COUNT {
        beds.extend(generate_sector_beds(dims, index, subdivisions));
    }

    Target::new(beds)
}

/// Assemble the standard board, rejecting a zero subdivision count
pub fn generate(subdivisions: u32) -> Result<Target, BoardError> {
    let subdivisions = Subdivisions::new(subdivisions)?;
    let dims = BoardDimensions::standard();
    dims.validate()?;
    Ok(generate_target(&dims, subdivisions))
}
