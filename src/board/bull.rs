use crate::config::standard::{INNER_BULL_SCORE, OUTER_BULL_SCORE};
use crate::config::{BoardDimensions, Subdivisions};
use crate::domain::{Bed, BedColor, BedKind};
use crate::geometry::{disc_polygon, ring_sector_polygon, sector_spans};

/// The inner bull: a single disc, the only bed without a hole
pub fn generate_inner_bull(dims: &BoardDimensions, subdivisions: Subdivisions) -> Bed {
    Bed::new(
        INNER_BULL_SCORE,
        BedKind::InnerBull,
        BedColor::Red,
        disc_polygon(dims.inner_bull_radius, subdivisions),
    )
}

/// The outer bull ring, split into one wedge per sector
pub fn generate_outer_bull(dims: &BoardDimensions, subdivisions: Subdivisions) -> Vec<Bed> {
    sector_spans()
        .map(|span| {
            Bed::new(
                OUTER_BULL_SCORE,
                BedKind::OuterBull,
                BedColor::Green,
                ring_sector_polygon(
                    dims.inner_bull_radius,
                    dims.outer_bull_radius,
                    &span,
                    subdivisions,
                ),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::standard::SECTOR_COUNT;

    #[test]
    fn test_inner_bull_is_round() {
        let bed = generate_inner_bull(&BoardDimensions::standard(), Subdivisions::DEFAULT);
        assert_eq!(bed.score, 50);
        assert!(bed.polygon.len() >= 32);
        for p in bed.polygon.vertices() {
            assert!((p.radius() - 6.35).abs() < 1e-9);
        }
    }

    #[test]
    fn test_outer_bull_wedges() {
        let beds = generate_outer_bull(&BoardDimensions::standard(), Subdivisions::DEFAULT);
        assert_eq!(beds.len(), SECTOR_COUNT);
        for bed in &beds {
            assert_eq!(bed.score, 25);
            assert_eq!(bed.kind, BedKind::OuterBull);
            assert!(bed.polygon.is_ccw());
        }
    }
}
