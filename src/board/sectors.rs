use crate::config::{BoardDimensions, Subdivisions};
use crate::domain::{Bed, BedColor, BedKind};
use crate::geometry::{SectorSpan, ring_sector_polygon};

/// Ring edges for each numbered bed, in emission order
fn ring_layout(dims: &BoardDimensions) -> [(BedKind, f64, f64); 4] {
    [
        (
            BedKind::SingleInner,
            dims.outer_bull_radius,
            dims.treble_inner_radius,
        ),
        (
            BedKind::Treble,
            dims.treble_inner_radius,
            dims.treble_outer_radius,
        ),
        (
            BedKind::SingleOuter,
            dims.treble_outer_radius,
            dims.double_inner_radius,
        ),
        (
            BedKind::Double,
            dims.double_inner_radius,
            dims.double_outer_radius,
        ),
    ]
}

/// Generate the four numbered beds of one sector
///
/// Order: inner single, treble, outer single, double. Singles take the
/// sector fill and the treble/double rings take the ring fill, both
/// alternating with the sector index.
pub fn generate_sector_beds(
    dims: &BoardDimensions,
    index: usize,
    subdivisions: Subdivisions,
) -> Vec<Bed> {
    let number = dims.numbers[index];
    let span = SectorSpan::for_index(index);

    ring_layout(dims)
        .into_iter()
        .map(|(kind, r_inner, r_outer)| {
            let color = match kind {
                BedKind::Treble | BedKind::Double => BedColor::ring_fill(index),
                _ => BedColor::sector_fill(index),
            };
            Bed::new(
                number * kind.multiplier(),
                kind,
                color,
                ring_sector_polygon(r_inner, r_outer, &span, subdivisions),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sector_order_and_scores() {
        let dims = BoardDimensions::standard();
        let beds = generate_sector_beds(&dims, 2, Subdivisions::DEFAULT);

        let kinds: Vec<BedKind> = beds.iter().map(|b| b.kind).collect();
        assert_eq!(
            kinds,
            [
                BedKind::SingleInner,
                BedKind::Treble,
                BedKind::SingleOuter,
                BedKind::Double
            ]
        );
        let scores: Vec<u32> = beds.iter().map(|b| b.score).collect();
        assert_eq!(scores, [18, 54, 18, 36]);
    }

    #[test]
    fn test_sector_colors() {
        let dims = BoardDimensions::standard();

        let even = generate_sector_beds(&dims, 0, Subdivisions::DEFAULT);
        assert_eq!(even[0].color, BedColor::Black);
        assert_eq!(even[1].color, BedColor::Red);
        assert_eq!(even[2].color, BedColor::Black);
        assert_eq!(even[3].color, BedColor::Red);

        let odd = generate_sector_beds(&dims, 1, Subdivisions::DEFAULT);
        assert_eq!(odd[0].color, BedColor::Cream);
        assert_eq!(odd[1].color, BedColor::Green);
    }

    #[test]
    fn test_sector_beds_within_radii() {
        let dims = BoardDimensions::standard();
        let beds = generate_sector_beds(&dims, 11, Subdivisions::new(5).unwrap());

        for (bed, (_, r_inner, r_outer)) in beds.iter().zip(ring_layout(&dims)) {
            for p in bed.polygon.vertices() {
                let r = p.radius();
                assert!(r >= r_inner - 1e-6 && r <= r_outer + 1e-6);
            }
        }
    }
}
