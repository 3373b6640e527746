use std::f64::consts::{FRAC_PI_2, TAU};

use crate::config::standard::SECTOR_COUNT;

/// Angular width of one numbered sector (18 degrees)
pub const SECTOR_ANGLE: f64 = TAU / SECTOR_COUNT as f64;

/// Angular interval covered by one sector, in radians CCW from +x.
///
/// Sector 0 is centred straight up at 90 degrees and indices advance
/// clockwise, so sector `i` is centred at `90deg - i * 18deg` and spans
/// `center -/+ 9deg`. The sweep from `start` to `end` is CCW.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectorSpan {
    pub center: f64,
    pub start: f64,
    pub end: f64,
}

impl SectorSpan {
    /// Span of sector `index`; callers iterate `0..SECTOR_COUNT`
    pub fn for_index(index: usize) -> Self {
        debug_assert!(index < SECTOR_COUNT);
        // Edges come from the shared boundary index so neighbouring sectors
        // meet at bit-identical angles
        let top_edge = FRAC_PI_2 + SECTOR_ANGLE / 2.0;
        Self {
            center: FRAC_PI_2 - index as f64 * SECTOR_ANGLE,
            start: top_edge - (index + 1) as f64 * SECTOR_ANGLE,
            end: top_edge - index as f64 * SECTOR_ANGLE,
        }
    }

    /// Whether `angle` (any winding) falls in `[start, end)`
    pub fn contains_angle(&self, angle: f64) -> bool {
        (angle - self.start).rem_euclid(TAU) < SECTOR_ANGLE
    }
}

/// Spans for every sector, in index order
pub fn sector_spans() -> impl Iterator<Item = SectorSpan> {
    (0..SECTOR_COUNT).map(SectorSpan::for_index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sector_zero_straddles_vertical() {
        let span = SectorSpan::for_index(0);
        assert!((span.center.to_degrees() - 90.0).abs() < 1e-9);
        assert!((span.start.to_degrees() - 81.0).abs() < 1e-9);
        assert!((span.end.to_degrees() - 99.0).abs() < 1e-9);
    }

    #[test]
    fn test_sectors_advance_clockwise() {
        let first = SectorSpan::for_index(0);
        let second = SectorSpan::for_index(1);
        assert_eq!(second.end, first.start);
        assert!((second.center.to_degrees() - 72.0).abs() < 1e-9);
    }

    #[test]
    fn test_sectors_partition_circle() {
        let spans: Vec<SectorSpan> = sector_spans().collect();
        assert_eq!(spans.len(), SECTOR_COUNT);

        for span in &spans {
            assert!((span.end - span.start - SECTOR_ANGLE).abs() < 1e-12);
        }

        // Every sampled angle lands in exactly one sector
        for step in 0..720 {
            let angle = (step as f64 + 0.25).to_radians() / 2.0;
            let hits = spans.iter().filter(|s| s.contains_angle(angle)).count();
            assert_eq!(hits, 1, "angle {} hit {} sectors", angle.to_degrees(), hits);
        }

        let total: f64 = spans.iter().map(|s| s.end - s.start).sum();
        assert!((total - TAU).abs() < 1e-9);
    }

    #[test]
    fn test_contains_angle_wraps() {
        let span = SectorSpan::for_index(0);
        assert!(span.contains_angle(FRAC_PI_2));
        assert!(span.contains_angle(FRAC_PI_2 + TAU));
        assert!(span.contains_angle(FRAC_PI_2 - TAU));
        assert!(!span.contains_angle(0.0));
    }
}
