use super::{Bed, BedKind};
use crate::geometry::{Bounds, Point};

/// Every bed of one board, in a stable order: inner bull, the 20 outer-bull
/// wedges, then single/treble/single/double for each sector.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Target {
    beds: Vec<Bed>,
}

impl Target {
    pub fn new(beds: Vec<Bed>) -> Self {
        Self { beds }
    }

    pub fn beds(&self) -> &[Bed] {
        &self.beds
    }

    pub fn len(&self) -> usize {
        self.beds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.beds.is_empty()
    }

    /// Score of the first bed containing `p`, or `None` for a miss
    pub fn score_at(&self, p: Point) -> Option<u32> {
        self.bed_at(p).map(|bed| bed.score)
    }

    pub fn bed_at(&self, p: Point) -> Option<&Bed> {
        self.beds.iter().find(|bed| bed.contains(p))
    }

    /// Extent of all bed vertices
    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::from_points(self.beds.iter().flat_map(|bed| bed.polygon.vertices()))
    }

    pub fn count_kind(&self, kind: BedKind) -> usize {
        self.beds.iter().filter(|bed| bed.kind == kind).count()
    }

    pub fn vertex_count(&self) -> usize {
        self.beds.iter().map(|bed| bed.polygon.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BedColor;
    use crate::geometry::Polygon;

    fn square(x0: f64, y0: f64, side: f64) -> Polygon {
        Polygon::new(vec![
            Point::new(x0, y0),
            Point::new(x0 + side, y0),
            Point::new(x0 + side, y0 + side),
            Point::new(x0, y0 + side),
        ])
    }

    #[test]
    fn test_score_at_first_match() {
        let target = Target::new(vec![
            Bed::new(50, BedKind::InnerBull, BedColor::Red, square(0.0, 0.0, 1.0)),
            Bed::new(25, BedKind::OuterBull, BedColor::Green, square(0.0, 0.0, 2.0)),
        ]);

        assert_eq!(target.score_at(Point::new(0.5, 0.5)), Some(50));
        assert_eq!(target.score_at(Point::new(1.5, 1.5)), Some(25));
        assert_eq!(target.score_at(Point::new(3.0, 3.0)), None);
    }

    #[test]
    fn test_bounds_and_counts() {
        let target = Target::new(vec![
            Bed::new(1, BedKind::SingleInner, BedColor::Black, square(-1.0, -2.0, 1.0)),
            Bed::new(2, BedKind::Double, BedColor::Red, square(3.0, 4.0, 2.0)),
        ]);

        let bounds = target.bounds().unwrap();
        assert_eq!(bounds.min_x, -1.0);
        assert_eq!(bounds.min_y, -2.0);
        assert_eq!(bounds.max_x, 5.0);
        assert_eq!(bounds.max_y, 6.0);

        assert_eq!(target.count_kind(BedKind::Double), 1);
        assert_eq!(target.count_kind(BedKind::Treble), 0);
        assert_eq!(target.vertex_count(), 8);
    }

    #[test]
    fn test_empty_target() {
        let target = Target::default();
        assert!(target.is_empty());
        assert!(target.bounds().is_none());
        assert_eq!(target.score_at(Point::default()), None);
    }
}
