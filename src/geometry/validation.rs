//! Target validation
//!
//! Checks an assembled target before it is written:
//! - Polygons with fewer than 3 vertices
//! - NaN/Inf coordinates
//! - Clockwise or zero-area polygons (every bed must wind CCW)

use crate::domain::Target;

/// Result of target validation
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Total number of beds validated
    pub total: usize,
    /// Beds with fewer than 3 vertices
    pub too_few_vertices: usize,
    /// Beds with NaN/Inf coordinates
    pub invalid_coords: usize,
    /// Beds whose signed area is not positive
    pub not_ccw: usize,
    /// Warning messages for issues found
    pub warnings: Vec<String>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.too_few_vertices == 0 && self.invalid_coords == 0 && self.not_ccw == 0
    }

    pub fn summary(&self) -> String {
        if self.is_valid() {
            format!("Target valid: {} beds, no issues", self.total)
        } else {
            format!(
                "Target issues: {} beds, {} too few vertices, {} invalid coords, {} not CCW",
                self.total, self.too_few_vertices, self.invalid_coords, self.not_ccw
            )
        }
    }
}

/// Validate every bed polygon of a target
pub fn validate_target(target: &Target) -> ValidationResult {
    let mut result = ValidationResult {
        total: target.len(),
        ..Default::default()
    };

    for (i, bed) in target.beds().iter().enumerate() {
        let polygon = &bed.polygon;

        if !polygon.is_valid() {
            result.too_few_vertices += 1;
            result.warnings.push(format!(
                "Bed {} ({}) has only {} vertices",
                i,
                bed.kind,
                polygon.len()
            ));
            continue;
        }

        if !polygon.vertices().iter().all(|p| p.is_finite()) {
            result.invalid_coords += 1;
            result
                .warnings
                .push(format!("Bed {} ({}) has NaN/Inf coordinates", i, bed.kind));
            continue;
        }

        if !polygon.is_ccw() {
            result.not_ccw += 1;
            result.warnings.push(format!(
                "Bed {} ({}) is not counter-clockwise (signed area {:.6})",
                i,
                bed.kind,
                polygon.signed_area()
            ));
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Bed, BedColor, BedKind};
    use crate::geometry::{Point, Polygon};

    fn bed(points: &[(f64, f64)]) -> Bed {
        Bed::new(
            1,
            BedKind::SingleInner,
            BedColor::Black,
            Polygon::new(points.iter().map(|&(x, y)| Point::new(x, y)).collect()),
        )
    }

    #[test]
    fn test_valid_target() {
        let target = Target::new(vec![bed(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)])]);
        let result = validate_target(&target);

        assert_eq!(result.total, 1);
        assert!(result.is_valid());
        assert!(result.warnings.is_empty());
        assert!(result.summary().contains("no issues"));
    }

    #[test]
    fn test_detects_each_issue() {
        let target = Target::new(vec![
            bed(&[(0.0, 0.0), (1.0, 0.0)]),
            bed(&[(f64::NAN, 0.0), (1.0, 0.0), (0.0, 1.0)]),
            bed(&[(0.0, 0.0), (0.0, 1.0), (1.0, 0.0)]),
            bed(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]),
        ]);
        let result = validate_target(&target);

        assert_eq!(result.total, 4);
        assert_eq!(result.too_few_vertices, 1);
        assert_eq!(result.invalid_coords, 1);
        assert_eq!(result.not_ccw, 2);
        assert_eq!(result.warnings.len(), 4);
        assert!(!result.is_valid());
    }
}
