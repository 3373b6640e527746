pub mod arc;
pub mod polygon;
pub mod sector;
pub mod validation;

pub use arc::{arc_points, disc_polygon, ring_sector_polygon};
pub use polygon::{Bounds, Point, Polygon};
pub use sector::{SECTOR_ANGLE, SectorSpan, sector_spans};
pub use validation::{ValidationResult, validate_target};
