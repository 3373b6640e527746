pub mod bed;
pub mod target;

pub use bed::{Bed, BedColor, BedKind};
pub use target::Target;
