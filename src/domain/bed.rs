use std::fmt;
use std::str::FromStr;

use crate::geometry::{Point, Polygon};

/// Which ring of the board a bed belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BedKind {
    InnerBull,
    OuterBull,
    SingleInner,
    Treble,
    SingleOuter,
    Double,
}

impl BedKind {
    pub const ALL: [BedKind; 6] = [
        BedKind::InnerBull,
        BedKind::OuterBull,
        BedKind::SingleInner,
        BedKind::Treble,
        BedKind::SingleOuter,
        BedKind::Double,
    ];

    /// Score multiplier applied to the sector number
    pub fn multiplier(self) -> u32 {
        match self {
            BedKind::Treble => 3,
            BedKind::Double => 2,
            _ => 1,
        }
    }

    pub fn token(self) -> &'static str {
        match self {
            BedKind::InnerBull => "inner_bull",
            BedKind::OuterBull => "outer_bull",
            BedKind::SingleInner => "single_inner",
            BedKind::Treble => "treble",
            BedKind::SingleOuter => "single_outer",
            BedKind::Double => "double",
        }
    }
}

impl fmt::Display for BedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for BedKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BedKind::ALL
            .into_iter()
            .find(|k| k.token() == s)
            .ok_or_else(|| format!("unknown bed kind: {}", s))
    }
}

/// Display color carried through to the target file; no effect on scoring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BedColor {
    Red,
    Green,
    Black,
    Cream,
}

impl BedColor {
    pub fn hex(self) -> &'static str {
        match self {
            BedColor::Red => "#DC143C",
            BedColor::Green => "#228B22",
            BedColor::Black => "#000000",
            BedColor::Cream => "#F5F5DC",
        }
    }

    /// Sector fill for sector `index`, alternating dark/light
    pub fn sector_fill(index: usize) -> Self {
        if index % 2 == 0 {
            BedColor::Black
        } else {
            BedColor::Cream
        }
    }

    /// Treble/double ring fill for sector `index`, alternating red/green
    pub fn ring_fill(index: usize) -> Self {
        if index % 2 == 0 {
            BedColor::Red
        } else {
            BedColor::Green
        }
    }
}

impl fmt::Display for BedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.hex())
    }
}

impl FromStr for BedColor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [
            BedColor::Red,
            BedColor::Green,
            BedColor::Black,
            BedColor::Cream,
        ]
        .into_iter()
        .find(|c| c.hex().eq_ignore_ascii_case(s))
        .ok_or_else(|| format!("unknown bed color: {}", s))
    }
}

/// One scoring region of the board
#[derive(Debug, Clone, PartialEq)]
pub struct Bed {
    /// Points awarded for a hit, multiplier already applied
    pub score: u32,
    pub kind: BedKind,
    pub color: BedColor,
    pub polygon: Polygon,
}

impl Bed {
    pub fn new(score: u32, kind: BedKind, color: BedColor, polygon: Polygon) -> Self {
        Self {
            score,
            kind,
            color,
            polygon,
        }
    }

    /// Base sector number, `None` for the bulls
    pub fn sector_number(&self) -> Option<u32> {
        match self.kind {
            BedKind::InnerBull | BedKind::OuterBull => None,
            kind => Some(self.score / kind.multiplier()),
        }
    }

    pub fn contains(&self, p: Point) -> bool {
        self.polygon.contains(p)
    }
}
