use serde::Deserialize;
use std::fmt;
use std::num::NonZeroU32;
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::error::BoardError;
use crate::format::FormatVersion;

/// Regulation board measurements, all radii in mm from the board centre.
///
/// Ring edges are measured to the outside of the wire:
///   Inner bull:   0.0 -> 6.35mm  (12.7mm diameter)
///   Outer bull:  6.35 -> 15.9mm  (31.8mm diameter)
///   Treble:      99.0 -> 107.0mm (8mm band)
///   Double:     162.0 -> 170.0mm (8mm band)
pub mod standard {
    pub const INNER_BULL_RADIUS: f64 = 12.7 / 2.0;
    pub const OUTER_BULL_RADIUS: f64 = 31.8 / 2.0;

    pub const RING_WIDTH: f64 = 8.0;
    pub const TREBLE_OUTER_RADIUS: f64 = 107.0;
    pub const TREBLE_INNER_RADIUS: f64 = TREBLE_OUTER_RADIUS - RING_WIDTH;
    pub const DOUBLE_OUTER_RADIUS: f64 = 170.0;
    pub const DOUBLE_INNER_RADIUS: f64 = DOUBLE_OUTER_RADIUS - RING_WIDTH;

    pub const SECTOR_COUNT: usize = 20;

    /// Clockwise from the top of the board
    pub const NUMBERS: [u32; SECTOR_COUNT] = [
        20, 1, 18, 4, 13, 6, 10, 15, 2, 17, 3, 19, 7, 16, 8, 11, 14, 9, 12, 5,
    ];

    pub const INNER_BULL_SCORE: u32 = 50;
    pub const OUTER_BULL_SCORE: u32 = 25;

    /// Lowest vertex count used for the inner bull disc
    pub const MIN_DISC_VERTICES: u32 = 32;
}

/// Physical board geometry handed to the assembler
#[derive(Debug, Clone, PartialEq)]
pub struct BoardDimensions {
    pub inner_bull_radius: f64,
    pub outer_bull_radius: f64,
    pub treble_inner_radius: f64,
    pub treble_outer_radius: f64,
    pub double_inner_radius: f64,
    pub double_outer_radius: f64,
    /// Sector numbers clockwise, index 0 centred at the top
    pub numbers: [u32; standard::SECTOR_COUNT],
}

impl Default for BoardDimensions {
    fn default() -> Self {
        Self::standard()
    }
}

impl BoardDimensions {
    /// The regulation board
    pub fn standard() -> Self {
        Self {
            inner_bull_radius: standard::INNER_BULL_RADIUS,
            outer_bull_radius: standard::OUTER_BULL_RADIUS,
            treble_inner_radius: standard::TREBLE_INNER_RADIUS,
            treble_outer_radius: standard::TREBLE_OUTER_RADIUS,
            double_inner_radius: standard::DOUBLE_INNER_RADIUS,
            double_outer_radius: standard::DOUBLE_OUTER_RADIUS,
            numbers: standard::NUMBERS,
        }
    }

    /// All six ring edges, innermost first
    pub fn radii(&self) -> [f64; 6] {
        [
            self.inner_bull_radius,
            self.outer_bull_radius,
            self.treble_inner_radius,
            self.treble_outer_radius,
            self.double_inner_radius,
            self.double_outer_radius,
        ]
    }

    /// Check radius ordering and that every number 1..=20 appears exactly once
    pub fn validate(&self) -> Result<(), BoardError> {
        let radii = self.radii();
        let increasing = radii[0] > 0.0
            && radii.iter().all(|r| r.is_finite())
            && radii.windows(2).all(|w| w[0] < w[1]);
        if !increasing {
            return Err(BoardError::RadiiOutOfOrder(radii));
        }

        let mut seen = [false; standard::SECTOR_COUNT];
        for &n in &self.numbers {
            let slot = (n as usize)
                .checked_sub(1)
                .and_then(|i| seen.get_mut(i))
                .ok_or(BoardError::InvalidNumbers(self.numbers))?;
            if *slot {
                return Err(BoardError::InvalidNumbers(self.numbers));
            }
            *slot = true;
        }

        Ok(())
    }
}

/// Number of straight segments used per arc
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Subdivisions(NonZeroU32);

impl Subdivisions {
    pub const DEFAULT: Subdivisions =
        Subdivisions(NonZeroU32::MIN.saturating_add(DEFAULT_SUBDIVISIONS - 1));

    /// Accepts `1..=MAX_SUBDIVISIONS`
    pub fn new(count: u32) -> Result<Self, BoardError> {
        NonZeroU32::new(count)
            .filter(|n| n.get() <= MAX_SUBDIVISIONS)
            .map(Self)
            .ok_or(BoardError::InvalidSubdivisions(count))
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }
}

impl Default for Subdivisions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u32> for Subdivisions {
    type Error = BoardError;

    fn try_from(count: u32) -> Result<Self, Self::Error> {
        Self::new(count)
    }
}

impl fmt::Display for Subdivisions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub const DEFAULT_SUBDIVISIONS: u32 = 8;
/// Upper bound on segments per arc; keeps the largest bed at a few thousand
/// vertices and the output file in the megabytes
pub const MAX_SUBDIVISIONS: u32 = 4096;
pub const DEFAULT_OUTPUT: &str = "target.out";

/// Settings read from a `dartboard.toml` file
#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    #[serde(default)]
    pub subdivisions: Option<u32>,
    #[serde(default)]
    pub output: Option<PathBuf>,
    #[serde(default)]
    pub format: Option<FormatVersion>,
    #[serde(default)]
    pub verbose: bool,
}

impl FileConfig {
    /// Read an explicitly named config file
    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            anyhow::bail!("Config file not found: {:?}", path);
        }
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        toml::from_str(&contents).with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    /// First config in the search order that parses, with the path it came from
    ///
    /// Files that exist but fail to parse are reported and skipped.
    pub fn discover() -> Option<(PathBuf, Self)> {
        get_config_paths()
            .into_iter()
            .filter(|path| path.is_file())
            .find_map(|path| match Self::from_path(&path) {
                Ok(config) => Some((path, config)),
                Err(e) => {
                    eprintln!("Warning: skipping config {:?}: {:#}", path, e);
                    None
                }
            })
    }
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = vec![
        PathBuf::from("dartboard.toml"),
        PathBuf::from(".dartboard.toml"),
    ];

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("dartboard").join("config.toml"));
        paths.push(config_dir.join("dartboard.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".dartboard.toml"));
    }

    paths
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_radii_increase() {
        let dims = BoardDimensions::standard();
        assert!(dims.validate().is_ok());
        assert_eq!(dims.radii(), [6.35, 15.9, 99.0, 107.0, 162.0, 170.0]);
    }

    #[test]
    fn test_radii_out_of_order() {
        let dims = BoardDimensions {
            treble_inner_radius: 110.0,
            ..BoardDimensions::standard()
        };
        assert!(matches!(
            dims.validate(),
            Err(BoardError::RadiiOutOfOrder(_))
        ));
    }

    #[test]
    fn test_duplicate_number_rejected() {
        let mut dims = BoardDimensions::standard();
        dims.numbers[1] = 20;
        assert!(matches!(dims.validate(), Err(BoardError::InvalidNumbers(_))));

        dims.numbers[1] = 0;
        assert!(matches!(dims.validate(), Err(BoardError::InvalidNumbers(_))));
    }

    #[test]
    fn test_subdivisions() {
        assert_eq!(
            Subdivisions::new(0),
            Err(BoardError::InvalidSubdivisions(0))
        );
        assert_eq!(Subdivisions::new(3).unwrap().get(), 3);
        assert_eq!(
            Subdivisions::new(MAX_SUBDIVISIONS).unwrap().get(),
            MAX_SUBDIVISIONS
        );
        assert_eq!(
            Subdivisions::new(MAX_SUBDIVISIONS + 1),
            Err(BoardError::InvalidSubdivisions(MAX_SUBDIVISIONS + 1))
        );
        assert!(Subdivisions::try_from(u32::MAX).is_err());
        assert_eq!(Subdivisions::default().get(), DEFAULT_SUBDIVISIONS);
    }

    #[test]
    fn test_file_config_parse() {
        let config: FileConfig =
            toml::from_str("subdivisions = 16\noutput = \"board.out\"\nformat = \"v2\"\n").unwrap();
        assert_eq!(config.subdivisions, Some(16));
        assert_eq!(config.output, Some(PathBuf::from("board.out")));
        assert_eq!(config.format, Some(FormatVersion::V2));
        assert!(!config.verbose);
    }

    #[test]
    fn test_file_config_empty() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert!(config.subdivisions.is_none());
        assert!(config.format.is_none());
    }

    #[test]
    fn test_config_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dartboard.toml");
        std::fs::write(&path, "subdivisions = 32\nverbose = true\n").unwrap();

        let config = FileConfig::from_path(&path).unwrap();
        assert_eq!(config.subdivisions, Some(32));
        assert!(config.verbose);

        std::fs::write(&path, "subdivisions = \"many\"\n").unwrap();
        let err = FileConfig::from_path(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to parse config file"));

        let err = FileConfig::from_path(&dir.path().join("absent.toml")).unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }

    #[test]
    fn test_config_search_prefers_working_directory() {
        let paths = get_config_paths();
        assert_eq!(paths[0], PathBuf::from("dartboard.toml"));
        assert_eq!(paths[1], PathBuf::from(".dartboard.toml"));
        assert!(paths[2..].iter().all(|p| p.is_absolute()));
    }
}
