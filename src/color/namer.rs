//! Hue/saturation/value rule table mapping colors to names.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Color categories produced by [`classify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ColorName {
    Red,
    Orange,
    Brown,
    Yellow,
    Green,
    Cyan,
    Blue,
    Purple,
    Pink,
    Black,
    Gray,
    White,
}

impl ColorName {
    pub const ALL: [ColorName; 12] = [
        ColorName::Red,
        ColorName::Orange,
        ColorName::Brown,
        ColorName::Yellow,
        ColorName::Green,
        ColorName::Cyan,
        ColorName::Blue,
        ColorName::Purple,
        ColorName::Pink,
        ColorName::Black,
        ColorName::Gray,
        ColorName::White,
    ];

    /// Stable lowercase key, used in config files and name tables.
    pub fn key(self) -> &'static str {
        match self {
            ColorName::Red => "red",
            ColorName::Orange => "orange",
            ColorName::Brown => "brown",
            ColorName::Yellow => "yellow",
            ColorName::Green => "green",
            ColorName::Cyan => "cyan",
            ColorName::Blue => "blue",
            ColorName::Purple => "purple",
            ColorName::Pink => "pink",
            ColorName::Black => "black",
            ColorName::Gray => "gray",
            ColorName::White => "white",
        }
    }
}

impl fmt::Display for ColorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown color name '{0}'")]
pub struct UnknownColorName(pub String);

impl FromStr for ColorName {
    type Err = UnknownColorName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColorName::ALL
            .into_iter()
            .find(|name| name.key().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownColorName(s.to_string()))
    }
}

/// Name a color from its hue (degrees), saturation and value.
///
/// The hue bucket is picked first; the achromatic checks run afterwards and
/// override it. Very dark colors are black whatever their hue. Washed-out
/// colors are gray or white depending on brightness.
///
/// Thresholds compare in `f64`, so an `f32` input of `0.18` (which is
/// slightly above `0.18` in `f64`) is not black.
///
/// # Arguments
/// * `hue` - Whole degrees in `0..360`; larger values fall in the red bucket
/// * `saturation` - `0.0..=1.0`
/// * `value` - `0.0..=1.0`
///
/// # Returns
/// One of the twelve [`ColorName`] categories.
///
/// # Example
/// ```ignore
/// assert_eq!(classify(120, 1.0, 1.0), ColorName::Green);
/// assert_eq!(classify(120, 1.0, 0.1), ColorName::Black);
/// ```
pub fn classify(hue: u16, saturation: f32, value: f32) -> ColorName {
    let s = f64::from(saturation);
    let v = f64::from(value);

    let mut name = match hue {
        0..=14 | 346.. => ColorName::Red,
        15..=39 => {
            if s < 0.75 {
                ColorName::Brown
            } else {
                ColorName::Orange
            }
        }
        40..=73 => ColorName::Yellow,
        74..=154 => ColorName::Green,
        155..=185 => ColorName::Cyan,
        186..=277 => ColorName::Blue,
        278..=329 => ColorName::Purple,
        330..=345 => ColorName::Pink,
    };

    if v < 0.18 {
        name = ColorName::Black;
    } else if s < 0.1 {
        name = if v < 0.85 {
            ColorName::Gray
        } else {
            ColorName::White
        };
    }

    name
}
