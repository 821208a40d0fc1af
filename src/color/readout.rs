//! Fixed-width numeric readouts of a color.

use std::fmt;

use super::model::Color;

/// Zero-pad a channel to three digits (`7` -> `"007"`).
pub fn pad3(value: u32) -> String {
    format!("{:03}", value)
}

/// Scale a `[0, 1]` component to a whole percentage, truncating.
pub fn percent(fraction: f32) -> u32 {
    (fraction * 100.0) as u32
}

/// RGB and HSV strings for display, each three digits wide.
///
/// Saturation and value are shown as truncated percentages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Readout {
    pub rgb: [String; 3],
    pub hsv: [String; 3],
}

impl Readout {
    pub fn of(color: &Color) -> Self {
        let (h, s, v) = color.hsv();
        Self {
            rgb: [
                pad3(u32::from(color.r)),
                pad3(u32::from(color.g)),
                pad3(u32::from(color.b)),
            ],
            hsv: [pad3(u32::from(h)), pad3(percent(s)), pad3(percent(v))],
        }
    }
}

impl fmt::Display for Readout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = &self.rgb;
        let [h, s, v] = &self.hsv;
        write!(f, "RGB {} {} {}  HSV {} {} {}", r, g, b, h, s, v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad3() {
        assert_eq!(pad3(7), "007");
        assert_eq!(pad3(42), "042");
        assert_eq!(pad3(255), "255");
        assert_eq!(pad3(0), "000");
    }

    #[test]
    fn test_percent_truncates() {
        assert_eq!(percent(0.07), 7);
        assert_eq!(pad3(percent(0.07)), "007");
        assert_eq!(percent(0.999), 99);
        assert_eq!(percent(1.0), 100);
    }

    #[test]
    fn test_readout_pure_green() {
        let readout = Readout::of(&Color::new(0, 255, 0));
        assert_eq!(readout.rgb, ["000", "255", "000"].map(String::from));
        assert_eq!(readout.hsv, ["120", "100", "100"].map(String::from));
        assert_eq!(readout.to_string(), "RGB 000 255 000  HSV 120 100 100");
    }

    #[test]
    fn test_readout_brownish() {
        let readout = Readout::of(&Color::new(200, 100, 50));
        assert_eq!(readout.hsv, ["020", "075", "078"].map(String::from));
    }
}
