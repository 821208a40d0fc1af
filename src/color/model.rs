//! RGB color with derived HSV components.

use std::fmt;

use super::namer::{classify, ColorName};

/// An 8-bit RGB color.
///
/// Hue, saturation and value are derived on every call and never stored,
/// so they always match the current channels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Reset all channels to zero.
    pub fn set_black(&mut self) {
        *self = Self::BLACK;
    }

    pub fn set_rgb(&mut self, r: u8, g: u8, b: u8) {
        self.r = r;
        self.g = g;
        self.b = b;
    }

    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    fn max_min(&self) -> (u8, u8) {
        let max = self.r.max(self.g).max(self.b);
        let min = self.r.min(self.g).min(self.b);
        (max, min)
    }

    /// Hue in whole degrees, `0..360`. Grays have hue 0.
    ///
    /// When several channels share the maximum, red wins over green and
    /// green over blue.
    pub fn hue(&self) -> u16 {
        let (max, min) = self.max_min();
        let delta = f32::from(max - min);
        if delta == 0.0 {
            return 0;
        }

        let (r, g, b) = (
            i32::from(self.r),
            i32::from(self.g),
            i32::from(self.b),
        );
        let sector = if self.r == max {
            (g - b) as f32 / delta
        } else if self.g == max {
            2.0 + (b - r) as f32 / delta
        } else {
            4.0 + (r - g) as f32 / delta
        };

        let mut degrees = sector * 60.0;
        if degrees < 0.0 {
            degrees += 360.0;
        }
        (degrees as u16) % 360
    }

    /// Saturation in `[0, 1]`: chroma relative to value.
    pub fn saturation(&self) -> f32 {
        let (max, min) = self.max_min();
        if max == 0 {
            return 0.0;
        }
        f32::from(max - min) / f32::from(max)
    }

    /// Value in `[0, 1]`: the largest channel over 255.
    pub fn value(&self) -> f32 {
        let (max, _) = self.max_min();
        f32::from(max) / 255.0
    }

    /// `(hue, saturation, value)` in one call.
    pub fn hsv(&self) -> (u16, f32, f32) {
        (self.hue(), self.saturation(), self.value())
    }

    /// Category of this color.
    pub fn name(&self) -> ColorName {
        classify(self.hue(), self.saturation(), self.value())
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_primary_hues() {
        assert_eq!(Color::new(255, 0, 0).hue(), 0);
        assert_eq!(Color::new(255, 255, 0).hue(), 60);
        assert_eq!(Color::new(0, 255, 0).hue(), 120);
        assert_eq!(Color::new(0, 255, 255).hue(), 180);
        assert_eq!(Color::new(0, 0, 255).hue(), 240);
        assert_eq!(Color::new(255, 0, 255).hue(), 300);
    }

    #[test]
    fn test_hue_just_below_red_wraps() {
        // r max, b slightly above g: negative sector wraps into 359
        assert_eq!(Color::new(255, 0, 1).hue(), 359);
    }

    #[test]
    fn test_hue_truncates() {
        // (100 - 50) / 150 * 60 = 20
        assert_eq!(Color::new(200, 100, 50).hue(), 20);
        // (255, 128, 0): 128/255*60 = 30.117... -> 30
        assert_eq!(Color::new(255, 128, 0).hue(), 30);
    }

    #[test]
    fn test_gray_has_zero_hue_and_saturation() {
        let gray = Color::new(90, 90, 90);
        assert_eq!(gray.hue(), 0);
        assert_eq!(gray.saturation(), 0.0);
        assert!((gray.value() - 90.0 / 255.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_black_is_all_zero() {
        assert_eq!(Color::BLACK.hsv(), (0, 0.0, 0.0));
    }

    #[test]
    fn test_saturation_is_chroma_over_value() {
        let c = Color::new(200, 100, 50);
        assert!((c.saturation() - 0.75).abs() < 1e-6);
    }

    #[test]
    fn test_set_black_resets_channels() {
        let mut c = Color::new(1, 2, 3);
        c.set_black();
        assert_eq!(c, Color::BLACK);
    }

    #[test]
    fn test_derived_values_follow_channel_updates() {
        let mut c = Color::new(255, 0, 0);
        assert_eq!(c.name(), ColorName::Red);
        c.set_rgb(0, 0, 255);
        assert_eq!(c.hue(), 240);
        assert_eq!(c.name(), ColorName::Blue);
    }

    #[test]
    fn test_display_hex() {
        assert_eq!(format!("{}", Color::new(255, 16, 0)), "#ff1000");
    }

    proptest! {
        #[test]
        fn prop_value_is_max_over_255(r in 0u8..=255, g in 0u8..=255, b in 0u8..=255) {
            let c = Color::new(r, g, b);
            let expected = f32::from(r.max(g).max(b)) / 255.0;
            prop_assert!((c.value() - expected).abs() <= f32::EPSILON);
        }

        #[test]
        fn prop_hue_in_range(r in 0u8..=255, g in 0u8..=255, b in 0u8..=255) {
            prop_assert!(Color::new(r, g, b).hue() < 360);
        }

        #[test]
        fn prop_saturation_in_unit_interval(r in 0u8..=255, g in 0u8..=255, b in 0u8..=255) {
            let s = Color::new(r, g, b).saturation();
            prop_assert!((0.0..=1.0).contains(&s));
        }
    }
}
