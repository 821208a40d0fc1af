//! Naming of concrete RGB colors and their localized labels.

use color_namer::color::{Color, ColorName, Locale, NameTable, Readout};

#[test]
fn test_named_rgb_colors() {
    let cases: [([u8; 3], ColorName); 12] = [
        ([255, 0, 0], ColorName::Red),
        ([255, 128, 0], ColorName::Orange),
        ([150, 100, 50], ColorName::Brown),
        ([255, 255, 0], ColorName::Yellow),
        ([0, 128, 0], ColorName::Green),
        ([0, 255, 255], ColorName::Cyan),
        ([0, 0, 255], ColorName::Blue),
        ([192, 0, 255], ColorName::Purple),
        ([255, 0, 64], ColorName::Pink),
        ([20, 20, 20], ColorName::Black),
        ([128, 128, 128], ColorName::Gray),
        ([250, 250, 250], ColorName::White),
    ];
    for (rgb, expected) in cases {
        let color = Color::from(rgb);
        assert_eq!(color.name(), expected, "{} ({:?})", color, color.hsv());
    }
}

#[test]
fn test_gray_hue_is_zero() {
    for level in [0u8, 1, 127, 254, 255] {
        assert_eq!(Color::new(level, level, level).hue(), 0);
        assert_eq!(Color::new(level, level, level).saturation(), 0.0);
    }
}

#[test]
fn test_near_black_chromatic_is_black() {
    // Fully saturated but value 45/255 < 0.18
    assert_eq!(Color::new(0, 0, 45).name(), ColorName::Black);
    assert_eq!(Color::new(0, 0, 46).name(), ColorName::Blue);
}

#[test]
fn test_readout_for_mid_tone() {
    let readout = Readout::of(&Color::new(200, 100, 50));
    assert_eq!(readout.rgb, ["200", "100", "050"]);
    assert_eq!(readout.hsv, ["020", "075", "078"]);
    assert_eq!(readout.to_string(), "RGB 200 100 050  HSV 020 075 078");
}

#[test]
fn test_every_category_has_a_label_in_every_locale() {
    for locale in Locale::ALL {
        let table = NameTable::for_locale(locale);
        assert_eq!(table.entries().count(), ColorName::ALL.len());
        for (name, label) in table.entries() {
            assert!(!label.is_empty(), "{:?} has no {} label", name, locale);
        }
    }
}

#[test]
fn test_french_labels() {
    let table = NameTable::for_locale(Locale::French);
    assert_eq!(table.resolve(ColorName::Red), "Rouge");
    assert_eq!(table.resolve(ColorName::Brown), "Marron");
    assert_eq!(table.resolve(ColorName::Purple), "Violet");
    assert_eq!(table.resolve(ColorName::White), "Blanc");
    assert_eq!(table.format_error(), "Format d'image non supporté");
}

#[test]
fn test_locale_codes_parse() {
    assert_eq!("fr".parse::<Locale>(), Ok(Locale::French));
    assert_eq!("en".parse::<Locale>(), Ok(Locale::English));
    assert!("de".parse::<Locale>().is_err());
}
