//! Localized display names for color categories.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

use super::namer::ColorName;

/// Display language for color names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "fr")]
    French,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::English, Locale::French];

    pub fn code(self) -> &'static str {
        match self {
            Locale::English => "en",
            Locale::French => "fr",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown locale '{0}' (expected one of: en, fr)")]
pub struct UnknownLocale(pub String);

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::ALL
            .into_iter()
            .find(|locale| locale.code().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownLocale(s.to_string()))
    }
}

/// Maps color categories to display strings for one locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameTable {
    locale: Locale,
    names: HashMap<ColorName, String>,
    format_error: String,
}

impl NameTable {
    /// Built-in table for `locale`.
    pub fn for_locale(locale: Locale) -> Self {
        let (entries, format_error): (&[(ColorName, &str)], &str) = match locale {
            Locale::English => (&ENGLISH, "Unsupported image format"),
            Locale::French => (&FRENCH, "Format d'image non supporté"),
        };
        Self {
            locale,
            names: entries
                .iter()
                .map(|&(name, label)| (name, label.to_string()))
                .collect(),
            format_error: format_error.to_string(),
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Replace the display string of one category.
    pub fn set(&mut self, name: ColorName, label: impl Into<String>) {
        self.names.insert(name, label.into());
    }

    /// Display string for `name`.
    pub fn resolve(&self, name: ColorName) -> &str {
        self.names
            .get(&name)
            .map(String::as_str)
            .unwrap_or_else(|| name.key())
    }

    /// Message shown when a frame is rejected for its format.
    pub fn format_error(&self) -> &str {
        &self.format_error
    }

    /// All entries in category order.
    pub fn entries(&self) -> impl Iterator<Item = (ColorName, &str)> + '_ {
        ColorName::ALL
            .into_iter()
            .map(move |name| (name, self.resolve(name)))
    }
}

impl Default for NameTable {
    fn default() -> Self {
        Self::for_locale(Locale::default())
    }
}

const ENGLISH: [(ColorName, &str); 12] = [
    (ColorName::Red, "Red"),
    (ColorName::Orange, "Orange"),
    (ColorName::Brown, "Brown"),
    (ColorName::Yellow, "Yellow"),
    (ColorName::Green, "Green"),
    (ColorName::Cyan, "Cyan"),
    (ColorName::Blue, "Blue"),
    (ColorName::Purple, "Purple"),
    (ColorName::Pink, "Pink"),
    (ColorName::Black, "Black"),
    (ColorName::Gray, "Gray"),
    (ColorName::White, "White"),
];

const FRENCH: [(ColorName, &str); 12] = [
    (ColorName::Red, "Rouge"),
    (ColorName::Orange, "Orange"),
    (ColorName::Brown, "Marron"),
    (ColorName::Yellow, "Jaune"),
    (ColorName::Green, "Vert"),
    (ColorName::Cyan, "Cyan"),
    (ColorName::Blue, "Bleu"),
    (ColorName::Purple, "Violet"),
    (ColorName::Pink, "Rose"),
    (ColorName::Black, "Noir"),
    (ColorName::Gray, "Gris"),
    (ColorName::White, "Blanc"),
];
