//! CLI enum types.

use clap::ValueEnum;

use color_namer::color::Locale;

/// Language used for color names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LocaleArg {
    #[default]
    En,
    Fr,
}

impl From<LocaleArg> for Locale {
    fn from(l: LocaleArg) -> Self {
        match l {
            LocaleArg::En => Locale::English,
            LocaleArg::Fr => Locale::French,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_arg_conversion() {
        assert_eq!(Locale::from(LocaleArg::En), Locale::English);
        assert_eq!(Locale::from(LocaleArg::Fr), Locale::French);
    }
}
