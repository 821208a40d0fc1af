//! Color model, naming rules and display formatting.

mod model;
mod namer;
mod names;
mod readout;

pub use model::Color;
pub use namer::{classify, ColorName, UnknownColorName};
pub use names::{Locale, NameTable, UnknownLocale};
pub use readout::{pad3, percent, Readout};
