use ansi_term::Colour;
use serde::{Serialize, Serializer};
use std::fmt;

/// Color tokens understood by the list-view host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndicatorColor {
    Green,
    Red,
    Orange,
    Blue,
    Gray,
}

impl IndicatorColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            IndicatorColor::Green => "green",
            IndicatorColor::Red => "red",
            IndicatorColor::Orange => "orange",
            IndicatorColor::Blue => "blue",
            IndicatorColor::Gray => "gray",
        }
    }

    /// Terminal color used when rendering the indicator column.
    pub fn colour(&self) -> Colour {
        match self {
            IndicatorColor::Green => Colour::Green,
            IndicatorColor::Red => Colour::Red,
            IndicatorColor::Orange => Colour::RGB(255, 153, 51), // arancione
            IndicatorColor::Blue => Colour::Blue,
            IndicatorColor::Gray => Colour::Fixed(244),
        }
    }

    pub fn paint(&self, text: &str) -> String {
        self.colour().paint(text).to_string()
    }
}

impl fmt::Display for IndicatorColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for IndicatorColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
