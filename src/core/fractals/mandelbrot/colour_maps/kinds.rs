use clap::ValueEnum;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum MandelbrotColourMapKind {
    #[default]
    #[value(name = "shade")]
    Shade,
    #[value(name = "blue-white")]
    BlueWhiteGradient,
    #[value(name = "fire")]
    FireGradient,
}

impl MandelbrotColourMapKind {
    pub const ALL: &'static [Self] = &[Self::Shade, Self::BlueWhiteGradient, Self::FireGradient];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Shade => "Shade",
            Self::BlueWhiteGradient => "Blue-white gradient",
            Self::FireGradient => "Fire gradient",
        }
    }

    /// Identifier accepted on the command line.
    #[must_use]
    pub const fn cli_name(self) -> &'static str {
        match self {
            Self::Shade => "shade",
            Self::BlueWhiteGradient => "blue-white",
            Self::FireGradient => "fire",
        }
    }
}

impl fmt::Display for MandelbrotColourMapKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
