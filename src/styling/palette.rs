//! Highlight colors for the checked-out branch

use anstyle::{AnsiColor, Color, Style};

/// Foreground color applied to the current branch's line.
///
/// Parses the spelled-out names (`bright-red`) as well as the short
/// `hi` forms (`hired`). Anything else is rejected by `FromStr`;
/// [`HighlightColor::from_setting`] maps that to the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum::EnumString)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum HighlightColor {
    #[default]
    Red,
    #[strum(serialize = "bright-red", serialize = "hired")]
    BrightRed,
    Blue,
    #[strum(serialize = "bright-blue", serialize = "hiblue")]
    BrightBlue,
    Yellow,
    #[strum(serialize = "bright-yellow", serialize = "hiyellow")]
    BrightYellow,
    Black,
    #[strum(serialize = "bright-black", serialize = "hiblack")]
    BrightBlack,
}

impl HighlightColor {
    /// Resolve a configured value, falling back to red when unset or unknown.
    pub fn from_setting(value: Option<&str>) -> Self {
        match value.map(str::trim).map(str::parse::<Self>) {
            Some(Ok(color)) => color,
            Some(Err(_)) => {
                log::debug!("Unrecognized highlight color {:?}, using red", value);
                Self::default()
            }
            None => Self::default(),
        }
    }

    fn ansi(self) -> AnsiColor {
        match self {
            Self::Red => AnsiColor::Red,
            Self::BrightRed => AnsiColor::BrightRed,
            Self::Blue => AnsiColor::Blue,
            Self::BrightBlue => AnsiColor::BrightBlue,
            Self::Yellow => AnsiColor::Yellow,
            Self::BrightYellow => AnsiColor::BrightYellow,
            Self::Black => AnsiColor::Black,
            Self::BrightBlack => AnsiColor::BrightBlack,
        }
    }

    pub fn style(self) -> Style {
        Style::new().fg_color(Some(Color::Ansi(self.ansi())))
    }
}
