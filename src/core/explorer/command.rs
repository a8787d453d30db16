use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanDirection {
    Up,
    Down,
    Left,
    Right,
}

impl PanDirection {
    /// Unit offsets in screen orientation: `+x` right, `+y` down.
    #[must_use]
    pub fn offsets(self) -> (f64, f64) {
        match self {
            Self::Up => (0.0, -1.0),
            Self::Down => (0.0, 1.0),
            Self::Left => (-1.0, 0.0),
            Self::Right => (1.0, 0.0),
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

/// A discrete request to the viewport controller. Cursor positions are in
/// (possibly fractional) screen pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ExplorerCommand {
    Pan(PanDirection),
    ZoomIn { x: f64, y: f64 },
    ZoomOut { x: f64, y: f64 },
    Recenter { x: f64, y: f64 },
    StartContinuousZoom,
    StopContinuousZoom,
    /// Advances continuous zoom by one step.
    Tick,
    Reset,
    Quit,
    Unrecognized,
}

impl fmt::Display for ExplorerCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pan(direction) => write!(f, "pan {}", direction.name()),
            Self::ZoomIn { x, y } => write!(f, "zoom in at ({x}, {y})"),
            Self::ZoomOut { x, y } => write!(f, "zoom out at ({x}, {y})"),
            Self::Recenter { x, y } => write!(f, "recenter at ({x}, {y})"),
            Self::StartContinuousZoom => f.write_str("start continuous zoom"),
            Self::StopContinuousZoom => f.write_str("stop continuous zoom"),
            Self::Tick => f.write_str("tick"),
            Self::Reset => f.write_str("reset view"),
            Self::Quit => f.write_str("quit"),
            Self::Unrecognized => f.write_str("unrecognized input"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandParseError {
    #[error("unknown command `{0}`")]
    Unknown(String),
    #[error("command `{0}` needs a cursor position such as `{0}@500,300`")]
    MissingCursor(String),
    #[error("invalid cursor position `{0}`, expected `x,y`")]
    InvalidCursor(String),
    #[error("command `{0}` does not take a cursor position")]
    UnexpectedCursor(String),
}

fn parse_cursor(text: &str) -> Result<(f64, f64), CommandParseError> {
    let invalid = || CommandParseError::InvalidCursor(text.to_string());
    let (x, y) = text.split_once(',').ok_or_else(invalid)?;
    let x: f64 = x.trim().parse().map_err(|_| invalid())?;
    let y: f64 = y.trim().parse().map_err(|_| invalid())?;

    if x.is_finite() && y.is_finite() {
        Ok((x, y))
    } else {
        Err(invalid())
    }
}

/// Parses one script token, e.g. `pan-left` or `zoom-in@500,300`.
impl FromStr for ExplorerCommand {
    type Err = CommandParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        let (name, cursor) = match token.split_once('@') {
            Some((name, cursor)) => (name, Some(cursor)),
            None => (token, None),
        };
        let name = name.to_ascii_lowercase();

        let at_cursor = |build: fn(f64, f64) -> Self| match cursor {
            Some(cursor) => parse_cursor(cursor).map(|(x, y)| build(x, y)),
            None => Err(CommandParseError::MissingCursor(name.clone())),
        };

        let command = match name.as_str() {
            "zoom-in" => return at_cursor(|x, y| Self::ZoomIn { x, y }),
            "zoom-out" => return at_cursor(|x, y| Self::ZoomOut { x, y }),
            "recenter" => return at_cursor(|x, y| Self::Recenter { x, y }),
            "pan-up" => Self::Pan(PanDirection::Up),
            "pan-down" => Self::Pan(PanDirection::Down),
            "pan-left" => Self::Pan(PanDirection::Left),
            "pan-right" => Self::Pan(PanDirection::Right),
            "continuous-start" => Self::StartContinuousZoom,
            "continuous-stop" => Self::StopContinuousZoom,
            "tick" => Self::Tick,
            "reset" => Self::Reset,
            "quit" => Self::Quit,
            _ => return Err(CommandParseError::Unknown(token.to_string())),
        };

        if cursor.is_some() {
            return Err(CommandParseError::UnexpectedCursor(name));
        }

        Ok(command)
    }
}

/// Splits a script on whitespace and `;`. Text after `#` on a line is ignored.
pub fn parse_script(script: &str) -> Result<Vec<ExplorerCommand>, CommandParseError> {
    script
        .lines()
        .map(|line| line.split('#').next().unwrap_or_default())
        .flat_map(|line| line.split(|c: char| c.is_whitespace() || c == ';'))
        .filter(|token| !token.is_empty())
        .map(str::parse)
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Redraw,
    NoRedraw,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ZoomRefusal {
    #[error(
        "precision exhausted: pixel size {pixel_size:e} is below the floating-point floor {floor:e}"
    )]
    PrecisionExhausted { pixel_size: f64, floor: f64 },
    #[error("resulting viewport would not be finite")]
    OutOfRange,
}

/// What a single controller transition did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CommandReport {
    pub outcome: CommandOutcome,
    pub refusal: Option<ZoomRefusal>,
    pub continuous_zoom_stopped: bool,
}

impl CommandReport {
    #[must_use]
    pub fn redraw() -> Self {
        Self {
            outcome: CommandOutcome::Redraw,
            refusal: None,
            continuous_zoom_stopped: false,
        }
    }

    #[must_use]
    pub fn no_redraw() -> Self {
        Self {
            outcome: CommandOutcome::NoRedraw,
            ..Self::redraw()
        }
    }

    #[must_use]
    pub fn quit() -> Self {
        Self {
            outcome: CommandOutcome::Quit,
            ..Self::redraw()
        }
    }

    #[must_use]
    pub fn refused(refusal: ZoomRefusal) -> Self {
        Self {
            refusal: Some(refusal),
            ..Self::no_redraw()
        }
    }

    #[must_use]
    pub fn needs_redraw(&self) -> bool {
        self.outcome == CommandOutcome::Redraw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_commands() {
        assert_eq!(
            "pan-left".parse::<ExplorerCommand>(),
            Ok(ExplorerCommand::Pan(PanDirection::Left))
        );
        assert_eq!(
            "continuous-start".parse::<ExplorerCommand>(),
            Ok(ExplorerCommand::StartContinuousZoom)
        );
        assert_eq!("QUIT".parse::<ExplorerCommand>(), Ok(ExplorerCommand::Quit));
    }

    #[test]
    fn parses_cursor_commands() {
        assert_eq!(
            "zoom-in@500,300".parse::<ExplorerCommand>(),
            Ok(ExplorerCommand::ZoomIn { x: 500.0, y: 300.0 })
        );
        assert_eq!(
            "recenter@12.5, 7".parse::<ExplorerCommand>(),
            Ok(ExplorerCommand::Recenter { x: 12.5, y: 7.0 })
        );
    }

    #[test]
    fn cursor_commands_require_a_position() {
        assert_eq!(
            "zoom-out".parse::<ExplorerCommand>(),
            Err(CommandParseError::MissingCursor("zoom-out".to_string()))
        );
    }

    #[test]
    fn malformed_positions_are_rejected() {
        assert_eq!(
            "zoom-in@500".parse::<ExplorerCommand>(),
            Err(CommandParseError::InvalidCursor("500".to_string()))
        );
        assert_eq!(
            "zoom-in@a,b".parse::<ExplorerCommand>(),
            Err(CommandParseError::InvalidCursor("a,b".to_string()))
        );
        assert_eq!(
            "zoom-in@inf,0".parse::<ExplorerCommand>(),
            Err(CommandParseError::InvalidCursor("inf,0".to_string()))
        );
    }

    #[test]
    fn plain_commands_reject_positions() {
        assert_eq!(
            "reset@1,2".parse::<ExplorerCommand>(),
            Err(CommandParseError::UnexpectedCursor("reset".to_string()))
        );
    }

    #[test]
    fn unknown_tokens_are_errors() {
        assert_eq!(
            "teleport".parse::<ExplorerCommand>(),
            Err(CommandParseError::Unknown("teleport".to_string()))
        );
    }

    #[test]
    fn script_splits_on_whitespace_semicolons_and_skips_comments() {
        let script = "zoom-in@500,300; pan-up\n# setup done\ncontinuous-start tick tick # two steps\nquit";

        let commands = parse_script(script).unwrap();

        assert_eq!(
            commands,
            vec![
                ExplorerCommand::ZoomIn { x: 500.0, y: 300.0 },
                ExplorerCommand::Pan(PanDirection::Up),
                ExplorerCommand::StartContinuousZoom,
                ExplorerCommand::Tick,
                ExplorerCommand::Tick,
                ExplorerCommand::Quit,
            ]
        );
    }

    #[test]
    fn script_reports_first_bad_token() {
        assert_eq!(
            parse_script("pan-up fly reset"),
            Err(CommandParseError::Unknown("fly".to_string()))
        );
    }

    #[test]
    fn commands_describe_themselves() {
        assert_eq!(
            ExplorerCommand::ZoomIn { x: 500.0, y: 300.0 }.to_string(),
            "zoom in at (500, 300)"
        );
        assert_eq!(ExplorerCommand::Pan(PanDirection::Down).to_string(), "pan down");
    }

    #[test]
    fn refused_report_does_not_redraw() {
        let report = CommandReport::refused(ZoomRefusal::OutOfRange);

        assert!(!report.needs_redraw());
        assert_eq!(report.refusal, Some(ZoomRefusal::OutOfRange));
    }
}
