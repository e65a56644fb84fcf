//! Command line
//!
//! `winplace <X> <Y> <WIDTH> <HEIGHT> [NAME]`. All coordinates describe the
//! visible window area, excluding invisible shadows.

use std::path::PathBuf;

use clap::Parser;
use clap::builder::NonEmptyStringValueParser;

use crate::geometry::Rect;

#[derive(Parser, Debug)]
#[command(
    name = "winplace",
    version,
    about = "Move and resize an X11 window so its visible area matches the given rectangle",
    after_help = "Coordinates refer to the visible window area (excluding shadows).\n\
                  If NAME is omitted, the currently active window is used.\n\n\
                  Examples:\n  winplace 0 0 960 1080\n  winplace 0 0 960 1080 \"Firefox\"",
    allow_negative_numbers = true
)]
pub struct Cli {
    /// Left edge of the visible area
    pub x: i32,

    /// Top edge of the visible area
    pub y: i32,

    /// Visible width in pixels
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    /// Visible height in pixels
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    pub height: u32,

    /// Place the first window whose title contains NAME instead of the
    /// active window
    #[arg(value_parser = NonEmptyStringValueParser::new(), allow_hyphen_values = true)]
    pub name: Option<String>,

    /// X display to connect to (defaults to $DISPLAY)
    #[arg(long, value_name = "DISPLAY")]
    pub display: Option<String>,

    /// Fixed delay after the un-maximize request
    #[arg(long, value_name = "MS", conflicts_with_all = ["wait_unmaximize", "no_unmaximize"])]
    pub settle_ms: Option<u64>,

    /// Poll until the window is no longer maximized, for at most MS
    #[arg(long, value_name = "MS", conflicts_with = "no_unmaximize")]
    pub wait_unmaximize: Option<u64>,

    /// Do not un-maximize the window first
    #[arg(long)]
    pub no_unmaximize: bool,

    /// Configuration file (defaults to ~/.config/winplace/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Visible target rectangle. Sizes are already checked by the parser.
    pub fn target(&self) -> Option<Rect> {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("winplace").chain(args.iter().copied()))
    }

    #[test]
    fn test_positional_arguments() {
        let cli = parse(&["0", "0", "960", "1080"]).unwrap();
        assert_eq!(cli.target(), Rect::new(0, 0, 960, 1080));
        assert_eq!(cli.name, None);

        let cli = parse(&["10", "20", "300", "200", "Firefox"]).unwrap();
        assert_eq!(cli.name.as_deref(), Some("Firefox"));
    }

    #[test]
    fn test_negative_position() {
        let cli = parse(&["-8", "-30", "640", "480"]).unwrap();
        assert_eq!((cli.x, cli.y), (-8, -30));
    }

    #[test]
    fn test_zero_size_rejected() {
        assert_eq!(
            parse(&["0", "0", "0", "1080"]).unwrap_err().kind(),
            ErrorKind::ValueValidation
        );
        assert_eq!(
            parse(&["0", "0", "960", "0"]).unwrap_err().kind(),
            ErrorKind::ValueValidation
        );
    }

    #[test]
    fn test_wrong_argument_count() {
        assert!(parse(&["0", "0", "960"]).is_err());
        assert!(parse(&["0", "0", "960", "1080", "a", "b"]).is_err());
    }

    #[test]
    fn test_non_numeric_rejected() {
        assert!(parse(&["zero", "0", "960", "1080"]).is_err());
        assert!(parse(&["0", "0", "-960", "1080"]).is_err());
    }

    #[test]
    fn test_empty_name_rejected() {
        assert!(parse(&["0", "0", "960", "1080", ""]).is_err());
    }

    #[test]
    fn test_name_may_start_with_hyphen() {
        let cli = parse(&["0", "0", "960", "1080", "- Mozilla Firefox"]).unwrap();
        assert_eq!(cli.name.as_deref(), Some("- Mozilla Firefox"));

        let cli = parse(&["0", "0", "960", "1080", "-bash"]).unwrap();
        assert_eq!(cli.name.as_deref(), Some("-bash"));
    }

    #[test]
    fn test_flags_after_name_still_parsed() {
        let cli = parse(&["0", "0", "960", "1080", "Firefox", "--no-unmaximize"]).unwrap();
        assert_eq!(cli.name.as_deref(), Some("Firefox"));
        assert!(cli.no_unmaximize);
    }

    #[test]
    fn test_settle_options() {
        let cli = parse(&["--wait-unmaximize", "300", "0", "0", "1", "1"]).unwrap();
        assert_eq!(cli.wait_unmaximize, Some(300));

        assert!(parse(&["--settle-ms", "10", "--no-unmaximize", "0", "0", "1", "1"]).is_err());
    }
}
