//! CLI styling utilities
//!
//! Semantic styling via the [`Stylize`] trait with automatic terminal color
//! support detection (delegated to `owo-colors`). Status lines go to
//! stderr so stdout only ever carries the outcome JSON.
//!
//! | Method       | Color  | Semantic Use                          |
//! |--------------|--------|---------------------------------------|
//! | `.accent()`  | Cyan   | Record numbers, ids, counts           |
//! | `.success()` | Green  | Completed operations                  |
//! | `.error()`   | Red    | Failures, error messages              |
//! | `.warn()`    | Yellow | Partial success                       |
//! | `.muted()`   | Dim    | Hints, secondary detail               |
//! | `.emphasis()`| Bold   | Headers, current action               |

use std::fmt::{self, Display};
use std::sync::OnceLock;

use indicatif::ProgressStyle;
use owo_colors::{OwoColorize, Stream, Style};

const ACCENT: Style = Style::new().cyan();
const SUCCESS: Style = Style::new().green();
const ERROR: Style = Style::new().red();
const WARN: Style = Style::new().yellow();
const MUTED: Style = Style::new().dimmed();
const EMPHASIS: Style = Style::new().bold();

/// A value with semantic styling applied, rendered for stderr
#[derive(Clone, Debug)]
pub struct Styled<T> {
    value: T,
    style: Style,
}

impl<T> Styled<T> {
    const fn new(value: T, style: Style) -> Self {
        Self { value, style }
    }
}

impl<T: Display> Display for Styled<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // owo-colors handles NO_COLOR, CLICOLOR, CLICOLOR_FORCE, TTY detection.
        write!(
            f,
            "{}",
            self.value
                .if_supports_color(Stream::Stderr, |v| v.style(self.style))
        )
    }
}

/// Extension trait for semantic terminal styling
pub trait Stylize: Display {
    /// Accent color (cyan) for record numbers, ids and counts
    fn accent(&self) -> Styled<&Self> {
        Styled::new(self, ACCENT)
    }

    /// Success color (green)
    fn success(&self) -> Styled<&Self> {
        Styled::new(self, SUCCESS)
    }

    /// Error color (red)
    fn error(&self) -> Styled<&Self> {
        Styled::new(self, ERROR)
    }

    /// Warning color (yellow)
    fn warn(&self) -> Styled<&Self> {
        Styled::new(self, WARN)
    }

    /// Muted style (dim)
    fn muted(&self) -> Styled<&Self> {
        Styled::new(self, MUTED)
    }

    /// Emphasis style (bold)
    fn emphasis(&self) -> Styled<&Self> {
        Styled::new(self, EMPHASIS)
    }
}

impl<T: Display + ?Sized> Stylize for T {}

/// Success checkmark
pub const CHECK: &str = "✓";

/// Error/failure cross
pub const CROSS: &str = "✗";

/// Partial-success marker
pub const PARTIAL: &str = "~";

/// Green checkmark for success states.
#[inline]
pub const fn check() -> Styled<&'static str> {
    Styled::new(CHECK, SUCCESS)
}

/// Red cross for failure states.
#[inline]
pub const fn cross() -> Styled<&'static str> {
    Styled::new(CROSS, ERROR)
}

/// Yellow marker for partial success.
#[inline]
pub const fn partial() -> Styled<&'static str> {
    Styled::new(PARTIAL, WARN)
}

/// Clickable hyperlink showing the URL itself (OSC 8 on stderr).
///
/// Falls back to plain URL text in terminals that don't support hyperlinks.
pub fn hyperlink_url(url: &str) -> String {
    if supports_hyperlinks::on(supports_hyperlinks::Stream::Stderr) {
        terminal_link::Link::new(url, url).to_string()
    } else {
        url.to_string()
    }
}

/// Default spinner style - cyan dots.
///
/// Template validated once on first call via `OnceLock`.
pub fn spinner_style() -> ProgressStyle {
    static STYLE: OnceLock<ProgressStyle> = OnceLock::new();
    STYLE
        .get_or_init(|| {
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .expect("hardcoded spinner template is valid")
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
        })
        .clone()
}
