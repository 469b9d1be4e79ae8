//! Terminal configuration sourced from code or the environment.
//!
//! Environment reads go through a lookup closure so callers and tests can
//! supply their own variables.

use chrono::{DateTime, FixedOffset, Offset, TimeZone, Utc};
use chrono_tz::Tz;
use std::io::IsTerminal;
use tracing::warn;

const DEFAULT_UTC_OFFSET_SECS: i32 = -3 * 3600;

/// Whether coloured output is allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorPolicy {
    /// `NO_COLOR` is set; colours are off.
    NoColor,
    /// `FORCE_COLOR` is set; colours are on.
    Forced,
    /// Decided from the terminal: `true` for a TTY whose `TERM` is not `dumb`.
    Detected(bool),
}

impl ColorPolicy {
    /// Resolves the policy from variables returned by `lookup`.
    ///
    /// Empty values count as unset.
    ///
    /// # Examples
    ///
    /// ```
    /// use zyro_utils::terminal::ColorPolicy;
    ///
    /// let policy = ColorPolicy::from_lookup(|key| (key == "NO_COLOR").then(|| "1".to_owned()), true);
    /// assert_eq!(policy, ColorPolicy::NoColor);
    /// assert!(!policy.enabled());
    /// ```
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>, is_tty: bool) -> Self {
        let is_set = |key: &str| lookup(key).is_some_and(|value| !value.is_empty());
        if is_set("NO_COLOR") {
            return Self::NoColor;
        }
        if is_set("FORCE_COLOR") {
            return Self::Forced;
        }
        let dumb = lookup("TERM").is_some_and(|term| term == "dumb");
        Self::Detected(is_tty && !dumb)
    }

    /// Resolves the policy from the process environment and stdout.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(
            |key| std::env::var(key).ok(),
            std::io::stdout().is_terminal(),
        )
    }

    /// Returns `true` when escape codes should be emitted.
    #[must_use]
    pub const fn enabled(self) -> bool {
        match self {
            Self::NoColor => false,
            Self::Forced => true,
            Self::Detected(allowed) => allowed,
        }
    }
}

/// Zone used to render timestamps.
///
/// Named zones follow daylight-saving changes; fixed offsets never move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampZone {
    /// A constant offset from UTC.
    Fixed(FixedOffset),
    /// An IANA zone such as `America/Sao_Paulo`.
    Named(Tz),
}

impl TimestampZone {
    /// Parses `UTC`, `Z`, `±HH`, `±HH:MM`, or an IANA zone name.
    ///
    /// # Examples
    ///
    /// ```
    /// use zyro_utils::terminal::TimestampZone;
    ///
    /// assert!(matches!(TimestampZone::parse("+05:30"), Some(TimestampZone::Fixed(_))));
    /// assert!(matches!(TimestampZone::parse("Europe/Lisbon"), Some(TimestampZone::Named(_))));
    /// assert_eq!(TimestampZone::parse("Mars/Olympus"), None);
    /// ```
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        parse_offset(raw)
            .map(Self::Fixed)
            .or_else(|| raw.trim().parse::<Tz>().ok().map(Self::Named))
    }

    /// Returns the offset in effect at `instant`.
    #[must_use]
    pub fn offset_at(self, instant: DateTime<Utc>) -> FixedOffset {
        match self {
            Self::Fixed(offset) => offset,
            Self::Named(tz) => tz.offset_from_utc_datetime(&instant.naive_utc()).fix(),
        }
    }
}

impl Default for TimestampZone {
    fn default() -> Self {
        Self::Fixed(default_offset())
    }
}

/// Settings for [`Terminal`](super::Terminal) output.
///
/// # Examples
///
/// ```
/// use zyro_utils::terminal::{TerminalConfig, TimestampZone};
///
/// let config = TerminalConfig::default().with_app_name("api").with_show_pid(true);
/// assert_eq!(config.app_name.as_deref(), Some("api"));
/// assert_eq!(config.zone, TimestampZone::default());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalConfig {
    /// Application tag shown after the timestamp, upper-cased.
    pub app_name: Option<String>,
    /// Show the process id after the application tag.
    pub show_pid: bool,
    /// Zone applied to timestamps.
    pub zone: TimestampZone,
    /// Emit ANSI colours.
    pub colors: bool,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            app_name: None,
            show_pid: false,
            zone: TimestampZone::default(),
            colors: false,
        }
    }
}

impl TerminalConfig {
    /// Reads `CARGO_PKG_NAME`, `TIMEZONE`, and the colour variables from
    /// the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(
            |key| std::env::var(key).ok(),
            std::io::stdout().is_terminal(),
        )
    }

    /// Builds the configuration from variables returned by `lookup`.
    ///
    /// `TIMEZONE` accepts anything [`TimestampZone::parse`] does.
    /// Unparseable values fall back to the default zone with a warning.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>, is_tty: bool) -> Self {
        let zone = lookup("TIMEZONE")
            .filter(|raw| !raw.trim().is_empty())
            .map_or_else(TimestampZone::default, |raw| {
                TimestampZone::parse(&raw).unwrap_or_else(|| {
                    warn!(timezone = %raw, "unrecognised TIMEZONE, using default zone");
                    TimestampZone::default()
                })
            });

        Self {
            app_name: lookup("CARGO_PKG_NAME").filter(|name| !name.is_empty()),
            show_pid: false,
            zone,
            colors: ColorPolicy::from_lookup(lookup, is_tty).enabled(),
        }
    }

    /// Sets the application tag.
    #[must_use]
    pub fn with_app_name(mut self, name: impl Into<String>) -> Self {
        self.app_name = Some(name.into());
        self
    }

    /// Shows or hides the process id.
    #[must_use]
    pub const fn with_show_pid(mut self, show_pid: bool) -> Self {
        self.show_pid = show_pid;
        self
    }

    /// Sets a fixed timestamp offset.
    #[must_use]
    pub const fn with_utc_offset(mut self, offset: FixedOffset) -> Self {
        self.zone = TimestampZone::Fixed(offset);
        self
    }

    /// Sets a named timestamp zone.
    #[must_use]
    pub const fn with_time_zone(mut self, tz: Tz) -> Self {
        self.zone = TimestampZone::Named(tz);
        self
    }

    /// Turns colours on or off.
    #[must_use]
    pub const fn with_colors(mut self, colors: bool) -> Self {
        self.colors = colors;
        self
    }
}

fn default_offset() -> FixedOffset {
    FixedOffset::east_opt(DEFAULT_UTC_OFFSET_SECS).unwrap_or_else(|| Utc.fix())
}

/// Parses `UTC`, `Z`, `±HH`, or `±HH:MM`.
pub(crate) fn parse_offset(raw: &str) -> Option<FixedOffset> {
    let text = raw.trim();
    if text.eq_ignore_ascii_case("utc") || text == "Z" {
        return Some(Utc.fix());
    }

    let (sign, rest) = match text.split_at_checked(1)? {
        ("+", tail) => (1, tail),
        ("-", tail) => (-1, tail),
        _ => return None,
    };
    let (hour_text, minute_text) = rest.split_once(':').unwrap_or((rest, "00"));
    if !hour_text
        .bytes()
        .chain(minute_text.bytes())
        .all(|byte| byte.is_ascii_digit())
    {
        return None;
    }
    let hours: i32 = hour_text.parse().ok()?;
    let minutes: i32 = minute_text.parse().ok()?;
    if hours > 23 || minutes > 59 {
        return None;
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}
