//! Flagged, timestamped log lines for humans.

use super::{
    ansi::{Ansi, Style},
    config::TerminalConfig,
};
use mockable::{Clock, DefaultClock};
use std::{
    fmt,
    io::{self, Write},
    sync::{Arc, Mutex, PoisonError},
};
use tracing::warn;

const TIMESTAMP_FORMAT: &str = "%d/%m %H:%M:%S";

type Sink = Box<dyn Write + Send>;

/// Writes one line per call to a sink, standard output by default.
///
/// A line reads `dd/mm HH:MM:SS | APP | PID | [FLAG] part part ...`; the
/// application tag and process id appear only when configured.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use mockable::DefaultClock;
/// use zyro_utils::terminal::{Style, Terminal, TerminalConfig};
///
/// let terminal = Terminal::new(Arc::new(DefaultClock), TerminalConfig::default(), std::io::sink());
/// let line = terminal.format_line("boot", Style::BrightCyan, &[&"listening on", &8080]);
/// assert!(line.ends_with("|  [BOOT] listening on 8080"));
/// ```
pub struct Terminal<C: Clock + Send + Sync = DefaultClock> {
    clock: Arc<C>,
    config: TerminalConfig,
    ansi: Ansi,
    sink: Mutex<Sink>,
}

impl Terminal<DefaultClock> {
    /// Terminal writing to standard output with environment configuration.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(Arc::new(DefaultClock), TerminalConfig::from_env(), io::stdout())
    }
}

impl<C: Clock + Send + Sync> Terminal<C> {
    /// Creates a terminal with an explicit clock, configuration, and sink.
    #[must_use]
    pub fn new(clock: Arc<C>, config: TerminalConfig, sink: impl Write + Send + 'static) -> Self {
        let ansi = Ansi::new(config.colors);
        Self {
            clock,
            config,
            ansi,
            sink: Mutex::new(Box::new(sink)),
        }
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &TerminalConfig {
        &self.config
    }

    /// Logs a success line in bright green.
    pub fn success(&self, flag: &str, parts: &[&dyn fmt::Display]) {
        self.log(flag, Style::BrightGreen, parts);
    }

    /// Logs an error line in bright red.
    pub fn error(&self, flag: &str, parts: &[&dyn fmt::Display]) {
        self.log(flag, Style::BrightRed, parts);
    }

    /// Logs an informational line in bright cyan.
    pub fn info(&self, flag: &str, parts: &[&dyn fmt::Display]) {
        self.log(flag, Style::BrightCyan, parts);
    }

    /// Logs a warning line in bright yellow.
    pub fn warn(&self, flag: &str, parts: &[&dyn fmt::Display]) {
        self.log(flag, Style::BrightYellow, parts);
    }

    /// Writes one line with the flag painted in `style`.
    ///
    /// Write failures are reported through `tracing` and otherwise ignored.
    pub fn log(&self, flag: &str, style: Style, parts: &[&dyn fmt::Display]) {
        let line = self.format_line(flag, style, parts);
        let mut sink = self.sink.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(err) = writeln!(sink, "{line}").and_then(|()| sink.flush()) {
            warn!(error = %err, flag, "failed to write terminal line");
        }
    }

    /// Renders a line without writing it.
    #[must_use]
    pub fn format_line(&self, flag: &str, style: Style, parts: &[&dyn fmt::Display]) -> String {
        let mut segments = Vec::with_capacity(parts.len() + 2);
        segments.push(self.ansi.paint(Style::Gray, self.prefix()));
        segments.push(
            self.ansi
                .paint(style, format_args!("[{}]", flag.to_uppercase())),
        );
        segments.extend(parts.iter().map(ToString::to_string));
        segments.join(" ")
    }

    fn prefix(&self) -> String {
        let now = self.clock.utc();
        let timestamp = now
            .with_timezone(&self.config.zone.offset_at(now))
            .format(TIMESTAMP_FORMAT);

        let mut prefix = format!("{timestamp} |");
        if let Some(app) = &self.config.app_name {
            prefix.push_str(&format!(" {} |", app.to_uppercase()));
        }
        if self.config.show_pid {
            prefix.push_str(&format!(" {} |", std::process::id()));
        }
        prefix.push(' ');
        prefix
    }
}

impl<C: Clock + Send + Sync> fmt::Debug for Terminal<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Terminal")
            .field("config", &self.config)
            .field("ansi", &self.ansi)
            .finish_non_exhaustive()
    }
}
