//! Line layout and sink handling for the terminal logger.

use crate::{
    terminal::{Style, Terminal, TerminalConfig},
    test_support::{FixedClock, SharedBuffer},
};
use chrono::FixedOffset;
use chrono_tz::Tz;
use rstest::{fixture, rstest};
use std::{
    io::{self, Write},
    sync::Arc,
};

struct BrokenSink;

impl Write for BrokenSink {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[fixture]
fn clock() -> Arc<FixedClock> {
    Arc::new(FixedClock::reference())
}

fn plain_config() -> TerminalConfig {
    TerminalConfig::default().with_colors(false)
}

#[rstest]
fn line_uses_default_offset(clock: Arc<FixedClock>) {
    let terminal = Terminal::new(clock, plain_config(), io::sink());

    let line = terminal.format_line("server", Style::BrightCyan, &[&"listening"]);

    assert_eq!(line, "09/03 11:05:07 |  [SERVER] listening");
}

#[rstest]
fn app_name_is_upper_cased(clock: Arc<FixedClock>) {
    let config = plain_config()
        .with_app_name("zyro-api")
        .with_utc_offset(FixedOffset::east_opt(0).expect("valid offset"));
    let terminal = Terminal::new(clock, config, io::sink());

    let line = terminal.format_line("db", Style::BrightGreen, &[&"ready", &3, &true]);

    assert_eq!(line, "09/03 14:05:07 | ZYRO-API |  [DB] ready 3 true");
}

#[rstest]
fn named_zone_applies_daylight_saving(clock: Arc<FixedClock>) {
    let config = plain_config().with_time_zone(Tz::America__New_York);
    let terminal = Terminal::new(clock, config, io::sink());

    let line = terminal.format_line("cron", Style::BrightCyan, &[&"tick"]);

    assert_eq!(line, "09/03 10:05:07 |  [CRON] tick");
}

#[rstest]
fn pid_follows_app_name(clock: Arc<FixedClock>) {
    let config = plain_config().with_app_name("api").with_show_pid(true);
    let terminal = Terminal::new(clock, config, io::sink());

    let line = terminal.format_line("boot", Style::BrightCyan, &[]);

    assert_eq!(
        line,
        format!("09/03 11:05:07 | API | {} |  [BOOT]", std::process::id())
    );
}

#[rstest]
#[case::success(Style::BrightGreen, "\x1b[92m")]
#[case::error(Style::BrightRed, "\x1b[91m")]
#[case::info(Style::BrightCyan, "\x1b[96m")]
#[case::warn(Style::BrightYellow, "\x1b[93m")]
fn each_level_writes_in_its_colour(
    clock: Arc<FixedClock>,
    #[case] style: Style,
    #[case] open: &str,
) {
    let buffer = SharedBuffer::default();
    let terminal = Terminal::new(clock, plain_config().with_colors(true), buffer.clone());

    match style {
        Style::BrightGreen => terminal.success("job", &[&"done"]),
        Style::BrightRed => terminal.error("job", &[&"done"]),
        Style::BrightCyan => terminal.info("job", &[&"done"]),
        _ => terminal.warn("job", &[&"done"]),
    }

    assert_eq!(
        buffer.contents(),
        format!("\x1b[90m09/03 11:05:07 | \x1b[39m {open}[JOB]\x1b[39m done\n")
    );
}

#[rstest]
fn each_call_writes_one_line(clock: Arc<FixedClock>) {
    let buffer = SharedBuffer::default();
    let terminal = Terminal::new(clock, plain_config(), buffer.clone());

    terminal.info("a", &[&1]);
    terminal.warn("b", &[&2]);

    let output = buffer.contents();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines.first().is_some_and(|line| line.ends_with("[A] 1")));
    assert!(lines.get(1).is_some_and(|line| line.ends_with("[B] 2")));
}

#[rstest]
fn write_failure_does_not_panic(clock: Arc<FixedClock>) {
    let terminal = Terminal::new(clock, plain_config(), BrokenSink);
    terminal.error("sink", &[&"still alive"]);
}
