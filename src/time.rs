//! Human-readable durations and async sleeping.

use std::time::Duration;

const MICROS_PER_MILLI: u128 = 1_000;
const MICROS_PER_SECOND: u128 = 1_000_000;
const MICROS_PER_MINUTE: u128 = 60_000_000;
const MICROS_PER_HUNDREDTH_SECOND: u128 = 10_000;
const MICROS_PER_HUNDREDTH_MINUTE: u128 = 600_000;

/// Formats a duration as milliseconds, seconds, or minutes.
///
/// Below one second the value is whole milliseconds. Seconds and minutes
/// are rounded to two decimals with trailing zeros dropped.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use zyro_utils::time::format_duration;
///
/// assert_eq!(format_duration(Duration::from_millis(250)), "250ms");
/// assert_eq!(format_duration(Duration::from_millis(1500)), "1.5s");
/// assert_eq!(format_duration(Duration::from_secs(90)), "1.5m");
/// ```
#[must_use]
pub fn format_duration(duration: Duration) -> String {
    let micros = duration.as_micros();
    if micros < MICROS_PER_SECOND {
        return format!("{}ms", round_div(micros, MICROS_PER_MILLI));
    }
    if micros < MICROS_PER_MINUTE {
        return format!("{}s", hundredths(round_div(micros, MICROS_PER_HUNDREDTH_SECOND)));
    }
    format!("{}m", hundredths(round_div(micros, MICROS_PER_HUNDREDTH_MINUTE)))
}

/// Formats a millisecond count. See [`format_duration`].
#[must_use]
pub fn format_millis(millis: u64) -> String {
    format_duration(Duration::from_millis(millis))
}

/// Suspends the current task for `duration`.
pub async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

#[expect(
    clippy::integer_division,
    clippy::integer_division_remainder_used,
    reason = "rounding to the nearest whole unit is the intent"
)]
const fn round_div(value: u128, unit: u128) -> u128 {
    (value + unit / 2) / unit
}

#[expect(
    clippy::integer_division,
    clippy::integer_division_remainder_used,
    reason = "splitting a fixed-point value into whole and fractional parts"
)]
fn hundredths(value: u128) -> String {
    let whole = value / 100;
    match value % 100 {
        0 => whole.to_string(),
        fraction if fraction % 10 == 0 => format!("{whole}.{}", fraction / 10),
        fraction => format!("{whole}.{fraction:02}"),
    }
}
