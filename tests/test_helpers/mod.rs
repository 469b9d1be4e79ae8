//! Shared doubles for integration tests.

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;
use std::{
    io::{self, Write},
    sync::{Arc, Mutex},
};

/// Clock frozen at 2026-01-02 03:04:05 UTC.
pub struct FrozenClock;

impl Clock for FrozenClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5)
            .single()
            .unwrap_or_default()
    }
}

/// Cloneable in-memory sink for terminal output.
#[derive(Clone, Default)]
pub struct CapturedOutput(Arc<Mutex<Vec<u8>>>);

impl CapturedOutput {
    /// Returns everything written so far.
    pub fn text(&self) -> String {
        let bytes = self.0.lock().expect("output lock").clone();
        String::from_utf8(bytes).expect("terminal output is UTF-8")
    }
}

impl Write for CapturedOutput {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("output lock").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
