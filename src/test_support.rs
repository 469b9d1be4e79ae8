//! Test doubles shared by unit tests across modules.

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;
use std::{
    io::{self, Write},
    sync::{Arc, Mutex},
};

/// Clock frozen at a known instant.
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// 2026-03-09 14:05:07 UTC.
    pub fn reference() -> Self {
        Self(
            Utc.with_ymd_and_hms(2026, 3, 9, 14, 5, 7)
                .single()
                .expect("valid instant"),
        )
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Sink whose contents stay readable after being handed to a terminal.
#[derive(Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().expect("buffer lock").clone()).expect("utf-8 output")
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("buffer lock").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
