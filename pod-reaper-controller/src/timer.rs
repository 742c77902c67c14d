use std::fmt;

use chrono_tz::Tz;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;

use chrono::DateTime;
use chrono::Utc;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S %Z";

/// Log timestamps rendered in a fixed timezone, e.g. `2024-01-15 13:00:00 CET`.
#[derive(Clone, Copy, Debug)]
pub(crate) struct ZonedTime {
    timezone: Tz,
}

impl ZonedTime {
    pub(crate) fn new(timezone: Tz) -> Self {
        Self { timezone }
    }

    fn format(&self, instant: DateTime<Utc>) -> String {
        instant
            .with_timezone(&self.timezone)
            .format(TIMESTAMP_FORMAT)
            .to_string()
    }
}

impl FormatTime for ZonedTime {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        w.write_str(&self.format(Utc::now()))
    }
}
