use chrono::{DateTime, FixedOffset, Local, Offset, Utc};

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Time zone that timestamps are rendered in.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum TimeDisplay {
    /// The viewer's local zone.
    #[default]
    Local,
    Fixed(FixedOffset),
}

impl TimeDisplay {
    pub fn utc() -> Self {
        TimeDisplay::Fixed(Utc.fix())
    }
}

/// `YYYY-MM-DD HH:MM:SS` for epoch milliseconds, or an empty string.
pub fn format_timestamp(timestamp_ms: Option<i64>, display: TimeDisplay) -> String {
    let Some(utc) = timestamp_ms.and_then(DateTime::from_timestamp_millis) else {
        return String::new();
    };
    match display {
        TimeDisplay::Local => utc.with_timezone(&Local).format(TIME_FORMAT).to_string(),
        TimeDisplay::Fixed(offset) => utc.with_timezone(&offset).format(TIME_FORMAT).to_string(),
    }
}

/// Plain decimal rendering of an optional number; missing renders blank.
pub fn format_number(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

pub fn format_depth(depth_km: Option<f64>) -> String {
    depth_km.map(|d| format!("{d} km")).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::{TimeDisplay, format_depth, format_number, format_timestamp};
    use chrono::{DateTime, FixedOffset, Local, Offset, TimeZone};

    #[test]
    fn timestamps_follow_the_display_zone() {
        let ms = Some(1_704_110_400_000);
        assert_eq!(format_timestamp(ms, TimeDisplay::utc()), "2024-01-01 12:00:00");

        let tokyo = TimeDisplay::Fixed(FixedOffset::east_opt(9 * 3600).unwrap());
        assert_eq!(format_timestamp(ms, tokyo), "2024-01-01 21:00:00");
        assert_eq!(format_timestamp(None, tokyo), "");
    }

    #[test]
    fn local_display_uses_the_host_zone() {
        let ms = 1_704_110_400_000;
        let utc = DateTime::from_timestamp_millis(ms).unwrap();
        let offset = Local.offset_from_utc_datetime(&utc.naive_utc()).fix();

        assert_eq!(
            format_timestamp(Some(ms), TimeDisplay::Local),
            format_timestamp(Some(ms), TimeDisplay::Fixed(offset))
        );
    }

    #[test]
    fn numbers_render_verbatim_or_blank() {
        assert_eq!(format_number(Some(4.2)), "4.2");
        assert_eq!(format_number(Some(-12.0)), "-12");
        assert_eq!(format_number(None), "");
        assert_eq!(format_depth(Some(10.5)), "10.5 km");
        assert_eq!(format_depth(None), "");
    }
}
