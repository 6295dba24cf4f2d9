//! Wall-clock access for the `date` command.
//!
//! The interpreter never reads the time itself; callers pass a [`Clock`].
//! [`BrowserClock`] reads the host's local time through `js_sys::Date`.

use std::fmt;

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Source of the current local date-time.
pub trait Clock {
    fn now(&self) -> LocalDateTime;
}

/// Broken-down local time.
///
/// Displays as `Sun Oct 18 2026 14:03:07 GMT+0200`, followed by
/// ` (Central European Summer Time)` when the zone name is known.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocalDateTime {
    pub year: i32,
    /// 1-12
    pub month: u8,
    pub day: u8,
    /// 0 = Sunday
    pub weekday: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    /// Minutes east of UTC.
    pub utc_offset_minutes: i32,
    /// Host-provided zone name, e.g. `Central European Summer Time`.
    pub zone_name: Option<String>,
}

impl fmt::Display for LocalDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let weekday = WEEKDAYS[usize::from(self.weekday % 7)];
        let month = MONTHS[usize::from(self.month.clamp(1, 12) - 1)];
        let sign = if self.utc_offset_minutes < 0 { '-' } else { '+' };
        let offset = self.utc_offset_minutes.unsigned_abs();
        write!(
            f,
            "{} {} {:02} {:04} {:02}:{:02}:{:02} GMT{}{:02}{:02}",
            weekday,
            month,
            self.day,
            self.year,
            self.hour,
            self.minute,
            self.second,
            sign,
            offset / 60,
            offset % 60
        )?;
        if let Some(zone) = &self.zone_name {
            write!(f, " ({})", zone)?;
        }
        Ok(())
    }
}

/// Zone name in the trailing parentheses of a `Date.prototype.toString`
/// rendering, if the host supplies one.
fn zone_name(rendered: &str) -> Option<String> {
    let inner = rendered.trim_end().strip_suffix(')')?;
    let (_, name) = inner.rsplit_once('(')?;
    let name = name.trim();
    (!name.is_empty()).then(|| name.to_string())
}

/// Local time from the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    fn now(&self) -> LocalDateTime {
        let date = js_sys::Date::new_0();
        // getTimezoneOffset is positive west of UTC
        let offset = -(date.get_timezone_offset() as i32);
        LocalDateTime {
            year: date.get_full_year() as i32,
            month: (date.get_month() + 1) as u8,
            day: date.get_date() as u8,
            weekday: date.get_day() as u8,
            hour: date.get_hours() as u8,
            minute: date.get_minutes() as u8,
            second: date.get_seconds() as u8,
            utc_offset_minutes: offset,
            zone_name: zone_name(&String::from(date.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let dt = LocalDateTime {
            year: 2026,
            month: 10,
            day: 18,
            weekday: 0,
            hour: 14,
            minute: 3,
            second: 7,
            utc_offset_minutes: 120,
            zone_name: None,
        };
        assert_eq!(dt.to_string(), "Sun Oct 18 2026 14:03:07 GMT+0200");
    }

    #[test]
    fn test_display_negative_offset() {
        let dt = LocalDateTime {
            year: 2024,
            month: 1,
            day: 5,
            weekday: 5,
            hour: 9,
            minute: 0,
            second: 0,
            utc_offset_minutes: -210,
            zone_name: None,
        };
        assert_eq!(dt.to_string(), "Fri Jan 05 2024 09:00:00 GMT-0330");
    }

    #[test]
    fn test_display_with_zone_name() {
        let dt = LocalDateTime {
            year: 2026,
            month: 7,
            day: 1,
            weekday: 3,
            hour: 12,
            minute: 0,
            second: 0,
            utc_offset_minutes: 120,
            zone_name: Some("Central European Summer Time".to_string()),
        };
        assert_eq!(
            dt.to_string(),
            "Wed Jul 01 2026 12:00:00 GMT+0200 (Central European Summer Time)"
        );
    }

    #[test]
    fn test_zone_name() {
        assert_eq!(
            zone_name("Wed Jul 01 2026 12:00:00 GMT+0200 (Central European Summer Time)"),
            Some("Central European Summer Time".to_string())
        );
        assert_eq!(
            zone_name("Sun Oct 18 2026 08:30:00 GMT-0500 (heure normale de l’Est)"),
            Some("heure normale de l’Est".to_string())
        );
        assert_eq!(zone_name("Wed Jul 01 2026 12:00:00 GMT+0200"), None);
        assert_eq!(zone_name("Wed Jul 01 2026 12:00:00 GMT+0200 ()"), None);
    }
}
