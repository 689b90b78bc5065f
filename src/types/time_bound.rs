use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};
use std::fmt;

/// A `from`, `to` or timepoint value placed into a request path.
///
/// Strings are passed through untouched. `chrono` values are rendered in the
/// formats the mobility API accepts:
///
/// * [`NaiveDate`] as `2023-01-01`
/// * [`NaiveDateTime`] as `2023-01-01T08:30:00`
/// * [`DateTime`] as `2023-01-01T08:30:00.000+0000`
///
/// # Examples
///
/// ```
/// use chrono::{NaiveDate, TimeZone, Utc};
/// use opendatahub::TimeBound;
///
/// let day = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
/// assert_eq!(TimeBound::from(day).as_str(), "2023-01-01");
///
/// let instant = Utc.with_ymd_and_hms(2023, 1, 1, 8, 30, 0).unwrap();
/// assert_eq!(TimeBound::from(instant).as_str(), "2023-01-01T08:30:00.000+0000");
///
/// assert_eq!(TimeBound::from("2023-01-02").as_str(), "2023-01-02");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TimeBound(String);

impl TimeBound {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TimeBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TimeBound {
    fn from(value: &str) -> Self {
        TimeBound(value.to_string())
    }
}

impl From<String> for TimeBound {
    fn from(value: String) -> Self {
        TimeBound(value)
    }
}

impl From<NaiveDate> for TimeBound {
    fn from(value: NaiveDate) -> Self {
        TimeBound(value.format("%Y-%m-%d").to_string())
    }
}

impl From<NaiveDateTime> for TimeBound {
    fn from(value: NaiveDateTime) -> Self {
        TimeBound(value.format("%Y-%m-%dT%H:%M:%S").to_string())
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for TimeBound
where
    Tz::Offset: fmt::Display,
{
    fn from(value: DateTime<Tz>) -> Self {
        TimeBound(value.format("%Y-%m-%dT%H:%M:%S%.3f%z").to_string())
    }
}
