use crate::error::DateError;
use chrono::{
    format::{Item, StrftimeItems},
    Local, NaiveDate, NaiveDateTime, NaiveTime, Utc,
};
use core::{
    fmt::{self, Display, Write},
    str::FromStr,
};

/// The date (and time) stamped into files by a [`DateInjector`](crate::DateInjector).
///
/// ```
/// use verstamp::Date;
///
/// let explicit = Date::explicit(2024, 3, 15).unwrap();
/// let parsed: Date = "2024-03-15".parse().unwrap();
/// assert_eq!(explicit, parsed);
///
/// let utc_now = Date::utc_now();
/// let local_now = Date::local_now();
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Date(NaiveDateTime);

impl Date {
    /// Returns a new [Date] representing the current date and time in UTC at the time of this
    /// call.
    pub fn utc_now() -> Self {
        Self(Utc::now().naive_utc())
    }

    /// Returns a new [Date] representing the current date and time in the system's local timezone
    /// at the time of this call.
    pub fn local_now() -> Self {
        Self(Local::now().naive_local())
    }

    /// Returns result of a new [Date] at midnight of the given day, or
    /// [DateError::InvalidDateArguments].
    pub fn explicit(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(|date| Self(date.and_time(NaiveTime::MIN)))
            .ok_or(DateError::InvalidDateArguments { year, month, day })
    }

    /// Renders this date with `format`.
    pub fn format(&self, format: &DateFormat) -> String {
        // a DateFormat only holds patterns that render any naive date and time
        self.0
            .format_with_items(format.items().into_iter())
            .to_string()
    }
}

impl From<NaiveDateTime> for Date {
    fn from(datetime: NaiveDateTime) -> Self {
        Self(datetime)
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Self(date.and_time(NaiveTime::MIN))
    }
}

impl FromStr for Date {
    type Err = DateError;

    /// Parses a date string into a [Date] at midnight. The string must be in the format
    /// `YYYY-MM-DD`.
    ///
    /// See [NaiveDate::from_str].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(NaiveDate::from_str(s.trim())?))
    }
}

impl Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A strftime pattern used to render injected dates. Defaults to `%Y-%m-%d` (`YYYY-MM-DD`).
///
/// The pattern is validated on construction so that rendering never fails. Offset and time zone
/// directives (`%z`, `%Z`, `%+`...) are rejected, since stamped dates carry no zone.
///
/// ```
/// use verstamp::{Date, DateFormat};
///
/// let date = Date::explicit(2024, 3, 15).unwrap();
/// assert_eq!("2024-03-15", date.format(&DateFormat::default()));
///
/// let long = DateFormat::new("%B %-d, %Y").unwrap();
/// assert_eq!("March 15, 2024", date.format(&long));
///
/// assert!(DateFormat::new("%Q").is_err());
/// assert!(DateFormat::new("%Y-%m-%d %Z").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFormat(String);

impl DateFormat {
    /// The `YYYY-MM-DD` pattern.
    pub const DEFAULT: &'static str = "%Y-%m-%d";

    /// Validates `pattern` as a strftime pattern.
    ///
    /// # Errors
    ///
    /// - Returns [`DateError::InvalidFormat`] if the pattern is empty, holds an unknown directive,
    ///   or holds a directive a date without a time zone cannot render.
    pub fn new(pattern: impl Into<String>) -> Result<Self, DateError> {
        let pattern = pattern.into();
        let has_error = StrftimeItems::new(&pattern).any(|item| matches!(item, Item::Error));
        if pattern.is_empty() || has_error || !renders_naive(&pattern) {
            return Err(DateError::InvalidFormat { format: pattern });
        }
        Ok(Self(pattern))
    }

    fn items(&self) -> Vec<Item<'_>> {
        StrftimeItems::new(&self.0).collect()
    }
}

/// Whether `pattern` renders a [`NaiveDateTime`]. Offset directives parse fine but fail here.
fn renders_naive(pattern: &str) -> bool {
    let mut sink = String::new();
    write!(
        sink,
        "{}",
        NaiveDateTime::default().format_with_items(StrftimeItems::new(pattern))
    )
    .is_ok()
}

impl Default for DateFormat {
    fn default() -> Self {
        Self(Self::DEFAULT.to_owned())
    }
}

impl FromStr for DateFormat {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_from_str() {
        let date_strs = [
            ("2021-02-03", true),
            ("2021-2-3", true),
            (" 2021-02-03\n", true),
            ("2021-02-30", false), // February 30th doesn't exist
            ("03/02/2021", false),
        ];

        for (date_str, passes) in &date_strs {
            let date = Date::from_str(date_str);
            if *passes {
                assert!(date.is_ok(), "{date_str:?}");
            } else {
                assert!(matches!(date, Err(DateError::UnparseableDate { .. })));
            }
        }
    }

    #[test]
    fn test_date_explicit() {
        let date_strs = [
            (2021i32, 2u32, 3u32, true),
            (2021i32, 2u32, 30u32, false), // February 30th doesn't exist
        ];

        for (year, month, day, passes) in date_strs {
            let date = Date::explicit(year, month, day);
            if passes {
                assert!(date.is_ok());
            } else {
                assert!(matches!(date, Err(DateError::InvalidDateArguments { .. })));
            }
        }
    }

    #[test]
    fn test_format() {
        let date = Date::from(
            NaiveDate::from_ymd_opt(2024, 3, 5)
                .unwrap()
                .and_hms_opt(14, 7, 9)
                .unwrap(),
        );
        let args = [
            ("%Y-%m-%d", "2024-03-05"),
            ("%d/%m/%Y", "05/03/2024"),
            ("%b %e, %Y", "Mar  5, 2024"),
            ("%Y-%m-%dT%H:%M:%S", "2024-03-05T14:07:09"),
            ("built %Y", "built 2024"),
            ("%A %-d %B %Y, %I:%M %p", "Tuesday 5 March 2024, 02:07 PM"),
            ("%s", "1709647629"),
        ];

        for (pattern, expected) in args {
            let format = DateFormat::new(pattern).unwrap();
            assert_eq!(expected, date.format(&format));
        }
    }

    #[test]
    fn test_invalid_format() {
        for pattern in [
            "",
            "%Q",
            "%Y-%",
            "%Y-%m-%d %Z",
            "%Y-%m-%d %z",
            "%Y-%m-%dT%H:%M:%S%:z",
            "%+",
        ] {
            assert_eq!(
                Err(DateError::InvalidFormat {
                    format: pattern.to_owned()
                }),
                DateFormat::new(pattern)
            );
        }
    }
}
