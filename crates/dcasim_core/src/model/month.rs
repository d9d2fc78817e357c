//! Calendar month value type

use std::fmt;
use std::str::FromStr;

use jiff::civil::Date;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::date_math::{add_months, days_in_month};
use crate::error::DateError;

/// A calendar month, ordered chronologically.
///
/// Serialized as the `YYYY-MM` string used on the request boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    // Field order matters for the derived Ord
    year: i16,
    month: i8,
}

impl YearMonth {
    pub fn new(year: i16, month: i8) -> Result<Self, DateError> {
        if !(1..=12).contains(&month) {
            return Err(DateError::MonthOutOfRange(month));
        }
        if !(0..=9999).contains(&year) {
            return Err(DateError::YearOutOfRange(year));
        }
        Ok(Self { year, month })
    }

    /// The month containing `date`
    pub fn of(date: Date) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The current month in the system time zone
    pub fn current() -> Self {
        Self::of(jiff::Zoned::now().date())
    }

    pub fn year(self) -> i16 {
        self.year
    }

    pub fn month(self) -> i8 {
        self.month
    }

    pub fn first_day(self) -> Date {
        jiff::civil::date(self.year, self.month, 1)
    }

    pub fn last_day(self) -> Date {
        jiff::civil::date(self.year, self.month, days_in_month(self.year, self.month))
    }

    pub fn contains(self, date: Date) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// The following month, or `None` past year 9999
    pub fn succ(self) -> Option<Self> {
        add_months(self.year, self.month, 1).map(|(year, month)| Self { year, month })
    }

    /// The preceding month, or `None` before year 0
    pub fn pred(self) -> Option<Self> {
        add_months(self.year, self.month, -1).map(|(year, month)| Self { year, month })
    }

    /// Whole months from `self` to `other` (negative if `other` is earlier)
    pub fn months_until(self, other: YearMonth) -> i32 {
        crate::date_math::months_between(self, other)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = DateError;

    /// Accepts exactly `YYYY-MM`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || DateError::Malformed(s.to_string());

        let (year, month) = s.split_once('-').ok_or_else(malformed)?;
        if year.len() != 4 || month.len() != 2 {
            return Err(malformed());
        }
        if !year.bytes().chain(month.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }

        let year: i16 = year.parse().map_err(|_| malformed())?;
        let month: i8 = month.parse().map_err(|_| malformed())?;
        Self::new(year, month)
    }
}

impl From<Date> for YearMonth {
    fn from(date: Date) -> Self {
        Self::of(date)
    }
}

impl Serialize for YearMonth {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for YearMonth {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
