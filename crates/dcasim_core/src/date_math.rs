//! Month-granularity calendar arithmetic.
//!
//! The simulator steps one calendar month at a time, so everything here works
//! on plain `(year, month)` pairs without going through jiff's `Span`
//! machinery.

use crate::model::YearMonth;

/// Fast leap year check.
#[inline]
pub fn is_leap_year(year: i16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// Fast inline days-in-month calculation without creating a `jiff::civil::Date`.
#[inline]
pub fn days_in_month(year: i16, month: i8) -> i8 {
    const DAYS: [i8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
    if month == 2 && is_leap_year(year) {
        29
    } else {
        DAYS[(month - 1) as usize]
    }
}

/// Signed number of whole months from `from` to `to`.
///
/// `(y2 - y1) * 12 + (m2 - m1)`; zero for the same month, negative when `to`
/// precedes `from`.
#[inline]
pub fn months_between(from: YearMonth, to: YearMonth) -> i32 {
    (to.year() as i32 - from.year() as i32) * 12 + (to.month() as i32 - from.month() as i32)
}

/// Offset a `(year, month)` pair by `n` months. Returns `None` when the
/// result leaves the four-digit year range.
#[inline]
pub fn add_months(year: i16, month: i8, n: i32) -> Option<(i16, i8)> {
    let index = year as i32 * 12 + (month as i32 - 1) + n;
    let y = index.div_euclid(12);
    let m = index.rem_euclid(12) + 1;
    if !(0..=9999).contains(&y) {
        return None;
    }
    Some((y as i16, m as i8))
}

/// Every calendar month from `start` to `end`, both inclusive, ascending.
///
/// Yields nothing when `end` precedes `start`.
pub fn months_inclusive(start: YearMonth, end: YearMonth) -> MonthRange {
    MonthRange {
        next: Some(start),
        end,
    }
}

/// Iterator returned by [`months_inclusive`]
#[derive(Debug, Clone)]
pub struct MonthRange {
    next: Option<YearMonth>,
    end: YearMonth,
}

impl Iterator for MonthRange {
    type Item = YearMonth;

    fn next(&mut self) -> Option<YearMonth> {
        let current = self.next.filter(|m| *m <= self.end)?;
        self.next = current.succ();
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = match self.next {
            Some(next) => (months_between(next, self.end) + 1).max(0) as usize,
            None => 0,
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for MonthRange {}
