use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE,
    MAX_MONTH, MONTHS_PER_YEAR,
};

/// Gregorian leap-year rule: divisible by 4 and not by 100, or divisible
/// by 400. Total over all `i32` years.
pub const fn is_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Number of days in `month` of `year`.
///
/// `month` must be in `1..=12`; out-of-range values are a caller-contract
/// violation (debug assertion, unspecified non-panicking result in release
/// builds).
pub const fn days_in_month(year: i32, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        // Masked so an out-of-contract month stays in bounds
        DAYS_IN_MONTH[month as usize % DAYS_IN_MONTH.len()]
    }
}

/// Canonical days-per-month table for `year`, January first.
/// The February entry is adjusted for leap years.
pub const fn days_in_months(year: i32) -> [u8; MONTHS_PER_YEAR] {
    let mut table = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
    if is_leap_year(year) {
        table[1] = FEBRUARY_DAYS_LEAP;
    }
    table
}
