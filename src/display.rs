use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::consts::{DAYS_PER_WEEK, DECEMBER, JANUARY};
use crate::prelude::*;
use crate::types::days_in_month;

/// Generic label/number display pair. Part of the public data-shape
/// contract for UI consumers; not used by the grid functions themselves.
#[derive(Debug, Clone, PartialEq, Eq, From, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelNumber {
    pub label: String,
    pub number: i32,
}

/// Full display state of one calendar grid cell.
///
/// Cells outside the displayed month carry the adjacent month's day in
/// `label`/`number` and the corresponding flag; `date_string` is always the
/// cell's real ISO date, year rollover included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayDisplay {
    pub label: String,
    pub number: i32,
    pub date_string: String,
    /// Column within the grid, 0 = Sunday
    pub weekday_number: u8,
    /// Row within the grid, 0-based
    pub week_number: u8,
    pub is_before_month: bool,
    pub is_after_month: bool,
    pub in_month: bool,
    pub is_today: bool,
    pub is_first_day: bool,
    pub is_last_day: bool,
}

/// A month grid as rows of weeks, including overflow days from the
/// adjacent months.
pub type WeekDisplay = Vec<Vec<DayDisplay>>;

/// Resolves a possibly out-of-range day index to the day number it lands on.
///
/// Day indices `< 1` count back from the end of the previous month, indices
/// past the end of the displayed month count into the next. The previous
/// month's length is read from `display_year`'s own table even when the
/// previous month is December; the year is never adjusted here (caller
/// contract, see [`date_string`] for the year-aware variant).
fn overflow_day(month_day: i32, display_month: u8, display_year: i32) -> i32 {
    let days_this_month = i32::from(days_in_month(display_year, display_month));
    if (1..=days_this_month).contains(&month_day) {
        month_day
    } else if month_day < 1 {
        let prev_month = if display_month >= 2 {
            display_month - 1
        } else {
            DECEMBER
        };
        // unsigned_abs + wrapping_sub_unsigned: no overflow at i32::MIN
        i32::from(days_in_month(display_year, prev_month))
            .wrapping_sub_unsigned(month_day.unsigned_abs())
    } else {
        month_day - days_this_month
    }
}

/// Label for a grid cell of the month `display_year`-`display_month`.
///
/// In-range day indices render as themselves; out-of-range indices render as
/// the adjacent month's day number (`0` is the last day of the previous
/// month, `days + 1` the first day of the next). Total over all `i32`
/// indices; `display_month` must be in `1..=12`.
pub fn day_label(month_day: i32, display_month: u8, display_year: i32) -> String {
    overflow_day(month_day, display_month, display_year).to_string()
}

/// ISO-style `YYYY-MM-DD` string for a grid cell, month and day zero-padded.
///
/// The flags are the caller's pre-computed placement of `month_day` relative
/// to the displayed month; at most one may be set. Unlike [`day_label`],
/// this rolls the year over when the adjacent month crosses a December or
/// January boundary.
pub fn date_string(
    month_day: i32,
    display_month: u8,
    display_year: i32,
    is_before_month: bool,
    is_after_month: bool,
) -> String {
    let (year, month) = if is_before_month {
        if display_month == JANUARY {
            (display_year - 1, DECEMBER)
        } else {
            (display_year, display_month - 1)
        }
    } else if is_after_month {
        if display_month == DECEMBER {
            (display_year + 1, JANUARY)
        } else {
            (display_year, display_month + 1)
        }
    } else {
        return format!("{display_year}-{display_month:02}-{month_day:02}");
    };

    let day = overflow_day(month_day, display_month, display_year);
    format!("{year}-{month:02}-{day:02}")
}

/// Builds the Sunday-first grid for `display_year`-`display_month`,
/// leading and trailing cells filled from the adjacent months.
///
/// `today` marks the `is_today` cell (in-month cells only); pass the
/// current date in whatever timezone the UI displays. Returns an empty
/// grid if the year/month do not name a real month.
pub fn month_grid(display_year: i32, display_month: u8, today: NaiveDate) -> WeekDisplay {
    let Some(first) = NaiveDate::from_ymd_opt(display_year, u32::from(display_month), 1) else {
        return Vec::new();
    };

    let lead = first.weekday().num_days_from_sunday() as i32;
    let days_this_month = i32::from(days_in_month(display_year, display_month));
    let rows = ((lead + days_this_month) as usize).div_ceil(DAYS_PER_WEEK);

    let mut weeks = Vec::with_capacity(rows);
    for week in 0..rows {
        let mut row = Vec::with_capacity(DAYS_PER_WEEK);
        for weekday in 0..DAYS_PER_WEEK {
            let month_day = (week * DAYS_PER_WEEK + weekday) as i32 - lead + 1;
            let is_before_month = month_day < 1;
            let is_after_month = month_day > days_this_month;
            let in_month = !is_before_month && !is_after_month;
            let number = overflow_day(month_day, display_month, display_year);

            row.push(DayDisplay {
                label: number.to_string(),
                number,
                date_string: date_string(
                    month_day,
                    display_month,
                    display_year,
                    is_before_month,
                    is_after_month,
                ),
                weekday_number: weekday as u8,
                week_number: week as u8,
                is_before_month,
                is_after_month,
                in_month,
                is_today: in_month
                    && today.year() == display_year
                    && today.month() == u32::from(display_month)
                    && today.day() == month_day.unsigned_abs(),
                is_first_day: in_month && month_day == 1,
                is_last_day: in_month && month_day == days_this_month,
            });
        }
        weeks.push(row);
    }
    weeks
}
