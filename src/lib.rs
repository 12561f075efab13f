mod consts;
mod display;
mod locale;
mod prelude;
mod types;

pub use consts::*;
pub use display::{DayDisplay, LabelNumber, WeekDisplay, date_string, day_label, month_grid};
pub use locale::{Locale, LocaleError};
pub use types::{days_in_month, days_in_months, is_leap_year};

use chrono::{Datelike, NaiveDate, Utc};
use chrono_tz::Tz;
use serde::Serialize;

/// Calendar display data for one date: the date itself, the year's
/// days-per-month table, and the locale's label sets.
///
/// Produced fresh per request and never mutated; serialize it straight to
/// the UI layer (camelCase field names).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarData {
    pub year: i32,
    /// 1-based month
    pub month: u8,
    pub day: u8,
    pub days_in_months: [u8; MONTHS_PER_YEAR],
    pub weekday_labels: [&'static str; DAYS_PER_WEEK],
    pub month_labels: [&'static str; MONTHS_PER_YEAR],
}

impl CalendarData {
    /// Calendar data for an explicit date. This is the pure core of
    /// [`Clock::calendar_data`]; use it directly to pin "now" in tests.
    pub fn for_date(date: NaiveDate, locale: Locale) -> Self {
        let year = date.year();
        Self {
            year,
            month: date.month() as u8,
            day: date.day() as u8,
            days_in_months: days_in_months(year),
            weekday_labels: locale.weekday_labels(),
            month_labels: locale.month_labels(),
        }
    }

    /// Calendar data for an explicit date, selecting labels from an
    /// app-language tag (`"en-us"` is English, anything else Chinese).
    pub fn for_date_with_tag(date: NaiveDate, language_tag: &str) -> Self {
        Self::for_date(date, Locale::from_tag(language_tag))
    }
}

/// Source of "today" in an explicitly configured timezone.
///
/// The timezone is injected per clock rather than set process-wide, so two
/// clocks with different zones can coexist. [`Clock::default`] uses China
/// Standard Time, the zone the original deployment pinned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clock {
    tz: Tz,
}

impl Clock {
    pub const fn new(tz: Tz) -> Self {
        Self { tz }
    }

    /// The configured timezone.
    pub const fn time_zone(&self) -> Tz {
        self.tz
    }

    /// The current date in the configured timezone.
    pub fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.tz).date_naive()
    }

    /// Calendar data for today. Impure only through the clock read;
    /// identical dates and locales yield identical data.
    pub fn calendar_data(&self, locale: Locale) -> CalendarData {
        CalendarData::for_date(self.today(), locale)
    }

    /// Month grid for `display_year`-`display_month` with today's cell
    /// marked from this clock's timezone.
    pub fn month_grid(&self, display_year: i32, display_month: u8) -> WeekDisplay {
        month_grid(display_year, display_month, self.today())
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new(chrono_tz::Asia::Shanghai)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_calendar_data_for_date() {
        let data = CalendarData::for_date(date(2024, 2, 29), Locale::EnUs);
        assert_eq!(data.year, 2024);
        assert_eq!(data.month, 2);
        assert_eq!(data.day, 29);
        assert_eq!(data.days_in_months[1], 29);
        assert_eq!(data.weekday_labels, Locale::EnUs.weekday_labels());
        assert_eq!(data.month_labels[0], "January");
    }

    #[test]
    fn test_calendar_data_non_leap_table() {
        let data = CalendarData::for_date(date(2023, 6, 15), Locale::ZhCn);
        assert_eq!(data.days_in_months[1], 28);
        assert_eq!(
            data.days_in_months
                .iter()
                .map(|&d| u32::from(d))
                .sum::<u32>(),
            365
        );
        assert_eq!(data.weekday_labels[0], "日");
        assert_eq!(data.month_labels[5], "6月");
    }

    #[test]
    fn test_calendar_data_with_tag_fallback() {
        let en = CalendarData::for_date_with_tag(date(2023, 6, 15), "en-us");
        assert_eq!(en.month_labels[0], "January");

        // Anything else, including near-misses, selects the Chinese set
        let cn = CalendarData::for_date_with_tag(date(2023, 6, 15), "en-US");
        assert_eq!(cn.month_labels[0], "1月");
    }

    #[test]
    fn test_calendar_data_is_value_only() {
        let a = CalendarData::for_date(date(2023, 6, 15), Locale::EnUs);
        let b = CalendarData::for_date(date(2023, 6, 15), Locale::EnUs);
        assert_eq!(a, b);
    }

    #[test]
    fn test_calendar_data_serializes_camel_case() {
        let data = CalendarData::for_date(date(2023, 6, 15), Locale::EnUs);
        let json = serde_json::to_string(&data).unwrap();
        assert!(json.contains(r#""daysInMonths":[31,28,31,30,31,30,31,31,30,31,30,31]"#));
        assert!(json.contains(r#""weekdayLabels":["Sun","#));
        assert!(json.contains(r#""monthLabels":["January","#));
    }

    #[test]
    fn test_clock_timezone_is_explicit() {
        let clock = Clock::new(chrono_tz::America::New_York);
        assert_eq!(clock.time_zone(), chrono_tz::America::New_York);

        assert_eq!(Clock::default().time_zone(), chrono_tz::Asia::Shanghai);
    }

    #[test]
    fn test_clock_calendar_data_sanity() {
        let clock = Clock::default();
        let data = clock.calendar_data(Locale::EnUs);
        assert!((1..=12).contains(&data.month));
        assert!(data.day >= 1);
        assert!(data.day <= data.days_in_months[usize::from(data.month) - 1]);
    }

    #[test]
    fn test_clock_month_grid_marks_today() {
        let clock = Clock::default();
        let today = clock.today();
        let grid = clock.month_grid(today.year(), today.month() as u8);
        let marked: Vec<_> = grid.iter().flatten().filter(|c| c.is_today).collect();
        assert_eq!(marked.len(), 1);
        assert_eq!(
            marked[0].date_string,
            today.format("%Y-%m-%d").to_string()
        );
    }
}
