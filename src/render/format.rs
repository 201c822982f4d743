use std::fmt;

use chrono::{DateTime, TimeZone};

use crate::config::Settings;

/// The date fragment appended to each rendered time.
///
/// One closed decision over (`show_date`, `show_year`, `date_before_month`):
/// every combination of those flags maps to exactly one variant, so the
/// format builder is total over the option space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStyle {
    /// No date fragment.
    None,

    /// Month and day, e.g. ` (03-14)`.
    MonthDay,

    /// Day and month, e.g. ` (14-03)`.
    DayMonth,

    /// Full ISO date, e.g. ` (2025-03-14)`.
    YearMonthDay,

    /// Day, month, year, e.g. ` (14-03-2025)`.
    DayMonthYear,

    /// Year only, e.g. ` (2025)`. An unusual request (`show_year` without
    /// `show_date`), but accommodated nevertheless.
    YearOnly,
}

impl DateStyle {
    /// Selects the date style for the given flags.
    pub fn from_flags(show_date: bool, show_year: bool, date_before_month: bool) -> Self {
        match (show_date, show_year, date_before_month) {
            (true, true, false) => DateStyle::YearMonthDay,
            (true, true, true) => DateStyle::DayMonthYear,
            (true, false, false) => DateStyle::MonthDay,
            (true, false, true) => DateStyle::DayMonth,
            (false, true, _) => DateStyle::YearOnly,
            (false, false, _) => DateStyle::None,
        }
    }

    /// The strftime fragment for this style, including its leading space.
    pub fn fragment(self) -> &'static str {
        match self {
            DateStyle::None => "",
            DateStyle::MonthDay => " (%m-%d)",
            DateStyle::DayMonth => " (%d-%m)",
            DateStyle::YearMonthDay => " (%F)",
            DateStyle::DayMonthYear => " (%d-%m-%Y)",
            DateStyle::YearOnly => " (%Y)",
        }
    }
}

/// The derived, immutable specification of how one instant renders to text.
///
/// Built once per configuration load; the render loop reuses it every tick.
/// Fragments always compose in the same order: time of day, then date, then
/// UTC offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayFormat {
    pattern: String,
}

impl DisplayFormat {
    /// Derives the display format from the resolved settings.
    ///
    /// If a custom format is configured it is used verbatim and the
    /// flag-driven composition is skipped entirely.
    pub fn from_settings(settings: &Settings) -> Self {
        if let Some(custom) = &settings.custom_format {
            return DisplayFormat {
                pattern: custom.clone(),
            };
        }

        let mut pattern = String::new();

        pattern.push_str(if settings.show_seconds { "%T" } else { "%R" });

        let date_style = DateStyle::from_flags(
            settings.show_date,
            settings.show_year,
            settings.date_before_month,
        );
        pattern.push_str(date_style.fragment());

        if settings.show_offset {
            pattern.push_str(" (%z)");
        }

        DisplayFormat { pattern }
    }

    /// The underlying strftime pattern.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Renders a zoned datetime through this format.
    pub fn render<T: TimeZone>(&self, datetime: &DateTime<T>) -> String
    where
        T::Offset: fmt::Display,
    {
        datetime.format(&self.pattern).to_string()
    }
}
