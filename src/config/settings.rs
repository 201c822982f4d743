use tracing::{debug, warn};

use super::colors::ColorCode;
use crate::{ClockError, Result};

/// Display settings for the clock, resolved from the settings CSV file.
///
/// Every field is typed and fully resolved at load time (color names are
/// already translated to SGR codes here); the render loop treats a
/// `Settings` value as read-only for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Whether times include a seconds component.
    pub show_seconds: bool,

    /// Whether to append the calendar date to each time.
    pub show_date: bool,

    /// Whether the date fragment includes the year.
    pub show_year: bool,

    /// Whether the day precedes the month in date fragments.
    pub date_before_month: bool,

    /// Whether to append the UTC offset to each time.
    pub show_offset: bool,

    /// Lay entries out side by side on one row instead of one per line.
    pub horizontal_display: bool,

    /// Whether to prepend a line showing seconds since the Unix epoch.
    pub show_unix_time: bool,

    /// First hour of day (0-23) colored as daytime.
    pub daytime_start: u8,

    /// First hour of day (0-23) colored as nighttime again.
    pub daytime_end: u8,

    /// Color for each entry's display label.
    pub entry_name_color: ColorCode,

    /// Color for times falling inside the daytime window.
    pub daytime_color: ColorCode,

    /// Color for times falling outside the daytime window.
    pub nighttime_color: ColorCode,

    /// Color for the "Unix Time:" label.
    pub unix_time_name_color: ColorCode,

    /// Color for the Unix-time value itself.
    pub unix_time_color: ColorCode,

    /// Raw strftime format used verbatim instead of the flag-driven one.
    ///
    /// Populated when `use_custom_format` is enabled and a
    /// `custom_format_code` is present; the flag-driven options above are
    /// then ignored for time formatting (colors and layout still apply).
    pub custom_format: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            show_seconds: true,
            show_date: false,
            show_year: false,
            date_before_month: false,
            show_offset: false,
            horizontal_display: false,
            show_unix_time: false,
            daytime_start: 8,
            daytime_end: 20,
            entry_name_color: ColorCode::resolve("cyan"),
            daytime_color: ColorCode::resolve("green"),
            nighttime_color: ColorCode::resolve("bright_magenta"),
            unix_time_name_color: ColorCode::resolve("cyan"),
            unix_time_color: ColorCode::resolve("white"),
            custom_format: None,
        }
    }
}

impl Settings {
    /// Builds a `Settings` value from parsed `key,value` rows.
    ///
    /// Missing keys keep their defaults; unknown keys are ignored (older
    /// configuration files keep working when settings are added). Boolean
    /// settings are enabled only by the literal string `true`.
    ///
    /// # Errors
    /// Returns an error if an hour setting is not an integer in `0..=23`.
    pub fn from_pairs(pairs: &[(String, String)]) -> Result<Self> {
        let mut settings = Settings::default();
        let mut use_custom_format = false;
        let mut custom_format_code = None;

        for (key, value) in pairs {
            match key.as_str() {
                "show_seconds" => settings.show_seconds = parse_flag(value),
                "show_date" => settings.show_date = parse_flag(value),
                "show_year" => settings.show_year = parse_flag(value),
                "date_before_month" => settings.date_before_month = parse_flag(value),
                "show_offset" => settings.show_offset = parse_flag(value),
                "horizontal_display" => settings.horizontal_display = parse_flag(value),
                "show_unix_time" => settings.show_unix_time = parse_flag(value),
                "daytime_start" => settings.daytime_start = parse_hour(key, value)?,
                "daytime_end" => settings.daytime_end = parse_hour(key, value)?,
                "entry_name_color" => settings.entry_name_color = ColorCode::resolve(value),
                "daytime_color" => settings.daytime_color = ColorCode::resolve(value),
                "nighttime_color" => settings.nighttime_color = ColorCode::resolve(value),
                "unix_time_name_color" => {
                    settings.unix_time_name_color = ColorCode::resolve(value);
                }
                "unix_time_color" => settings.unix_time_color = ColorCode::resolve(value),
                "use_custom_format" => use_custom_format = parse_flag(value),
                "custom_format_code" => custom_format_code = Some(value.clone()),
                other => debug!("ignoring unknown setting '{other}'"),
            }
        }

        if use_custom_format {
            settings.custom_format = custom_format_code.filter(|code| !code.is_empty());
        }

        if settings.daytime_start >= settings.daytime_end {
            warn!(
                start = settings.daytime_start,
                end = settings.daytime_end,
                "daytime window is empty; every hour will be colored as nighttime"
            );
        }

        Ok(settings)
    }

    /// Classifies a local hour of day (0-23) as daytime or nighttime.
    ///
    /// Daytime is the half-open window `[daytime_start, daytime_end)`.
    pub fn is_daytime(&self, hour: u32) -> bool {
        u32::from(self.daytime_start) <= hour && hour < u32::from(self.daytime_end)
    }
}

/// Only the literal string `true` enables a flag; anything else disables it.
fn parse_flag(value: &str) -> bool {
    value == "true"
}

fn parse_hour(key: &str, value: &str) -> Result<u8> {
    let hour: u8 = value.parse().map_err(|_| ClockError::InvalidSetting {
        key: key.to_string(),
        reason: format!("'{value}' is not an integer hour"),
    })?;

    if hour > 23 {
        return Err(ClockError::InvalidSetting {
            key: key.to_string(),
            reason: format!("hour {hour} is out of range 0-23"),
        });
    }

    Ok(hour)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(entries: &[(&str, &str)]) -> Vec<(String, String)> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn defaults_apply_when_keys_are_missing() {
        let settings = Settings::from_pairs(&[]).unwrap();

        assert!(settings.show_seconds);
        assert!(!settings.show_date);
        assert_eq!(settings.daytime_start, 8);
        assert_eq!(settings.daytime_end, 20);
        assert_eq!(settings.daytime_color.code(), "32");
    }

    #[test]
    fn only_literal_true_enables_flags() {
        let settings = Settings::from_pairs(&pairs(&[
            ("show_date", "true"),
            ("show_year", "TRUE"),
            ("show_offset", "yes"),
            ("show_seconds", "false"),
        ]))
        .unwrap();

        assert!(settings.show_date);
        assert!(!settings.show_year);
        assert!(!settings.show_offset);
        assert!(!settings.show_seconds);
    }

    #[test]
    fn hour_settings_parse_and_validate() {
        let settings =
            Settings::from_pairs(&pairs(&[("daytime_start", "6"), ("daytime_end", "22")]))
                .unwrap();

        assert_eq!(settings.daytime_start, 6);
        assert_eq!(settings.daytime_end, 22);
    }

    #[test]
    fn out_of_range_hour_is_fatal() {
        let err = Settings::from_pairs(&pairs(&[("daytime_start", "24")])).unwrap_err();

        assert!(matches!(err, ClockError::InvalidSetting { .. }));
    }

    #[test]
    fn non_numeric_hour_is_fatal() {
        let err = Settings::from_pairs(&pairs(&[("daytime_end", "noon")])).unwrap_err();

        assert!(matches!(err, ClockError::InvalidSetting { .. }));
    }

    #[test]
    fn daytime_window_boundaries() {
        let settings = Settings::default();

        assert!(!settings.is_daytime(7));
        assert!(settings.is_daytime(8));
        assert!(settings.is_daytime(19));
        assert!(!settings.is_daytime(20));
    }

    #[test]
    fn custom_format_requires_both_keys() {
        let with_both = Settings::from_pairs(&pairs(&[
            ("use_custom_format", "true"),
            ("custom_format_code", "%H:%M (%A)"),
        ]))
        .unwrap();
        assert_eq!(with_both.custom_format.as_deref(), Some("%H:%M (%A)"));

        let flag_only =
            Settings::from_pairs(&pairs(&[("use_custom_format", "true")])).unwrap();
        assert_eq!(flag_only.custom_format, None);

        let code_only =
            Settings::from_pairs(&pairs(&[("custom_format_code", "%H:%M")])).unwrap();
        assert_eq!(code_only.custom_format, None);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let settings =
            Settings::from_pairs(&pairs(&[("frobnicate", "true"), ("show_date", "true")]))
                .unwrap();

        assert!(settings.show_date);
    }
}
