use chrono::{DateTime, Datelike, TimeZone, Timelike};
use serde::{Deserialize, Serialize};

use crate::fields::{day_number_values, hour_values, Month, Weekday, QUANTIZED_MINUTES};

/// Which representation of the month field is authoritative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MonthMode {
    All,
    Specific,
    Between,
}

/// Which representation of the day fields is authoritative.
///
/// `Weekdays` and `SpecificDates` are mutually exclusive: inbound
/// expressions restrict either the day-of-week or the day-of-month
/// field, never both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayMode {
    All,
    Weekdays,
    #[serde(rename = "specific")]
    SpecificDates,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HourMode {
    All,
    Specific,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MinuteMode {
    All,
    Specific,
    Between,
}

/// Parsed representation of a 5-field cron expression, scoped to
/// minute-level granularity.
///
/// The selection sets mirror what the preview grid renders: when a mode
/// is `All` the matching set holds every member, so membership tests
/// stay uniform for the UI. When a mode is `Between` the range endpoints
/// are authoritative and the set is only populated for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleConfig {
    pub month_mode: MonthMode,
    pub selected_months: Vec<Month>,
    pub month_range_start: Month,
    pub month_range_end: Month,
    pub day_mode: DayMode,
    pub selected_weekdays: Vec<Weekday>,
    pub selected_day_numbers: Vec<u8>,
    pub hour_mode: HourMode,
    pub selected_hours: Vec<u8>,
    pub minute_mode: MinuteMode,
    pub selected_minutes: Vec<u8>,
    pub minute_range_start: u8,
    pub minute_range_end: u8,
}

impl Default for ScheduleConfig {
    /// Every minute of every hour of every day of every month.
    fn default() -> Self {
        Self {
            month_mode: MonthMode::All,
            selected_months: Month::ALL.to_vec(),
            month_range_start: Month::January,
            month_range_end: Month::December,
            day_mode: DayMode::All,
            selected_weekdays: Weekday::ALL.to_vec(),
            selected_day_numbers: day_number_values(),
            hour_mode: HourMode::All,
            selected_hours: hour_values(),
            minute_mode: MinuteMode::All,
            selected_minutes: QUANTIZED_MINUTES.to_vec(),
            minute_range_start: 0,
            minute_range_end: 0,
        }
    }
}

impl ScheduleConfig {
    /// Whether the given month renders as checked.
    ///
    /// Pure membership: the decoder populates `selected_months` for
    /// every month mode, including the display range of `Between`.
    pub fn is_month_checked(&self, month: Month) -> bool {
        self.selected_months.contains(&month)
    }

    /// Whether the given weekday renders as checked.
    pub fn is_weekday_checked(&self, weekday: Weekday) -> bool {
        match self.day_mode {
            DayMode::All => true,
            DayMode::Weekdays => self.selected_weekdays.contains(&weekday),
            DayMode::SpecificDates => false,
        }
    }

    /// Whether the given day-of-month renders as checked.
    pub fn is_day_number_checked(&self, day: u8) -> bool {
        match self.day_mode {
            DayMode::All => true,
            DayMode::SpecificDates => self.selected_day_numbers.contains(&day),
            DayMode::Weekdays => false,
        }
    }

    /// Whether the given hour renders as checked.
    pub fn is_hour_checked(&self, hour: u8) -> bool {
        match self.hour_mode {
            HourMode::All => true,
            HourMode::Specific => self.selected_hours.contains(&hour),
        }
    }

    /// Whether the given minute renders as checked.
    ///
    /// `Between` tolerates flipped endpoints and tests the inclusive
    /// range either way.
    pub fn is_minute_checked(&self, minute: u8) -> bool {
        match self.minute_mode {
            MinuteMode::All => true,
            MinuteMode::Specific => self.selected_minutes.contains(&minute),
            MinuteMode::Between => {
                let (start, end) = (self.minute_range_start, self.minute_range_end);
                if start <= end {
                    minute >= start && minute <= end
                } else {
                    minute >= end && minute <= start
                }
            }
        }
    }

    /// Whether the schedule covers the given timestamp, to minute
    /// granularity.
    pub fn includes<Tz: TimeZone>(&self, when: &DateTime<Tz>) -> bool {
        let month = match Month::from_ordinal(when.month()) {
            Some(month) => month,
            None => return false,
        };
        let day_ok = match self.day_mode {
            DayMode::All => true,
            DayMode::Weekdays => self.is_weekday_checked(Weekday::from_chrono(when.weekday())),
            DayMode::SpecificDates => self.is_day_number_checked(when.day() as u8),
        };
        self.is_month_checked(month)
            && day_ok
            && self.is_hour_checked(when.hour() as u8)
            && self.is_minute_checked(when.minute() as u8)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    #[test]
    fn default_checks_every_unit() {
        let schedule = ScheduleConfig::default();
        assert!(schedule.is_month_checked(Month::July));
        assert!(schedule.is_weekday_checked(Weekday::Tuesday));
        assert!(schedule.is_day_number_checked(31));
        assert!(schedule.is_hour_checked(23));
        assert!(schedule.is_minute_checked(55));
    }

    #[test]
    fn weekday_mode_unchecks_day_numbers() {
        let schedule = ScheduleConfig {
            day_mode: DayMode::Weekdays,
            selected_weekdays: vec![Weekday::Monday],
            selected_day_numbers: Vec::new(),
            ..ScheduleConfig::default()
        };
        assert!(schedule.is_weekday_checked(Weekday::Monday));
        assert!(!schedule.is_weekday_checked(Weekday::Sunday));
        assert!(!schedule.is_day_number_checked(15));
    }

    #[test]
    fn specific_dates_mode_unchecks_weekdays() {
        let schedule = ScheduleConfig {
            day_mode: DayMode::SpecificDates,
            selected_weekdays: Vec::new(),
            selected_day_numbers: vec![1, 15],
            ..ScheduleConfig::default()
        };
        assert!(schedule.is_day_number_checked(15));
        assert!(!schedule.is_day_number_checked(2));
        assert!(!schedule.is_weekday_checked(Weekday::Monday));
    }

    #[test]
    fn between_minutes_tolerates_flipped_endpoints() {
        let schedule = ScheduleConfig {
            minute_mode: MinuteMode::Between,
            minute_range_start: 40,
            minute_range_end: 10,
            ..ScheduleConfig::default()
        };
        assert!(schedule.is_minute_checked(25));
        assert!(schedule.is_minute_checked(10));
        assert!(schedule.is_minute_checked(40));
        assert!(!schedule.is_minute_checked(5));
        assert!(!schedule.is_minute_checked(45));
    }

    #[test]
    fn includes_composes_all_predicates() {
        let schedule = ScheduleConfig {
            hour_mode: HourMode::Specific,
            selected_hours: vec![9],
            minute_mode: MinuteMode::Specific,
            selected_minutes: vec![0],
            ..ScheduleConfig::default()
        };
        let hit = Utc.with_ymd_and_hms(2026, 3, 16, 9, 0, 0).unwrap();
        let miss = Utc.with_ymd_and_hms(2026, 3, 16, 9, 5, 0).unwrap();
        assert!(schedule.includes(&hit));
        assert!(!schedule.includes(&miss));
    }

    #[test]
    fn includes_honors_weekday_restrictions() {
        let schedule = ScheduleConfig {
            day_mode: DayMode::Weekdays,
            selected_weekdays: vec![Weekday::Monday],
            selected_day_numbers: Vec::new(),
            ..ScheduleConfig::default()
        };
        // 2026-03-16 is a Monday, 2026-03-17 a Tuesday.
        let monday = Utc.with_ymd_and_hms(2026, 3, 16, 12, 0, 0).unwrap();
        let tuesday = Utc.with_ymd_and_hms(2026, 3, 17, 12, 0, 0).unwrap();
        assert!(schedule.includes(&monday));
        assert!(!schedule.includes(&tuesday));
    }

    #[test]
    fn serializes_with_ui_field_names() {
        let schedule = ScheduleConfig::default();
        let value = serde_json::to_value(&schedule).unwrap();
        assert_eq!(value["monthMode"], "all");
        assert_eq!(value["dayMode"], "all");
        assert_eq!(value["selectedMonths"][0], "January");
        assert_eq!(value["selectedWeekdays"][0], "Sunday");
        assert_eq!(value["minuteRangeStart"], 0);
    }

    #[test]
    fn specific_dates_mode_serializes_as_specific() {
        let schedule = ScheduleConfig {
            day_mode: DayMode::SpecificDates,
            ..ScheduleConfig::default()
        };
        let value = serde_json::to_value(&schedule).unwrap();
        assert_eq!(value["dayMode"], "specific");
    }
}
