use serde::Serialize;

use super::config::ScheduleConfig;
use crate::fields::{day_number_values, hour_values, Month, Weekday, QUANTIZED_MINUTES};

/// One renderable checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UnitCell<T> {
    pub value: T,
    pub checked: bool,
}

/// Materialized checkbox states for every calendar unit the preview
/// renders: 12 months, 7 weekdays, 31 day numbers, 24 hours and the
/// quantized minutes.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewGrid {
    pub months: Vec<UnitCell<Month>>,
    pub weekdays: Vec<UnitCell<Weekday>>,
    pub day_numbers: Vec<UnitCell<u8>>,
    pub hours: Vec<UnitCell<u8>>,
    pub minutes: Vec<UnitCell<u8>>,
}

impl PreviewGrid {
    pub fn new(schedule: &ScheduleConfig) -> Self {
        Self {
            months: Month::ALL
                .iter()
                .map(|&month| UnitCell {
                    value: month,
                    checked: schedule.is_month_checked(month),
                })
                .collect(),
            weekdays: Weekday::ALL
                .iter()
                .map(|&weekday| UnitCell {
                    value: weekday,
                    checked: schedule.is_weekday_checked(weekday),
                })
                .collect(),
            day_numbers: day_number_values()
                .into_iter()
                .map(|day| UnitCell {
                    value: day,
                    checked: schedule.is_day_number_checked(day),
                })
                .collect(),
            hours: hour_values()
                .into_iter()
                .map(|hour| UnitCell {
                    value: hour,
                    checked: schedule.is_hour_checked(hour),
                })
                .collect(),
            minutes: QUANTIZED_MINUTES
                .iter()
                .map(|&minute| UnitCell {
                    value: minute,
                    checked: schedule.is_minute_checked(minute),
                })
                .collect(),
        }
    }
}
