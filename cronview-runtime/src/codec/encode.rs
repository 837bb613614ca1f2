use std::collections::BTreeSet;

use crate::schedule::{DayMode, HourMode, MinuteMode, MonthMode, ScheduleConfig};

/// Encode a schedule configuration back into a 5-field cron expression.
///
/// Selections are emitted as sorted, deduplicated comma lists (month
/// names back to 1-based ordinals, weekday names back to 1=Sunday
/// codes), ranges as `start-end`, and wildcards as `*`. Whichever day
/// field is not authoritative is emitted as `?`; when the day mode is
/// unrestricted both day fields are `*`. An empty specific selection has
/// no wire form and falls back to `*`.
pub fn encode(schedule: &ScheduleConfig) -> String {
    let minute = match schedule.minute_mode {
        MinuteMode::All => "*".to_string(),
        MinuteMode::Specific => {
            comma_join(schedule.selected_minutes.iter().map(|&minute| u32::from(minute)))
        }
        MinuteMode::Between => {
            format!("{}-{}", schedule.minute_range_start, schedule.minute_range_end)
        }
    };

    let hour = match schedule.hour_mode {
        HourMode::All => "*".to_string(),
        HourMode::Specific => {
            comma_join(schedule.selected_hours.iter().map(|&hour| u32::from(hour)))
        }
    };

    let (day_of_month, day_of_week) = match schedule.day_mode {
        DayMode::All => ("*".to_string(), "*".to_string()),
        DayMode::Weekdays => (
            "?".to_string(),
            comma_join(schedule.selected_weekdays.iter().map(|weekday| weekday.code())),
        ),
        DayMode::SpecificDates => (
            comma_join(schedule.selected_day_numbers.iter().map(|&day| u32::from(day))),
            "?".to_string(),
        ),
    };

    let month = match schedule.month_mode {
        MonthMode::All => "*".to_string(),
        MonthMode::Specific => {
            comma_join(schedule.selected_months.iter().map(|month| month.ordinal()))
        }
        MonthMode::Between => format!(
            "{}-{}",
            schedule.month_range_start.ordinal(),
            schedule.month_range_end.ordinal()
        ),
    };

    format!("{minute} {hour} {day_of_month} {month} {day_of_week}")
}

fn comma_join(values: impl IntoIterator<Item = u32>) -> String {
    let sorted: BTreeSet<u32> = values.into_iter().collect();
    if sorted.is_empty() {
        return "*".to_string();
    }
    sorted
        .into_iter()
        .map(|value| value.to_string())
        .collect::<Vec<_>>()
        .join(",")
}
