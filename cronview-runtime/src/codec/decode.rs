use tracing::debug;

use crate::error::CronField;
use crate::fields::{day_number_values, hour_values, Month, Weekday, QUANTIZED_MINUTES};
use crate::schedule::{DayMode, HourMode, MinuteMode, MonthMode, ScheduleConfig};

/// Decode a 5-field cron expression into a renderable schedule
/// configuration.
///
/// Field order is positional: `minute hour day-of-month month
/// day-of-week`. This never fails: a missing expression or one with
/// fewer than five whitespace-separated fields yields the full-wildcard
/// default, and unparseable tokens inside a field are dropped. Use
/// [`decode_strict`](super::decode_strict) on the authoring path, where
/// degraded input must surface as an error.
pub fn decode(expression: Option<&str>) -> ScheduleConfig {
    let raw = match expression {
        Some(raw) => raw.trim(),
        None => return ScheduleConfig::default(),
    };
    if raw.is_empty() {
        return ScheduleConfig::default();
    }

    let fields: Vec<&str> = raw.split_whitespace().collect();
    if fields.len() < 5 {
        debug!(expression = raw, fields = fields.len(), "too few cron fields, using defaults");
        return ScheduleConfig::default();
    }

    let mut schedule = ScheduleConfig {
        selected_months: Vec::new(),
        selected_weekdays: Vec::new(),
        selected_day_numbers: Vec::new(),
        selected_hours: Vec::new(),
        selected_minutes: Vec::new(),
        ..ScheduleConfig::default()
    };

    decode_minute_field(fields[0], &mut schedule);
    decode_hour_field(fields[1], &mut schedule);
    decode_day_fields(fields[2], fields[4], &mut schedule);
    decode_month_field(fields[3], &mut schedule);

    schedule
}

fn decode_minute_field(field: &str, schedule: &mut ScheduleConfig) {
    if field == "*" {
        schedule.minute_mode = MinuteMode::All;
        schedule.selected_minutes = QUANTIZED_MINUTES.to_vec();
    } else if field.contains('-') {
        // Missing or unparseable endpoints coerce: start to 0, end to
        // the start value.
        let endpoints: Vec<&str> = field.split('-').collect();
        let start = endpoints
            .first()
            .and_then(|token| token.parse().ok())
            .unwrap_or(0);
        let end = endpoints
            .get(1)
            .and_then(|token| token.parse().ok())
            .unwrap_or(start);
        schedule.minute_mode = MinuteMode::Between;
        schedule.minute_range_start = start;
        schedule.minute_range_end = end;
    } else {
        schedule.minute_mode = MinuteMode::Specific;
        schedule.selected_minutes = parse_number_list(field, CronField::Minute);
    }
}

fn decode_hour_field(field: &str, schedule: &mut ScheduleConfig) {
    if field == "*" {
        schedule.hour_mode = HourMode::All;
        schedule.selected_hours = hour_values();
    } else {
        schedule.hour_mode = HourMode::Specific;
        schedule.selected_hours = parse_number_list(field, CronField::Hour);
    }
}

/// Day-of-week wins over day-of-month when both are restrictive; a `?`
/// or `*` in either field means that field carries no restriction.
fn decode_day_fields(day_of_month: &str, day_of_week: &str, schedule: &mut ScheduleConfig) {
    if day_of_week != "?" && day_of_week != "*" {
        schedule.day_mode = DayMode::Weekdays;
        schedule.selected_weekdays = day_of_week
            .split(',')
            .filter_map(|code| {
                let weekday = code.parse().ok().and_then(Weekday::from_code);
                if weekday.is_none() {
                    debug!(field = %CronField::DayOfWeek, token = code, "dropping unmapped weekday code");
                }
                weekday
            })
            .collect();
        schedule.selected_day_numbers.clear();
    } else if day_of_month != "?" && day_of_month != "*" {
        schedule.day_mode = DayMode::SpecificDates;
        schedule.selected_day_numbers = parse_number_list(day_of_month, CronField::DayOfMonth);
        schedule.selected_weekdays.clear();
    } else {
        schedule.day_mode = DayMode::All;
        schedule.selected_weekdays = Weekday::ALL.to_vec();
        schedule.selected_day_numbers = day_number_values();
    }
}

fn decode_month_field(field: &str, schedule: &mut ScheduleConfig) {
    if field == "*" {
        schedule.month_mode = MonthMode::All;
        schedule.selected_months = Month::ALL.to_vec();
    } else if field.contains('-') {
        let endpoints: Vec<&str> = field.split('-').collect();
        let start_ordinal = endpoints.first().and_then(|token| token.parse::<u32>().ok());
        let end_ordinal = endpoints.get(1).and_then(|token| token.parse::<u32>().ok());

        // The start falls back to January when out of range, the end to
        // the resolved start.
        let start = start_ordinal
            .and_then(Month::from_ordinal)
            .unwrap_or(Month::January);
        let end = end_ordinal.and_then(Month::from_ordinal).unwrap_or(start);

        schedule.month_mode = MonthMode::Between;
        schedule.month_range_start = start;
        schedule.month_range_end = end;

        // Populate the display set with the inclusive ordinal range; the
        // endpoints stay authoritative.
        if let (Some(start_ordinal), Some(end_ordinal)) = (start_ordinal, end_ordinal) {
            if start_ordinal >= 1 && end_ordinal >= 1 {
                let lo = start_ordinal.min(end_ordinal);
                let hi = start_ordinal.max(end_ordinal);
                schedule.selected_months = Month::ALL
                    .iter()
                    .copied()
                    .filter(|month| (lo..=hi).contains(&month.ordinal()))
                    .collect();
            }
        }
    } else {
        schedule.month_mode = MonthMode::Specific;
        schedule.selected_months = field
            .split(',')
            .filter_map(|token| {
                let month = token.parse().ok().and_then(Month::from_ordinal);
                if month.is_none() {
                    debug!(field = %CronField::Month, token, "dropping unmapped month ordinal");
                }
                month
            })
            .collect();
    }
}

fn parse_number_list(field: &str, kind: CronField) -> Vec<u8> {
    let mut values = Vec::new();
    for token in field.split(',') {
        match token.parse::<u8>() {
            Ok(value) => values.push(value),
            Err(_) => debug!(field = %kind, token, "dropping unparseable token"),
        }
    }
    values
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_expression_yields_full_wildcard_default() {
        assert_eq!(decode(None), ScheduleConfig::default());
        assert_eq!(decode(Some("")), ScheduleConfig::default());
        assert_eq!(decode(Some("   ")), ScheduleConfig::default());
    }

    #[test]
    fn too_few_fields_yield_the_default() {
        assert_eq!(decode(Some("0 9 * *")), ScheduleConfig::default());
    }

    #[test]
    fn full_wildcard_expression_equals_the_default() {
        assert_eq!(decode(Some("* * * * *")), ScheduleConfig::default());
    }

    #[test]
    fn daily_at_nine() {
        let schedule = decode(Some("0 9 * * *"));
        assert_eq!(schedule.minute_mode, MinuteMode::Specific);
        assert_eq!(schedule.selected_minutes, vec![0]);
        assert_eq!(schedule.hour_mode, HourMode::Specific);
        assert_eq!(schedule.selected_hours, vec![9]);
        assert_eq!(schedule.day_mode, DayMode::All);
        assert_eq!(schedule.month_mode, MonthMode::All);
        assert_eq!(schedule.selected_months.len(), 12);
        assert_eq!(schedule.selected_weekdays.len(), 7);
        assert_eq!(schedule.selected_day_numbers.len(), 31);
    }

    #[test]
    fn step_syntax_degrades_to_an_empty_selection() {
        let schedule = decode(Some("*/15 * * * *"));
        assert_eq!(schedule.minute_mode, MinuteMode::Specific);
        assert!(schedule.selected_minutes.is_empty());
    }

    #[test]
    fn month_range_populates_names_and_display_set() {
        let schedule = decode(Some("0 0 1 1-6 *"));
        assert_eq!(schedule.month_mode, MonthMode::Between);
        assert_eq!(schedule.month_range_start, Month::January);
        assert_eq!(schedule.month_range_end, Month::June);
        assert_eq!(
            schedule.selected_months,
            vec![
                Month::January,
                Month::February,
                Month::March,
                Month::April,
                Month::May,
                Month::June,
            ]
        );
    }

    #[test]
    fn flipped_month_range_still_fills_the_display_set() {
        let schedule = decode(Some("0 0 1 6-1 *"));
        assert_eq!(schedule.month_range_start, Month::June);
        assert_eq!(schedule.month_range_end, Month::January);
        assert_eq!(schedule.selected_months.len(), 6);
    }

    #[test]
    fn out_of_range_month_endpoints_fall_back() {
        let schedule = decode(Some("0 0 1 13-14 *"));
        assert_eq!(schedule.month_mode, MonthMode::Between);
        assert_eq!(schedule.month_range_start, Month::January);
        assert_eq!(schedule.month_range_end, Month::January);
        assert!(schedule.selected_months.is_empty());
    }

    #[test]
    fn missing_month_range_end_falls_back_to_the_start() {
        let schedule = decode(Some("0 0 1 3- *"));
        assert_eq!(schedule.month_range_start, Month::March);
        assert_eq!(schedule.month_range_end, Month::March);
        assert!(schedule.selected_months.is_empty());
    }

    #[test]
    fn weekday_codes_take_priority_over_day_of_month() {
        let schedule = decode(Some("0 0 ? * 2,4,6"));
        assert_eq!(schedule.day_mode, DayMode::Weekdays);
        assert_eq!(
            schedule.selected_weekdays,
            vec![Weekday::Monday, Weekday::Wednesday, Weekday::Friday]
        );
        assert!(schedule.selected_day_numbers.is_empty());
    }

    #[test]
    fn unmapped_weekday_codes_are_dropped() {
        let schedule = decode(Some("0 0 * * 0,3,9"));
        assert_eq!(schedule.day_mode, DayMode::Weekdays);
        assert_eq!(schedule.selected_weekdays, vec![Weekday::Tuesday]);
    }

    #[test]
    fn specific_dates_clear_the_weekday_set() {
        let schedule = decode(Some("30 14 15 * ?"));
        assert_eq!(schedule.day_mode, DayMode::SpecificDates);
        assert_eq!(schedule.selected_day_numbers, vec![15]);
        assert!(schedule.selected_weekdays.is_empty());
        assert_eq!(schedule.hour_mode, HourMode::Specific);
        assert_eq!(schedule.selected_hours, vec![14]);
        assert_eq!(schedule.minute_mode, MinuteMode::Specific);
        assert_eq!(schedule.selected_minutes, vec![30]);
    }

    #[test]
    fn minute_range_parses_both_endpoints() {
        let schedule = decode(Some("10-40 * * * *"));
        assert_eq!(schedule.minute_mode, MinuteMode::Between);
        assert_eq!(schedule.minute_range_start, 10);
        assert_eq!(schedule.minute_range_end, 40);
        assert!(schedule.selected_minutes.is_empty());
    }

    #[test]
    fn malformed_minute_endpoints_coerce() {
        let schedule = decode(Some("x-5 * * * *"));
        assert_eq!(schedule.minute_range_start, 0);
        assert_eq!(schedule.minute_range_end, 5);

        let schedule = decode(Some("20- * * * *"));
        assert_eq!(schedule.minute_range_start, 20);
        assert_eq!(schedule.minute_range_end, 20);
    }

    #[test]
    fn garbage_list_tokens_are_dropped_silently() {
        let schedule = decode(Some("5,x,15 3,oops * * *"));
        assert_eq!(schedule.selected_minutes, vec![5, 15]);
        assert_eq!(schedule.selected_hours, vec![3]);
    }

    #[test]
    fn decoding_is_idempotent() {
        let first = decode(Some("0 9 ? * 2,4,6"));
        let second = decode(Some("0 9 ? * 2,4,6"));
        assert_eq!(first, second);
    }
}
