use super::decode::decode;
use crate::error::{CronField, ParseError};
use crate::schedule::ScheduleConfig;

/// Strict decoding for the authoring path.
///
/// Accepts exactly the grammar the lossy decoder understands and turns
/// every degradation the lossy path would paper over into a structured
/// error: wrong field count, step syntax and quartz extensions,
/// non-numeric tokens, out-of-range values, and a simultaneous
/// day-of-month and day-of-week restriction (the dual-field convention
/// cannot express both). On success the result is exactly what
/// [`decode`] produces for the same expression.
pub fn decode_strict(expression: &str) -> Result<ScheduleConfig, ParseError> {
    let fields: Vec<&str> = expression.trim().split_whitespace().collect();
    if fields.len() != 5 {
        return Err(ParseError::WrongFieldCount { found: fields.len() });
    }

    validate_field(fields[0], CronField::Minute, 0, 59, FieldShape::WithRange)?;
    validate_field(fields[1], CronField::Hour, 0, 23, FieldShape::ListOnly)?;
    validate_field(fields[2], CronField::DayOfMonth, 1, 31, FieldShape::DayList)?;
    validate_field(fields[3], CronField::Month, 1, 12, FieldShape::WithRange)?;
    validate_field(fields[4], CronField::DayOfWeek, 1, 7, FieldShape::DayList)?;

    let day_of_month_restricted = fields[2] != "*" && fields[2] != "?";
    let day_of_week_restricted = fields[4] != "*" && fields[4] != "?";
    if day_of_month_restricted && day_of_week_restricted {
        return Err(ParseError::UnsupportedSyntax {
            field: CronField::DayOfWeek,
            token: fields[4].to_string(),
        });
    }

    Ok(decode(Some(expression)))
}

/// Which token shapes a field position admits beyond a plain comma list.
enum FieldShape {
    /// `*`, a comma list, or a single two-endpoint range.
    WithRange,
    /// `*` or a comma list.
    ListOnly,
    /// `*`, `?`, or a comma list (the two day fields).
    DayList,
}

fn validate_field(
    field: &str,
    kind: CronField,
    min: i64,
    max: i64,
    shape: FieldShape,
) -> Result<(), ParseError> {
    if field == "*" {
        return Ok(());
    }
    if field == "?" {
        return match shape {
            FieldShape::DayList => Ok(()),
            _ => Err(unsupported(kind, field)),
        };
    }
    if field
        .chars()
        .any(|c| matches!(c, '/' | 'L' | 'W' | '#' | '*' | '?'))
    {
        return Err(unsupported(kind, field));
    }

    if field.contains('-') {
        if !matches!(shape, FieldShape::WithRange) {
            return Err(unsupported(kind, field));
        }
        let endpoints: Vec<&str> = field.split('-').collect();
        if endpoints.len() != 2 {
            return Err(unsupported(kind, field));
        }
        for endpoint in endpoints {
            let value: i64 = endpoint.parse().map_err(|_| unsupported(kind, endpoint))?;
            check_range(value, kind, min, max)?;
        }
        return Ok(());
    }

    for token in field.split(',') {
        let value: i64 = token.parse().map_err(|_| unsupported(kind, token))?;
        check_range(value, kind, min, max)?;
    }
    Ok(())
}

fn check_range(value: i64, kind: CronField, min: i64, max: i64) -> Result<(), ParseError> {
    if value < min || value > max {
        return Err(ParseError::OutOfRangeValue { field: kind, value });
    }
    Ok(())
}

fn unsupported(kind: CronField, token: &str) -> ParseError {
    ParseError::UnsupportedSyntax {
        field: kind,
        token: token.to_string(),
    }
}
