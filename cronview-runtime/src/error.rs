use std::fmt;

/// The five positional fields of a cron expression, in wire order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CronField {
    Minute,
    Hour,
    DayOfMonth,
    Month,
    DayOfWeek,
}

impl fmt::Display for CronField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CronField::Minute => "minute",
            CronField::Hour => "hour",
            CronField::DayOfMonth => "day-of-month",
            CronField::Month => "month",
            CronField::DayOfWeek => "day-of-week",
        };
        f.write_str(name)
    }
}

/// Error returned by the strict decoder.
///
/// The lossy decoder never fails; this type only surfaces on the
/// authoring path, where silently degraded input would be dangerous.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("expected 5 cron fields, found {found}")]
    WrongFieldCount { found: usize },

    #[error("unsupported syntax in the {field} field: {token:?}")]
    UnsupportedSyntax { field: CronField, token: String },

    #[error("{field} value {value} is out of range")]
    OutOfRangeValue { field: CronField, value: i64 },
}
