mod config;
mod grid;

pub use config::{DayMode, HourMode, MinuteMode, MonthMode, ScheduleConfig};
pub use grid::{PreviewGrid, UnitCell};
