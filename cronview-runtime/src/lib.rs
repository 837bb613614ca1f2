//! Cronview Runtime - Core codec for cron schedule previews
//!
//! This crate decodes 5-field cron expressions into renderable schedule
//! configurations, re-encodes edited configurations, and loads declared
//! schedule catalogs from application config.

mod catalog;
mod codec;
mod config;
mod error;
mod fields;
mod schedule;

// Re-export public API
pub use catalog::{ScheduleCatalog, ScheduleDefinition, ScheduleEntry};
pub use codec::{decode, decode_strict, encode};
pub use config::{load_toml_config, load_yaml_config, resolve_config_value};
pub use error::{CronField, ParseError};
pub use fields::{day_number_values, hour_values, Month, Weekday, QUANTIZED_MINUTES};
pub use schedule::{
    DayMode, HourMode, MinuteMode, MonthMode, PreviewGrid, ScheduleConfig, UnitCell,
};
