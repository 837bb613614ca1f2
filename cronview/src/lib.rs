//! # Cronview - Cron Schedule Previews for Rust
//!
//! This library decodes 5-field cron expressions (`minute hour
//! day-of-month month day-of-week`) into typed, renderable schedule
//! configurations, and re-encodes edited configurations back into cron
//! strings.
//!
//! ## Features
//!
//! - **Lossy decoding**: any input, including `None` or garbage, yields
//!   a usable configuration - malformed tokens degrade instead of
//!   failing, which is what a read-only preview wants
//! - **Strict decoding**: a separate entry point for the authoring path
//!   that surfaces structured errors instead of degrading
//! - **Encoding**: turn checkbox edits back into a cron expression
//! - **Preview grids**: materialized checked/unchecked state for every
//!   month, weekday, day number, hour and quantized minute
//! - **Config catalogs**: declare named schedules in TOML/YAML config
//!   with `${placeholder}` support and decode them in one call
//!
//! ## Quick Start
//!
//! ```rust
//! use cronview::{decode, encode, DayMode, PreviewGrid, Weekday};
//!
//! // Every Monday, Wednesday and Friday at 09:00
//! let schedule = decode(Some("0 9 ? * 2,4,6"));
//! assert_eq!(schedule.day_mode, DayMode::Weekdays);
//! assert!(schedule.is_weekday_checked(Weekday::Monday));
//! assert!(!schedule.is_weekday_checked(Weekday::Sunday));
//!
//! // Materialize the checkbox matrix the UI renders
//! let grid = PreviewGrid::new(&schedule);
//! assert_eq!(grid.weekdays.iter().filter(|cell| cell.checked).count(), 3);
//!
//! // And back onto the wire
//! assert_eq!(encode(&schedule), "0 9 ? * 2,4,6");
//! ```
//!
//! ## Strict validation
//!
//! ```rust
//! use cronview::{decode_strict, ParseError};
//!
//! assert!(decode_strict("0 9 * * *").is_ok());
//! assert!(matches!(
//!     decode_strict("*/15 * * * *"),
//!     Err(ParseError::UnsupportedSyntax { .. })
//! ));
//! ```
//!
//! ## Configuration
//!
//! Declare schedules in `config/application.toml`:
//!
//! ```toml
//! [app]
//! window_cron = "0 9 * * *"
//!
//! [[schedules]]
//! name = "boiler-inspection"
//! cron = "${app.window_cron}"
//!
//! [[schedules]]
//! name = "hvac-filter-swap"
//! cron = "30 14 15 * ?"
//! ```
//!
//! Or the YAML equivalent. Environment variables with the `APP_` prefix
//! override file values:
//!
//! ```bash
//! export APP_WINDOW_CRON="0 7 * * *"
//! ```
//!
//! Then load everything at once:
//!
//! ```rust,no_run
//! use cronview::ScheduleCatalog;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let catalog = ScheduleCatalog::from_toml("config/application.toml")?;
//! for entry in &catalog.entries {
//!     println!("{} runs on {}", entry.name, entry.cron);
//! }
//! # Ok(())
//! # }
//! ```

// Re-export core types
pub use cronview_runtime::{
    day_number_values, decode, decode_strict, encode, hour_values, load_toml_config,
    load_yaml_config, resolve_config_value, CronField, DayMode, HourMode, MinuteMode, Month,
    MonthMode, ParseError, PreviewGrid, ScheduleCatalog, ScheduleConfig, ScheduleDefinition,
    ScheduleEntry, UnitCell, Weekday, QUANTIZED_MINUTES,
};

// Make the runtime crate available for downstream use
pub use cronview_runtime;
