mod month;
mod weekday;

pub use month::Month;
pub use weekday::Weekday;

/// Minute checkboxes are quantized to five-minute steps.
pub const QUANTIZED_MINUTES: [u8; 12] = [0, 5, 10, 15, 20, 25, 30, 35, 40, 45, 50, 55];

/// Every hour value shown in the preview grid.
pub fn hour_values() -> Vec<u8> {
    (0..24).collect()
}

/// Every day-of-month value shown in the preview grid.
pub fn day_number_values() -> Vec<u8> {
    (1..=31).collect()
}
