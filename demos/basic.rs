use cronview::{decode, encode, PreviewGrid};

fn main() {
    let expression = "0 9 ? * 2,4,6";
    let schedule = decode(Some(expression));
    let grid = PreviewGrid::new(&schedule);

    println!("Expression: {expression}\n");

    let weekdays: Vec<String> = grid
        .weekdays
        .iter()
        .map(|cell| format!("{}{}", if cell.checked { "[x] " } else { "[ ] " }, cell.value))
        .collect();
    println!("Weekdays: {}", weekdays.join("  "));

    let hours: Vec<u8> = grid
        .hours
        .iter()
        .filter(|cell| cell.checked)
        .map(|cell| cell.value)
        .collect();
    println!("Hours:    {hours:?}");

    let minutes: Vec<u8> = grid
        .minutes
        .iter()
        .filter(|cell| cell.checked)
        .map(|cell| cell.value)
        .collect();
    println!("Minutes:  {minutes:?}");

    let now = chrono::Local::now();
    println!("\nCovers this minute ({})? {}", now.format("%Y-%m-%d %H:%M"), schedule.includes(&now));
    println!("Re-encoded: {}", encode(&schedule));
}
