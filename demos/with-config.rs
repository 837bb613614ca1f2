use cronview::{PreviewGrid, ScheduleCatalog};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let catalog = ScheduleCatalog::from_toml("demos/config/application.toml")?;

    for entry in &catalog.entries {
        println!("{} -> {}", entry.name, entry.cron);

        let grid = PreviewGrid::new(&entry.config);
        let hours: Vec<u8> = grid
            .hours
            .iter()
            .filter(|cell| cell.checked)
            .map(|cell| cell.value)
            .collect();
        let minutes: Vec<u8> = grid
            .minutes
            .iter()
            .filter(|cell| cell.checked)
            .map(|cell| cell.value)
            .collect();
        println!("  hours: {hours:?}");
        println!("  minutes: {minutes:?}");
    }

    Ok(())
}
