// Content Calendar Application
// Main entry point: prints the current month grid to the terminal

use anyhow::Result;

use content_calendar::models::calendar::{CalendarMonth, DayClass, GridCell};
use content_calendar::services::grid::build_month_grid;
use content_calendar::services::settings::SettingsService;
use content_calendar::services::store::MemoryStore;
use content_calendar::utils::date;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting content calendar");

    let settings = SettingsService::new()?.load()?;
    log::info!(
        "Loaded settings: theme={}, channels={:?}",
        settings.theme,
        settings.channels
    );

    let today = date::today();
    let month = CalendarMonth::containing(today);
    let store = MemoryStore::new();
    let grid = build_month_grid(month, today, &store);

    print_grid(month, &grid);
    Ok(())
}

/// Print a Sunday-first 7-column layout with today bracketed
fn print_grid(month: CalendarMonth, grid: &[GridCell]) {
    println!("{:^28}", month.to_string());
    println!(" Su  Mo  Tu  We  Th  Fr  Sa");

    let mut line = String::new();
    for (idx, cell) in grid.iter().enumerate() {
        match cell {
            GridCell::Empty => line.push_str("    "),
            GridCell::Day(day) => {
                if day.class == DayClass::Today {
                    line.push_str(&format!("[{:>2}]", day.day));
                } else {
                    line.push_str(&format!(" {:>2} ", day.day));
                }
            }
        }
        if (idx + 1) % 7 == 0 {
            println!("{}", line.trim_end());
            line.clear();
        }
    }
    if !line.is_empty() {
        println!("{}", line.trim_end());
    }
}
