//! Calendar grid construction.
//! Turns one month plus a content store into the ordered cell sequence a
//! Sunday-first, 7-column renderer lays out left-to-right, top-to-bottom.

use chrono::NaiveDate;

use crate::models::calendar::{CalendarMonth, DayCell, DayClass, GridCell};
use crate::services::store::ContentStore;
use crate::utils::date::date_key;

/// Build the cell sequence for one month: `first_weekday` leading empty
/// placeholders, then one cell per day in ascending order.
///
/// `today` is supplied by the caller so classification stays deterministic;
/// it must be a plain calendar date with no time-of-day component. Days
/// whose key is absent from the store simply carry no items. The sequence
/// is not padded at the end; a renderer wanting a rectangular grid pads the
/// final row itself.
pub fn build_month_grid(
    month: CalendarMonth,
    today: NaiveDate,
    store: &dyn ContentStore,
) -> Vec<GridCell> {
    let first_weekday = month.first_weekday();
    let days_in_month = month.days_in_month();

    let mut cells = Vec::with_capacity((first_weekday + days_in_month) as usize);
    for _ in 0..first_weekday {
        cells.push(GridCell::Empty);
    }

    for day in 1..=days_in_month {
        let date = month.date_of(day);
        let items = store.get(&date_key(date));
        cells.push(GridCell::Day(DayCell {
            day,
            date,
            items,
            class: DayClass::of(date, today),
        }));
    }

    log::debug!(
        "Built grid for {}: {} leading cells, {} days",
        month,
        first_weekday,
        days_in_month
    );

    cells
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::content_item::ContentItem;
    use crate::services::content::ContentService;
    use crate::services::store::{MemoryStore, MockContentStore};
    use pretty_assertions::assert_eq;

    fn november() -> CalendarMonth {
        CalendarMonth::new(2025, 11).unwrap()
    }

    fn november_today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 11, 19).unwrap()
    }

    #[test]
    fn test_november_2025_layout() {
        let store = MemoryStore::new();
        let grid = build_month_grid(november(), november_today(), &store);

        // Nov 1 2025 is a Saturday: six placeholders, then thirty days.
        assert_eq!(grid.len(), 36);
        assert!(grid[..6].iter().all(GridCell::is_empty));
        assert_eq!(grid[6].as_day().unwrap().day, 1);
        assert_eq!(grid[35].as_day().unwrap().day, 30);
    }

    #[test]
    fn test_november_2025_classification() {
        let store = MemoryStore::new();
        let grid = build_month_grid(november(), november_today(), &store);

        let class_of = |day: u32| {
            grid.iter()
                .filter_map(GridCell::as_day)
                .find(|cell| cell.day == day)
                .unwrap()
                .class
        };

        assert_eq!(class_of(18), DayClass::Past);
        assert_eq!(class_of(19), DayClass::Today);
        assert_eq!(class_of(20), DayClass::Future);
    }

    #[test]
    fn test_days_ascend() {
        let store = MemoryStore::new();
        let grid = build_month_grid(november(), november_today(), &store);

        let days: Vec<_> = grid
            .iter()
            .filter_map(GridCell::as_day)
            .map(|cell| cell.day)
            .collect();
        assert_eq!(days, (1..=30).collect::<Vec<_>>());
    }

    #[test]
    fn test_leap_february() {
        let month = CalendarMonth::new(2024, 2).unwrap();
        let today = NaiveDate::from_ymd_opt(2024, 2, 15).unwrap();
        let store = MemoryStore::new();

        let grid = build_month_grid(month, today, &store);

        // Feb 1 2024 is a Thursday.
        assert_eq!(grid.len(), 4 + 29);
        assert_eq!(grid[4 + 28].as_day().unwrap().day, 29);
    }

    #[test]
    fn test_items_land_on_their_day_only() {
        let mut store = MemoryStore::new();
        let mut service = ContentService::new(&mut store);
        let date = NaiveDate::from_ymd_opt(2025, 11, 14).unwrap();
        service
            .add(date, ContentItem::new("Newsletter #12").unwrap())
            .unwrap();

        let grid = build_month_grid(november(), november_today(), &store);

        for cell in grid.iter().filter_map(GridCell::as_day) {
            if cell.day == 14 {
                assert_eq!(cell.items.len(), 1);
                assert_eq!(cell.items[0].title, "Newsletter #12");
            } else {
                assert!(cell.items.is_empty(), "day {} should be empty", cell.day);
            }
        }
    }

    #[test]
    fn test_one_lookup_per_day() {
        let mut store = MockContentStore::new();
        store
            .expect_get()
            .times(30)
            .returning(|key| {
                if key == "2025-11-14" {
                    vec![ContentItem::new("Newsletter #12").unwrap()]
                } else {
                    vec![]
                }
            });

        let grid = build_month_grid(november(), november_today(), &store);

        let day_14 = grid
            .iter()
            .filter_map(GridCell::as_day)
            .find(|cell| cell.day == 14)
            .unwrap();
        assert_eq!(day_14.items.len(), 1);
    }

    #[test]
    fn test_today_outside_month() {
        let store = MemoryStore::new();
        let today = NaiveDate::from_ymd_opt(2025, 12, 1).unwrap();

        let grid = build_month_grid(november(), today, &store);

        assert!(grid
            .iter()
            .filter_map(GridCell::as_day)
            .all(|cell| cell.class == DayClass::Past));
    }

    #[test]
    fn test_month_starting_sunday_has_no_placeholders() {
        let month = CalendarMonth::new(2025, 6).unwrap();
        let today = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
        let store = MemoryStore::new();

        let grid = build_month_grid(month, today, &store);

        assert_eq!(grid.len(), 30);
        assert_eq!(grid[0].as_day().unwrap().day, 1);
    }
}
