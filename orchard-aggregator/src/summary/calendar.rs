use chrono::{Days, NaiveDate};
use orchard_shared::types::CalendarEvent;

/// Events running at some point in `[today, today + days]`, soonest first.
///
/// A multi-day event that started before `today` but has not ended yet is
/// still upcoming.
pub fn upcoming_events(events: &[CalendarEvent], today: NaiveDate, days: u64) -> Vec<CalendarEvent> {
    let horizon = today.checked_add_days(Days::new(days)).unwrap_or(NaiveDate::MAX);
    let mut upcoming: Vec<CalendarEvent> = events
        .iter()
        .filter(|event| {
            let ends_on = event.ends_on.unwrap_or(event.starts_on);
            event.starts_on <= horizon && ends_on >= today
        })
        .cloned()
        .collect();
    upcoming.sort_by_key(|event| event.starts_on);
    upcoming
}

#[cfg(test)]
mod tests {
    use super::*;
    use orchard_shared::types::Session;
    use uuid::Uuid;

    fn day(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, m, d).unwrap()
    }

    fn event(title: &str, starts_on: NaiveDate, ends_on: Option<NaiveDate>) -> CalendarEvent {
        let mut event = CalendarEvent::new(&Session::new(Uuid::nil()), title, "task", starts_on);
        event.ends_on = ends_on;
        event
    }

    #[test]
    fn test_upcoming_window() {
        let events = vec![
            event("prune", day(3, 20), None),
            event("spray", day(3, 5), None),
            event("harvest", day(2, 25), Some(day(3, 3))),
            event("past", day(2, 1), None),
            event("later", day(5, 1), None),
        ];

        let upcoming = upcoming_events(&events, day(3, 1), 30);

        let titles: Vec<&str> = upcoming.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["harvest", "spray", "prune"]);
    }
}
