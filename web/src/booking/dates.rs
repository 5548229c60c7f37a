use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use shared_types::Reservation;

/// The range currently selected in the reservation calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub key: String,
}

impl DateRange {
    pub const SELECTION_KEY: &'static str = "selection";

    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            start_date,
            end_date,
            key: Self::SELECTION_KEY.to_string(),
        }
    }

    /// Zero-night range on a single day.
    pub fn single_day(day: NaiveDate) -> Self {
        Self::new(day, day)
    }

    /// Initial selection: both ends on the local "today".
    pub fn today() -> Self {
        Self::single_day(Local::now().date_naive())
    }

    /// Whole days between the two ends. Negative when the range is inverted.
    pub fn night_count(&self) -> i64 {
        (self.end_date - self.start_date).num_days()
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        day >= self.start_date && day <= self.end_date
    }

    /// Calendar click handling: a click after the start of a single-day
    /// range extends it, anything else starts a fresh one. An extension that
    /// would swallow a blocked day also starts fresh at the clicked day.
    pub fn select(&self, day: NaiveDate, is_blocked: impl Fn(NaiveDate) -> bool) -> Self {
        if self.night_count() == 0 && day > self.start_date {
            let extended = Self::new(self.start_date, day);
            if !days_in_interval(extended.start_date, extended.end_date).any(&is_blocked) {
                return extended;
            }
        }
        Self::single_day(day)
    }
}

impl Default for DateRange {
    fn default() -> Self {
        Self::today()
    }
}

/// Every calendar day in `[start, end]`, inclusive. Empty when `end < start`.
pub fn days_in_interval(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    start.iter_days().take_while(move |day| *day <= end)
}

/// Days covered by existing reservations, concatenated in reservation order.
/// Overlapping reservations produce duplicate days; callers treat the result
/// as a membership set.
pub fn disabled_dates(reservations: &[Reservation]) -> Vec<NaiveDate> {
    reservations
        .iter()
        .flat_map(|reservation| {
            days_in_interval(
                reservation.start_date.date_naive(),
                reservation.end_date.date_naive(),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use std::collections::HashSet;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn reservation(id: &str, start: NaiveDate, end: NaiveDate) -> Reservation {
        let at_midnight = |d: NaiveDate| Utc.from_utc_datetime(&d.and_hms_opt(0, 0, 0).unwrap());
        Reservation {
            id: id.to_string(),
            listing_id: "L123".to_string(),
            user_id: "u1".to_string(),
            start_date: at_midnight(start),
            end_date: at_midnight(end),
            total_price: 0,
            created_at: at_midnight(start),
        }
    }

    #[test]
    fn no_reservations_disables_nothing() {
        assert!(disabled_dates(&[]).is_empty());
    }

    #[test]
    fn reservation_days_are_inclusive() {
        let dates = disabled_dates(&[reservation("r1", day(2024, 1, 1), day(2024, 1, 4))]);
        assert_eq!(
            dates,
            vec![day(2024, 1, 1), day(2024, 1, 2), day(2024, 1, 3), day(2024, 1, 4)]
        );
    }

    #[test]
    fn covers_every_reservation_and_nothing_else() {
        let reservations = vec![
            reservation("r1", day(2024, 2, 27), day(2024, 3, 2)),
            reservation("r2", day(2024, 3, 10), day(2024, 3, 10)),
        ];
        let dates = disabled_dates(&reservations);

        for r in &reservations {
            for d in days_in_interval(r.start_date.date_naive(), r.end_date.date_naive()) {
                assert!(dates.contains(&d), "missing {d}");
            }
        }
        for d in &dates {
            assert!(
                reservations.iter().any(|r| {
                    *d >= r.start_date.date_naive() && *d <= r.end_date.date_naive()
                }),
                "{d} is outside every reservation"
            );
        }
        // leap day is included
        assert!(dates.contains(&day(2024, 2, 29)));
        assert_eq!(dates.len(), 6);
    }

    #[test]
    fn overlapping_reservations_keep_duplicates() {
        let dates = disabled_dates(&[
            reservation("r1", day(2024, 5, 1), day(2024, 5, 3)),
            reservation("r2", day(2024, 5, 3), day(2024, 5, 4)),
        ]);
        assert_eq!(dates.iter().filter(|d| **d == day(2024, 5, 3)).count(), 2);
    }

    #[test]
    fn inverted_reservation_contributes_nothing() {
        let dates = disabled_dates(&[reservation("r1", day(2024, 5, 4), day(2024, 5, 1))]);
        assert!(dates.is_empty());
    }

    #[test]
    fn night_count_is_whole_days() {
        assert_eq!(DateRange::new(day(2024, 1, 1), day(2024, 1, 4)).night_count(), 3);
        assert_eq!(DateRange::single_day(day(2024, 1, 1)).night_count(), 0);
        assert_eq!(DateRange::new(day(2024, 1, 4), day(2024, 1, 1)).night_count(), -3);
    }

    #[test]
    fn new_range_uses_selection_key() {
        assert_eq!(DateRange::today().key, "selection");
        let today = DateRange::today();
        assert_eq!(today.start_date, today.end_date);
    }

    #[test]
    fn select_extends_then_restarts() {
        let open = |_: NaiveDate| false;
        let start = DateRange::single_day(day(2024, 1, 1));

        let extended = start.select(day(2024, 1, 4), open);
        assert_eq!(extended, DateRange::new(day(2024, 1, 1), day(2024, 1, 4)));

        let restarted = extended.select(day(2024, 1, 2), open);
        assert_eq!(restarted, DateRange::single_day(day(2024, 1, 2)));

        let earlier = start.select(day(2023, 12, 30), open);
        assert_eq!(earlier, DateRange::single_day(day(2023, 12, 30)));
    }

    #[test]
    fn select_refuses_to_span_a_reservation() {
        let booked: HashSet<NaiveDate> =
            disabled_dates(&[reservation("r1", day(2030, 1, 5), day(2030, 1, 7))])
                .into_iter()
                .collect();
        let is_blocked = |d: NaiveDate| booked.contains(&d);

        let across = DateRange::single_day(day(2030, 1, 1)).select(day(2030, 1, 10), is_blocked);
        assert_eq!(across, DateRange::single_day(day(2030, 1, 10)));
        assert!(days_in_interval(across.start_date, across.end_date).all(|d| !is_blocked(d)));

        let before = DateRange::single_day(day(2030, 1, 1)).select(day(2030, 1, 4), is_blocked);
        assert_eq!(before, DateRange::new(day(2030, 1, 1), day(2030, 1, 4)));
    }

    #[test]
    fn today_is_the_local_calendar_day() {
        let before = Local::now().date_naive();
        let today = DateRange::today();
        let after = Local::now().date_naive();
        assert!(today.start_date == before || today.start_date == after);
        assert_eq!(today.night_count(), 0);
    }
}
