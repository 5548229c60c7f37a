use std::collections::HashSet;

use chrono::{Datelike, Local, Months, NaiveDate};
use leptos::prelude::*;
use thaw::*;

use crate::booking::DateRange;

const MAX_MONTHS_AHEAD: u32 = 12;

#[component]
pub fn DateRangePicker(
    #[prop(into)] value: Signal<DateRange>,
    #[prop(into)] on_change: Callback<DateRange>,
    #[prop(into)] disabled_dates: Signal<Vec<NaiveDate>>,
    #[prop(into)] disabled: Signal<bool>,
) -> impl IntoView {
    let current_month_offset = RwSignal::new(0u32);
    let blocked = Memo::new(move |_| disabled_dates.get().into_iter().collect::<HashSet<_>>());

    // Seeded on the server, then replaced with the browser's own calendar day
    // once hydrated so past-day flags follow the guest's timezone.
    let today = RwSignal::new(Local::now().date_naive());
    Effect::new(move |_| today.set(Local::now().date_naive()));

    let visible_month = move || month_start(today.get(), current_month_offset.get());

    view! {
        <div class="date-range-picker">
            <div class="date-picker-header">
                <Button
                    appearance=ButtonAppearance::Secondary
                    size=ButtonSize::Small
                    on_click=move |_| {
                        current_month_offset.update(|v| *v = v.saturating_sub(1));
                    }
                    disabled=Signal::derive(move || current_month_offset.get() == 0)
                >
                    "←"
                </Button>

                <div class="month-label">
                    {move || visible_month().format("%B %Y").to_string()}
                </div>

                <Button
                    appearance=ButtonAppearance::Secondary
                    size=ButtonSize::Small
                    on_click=move |_| {
                        current_month_offset.update(|v| *v += 1);
                    }
                    disabled=Signal::derive(move || current_month_offset.get() >= MAX_MONTHS_AHEAD)
                >
                    "→"
                </Button>
            </div>

            <div class="date-picker-calendar">
                <div class="weekday-headers">
                    <div class="weekday-header">"Sun"</div>
                    <div class="weekday-header">"Mon"</div>
                    <div class="weekday-header">"Tue"</div>
                    <div class="weekday-header">"Wed"</div>
                    <div class="weekday-header">"Thu"</div>
                    <div class="weekday-header">"Fri"</div>
                    <div class="weekday-header">"Sat"</div>
                </div>

                <div class="calendar-days">
                    {move || {
                        let today = today.get();
                        let range = value.get();
                        let locked = disabled.get();

                        blocked.with(|blocked_set| {
                            month_grid(visible_month())
                                .into_iter()
                                .map(|cell| {
                                    let Some(day) = cell else {
                                        return view! { <div class="calendar-day empty"></div> }.into_any();
                                    };

                                    let unavailable = blocked_set.contains(&day);
                                    let is_past = day < today;
                                    let is_edge = day == range.start_date || day == range.end_date;
                                    let in_range = range.contains(day);
                                    let selection = range.clone();

                                    view! {
                                        <button
                                            class="calendar-day"
                                            class:unavailable=unavailable
                                            class:past=is_past
                                            class:in_range=in_range
                                            class:selected=is_edge
                                            disabled=locked || unavailable || is_past
                                            on:click=move |_| {
                                                let next = blocked.with_untracked(|blocked| {
                                                    selection.select(day, |d| blocked.contains(&d))
                                                });
                                                on_change.run(next);
                                            }
                                        >
                                            {day.day()}
                                        </button>
                                    }
                                    .into_any()
                                })
                                .collect::<Vec<_>>()
                        })
                    }}
                </div>
            </div>
        </div>
    }
}

/// First day of the month `offset` months after the one containing `today`.
fn month_start(today: NaiveDate, offset: u32) -> NaiveDate {
    let first = today.with_day(1).unwrap_or(today);
    first.checked_add_months(Months::new(offset)).unwrap_or(first)
}

/// Calendar cells for the month starting at `first`, padded with `None` so
/// the first day lands under its weekday (Sunday first).
fn month_grid(first: NaiveDate) -> Vec<Option<NaiveDate>> {
    let leading = first.weekday().num_days_from_sunday() as usize;
    let next_month = first.checked_add_months(Months::new(1)).unwrap_or(first);

    std::iter::repeat(None)
        .take(leading)
        .chain(first.iter_days().take_while(|day| *day < next_month).map(Some))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn month_start_rolls_over_years() {
        assert_eq!(month_start(day(2024, 11, 17), 0), day(2024, 11, 1));
        assert_eq!(month_start(day(2024, 11, 17), 3), day(2025, 2, 1));
    }

    #[test]
    fn grid_pads_to_first_weekday() {
        // 2024-02-01 is a Thursday
        let grid = month_grid(day(2024, 2, 1));
        assert_eq!(grid.iter().take_while(|c| c.is_none()).count(), 4);
        assert_eq!(grid[4], Some(day(2024, 2, 1)));
        assert_eq!(grid.iter().flatten().count(), 29);
        assert_eq!(grid.last().copied().flatten(), Some(day(2024, 2, 29)));
    }

    #[test]
    fn sunday_start_has_no_padding() {
        // 2024-09-01 is a Sunday
        let grid = month_grid(day(2024, 9, 1));
        assert_eq!(grid.first().copied().flatten(), Some(day(2024, 9, 1)));
        assert_eq!(grid.len(), 30);
    }
}
