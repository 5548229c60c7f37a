use chrono::NaiveDate;
use leptos::prelude::*;
use thaw::*;

use crate::booking::{format_price, DateRange};
use crate::components::date_range_picker::DateRangePicker;

#[component]
pub fn ListingReservation(
    price: i32,
    #[prop(into)] total_price: Signal<i64>,
    #[prop(into)] date_range: Signal<DateRange>,
    #[prop(into)] on_change_date: Callback<DateRange>,
    #[prop(into)] on_checkout: Callback<()>,
    #[prop(into)] disabled: Signal<bool>,
    #[prop(into)] disabled_dates: Signal<Vec<NaiveDate>>,
) -> impl IntoView {
    view! {
        <div class="listing-reservation">
            <div class="listing-reservation__price">
                <span class="listing-reservation__amount">{format_price(i64::from(price))}</span>
                <span class="listing-reservation__unit">" night"</span>
            </div>
            <hr />

            <DateRangePicker
                value=date_range
                on_change=on_change_date
                disabled_dates=disabled_dates
                disabled=disabled
            />
            <hr />

            <div class="listing-reservation__action">
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=disabled
                    on_click=move |_| on_checkout.run(())
                >
                    "Checkout"
                </Button>
            </div>
            <hr />

            <div class="listing-reservation__total">
                <span>"Total"</span>
                <span>{move || format_price(total_price.get())}</span>
            </div>
        </div>
    }
}
