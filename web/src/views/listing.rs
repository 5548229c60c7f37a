use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};
use shared_types::{Listing, Reservation, SafeUser};

use crate::{
    booking::{disabled_dates, find_category, total_price, CheckoutAction, CheckoutFlow, DateRange},
    components::{
        error::ErrorView, loading::LoadingView, login_modal::use_login_modal, ListingHead,
        ListingInfo, ListingReservation,
    },
    server::fetch_listing_details,
    utils::auth::use_session,
    views::not_found::NotFoundPage,
};

/// Route component for `/listings/:listing_id`.
#[component]
pub fn ListingPage() -> impl IntoView {
    let params = use_params_map();
    let session = use_session();
    let login_modal = use_login_modal();

    let listing_id = Memo::new(move |_| params.read().get("listing_id").unwrap_or_default());

    let details = Resource::new(
        move || listing_id.get(),
        move |id| async move { fetch_listing_details(id).await.map_err(|e| e.to_string()) },
    );

    view! {
        <div class="listing-page">
            <Suspense fallback=move || view! {
                <LoadingView message="Loading listing..." />
            }>
                {move || details.get().map(|result| match result {
                    Ok(Some(details)) => view! {
                        <ListingClient
                            listing=details.listing
                            owner=details.owner
                            reservations=details.reservations
                            current_user=session.user
                            on_login_prompt=Callback::new(move |_| login_modal.on_open())
                        />
                    }.into_any(),
                    Ok(None) => view! { <NotFoundPage /> }.into_any(),
                    Err(e) => view! {
                        <ErrorView title="We couldn't load this listing" message=e />
                    }.into_any(),
                })}
            </Suspense>
        </div>
    }
}

/// Detail view for one listing: header, host info and the reservation card.
///
/// The session is passed in rather than looked up so the view can be mounted
/// with any user (or none).
#[component]
pub fn ListingClient(
    listing: Listing,
    owner: SafeUser,
    #[prop(into)] reservations: Signal<Vec<Reservation>>,
    #[prop(into)] current_user: Signal<Option<SafeUser>>,
    #[prop(into)] on_login_prompt: Callback<()>,
) -> impl IntoView {
    let navigate = use_navigate();

    let price = listing.price;
    let category = find_category(&listing.category);

    let date_range = RwSignal::new(DateRange::today());
    // The server's "today" may be a different day than the guest's; reset the
    // initial selection once running in the browser.
    Effect::new(move |_| date_range.set(DateRange::today()));
    let checkout = RwSignal::new(CheckoutFlow::default());

    let blocked_dates = Memo::new(move |_| reservations.with(|r| disabled_dates(r)));
    let total = Memo::new(move |_| total_price(&date_range.get(), price));
    let is_loading = Signal::derive(move || checkout.with(CheckoutFlow::is_loading));

    let checkout_listing = StoredValue::new(listing.clone());
    let on_checkout = Callback::new(move |_: ()| {
        let session = current_user.get_untracked();
        let range = date_range.get_untracked();

        let action = checkout
            .try_update(|flow| {
                checkout_listing.with_value(|listing| flow.begin(session.as_ref(), listing, &range))
            })
            .flatten();

        match action {
            Some(CheckoutAction::PromptLogin) => {
                on_login_prompt.run(());
                checkout.update(CheckoutFlow::login_prompt_shown);
            }
            Some(CheckoutAction::Navigate(url)) => {
                navigate(&url, Default::default());
                checkout.update(CheckoutFlow::navigation_dispatched);
            }
            None => {}
        }
    });

    view! {
        <div class="listing-container">
            <div class="listing-layout">
                <ListingHead
                    title=listing.title.clone()
                    image_src=listing.image_src.clone()
                    location_value=listing.location_value.clone()
                    id=listing.id.clone()
                />
                <div class="listing-grid">
                    <ListingInfo
                        user=owner
                        category=category
                        description=listing.description.clone()
                        room_count=listing.room_count
                        guest_count=listing.guest_count
                        bathroom_count=listing.bathroom_count
                        location_value=listing.location_value.clone()
                    />
                    <div class="listing-grid__reservation">
                        <ListingReservation
                            price=price
                            total_price=total
                            date_range=date_range
                            on_change_date=Callback::new(move |value| date_range.set(value))
                            on_checkout=on_checkout
                            disabled=is_loading
                            disabled_dates=blocked_dates
                        />
                    </div>
                </div>
            </div>
        </div>
    }
}
