use chrono::NaiveDate;
use shared_types::{Listing, SafeUser};

use super::dates::DateRange;

pub const CHECKOUT_PATH: &str = "/checkout";
pub const GUEST_CURRENCY: &str = "USD";

// Placeholder reputation values; listings carry no ratings yet.
pub const PLACEHOLDER_RATING: f64 = 4.5;
pub const PLACEHOLDER_REVIEWS_COUNT: u32 = 25;

/// Everything the external checkout page reads from its query string.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutParams {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guest_currency: String,
    pub number_of_guests: i32,
    pub property_id: String,
    pub property_name: String,
    pub property_type: String,
    pub image_url: String,
    pub price_per_night: i32,
    pub rating: f64,
    pub reviews_count: u32,
    pub is_super_host: bool,
}

impl CheckoutParams {
    pub fn from_listing(listing: &Listing, range: &DateRange) -> Self {
        Self {
            check_in: range.start_date,
            check_out: range.end_date,
            guest_currency: GUEST_CURRENCY.to_string(),
            number_of_guests: listing.guest_count,
            property_id: listing.id.clone(),
            property_name: listing.title.clone(),
            // The checkout page shows the description as the property type.
            property_type: listing.description.clone(),
            image_url: listing.image_src.clone(),
            price_per_night: listing.price,
            rating: PLACEHOLDER_RATING,
            reviews_count: PLACEHOLDER_REVIEWS_COUNT,
            is_super_host: false,
        }
    }

    /// Ordered query pairs, unencoded.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("checkin", self.check_in.format("%Y-%m-%d").to_string()),
            ("checkout", self.check_out.format("%Y-%m-%d").to_string()),
            ("guestCurrency", self.guest_currency.clone()),
            ("numberOfGuests", self.number_of_guests.to_string()),
            ("propertyId", self.property_id.clone()),
            ("propertyName", self.property_name.clone()),
            ("propertyType", self.property_type.clone()),
            ("imageUrl", self.image_url.clone()),
            ("pricePerNight", self.price_per_night.to_string()),
            ("rating", self.rating.to_string()),
            ("reviewsCount", self.reviews_count.to_string()),
            ("isSuperHost", self.is_super_host.to_string()),
        ]
    }

    /// `/checkout?...` with every value percent-encoded.
    pub fn to_url(&self) -> String {
        let query = self
            .query_pairs()
            .into_iter()
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(&value)))
            .collect::<Vec<_>>()
            .join("&");

        format!("{}?{}", CHECKOUT_PATH, query)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckoutState {
    #[default]
    Idle,
    Loading,
    LoginPrompt,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutAction {
    PromptLogin,
    Navigate(String),
}

/// Tracks the checkout button through a click.
///
/// `Loading` only lasts until the router has been handed the URL; the caller
/// reports that with [`CheckoutFlow::navigation_dispatched`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CheckoutFlow {
    state: CheckoutState,
}

impl CheckoutFlow {
    pub fn state(&self) -> CheckoutState {
        self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == CheckoutState::Loading
    }

    /// Returns `None` while a previous checkout is still being dispatched.
    pub fn begin(
        &mut self,
        session: Option<&SafeUser>,
        listing: &Listing,
        range: &DateRange,
    ) -> Option<CheckoutAction> {
        if self.is_loading() {
            return None;
        }

        if session.is_none() {
            self.state = CheckoutState::LoginPrompt;
            return Some(CheckoutAction::PromptLogin);
        }

        self.state = CheckoutState::Loading;
        Some(CheckoutAction::Navigate(
            CheckoutParams::from_listing(listing, range).to_url(),
        ))
    }

    pub fn login_prompt_shown(&mut self) {
        if self.state == CheckoutState::LoginPrompt {
            self.state = CheckoutState::Idle;
        }
    }

    pub fn navigation_dispatched(&mut self) {
        if self.state == CheckoutState::Loading {
            self.state = CheckoutState::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn listing() -> Listing {
        Listing {
            id: "L123".to_string(),
            title: "Cliffside Cabin".to_string(),
            description: "Entire cabin".to_string(),
            image_src: "https://res.cloudinary.com/demo/image/upload/cabin.jpg".to_string(),
            category: "Countryside".to_string(),
            room_count: 2,
            bathroom_count: 1,
            guest_count: 4,
            location_value: "PT".to_string(),
            user_id: "owner-1".to_string(),
            price: 100,
            created_at: Utc.with_ymd_and_hms(2023, 6, 1, 0, 0, 0).unwrap(),
        }
    }

    fn guest() -> SafeUser {
        SafeUser {
            id: "guest-1".to_string(),
            name: Some("Ada".to_string()),
            email: Some("ada@example.com".to_string()),
            image: None,
            created_at: Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    fn january_stay() -> DateRange {
        DateRange::new(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 4).unwrap(),
        )
    }

    #[test]
    fn signed_in_checkout_navigates_with_booking_params() {
        let mut flow = CheckoutFlow::default();
        let action = flow.begin(Some(&guest()), &listing(), &january_stay());

        let Some(CheckoutAction::Navigate(url)) = action else {
            panic!("expected navigation, got {action:?}");
        };
        assert!(url.starts_with("/checkout?"));
        for expected in [
            "checkin=2024-01-01",
            "checkout=2024-01-04",
            "guestCurrency=USD",
            "numberOfGuests=4",
            "propertyId=L123",
            "pricePerNight=100",
            "rating=4.5",
            "reviewsCount=25",
            "isSuperHost=false",
        ] {
            assert!(url.contains(expected), "{url} is missing {expected}");
        }
        assert_eq!(flow.state(), CheckoutState::Loading);
    }

    #[test]
    fn signed_out_checkout_prompts_login_without_navigating() {
        let mut flow = CheckoutFlow::default();
        let action = flow.begin(None, &listing(), &january_stay());

        assert_eq!(action, Some(CheckoutAction::PromptLogin));
        assert_eq!(flow.state(), CheckoutState::LoginPrompt);
        assert!(!flow.is_loading());

        flow.login_prompt_shown();
        assert_eq!(flow.state(), CheckoutState::Idle);
    }

    #[test]
    fn loading_clears_once_navigation_is_dispatched() {
        let mut flow = CheckoutFlow::default();
        flow.begin(Some(&guest()), &listing(), &january_stay());
        assert!(flow.is_loading());

        flow.navigation_dispatched();
        assert_eq!(flow.state(), CheckoutState::Idle);
    }

    #[test]
    fn repeated_click_while_loading_is_ignored() {
        let mut flow = CheckoutFlow::default();
        flow.begin(Some(&guest()), &listing(), &january_stay());

        assert_eq!(flow.begin(Some(&guest()), &listing(), &january_stay()), None);
        assert!(flow.is_loading());
    }

    #[test]
    fn free_text_and_image_url_are_percent_encoded() {
        let mut listing = listing();
        listing.title = "Sea & Sun = Bliss".to_string();
        listing.description = "Loft #2?".to_string();

        let url = CheckoutParams::from_listing(&listing, &january_stay()).to_url();

        assert!(url.contains("propertyName=Sea%20%26%20Sun%20%3D%20Bliss"));
        assert!(url.contains("propertyType=Loft%20%232%3F"));
        assert!(url.contains(
            "imageUrl=https%3A%2F%2Fres.cloudinary.com%2Fdemo%2Fimage%2Fupload%2Fcabin.jpg"
        ));
        // only the separators between the twelve pairs remain
        assert_eq!(url.matches('&').count(), 11);
    }

    #[test]
    fn query_pairs_keep_checkout_order() {
        let keys: Vec<_> = CheckoutParams::from_listing(&listing(), &january_stay())
            .query_pairs()
            .into_iter()
            .map(|(key, _)| key)
            .collect();
        assert_eq!(
            keys,
            vec![
                "checkin",
                "checkout",
                "guestCurrency",
                "numberOfGuests",
                "propertyId",
                "propertyName",
                "propertyType",
                "imageUrl",
                "pricePerNight",
                "rating",
                "reviewsCount",
                "isSuperHost",
            ]
        );
    }
}
