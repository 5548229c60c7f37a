//! Booking math for a single listing: which calendar days are taken, what a
//! stay costs, and where checkout hands off to.

pub mod categories;
pub mod checkout;
pub mod dates;
pub mod error;
pub mod pricing;

pub use categories::{find_category, Category};
pub use checkout::{CheckoutAction, CheckoutFlow, CheckoutParams, CheckoutState};
pub use dates::{disabled_dates, DateRange};
pub use error::{parse_listing_id, BookingError};
pub use pricing::{format_price, total_price};
