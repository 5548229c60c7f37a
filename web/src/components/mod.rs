pub mod date_range_picker;
pub mod error;
pub mod listing_head;
pub mod listing_info;
pub mod listing_reservation;
pub mod loading;
pub mod login_modal;
pub mod navbar;

// Re-export commonly used types
pub use date_range_picker::DateRangePicker;
pub use listing_head::ListingHead;
pub use listing_info::ListingInfo;
pub use listing_reservation::ListingReservation;
pub use login_modal::{LoginModal, LoginModalHandle};
pub use navbar::Navbar;
