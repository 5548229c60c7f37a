pub mod listing;
pub mod not_found;
