pub mod entities;
pub mod listing_repository;
pub mod pool;
pub mod user_repository;
