use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BookingError {
    #[error("listing id is empty")]
    EmptyListingId,
    #[error("listing id `{0}` contains unsupported characters")]
    InvalidListingId(String),
}

/// Route params arrive untrusted; ids are cuid/uuid-like tokens.
pub fn parse_listing_id(raw: &str) -> Result<String, BookingError> {
    let id = raw.trim();
    if id.is_empty() {
        return Err(BookingError::EmptyListingId);
    }
    if !id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') {
        return Err(BookingError::InvalidListingId(id.to_string()));
    }
    Ok(id.to_string())
}
