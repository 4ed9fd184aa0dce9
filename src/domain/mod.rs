pub mod listing;
pub mod review;

pub use listing::{Listing, ListingDetail, ListingInput};
pub use review::{ReviewInput, ReviewWithAuthor};
