pub mod listing_card;

pub use listing_card::listing_card;
