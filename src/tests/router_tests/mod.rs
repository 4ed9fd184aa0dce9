mod auth_tests;
mod listing_tests;
mod review_tests;
