mod auth_tests;
mod filter_tests;
mod offer_tests;
