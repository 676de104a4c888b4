mod api_tests;
mod listings_tests;
