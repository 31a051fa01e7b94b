mod aggregate_tests;
mod utils;
