mod service_tests;
pub mod utils;
