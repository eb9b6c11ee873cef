pub mod error_or_async_tests;
