mod caller_test;
mod error_handling_test;
