mod parser_error_tests;
mod parser_executable_tests;
mod parser_value_tests;
mod utils;
