mod directive_tests;
mod field_tests;
mod fragment_tests;
