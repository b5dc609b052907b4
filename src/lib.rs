// Library API shared by the CLI and the error-docs generator
pub mod alphabet;
pub mod dictionary;
pub mod errors;
pub mod frequency_table;
pub mod letter_bag;
pub mod log;
pub mod scoring;
pub mod search;
