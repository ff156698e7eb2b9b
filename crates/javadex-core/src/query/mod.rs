pub mod formatters;
pub mod guards;
pub mod readers;
pub mod search;
pub mod tokenizer;
