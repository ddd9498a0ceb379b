pub mod raw_quote;
pub mod resolved;
pub mod summary;
