pub mod quotes;
pub mod search;
