pub mod quotes;
pub mod screen;
pub mod search;
pub mod util;
