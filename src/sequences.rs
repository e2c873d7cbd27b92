pub mod count;
pub mod search;
