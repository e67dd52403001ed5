pub mod catalog;
pub mod title;
