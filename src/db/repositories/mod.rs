pub mod catalog;
pub mod media;
pub mod movie;
pub mod prediction;
pub mod show;
