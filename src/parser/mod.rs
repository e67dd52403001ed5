pub mod list_field;

pub use list_field::{parse_character_field, parse_list_field};
