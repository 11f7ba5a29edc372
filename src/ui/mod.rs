pub mod menu;
pub mod prompt;
pub mod quiz;

pub use menu::{draw_banner, draw_catalog};
pub use prompt::{ask, ask_yes_no, parse_selection, parse_yes_no, read_line, Selection};
pub use quiz::draw_quiz_set;
