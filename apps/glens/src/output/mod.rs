//! Terminal output helpers

mod printer;
mod table;

pub use printer::{print_key_value, print_success, print_warning};
pub use table::{matches_query, truncate};
