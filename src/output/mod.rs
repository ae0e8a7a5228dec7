mod response;

pub use response::{exit_code, print_error, print_json, print_text};
