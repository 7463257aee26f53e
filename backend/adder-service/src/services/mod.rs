pub mod arithmetic;

pub use arithmetic::{add_two, parse_int, IntParseError, INCREMENT};
