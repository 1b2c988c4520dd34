pub mod datetime;

pub use datetime::{Stamp, parse_stamp};
