//! Coercion of raw text fields into numbers
//!
//! Two disciplines exist side by side:
//! - required fields ([`parse_required`]) treat blank as zero and fail on anything else
//!   that is not a number
//! - lenient fields ([`parse_or_zero`]) treat blank *and* unparseable text as zero

mod parse;

pub use parse::{parse_or_zero, parse_required, parse_years};
