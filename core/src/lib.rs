//! Flag/value argument mapping for raw command-line tokens.
//!
//! This crate splits a flat list of process arguments into flags and the
//! values that follow them, without any knowledge of which flags a program
//! expects:
//!
//! - [`is_flag`] / [`is_value`] — pure token classification.
//! - [`TokenKind`] / [`classify`] — the same rule as a single three-way answer.
//! - [`ArgumentMap`] — a mapping from flag to an optional value, built by one
//!   or more [`ArgumentMap::parse`] passes and queried afterwards.
//!
//! # Example
//!
//! ```
//! use argmap_core::ArgumentMap;
//!
//! let map = ArgumentMap::from_args(["-in", "notes.txt", "-verbose"]);
//!
//! assert_eq!(map.num_flags(), 2);
//! assert_eq!(map.get_string("-in"), Some("notes.txt"));
//! assert!(map.has_flag("-verbose"));
//! assert!(!map.has_value("-verbose"));
//! assert_eq!(map.get_string_or("-threads", "1"), "1");
//! ```

mod classify;
mod map;

pub use classify::{TokenKind, classify, is_flag, is_flag_opt, is_value, is_value_opt};
pub use map::ArgumentMap;
