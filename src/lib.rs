//! Non-owning views over byte strings, and the substring search behind
//! them.
//!
//! A [`View`] is a borrowed `(pointer, length)` window over bytes somebody
//! else owns: cheap to copy, impossible to outlive its backing storage,
//! and never the writer of a single byte. On top of it sit comparison,
//! saturating slicing, prefix/suffix checks, byte-class scans, substring
//! search in both directions, and a non-destructive tokenizer.
//!
//! The engine underneath is a full two-way matcher (Crochemore-Perrin)
//! with a memoized path that keeps worst-case comparisons linear, plus
//! `memchr`-backed single-byte scans and packed-window scanners for
//! needles of two to four bytes; see [`search`]. Everything runs in
//! constant space, allocates nothing, and
//! works without `std` (disable the default `std` feature).
//!
//! # Examples
//!
//! ```
//! use strview::View;
//!
//! let hay = View::new(b"hello world");
//! assert_eq!(hay.find(0, View::new(b"world")), Some(6));
//! assert_eq!(hay.find(0, View::new(b"xyz")), None);
//! assert_eq!(hay.find_first_of(View::new(b"aeiou")), Some(1));
//!
//! let mut tokens = View::new(b"::a::b:::c::").tokens(View::new(b"::"));
//! assert_eq!(tokens.next().unwrap(), "a");
//! assert_eq!(tokens.next().unwrap(), "b:");
//! assert_eq!(tokens.next().unwrap(), "c");
//! assert!(tokens.next().is_none());
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

pub mod search;
mod token;
mod view;

pub use crate::token::{RTokens, Tokens};
pub use crate::view::View;
