//! Bracket-tag markup rendering for terminal output.
//!
//! This crate converts text like `[b]bold[/b]` or `[color=red]alert[/]`
//! into the equivalent ANSI escape sequences.
//!
//! # Markup syntax
//!
//! - `[b]`, `[u]`, `[i]`, `[blink]`, `[strike]` - text attributes
//! - `[color=red]`, `[bgcolor=blue]` - foreground / background color;
//!   without an argument the terminal default is restored
//! - `[/b]` - close the innermost tag, which must be `b`
//! - `[/]` - close everything
//! - `[u /]` - self-closing: apply once, nothing left to close
//! - `[u //]` - cleanup: forget the newest open `u` without emitting
//!   anything
//! - `\[`, `\]`, `\\` - literal bracket / backslash
//!
//! Closing a tag emits a full reset and then re-applies every style
//! still open, since terminals cannot switch off one attribute in
//! isolation.
//!
//! # Usage
//!
//! ```
//! let rendered = markup::render("[b]hi[/b]").unwrap();
//! assert_eq!(rendered, "\x1b[1mhi\x1b[0m");
//!
//! let err = markup::render("[b]hi").unwrap_err();
//! assert!(matches!(err, markup::ParseError::UnclosedTags { .. }));
//! ```

pub mod error;
pub mod render;
pub mod tag;

// Re-export main types at crate root
pub use error::ParseError;
pub use render::{render, try_render};
pub use tag::{ColorName, RESET, StyleTag, TagContent};
