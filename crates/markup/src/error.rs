//! Error types for markup rendering.
//!
//! Messages are themselves markup: the renderer formats its own
//! diagnostics, so an error surfaced through [`ParseError::rendered`]
//! carries the same coloring as normal output.

use thiserror::Error;

/// Errors that can occur while rendering markup.
///
/// `Display` yields the message in markup form; [`ParseError::rendered`]
/// yields it with the markup converted to escape sequences.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParseError {
    /// A `]` with no unterminated `[` before it.
    #[error("[color=yellow]Warning[/color]: Tried to end tag without beginning.")]
    UnopenedClose,

    /// Tag name not present in the style table.
    #[error("[color=yellow]Warning[/color]: Invalid tag: {tag}")]
    InvalidTag { tag: String },

    /// Known tag, but the argument is not in its allowed set.
    #[error("[color=yellow]Warning[/color]: Unknown argument for tag \\[{tag}\\]: {argument}")]
    UnknownArgument { tag: String, argument: String },

    /// A close tag while no tag was open.
    #[error("[color=yellow]Warning[/color]: Tried to use \\[/{tag}\\], but no tag was opened previously.")]
    NoOpenTag { tag: String },

    /// A close tag that does not match the innermost open tag.
    #[error("[color=yellow]Warning[/color]: Tried to use \\[/{tag}\\] to close tag, but \\[/{expected}\\] was expected.")]
    MismatchedClose { tag: String, expected: String },

    /// A `//` cleanup naming a tag that is not open anywhere.
    #[error("[color=yellow]Warning[/color]: Tried to use \\[{tag} //\\], but no \\[{tag}\\] tag is open.")]
    NothingToCleanUp { tag: String },

    /// End of input with tags still open, listed newest first.
    #[error("[color=yellow]Warning[/color]: There are still some tags open: {}", .open.join(" "))]
    UnclosedTags { open: Vec<String> },
}

impl ParseError {
    /// The message with its markup rendered to escape sequences.
    ///
    /// The templates above are fixed, and tag bodies can never contain
    /// `[`, `]` or `\`, so rendering a message cannot fail; if it ever
    /// does, a template is broken and that is a bug in this crate.
    ///
    /// # Examples
    ///
    /// ```
    /// let err = markup::render("[b][/i]").unwrap_err();
    /// assert_eq!(
    ///     err.rendered(),
    ///     "\x1b[33mWarning\x1b[0m: Tried to use [/i] to close tag, but [/b] was expected.",
    /// );
    /// ```
    pub fn rendered(&self) -> String {
        crate::render(&self.to_string()).expect("error message templates are valid markup")
    }
}
