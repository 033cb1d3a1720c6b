//! The style table: tag names, their arguments, and escape sequences.
//!
//! The table is a fixed enum rather than a runtime map, so unknown tags
//! and unknown arguments fall out of `match` arms instead of failed
//! lookups.

use std::fmt;

use crate::error::ParseError;

/// Escape sequence that clears all active attributes at once.
pub const RESET: &str = "\x1b[0m";

/// Named colors accepted by `color` and `bgcolor`.
///
/// `Default` is the empty-argument form: `[color]` switches back to the
/// terminal's default foreground without closing anything.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorName {
    Default,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl ColorName {
    /// Parse a color argument. The empty string is the default color.
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "" => Some(ColorName::Default),
            "black" => Some(ColorName::Black),
            "red" => Some(ColorName::Red),
            "green" => Some(ColorName::Green),
            "yellow" => Some(ColorName::Yellow),
            "blue" => Some(ColorName::Blue),
            "magenta" => Some(ColorName::Magenta),
            "cyan" => Some(ColorName::Cyan),
            "white" => Some(ColorName::White),
            _ => None,
        }
    }

    /// The argument spelling, as written in markup. Empty for `Default`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorName::Default => "",
            ColorName::Black => "black",
            ColorName::Red => "red",
            ColorName::Green => "green",
            ColorName::Yellow => "yellow",
            ColorName::Blue => "blue",
            ColorName::Magenta => "magenta",
            ColorName::Cyan => "cyan",
            ColorName::White => "white",
        }
    }

    fn fg_escape(&self) -> &'static str {
        match self {
            ColorName::Default => "\x1b[39m", // reset to default fg
            ColorName::Black => "\x1b[30m",
            ColorName::Red => "\x1b[31m",
            ColorName::Green => "\x1b[32m",
            ColorName::Yellow => "\x1b[33m",
            ColorName::Blue => "\x1b[34m",
            ColorName::Magenta => "\x1b[35m",
            ColorName::Cyan => "\x1b[36m",
            ColorName::White => "\x1b[37m",
        }
    }

    fn bg_escape(&self) -> &'static str {
        match self {
            ColorName::Default => "\x1b[49m", // reset to default bg
            ColorName::Black => "\x1b[40m",
            ColorName::Red => "\x1b[41m",
            ColorName::Green => "\x1b[42m",
            ColorName::Yellow => "\x1b[43m",
            ColorName::Blue => "\x1b[44m",
            ColorName::Magenta => "\x1b[45m",
            ColorName::Cyan => "\x1b[46m",
            ColorName::White => "\x1b[47m",
        }
    }
}

/// One entry of the style table: a tag name plus its argument.
///
/// This is what the render stack holds; replaying a stack entry after a
/// full reset re-emits [`StyleTag::escape`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StyleTag {
    Bold,
    Underline,
    Italic,
    Blink,
    Strike,
    Color(ColorName),
    BgColor(ColorName),
}

impl StyleTag {
    /// The tag name as written in markup.
    pub fn name(&self) -> &'static str {
        match self {
            StyleTag::Bold => "b",
            StyleTag::Underline => "u",
            StyleTag::Italic => "i",
            StyleTag::Blink => "blink",
            StyleTag::Strike => "strike",
            StyleTag::Color(_) => "color",
            StyleTag::BgColor(_) => "bgcolor",
        }
    }

    /// The argument as written in markup. Empty when the tag takes none.
    pub fn argument(&self) -> &'static str {
        match self {
            StyleTag::Color(color) | StyleTag::BgColor(color) => color.as_str(),
            _ => "",
        }
    }

    /// The escape sequence this tag switches on.
    pub fn escape(&self) -> &'static str {
        match self {
            StyleTag::Bold => "\x1b[1m",
            StyleTag::Underline => "\x1b[4m",
            StyleTag::Italic => "\x1b[3m",
            StyleTag::Blink => "\x1b[5m",
            StyleTag::Strike => "\x1b[9m",
            StyleTag::Color(color) => color.fg_escape(),
            StyleTag::BgColor(color) => color.bg_escape(),
        }
    }
}

impl fmt::Display for StyleTag {
    // `name` or `name(argument)`, the spelling used when listing
    // still-open tags.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.argument() {
            "" => write!(f, "{}", self.name()),
            argument => write!(f, "{}({})", self.name(), argument),
        }
    }
}

/// The classification of one completed tag body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TagContent {
    /// A style tag that applies and stays open: `[b]`, `[color=red]`.
    Open(StyleTag),
    /// A style tag with the `" /"` suffix: applies once, never pushed.
    SelfClosing(StyleTag),
    /// The close-all tag `[/]`: clears the stack, emits a full reset.
    CloseAll,
    /// A named close: `[/b]` carries `"b"`.
    Close(String),
    /// A `" //"` cleanup: drops the newest open tag with this name.
    Cleanup(String),
}

impl TagContent {
    /// Classify the text between `[` and `]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use markup::{StyleTag, TagContent};
    ///
    /// let open = TagContent::parse("color=red").unwrap();
    /// assert!(matches!(open, TagContent::Open(StyleTag::Color(_))));
    ///
    /// let close = TagContent::parse("/b").unwrap();
    /// assert_eq!(close, TagContent::Close("b".to_string()));
    /// ```
    pub fn parse(body: &str) -> Result<Self, ParseError> {
        // Cleanup is resolved from the name alone; the style table is
        // never consulted for it.
        if let Some(stripped) = body.strip_suffix(" //") {
            let (name, _) = split_argument(stripped);
            return Ok(TagContent::Cleanup(name.to_string()));
        }

        let (body, self_closing) = match body.strip_suffix(" /") {
            Some(stripped) => (stripped, true),
            None => (body, false),
        };

        let (name, argument) = split_argument(body);

        if name == "/" {
            return Ok(TagContent::CloseAll);
        }

        let style = match name {
            "b" if argument.is_empty() => StyleTag::Bold,
            "u" if argument.is_empty() => StyleTag::Underline,
            "i" if argument.is_empty() => StyleTag::Italic,
            "blink" if argument.is_empty() => StyleTag::Blink,
            "strike" if argument.is_empty() => StyleTag::Strike,
            "color" => StyleTag::Color(color_argument(name, argument)?),
            "bgcolor" => StyleTag::BgColor(color_argument(name, argument)?),
            "b" | "u" | "i" | "blink" | "strike" => {
                return Err(ParseError::UnknownArgument {
                    tag: name.to_string(),
                    argument: argument.to_string(),
                });
            }
            _ => {
                return match name.strip_prefix('/') {
                    Some(closed) => Ok(TagContent::Close(closed.to_string())),
                    None => Err(ParseError::InvalidTag {
                        tag: name.to_string(),
                    }),
                };
            }
        };

        Ok(if self_closing {
            TagContent::SelfClosing(style)
        } else {
            TagContent::Open(style)
        })
    }
}

/// Split a tag body on the first `=`. No `=` means an empty argument.
fn split_argument(body: &str) -> (&str, &str) {
    match body.split_once('=') {
        Some((name, argument)) => (name, argument),
        None => (body, ""),
    }
}

fn color_argument(tag: &str, argument: &str) -> Result<ColorName, ParseError> {
    ColorName::parse(argument).ok_or_else(|| ParseError::UnknownArgument {
        tag: tag.to_string(),
        argument: argument.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_plain_tag() {
        assert_eq!(TagContent::parse("b").unwrap(), TagContent::Open(StyleTag::Bold));
        assert_eq!(
            TagContent::parse("strike").unwrap(),
            TagContent::Open(StyleTag::Strike)
        );
    }

    #[test]
    fn parse_color_with_argument() {
        assert_eq!(
            TagContent::parse("color=red").unwrap(),
            TagContent::Open(StyleTag::Color(ColorName::Red))
        );
        assert_eq!(
            TagContent::parse("bgcolor=cyan").unwrap(),
            TagContent::Open(StyleTag::BgColor(ColorName::Cyan))
        );
    }

    #[test]
    fn parse_color_without_argument_is_default() {
        assert_eq!(
            TagContent::parse("color").unwrap(),
            TagContent::Open(StyleTag::Color(ColorName::Default))
        );
        // A bare `=` leaves an empty argument, same as no argument.
        assert_eq!(
            TagContent::parse("color=").unwrap(),
            TagContent::Open(StyleTag::Color(ColorName::Default))
        );
    }

    #[test]
    fn parse_close_all() {
        assert_eq!(TagContent::parse("/").unwrap(), TagContent::CloseAll);
    }

    #[test]
    fn parse_named_close() {
        assert_eq!(
            TagContent::parse("/color").unwrap(),
            TagContent::Close("color".to_string())
        );
    }

    #[test]
    fn parse_self_closing() {
        assert_eq!(
            TagContent::parse("u /").unwrap(),
            TagContent::SelfClosing(StyleTag::Underline)
        );
        assert_eq!(
            TagContent::parse("color=blue /").unwrap(),
            TagContent::SelfClosing(StyleTag::Color(ColorName::Blue))
        );
    }

    #[test]
    fn parse_cleanup() {
        assert_eq!(
            TagContent::parse("color //").unwrap(),
            TagContent::Cleanup("color".to_string())
        );
    }

    #[test]
    fn parse_cleanup_ignores_argument() {
        assert_eq!(
            TagContent::parse("color=red //").unwrap(),
            TagContent::Cleanup("color".to_string())
        );
    }

    #[test]
    fn parse_cleanup_skips_table_lookup() {
        // Any name is accepted here; whether it matches an open tag is
        // the renderer's business.
        assert_eq!(
            TagContent::parse("nope //").unwrap(),
            TagContent::Cleanup("nope".to_string())
        );
    }

    #[test]
    fn parse_unknown_tag() {
        assert_eq!(
            TagContent::parse("bold").unwrap_err(),
            ParseError::InvalidTag {
                tag: "bold".to_string()
            }
        );
    }

    #[test]
    fn parse_unknown_color() {
        assert_eq!(
            TagContent::parse("color=orange").unwrap_err(),
            ParseError::UnknownArgument {
                tag: "color".to_string(),
                argument: "orange".to_string()
            }
        );
    }

    #[test]
    fn parse_argument_on_argumentless_tag() {
        assert_eq!(
            TagContent::parse("b=loud").unwrap_err(),
            ParseError::UnknownArgument {
                tag: "b".to_string(),
                argument: "loud".to_string()
            }
        );
    }

    #[test]
    fn parse_empty_name() {
        assert_eq!(
            TagContent::parse("=red").unwrap_err(),
            ParseError::InvalidTag {
                tag: String::new()
            }
        );
    }

    #[test]
    fn display_lists_argument_in_parens() {
        assert_eq!(StyleTag::Bold.to_string(), "b");
        assert_eq!(StyleTag::Color(ColorName::Red).to_string(), "color(red)");
        assert_eq!(StyleTag::Color(ColorName::Default).to_string(), "color");
    }

    #[test]
    fn escape_sequences() {
        assert_eq!(StyleTag::Bold.escape(), "\x1b[1m");
        assert_eq!(StyleTag::Italic.escape(), "\x1b[3m");
        assert_eq!(StyleTag::Color(ColorName::Default).escape(), "\x1b[39m");
        assert_eq!(StyleTag::Color(ColorName::White).escape(), "\x1b[37m");
        assert_eq!(StyleTag::BgColor(ColorName::Black).escape(), "\x1b[40m");
        assert_eq!(StyleTag::BgColor(ColorName::Default).escape(), "\x1b[49m");
    }

    #[test]
    fn color_name_round_trip() {
        for name in ["black", "red", "green", "yellow", "blue", "magenta", "cyan", "white"] {
            assert_eq!(ColorName::parse(name).unwrap().as_str(), name);
        }
        assert_eq!(ColorName::parse("").unwrap(), ColorName::Default);
        assert!(ColorName::parse("orange").is_none());
    }
}
