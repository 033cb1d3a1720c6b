//! The rendering engine: a single pass over the input, with a stack of
//! open tags driving what each close has to re-apply.

use crate::error::ParseError;
use crate::tag::{RESET, StyleTag, TagContent};

/// Render bracket-tag markup to text interleaved with escape sequences.
///
/// The input is scanned left to right once. Tags apply immediately;
/// closing one emits a full reset and replays the styles that are still
/// open, oldest first, since terminals have no way to switch a single
/// attribute off.
///
/// # Examples
///
/// ```
/// let rendered = markup::render("[color=red]hi[/color]").unwrap();
/// assert_eq!(rendered, "\x1b[31mhi\x1b[0m");
/// ```
pub fn render(input: &str) -> Result<String, ParseError> {
    Renderer::new().run(input)
}

/// Like [`render`], but a failure comes back as the error's rendered
/// message instead of the structured error.
///
/// # Examples
///
/// ```
/// assert_eq!(markup::try_render("plain").unwrap(), "plain");
///
/// let message = markup::try_render("[oops]").unwrap_err();
/// assert!(message.starts_with("\x1b[33mWarning\x1b[0m"));
/// ```
pub fn try_render(input: &str) -> Result<String, String> {
    render(input).map_err(|err| err.rendered())
}

/// Per-call scan state. Nothing survives a call to [`render`].
struct Renderer {
    stack: Vec<StyleTag>,
    out: String,
    tag: String,
    in_tag: bool,
    escaped: bool,
}

impl Renderer {
    fn new() -> Self {
        Self {
            stack: Vec::new(),
            out: String::new(),
            tag: String::new(),
            in_tag: false,
            escaped: false,
        }
    }

    fn run(mut self, input: &str) -> Result<String, ParseError> {
        for c in input.chars() {
            self.step(c)?;
        }
        self.finish()
    }

    fn step(&mut self, c: char) -> Result<(), ParseError> {
        match c {
            '\\' => {
                if self.escaped {
                    self.out.push('\\');
                    self.escaped = false;
                } else {
                    self.escaped = true;
                }
            }
            '[' => {
                if self.escaped {
                    self.out.push('[');
                    self.escaped = false;
                } else {
                    self.in_tag = true;
                }
            }
            ']' => {
                if self.escaped {
                    self.out.push(']');
                    self.escaped = false;
                } else if self.tag.is_empty() {
                    return Err(ParseError::UnopenedClose);
                } else {
                    let body = std::mem::take(&mut self.tag);
                    self.in_tag = false;
                    self.resolve(&body)?;
                }
            }
            _ => {
                // Only `[`, `]` and `\` are escapable; a stray escape
                // before anything else is dropped.
                self.escaped = false;
                if self.in_tag {
                    self.tag.push(c);
                } else {
                    self.out.push(c);
                }
            }
        }
        Ok(())
    }

    fn resolve(&mut self, body: &str) -> Result<(), ParseError> {
        match TagContent::parse(body)? {
            TagContent::Open(tag) => {
                self.out.push_str(tag.escape());
                self.stack.push(tag);
            }
            TagContent::SelfClosing(tag) => {
                self.out.push_str(tag.escape());
            }
            TagContent::CloseAll => {
                self.stack.clear();
                self.out.push_str(RESET);
            }
            TagContent::Close(name) => self.close(&name)?,
            TagContent::Cleanup(name) => self.clean_up(&name)?,
        }
        Ok(())
    }

    /// Close the innermost tag, reset everything, then replay the styles
    /// still open, oldest to newest.
    fn close(&mut self, name: &str) -> Result<(), ParseError> {
        let top = self.stack.last().ok_or_else(|| ParseError::NoOpenTag {
            tag: name.to_string(),
        })?;
        if top.name() != name {
            return Err(ParseError::MismatchedClose {
                tag: name.to_string(),
                expected: top.name().to_string(),
            });
        }
        self.stack.pop();
        self.out.push_str(RESET);
        for open in &self.stack {
            self.out.push_str(open.escape());
        }
        Ok(())
    }

    /// Drop the newest open tag with this name, wherever it sits in the
    /// stack. The rest keep their order; nothing is emitted.
    fn clean_up(&mut self, name: &str) -> Result<(), ParseError> {
        let index = self
            .stack
            .iter()
            .rposition(|open| open.name() == name)
            .ok_or_else(|| ParseError::NothingToCleanUp {
                tag: name.to_string(),
            })?;
        self.stack.remove(index);
        Ok(())
    }

    fn finish(self) -> Result<String, ParseError> {
        if !self.stack.is_empty() {
            let open = self.stack.iter().rev().map(|tag| tag.to_string()).collect();
            return Err(ParseError::UnclosedTags { open });
        }
        Ok(self.out)
    }
}
