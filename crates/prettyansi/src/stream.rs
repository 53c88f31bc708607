//! Writing text, styles, and colors to a sink.
//!
//! There are three ways of getting styles and colors into output:
//!
//!   * Write their [`Display`](std::fmt::Display) with `format!`, `write!`,
//!     or `println!`, interleaved with text.
//!   * [`emit`] one value into any [`Write`] and get the sink back.
//!   * Wrap the sink in a [`ColorStream`] and fluently chain text, styles,
//!     colors, and switch states.
//!
//! All three produce the same bytes in the same order.
//!
//! ```
//! # use prettyansi::{Background, ColorStream, Foreground, State, Style};
//! let mut stream = ColorStream::new(Vec::new());
//! stream
//!     .put(Foreground::Green)
//!     .put("Hello")
//!     .put(Background::Red)
//!     .put("world")
//!     .put(Style::Normal);
//! let bytes = stream.finish()?;
//! assert_eq!(bytes, b"\x1b[32mHello\x1b[41mworld\x1b[0m");
//! # Ok::<(), std::io::Error>(())
//! ```
use std::io::{Result, Write};

use crate::sgr::{Attr, Background, Color, Foreground, Style};
use crate::toggle::{set_state, State};

/// Write the value's ANSI escape sequence to the sink.
///
/// If styling is disabled, this function writes nothing. Either way, it
/// returns the sink, so that further writes can follow. Any error is the
/// sink's.
///
/// ```
/// # use std::io::Write;
/// # use prettyansi::{emit, Color, Foreground, Style};
/// let mut out = Vec::new();
/// emit(&mut out, Color::new(Style::Bold, Foreground::Red))?
///     .write_all(b"alert")?;
/// emit(&mut out, Style::Normal)?;
/// assert_eq!(out, b"\x1b[1;31malert\x1b[0m");
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn emit<W: Write + ?Sized>(sink: &mut W, value: impl Into<Attr>) -> Result<&mut W> {
    write!(sink, "{}", value.into())?;
    Ok(sink)
}

// ----------------------------------------------------------------------------------------------------------

/// One step in a chain of writes to a [`ColorStream`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Piece<'a> {
    /// Literal text, written as is.
    Text(&'a str),
    /// A style or color, written as escape sequence if styling is enabled.
    Attr(Attr),
    /// A new state for the styling switch, which writes nothing.
    Toggle(State),
}

impl<'a> From<&'a str> for Piece<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(value)
    }
}

impl<'a> From<&'a String> for Piece<'a> {
    fn from(value: &'a String) -> Self {
        Self::Text(value.as_str())
    }
}

impl From<Attr> for Piece<'_> {
    fn from(value: Attr) -> Self {
        Self::Attr(value)
    }
}

impl From<Style> for Piece<'_> {
    fn from(value: Style) -> Self {
        Self::Attr(value.into())
    }
}

impl From<Foreground> for Piece<'_> {
    fn from(value: Foreground) -> Self {
        Self::Attr(value.into())
    }
}

impl From<Background> for Piece<'_> {
    fn from(value: Background) -> Self {
        Self::Attr(value.into())
    }
}

impl From<Color> for Piece<'_> {
    fn from(value: Color) -> Self {
        Self::Attr(value.into())
    }
}

impl From<State> for Piece<'_> {
    fn from(value: State) -> Self {
        Self::Toggle(value)
    }
}

// ----------------------------------------------------------------------------------------------------------

/// A sink with a fluent interface for text, styles, and colors.
///
/// Every method returns the stream again, so that writes chain in the order
/// they are made. Since chained calls cannot propagate errors, the stream
/// holds on to the first error reported by the sink and skips all later
/// writes. [`ColorStream::error`] peeks at that error and
/// [`ColorStream::finish`] returns it. State changes still take effect after
/// an error, since they do not touch the sink.
///
/// The stream also implements [`Write`], which forwards directly to the sink
/// and reports errors as usual.
#[derive(Debug)]
pub struct ColorStream<W: Write> {
    inner: W,
    error: Option<std::io::Error>,
}

impl<W: Write> ColorStream<W> {
    /// Create a new stream writing to the given sink.
    pub fn new(inner: W) -> Self {
        Self { inner, error: None }
    }

    /// Write text, a style or color, or a new switch state.
    pub fn put<'a>(&mut self, piece: impl Into<Piece<'a>>) -> &mut Self {
        match piece.into() {
            Piece::Text(text) => self.attempt(|w| w.write_all(text.as_bytes())),
            Piece::Attr(attr) => self.attempt(|w| write!(w, "{}", attr)),
            Piece::Toggle(state) => {
                set_state(state);
                self
            }
        }
    }

    /// Write all pieces in order.
    pub fn put_all<'a, I>(&mut self, pieces: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<Piece<'a>>,
    {
        for piece in pieces {
            self.put(piece);
        }
        self
    }

    /// Write text as is.
    pub fn text(&mut self, text: impl AsRef<str>) -> &mut Self {
        self.attempt(|w| w.write_all(text.as_ref().as_bytes()))
    }

    /// Write a style or color.
    pub fn attr(&mut self, value: impl Into<Attr>) -> &mut Self {
        self.put(value.into())
    }

    /// Set the styling switch.
    pub fn toggle(&mut self, state: State) -> &mut Self {
        self.put(state)
    }

    /// Get the error that stopped this stream, if any.
    pub fn error(&self) -> Option<&std::io::Error> {
        self.error.as_ref()
    }

    /// Get a reference to the sink.
    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    /// Get a mutable reference to the sink.
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.inner
    }

    /// Flush the sink and return it, unless a write failed.
    pub fn finish(mut self) -> Result<W> {
        if let Some(error) = self.error.take() {
            return Err(error);
        }

        self.inner.flush()?;
        Ok(self.inner)
    }

    fn attempt(&mut self, op: impl FnOnce(&mut W) -> Result<()>) -> &mut Self {
        if self.error.is_none() {
            if let Err(error) = op(&mut self.inner) {
                tracing::debug!(%error, "color stream stopped after failed write");
                self.error = Some(error);
            }
        }
        self
    }
}

impl<W: Write> Write for ColorStream<W> {
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        self.inner.write(buf)
    }

    fn flush(&mut self) -> Result<()> {
        self.inner.flush()
    }
}
