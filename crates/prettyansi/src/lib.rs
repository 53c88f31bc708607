//! # Pretty 🌸 ANSI
//!
//! Prettyansi writes the ANSI escape sequences for terminal text styles,
//! foreground colors, and background colors. A single process-wide switch
//! turns all of them off at once, so that the same code produces plain text
//! when writing to a log file or pipe.
//!
//!
//! ## 1. Overview
//!
//! Prettyansi's main abstractions are:
//!
//!   * [`Style`], [`Foreground`], and [`Background`] are **closed
//!     enumerations** whose discriminants are their select-graphic-rendition
//!     (SGR) codes.
//!   * [`Color`] **combines a style with a foreground color** and is written
//!     as one escape sequence.
//!   * The **styling switch** is controlled with [`enable`], [`disable`], and
//!     [`set_state`], and read with [`is_enabled`]. Writing a [`State`] also
//!     flips the switch, without producing any output.
//!   * [`emit`] and [`ColorStream`] write all of the above to an
//!     [`std::io::Write`], the latter through a **fluent interface**.
//!
//! Every style and color also implements [`Display`](std::fmt::Display),
//! which makes `format!` and `println!` the most direct way of using them.
//!
//!
//! ## 2. Example
//!
//! ```
//! # use prettyansi::{disable, enable, Background, Color, Foreground, Style};
//! let s = format!("{}Hello{}world", Foreground::Green, Style::Normal);
//! assert_eq!(s, "\x1b[32mHello\x1b[0mworld");
//!
//! let s = format!(
//!     "{}Hello{}world{}",
//!     Color::new(Style::Bold, Foreground::Red),
//!     Background::Red,
//!     Style::Normal,
//! );
//! assert_eq!(s, "\x1b[1;31mHello\x1b[41mworld\x1b[0m");
//!
//! disable();
//! let s = format!("{}Hello{}world", Foreground::Green, Style::Normal);
//! assert_eq!(s, "Helloworld");
//! enable();
//! ```
//!
//! The switch starts out enabled. To follow the user's preferences instead,
//! apply [`State::from_environment`], which honors `NO_COLOR`, `FORCE_COLOR`,
//! and dumb terminals:
//!
//! ```
//! # use prettyansi::{set_state, State};
//! set_state(State::from_environment());
//! ```
//!
//!
//! ## 3. Optional Features
//!
//! Prettyansi supports one feature flag:
//!
//!   - **`pyffi`** controls prettyansi's Python integration through
//!     [PyO3](https://pyo3.rs/). This feature is disabled by default.
//!
//! Prettyansi logs changes to the styling switch with
//! [`tracing`](https://docs.rs/tracing) at the debug level. It never installs
//! a subscriber.
#![cfg_attr(
    feature = "pyffi",
    doc = "Items that are only available in Python are decorated with <i
    class=python-only>Python only!</i>."
)]

pub mod error;
mod sgr;
mod stream;
mod toggle;
mod util;

pub use sgr::{Attr, Background, Color, Foreground, Sgr, Style};
pub use stream::{emit, ColorStream, Piece};
pub use toggle::{disable, enable, is_enabled, set_state, State};

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

#[doc(hidden)]
#[cfg(feature = "pyffi")]
#[pymodule]
pub fn color(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(toggle::enable, m)?)?;
    m.add_function(wrap_pyfunction!(toggle::disable, m)?)?;
    m.add_function(wrap_pyfunction!(toggle::is_enabled, m)?)?;
    m.add_function(wrap_pyfunction!(toggle::set_state, m)?)?;

    m.add_class::<State>()?;
    m.add_class::<Style>()?;
    m.add_class::<Foreground>()?;
    m.add_class::<Background>()?;
    m.add_class::<Color>()?;

    Ok(())
}
