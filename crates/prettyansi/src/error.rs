//! Utility module with prettyansi's errors.
//!
//! Writing styles and colors cannot fail, short of the underlying sink
//! failing. The errors here only arise when converting integer codes or names
//! back into styles and colors.

#[cfg(feature = "pyffi")]
use pyo3::{exceptions::PyValueError, prelude::*};

use crate::{Color, Foreground, Style};

/// An unknown SGR code.
///
/// This error indicates an integer that is not the code of any variant of
/// the targeted enumeration. The valid codes are:
///
///   * `0..=9` for [`Style`](crate::Style);
///   * `30..=38` for [`Foreground`](crate::Foreground);
///   * `1` and `40..=48` for [`Background`](crate::Background).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnknownCodeError {
    pub kind: &'static str,
    pub value: u8,
}

impl UnknownCodeError {
    /// Create a new unknown code error.
    pub const fn new(kind: &'static str, value: u8) -> Self {
        Self { kind, value }
    }
}

impl std::fmt::Display for UnknownCodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} is not a valid {} code", self.value, self.kind)
    }
}

impl std::error::Error for UnknownCodeError {}

#[cfg(feature = "pyffi")]
impl From<UnknownCodeError> for PyErr {
    fn from(value: UnknownCodeError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}

// ----------------------------------------------------------------------------------------------------------

/// An unknown style or color name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownNameError {
    pub kind: &'static str,
    pub name: String,
}

impl UnknownNameError {
    /// Create a new unknown name error.
    pub fn new(kind: &'static str, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
        }
    }
}

impl std::fmt::Display for UnknownNameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\"{}\" is not a valid {} name", self.name, self.kind)
    }
}

impl std::error::Error for UnknownNameError {}

#[cfg(feature = "pyffi")]
impl From<UnknownNameError> for PyErr {
    fn from(value: UnknownNameError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}

// ----------------------------------------------------------------------------------------------------------

/// Write the error, including any sources, to the given sink.
///
/// The `ERROR:` label is highlighted in bold red, if styling is enabled.
pub fn write_report<W, E>(out: &mut W, error: &E) -> std::io::Result<()>
where
    W: std::io::Write + ?Sized,
    E: std::error::Error,
{
    writeln!(
        out,
        "{}ERROR:{} {}",
        Color::new(Style::Bold, Foreground::Red),
        Style::Normal,
        error
    )?;

    let mut error: &dyn std::error::Error = error;
    while let Some(inner) = error.source() {
        writeln!(out, "    {}", inner)?;
        error = inner;
    }

    Ok(())
}

/// Report the error, including any sources, on standard error.
pub fn report<E: std::error::Error>(error: &E) {
    let stderr = std::io::stderr();
    // Nowhere left to report a failure to report.
    let _ = write_report(&mut stderr.lock(), error);
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::toggle::{disable, enable, test_lock};

    #[derive(Debug)]
    struct Wrapped(UnknownCodeError);

    impl std::fmt::Display for Wrapped {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str("could not restore style")
        }
    }

    impl std::error::Error for Wrapped {
        fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
            Some(&self.0)
        }
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            UnknownCodeError::new("style", 42).to_string(),
            "42 is not a valid style code"
        );
        assert_eq!(
            UnknownNameError::new("foreground", "mauve").to_string(),
            "\"mauve\" is not a valid foreground name"
        );
    }

    #[test]
    fn test_write_report() -> std::io::Result<()> {
        let _guard = test_lock();
        let error = Wrapped(UnknownCodeError::new("background", 2));

        enable();
        let mut out = Vec::new();
        write_report(&mut out, &error)?;
        assert_eq!(
            String::from_utf8_lossy(&out),
            "\x1b[1;31mERROR:\x1b[0m could not restore style\n    2 is not a valid background code\n"
        );

        disable();
        let mut out = Vec::new();
        write_report(&mut out, &error)?;
        enable();
        assert_eq!(
            String::from_utf8_lossy(&out),
            "ERROR: could not restore style\n    2 is not a valid background code\n"
        );
        Ok(())
    }
}
