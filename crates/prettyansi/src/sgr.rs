//! Text styles, foreground colors, and background colors.
//!
//! This module defines the three closed enumerations [`Style`],
//! [`Foreground`], and [`Background`], the composite [`Color`] combining a
//! style with a foreground color, and the tagged union [`Attr`] over all four.
//! Each variant's discriminant is its select-graphic-rendition (SGR) code,
//! which is fixed. Changing a code would change the bytes written to the
//! terminal.
//!
//! All of them implement [`Sgr`] as well as [`Display`](std::fmt::Display).
//! The display is the complete ANSI escape sequence, e.g., `ESC [ 1 m` for
//! [`Style::Bold`], but only if styling is [enabled](crate::is_enabled).
//! Otherwise, it is empty.
//!
//! ```
//! # use prettyansi::{Background, Color, Foreground, Style};
//! let bold_red = Color::new(Style::Bold, Foreground::Red);
//! assert_eq!(
//!     format!("{}Hello{} world{}", bold_red, Background::Cyan, Style::Normal),
//!     "\x1b[1;31mHello\x1b[46m world\x1b[0m"
//! );
//! ```
//!
//! Styles and colors convert from their codes with [`TryFrom<u8>`] and from
//! their names with [`FromStr`](std::str::FromStr). Names are matched ignoring
//! ASCII case.
//!
//! ```
//! # use prettyansi::{Background, Foreground, Style};
//! assert_eq!(Style::try_from(6), Ok(Style::RapidBlink));
//! assert_eq!("rblink".parse::<Style>(), Ok(Style::RapidBlink));
//! assert_eq!("Magenta".parse::<Foreground>(), Ok(Foreground::Magenta));
//! assert!(Background::try_from(39).is_err());
//! ```
#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::error::{UnknownCodeError, UnknownNameError};
use crate::toggle::is_enabled;

/// A value written as a select-graphic-rendition ANSI escape sequence.
///
/// [`Sgr::write_param`] writes only the parameters, without the leading `ESC
/// [` and the trailing `m`, and it does so independently of the styling
/// switch. The [`Display`](std::fmt::Display) implementation adds both, but
/// only if styling is enabled.
///
/// Like [`Display`](std::fmt::Display), the method takes a formatter, which
/// keeps the trait object-safe.
pub trait Sgr: std::fmt::Debug + std::fmt::Display {
    /// Write the SGR parameter(s).
    fn write_param(&self, out: &mut std::fmt::Formatter<'_>) -> std::fmt::Result;
}

/// A borrowed SGR is an SGR.
impl<S: Sgr + ?Sized> Sgr for &S {
    fn write_param(&self, out: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        (**self).write_param(out)
    }
}

/// A boxed SGR is an SGR.
impl<S: Sgr + ?Sized> Sgr for Box<S> {
    fn write_param(&self, out: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        (**self).write_param(out)
    }
}

macro_rules! implement_display {
    ($name:ident) => {
        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                if is_enabled().is_off() {
                    return Ok(());
                }

                f.write_str("\x1b[")?;
                self.write_param(f)?;
                f.write_str("m")
            }
        }
    };
}

macro_rules! define_sgr_enum {
    (
        $(#[$meta:meta])*
        $name:ident ($kind:literal) {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident = $code:literal, $label:literal $(| $alias:literal)*;
            )+
        }
    ) => {
        $(#[$meta])*
        #[cfg_attr(
            feature = "pyffi",
            pyclass(eq, eq_int, frozen, hash, module = "prettyansi.color")
        )]
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                $variant = $code,
            )+
        }

        impl $name {
            /// All variants in order of their codes.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];
        }

        #[cfg_attr(feature = "pyffi", pymethods)]
        impl $name {
            /// Look up the variant for the SGR code. <i
            /// class=python-only>Python only!</i>
            #[cfg(feature = "pyffi")]
            #[staticmethod]
            pub fn try_from_code(value: u8) -> Result<Self, UnknownCodeError> {
                Self::try_from(value)
            }

            /// Get the SGR code.
            #[inline]
            pub const fn code(&self) -> u8 {
                *self as u8
            }

            /// Get the name.
            pub const fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }

            /// Get the ANSI escape sequence, honoring the styling switch. <i
            /// class=python-only>Python only!</i>
            #[cfg(feature = "pyffi")]
            pub fn __str__(&self) -> String {
                self.to_string()
            }

            /// Get a debug representation. <i class=python-only>Python only!</i>
            #[cfg(feature = "pyffi")]
            pub fn __repr__(&self) -> String {
                format!("{:?}", self)
            }
        }

        impl TryFrom<u8> for $name {
            type Error = UnknownCodeError;

            fn try_from(value: u8) -> Result<Self, Self::Error> {
                match value {
                    $($code => Ok(Self::$variant),)+
                    _ => Err(UnknownCodeError::new($kind, value)),
                }
            }
        }

        impl From<$name> for u8 {
            fn from(value: $name) -> u8 {
                value.code()
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = UnknownNameError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $(
                    if s.eq_ignore_ascii_case($label) $(|| s.eq_ignore_ascii_case($alias))* {
                        return Ok(Self::$variant);
                    }
                )+
                Err(UnknownNameError::new($kind, s))
            }
        }

        impl Sgr for $name {
            #[inline]
            fn write_param(&self, out: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(out, "{}", self.code())
            }
        }

        implement_display!($name);
    };
}

// ----------------------------------------------------------------------------------------------------------

define_sgr_enum! {
    /// A text style.
    ///
    /// [`Style::Normal`] resets all attributes, including colors, and hence
    /// doubles as the way to end styled text.
    Style ("style") {
        /// Reset all attributes.
        #[default]
        Normal = 0, "normal";
        Bold = 1, "bold";
        /// Faint or decreased intensity.
        Dim = 2, "dim";
        Italic = 3, "italic";
        Underline = 4, "underline";
        /// Slow blinking.
        Blink = 5, "blink";
        /// Rapid blinking, which few terminals support.
        RapidBlink = 6, "rblink" | "rapid-blink";
        /// Swapped foreground and background colors.
        Reversed = 7, "reversed";
        /// Hidden text.
        Conceal = 8, "conceal" | "concealed";
        /// Stricken text.
        Crossed = 9, "crossed" | "crossed-out";
    }
}

define_sgr_enum! {
    /// A foreground color.
    ///
    /// The eight base colors have codes 30 through 37 and
    /// [`Foreground::Reset`] has code 38.
    Foreground ("foreground") {
        Black = 30, "black";
        Red = 31, "red";
        Green = 32, "green";
        Yellow = 33, "yellow";
        Blue = 34, "blue";
        Magenta = 35, "magenta";
        Cyan = 36, "cyan";
        Gray = 37, "gray" | "grey";
        #[default]
        Reset = 38, "reset";
    }
}

define_sgr_enum! {
    /// A background color.
    ///
    /// The eight base colors have codes 40 through 47 and
    /// [`Background::Reset`] has code 48. [`Background::Normal`] is the odd one
    /// out with code 1.
    Background ("background") {
        #[default]
        Normal = 1, "normal";
        Black = 40, "black";
        Red = 41, "red";
        Green = 42, "green";
        Yellow = 43, "yellow";
        Blue = 44, "blue";
        Magenta = 45, "magenta";
        Cyan = 46, "cyan";
        Gray = 47, "gray" | "grey";
        Reset = 48, "reset";
    }
}

// ----------------------------------------------------------------------------------------------------------

/// A text style combined with a foreground color.
///
/// A color is written as a single escape sequence with two parameters, e.g.,
/// `ESC [ 1 ; 31 m` for bold red. The default color combines
/// [`Style::Normal`] with [`Foreground::Reset`]. Since instances are
/// immutable, colors can be stashed in constants and arbitrarily reused.
///
/// ```
/// # use prettyansi::{Color, Foreground, Style};
/// const WARNING: Color = Color::new(Style::Bold, Foreground::Yellow);
///
/// assert_eq!(WARNING.style(), Style::Bold);
/// assert_eq!(WARNING.to_string(), "\x1b[1;33m");
/// assert_eq!(Color::default().to_string(), "\x1b[0;38m");
/// ```
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, frozen, hash, module = "prettyansi.color")
)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    style: Style,
    foreground: Foreground,
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl Color {
    /// Create a new color. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[new]
    #[pyo3(signature = (style = Style::Normal, foreground = Foreground::Reset))]
    pub fn py_new(style: Style, foreground: Foreground) -> Self {
        Self::new(style, foreground)
    }

    /// Get this color's style.
    #[inline]
    pub const fn style(&self) -> Style {
        self.style
    }

    /// Get this color's foreground color.
    #[inline]
    pub const fn foreground(&self) -> Foreground {
        self.foreground
    }

    /// Create a new color with the given style instead.
    pub const fn with_style(&self, style: Style) -> Self {
        Self {
            style,
            foreground: self.foreground,
        }
    }

    /// Create a new color with the given foreground color instead.
    pub const fn with_foreground(&self, foreground: Foreground) -> Self {
        Self {
            style: self.style,
            foreground,
        }
    }

    /// Get the ANSI escape sequence, honoring the styling switch. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __str__(&self) -> String {
        self.to_string()
    }

    /// Get a debug representation. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __repr__(&self) -> String {
        format!("{:?}", self)
    }
}

impl Color {
    /// Create a new color.
    #[inline]
    pub const fn new(style: Style, foreground: Foreground) -> Self {
        Self { style, foreground }
    }
}

impl From<Style> for Color {
    fn from(value: Style) -> Self {
        Self::default().with_style(value)
    }
}

impl From<Foreground> for Color {
    fn from(value: Foreground) -> Self {
        Self::default().with_foreground(value)
    }
}

impl From<(Style, Foreground)> for Color {
    fn from(value: (Style, Foreground)) -> Self {
        Self::new(value.0, value.1)
    }
}

impl Sgr for Color {
    fn write_param(&self, out: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(out, "{};{}", self.style.code(), self.foreground.code())
    }
}

implement_display!(Color);

// ----------------------------------------------------------------------------------------------------------

/// Any one of the four kinds of SGR values.
///
/// This closed union is the single point of dispatch for writing styles and
/// colors. Functions accepting `impl Into<Attr>` accept a [`Style`],
/// [`Foreground`], [`Background`], or [`Color`] and nothing else.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Attr {
    Style(Style),
    Foreground(Foreground),
    Background(Background),
    Color(Color),
}

impl From<Style> for Attr {
    fn from(value: Style) -> Self {
        Self::Style(value)
    }
}

impl From<Foreground> for Attr {
    fn from(value: Foreground) -> Self {
        Self::Foreground(value)
    }
}

impl From<Background> for Attr {
    fn from(value: Background) -> Self {
        Self::Background(value)
    }
}

impl From<Color> for Attr {
    fn from(value: Color) -> Self {
        Self::Color(value)
    }
}

impl Sgr for Attr {
    fn write_param(&self, out: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Style(style) => style.write_param(out),
            Self::Foreground(color) => color.write_param(out),
            Self::Background(color) => color.write_param(out),
            Self::Color(color) => color.write_param(out),
        }
    }
}

implement_display!(Attr);

// ----------------------------------------------------------------------------------------------------------
