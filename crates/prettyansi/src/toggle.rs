//! The process-wide switch for ANSI styling.
//!
//! All styles and colors consult a single switch before writing their escape
//! sequences. When the switch is [`State::Off`], they write nothing at all,
//! which turns styled output into plain text, e.g., for log files or pipes.
//! The switch starts out [`State::On`].
//!
//! Besides [`enable`], [`disable`], and [`set_state`], the switch can also be
//! flipped by *writing* a [`State`]. Its display changes the switch and
//! produces no output, so that changes can be interleaved with text:
//!
//! ```
//! # use prettyansi::{Foreground, State, Style};
//! let s = format!(
//!     "{}{}plain{}{}styled{}",
//!     State::Off, Foreground::Red, Style::Normal,
//!     State::On, Style::Normal,
//! );
//! assert_eq!(s, "plainstyled\x1b[0m");
//! ```
#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use std::sync::atomic::{AtomicBool, Ordering};

use crate::util::{Env, Environment};

// The one and only switch. Sequentially consistent loads and stores make a
// change visible to every thread that is ordered after it.
static ENABLED: AtomicBool = AtomicBool::new(true);

/// The state of the styling switch.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, module = "prettyansi.color")
)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum State {
    /// Styles and colors are ignored.
    Off = 0,
    /// Styles and colors are written as ANSI escape sequences.
    #[default]
    On = 1,
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl State {
    /// Determine whether this state is on.
    #[inline]
    pub const fn is_on(&self) -> bool {
        matches!(self, Self::On)
    }

    /// Determine whether this state is off.
    #[inline]
    pub const fn is_off(&self) -> bool {
        matches!(self, Self::Off)
    }

    /// Determine the state suggested by environment variables. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn from_environment() -> Self {
        state_from_environment(&Env::default())
    }

    /// Get a debug representation. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __repr__(&self) -> String {
        format!("{:?}", self)
    }
}

#[cfg(not(feature = "pyffi"))]
impl State {
    /// Determine the state suggested by environment variables.
    ///
    /// [NO_COLOR](https://no-color.org) turns styling off and
    /// [FORCE_COLOR](https://force-color.org) turns it on, as long as they
    /// have non-empty values. Otherwise, a `dumb` terminal turns styling off.
    /// In all other cases, styling stays on. This method does not change the
    /// switch; pass the result to [`set_state`] for that.
    pub fn from_environment() -> Self {
        state_from_environment(&Env::default())
    }
}

impl From<bool> for State {
    fn from(value: bool) -> Self {
        if value {
            Self::On
        } else {
            Self::Off
        }
    }
}

impl From<State> for bool {
    fn from(value: State) -> Self {
        value.is_on()
    }
}

impl std::fmt::Display for State {
    /// Set the switch to this state. Writes nothing.
    fn fmt(&self, _: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        set_state(*self);
        Ok(())
    }
}

// ----------------------------------------------------------------------------------------------------------

/// Turn styling on.
#[cfg_attr(feature = "pyffi", pyfunction)]
#[inline]
pub fn enable() {
    set_state(State::On);
}

/// Turn styling off.
#[cfg_attr(feature = "pyffi", pyfunction)]
#[inline]
pub fn disable() {
    set_state(State::Off);
}

/// Get the current state of the switch.
#[cfg_attr(feature = "pyffi", pyfunction)]
#[inline]
pub fn is_enabled() -> State {
    ENABLED.load(Ordering::SeqCst).into()
}

/// Set the switch to the given state.
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn set_state(state: State) {
    let previous = ENABLED.swap(state.is_on(), Ordering::SeqCst);
    if previous != state.is_on() {
        tracing::debug!(from = ?State::from(previous), to = ?state, "toggled ANSI styling");
    }
}

pub(crate) fn state_from_environment(env: &impl Environment) -> State {
    let (state, reason) = if env.is_non_empty("NO_COLOR") {
        (State::Off, "NO_COLOR")
    } else if env.is_non_empty("FORCE_COLOR") {
        (State::On, "FORCE_COLOR")
    } else if env.has_value("TERM", "dumb") {
        (State::Off, "TERM")
    } else {
        (State::On, "default")
    };

    tracing::trace!(?state, reason, "determined styling state from environment");
    state
}

/// Serialize tests that touch the switch.
#[cfg(test)]
pub(crate) fn test_lock() -> std::sync::MutexGuard<'static, ()> {
    static LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
    LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::util::FakeEnv;

    #[test]
    fn test_idempotence() {
        let _guard = test_lock();

        disable();
        assert_eq!(is_enabled(), State::Off);
        disable();
        assert_eq!(is_enabled(), State::Off);

        enable();
        assert_eq!(is_enabled(), State::On);
        enable();
        assert_eq!(is_enabled(), State::On);
    }

    #[test]
    fn test_display_flips_switch() {
        let _guard = test_lock();
        enable();

        assert_eq!(format!("<{}>", State::Off), "<>");
        assert_eq!(is_enabled(), State::Off);
        assert_eq!(State::Off.to_string(), "");
        assert_eq!(format!("<{}>", State::On), "<>");
        assert_eq!(is_enabled(), State::On);
    }

    #[test]
    fn test_conversions() {
        assert_eq!(State::from(true), State::On);
        assert_eq!(State::from(false), State::Off);
        assert!(bool::from(State::On));
        assert!(!bool::from(State::Off));
        assert!(State::On.is_on() && !State::On.is_off());
        assert!(State::Off.is_off() && !State::Off.is_on());
        assert_eq!(State::default(), State::On);
        assert_eq!(State::Off as u8, 0);
        assert_eq!(State::On as u8, 1);
    }

    #[test]
    fn test_visible_across_threads() {
        let _guard = test_lock();

        std::thread::scope(|scope| {
            for index in 0..8 {
                scope.spawn(move || set_state(State::from(index % 2 == 0)));
            }
        });

        std::thread::spawn(disable).join().unwrap();
        assert_eq!(is_enabled(), State::Off);
        let seen = std::thread::spawn(is_enabled).join().unwrap();
        assert_eq!(seen, State::Off);

        enable();
    }

    #[test]
    fn test_state_from_environment() {
        let env = &mut FakeEnv::new();
        assert_eq!(state_from_environment(env), State::On);
        env.set("TERM", "dumb");
        assert_eq!(state_from_environment(env), State::Off);
        env.set("FORCE_COLOR", "");
        assert_eq!(state_from_environment(env), State::Off);
        env.set("FORCE_COLOR", "1");
        assert_eq!(state_from_environment(env), State::On);
        env.set("NO_COLOR", "");
        assert_eq!(state_from_environment(env), State::On);
        env.set("NO_COLOR", "1");
        assert_eq!(state_from_environment(env), State::Off);
    }
}
