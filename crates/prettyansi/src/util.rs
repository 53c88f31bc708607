use std::ffi::OsString;

/// Read-only access to environment variables.
///
/// Only [`Environment::lookup`] needs implementing. Going through a trait
/// instead of [`std::env`] lets tests substitute their own bindings without
/// mutating the process environment, which other threads may be reading.
pub(crate) trait Environment {
    /// Look up the variable's raw value.
    fn lookup(&self, key: &str) -> Option<OsString>;

    /// Determine whether the variable is set to a non-empty value.
    fn is_non_empty(&self, key: &str) -> bool {
        self.lookup(key).is_some_and(|value| !value.is_empty())
    }

    /// Determine whether the variable is set to exactly the given value.
    fn has_value(&self, key: &str, expected: &str) -> bool {
        self.lookup(key).is_some_and(|value| value == expected)
    }
}

/// The process environment.
#[derive(Debug, Default)]
pub(crate) struct Env;

impl Environment for Env {
    fn lookup(&self, key: &str) -> Option<OsString> {
        std::env::var_os(key)
    }
}

#[cfg(test)]
mod test {
    use super::Environment;
    use std::collections::BTreeMap;
    use std::ffi::OsString;

    /// An environment backed by an in-memory map.
    #[derive(Debug, Default)]
    pub(crate) struct FakeEnv {
        vars: BTreeMap<String, OsString>,
    }

    impl FakeEnv {
        pub(crate) fn new() -> Self {
            Self::default()
        }

        pub(crate) fn set(&mut self, key: &str, value: &str) -> &mut Self {
            self.vars.insert(key.to_owned(), value.into());
            self
        }
    }

    impl Environment for FakeEnv {
        fn lookup(&self, key: &str) -> Option<OsString> {
            self.vars.get(key).cloned()
        }
    }

    #[test]
    fn test_fake_env() {
        let env = &mut FakeEnv::new();
        assert!(!env.is_non_empty("TERM"));
        env.set("TERM", "");
        assert!(!env.is_non_empty("TERM"));
        assert!(env.has_value("TERM", ""));
        env.set("TERM", "dumb");
        assert!(env.is_non_empty("TERM"));
        assert!(env.has_value("TERM", "dumb"));
        assert!(!env.has_value("TERM", "xterm"));
    }
}

#[cfg(test)]
pub(crate) use test::FakeEnv;
