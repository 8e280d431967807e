//! Insertion-ordered environment for a remote script.
//!
//! Rendering produces one `KEY=VALUE` assignment per entry with the value
//! shell-quoted, so `source`-ing the output (or [`EnvBuilder::parse`]-ing
//! it) reproduces the mapping exactly.

use std::borrow::Cow;
use std::fmt;
use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;

use crate::domain::error::EnvParseError;

/// POSIX shell variable names.
pub static ENV_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    // Safety: this is a compile-time constant pattern — cannot fail.
    #[allow(clippy::expect_used)]
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("valid regex")
});

/// Characters that never need quoting in a POSIX shell word.
const SHELL_SAFE: &str = "_@%+=:,./-";

/// Returns `true` if `name` can be used as a shell variable name.
#[must_use]
pub fn is_valid_name(name: &str) -> bool {
    ENV_NAME_RE.is_match(name)
}

/// Accumulates environment variables in insertion order.
///
/// Setting an existing key replaces its value but keeps its original
/// position, so the rendered order only depends on the first insertion of
/// each key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvBuilder {
    vars: IndexMap<String, String>,
}

impl EnvBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite `key`.
    ///
    /// # Panics
    ///
    /// Panics if `key` is not a valid shell variable name. Keys are
    /// constants chosen by each command, never user input.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        let key = key.into();
        assert!(is_valid_name(&key), "invalid variable name: {key:?}");
        self.vars.insert(key, value.into());
        self
    }

    /// Insert every pair of `entries`, in the iteration order of `entries`.
    pub fn set_map<I, K, V>(&mut self, entries: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (key, value) in entries {
            self.set(key, value);
        }
        self
    }

    /// Embed another builder's rendered output as the single value of `key`.
    pub fn set_env(&mut self, key: impl Into<String>, sub: &EnvBuilder) -> &mut Self {
        self.set(key, sub.to_string())
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Entries in render order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Raw mapping, for composition into outer builders or JSON output.
    #[must_use]
    pub fn as_map(&self) -> &IndexMap<String, String> {
        &self.vars
    }

    /// Re-read the output of [`fmt::Display`] back into a builder.
    ///
    /// Accepts exactly the quoting the renderer produces (bare words, single
    /// quotes, backslash escapes). Blank lines and `#` comment lines are
    /// skipped.
    ///
    /// # Errors
    ///
    /// Returns an error on a malformed name, a missing `=`, or an
    /// unterminated single quote.
    pub fn parse(rendered: &str) -> Result<Self, EnvParseError> {
        let mut env = Self::new();
        let mut chars = rendered.chars().peekable();
        let mut line = 1;

        while let Some(&first) = chars.peek() {
            if first == '\n' {
                chars.next();
                line += 1;
                continue;
            }
            if first == '#' {
                for c in chars.by_ref() {
                    if c == '\n' {
                        break;
                    }
                }
                line += 1;
                continue;
            }

            let start = line;
            let mut name = String::new();
            loop {
                match chars.next() {
                    Some('=') => break,
                    Some('\n') | None => return Err(EnvParseError::MissingEquals { line: start }),
                    Some(c) => name.push(c),
                }
            }
            if !is_valid_name(&name) {
                return Err(EnvParseError::InvalidName { line: start, name });
            }

            let mut value = String::new();
            loop {
                match chars.next() {
                    None => break,
                    Some('\n') => {
                        line += 1;
                        break;
                    }
                    Some('\'') => loop {
                        match chars.next() {
                            Some('\'') => break,
                            Some(c) => {
                                if c == '\n' {
                                    line += 1;
                                }
                                value.push(c);
                            }
                            None => return Err(EnvParseError::UnterminatedQuote { line: start }),
                        }
                    },
                    Some('\\') => {
                        if let Some(c) = chars.next() {
                            if c == '\n' {
                                line += 1;
                            }
                            value.push(c);
                        }
                    }
                    Some(c) => value.push(c),
                }
            }

            env.vars.insert(name, value);
        }

        Ok(env)
    }
}

impl fmt::Display for EnvBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, value) in self.iter() {
            writeln!(f, "{key}={}", shell_quote(value))?;
        }
        Ok(())
    }
}

fn shell_quote(value: &str) -> Cow<'_, str> {
    let safe = !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || SHELL_SAFE.contains(c));
    if safe {
        Cow::Borrowed(value)
    } else {
        Cow::Owned(format!("'{}'", value.replace('\'', r"'\''")))
    }
}
