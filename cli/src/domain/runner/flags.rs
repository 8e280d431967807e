//! Ordered CLI tokens from optional configuration fields.
//!
//! `None` never renders. `Some` always renders, even for zero values, so the
//! remote tool sees exactly what the operator declared.

/// Accumulates CLI tokens in call order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlagBuilder {
    args: Vec<String>,
}

/// `"url"` and `"--url"` both name the `--url` flag.
fn flag_name(name: &str) -> String {
    if name.starts_with("--") {
        name.to_string()
    } else {
        format!("--{name}")
    }
}

impl FlagBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit `--name value`.
    pub fn append(&mut self, name: &str, value: &str) -> &mut Self {
        self.args.push(flag_name(name));
        self.args.push(value.to_string());
        self
    }

    /// Emit `--name value` when `value` is present.
    pub fn append_p(&mut self, name: &str, value: Option<&str>) -> &mut Self {
        if let Some(value) = value {
            self.append(name, value);
        }
        self
    }

    /// Emit `--name <decimal>` when `value` is present.
    pub fn append_int_p(&mut self, name: &str, value: Option<i64>) -> &mut Self {
        if let Some(value) = value {
            self.append(name, &value.to_string());
        }
        self
    }

    /// Emit the bare `flag` only for `Some(true)`.
    ///
    /// There is no `--flag=false` form: `Some(false)` and `None` both render
    /// nothing.
    pub fn append_bool_p(&mut self, flag: &str, value: Option<bool>) -> &mut Self {
        if value == Some(true) {
            self.args.push(flag_name(flag));
        }
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    /// Tokens in call order.
    #[must_use]
    pub fn to_args(&self) -> Vec<String> {
        self.args.clone()
    }

    #[must_use]
    pub fn into_args(self) -> Vec<String> {
        self.args
    }
}
