//! Templates rendered into payload artifacts.
//!
//! A template is any renderer that writes text for a given data value.
//! Rendering is pure: no I/O beyond the `fmt::Write` sink it is handed.

use std::fmt;

/// Renders text from `D` into `out`.
pub trait Template<D: ?Sized> {
    /// # Errors
    ///
    /// Returns `fmt::Error` if the sink rejects a write.
    fn render(&self, data: &D, out: &mut dyn fmt::Write) -> fmt::Result;
}

impl<D: ?Sized, F> Template<D> for F
where
    F: Fn(&D, &mut dyn fmt::Write) -> fmt::Result,
{
    fn render(&self, data: &D, out: &mut dyn fmt::Write) -> fmt::Result {
        self(data, out)
    }
}
