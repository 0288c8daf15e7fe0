//! Anything a walker can match.

use std::borrow::Cow;

use textwalker_compiler::{CompileOptions, Result, compile_with};
use textwalker_core::Pattern;

/// A pattern source: either pattern text compiled on demand, or an already
/// compiled [`Pattern`].
pub trait AsPattern {
    fn as_pattern(&self, options: &CompileOptions) -> Result<Cow<'_, Pattern>>;
}

impl AsPattern for str {
    fn as_pattern(&self, options: &CompileOptions) -> Result<Cow<'_, Pattern>> {
        compile_with(self, options).map(Cow::Owned)
    }
}

impl AsPattern for String {
    fn as_pattern(&self, options: &CompileOptions) -> Result<Cow<'_, Pattern>> {
        self.as_str().as_pattern(options)
    }
}

impl AsPattern for Pattern {
    fn as_pattern(&self, _options: &CompileOptions) -> Result<Cow<'_, Pattern>> {
        Ok(Cow::Borrowed(self))
    }
}

impl<T: AsPattern + ?Sized> AsPattern for &T {
    fn as_pattern(&self, options: &CompileOptions) -> Result<Cow<'_, Pattern>> {
        (**self).as_pattern(options)
    }
}
