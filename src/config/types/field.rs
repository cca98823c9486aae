//! Config field path used to point diagnostics at the offending key.

use owo_colors::OwoColorize;
use std::borrow::Cow;
use std::fmt;

/// A dotted path into the configuration, e.g. `site.i18n.locales`.
///
/// Static paths are declared as constants next to their section; paths into
/// arrays are derived at validation time with [`FieldPath::index`].
///
/// # Example
///
/// ```ignore
/// const LINKS: FieldPath = FieldPath::new("theme.footer.links");
/// diag.error(LINKS.index(0).child("title"), "must not be empty");
/// // -> theme.footer.links[0].title
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath(Cow<'static, str>);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(Cow::Borrowed(path))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Top-level key: `site` for `site.i18n.locales`.
    pub fn section(&self) -> &str {
        self.0.split(['.', '[']).next().unwrap_or_default()
    }

    /// Path to the `i`th element of this array field.
    pub fn index(&self, i: usize) -> Self {
        Self(Cow::Owned(format!("{}[{i}]", self.0)))
    }

    /// Path to a key nested below this field.
    pub fn child(&self, key: &str) -> Self {
        Self(Cow::Owned(format!("{}.{key}", self.0)))
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_and_child() {
        const LINKS: FieldPath = FieldPath::new("theme.footer.links");
        let path = LINKS.index(2).child("items").index(0).child("to");
        assert_eq!(path.as_str(), "theme.footer.links[2].items[0].to");
        assert_eq!(path.section(), "theme");
        assert_eq!(FieldPath::new("landing").section(), "landing");
    }
}
