//! Template types for typed variable injection.

use std::marker::PhantomData;

/// Trait for template variable sets
pub trait TemplateVars {
    /// Substitute this set's placeholders in `content`.
    fn apply(&self, content: &str) -> String;
}

/// Template with typed variable injection.
///
/// The variable type is carried as a marker so a template can only be
/// rendered with the placeholders it was written for.
#[derive(Debug, Clone, Copy)]
pub struct Template<V> {
    content: &'static str,
    _marker: PhantomData<V>,
}

impl<V> Template<V> {
    pub const fn new(content: &'static str) -> Self {
        Self {
            content,
            _marker: PhantomData,
        }
    }

    pub const fn content(&self) -> &'static str {
        self.content
    }
}

impl<V: TemplateVars> Template<V> {
    pub fn render(&self, vars: &V) -> String {
        vars.apply(self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Greeting<'a> {
        name: &'a str,
    }

    impl TemplateVars for Greeting<'_> {
        fn apply(&self, content: &str) -> String {
            content.replace("__NAME__", self.name)
        }
    }

    #[test]
    fn test_render_substitutes_placeholders() {
        const HELLO: Template<Greeting<'static>> = Template::new("<p>Hello __NAME__</p>");
        assert_eq!(HELLO.render(&Greeting { name: "Thunder" }), "<p>Hello Thunder</p>");
        assert_eq!(HELLO.content(), "<p>Hello __NAME__</p>");
    }
}
