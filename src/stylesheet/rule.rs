use std::fmt;

/// A single `property: value` declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleProperty {
    pub property: String,
    pub value: String,
}

impl StyleProperty {
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
        }
    }
}

/// A selector with its declarations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleRule {
    pub selector: String,
    pub properties: Vec<StyleProperty>,
}

impl StyleRule {
    /// A rule with exactly one declaration
    pub fn simple(
        selector: impl Into<String>,
        property: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            selector: selector.into(),
            properties: vec![StyleProperty::new(property, value)],
        }
    }
}

impl fmt::Display for StyleRule {
    /// Renders as `selector { prop: value; prop: value; }` plus a newline.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {{ ", self.selector)?;
        for prop in &self.properties {
            write!(f, "{}: {}; ", prop.property, prop.value)?;
        }
        writeln!(f, "}}")
    }
}

/// One rule per value: `{prefix}-{value} { {property}: {value}; }`
pub fn mapped_rules<S: AsRef<str>>(prefix: &str, property: &str, values: &[S]) -> Vec<StyleRule> {
    values
        .iter()
        .map(|value| {
            let value = value.as_ref();
            StyleRule::simple(format!("{prefix}-{value}"), property, value)
        })
        .collect()
}

/// An ordered list of rules rendered inside a `<style>` element
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stylesheet {
    rules: Vec<StyleRule>,
}

impl Stylesheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, rule: StyleRule) {
        self.rules.push(rule);
    }

    pub fn rules(&self) -> &[StyleRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Render the full document
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl Extend<StyleRule> for Stylesheet {
    fn extend<I: IntoIterator<Item = StyleRule>>(&mut self, iter: I) {
        self.rules.extend(iter);
    }
}

impl fmt::Display for Stylesheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "<style>")?;
        for rule in &self.rules {
            write!(f, "{rule}")?;
        }
        writeln!(f, "</style>")
    }
}
