//! HTML Tag Builder
//!
//! Builds element strings from a tag name, an ordered attribute list and
//! optional content. Values are quoted with single quotes unless they contain
//! one, in which case double quotes are used; callers escape content and
//! attribute text themselves.

/// Ordered attribute list; `None` or empty values render as bare names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attrs(Vec<(String, Option<String>)>);

impl Attrs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, value: impl Into<String>) -> Self {
        self.0.push((name.to_string(), Some(value.into())));
        self
    }

    /// Attribute only when `value` is present and non-empty.
    pub fn with_opt(self, name: &str, value: Option<impl Into<String>>) -> Self {
        match value.map(Into::into).filter(|v: &String| !v.is_empty()) {
            Some(v) => self.with(name, v),
            None => self,
        }
    }

    /// Bare boolean attribute such as `checked`.
    pub fn flag(mut self, name: &str) -> Self {
        self.0.push((name.to_string(), None));
        self
    }

    pub fn flag_if(self, name: &str, on: bool) -> Self {
        if on {
            self.flag(name)
        } else {
            self
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn extend(mut self, other: Attrs) -> Self {
        self.0.extend(other.0);
        self
    }

    fn write_to(&self, out: &mut String) {
        for (name, value) in &self.0 {
            out.push(' ');
            out.push_str(name);
            match value.as_deref() {
                Some(v) if !v.is_empty() => {
                    if v.contains('\'') {
                        out.push_str("=\"");
                        out.push_str(&v.replace('"', "&quot;"));
                        out.push('"');
                    } else {
                        out.push_str("='");
                        out.push_str(v);
                        out.push('\'');
                    }
                }
                _ => {}
            }
        }
    }
}

/// Build `<name attrs>content</name>`, or `<name attrs/>` when `close_tag` is false.
pub fn tag(name: &str, attrs: &Attrs, content: Option<&str>, close_tag: bool) -> String {
    let mut ret = String::with_capacity(name.len() * 2 + content.map_or(0, str::len) + 16);
    ret.push('<');
    ret.push_str(name);
    attrs.write_to(&mut ret);

    if close_tag {
        ret.push('>');
        ret.push_str(content.unwrap_or_default());
        ret.push_str("</");
        ret.push_str(name);
        ret.push('>');
    } else {
        ret.push_str("/>");
    }

    ret
}

pub fn div(attrs: &Attrs, content: &str) -> String {
    tag("div", attrs, Some(content), true)
}

pub fn span(attrs: &Attrs, content: &str) -> String {
    tag("span", attrs, Some(content), true)
}

pub fn a(attrs: &Attrs, content: &str) -> String {
    tag("a", attrs, Some(content), true)
}

pub fn button(attrs: &Attrs, content: &str) -> String {
    tag("button", attrs, Some(content), true)
}

pub fn img(attrs: &Attrs) -> String {
    tag("img", attrs, None, false)
}

pub fn input(attrs: &Attrs) -> String {
    tag("input", attrs, None, false)
}

pub fn checkbox(attrs: Attrs) -> String {
    input(&Attrs::new().with("type", "checkbox").extend(attrs))
}

pub fn textarea(attrs: &Attrs) -> String {
    tag("textarea", attrs, None, true)
}
