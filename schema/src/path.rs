use std::fmt;

/// Dot-joined chain of field names from the schema root down to one field.
///
/// A path may hang off a named dynamic prefix instead of the schema root. The
/// prefix stands for a value only known at runtime, such as the path of one
/// entry inside an array of objects.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct FieldPath {
    prefix:   Option<String>,
    segments: Vec<String>,
}

impl FieldPath {
    /// The empty path at the schema root.
    pub fn root() -> Self {
        FieldPath::default()
    }

    /// An empty path under the dynamic prefix `name`.
    pub fn under(name: impl Into<String>) -> Self {
        FieldPath {
            prefix:   Some(name.into()),
            segments: Vec::new(),
        }
    }

    pub fn child(&self, name: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(name.to_string());
        FieldPath {
            prefix: self.prefix.clone(),
            segments,
        }
    }

    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.prefix.is_none() && self.segments.is_empty()
    }

    /// The static part of the path, without the prefix.
    pub fn dotted(&self) -> String {
        self.segments.join(".")
    }

    /// Last segment, i.e. the field's own name.
    pub fn name(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// Depth below the root or prefix.
    pub fn depth(&self) -> usize {
        self.segments.len()
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.prefix, self.segments.is_empty()) {
            (Some(prefix), true)  => write!(f, "{}", prefix),
            (Some(prefix), false) => write!(f, "{}.{}", prefix, self.dotted()),
            (None, _)             => write!(f, "{}", self.dotted()),
        }
    }
}
