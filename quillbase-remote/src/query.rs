//! Pass-through list queries in the backend's wire form.

use std::fmt;

/// A list filter, rendered to the backend's textual query form, e.g.
/// `equal("status",["active"])`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// Matches documents whose attribute equals the given value.
    Equal { attribute: String, value: String },
    /// Sorts results by the attribute, descending.
    OrderDesc { attribute: String },
    /// Caps the number of returned documents.
    Limit(u64),
}

impl Query {
    pub fn equal(attribute: impl Into<String>, value: impl Into<String>) -> Self {
        Query::Equal {
            attribute: attribute.into(),
            value: value.into(),
        }
    }

    pub fn order_desc(attribute: impl Into<String>) -> Self {
        Query::OrderDesc {
            attribute: attribute.into(),
        }
    }

    pub const fn limit(count: u64) -> Self {
        Query::Limit(count)
    }

    /// Renders the wire form sent in the `queries[]` parameter.
    #[must_use]
    pub fn to_wire(&self) -> String {
        match self {
            Query::Equal { attribute, value } => {
                format!(r#"equal("{attribute}",["{value}"])"#)
            }
            Query::OrderDesc { attribute } => format!(r#"orderDesc("{attribute}")"#),
            Query::Limit(count) => format!("limit({count})"),
        }
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_wire())
    }
}
