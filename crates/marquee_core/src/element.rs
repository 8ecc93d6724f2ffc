//! Element references and lookup
//!
//! Marquee addresses page elements by string id, the way the host's
//! element registry exposes them. Lookup failures are expected for pages
//! that omit optional blocks, so every query returns `Option` and callers
//! degrade to a no-op.

use serde::{Deserialize, Serialize};

use crate::geometry::Rect;

/// A reference to a page element by id
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementRef(String);

impl ElementRef {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn id(&self) -> &str {
        &self.0
    }

    /// Derive an indexed child reference (`"section"` -> `"section-2"`)
    pub fn indexed(&self, index: usize) -> Self {
        Self(format!("{}-{}", self.0, index))
    }

    /// Derive a named child reference (`"section-2"` -> `"section-2-title"`)
    pub fn suffixed(&self, suffix: &str) -> Self {
        Self(format!("{}-{}", self.0, suffix))
    }
}

impl From<&str> for ElementRef {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ElementRef {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ElementRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lookup of element geometry by reference
///
/// Implemented by the host over its element registry. A missing element is
/// not an error: per-element features simply don't play.
pub trait ElementQuery {
    /// Document-space bounds of the element, if it exists
    fn bounds(&self, element: &ElementRef) -> Option<Rect>;

    /// Whether the element exists at all
    fn exists(&self, element: &ElementRef) -> bool {
        self.bounds(element).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedQuery;

    impl ElementQuery for FixedQuery {
        fn bounds(&self, element: &ElementRef) -> Option<Rect> {
            (element.id() == "hero").then(|| Rect::new(0.0, 0.0, 800.0, 600.0))
        }
    }

    #[test]
    fn test_indexed_ref() {
        let base = ElementRef::new("section");
        assert_eq!(base.indexed(3).id(), "section-3");
    }

    #[test]
    fn test_query_missing_is_none() {
        let q = FixedQuery;
        assert!(q.exists(&"hero".into()));
        assert!(!q.exists(&"footer".into()));
        assert!(q.bounds(&"footer".into()).is_none());
    }
}
