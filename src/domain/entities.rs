//! Domain Entities - Core business objects
//!
//! These entities represent the core concepts of the page-cache guard.
//! They have no external dependencies and contain only business logic.

use crate::domain::ports::LayoutUpdate;

/// Layout handles attached to the page being rendered.
///
/// Handles keep their insertion order. Appending never de-duplicates,
/// so the same handle may appear more than once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageLayout {
    handles: Vec<String>,
}

impl PageLayout {
    /// Create a layout from an ordered list of handles.
    pub fn new<I, S>(handles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            handles: handles.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of times `handle` appears in the layout.
    pub fn count(&self, handle: &str) -> usize {
        self.handles.iter().filter(|h| *h == handle).count()
    }

    pub fn into_handles(self) -> Vec<String> {
        self.handles
    }
}

impl LayoutUpdate for PageLayout {
    fn handles(&self) -> &[String] {
        &self.handles
    }

    fn add_handle(&mut self, handle: &str) {
        self.handles.push(handle.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_keeps_order() {
        let layout = PageLayout::new(["default", "catalog_category_view"]);
        assert_eq!(layout.handles(), ["default", "catalog_category_view"]);
    }

    #[test]
    fn test_has_handle() {
        let layout = PageLayout::new(["default", "cms_index_index"]);
        assert!(layout.has_handle("default"));
        assert!(!layout.has_handle("catalog_category_view"));
        assert!(!PageLayout::default().has_handle("default"));
    }

    #[test]
    fn test_add_handle_appends_duplicates() {
        let mut layout = PageLayout::new(["default"]);
        layout.add_handle("page_cache_disabled");
        layout.add_handle("page_cache_disabled");

        assert_eq!(layout.count("page_cache_disabled"), 2);
        assert_eq!(
            layout.into_handles(),
            vec!["default", "page_cache_disabled", "page_cache_disabled"]
        );
    }
}
