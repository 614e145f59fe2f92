//! Layout Update Port
//!
//! The rendering pipeline's handle list for the page being built.

/// Handle collection of the page being rendered.
pub trait LayoutUpdate: Send {
    /// Current handles, in the order they were added.
    fn handles(&self) -> &[String];

    /// Append a handle. Duplicates are allowed.
    fn add_handle(&mut self, handle: &str);

    /// Exact membership test.
    fn has_handle(&self, handle: &str) -> bool {
        self.handles().iter().any(|h| h == handle)
    }
}
