//! Boundary traits between the layout engine and its render host.

use crate::foundation::core::{IndexPath, Rect, Size};

/// What the layout engine needs from the render host while preparing.
pub trait LayoutHost {
    /// Number of sections the host displays.
    fn number_of_sections(&self) -> usize;

    /// Number of items in `section`.
    fn number_of_items(&self, section: usize) -> usize;

    /// Current viewport bounds. The origin is the scroll offset.
    fn bounds(&self) -> Rect;

    /// Sizing delegate, if the host has one.
    fn delegate(&self) -> Option<&dyn FlowDelegate> {
        None
    }
}

/// Optional sizing queries answered by the host's delegate.
///
/// Every method defaults to `None`, meaning "not implemented"; the engine then falls back to a
/// zero size or zero spacing.
pub trait FlowDelegate {
    /// Size of the item at `index_path`.
    fn size_for_item(&self, _viewport_width: f64, _index_path: IndexPath) -> Option<Size> {
        None
    }

    /// Size of the header above `section`.
    fn reference_size_for_header(&self, _viewport_width: f64, _section: usize) -> Option<Size> {
        None
    }

    /// Vertical gap after each item in `section`.
    fn minimum_line_spacing(&self, _section: usize) -> Option<f64> {
        None
    }

    /// Horizontal gap between items in `section`. Not used by the vertical flow.
    fn minimum_interitem_spacing(&self, _section: usize) -> Option<f64> {
        None
    }
}

/// Template of the global header view, queried for its natural height.
pub trait HeaderTemplate {
    /// Name the header view class is registered under.
    const TYPE_NAME: &'static str;

    /// Natural height of the header, or `None` if the template could not be loaded.
    fn natural_height(&self) -> Option<f64>;
}
