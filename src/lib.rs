//! sectionflow is a sectioned vertical-flow layout engine for grid-like collection views.
//!
//! The engine computes frames for a global header, optional per-section headers, item cells and
//! a colored background decoration behind every first-column cell, caches them, and serves them
//! to a render host by index path or by rectangle.
//!
//! # Pipeline overview
//!
//! 1. **Prepare**: `LayoutHost + FlowDelegate -> LayoutSnapshot` (one deterministic pass)
//! 2. **Query**: `Rect -> Vec<LayoutAttributes>` for the visible area, or lookups by index path
//! 3. **Render**: [`CollectionHost`] dequeues registered views and applies attributes to them
//! 4. **Mutate**: [`CollectionHost::perform_batch_updates`] records deletions and insertions,
//!    then invalidates and prepares the layout again once the transaction completes
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: identical host answers produce identical attribute sets.
//! - **No stale reads**: between `invalidate` and the next `prepare` every query is empty.
//! - **Single-threaded**: the layout is driven from the render loop and is not `Sync`.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;
mod host;
mod layout;
mod screen;
mod sections;

pub use foundation::core::{Color, IndexPath, Point, Rect, Size, frames_intersect};
pub use foundation::error::{LayoutError, LayoutResult};
pub use host::batch::{BatchSummary, BatchUpdate};
pub use host::collection::{CollectionHost, DataSource};
pub use host::registry::{ReusableView, ViewRegistry, ViewRole};
pub use layout::attributes::{ElementCategory, LayoutAttributes, SupplementaryKind};
pub use layout::delegate::{FlowDelegate, HeaderTemplate, LayoutHost};
pub use layout::engine::{
    CollectionLayout, LayoutSnapshot, SECTION_BACKGROUND_KIND, SectionFlowLayout,
};
pub use screen::config::{ScreenConfig, Viewport};
pub use screen::controller::{ScreenController, ScreenHost};
pub use screen::data::{
    CELL_CLASS, CELL_REUSE_IDENTIFIER, HeaderView, SECTION_HEADER_CLASS, SampleSizing, Side,
    ToggleDataSource,
};
pub use sections::policy::{ConcreteSections, SectionPolicy};
