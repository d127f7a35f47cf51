use std::{collections::BTreeMap, marker::PhantomData};

use crate::{
    foundation::core::{Color, IndexPath, Size},
    host::collection::DataSource,
    host::registry::{ReusableView, ViewRegistry},
    layout::attributes::SupplementaryKind,
    layout::delegate::{FlowDelegate, HeaderTemplate},
    screen::config::ScreenConfig,
    sections::policy::SectionPolicy,
};

/// Reuse identifier of the sample cell.
pub const CELL_REUSE_IDENTIFIER: &str = "Cell";
/// Class name the sample cell is registered with.
pub const CELL_CLASS: &str = "CollectionViewCell";
/// Class name of the per-section header view, used when section headers are enabled.
pub const SECTION_HEADER_CLASS: &str = "SectionHeaderView";

/// One of the two named data buckets of the sample screen.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum Side {
    /// First bucket, shown initially.
    A,
    /// Second bucket.
    B,
}

impl Side {
    /// The other bucket.
    pub fn other(self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }
}

/// Global header view of the sample screen, sized from configuration instead of a template file.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeaderView {
    height: f64,
}

impl HeaderView {
    /// Header with the given natural height.
    pub fn new(height: f64) -> Self {
        Self { height }
    }
}

impl HeaderTemplate for HeaderView {
    const TYPE_NAME: &'static str = "HeaderView";

    fn natural_height(&self) -> Option<f64> {
        Some(self.height)
    }
}

/// Sizing answers of the sample screen.
#[derive(Clone, Debug, PartialEq)]
pub struct SampleSizing {
    line_spacing: f64,
    interitem_spacing: f64,
    item_inset: f64,
    item_heights: Vec<f64>,
    section_header_height: Option<f64>,
}

impl SampleSizing {
    /// Sizing taken from a screen configuration.
    pub fn from_config(config: &ScreenConfig) -> Self {
        Self {
            line_spacing: config.line_spacing,
            interitem_spacing: config.interitem_spacing,
            item_inset: config.item_inset,
            item_heights: config.item_heights.clone(),
            section_header_height: config.section_header_height,
        }
    }
}

impl FlowDelegate for SampleSizing {
    fn size_for_item(&self, viewport_width: f64, index_path: IndexPath) -> Option<Size> {
        let size = self
            .item_heights
            .get(index_path.section)
            .map_or(Size::ZERO, |&height| {
                Size::new(viewport_width - self.item_inset, height)
            });
        Some(size)
    }

    fn reference_size_for_header(&self, viewport_width: f64, _section: usize) -> Option<Size> {
        self.section_header_height
            .map(|height| Size::new(viewport_width, height))
    }

    fn minimum_line_spacing(&self, _section: usize) -> Option<f64> {
        Some(self.line_spacing)
    }

    fn minimum_interitem_spacing(&self, _section: usize) -> Option<f64> {
        Some(self.interitem_spacing)
    }
}

/// Data source with two named buckets; every declared section shows the active bucket.
#[derive(Clone, Debug)]
pub struct ToggleDataSource<S> {
    buckets: BTreeMap<Side, Vec<i64>>,
    current: Side,
    sizing: SampleSizing,
    _sections: PhantomData<S>,
}

impl<S: SectionPolicy> ToggleDataSource<S> {
    /// Data source showing side A first.
    pub fn new(side_a: Vec<i64>, side_b: Vec<i64>, sizing: SampleSizing) -> Self {
        Self {
            buckets: BTreeMap::from([(Side::A, side_a), (Side::B, side_b)]),
            current: Side::A,
            sizing,
            _sections: PhantomData,
        }
    }

    /// Data source built from a screen configuration.
    pub fn from_config(config: &ScreenConfig) -> Self {
        Self::new(
            config.side_a.clone(),
            config.side_b.clone(),
            SampleSizing::from_config(config),
        )
    }

    /// Active bucket.
    pub fn current_side(&self) -> Side {
        self.current
    }

    /// Values of `side`.
    pub fn bucket(&self, side: Side) -> &[i64] {
        self.buckets.get(&side).map(Vec::as_slice).unwrap_or_default()
    }

    /// Make the other bucket active and return it.
    pub fn switch_side(&mut self) -> Side {
        self.current = self.current.other();
        self.current
    }
}

impl<S: SectionPolicy> DataSource for ToggleDataSource<S> {
    fn number_of_sections(&self) -> usize {
        S::ALL.len()
    }

    fn number_of_items(&self, section: usize) -> usize {
        if section < S::ALL.len() {
            self.bucket(self.current).len()
        } else {
            0
        }
    }

    fn cell_for_item(&self, registry: &ViewRegistry, index_path: IndexPath) -> ReusableView {
        let mut cell = registry.dequeue_cell(CELL_REUSE_IDENTIFIER, index_path);
        cell.background = Color::WHITE;
        cell.label = self
            .bucket(self.current)
            .get(index_path.item)
            .map(ToString::to_string);
        cell
    }

    fn view_for_supplementary(
        &self,
        registry: &ViewRegistry,
        kind: SupplementaryKind,
        index_path: IndexPath,
    ) -> ReusableView {
        match kind {
            SupplementaryKind::Header => {
                registry.dequeue_supplementary(kind, HeaderView::TYPE_NAME, index_path)
            }
            SupplementaryKind::SectionHeader => {
                let mut view =
                    registry.dequeue_supplementary(kind, SECTION_HEADER_CLASS, index_path);
                view.label = Some(format!("Section {}", index_path.section + 1));
                view
            }
            SupplementaryKind::SectionFooter => {
                panic!(
                    "supplementary kind '{}' is not implemented by the sample screen",
                    kind.identifier()
                )
            }
        }
    }

    fn flow_delegate(&self) -> Option<&dyn FlowDelegate> {
        Some(&self.sizing)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/screen/data.rs"]
mod tests;
