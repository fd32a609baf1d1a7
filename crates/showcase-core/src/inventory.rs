use crate::catalog::{Product, ProductAsset, CATALOG};
use crate::error::ShowcaseError;
use crate::glb::GlbHeader;

/// Load state of one product asset.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum AssetState {
    #[default]
    Pending,
    Placed(GlbHeader),
    Failed(ShowcaseError),
}

/// Which products made it into the scene.
///
/// A failed load is logged once and the product stays absent; nothing retries.
#[derive(Clone, Debug, Default)]
pub struct SceneInventory {
    states: [AssetState; Product::COUNT],
}

impl SceneInventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, product: Product, outcome: Result<GlbHeader, ShowcaseError>) {
        let state = match outcome {
            Ok(header) => {
                log::info!(
                    "[assets] placed {} ({} bytes)",
                    product.name(),
                    header.length
                );
                AssetState::Placed(header)
            }
            Err(e) => {
                log::error!("[assets] {}", e);
                AssetState::Failed(e)
            }
        };
        self.states[product.index()] = state;
    }

    pub fn state(&self, product: Product) -> &AssetState {
        &self.states[product.index()]
    }

    pub fn is_placed(&self, product: Product) -> bool {
        matches!(self.state(product), AssetState::Placed(_))
    }

    /// Placed products, in catalogue order.
    pub fn placed(&self) -> impl Iterator<Item = &'static ProductAsset> + '_ {
        CATALOG.iter().filter(move |a| self.is_placed(a.product))
    }

    pub fn pending_count(&self) -> usize {
        self.states
            .iter()
            .filter(|s| matches!(s, AssetState::Pending))
            .count()
    }

    pub fn failed(&self) -> impl Iterator<Item = (&'static ProductAsset, &ShowcaseError)> + '_ {
        CATALOG.iter().filter_map(move |a| match self.state(a.product) {
            AssetState::Failed(e) => Some((a, e)),
            _ => None,
        })
    }
}
