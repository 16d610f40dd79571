//! Factory configuration.

/// Configuration for an [`EntityFactory`](crate::EntityFactory).
#[derive(Debug, Clone, PartialEq)]
pub struct FactoryConfig {
    /// Seed for visual variant selection. `None` seeds from OS entropy.
    pub seed: Option<u64>,
    /// Interaction radius of warps.
    pub warp_interact_radius: f32,
    /// Interaction radius of dropped items.
    pub item_interact_radius: f32,
}

impl FactoryConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed variant selection so every run picks the same variants.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_warp_interact_radius(mut self, radius: f32) -> Self {
        self.warp_interact_radius = radius;
        self
    }

    #[must_use]
    pub fn with_item_interact_radius(mut self, radius: f32) -> Self {
        self.item_interact_radius = radius;
        self
    }
}

impl Default for FactoryConfig {
    fn default() -> Self {
        Self {
            seed: None,
            warp_interact_radius: 3.0,
            item_interact_radius: 1.0,
        }
    }
}
