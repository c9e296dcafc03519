use pets_aggregator::BreedAggregator;
use pets_core::Config;

use crate::render::Renderer;

pub struct AppState {
    pub aggregator: BreedAggregator,
    pub renderer: Renderer,
}

impl AppState {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let aggregator = BreedAggregator::new(config)?;
        Self::with_aggregator(aggregator)
    }

    /// State around a caller-built aggregator (e.g. one with a fixed shuffle seed).
    pub fn with_aggregator(aggregator: BreedAggregator) -> anyhow::Result<Self> {
        let renderer = Renderer::new()?;

        Ok(AppState {
            aggregator,
            renderer,
        })
    }
}
