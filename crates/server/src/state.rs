use std::sync::Arc;

use aggregator::{HarvardSource, MetSource, SearchAggregator};
use exhibitions::{ExhibitionStore, FileStorage};
use harvardmuseums::HarvardClient;
use metmuseum::MetClient;

use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub aggregator: Arc<SearchAggregator>,
    pub exhibitions: Arc<ExhibitionStore>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let http = reqwest::Client::new();

        let met = Arc::new(MetClient::with_client(http.clone()));
        let harvard = Arc::new(HarvardClient::with_client(
            http,
            config.harvard_api_key.clone(),
        ));
        if !harvard.has_api_key() {
            tracing::warn!(
                "HARVARD_API_KEY not configured; harvard searches will return empty results"
            );
        }

        let aggregator = SearchAggregator::new(
            Arc::new(MetSource::new(met)),
            Arc::new(HarvardSource::new(harvard)),
        );
        let exhibitions = ExhibitionStore::new(FileStorage::new(config.exhibitions_path()));

        Self {
            config: Arc::new(config),
            aggregator: Arc::new(aggregator),
            exhibitions: Arc::new(exhibitions),
        }
    }
}
