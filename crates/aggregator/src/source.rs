//! Per-source search adapters with an explicit degrade-to-empty contract.

use std::sync::Arc;

use async_trait::async_trait;
use futures::future::join_all;
use harvardmuseums::HarvardClient;
use metmuseum::MetClient;
use model::{Artwork, SearchPage};
use thiserror::Error;

use crate::normalize;

/// Records per page, fixed for both sources.
pub const PAGE_SIZE: usize = 20;

/// Why a source degraded to the empty result instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DegradeReason {
    /// The source requires an access credential and none is configured.
    #[error("no API key configured")]
    MissingApiKey,
    /// Transport or protocol failure talking to the source.
    #[error("source unreachable: {0}")]
    Transport(String),
}

/// Outcome of one source search.
///
/// A source never surfaces an error to the aggregation layer: an outage of
/// one museum must not break the combined search, so every unrecoverable
/// failure is converted to `Degraded` at this boundary with the reason kept
/// for logging.
#[derive(Debug, Clone)]
pub enum SourceOutcome {
    Ok(SearchPage),
    Degraded(DegradeReason),
}

impl SourceOutcome {
    /// The page to aggregate; the degraded arm contributes the
    /// empty/zero-total/no-more page.
    pub fn into_page(self) -> SearchPage {
        match self {
            SourceOutcome::Ok(page) => page,
            SourceOutcome::Degraded(_) => SearchPage::empty(),
        }
    }
}

/// One museum source behind the aggregator.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SearchSource: Send + Sync {
    /// Search one page of normalized artworks. `page` is 1-based.
    async fn search(&self, query: &str, page: u32, require_image: bool) -> SourceOutcome;

    /// Look up a single record by its source-native id.
    /// Any failure degrades to `None`.
    async fn get(&self, native_id: i64) -> Option<Artwork>;
}

/// Page window `[(page-1)*PAGE_SIZE, min(page*PAGE_SIZE, total))` over an
/// identifier list of `total` entries.
fn page_window(page: u32, total: usize) -> (usize, usize) {
    let start = (page.max(1) as usize - 1).saturating_mul(PAGE_SIZE);
    let end = start.saturating_add(PAGE_SIZE).min(total);
    (start.min(end), end)
}

/// Met adapter: the source exposes a two-step protocol, one query for the
/// full ordered identifier list and one request per record. The adapter
/// slices the requested page window locally and fetches its records
/// concurrently.
pub struct MetSource {
    client: Arc<MetClient>,
}

impl MetSource {
    pub fn new(client: Arc<MetClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SearchSource for MetSource {
    async fn search(&self, query: &str, page: u32, require_image: bool) -> SourceOutcome {
        let response = match self.client.search(query, require_image).await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("met search degraded to empty: {}", e);
                return SourceOutcome::Degraded(DegradeReason::Transport(e.to_string()));
            }
        };
        let Some(object_ids) = response.object_ids else {
            // No hits; a valid empty result, not a degrade.
            return SourceOutcome::Ok(SearchPage::empty());
        };

        let total = object_ids.len();
        let (start, end) = page_window(page, total);

        let fetches = object_ids[start..end].iter().map(|&object_id| {
            let client = Arc::clone(&self.client);
            async move {
                match client.get_object(object_id).await {
                    Ok(object) => Some(normalize::met_artwork(&object)),
                    Err(e) => {
                        // One failed record drops out of the page; its
                        // siblings and the page totals are unaffected.
                        tracing::warn!("dropping met object {}: {}", object_id, e);
                        None
                    }
                }
            }
        });
        let artworks: Vec<Artwork> = join_all(fetches).await.into_iter().flatten().collect();

        SourceOutcome::Ok(SearchPage {
            artworks,
            total: total as u64,
            has_more: end < total,
        })
    }

    async fn get(&self, native_id: i64) -> Option<Artwork> {
        match self.client.get_object(native_id).await {
            Ok(object) => Some(normalize::met_artwork(&object)),
            Err(e) => {
                tracing::warn!("met object {} lookup failed: {}", native_id, e);
                None
            }
        }
    }
}

/// Harvard adapter: the source paginates server-side and filters on images
/// natively. A missing API key is a valid degraded state, not an error.
pub struct HarvardSource {
    client: Arc<HarvardClient>,
}

impl HarvardSource {
    pub fn new(client: Arc<HarvardClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SearchSource for HarvardSource {
    async fn search(&self, query: &str, page: u32, require_image: bool) -> SourceOutcome {
        if !self.client.has_api_key() {
            tracing::warn!("harvard search degraded to empty: no API key configured");
            return SourceOutcome::Degraded(DegradeReason::MissingApiKey);
        }
        match self
            .client
            .search_objects(query, page.max(1), PAGE_SIZE as u32, require_image)
            .await
        {
            Ok(response) => SourceOutcome::Ok(SearchPage {
                artworks: response
                    .records
                    .iter()
                    .map(normalize::harvard_artwork)
                    .collect(),
                total: response.info.totalrecords.max(0) as u64,
                has_more: response.info.page < response.info.pages,
            }),
            Err(e) => {
                tracing::warn!("harvard search degraded to empty: {}", e);
                SourceOutcome::Degraded(DegradeReason::Transport(e.to_string()))
            }
        }
    }

    async fn get(&self, native_id: i64) -> Option<Artwork> {
        match self.client.get_object(native_id).await {
            Ok(record) => Some(normalize::harvard_artwork(&record)),
            Err(e) => {
                tracing::warn!("harvard object {} lookup failed: {}", native_id, e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_window_slices_twenty_records_per_page() {
        assert_eq!(page_window(1, 45), (0, 20));
        assert_eq!(page_window(2, 45), (20, 40));
        assert_eq!(page_window(3, 45), (40, 45));
    }

    #[test]
    fn page_window_past_the_end_is_empty() {
        assert_eq!(page_window(4, 45), (45, 45));
        assert_eq!(page_window(1, 0), (0, 0));
    }

    #[test]
    fn page_window_treats_page_zero_as_first_page() {
        assert_eq!(page_window(0, 45), (0, 20));
    }

    #[test]
    fn degraded_outcome_exposes_the_empty_page() {
        let outcome = SourceOutcome::Degraded(DegradeReason::MissingApiKey);
        let page = outcome.into_page();
        assert!(page.artworks.is_empty());
        assert_eq!(page.total, 0);
        assert!(!page.has_more);
    }

    #[tokio::test]
    async fn harvard_without_key_degrades_without_a_request() {
        let client = HarvardClient::with_client(reqwest::Client::new(), "");
        let source = HarvardSource::new(Arc::new(client));
        match source.search("cats", 1, false).await {
            SourceOutcome::Degraded(reason) => assert_eq!(reason, DegradeReason::MissingApiKey),
            SourceOutcome::Ok(_) => panic!("expected a degraded outcome"),
        }
    }
}
