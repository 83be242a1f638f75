//! Combined search across both museum sources.

use std::sync::Arc;

use model::{Artwork, Museum, SearchFilters, SearchPage};

use crate::source::{SearchSource, SourceOutcome};

/// Fans a search out to both museum sources, interleaves the two pages and
/// applies the attribute filters.
///
/// The aggregator performs no I/O of its own beyond the two adapter calls
/// and keeps no cache; identical searches fan out again.
pub struct SearchAggregator {
    met: Arc<dyn SearchSource>,
    harvard: Arc<dyn SearchSource>,
}

impl SearchAggregator {
    pub fn new(met: Arc<dyn SearchSource>, harvard: Arc<dyn SearchSource>) -> Self {
        Self { met, harvard }
    }

    /// One combined result page. `page` is 1-based and forwarded to both
    /// sources unchanged.
    ///
    /// Both sources are queried concurrently and joined; a degraded source
    /// contributes the empty page, so one museum's outage never hides the
    /// other's results. `total` sums both sources' full result counts before
    /// attribute filtering, so it routinely exceeds `artworks.len()`.
    pub async fn search(&self, filters: &SearchFilters, page: u32) -> SearchPage {
        let (met, harvard) = tokio::join!(
            self.met.search(&filters.query, page, filters.has_image),
            self.harvard.search(&filters.query, page, filters.has_image),
        );
        let met = settle(met, Museum::Met);
        let harvard = settle(harvard, Museum::Harvard);

        let combined = interleave(met.artworks, harvard.artworks);

        SearchPage {
            artworks: apply_filters(combined, filters),
            total: met.total + harvard.total,
            has_more: met.has_more || harvard.has_more,
        }
    }

    /// Look up one artwork by canonical id (`met-..` / `harvard-..`).
    /// Unknown tags and source failures both yield `None`.
    pub async fn find(&self, artwork_id: &str) -> Option<Artwork> {
        let (museum, native_id) = Museum::parse_artwork_id(artwork_id)?;
        match museum {
            Museum::Met => self.met.get(native_id).await,
            Museum::Harvard => self.harvard.get(native_id).await,
        }
    }
}

fn settle(outcome: SourceOutcome, museum: Museum) -> SearchPage {
    if let SourceOutcome::Degraded(reason) = &outcome {
        tracing::warn!("{} source degraded: {}", museum.as_str(), reason);
    }
    outcome.into_page()
}

/// Round-robin merge: `a[0], b[0], a[1], b[1], …` then the remainder of the
/// longer side. Keeps either source from dominating the visible page.
fn interleave(a: Vec<Artwork>, b: Vec<Artwork>) -> Vec<Artwork> {
    let mut combined = Vec::with_capacity(a.len() + b.len());
    let mut a = a.into_iter();
    let mut b = b.into_iter();
    loop {
        match (a.next(), b.next()) {
            (None, None) => break,
            (first, second) => {
                combined.extend(first);
                combined.extend(second);
            }
        }
    }
    combined
}

/// Case-insensitive substring match; an empty filter passes everything.
fn matches(value: &str, filter: &str) -> bool {
    filter.is_empty() || value.to_lowercase().contains(&filter.to_lowercase())
}

/// Attribute filters over the combined page. The `date_range` field of the
/// filter object is accepted but not applied here; see DESIGN.md.
fn apply_filters(artworks: Vec<Artwork>, filters: &SearchFilters) -> Vec<Artwork> {
    artworks
        .into_iter()
        .filter(|artwork| {
            matches(&artwork.medium, &filters.medium)
                && matches(&artwork.culture, &filters.culture)
                && matches(&artwork.department, &filters.department)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::MockSearchSource;

    fn artwork(id: &str, museum: Museum) -> Artwork {
        Artwork {
            id: id.to_string(),
            title: "Untitled".to_string(),
            artist: "Unknown Artist".to_string(),
            date: "Unknown Date".to_string(),
            medium: "Unknown Medium".to_string(),
            dimensions: "Unknown Dimensions".to_string(),
            culture: "Unknown Culture".to_string(),
            image_url: String::new(),
            thumbnail_url: String::new(),
            description: String::new(),
            department: "Unknown Department".to_string(),
            museum,
            object_url: String::new(),
        }
    }

    fn met_artworks(ids: &[&str]) -> Vec<Artwork> {
        ids.iter().map(|id| artwork(id, Museum::Met)).collect()
    }

    fn harvard_artworks(ids: &[&str]) -> Vec<Artwork> {
        ids.iter().map(|id| artwork(id, Museum::Harvard)).collect()
    }

    fn source_returning(page: SearchPage) -> MockSearchSource {
        let mut source = MockSearchSource::new();
        source
            .expect_search()
            .returning(move |_, _, _| SourceOutcome::Ok(page.clone()));
        source
    }

    fn degraded_source(reason: crate::source::DegradeReason) -> MockSearchSource {
        let mut source = MockSearchSource::new();
        source
            .expect_search()
            .returning(move |_, _, _| SourceOutcome::Degraded(reason.clone()));
        source
    }

    fn aggregator(met: MockSearchSource, harvard: MockSearchSource) -> SearchAggregator {
        SearchAggregator::new(Arc::new(met), Arc::new(harvard))
    }

    #[test]
    fn interleave_alternates_then_drains_the_longer_side() {
        let combined = interleave(
            met_artworks(&["met-1", "met-2", "met-3"]),
            harvard_artworks(&["harvard-1", "harvard-2"]),
        );
        let ids: Vec<&str> = combined.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, ["met-1", "harvard-1", "met-2", "harvard-2", "met-3"]);
    }

    #[test]
    fn filter_match_is_case_insensitive_substring() {
        assert!(matches("Oil painting", "paint"));
        assert!(matches("Oil painting", "OIL"));
        assert!(!matches("Oil painting", "fresco"));
        assert!(matches("anything", ""));
    }

    #[tokio::test]
    async fn totals_sum_both_sources_even_after_filtering() {
        let mut met_page_artworks = met_artworks(&["met-1", "met-2"]);
        met_page_artworks[0].medium = "Oil on canvas".to_string();
        let met = source_returning(SearchPage {
            artworks: met_page_artworks,
            total: 50,
            has_more: true,
        });

        let mut harvard_page_artworks = harvard_artworks(&["harvard-1"]);
        harvard_page_artworks[0].medium = "Graphite on paper".to_string();
        let harvard = source_returning(SearchPage {
            artworks: harvard_page_artworks,
            total: 30,
            has_more: false,
        });

        let filters = SearchFilters {
            query: "portrait".to_string(),
            medium: "oil".to_string(),
            ..Default::default()
        };
        let page = aggregator(met, harvard).search(&filters, 1).await;

        // Only one artwork survives the medium filter, but the total still
        // reports both sources' full counts.
        assert_eq!(page.total, 80);
        assert_eq!(page.artworks.len(), 1);
        assert_eq!(page.artworks[0].id, "met-1");
        assert!(page.has_more);
    }

    #[tokio::test]
    async fn degraded_source_does_not_hide_the_other() {
        let met = source_returning(SearchPage {
            artworks: met_artworks(&["met-1", "met-2"]),
            total: 2,
            has_more: false,
        });
        let harvard = degraded_source(crate::source::DegradeReason::MissingApiKey);

        let filters = SearchFilters {
            query: "portrait".to_string(),
            ..Default::default()
        };
        let page = aggregator(met, harvard).search(&filters, 1).await;

        let ids: Vec<&str> = page.artworks.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, ["met-1", "met-2"]);
        assert_eq!(page.total, 2);
        assert!(!page.has_more);
    }

    #[tokio::test]
    async fn has_more_is_the_or_of_both_sources() {
        let met = source_returning(SearchPage::empty());
        let harvard = source_returning(SearchPage {
            artworks: Vec::new(),
            total: 100,
            has_more: true,
        });

        let filters = SearchFilters::default();
        let page = aggregator(met, harvard).search(&filters, 1).await;
        assert!(page.has_more);
        assert_eq!(page.total, 100);
    }

    #[tokio::test]
    async fn find_dispatches_on_the_source_tag() {
        let mut met = MockSearchSource::new();
        met.expect_get()
            .returning(|native_id| Some(artwork(&Museum::Met.artwork_id(native_id), Museum::Met)));
        let harvard = MockSearchSource::new();

        let aggregator = aggregator(met, harvard);
        let found = aggregator.find("met-42").await.unwrap();
        assert_eq!(found.id, "met-42");

        assert!(aggregator.find("louvre-42").await.is_none());
        assert!(aggregator.find("met-notanumber").await.is_none());
    }
}
