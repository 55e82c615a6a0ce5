//! Sequential region survey
//!
//! Walks an ordered region list, querying the catalog once per region and
//! keeping only the regions where something is actually provisionable.

use crate::catalog::SkuCatalog;
use crate::error::CloudError;

/// Outcome of one (region, pattern) catalog query
///
/// Invariant: `available` is empty whenever `error` is set. A failed query
/// never yields names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkuQueryResult {
    pub region: String,
    pub pattern: String,
    pub available: Vec<String>,
    pub error: Option<String>,
}

impl SkuQueryResult {
    fn failed(region: &str, pattern: &str, error: &CloudError) -> Self {
        Self {
            region: region.to_string(),
            pattern: pattern.to_string(),
            available: Vec::new(),
            error: Some(error.to_string()),
        }
    }
}

/// Progress notification emitted while a survey runs
///
/// `index` is 1-based. `Found` fires only for regions with non-empty
/// availability; errored and empty regions produce no event beyond their
/// initial `Checking`.
#[derive(Debug)]
pub enum SurveyEvent<'a> {
    Checking {
        index: usize,
        total: usize,
        region: &'a str,
    },
    Found {
        index: usize,
        total: usize,
        result: &'a SkuQueryResult,
    },
}

/// Check which SKUs matching `pattern` are unrestricted in `region`
///
/// Every failure mode of the underlying catalog (command failure, timeout,
/// parse error) is folded into `error`; this function itself never fails
/// and never retries.
pub async fn query(catalog: &dyn SkuCatalog, region: &str, pattern: &str) -> SkuQueryResult {
    match catalog.list_skus(region, pattern).await {
        Ok(skus) => SkuQueryResult {
            region: region.to_string(),
            pattern: pattern.to_string(),
            available: skus
                .into_iter()
                .filter(|s| s.is_unrestricted())
                .map(|s| s.name)
                .collect(),
            error: None,
        },
        Err(e) => SkuQueryResult::failed(region, pattern, &e),
    }
}

/// Survey `regions` for `pattern`, strictly in list order
///
/// Returns only the regions with non-empty availability, preserving input
/// order. Regions with no capacity are dropped silently; regions whose
/// query failed are dropped from the result but logged, so provisioning
/// problems (auth, quota) stay observable.
pub async fn survey_regions<F>(
    catalog: &dyn SkuCatalog,
    pattern: &str,
    regions: &[String],
    mut on_event: F,
) -> Vec<SkuQueryResult>
where
    F: FnMut(SurveyEvent),
{
    let total = regions.len();
    let mut results = Vec::new();

    for (i, region) in regions.iter().enumerate() {
        on_event(SurveyEvent::Checking {
            index: i + 1,
            total,
            region,
        });

        let result = query(catalog, region, pattern).await;

        if let Some(ref error) = result.error {
            tracing::warn!(region = %region, pattern = %pattern, %error, "SKU query failed");
            continue;
        }

        if result.available.is_empty() {
            continue;
        }

        on_event(SurveyEvent::Found {
            index: i + 1,
            total,
            result: &result,
        });
        results.push(result);
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Restriction, SkuInfo};
    use crate::error::Result;
    use async_trait::async_trait;
    use std::collections::HashMap;

    enum MockResponse {
        Skus(Vec<SkuInfo>),
        CommandError(String),
        Timeout,
    }

    struct MockCatalog {
        responses: HashMap<String, MockResponse>,
    }

    impl MockCatalog {
        fn new() -> Self {
            Self {
                responses: HashMap::new(),
            }
        }

        fn with(mut self, region: &str, response: MockResponse) -> Self {
            self.responses.insert(region.to_string(), response);
            self
        }
    }

    #[async_trait]
    impl SkuCatalog for MockCatalog {
        fn name(&self) -> &str {
            "mock"
        }

        async fn list_skus(&self, region: &str, _pattern: &str) -> Result<Vec<SkuInfo>> {
            match self.responses.get(region) {
                Some(MockResponse::Skus(skus)) => Ok(skus.clone()),
                Some(MockResponse::CommandError(msg)) => {
                    Err(CloudError::CommandFailed(msg.clone()))
                }
                Some(MockResponse::Timeout) => Err(CloudError::Timeout),
                None => Ok(Vec::new()),
            }
        }
    }

    fn sku(name: &str) -> SkuInfo {
        SkuInfo {
            name: name.to_string(),
            resource_type: Some("virtualMachines".to_string()),
            tier: Some("Standard".to_string()),
            size: None,
            restrictions: None,
        }
    }

    fn restricted_sku(name: &str) -> SkuInfo {
        SkuInfo {
            restrictions: Some(vec![Restriction {
                restriction_type: Some("Location".to_string()),
                reason_code: Some("NotAvailableForSubscription".to_string()),
                values: None,
            }]),
            ..sku(name)
        }
    }

    fn regions(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_query_filters_restricted_skus() {
        let catalog = MockCatalog::new().with(
            "eastus",
            MockResponse::Skus(vec![
                sku("Standard_D2_v5"),
                restricted_sku("Standard_D2_v4"),
                sku("Standard_D2_v3"),
            ]),
        );

        let result = query(&catalog, "eastus", "Standard_D2").await;
        assert_eq!(result.available, vec!["Standard_D2_v5", "Standard_D2_v3"]);
        assert_eq!(result.error, None);
    }

    #[tokio::test]
    async fn test_query_error_yields_empty_availability() {
        let catalog = MockCatalog::new().with(
            "chilecentral",
            MockResponse::CommandError("az: subscription not found".to_string()),
        );

        let result = query(&catalog, "chilecentral", "Standard_B1s").await;
        assert!(result.available.is_empty());
        assert!(result.error.is_some());
    }

    #[tokio::test]
    async fn test_query_timeout_is_reported_not_raised() {
        let catalog = MockCatalog::new().with("eastus", MockResponse::Timeout);

        let result = query(&catalog, "eastus", "Standard_B1s").await;
        assert_eq!(result.available, Vec::<String>::new());
        assert_eq!(result.error.as_deref(), Some("Timeout"));
    }

    #[tokio::test]
    async fn test_survey_drops_errored_regions() {
        // brazilsouth answers, chilecentral fails: only brazilsouth remains.
        let catalog = MockCatalog::new()
            .with("brazilsouth", MockResponse::Skus(vec![sku("Standard_B1s")]))
            .with(
                "chilecentral",
                MockResponse::CommandError("quota exceeded".to_string()),
            );

        let results = survey_regions(
            &catalog,
            "Standard_B1s",
            &regions(&["brazilsouth", "chilecentral"]),
            |_| {},
        )
        .await;

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].region, "brazilsouth");
        assert_eq!(results[0].available, vec!["Standard_B1s"]);
    }

    #[tokio::test]
    async fn test_survey_drops_empty_regions_and_preserves_order() {
        let catalog = MockCatalog::new()
            .with("brazilsouth", MockResponse::Skus(Vec::new()))
            .with("eastus", MockResponse::Skus(vec![sku("Standard_D2_v5")]))
            .with(
                "eastus2",
                MockResponse::Skus(vec![restricted_sku("Standard_D2_v4")]),
            )
            .with("centralus", MockResponse::Skus(vec![sku("Standard_D2_v3")]));

        let results = survey_regions(
            &catalog,
            "Standard_D2",
            &regions(&["brazilsouth", "eastus", "eastus2", "centralus"]),
            |_| {},
        )
        .await;

        let surveyed: Vec<&str> = results.iter().map(|r| r.region.as_str()).collect();
        assert_eq!(surveyed, vec!["eastus", "centralus"]);
    }

    #[tokio::test]
    async fn test_survey_emits_checking_for_every_region() {
        let catalog = MockCatalog::new()
            .with("brazilsouth", MockResponse::Skus(vec![sku("Standard_B1s")]))
            .with("chilecentral", MockResponse::Timeout);

        let mut checked = Vec::new();
        let mut found = Vec::new();
        survey_regions(
            &catalog,
            "Standard_B1s",
            &regions(&["brazilsouth", "chilecentral"]),
            |event| match event {
                SurveyEvent::Checking { region, .. } => checked.push(region.to_string()),
                SurveyEvent::Found { result, .. } => found.push(result.region.clone()),
            },
        )
        .await;

        assert_eq!(checked, vec!["brazilsouth", "chilecentral"]);
        assert_eq!(found, vec!["brazilsouth"]);
    }
}
