//! SkuCatalog implementation for the az CLI

use crate::azcli::AzCli;
use async_trait::async_trait;
use skuscout_cloud::{CloudError, SkuCatalog, SkuInfo};

#[async_trait]
impl SkuCatalog for AzCli {
    fn name(&self) -> &str {
        "azure"
    }

    async fn list_skus(
        &self,
        region: &str,
        pattern: &str,
    ) -> skuscout_cloud::Result<Vec<SkuInfo>> {
        AzCli::list_skus(self, region, pattern)
            .await
            .map_err(CloudError::from)
    }
}
