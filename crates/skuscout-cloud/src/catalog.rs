//! SKU catalog trait definition
//!
//! A catalog answers one question: which instance-type SKUs match a
//! size/family pattern in a given region, and which of them are restricted.

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// SKU catalog abstraction trait
///
/// Providers (Azure via the az CLI, others later) implement this trait to
/// expose their instance-type listings behind a unified interface.
#[async_trait]
pub trait SkuCatalog: Send + Sync {
    /// Returns the provider name (e.g., "azure")
    fn name(&self) -> &str;

    /// List SKUs matching a size/family pattern in one region
    async fn list_skus(&self, region: &str, pattern: &str) -> Result<Vec<SkuInfo>>;
}

/// One instance-type SKU as reported by the provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkuInfo {
    pub name: String,

    #[serde(rename = "resourceType")]
    pub resource_type: Option<String>,

    pub tier: Option<String>,

    pub size: Option<String>,

    /// Provider-reported provisioning constraints. Absent and empty both
    /// mean the SKU is provisionable.
    #[serde(default)]
    pub restrictions: Option<Vec<Restriction>>,
}

impl SkuInfo {
    /// Check whether this SKU can actually be provisioned
    pub fn is_unrestricted(&self) -> bool {
        self.restrictions.as_deref().is_none_or(|r| r.is_empty())
    }
}

/// A single restriction entry on a SKU
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Restriction {
    #[serde(rename = "type")]
    pub restriction_type: Option<String>,

    #[serde(rename = "reasonCode")]
    pub reason_code: Option<String>,

    #[serde(default)]
    pub values: Option<Vec<String>>,
}
