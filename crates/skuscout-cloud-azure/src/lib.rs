//! Azure SKU catalog for skuscout
//!
//! This crate implements the SkuCatalog trait on top of the az CLI,
//! letting skuscout survey VM SKU availability per region.
//!
//! # Requirements
//!
//! - `az` CLI must be installed and logged in (`az login`)
//!
//! # Example
//!
//! ```ignore
//! use skuscout_cloud::SkuCatalog;
//! use skuscout_cloud_azure::AzCli;
//!
//! let az = AzCli::new();
//!
//! // Check authentication
//! let account = az.check_auth().await?;
//! println!("subscription: {}", account.name);
//!
//! // List SKUs in one region
//! let skus = az.list_skus("brazilsouth", "Standard_B1s").await?;
//! ```

pub mod azcli;
pub mod catalog;
pub mod error;
pub mod regions;

pub use azcli::{AzAccount, AzCli, AzUser, DEFAULT_TIMEOUT};
pub use error::{AzureError, Result};
pub use regions::REGIONS_NEAR_BRAZIL;
