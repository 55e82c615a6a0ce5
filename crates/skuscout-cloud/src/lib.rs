//! skuscout cloud abstraction
//!
//! This crate provides the provider-neutral half of skuscout: the SKU
//! catalog trait, the sequential region survey, and the recommendation
//! tie-break logic.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │                 skuscout CLI                     │
//! │          (phases, report, progress)              │
//! └─────────────────┬───────────────────────────────┘
//!                   │
//! ┌─────────────────▼───────────────────────────────┐
//! │               skuscout-cloud                     │
//! │  ┌──────────────────────────────────────────┐   │
//! │  │         Catalog Abstraction               │   │
//! │  │  trait SkuCatalog { ... }                 │   │
//! │  └──────────────────────────────────────────┘   │
//! │  ┌──────────────┐  ┌──────────────┐             │
//! │  │    Survey    │  │  Recommend   │             │
//! │  └──────────────┘  └──────────────┘             │
//! └───────┬─────────────────────────────────────────┘
//!         │
//! ┌───────▼───────┐
//! │     azure     │
//! │  (az CLI)     │
//! └───────────────┘
//! ```

pub mod catalog;
pub mod error;
pub mod recommend;
pub mod survey;

// Re-exports
pub use catalog::{Restriction, SkuCatalog, SkuInfo};
pub use error::{CloudError, Result};
pub use recommend::{Recommendation, TieBreak, rank_by_generation, recommend};
pub use survey::{SkuQueryResult, SurveyEvent, query, survey_regions};
