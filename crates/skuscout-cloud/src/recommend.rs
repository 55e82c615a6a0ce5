//! Recommendation selection
//!
//! The survey already orders regions by distance rank, so the first retained
//! region wins. Within that region the tie-break between SKU names is either
//! the order the provider returned them in, or a generation-preference
//! ladder for families that ship multiple hardware generations.

use crate::survey::SkuQueryResult;

/// How to pick one SKU name among a region's available names
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TieBreak {
    /// Keep the provider's listing order and take the first name
    CommandOrder,
    /// Prefer newer generations: v5 > v4 > v3 > the "s_" variant, then
    /// lexicographic
    GenerationLadder,
}

/// A chosen (region, SKU) pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recommendation {
    pub region: String,
    pub sku: String,
}

/// Ascending sort key for the generation ladder. False sorts before true,
/// so a name containing the marker outranks one without it.
fn ladder_key(name: &str) -> (bool, bool, bool, bool, &str) {
    (
        !name.contains("v5"),
        !name.contains("v4"),
        !name.contains("v3"),
        !name.contains("s_"),
        name,
    )
}

/// Sort SKU names by the generation-preference ladder, best first
pub fn rank_by_generation(names: &[String]) -> Vec<String> {
    let mut ranked = names.to_vec();
    ranked.sort_by(|a, b| ladder_key(a).cmp(&ladder_key(b)));
    ranked
}

/// Pick the best (region, SKU) from an ordered survey result
///
/// Returns `None` when the survey found nothing anywhere.
pub fn recommend(results: &[SkuQueryResult], tie_break: TieBreak) -> Option<Recommendation> {
    let best = results.first()?;

    let sku = match tie_break {
        TieBreak::CommandOrder => best.available.first()?.clone(),
        TieBreak::GenerationLadder => rank_by_generation(&best.available).into_iter().next()?,
    };

    Some(Recommendation {
        region: best.region.clone(),
        sku,
    })
}
