//! Static challenge catalog and quote pool.
//!
//! The catalog is compiled into the binary and never changes at runtime:
//! three tiers of five challenges each, with ids unique across tiers.

mod challenges;
mod quotes;

pub use challenges::ChallengeDefinition;
pub use quotes::{quotes, random_quote, random_quote_with, Quote};

use crate::profile::Tier;

/// Ordered challenges of one tier.
pub fn challenges_for_tier(tier: Tier) -> &'static [ChallengeDefinition] {
    match tier {
        Tier::Beginner => &challenges::BEGINNER,
        Tier::Intermediate => &challenges::INTERMEDIATE,
        Tier::Advanced => &challenges::ADVANCED,
    }
}

/// Every challenge, tier by tier.
pub fn all_challenges() -> impl Iterator<Item = &'static ChallengeDefinition> {
    Tier::ALL
        .into_iter()
        .flat_map(|tier| challenges_for_tier(tier).iter())
}

/// Look up a challenge by id across all tiers.
pub fn find_challenge(id: u32) -> Option<&'static ChallengeDefinition> {
    all_challenges().find(|c| c.id == id)
}

/// Total number of challenges in the catalog.
pub fn catalog_size() -> usize {
    Tier::ALL
        .iter()
        .map(|tier| challenges_for_tier(*tier).len())
        .sum()
}
