//! Global thumbnail resolution.
//!
//! Matches a game against the shared image pool in three tiers, first
//! match wins:
//!
//! 1. **Exact**: equal slugs, or base names equal ignoring case.
//! 2. **Contains**: one slug contains the other.
//! 3. **Franchise**: a keyword rule forces a fixed file name, whether or
//!    not that file is in the pool.
//!
//! Tier 2 is deliberately loose and will pick a wrong image for some
//! names; the ordering keeps exact matches ahead of it.

use serde::{Deserialize, Serialize};

use arcade_naming::{base_name, slug};

use crate::pool::ImagePool;

/// Which resolution tier produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchTier {
    Exact,
    Contains,
    Franchise,
}

/// A resolved thumbnail file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageMatch<'a> {
    pub file: &'a str,
    pub tier: MatchTier,
}

/// One forced image within a franchise rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FranchiseVariant {
    /// Any of these substrings (case-insensitive) selects the variant.
    pub markers: Vec<String>,
    /// Image file name in the shared image directory.
    pub image: String,
}

/// Keyword-triggered image selection for series with inconsistent names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FranchiseRule {
    /// Substring (case-insensitive) of the query base name that enables the rule.
    pub keyword: String,
    /// Image used when the keyword matches but no variant does.
    #[serde(default)]
    pub fallback: Option<String>,
    /// Checked in order; the first variant with a matching marker wins.
    #[serde(default)]
    pub variants: Vec<FranchiseVariant>,
}

impl FranchiseRule {
    /// Returns the forced image for `base`, if the rule applies.
    pub fn select(&self, base: &str) -> Option<&str> {
        let base = base.to_lowercase();
        if !base.contains(&self.keyword.to_lowercase()) {
            return None;
        }

        self.variants
            .iter()
            .find(|v| v.markers.iter().any(|m| base.contains(&m.to_lowercase())))
            .map(|v| v.image.as_str())
            .or(self.fallback.as_deref())
    }
}

/// The built-in franchise table.
pub fn default_franchise_rules() -> Vec<FranchiseRule> {
    let variant = |markers: &[&str], image: &str| FranchiseVariant {
        markers: markers.iter().map(|m| m.to_string()).collect(),
        image: image.to_string(),
    };

    vec![FranchiseRule {
        keyword: "fnaf".into(),
        fallback: Some("fnaf1.jpeg".into()),
        variants: vec![
            variant(&["sl", "sister"], "fnafsl.jpeg"),
            variant(&["4"], "fnaf4.jpeg"),
            variant(&["3"], "fnaf3.jpeg"),
            variant(&["2"], "fnaf2.jpeg"),
        ],
    }]
}

/// Resolves game names to thumbnails from the shared image pool.
#[derive(Debug, Clone)]
pub struct ImageResolver {
    pool: ImagePool,
    franchises: Vec<FranchiseRule>,
}

impl ImageResolver {
    /// Creates a resolver using the built-in franchise table.
    pub fn new(pool: ImagePool) -> Self {
        Self::with_franchises(pool, default_franchise_rules())
    }

    /// Creates a resolver with an explicit franchise table (evaluated in order).
    pub fn with_franchises(pool: ImagePool, franchises: Vec<FranchiseRule>) -> Self {
        Self { pool, franchises }
    }

    pub fn pool(&self) -> &ImagePool {
        &self.pool
    }

    /// Returns the best-guess image file name for a document file name or
    /// folder identifier.
    pub fn resolve(&self, query: &str) -> Option<&str> {
        self.resolve_with_tier(query).map(|m| m.file)
    }

    /// Like [`resolve`](Self::resolve), also reporting the matching tier.
    pub fn resolve_with_tier(&self, query: &str) -> Option<ImageMatch<'_>> {
        let base = base_name(query);
        let base_lower = base.to_lowercase();
        let query_slug = slug(base);

        // An empty slug is contained in everything and equal to every
        // other empty slug, so it only takes part in name comparison.
        let has_slug = !query_slug.is_empty();

        let exact = self.pool.iter().find(|c| {
            (has_slug && c.slug == query_slug) || c.name.to_lowercase() == base_lower
        });
        if let Some(c) = exact {
            return Some(ImageMatch {
                file: &c.file,
                tier: MatchTier::Exact,
            });
        }

        if has_slug {
            let related = self.pool.iter().find(|c| {
                !c.slug.is_empty() && (query_slug.contains(&c.slug) || c.slug.contains(&query_slug))
            });
            if let Some(c) = related {
                return Some(ImageMatch {
                    file: &c.file,
                    tier: MatchTier::Contains,
                });
            }
        }

        self.franchises
            .iter()
            .find_map(|rule| rule.select(base))
            .map(|file| ImageMatch {
                file,
                tier: MatchTier::Franchise,
            })
    }
}
