use std::str::FromStr;

use crate::{
    types::{projected_listing::ProjectedListing, raw_listing::RawListing},
    utils::listing_projector::project,
};

/// Which text of a listing takes part in keyword matching.
///
/// `TopLevel` only looks at string fields sitting directly on the record
/// (`slug`, `link`, `status`, ...). The title and meta live in nested objects
/// and are skipped. `Nested` additionally scans `title.rendered` and every
/// string value of `meta`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchScope {
    #[default]
    TopLevel,
    Nested,
}

impl FromStr for SearchScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "top-level" | "toplevel" => Ok(SearchScope::TopLevel),
            "nested" => Ok(SearchScope::Nested),
            other => Err(format!(
                "unknown search scope {other:?}, expected \"top-level\" or \"nested\""
            )),
        }
    }
}

pub fn search(listings: &[RawListing], query: &str, scope: SearchScope) -> Vec<ProjectedListing> {
    let needle = query.to_lowercase();

    listings
        .iter()
        .filter(|raw| matches(raw, &needle, scope))
        .map(project)
        .collect()
}

fn matches(raw: &RawListing, needle: &str, scope: SearchScope) -> bool {
    let contains = |text: &str| text.to_lowercase().contains(needle);

    if raw.top_level_strings().any(contains) {
        return true;
    }

    match scope {
        SearchScope::TopLevel => false,
        SearchScope::Nested => {
            raw.title_rendered()
                .and_then(|title| title.as_str())
                .is_some_and(contains)
                || raw.meta_strings().any(contains)
        }
    }
}
