//! Fuzzy search over the tool catalog
//!
//! Matching and ranking are delegated to [`nucleo`]. Each catalog entry is
//! matched on its title, description and path at once, with smart case and
//! smart Unicode normalisation.

use std::cell::RefCell;

use nucleo::{
    pattern::{CaseMatching, Normalization, Pattern},
    Config, Matcher,
};

use crate::tool::{ToolInfo, CATALOG};

thread_local! {
    static MATCHER: RefCell<Matcher> = RefCell::new(Matcher::new(Config::DEFAULT));
}

struct SearchEntry {
    info: &'static ToolInfo,
    haystack: String,
}

impl AsRef<str> for SearchEntry {
    fn as_ref(&self) -> &str {
        &self.haystack
    }
}

/// Catalog entries matching `query`, best match first.
///
/// A blank query returns the whole catalog in its original order.
pub fn search(query: &str) -> Vec<&'static ToolInfo> {
    search_in(query, CATALOG)
}

/// [`search`] over an arbitrary catalog
pub fn search_in(query: &str, catalog: &'static [ToolInfo]) -> Vec<&'static ToolInfo> {
    if query.trim().is_empty() {
        return catalog.iter().collect();
    }

    let entries = catalog.iter().map(|info| SearchEntry {
        info,
        haystack: format!("{} {} {}", info.title, info.description, info.href),
    });
    let pattern = Pattern::parse(query, CaseMatching::Smart, Normalization::Smart);

    MATCHER.with(|matcher| {
        pattern
            .match_list(entries, &mut matcher.borrow_mut())
            .into_iter()
            .map(|(entry, _score)| entry.info)
            .collect()
    })
}
