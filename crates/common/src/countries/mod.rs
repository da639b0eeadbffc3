//! Country code to display name lookup
//!
//! The code index is built from a static list on the first query and reused
//! afterwards. Unknown codes resolve to [`UNKNOWN_COUNTRY`].

use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

mod data;

pub use data::COUNTRIES;

/// Name returned for codes missing from the index
pub const UNKNOWN_COUNTRY: &str = "Unknown";

/// A country as listed in the static source list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Country {
    pub code: &'static str,
    pub name: &'static str,
}

/// Lazily built index from country code to display name
#[derive(Debug)]
pub struct CountryIndex {
    source: &'static [Country],
    by_code: OnceLock<HashMap<&'static str, &'static str>>,
}

impl CountryIndex {
    pub const fn new(source: &'static [Country]) -> Self {
        Self {
            source,
            by_code: OnceLock::new(),
        }
    }

    fn index(&self) -> &HashMap<&'static str, &'static str> {
        self.by_code.get_or_init(|| {
            let mut by_code = HashMap::with_capacity(self.source.len());
            // later duplicates overwrite earlier ones
            for country in self.source {
                by_code.insert(country.code, country.name);
            }

            tracing::debug!(countries = by_code.len(), "Country index built");
            by_code
        })
    }

    /// Display name for `code`, or [`UNKNOWN_COUNTRY`]
    pub fn name(&self, code: &str) -> &'static str {
        self.index().get(code).copied().unwrap_or(UNKNOWN_COUNTRY)
    }

    pub fn is_built(&self) -> bool {
        self.by_code.get().is_some()
    }

    /// Number of distinct codes; builds the index if needed
    pub fn len(&self) -> usize {
        self.index().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for CountryIndex {
    fn default() -> Self {
        Self::new(COUNTRIES)
    }
}

static COUNTRIES_BY_CODE: CountryIndex = CountryIndex::new(COUNTRIES);

/// Display name for `code` from the process-wide index over [`COUNTRIES`]
pub fn country_name(code: &str) -> &'static str {
    COUNTRIES_BY_CODE.name(code)
}

/// Set of country codes whose visitors are refused
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountryBlocklist {
    codes: HashSet<String>,
}

impl CountryBlocklist {
    /// Build from codes; entries are trimmed and upper-cased, empty ones skipped
    pub fn from_codes<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let codes = codes
            .into_iter()
            .map(|code| code.as_ref().trim().to_ascii_uppercase())
            .filter(|code| !code.is_empty())
            .collect();

        Self { codes }
    }

    /// Parse a comma-separated list such as `"KP, ru,"`
    pub fn parse(list: &str) -> Self {
        Self::from_codes(list.split(','))
    }

    /// Load the list from `BLOCKED_COUNTRIES`; empty when unset
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let list = std::env::var("BLOCKED_COUNTRIES").unwrap_or_default();
        let blocklist = Self::parse(&list);
        if !blocklist.is_empty() {
            tracing::info!(countries = blocklist.len(), "Country blocklist loaded");
        }
        blocklist
    }

    /// Whether `code` is listed; matched with the same trimming and
    /// upper-casing applied to the configured codes
    pub fn is_blocked(&self, code: &str) -> bool {
        self.codes.contains(&code.trim().to_ascii_uppercase())
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}
