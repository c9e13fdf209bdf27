//! Pagination configuration: global defaults plus per-collection policies,
//! read from TOML and validated once at load time.

use cursorpage_core::order::{OrderingParseError, OrderingSpec};
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fs, io, path::Path};
use thiserror::Error as ThisError;

pub const DEFAULT_MAX_PAGE_SIZE: u32 = 50;

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("failed to read pagination config '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse pagination config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("max_page_size for {scope} must be greater than zero")]
    InvalidMaxPageSize { scope: String },

    #[error("invalid order_by for collection '{collection}': {source}")]
    InvalidOrdering {
        collection: String,
        #[source]
        source: OrderingParseError,
    },
}

///
/// CursorFormat
///
/// How cursor values travel in request parameters.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CursorFormat {
    /// Bare non-negative integer identifiers.
    #[default]
    Plain,
    /// Opaque hex tokens produced by the cursor token codec.
    Token,
}

///
/// CollectionPolicy
///
/// Effective pagination policy for one collection.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CollectionPolicy {
    pub order: OrderingSpec,
    pub max_page_size: u32,
    pub strict: bool,
    pub cursor_format: CursorFormat,
}

///
/// Defaults
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Defaults {
    pub max_page_size: u32,
    pub strict: bool,
    pub cursor_format: CursorFormat,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            max_page_size: DEFAULT_MAX_PAGE_SIZE,
            strict: false,
            cursor_format: CursorFormat::Plain,
        }
    }
}

///
/// CollectionConfig
///
/// Per-collection overrides; unset fields inherit `Defaults`.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CollectionConfig {
    pub order_by: String,
    #[serde(default)]
    pub max_page_size: Option<u32>,
    #[serde(default)]
    pub strict: Option<bool>,
    #[serde(default)]
    pub cursor_format: Option<CursorFormat>,
}

///
/// PaginationConfig
///
/// Validated configuration. Every deserialization path runs the same checks,
/// so a config embedded in a larger application document is never unchecked.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(try_from = "RawPaginationConfig")]
pub struct PaginationConfig {
    defaults: Defaults,
    collections: BTreeMap<String, CollectionConfig>,

    #[serde(skip)]
    orderings: BTreeMap<String, OrderingSpec>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawPaginationConfig {
    #[serde(default)]
    defaults: Defaults,
    #[serde(default)]
    collections: BTreeMap<String, CollectionConfig>,
}

impl TryFrom<RawPaginationConfig> for PaginationConfig {
    type Error = ConfigError;

    // Resolve every order_by identifier once; call sites only see OrderingSpec.
    fn try_from(raw: RawPaginationConfig) -> Result<Self, Self::Error> {
        if raw.defaults.max_page_size == 0 {
            return Err(ConfigError::InvalidMaxPageSize {
                scope: "defaults".to_string(),
            });
        }

        let mut orderings = BTreeMap::new();
        for (name, collection) in &raw.collections {
            if collection.max_page_size == Some(0) {
                return Err(ConfigError::InvalidMaxPageSize {
                    scope: format!("collection '{name}'"),
                });
            }

            let order = OrderingSpec::parse(&collection.order_by).map_err(|source| {
                ConfigError::InvalidOrdering {
                    collection: name.clone(),
                    source,
                }
            })?;
            orderings.insert(name.clone(), order);
        }

        Ok(Self {
            defaults: raw.defaults,
            collections: raw.collections,
            orderings,
        })
    }
}

impl PaginationConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let raw: RawPaginationConfig = toml::from_str(source)?;

        Self::try_from(raw)
    }

    /// Read, parse, and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        Self::from_toml_str(&source)
    }

    #[must_use]
    pub const fn defaults(&self) -> &Defaults {
        &self.defaults
    }

    #[must_use]
    pub const fn collections(&self) -> &BTreeMap<String, CollectionConfig> {
        &self.collections
    }

    /// Effective policy for a configured collection.
    #[must_use]
    pub fn policy(&self, collection: &str) -> Option<CollectionPolicy> {
        let config = self.collections.get(collection)?;
        let order = self.orderings.get(collection)?.clone();

        Some(CollectionPolicy {
            order,
            max_page_size: config
                .max_page_size
                .unwrap_or(self.defaults.max_page_size),
            strict: config.strict.unwrap_or(self.defaults.strict),
            cursor_format: config
                .cursor_format
                .unwrap_or(self.defaults.cursor_format),
        })
    }

    /// Policy for an ad-hoc ordering that only inherits the defaults.
    #[must_use]
    pub const fn default_policy(&self, order: OrderingSpec) -> CollectionPolicy {
        CollectionPolicy {
            order,
            max_page_size: self.defaults.max_page_size,
            strict: self.defaults.strict,
            cursor_format: self.defaults.cursor_format,
        }
    }
}

///
/// TESTS
///
