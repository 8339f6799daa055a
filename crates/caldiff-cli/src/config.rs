use std::path::Path;

use anyhow::Context;
use caldiff_diff::SkipSet;
use caldiff_types::QualifiedName;
use serde::{Deserialize, Serialize};

/// Skip settings loaded from a TOML file.
///
/// ```toml
/// use_default_skips = true
/// skip = ["{urn:ietf:params:xml:ns:icalendar-2.0}sequence", "x-custom"]
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DiffConfig {
    /// Start from the volatile iCalendar properties (`dtstamp`, `prodid`, ...).
    pub use_default_skips: bool,
    /// Extra names to skip, in Clark notation.
    pub skip: Vec<String>,
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self {
            use_default_skips: true,
            skip: Vec::new(),
        }
    }
}

impl DiffConfig {
    /// Read and parse a config file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn parse(text: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Resolve the configured names into a skip set.
    pub fn skip_set(&self) -> anyhow::Result<SkipSet> {
        let base = if self.use_default_skips {
            SkipSet::ical_defaults()
        } else {
            SkipSet::empty()
        };
        let extra = self
            .skip
            .iter()
            .map(|s| {
                s.parse::<QualifiedName>()
                    .with_context(|| format!("invalid skip name {s:?}"))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;
        Ok(base.iter().cloned().chain(extra).collect())
    }
}
