//! Icon-index overrides for the pack manifest.
//!
//! Atlas updates occasionally move an icon without the pack catching up;
//! this applies explicit `id=index` corrections to the item list.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use crate::models::Pack;

/// One `id=index` override, parsed from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconOverride {
    pub id: String,
    pub index: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum OverrideParseError {
    /// Missing the `=` separator, or an empty item id
    InvalidFormat(String),
    /// The index part is not a non-negative integer
    InvalidIndex(ParseIntError),
}

impl fmt::Display for OverrideParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OverrideParseError::InvalidFormat(raw) => {
                write!(f, "invalid override '{raw}' (expected id=index)")
            }
            OverrideParseError::InvalidIndex(err) => {
                write!(f, "invalid icon index: {err}")
            }
        }
    }
}

impl std::error::Error for OverrideParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OverrideParseError::InvalidIndex(err) => Some(err),
            _ => None,
        }
    }
}

impl FromStr for IconOverride {
    type Err = OverrideParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (id, index) = s
            .split_once('=')
            .ok_or_else(|| OverrideParseError::InvalidFormat(s.to_string()))?;
        if id.is_empty() {
            return Err(OverrideParseError::InvalidFormat(s.to_string()));
        }
        let index = index
            .trim()
            .parse()
            .map_err(OverrideParseError::InvalidIndex)?;
        Ok(Self {
            id: id.to_string(),
            index,
        })
    }
}

/// What an override pass did: how many items changed, and which override
/// ids matched nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchOutcome {
    pub updated: usize,
    pub unknown: Vec<String>,
}

/// Apply overrides to the pack's item list.
///
/// Unknown ids are reported back rather than treated as errors, so one
/// stale override does not block the rest of a batch.
pub fn apply_overrides(pack: &mut Pack, overrides: &[IconOverride]) -> PatchOutcome {
    let mut updated = 0;
    let mut unknown = Vec::new();

    for patch in overrides {
        match pack.items.iter_mut().find(|item| item.id == patch.id) {
            Some(item) => {
                item.icon_index = patch.index;
                updated += 1;
            }
            None => unknown.push(patch.id.clone()),
        }
    }

    PatchOutcome { updated, unknown }
}
