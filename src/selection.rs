//! Helpers used to filter which chains a run visits.

use std::collections::BTreeSet;

/// Trait describing selection filters for chains.
pub trait ChainInclusion {
  /// Returns `true` when the chain with `handle` should be fixed.
  fn is_included(&self, handle: &str) -> bool;
}

/// Include/exclude rules over chain handles.
#[derive(Debug, Clone, Default)]
pub struct ChainSelection {
  include: Option<BTreeSet<String>>,
  exclude: BTreeSet<String>,
}

impl ChainSelection {
  /// Build a selection from raw handle lists. An empty include list selects every chain.
  pub fn from_lists(
    include: impl IntoIterator<Item = String>,
    exclude: impl IntoIterator<Item = String>,
  ) -> Self {
    let include = normalise_list(include);
    let exclude = normalise_list(exclude);

    Self {
      include: (!include.is_empty()).then_some(include),
      exclude,
    }
  }

  /// Determine whether a chain should be fixed.
  pub fn is_included(&self, handle: &str) -> bool {
    if self.exclude.contains(handle) {
      return false;
    }

    match &self.include {
      Some(include) => include.contains(handle),
      None => true,
    }
  }

  /// Returns true when no filtering rules are active.
  #[cfg(test)]
  fn is_unfiltered(&self) -> bool {
    self.include.is_none() && self.exclude.is_empty()
  }
}

impl ChainInclusion for ChainSelection {
  fn is_included(&self, handle: &str) -> bool {
    ChainSelection::is_included(self, handle)
  }
}

/// Convert a list of raw handles into a sorted, de-duplicated set.
///
/// Handles are trimmed and lower-cased; empty entries are discarded.
fn normalise_list(values: impl IntoIterator<Item = String>) -> BTreeSet<String> {
  values
    .into_iter()
    .map(|value| value.trim().trim_matches('/').to_ascii_lowercase())
    .filter(|value| !value.is_empty())
    .collect()
}
