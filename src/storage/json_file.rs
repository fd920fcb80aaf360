use crate::models::{ConditionSet, RedirectionRule};
use crate::storage::{RuleStore, StoreError, StoreResult};
use anyhow::Context;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::info;

/// The on-disk rule document: visibility condition sets plus the prioritized
/// redirection list, using the stored-config field names.
#[derive(Debug, Default, Deserialize)]
struct RuleDocument {
    #[serde(rename = "conditionSets", default)]
    condition_sets: Vec<ConditionSet>,
    #[serde(default)]
    redirections: Vec<RedirectionRule>,
}

/// Rule store backed by a single JSON document loaded at open time.
pub struct JsonFileStore {
    document: RuleDocument,
}

impl JsonFileStore {
    /// Load and parse the rule document at `path`.
    pub fn open(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read rule document at {}", path.display()))?;
        let store = Self::from_json_str(&raw)
            .with_context(|| format!("failed to parse rule document at {}", path.display()))?;
        info!(
            path = %path.display(),
            condition_sets = store.document.condition_sets.len(),
            redirections = store.document.redirections.len(),
            "loaded rule document"
        );
        Ok(store)
    }

    /// Parse a rule document from a JSON string.
    pub fn from_json_str(raw: &str) -> anyhow::Result<Self> {
        let document: RuleDocument = serde_json::from_str(raw)?;
        Ok(Self { document })
    }
}

impl RuleStore for JsonFileStore {
    fn load_condition_set(&self, id: &str) -> StoreResult<ConditionSet> {
        self.document
            .condition_sets
            .iter()
            .find(|set| set.id == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    fn load_redirection_rules(&self) -> StoreResult<Vec<RedirectionRule>> {
        Ok(self.document.redirections.clone())
    }
}
