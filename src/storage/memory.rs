use crate::models::{ConditionSet, RedirectionRule};
use crate::storage::{RuleStore, StoreError, StoreResult};

/// In-memory rule store, for tests and embedding hosts that manage rule
/// lifecycles themselves.
#[derive(Debug, Default)]
pub struct MemoryStore {
    condition_sets: Vec<ConditionSet>,
    redirections: Vec<RedirectionRule>,
}

impl MemoryStore {
    pub fn new(condition_sets: Vec<ConditionSet>, redirections: Vec<RedirectionRule>) -> Self {
        Self {
            condition_sets,
            redirections,
        }
    }
}

impl RuleStore for MemoryStore {
    fn load_condition_set(&self, id: &str) -> StoreResult<ConditionSet> {
        self.condition_sets
            .iter()
            .find(|set| set.id == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    fn load_redirection_rules(&self) -> StoreResult<Vec<RedirectionRule>> {
        Ok(self.redirections.clone())
    }
}
