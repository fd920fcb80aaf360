use crate::models::{ConditionSet, RedirectionRule};
use anyhow::Result;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("condition set not found: {0}")]
    NotFound(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Read-only source of persisted rule configuration.
///
/// The engine never touches storage itself; callers load rules through this
/// trait and hand them to the engine by reference. Implementations impose no
/// caching obligations on callers.
pub trait RuleStore: Send + Sync {
    /// Fetch one visibility condition set by id.
    fn load_condition_set(&self, id: &str) -> StoreResult<ConditionSet>;

    /// Fetch all redirection rules, in priority order.
    fn load_redirection_rules(&self) -> StoreResult<Vec<RedirectionRule>>;
}
