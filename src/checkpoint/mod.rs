//! Checkpoint and restore for running instances.
//!
//! A checkpoint records which state an instance is in, by name, so the
//! instance can be rebuilt later against the same blueprint, possibly in
//! another process. Blueprints themselves are never serialized: the
//! program re-declares them on start-up and restores instances onto them.

use crate::core::Blueprint;
use crate::runtime::Instance;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

pub mod error;

pub use error::CheckpointError;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serializable snapshot of one instance.
///
/// # Example
///
/// ```rust
/// use switchyard::builder::BlueprintBuilder;
/// use switchyard::checkpoint::Checkpoint;
/// use switchyard::runtime::Instance;
///
/// let mut builder = BlueprintBuilder::<(), ()>::new("switch");
/// let off = builder.declare_state("off", true).unwrap();
/// let on = builder.declare_state("on", false).unwrap();
/// let flip = builder.declare_input("flip").unwrap();
/// builder.add_transition(off, flip, on, []).unwrap();
/// let blueprint = builder.freeze().unwrap();
///
/// let mut instance = Instance::new(blueprint.clone());
/// instance.dispatch(flip, &()).unwrap();
///
/// let json = Checkpoint::capture(&instance).to_json().unwrap();
/// let restored = Checkpoint::from_json(&json).unwrap().restore(blueprint).unwrap();
/// assert_eq!(restored.current_state(), on);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: Uuid,

    /// When checkpoint was created
    pub timestamp: DateTime<Utc>,

    /// Name of the blueprint the instance follows
    pub machine: String,

    /// Name of the instance's current state
    pub state: String,
}

impl Checkpoint {
    /// Snapshot the current state of `instance`.
    pub fn capture<A, R>(instance: &Instance<A, R>) -> Self {
        Self {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            machine: instance.blueprint().name().to_string(),
            state: instance.current_state_name().to_string(),
        }
    }

    /// Rebuild an instance on `blueprint` in the recorded state.
    pub fn restore<A, R>(&self, blueprint: Arc<Blueprint<A, R>>) -> Result<Instance<A, R>, CheckpointError> {
        self.check_version()?;

        if self.machine != blueprint.name() {
            return Err(CheckpointError::MachineMismatch {
                expected: blueprint.name().to_string(),
                found: self.machine.clone(),
            });
        }

        let state = blueprint
            .state_id(&self.state)
            .ok_or_else(|| CheckpointError::UnknownState(self.state.clone()))?;

        tracing::debug!(machine = %self.machine, state = %self.state, checkpoint = %self.id, "restoring instance");

        Instance::resume(blueprint, state).map_err(|_| CheckpointError::UnknownState(self.state.clone()))
    }

    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        let checkpoint: Self = serde_json::from_str(json)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))?;
        checkpoint.check_version()?;
        Ok(checkpoint)
    }

    /// Compact binary encoding.
    pub fn to_bytes(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CheckpointError> {
        let checkpoint: Self = bincode::deserialize(bytes)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))?;
        checkpoint.check_version()?;
        Ok(checkpoint)
    }

    fn check_version(&self) -> Result<(), CheckpointError> {
        if self.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            });
        }
        Ok(())
    }
}
