pub mod agent;
pub mod classify;
pub mod config;
pub mod grid;
pub mod hazard;
pub mod replay;
pub mod snapshot;
pub mod spatial;
pub mod types;
pub mod wire;

#[cfg(test)]
mod test_support;

pub use agent::Agent;
pub use config::{AgentConfig, ConfigError};
pub use hazard::{HazardMap, HazardTracker};
pub use replay::{ReplayStep, replay_frames};
pub use snapshot::{AgentState, Entity, WorldSnapshot};
pub use types::*;
pub use wire::{ActionPacket, SnapshotError, WireGameState, parse_snapshot};
