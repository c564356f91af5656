//! Per-tick decision entry point.
//! `Agent` owns the hazard countdowns and threads them through classification and policy.
//! It does not own transport, wire decoding, or packet encoding.

use tracing::debug;

use crate::classify::{TileClasses, classify_tiles};
use crate::config::AgentConfig;
use crate::grid::{immediate_ring, manhattan};
use crate::hazard::HazardTracker;
use crate::snapshot::WorldSnapshot;
use crate::spatial::{RankMode, Selector};
use crate::types::*;

mod encoder;
mod policy;

pub use encoder::move_to_tile;
pub use policy::{BOMB_URGENCY_TICKS, CLOSE_COMBAT_DISTANCE};

#[derive(Clone, Debug)]
pub struct Agent {
    config: AgentConfig,
    hazards: HazardTracker,
    selector: Selector,
}

impl Agent {
    pub fn new(config: AgentConfig) -> Self {
        let hazards = HazardTracker::new(&config);
        let selector = Selector::new(config.min_distance);
        Self { config, hazards, selector }
    }

    /// Updates hazard state from `snapshot` and picks this tick's action.
    pub fn decide(&mut self, tick: u64, snapshot: &WorldSnapshot) -> Action {
        self.evaluate(tick, snapshot).action
    }

    /// Like [`Agent::decide`], also reporting which rule fired.
    pub fn evaluate(&mut self, tick: u64, snapshot: &WorldSnapshot) -> Decision {
        self.hazards.update(snapshot);

        let ring = immediate_ring(snapshot.me.pos);
        let classes = classify_tiles(&ring, snapshot, self.hazards.blasts());
        debug!(
            tick,
            me = ?snapshot.me,
            adversary = ?snapshot.adversary,
            bombs = self.hazards.bombs().len(),
            blasts = self.hazards.blasts().len(),
            empty = classes.empty.len(),
            safe = classes.safe.len(),
            traversable = ?classes.traversable,
            "tick observed"
        );

        let decision = self.choose(snapshot, &classes);
        debug!(
            tick,
            rule = ?decision.rule,
            target = ?decision.target,
            action = ?decision.action,
            "decided"
        );
        decision
    }

    /// Detonation request for the first bomb this agent owns, or `Idle` if it owns none.
    pub fn detonate_request(&self, snapshot: &WorldSnapshot) -> Action {
        snapshot.first_own_bomb().map_or(Action::Idle, Action::Detonate)
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    pub fn hazards(&self) -> &HazardTracker {
        &self.hazards
    }
}
