//! Cross-tick countdowns for bomb fuses and blast footprints.
//! This module owns the only state the agent keeps between ticks.
//! It does not decide how to react to hazards; the policy reads the counters.
//!
//! Counters are driven purely by presence: a tile is armed on first sighting and
//! counts down on every tick it is seen again, expiring when it would reach zero.
//! Tiles that vanish from the snapshot early keep their counter as it was.

use std::collections::{BTreeMap, BTreeSet};

use tracing::trace;

use crate::config::AgentConfig;
use crate::snapshot::WorldSnapshot;
use crate::types::{EntityKind, Pos};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HazardMap {
    remaining: BTreeMap<Pos, u32>,
}

impl HazardMap {
    /// Advances every tile in `present` by one tick. Duplicate tiles count once.
    pub fn observe<I>(&mut self, present: I, initial_ticks: u32)
    where
        I: IntoIterator<Item = Pos>,
    {
        debug_assert!(initial_ticks >= 1, "armed tiles must hold at least one tick");
        let present: BTreeSet<Pos> = present.into_iter().collect();
        for pos in present {
            match self.remaining.get(&pos).copied() {
                None => {
                    trace!(?pos, ticks = initial_ticks, "hazard armed");
                    self.remaining.insert(pos, initial_ticks);
                }
                Some(ticks) if ticks > 1 => {
                    self.remaining.insert(pos, ticks - 1);
                }
                Some(_) => {
                    trace!(?pos, "hazard expired");
                    self.remove(pos);
                }
            }
        }
    }

    /// Remaining ticks at `pos`, 0 when untracked.
    pub fn ticks_remaining(&self, pos: Pos) -> u32 {
        self.remaining.get(&pos).copied().unwrap_or(0)
    }

    pub fn is_active(&self, pos: Pos) -> bool {
        self.remaining.contains_key(&pos)
    }

    /// Drops `pos` if tracked. Returns whether an entry was removed.
    pub fn remove(&mut self, pos: Pos) -> bool {
        let removed = self.remaining.remove(&pos).is_some();
        if !removed {
            trace!(?pos, "hazard already absent");
        }
        removed
    }

    pub fn iter(&self) -> impl Iterator<Item = (Pos, u32)> + '_ {
        self.remaining.iter().map(|(&pos, &ticks)| (pos, ticks))
    }

    pub fn len(&self) -> usize {
        self.remaining.len()
    }

    pub fn is_empty(&self) -> bool {
        self.remaining.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HazardTracker {
    bombs: HazardMap,
    blasts: HazardMap,
    bomb_initial_ticks: u32,
    blast_initial_ticks: u32,
}

impl HazardTracker {
    pub fn new(config: &AgentConfig) -> Self {
        Self {
            bombs: HazardMap::default(),
            blasts: HazardMap::default(),
            bomb_initial_ticks: config.bomb_initial_ticks(),
            blast_initial_ticks: config.blast_initial_ticks(),
        }
    }

    /// Applies one tick of observations. Call exactly once per tick.
    pub fn update(&mut self, snapshot: &WorldSnapshot) {
        self.bombs.observe(snapshot.positions_of(EntityKind::Bomb), self.bomb_initial_ticks);
        self.blasts.observe(snapshot.positions_of(EntityKind::Blast), self.blast_initial_ticks);
    }

    pub fn bomb_ticks(&self, pos: Pos) -> u32 {
        self.bombs.ticks_remaining(pos)
    }

    pub fn blast_ticks(&self, pos: Pos) -> u32 {
        self.blasts.ticks_remaining(pos)
    }

    pub fn bombs(&self) -> &HazardMap {
        &self.bombs
    }

    pub fn blasts(&self) -> &HazardMap {
        &self.blasts
    }
}
