//! Fixed-priority action rules.
//! Rules run top to bottom and the first match wins:
//! escape a bomb underfoot, dodge an imminent bomb, grab powerups, grab ammo,
//! then fight or chase the adversary.
//! Every branch is total: missing targets or blocked neighbors resolve to `Idle`.

use super::*;

/// A bomb closer to detonation than this is dodged before anything else.
pub const BOMB_URGENCY_TICKS: u32 = 4;
/// Adversary distance below which the agent bombs or retreats instead of chasing.
pub const CLOSE_COMBAT_DISTANCE: u32 = 3;

struct Items {
    bombs: Vec<Pos>,
    ammo: Vec<Pos>,
    powerups: Vec<Pos>,
}

impl Agent {
    pub(super) fn choose(&self, snapshot: &WorldSnapshot, classes: &TileClasses) -> Decision {
        let me = snapshot.me.pos;
        let candidates = classes.traversable.as_slice();
        let items = Items {
            bombs: snapshot.positions_of(EntityKind::Bomb),
            ammo: snapshot.positions_of(EntityKind::Ammo),
            powerups: snapshot.positions_of(EntityKind::PowerUp),
        };
        let powerup_in_range = self.selector.any_in_range(me, &items.powerups);
        let ammo_in_range = self.selector.any_in_range(me, &items.ammo);

        if snapshot.has_entity_at(me, EntityKind::Bomb) {
            if candidates.is_empty() {
                debug!(?me, "standing on a bomb with nowhere to go");
                return self.step(Rule::EscapeBombUnderfoot, me, None);
            }
            let (targets, mode) = if powerup_in_range {
                (&items.powerups, RankMode::Approach)
            } else if ammo_in_range {
                (&items.ammo, RankMode::Approach)
            } else {
                (&items.bombs, RankMode::Evade)
            };
            let target =
                self.selector.rank_tiles_by_distance_to_item(candidates, targets, me, mode);
            return self.step(Rule::EscapeBombUnderfoot, me, target);
        }

        if let Some(bomb) = self.selector.nearest_in_range(&items.bombs, me)
            && self.hazards.bomb_ticks(bomb) < BOMB_URGENCY_TICKS
        {
            let target = self.selector.rank_tiles(candidates, bomb, RankMode::Evade);
            return self.step(Rule::EvadeImminentBomb, me, target);
        }

        if powerup_in_range {
            let target = self.selector.rank_tiles_by_distance_to_item(
                candidates,
                &items.powerups,
                me,
                RankMode::Approach,
            );
            return self.step(Rule::CollectPowerUp, me, target);
        }

        if ammo_in_range {
            let target = self.selector.rank_tiles_by_distance_to_item(
                candidates,
                &items.ammo,
                me,
                RankMode::Approach,
            );
            return self.step(Rule::CollectAmmo, me, target);
        }

        let adversary = snapshot.adversary.pos;
        if manhattan(me, adversary) < CLOSE_COMBAT_DISTANCE {
            if snapshot.me.ammo > 0 {
                return Decision {
                    rule: Rule::BombAdversary,
                    target: None,
                    action: Action::PlaceBomb,
                };
            }
            let target = self.selector.rank_tiles(candidates, adversary, RankMode::Evade);
            return self.step(Rule::RetreatFromAdversary, me, target);
        }

        let target = self.selector.rank_tiles(candidates, adversary, RankMode::Approach);
        self.step(Rule::ChaseAdversary, me, target)
    }

    fn step(&self, rule: Rule, me: Pos, target: Option<Pos>) -> Decision {
        let action =
            target.and_then(|tile| move_to_tile(me, tile)).map_or(Action::Idle, Action::Move);
        Decision { rule, target, action }
    }
}
