use agent_core::grid::manhattan;
use agent_core::{
    Action, Agent, AgentConfig, AgentId, AgentState, Direction, Entity, EntityKind, Pos,
    WorldSnapshot,
};

fn arena(me: Pos, adversary: Pos, ammo: u32) -> WorldSnapshot {
    WorldSnapshot {
        entities: Vec::new(),
        me: AgentState { id: AgentId(0), pos: me, hp: 3, ammo },
        adversary: AgentState { id: AgentId(1), pos: adversary, hp: 3, ammo: 3 },
    }
}

fn place(snapshot: &mut WorldSnapshot, pos: Pos, kind: EntityKind, owner: Option<AgentId>) {
    snapshot.entities.push(Entity { pos, kind, owner });
}

#[test]
fn standing_on_own_bomb_steps_toward_ammo() {
    let me = Pos { x: 4, y: 4 };
    let mut snapshot = arena(me, Pos { x: 0, y: 8 }, 2);
    place(&mut snapshot, me, EntityKind::Bomb, Some(AgentId(0)));
    place(&mut snapshot, Pos { x: 4, y: 5 }, EntityKind::Ammo, None);

    let action = Agent::new(AgentConfig::default()).decide(0, &snapshot);
    assert_eq!(action, Action::Move(Direction::Up));
}

#[test]
fn adjacent_adversary_with_ammo_gets_bombed() {
    let snapshot = arena(Pos { x: 0, y: 0 }, Pos { x: 1, y: 0 }, 2);
    let action = Agent::new(AgentConfig::default()).decide(0, &snapshot);
    assert_eq!(action, Action::PlaceBomb);
}

#[test]
fn adjacent_adversary_without_ammo_takes_only_open_tile() {
    let mut snapshot = arena(Pos { x: 0, y: 0 }, Pos { x: 1, y: 0 }, 0);
    // The adversary's tile is blocked by a crate so (0,1) is the lone traversable neighbor.
    place(&mut snapshot, Pos { x: 1, y: 0 }, EntityKind::DestructibleWall, None);

    let action = Agent::new(AgentConfig::default()).decide(0, &snapshot);
    assert_eq!(action, Action::Move(Direction::Up));
}

#[test]
fn distant_adversary_is_chased() {
    let me = Pos { x: 2, y: 2 };
    let adversary = Pos { x: 5, y: 5 };
    let snapshot = arena(me, adversary, 3);
    assert_eq!(manhattan(me, adversary), 6);

    let action = Agent::new(AgentConfig::default()).decide(0, &snapshot);
    let Action::Move(direction) = action else {
        panic!("expected a move toward the adversary, got {action:?}");
    };
    assert_eq!(manhattan(me.step(direction), adversary), 5);
}

#[test]
fn blast_on_the_only_exit_leaves_agent_idle() {
    let me = Pos { x: 0, y: 0 };
    let mut snapshot = arena(me, Pos { x: 8, y: 8 }, 3);
    place(&mut snapshot, me, EntityKind::Bomb, Some(AgentId(0)));
    place(&mut snapshot, Pos { x: 0, y: 1 }, EntityKind::Blast, None);
    place(&mut snapshot, Pos { x: 1, y: 0 }, EntityKind::IndestructibleWall, None);

    let action = Agent::new(AgentConfig::default()).decide(0, &snapshot);
    assert_eq!(action, Action::Idle);
}

#[test]
fn environment_style_overrides_change_urgency_timing() {
    let me = Pos { x: 4, y: 4 };
    let mut snapshot = arena(me, Pos { x: 8, y: 8 }, 3);
    place(&mut snapshot, Pos { x: 4, y: 6 }, EntityKind::Bomb, Some(AgentId(1)));

    let mut config = AgentConfig::default();
    config
        .apply_env_overrides(|name| (name == "BOMB_DURATION_TICKS").then(|| "5".to_string()))
        .expect("override");
    config.validate().expect("valid config");

    // A 5-tick bomb minus the 2-tick margin is urgent on first sighting.
    let action = Agent::new(config).decide(0, &snapshot);
    assert_eq!(action, Action::Move(Direction::Down));
}
