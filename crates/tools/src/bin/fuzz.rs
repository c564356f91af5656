use std::collections::BTreeMap;
use std::io;

use agent_core::grid::{BOARD_SIZE, immediate_ring, in_bounds};
use agent_core::{
    Action, Agent, AgentConfig, AgentId, AgentState, Entity, EntityKind, Pos, Rule,
    WorldSnapshot,
};
use anyhow::{Context, Result, bail};
use clap::Parser;
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 1000)]
    ticks: u32,
}

const KINDS: [EntityKind; 6] = [
    EntityKind::IndestructibleWall,
    EntityKind::DestructibleWall,
    EntityKind::Bomb,
    EntityKind::Blast,
    EntityKind::Ammo,
    EntityKind::PowerUp,
];

fn choose<T: Clone>(rng: &mut ChaCha8Rng, slice: &[T]) -> T {
    let p = rng.next_u64() as usize % slice.len();
    slice[p].clone()
}

fn random_pos(rng: &mut ChaCha8Rng) -> Pos {
    let size = BOARD_SIZE as u64;
    Pos { x: (rng.next_u64() % size) as i32, y: (rng.next_u64() % size) as i32 }
}

fn random_entity(rng: &mut ChaCha8Rng) -> Entity {
    let kind = choose(rng, &KINDS);
    let owner = (kind == EntityKind::Bomb).then(|| AgentId((rng.next_u64() % 2) as u8));
    Entity { pos: random_pos(rng), kind, owner }
}

fn agent_state(rng: &mut ChaCha8Rng, id: u8) -> AgentState {
    AgentState { id: AgentId(id), pos: random_pos(rng), hp: 3, ammo: (rng.next_u64() % 4) as u32 }
}

fn check_invariants(agent: &Agent, snapshot: &WorldSnapshot, action: Action) -> Result<()> {
    let me = snapshot.me.pos;
    if let Action::Move(direction) = action {
        let next = me.step(direction);
        if !in_bounds(next) || !immediate_ring(me).contains(&next) {
            bail!("Invariant failed: move {direction:?} from {me:?} leaves the board");
        }
        if snapshot.entity_at(next).is_some_and(|entity| entity.kind.is_wall()) {
            bail!("Invariant failed: move {direction:?} from {me:?} enters a wall");
        }
        if snapshot.has_entity_at(next, EntityKind::Blast) {
            bail!("Invariant failed: move {direction:?} from {me:?} enters a blast");
        }
    }
    let hazards = agent.hazards();
    let mut counters = hazards.bombs().iter().chain(hazards.blasts().iter());
    if let Some((pos, _)) = counters.find(|&(_, ticks)| ticks == 0) {
        bail!("Invariant failed: tracked hazard at {pos:?} has no ticks left");
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    println!("Starting Fuzz harness on seed {} for {} ticks...", args.seed, args.ticks);
    let config = AgentConfig::from_env().context("Invalid agent config in environment")?;
    let mut agent = Agent::new(config);
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    let mut snapshot = WorldSnapshot {
        entities: (0..rng.next_u64() % 30).map(|_| random_entity(&mut rng)).collect(),
        me: agent_state(&mut rng, 0),
        adversary: agent_state(&mut rng, 1),
    };
    let mut rules: BTreeMap<String, u32> = BTreeMap::new();

    for tick in 0..u64::from(args.ticks) {
        let decision = agent.evaluate(tick, &snapshot);
        check_invariants(&agent, &snapshot, decision.action)
            .with_context(|| format!("seed {} tick {tick}", args.seed))?;
        *rules.entry(format!("{:?}", decision.rule)).or_default() += 1;

        // Drift the world a little so hazards stay on the board for several ticks.
        if let Action::Move(direction) = decision.action {
            snapshot.me.pos = snapshot.me.pos.step(direction);
        }
        if decision.rule == Rule::BombAdversary {
            snapshot.entities.push(Entity {
                pos: snapshot.me.pos,
                kind: EntityKind::Bomb,
                owner: Some(snapshot.me.id),
            });
        }
        if rng.next_u64() % 4 == 0 && !snapshot.entities.is_empty() {
            let index = rng.next_u64() as usize % snapshot.entities.len();
            snapshot.entities.remove(index);
        }
        if rng.next_u64() % 4 == 0 {
            snapshot.entities.push(random_entity(&mut rng));
        }
        if rng.next_u64() % 8 == 0 {
            snapshot.adversary = agent_state(&mut rng, 1);
        }
        debug!(tick, entities = snapshot.entities.len(), "world drifted");
    }

    println!("Fuzz run complete.");
    for (rule, count) in &rules {
        println!("{rule}: {count}");
    }

    Ok(())
}
