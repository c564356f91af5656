use crate::{
    agent::Agent,
    config::AgentConfig,
    snapshot::WorldSnapshot,
    types::{Action, Decision, Rule},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayStep {
    pub tick: u64,
    pub decision: Decision,
}

impl ReplayStep {
    pub fn action(&self) -> Action {
        self.decision.action
    }

    pub fn rule(&self) -> Rule {
        self.decision.rule
    }
}

/// Runs a fresh agent over `frames` in order, one decision per frame.
pub fn replay_frames<I>(config: &AgentConfig, frames: I) -> Vec<ReplayStep>
where
    I: IntoIterator<Item = (u64, WorldSnapshot)>,
{
    let mut agent = Agent::new(config.clone());
    frames
        .into_iter()
        .map(|(tick, snapshot)| ReplayStep { tick, decision: agent.evaluate(tick, &snapshot) })
        .collect()
}
