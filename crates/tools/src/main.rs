use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use agent_core::{
    ActionPacket, AgentConfig, ReplayStep, WireGameState, WorldSnapshot, replay_frames,
};
use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Recorded game states, one JSON document per line
    #[arg(short, long)]
    frames: PathBuf,
    /// Optional TOML file with agent tuning values
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn load_config(path: Option<&Path>) -> Result<AgentConfig> {
    let mut config = match path {
        Some(path) => AgentConfig::load(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => AgentConfig::default(),
    };
    config
        .apply_env_overrides(|name| env::var(name).ok())
        .context("Invalid config override in environment")?;
    config.validate().context("Invalid agent config")?;
    Ok(config)
}

/// Decodes every non-blank line; frames without a `tick` field use their line index.
fn read_frames(path: &Path) -> Result<Vec<(u64, WorldSnapshot)>> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read frames file: {}", path.display()))?;
    let mut frames = Vec::new();
    for (index, line) in data.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let state = WireGameState::from_json(line)
            .with_context(|| format!("Failed to decode game state on line {}", index + 1))?;
        let tick = state.tick.unwrap_or(index as u64);
        let snapshot = WorldSnapshot::try_from(state)
            .with_context(|| format!("Invalid game state on line {}", index + 1))?;
        frames.push((tick, snapshot));
    }
    Ok(frames)
}

fn format_step(step: &ReplayStep) -> Result<String> {
    let packet = match ActionPacket::from_action(step.action()) {
        Some(packet) => packet.to_json().context("Failed to encode action packet")?,
        None => "-".to_string(),
    };
    Ok(format!("{}\t{:?}\t{:?}\t{}", step.tick, step.rule(), step.action(), packet))
}

fn run(args: &Args) -> Result<Vec<String>> {
    let config = load_config(args.config.as_deref())?;
    let frames = read_frames(&args.frames)?;
    info!(frames = frames.len(), ?config, "replaying recorded game");
    replay_frames(&config, frames).iter().map(format_step).collect()
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    for line in run(&args)? {
        println!("{line}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const FRAME: &str = r#"{"connection":{"agent_number":0},"agent_state":{"0":{"coordinates":[0,0],"hp":3,"inventory":{"bombs":1}},"1":{"coordinates":[1,0],"hp":3,"inventory":{"bombs":1}}},"entities":[]}"#;
    const TICKED_FRAME: &str = r#"{"connection":{"agent_number":0},"agent_state":{"0":{"coordinates":[4,4],"hp":3,"inventory":{"bombs":0}},"1":{"coordinates":[8,8],"hp":3,"inventory":{"bombs":1}}},"entities":[{"x":4,"y":6,"type":"a"}],"tick":17}"#;

    #[test]
    fn replays_each_line_and_prints_packets() {
        let dir = tempdir().expect("tempdir");
        let frames = dir.path().join("game.jsonl");
        fs::write(&frames, format!("{FRAME}\n\n{TICKED_FRAME}\n")).expect("write frames");

        let lines = run(&Args { frames, config: None }).expect("replay should succeed");
        assert_eq!(
            lines,
            vec![
                "0\tBombAdversary\tPlaceBomb\t{\"type\":\"bomb\"}".to_string(),
                "17\tCollectAmmo\tMove(Up)\t{\"type\":\"move\",\"action\":\"up\"}".to_string(),
            ]
        );
    }

    #[test]
    fn idle_steps_print_a_dash() {
        const WALLED_IN: &str = r#"{"connection":{"agent_number":0},"agent_state":{"0":{"coordinates":[4,4],"hp":3,"inventory":{"bombs":0}},"1":{"coordinates":[8,8],"hp":3,"inventory":{"bombs":1}}},"entities":[{"x":4,"y":5,"type":"m"},{"x":4,"y":3,"type":"m"},{"x":3,"y":4,"type":"w"},{"x":5,"y":4,"type":"o"}],"tick":17}"#;
        let dir = tempdir().expect("tempdir");
        let frames = dir.path().join("game.jsonl");
        fs::write(&frames, WALLED_IN).expect("write frames");

        let lines = run(&Args { frames, config: None }).expect("replay should succeed");
        assert_eq!(lines, vec!["17\tChaseAdversary\tIdle\t-".to_string()]);
    }

    #[test]
    fn radius_from_config_file_still_reaches_edge_pickups() {
        let dir = tempdir().expect("tempdir");
        let frames = dir.path().join("game.jsonl");
        let config = dir.path().join("agent.toml");
        fs::write(&frames, TICKED_FRAME).expect("write frames");
        fs::write(&config, "min_distance = 2\n").expect("write config");

        let lines = run(&Args { frames, config: Some(config) }).expect("replay should succeed");
        assert_eq!(
            lines,
            vec!["17\tCollectAmmo\tMove(Up)\t{\"type\":\"move\",\"action\":\"up\"}".to_string()]
        );
    }

    #[test]
    fn bad_line_is_reported_with_its_number() {
        let dir = tempdir().expect("tempdir");
        let frames = dir.path().join("game.jsonl");
        fs::write(&frames, format!("{FRAME}\nnot json\n")).expect("write frames");

        let err = run(&Args { frames, config: None }).expect_err("second line is malformed");
        assert!(format!("{err:#}").contains("line 2"), "{err:#}");
    }
}
