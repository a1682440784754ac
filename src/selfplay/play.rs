//! The self-play loop.

use tracing::{debug, info};

use super::agent::Agent;
use super::record::{GameRecord, StepRecord};
use crate::core::SideMap;
use crate::engine::{display, Engine};
use crate::error::Result;

/// Configuration for self-play.
#[derive(Clone, Debug)]
pub struct SelfPlayConfig {
    /// Maximum actions per game before it is abandoned.
    pub max_steps: usize,

    /// Whether each step stores the rendered state summaries.
    pub record_text: bool,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        Self {
            max_steps: 2_000,
            record_text: true,
        }
    }
}

impl SelfPlayConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_steps(mut self, max: usize) -> Self {
        self.max_steps = max;
        self
    }

    pub fn with_record_text(mut self, record: bool) -> Self {
        self.record_text = record;
        self
    }
}

/// Play the engine's current game to the end (or the step limit).
///
/// The caller deals the game with [`Engine::reset`]. Each step hands the
/// acting side's agent the menu and its legal ids, submits the chosen id,
/// and records the menu line together with the summaries before and after.
pub fn play_game(
    engine: &mut Engine,
    agents: &mut SideMap<Box<dyn Agent>>,
    config: &SelfPlayConfig,
) -> Result<GameRecord> {
    let mut record = GameRecord::new(engine.config().seed);

    while engine.results().is_none() && record.len() < config.max_steps {
        let side = engine.current_player();
        let (before, menu) = engine.display_text();
        let legal = engine.legal_actions(&menu);

        let Some(id) = agents[side].choose(engine.state(), &menu, &legal) else {
            debug!(%side, "agent gave up");
            break;
        };
        let action_text = engine.action_text(&menu, id).unwrap_or_default();
        engine.iterate(id)?;

        let (before, after) = if config.record_text {
            (before, display::render_state(engine.state()))
        } else {
            (String::new(), String::new())
        };
        record.push(StepRecord {
            side,
            before,
            action_id: id,
            action_text,
            after,
        });
    }

    record.rewards = engine.results();
    record.winner = engine.state().winner;
    info!(steps = record.len(), winner = ?record.winner, "self-play game done");
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{EngineConfig, PlayerKind};
    use crate::selfplay::{FirstLegalAgent, RandomAgent};

    fn agents(seed: u64) -> SideMap<Box<dyn Agent>> {
        SideMap::new(|side| Box::new(RandomAgent::new(seed + side as u64)) as Box<dyn Agent>)
    }

    #[test]
    fn test_random_game_finishes() {
        let mut engine = Engine::new(EngineConfig::default().with_seed(12)).unwrap();
        engine.reset(PlayerKind::Computer, PlayerKind::Computer);

        let record = play_game(&mut engine, &mut agents(1), &SelfPlayConfig::default()).unwrap();
        assert!(record.is_finished());
        let rewards = record.rewards.unwrap();
        assert_eq!(rewards.hero + rewards.monster, 0.0);
        assert!(record.steps.iter().all(|step| step.action_text.starts_with('[')));
    }

    #[test]
    fn test_step_limit_truncates() {
        let mut engine = Engine::new(EngineConfig::default().with_seed(12)).unwrap();
        let config = SelfPlayConfig::new().with_max_steps(3).with_record_text(false);

        let record = play_game(&mut engine, &mut agents(1), &config).unwrap();
        assert_eq!(record.len(), 3);
        assert!(!record.is_finished());
        assert!(record.rewards.is_none());
        assert!(record.steps[0].before.is_empty());
    }

    #[test]
    fn test_same_seeds_same_record() {
        let play = || {
            let mut engine = Engine::new(EngineConfig::default().with_seed(30)).unwrap();
            play_game(&mut engine, &mut agents(4), &SelfPlayConfig::default()).unwrap()
        };
        assert_eq!(play(), play());
    }

    #[test]
    fn test_after_is_next_actors_view() {
        let mut engine = Engine::new(EngineConfig::default().with_seed(17)).unwrap();
        let record = play_game(&mut engine, &mut agents(2), &SelfPlayConfig::default()).unwrap();

        let handovers = record.steps.windows(2).filter(|pair| pair[0].side != pair[1].side).count();
        assert!(handovers > 0);
        for pair in record.steps.windows(2) {
            assert_eq!(pair[0].after, pair[1].before);
        }
    }

    #[test]
    fn test_first_legal_game_is_deterministic() {
        let play = || {
            let mut engine = Engine::new(EngineConfig::default().with_seed(5)).unwrap();
            let mut agents = SideMap::new(|_| Box::new(FirstLegalAgent) as Box<dyn Agent>);
            play_game(&mut engine, &mut agents, &SelfPlayConfig::default()).unwrap()
        };
        let record = play();
        assert!(!record.is_empty());
        assert_eq!(record, play());
        assert!(record.steps.iter().all(|step| !step.action_text.contains("(Invalid)")));
    }
}
