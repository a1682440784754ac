//! Decision agents.

use crate::actions::ActionId;
use crate::core::{GameRng, GameState};

/// Chooses the next action for the acting side.
///
/// Agents see the rendered menu and the legal ids parsed from it, along
/// with the state for agents that want more than text. Returning `None`
/// abandons the game.
pub trait Agent {
    fn choose(&mut self, state: &GameState, menu: &str, legal: &[ActionId]) -> Option<ActionId>;
}

/// Picks uniformly among the legal ids.
#[derive(Clone, Debug)]
pub struct RandomAgent {
    rng: GameRng,
}

impl RandomAgent {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self { rng: GameRng::new(seed) }
    }
}

impl Agent for RandomAgent {
    fn choose(&mut self, _state: &GameState, _menu: &str, legal: &[ActionId]) -> Option<ActionId> {
        self.rng.choose(legal).copied()
    }
}

/// Always takes the lowest legal id.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstLegalAgent;

impl Agent for FirstLegalAgent {
    fn choose(&mut self, _state: &GameState, _menu: &str, legal: &[ActionId]) -> Option<ActionId> {
        legal.first().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{EngineConfig, PlayerKind};

    fn state() -> GameState {
        GameState::new_game(
            &EngineConfig::default(),
            PlayerKind::Computer,
            PlayerKind::Computer,
            GameRng::new(2),
        )
    }

    #[test]
    fn test_random_agent_stays_in_legal_set() {
        let state = state();
        let legal = [ActionId(3), ActionId(17), ActionId(42)];
        let mut agent = RandomAgent::new(8);
        for _ in 0..50 {
            let id = agent.choose(&state, "", &legal).unwrap();
            assert!(legal.contains(&id));
        }
    }

    #[test]
    fn test_random_agent_is_seeded() {
        let state = state();
        let legal: Vec<ActionId> = (0..10).map(ActionId).collect();
        let mut a = RandomAgent::new(8);
        let mut b = RandomAgent::new(8);
        for _ in 0..20 {
            assert_eq!(a.choose(&state, "", &legal), b.choose(&state, "", &legal));
        }
    }

    #[test]
    fn test_agents_give_up_on_empty_menu() {
        let state = state();
        assert_eq!(RandomAgent::new(1).choose(&state, "", &[]), None);
        assert_eq!(FirstLegalAgent.choose(&state, "", &[]), None);
        assert_eq!(FirstLegalAgent.choose(&state, "", &[ActionId(5), ActionId(1)]), Some(ActionId(5)));
    }
}
