//! Engine facade.
//!
//! `Engine` is the only entry point outside callers need: reset a game,
//! submit action ids, and read the game back as text or rewards.
//!
//! ```
//! use poker_monster::{Engine, EngineConfig, PlayerKind};
//!
//! let mut engine = Engine::new(EngineConfig::default().with_seed(7)).unwrap();
//! engine.reset(PlayerKind::Computer, PlayerKind::Computer);
//!
//! let (_, menu) = engine.display_text();
//! let first = engine.legal_actions(&menu)[0];
//! assert!(engine.iterate(first).unwrap().is_legal());
//! ```

pub mod display;

use tracing::{info, warn};

use crate::actions::{ActionId, DispatchTable, Legality};
use crate::cards::registry;
use crate::core::{EngineConfig, GameRng, GameState, PlayerKind, Side, SideMap};
use crate::error::{EngineError, Result};

/// Runs games of Poker Monster.
#[derive(Clone, Debug)]
pub struct Engine {
    config: EngineConfig,
    table: DispatchTable,
    /// Each reset forks a fresh game RNG from this one.
    rng: GameRng,
    state: GameState,
}

impl Engine {
    /// Validate the configuration and the card catalogue, build the
    /// dispatch table, and deal a first game between two computers.
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        registry::validate()?;
        let table = DispatchTable::standard()?;
        let mut rng = GameRng::new(config.seed);
        let state = GameState::new_game(&config, PlayerKind::Computer, PlayerKind::Computer, rng.fork());
        Ok(Self { config, table, rng, state })
    }

    /// Start a new game.
    pub fn reset(&mut self, hero: PlayerKind, monster: PlayerKind) {
        self.state = GameState::new_game(&self.config, hero, monster, self.rng.fork());
        info!(hero = ?hero, monster = ?monster, first = %self.state.active(), "game reset");
    }

    /// Submit an action id for the acting player.
    ///
    /// Returns the legality; an illegal id leaves the game unchanged apart
    /// from the action counter. Once the game has a winner every id is
    /// refused with [`EngineError::GameFinished`].
    pub fn iterate(&mut self, id: ActionId) -> Result<Legality> {
        if let Some(winner) = self.state.winner {
            warn!(%id, %winner, "action submitted after game end");
            return Err(EngineError::GameFinished);
        }
        self.table.action(id, self.state.phase).enact(&mut self.state)
    }

    /// The state summary and the action menu.
    #[must_use]
    pub fn display_text(&self) -> (String, String) {
        (
            display::render_state(&self.state),
            display::render_menu(&self.state, &self.table),
        )
    }

    /// The menu line for `id`.
    #[must_use]
    pub fn action_text(&self, menu: &str, id: ActionId) -> Option<String> {
        display::find_line(menu, id.raw()).map(str::to_string)
    }

    /// Every legal id listed in a menu.
    #[must_use]
    pub fn legal_actions(&self, menu: &str) -> Vec<ActionId> {
        display::parse_legal_ids(menu).into_iter().map(ActionId).collect()
    }

    /// Terminal rewards, or `None` while the game runs.
    #[must_use]
    pub fn results(&self) -> Option<SideMap<f64>> {
        self.state.winner.map(|winner| winner.rewards())
    }

    /// The side that acts next.
    #[must_use]
    pub fn current_player(&self) -> Side {
        self.state.active()
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Continue from a snapshot.
    pub fn load_state(&mut self, state: GameState) {
        self.state = state;
    }

    #[must_use]
    pub fn table(&self) -> &DispatchTable {
        &self.table
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub fn num_actions(&self) -> u16 {
        self.table.num_actions()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::ReservedAction;
    use crate::rules::Winner;

    fn engine() -> Engine {
        Engine::new(EngineConfig::default().with_seed(3)).unwrap()
    }

    #[test]
    fn test_rejects_bad_config() {
        let err = Engine::new(EngineConfig::default().max_hand_size(0)).unwrap_err();
        assert!(matches!(err, EngineError::InvalidConfig(_)));
    }

    #[test]
    fn test_reset_deals_fresh_game() {
        let mut engine = engine();
        engine.reset(PlayerKind::Human, PlayerKind::Computer);
        let state = engine.state();
        assert_eq!(state.players.hero.kind, PlayerKind::Human);
        assert_eq!(state.players.monster.kind, PlayerKind::Computer);
        assert_eq!(state.players.hero.zones.hand.len(), 4);
        assert_eq!(engine.num_actions(), 44);
        assert!(engine.results().is_none());
    }

    #[test]
    fn test_same_seed_same_games() {
        let mut a = engine();
        let mut b = engine();
        a.reset(PlayerKind::Computer, PlayerKind::Computer);
        b.reset(PlayerKind::Computer, PlayerKind::Computer);
        assert_eq!(a.state(), b.state());
        assert_eq!(a.display_text(), b.display_text());
    }

    #[test]
    fn test_menu_lists_end_turn() {
        let engine = engine();
        let (summary, menu) = engine.display_text();
        assert!(summary.contains("Game Phase: Awaiting input."));
        assert!(menu.starts_with("Available Actions:"));

        let end_turn = engine.table().reserved(ReservedAction::EndTurnOrInfo);
        assert_eq!(engine.action_text(&menu, end_turn).as_deref(), Some("[42] EndTurn"));
        assert!(engine.legal_actions(&menu).contains(&end_turn));
    }

    #[test]
    fn test_iterate_after_game_end_is_refused() {
        let mut engine = engine();
        let mut state = engine.state().clone();
        state.players.hero.health = 0;
        state.check_game_over();
        engine.load_state(state);

        assert_eq!(engine.state().winner, Some(Winner::Monster));
        let rewards = engine.results().unwrap();
        assert_eq!(rewards.hero, -1.0);
        assert_eq!(rewards.monster, 1.0);
        assert!(matches!(engine.iterate(ActionId(42)), Err(EngineError::GameFinished)));
    }
}
