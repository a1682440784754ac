//! Property tests over random seeded games: card conservation, determinism,
//! snapshot round-trips, and side-effect-free probing.

use proptest::prelude::*;

use poker_monster::{
    play_game, Agent, CardUid, Engine, EngineConfig, GameState, PlayerKind, RandomAgent, SelfPlayConfig, Side,
    SideMap,
};

fn agents(seed: u64) -> SideMap<Box<dyn Agent>> {
    SideMap::new(|side| Box::new(RandomAgent::new(seed.wrapping_add(side as u64))) as Box<dyn Agent>)
}

/// Play `steps` random actions (fewer if the game ends first) and hand every
/// intermediate state to `visit`.
fn walk(seed: u64, steps: usize, mut visit: impl FnMut(&Engine)) -> Engine {
    let mut engine = Engine::new(EngineConfig::default().with_seed(seed)).unwrap();
    let mut agent = RandomAgent::new(seed ^ 0x5eed);
    visit(&engine);
    for _ in 0..steps {
        if engine.results().is_some() {
            break;
        }
        let (_, menu) = engine.display_text();
        let legal = engine.legal_actions(&menu);
        let id = agent.choose(engine.state(), &menu, &legal).unwrap();
        assert!(engine.iterate(id).unwrap().is_legal());
        visit(&engine);
    }
    engine
}

fn every_uid() -> Vec<CardUid> {
    (0..40).map(CardUid).collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn test_cards_are_conserved(seed in any::<u64>(), steps in 1usize..400) {
        walk(seed, steps, |engine| {
            let state = engine.state();
            assert_eq!(state.all_uids(), every_uid());
            for (_, player) in state.players.iter() {
                for card in player.zones.battlefield.iter() {
                    assert!(card.is_long());
                    assert!(card.health.unwrap_or_default() > 0);
                }
                for card in player.zones.graveyard.iter().filter(|card| card.is_long()) {
                    assert_eq!(card.health, card.starting_health);
                }
            }
        });
    }

    #[test]
    fn test_menu_and_probe_agree(seed in any::<u64>(), steps in 0usize..200) {
        let engine = walk(seed, steps, |_| {});
        let state = engine.state();
        let (_, menu) = engine.display_text();

        prop_assert_eq!(engine.legal_actions(&menu), state.all_legal_action_ids(engine.table()));
        let reduced = state.legal_actions(engine.table());
        let all = state.all_legal_action_ids(engine.table());
        prop_assert!(reduced.iter().all(|id| all.contains(id)));
    }

    #[test]
    fn test_probing_never_mutates(seed in any::<u64>(), steps in 0usize..200) {
        let engine = walk(seed, steps, |_| {});
        let state = engine.state().clone();

        let _ = engine.display_text();
        let _ = state.all_legal_action_ids(engine.table());
        for id in engine.table().ids() {
            let (_, next) = state.speculate(engine.table(), id).unwrap();
            prop_assert_eq!(next.all_uids(), every_uid());
        }
        prop_assert_eq!(engine.state(), &state);
    }

    #[test]
    fn test_snapshots_round_trip(seed in any::<u64>(), steps in 0usize..200) {
        let engine = walk(seed, steps, |_| {});
        let state = engine.state();

        let from_json = GameState::from_json(&state.to_json().unwrap()).unwrap();
        prop_assert_eq!(&from_json, state);
        let from_bytes = GameState::from_bytes(&state.to_bytes().unwrap()).unwrap();
        prop_assert_eq!(&from_bytes, state);
    }

    #[test]
    fn test_loaded_snapshot_replays_identically(seed in any::<u64>(), steps in 0usize..100) {
        let engine = walk(seed, steps, |_| {});
        let snapshot = GameState::from_bytes(&engine.state().to_bytes().unwrap()).unwrap();

        let mut original = engine.clone();
        let mut restored = engine.clone();
        restored.load_state(snapshot);

        let config = SelfPlayConfig::new().with_max_steps(300);
        let a = play_game(&mut original, &mut agents(seed), &config).unwrap();
        let b = play_game(&mut restored, &mut agents(seed), &config).unwrap();
        prop_assert_eq!(a.steps, b.steps);
        prop_assert_eq!(a.winner, b.winner);
    }

    #[test]
    fn test_same_seed_same_game(seed in any::<u64>()) {
        let play = || {
            let mut engine = Engine::new(EngineConfig::default().with_seed(seed)).unwrap();
            engine.reset(PlayerKind::Computer, PlayerKind::Computer);
            play_game(&mut engine, &mut agents(seed), &SelfPlayConfig::default()).unwrap()
        };
        let (a, b) = (play(), play());
        prop_assert_eq!(&a, &b);
        prop_assert!(a.is_finished());
    }

    #[test]
    fn test_rewards_are_zero_sum(seed in any::<u64>()) {
        let mut engine = Engine::new(EngineConfig::default().with_seed(seed)).unwrap();
        let record = play_game(&mut engine, &mut agents(seed), &SelfPlayConfig::default()).unwrap();
        let rewards = record.rewards.clone().unwrap();
        prop_assert_eq!(rewards.hero + rewards.monster, 0.0);
        prop_assert!(record.steps.iter().all(|step| !step.action_text.contains("Invalid")));
        prop_assert!(record.side_steps(Side::Hero).count() + record.side_steps(Side::Monster).count() == record.len());
    }
}
