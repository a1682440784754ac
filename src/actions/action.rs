//! Action legality and execution.
//!
//! ## Contract
//!
//! - [`Action::check`] reads the state and reports a [`Legality`]. It never
//!   mutates anything, so probing is just calling it on a shared borrow.
//! - [`Action::execute`] assumes the check passed and applies the action,
//!   possibly advancing the phase.
//! - [`Action::enact`] checks, counts the attempt, and on success executes
//!   and runs the post-action checks.
//!
//! Multi-step cards keep their progress in the state's [`Resolution`];
//! each step either records a pick or, once the last choice is in, plays
//! the card and returns to awaiting input.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use super::dispatch::ActionId;
use super::kind::ActionKind;
use super::reason::IllegalReason;
use crate::cards::{Card, CardKind, CardName};
use crate::core::{CardUid, GameState, Side};
use crate::effects::{EffectResolver, Picks, Resolution, Selection};
use crate::error::{EngineError, Result};
use crate::rules::{policy_for, GamePhase, LegalityPolicy};
use crate::zones::Zone;

/// Outcome of a legality check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Legality {
    /// The action may be taken. `subject` is the card a selection names.
    Legal { subject: Option<CardUid> },
    Illegal(IllegalReason),
}

impl Legality {
    pub const LEGAL: Legality = Legality::Legal { subject: None };

    const fn on(uid: CardUid) -> Self {
        Legality::Legal { subject: Some(uid) }
    }

    #[must_use]
    pub const fn is_legal(self) -> bool {
        matches!(self, Legality::Legal { .. })
    }

    #[must_use]
    pub const fn reason(self) -> Option<IllegalReason> {
        match self {
            Legality::Legal { .. } => None,
            Legality::Illegal(reason) => Some(reason),
        }
    }

    #[must_use]
    pub const fn subject(self) -> Option<CardUid> {
        match self {
            Legality::Legal { subject } => subject,
            Legality::Illegal(_) => None,
        }
    }
}

impl From<IllegalReason> for Legality {
    fn from(reason: IllegalReason) -> Self {
        Legality::Illegal(reason)
    }
}

/// A dispatched action: a variant and the id it was submitted as.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Action {
    pub kind: ActionKind,
    pub id: ActionId,
}

impl Action {
    #[must_use]
    pub const fn new(kind: ActionKind, id: ActionId) -> Self {
        Self { kind, id }
    }

    // === Legality ===

    /// Whether the action may be taken in `state`, and why not.
    #[must_use]
    pub fn check(&self, state: &GameState) -> Legality {
        let policy = policy_for(state.me().kind);
        let uid = self.id.as_card();
        let (me, opp) = (&state.me().zones, &state.opp().zones);

        match self.kind {
            ActionKind::Invalid => IllegalReason::InvalidSelection.into(),
            ActionKind::EndTurn => Legality::LEGAL,
            ActionKind::TargetHero | ActionKind::TargetMonster => match state.resolving_card() {
                Ok(card) if card.name.effect().targets_players() => Legality::LEGAL,
                _ => IllegalReason::InvalidSelection.into(),
            },
            ActionKind::GetCardInfo | ActionKind::Cancel => {
                if policy.may_use_menu() {
                    Legality::LEGAL
                } else {
                    IllegalReason::ComputersCantDo.into()
                }
            }
            ActionKind::SelectFromHand => {
                let Some(card) = me.find(Zone::Hand, uid) else {
                    return IllegalReason::InvalidSelection.into();
                };
                let dead_end = state.phase != GamePhase::HandFullDiscarding
                    && policy.requires_continuation()
                    && !Self::check_face_up(state, card, policy).is_legal()
                    && !Self::check_face_down(state, card, policy).is_legal();
                if dead_end {
                    IllegalReason::NoFurtherMoves.into()
                } else {
                    Legality::on(uid)
                }
            }
            ActionKind::PlayFaceUp => match state.resolving_card() {
                Ok(card) => Self::check_face_up(state, card, policy),
                Err(_) => IllegalReason::InvalidSelection.into(),
            },
            ActionKind::PlayFaceDown => match state.resolving_card() {
                Ok(card) => Self::check_face_down(state, card, policy),
                Err(_) => IllegalReason::InvalidSelection.into(),
            },
            ActionKind::SelectFromBattlefield => {
                if !me.contains(Zone::Battlefield, uid) && !opp.contains(Zone::Battlefield, uid) {
                    IllegalReason::InvalidSelection.into()
                } else if policy.veto_battlefield_target(state, uid) {
                    IllegalReason::WithheldFromAi.into()
                } else {
                    Legality::on(uid)
                }
            }
            ActionKind::SelectFromOwnBattlefield => Self::member(me.contains(Zone::Battlefield, uid), uid),
            ActionKind::SelectFromOppHand => Self::member(opp.contains(Zone::Hand, uid), uid),
            ActionKind::SelectFromDeckTop2 => Self::member(me.deck_top(2).any(|c| c.uid == uid), uid),
            ActionKind::SelectFromGraveyard => {
                Self::distinct_pick(state, me.contains(Zone::Graveyard, uid), uid)
            }
            ActionKind::SelectFromDeckTop3 => {
                Self::distinct_pick(state, me.deck_top(3).any(|c| c.uid == uid), uid)
            }
            ActionKind::SelectFromDeck => Self::check_ultimatum_pick(state, uid),
            ActionKind::SelectFromUltimatum => Self::member(Self::picks(state).contains(&uid), uid),
        }
    }

    /// Face-up legality for `card` on behalf of the acting player.
    ///
    /// Also used to look ahead from a hand pick, before the card is
    /// actually selected.
    pub fn check_face_up(state: &GameState, card: &Card, policy: &dyn LegalityPolicy) -> Legality {
        let (me, opp) = (state.me(), state.opp());
        if opp.controls(CardName::TheSun) && state.card_played_this_turn {
            return IllegalReason::EnemyHasTheSun.into();
        }

        let affordable = card.power_cost() <= me.power;
        match card.kind() {
            CardKind::Short => {
                if card.name == CardName::NobleSacrifice && me.zones.battlefield.is_empty() {
                    IllegalReason::NoSacrifice.into()
                } else if policy.veto_face_up(state, card) {
                    IllegalReason::WithheldFromAi.into()
                } else if me.monsters_pawn_buff || affordable {
                    Legality::LEGAL
                } else {
                    IllegalReason::NotEnoughPower.into()
                }
            }
            CardKind::Long if affordable => Legality::LEGAL,
            CardKind::Long => IllegalReason::NotEnoughPower.into(),
        }
    }

    /// Face-down legality for `card` on behalf of the acting player.
    pub fn check_face_down(state: &GameState, card: &Card, policy: &dyn LegalityPolicy) -> Legality {
        if state.opp().controls(CardName::TheMoon) {
            IllegalReason::EnemyHasTheMoon.into()
        } else if state.me().power_plays_left < 1 {
            IllegalReason::CantPlayAnotherPowerCard.into()
        } else if policy.veto_face_down(state, card) {
            IllegalReason::WithheldFromAi.into()
        } else {
            Legality::LEGAL
        }
    }

    fn member(found: bool, uid: CardUid) -> Legality {
        if found {
            Legality::on(uid)
        } else {
            IllegalReason::InvalidSelection.into()
        }
    }

    fn distinct_pick(state: &GameState, found: bool, uid: CardUid) -> Legality {
        if !found {
            IllegalReason::InvalidSelection.into()
        } else if Self::picks(state).contains(&uid) {
            IllegalReason::MustPickDifferentCard.into()
        } else {
            Legality::on(uid)
        }
    }

    fn check_ultimatum_pick(state: &GameState, uid: CardUid) -> Legality {
        let deck = &state.me().zones.deck;
        let Some(card) = deck.iter().find(|c| c.uid == uid) else {
            return IllegalReason::InvalidSelection.into();
        };
        let picks = Self::picks(state);
        if picks.contains(&uid) {
            return IllegalReason::MustPickDifferentCard.into();
        }

        // A deck holding a single name may offer two of it.
        let first_name = picks.first().and_then(|&first| state.card(first)).map(|c| c.name);
        let deck_has_two_names = deck.iter().any(|c| Some(c.name) != deck.front().map(|f| f.name));
        if first_name == Some(card.name) && deck_has_two_names {
            IllegalReason::MustHaveDifferentName.into()
        } else {
            Legality::on(uid)
        }
    }

    fn picks(state: &GameState) -> &[CardUid] {
        state.resolution.as_ref().map(Resolution::picks).unwrap_or_default()
    }

    // === Execution ===

    /// Apply the action. Assumes [`check`](Self::check) passed.
    pub fn execute(&self, state: &mut GameState) -> Result<()> {
        let side = state.active();
        let uid = self.id.as_card();

        match self.kind {
            ActionKind::Invalid => Err(EngineError::NotExecutable {
                action_id: self.id.raw(),
                phase: state.phase,
            }),
            ActionKind::TargetHero => Self::target_player(state, Side::Hero),
            ActionKind::TargetMonster => Self::target_player(state, Side::Monster),
            ActionKind::GetCardInfo => {
                state.phase = GamePhase::ViewingCardInfo;
                Ok(())
            }
            ActionKind::Cancel => {
                state.reset_resolution();
                Ok(())
            }
            ActionKind::EndTurn => {
                if state.me().zones.hand.len() > state.config.max_hand_size {
                    state.phase = GamePhase::HandFullDiscarding;
                    Ok(())
                } else {
                    state.reset_resolution();
                    state.turn_transition()
                }
            }
            ActionKind::SelectFromHand if state.phase == GamePhase::HandFullDiscarding => {
                state.me_mut().discard(uid)?;
                if state.me().zones.hand.len() <= state.config.max_hand_size {
                    state.reset_resolution();
                    state.turn_transition()?;
                }
                Ok(())
            }
            ActionKind::SelectFromHand => {
                state.resolution = Some(Resolution::Selected { card: uid });
                state.phase = GamePhase::PlayingSelectedCard;
                Ok(())
            }
            ActionKind::PlayFaceUp => Self::play_face_up(state),
            ActionKind::PlayFaceDown => {
                let card = Self::selected(state)?;
                state.play_face_down(side, card)?;
                state.reset_resolution();
                Ok(())
            }
            ActionKind::SelectFromBattlefield => {
                let card = Self::selected(state)?;
                Self::finish(state, side, card, Selection::Target(uid))
            }
            ActionKind::SelectFromOwnBattlefield => {
                let card = Self::selected(state)?;
                if state.opp().zones.hand.is_empty() {
                    Self::finish(state, side, card, Selection::Sacrifice { sacrifice: uid, discard: None })
                } else {
                    state.resolution = Some(Resolution::Sacrifice { card, sacrifice: uid });
                    state.phase = GamePhase::DiscardingFromOppHand;
                    Ok(())
                }
            }
            ActionKind::SelectFromOppHand => match state.resolution {
                Some(Resolution::Sacrifice { card, sacrifice }) => {
                    Self::finish(state, side, card, Selection::Sacrifice { sacrifice, discard: Some(uid) })
                }
                _ => Err(Self::unexpected(state)),
            },
            ActionKind::SelectFromDeckTop2 => {
                let card = Self::selected(state)?;
                if state.me().zones.deck.len() == 1 {
                    state.me_mut().draw(1);
                    state.reset_resolution();
                    Ok(())
                } else {
                    Self::finish(state, side, card, Selection::Peek { chosen: uid })
                }
            }
            ActionKind::SelectFromGraveyard => {
                let Some(Resolution::Graveyard { card, mut chosen }) = state.resolution.clone() else {
                    return Err(Self::unexpected(state));
                };
                chosen.push(uid);
                if chosen.len() == 3 || chosen.len() == state.me().zones.graveyard.len() {
                    Self::finish(state, side, card, Selection::Cards(chosen))
                } else {
                    state.resolution = Some(Resolution::Graveyard { card, chosen });
                    Ok(())
                }
            }
            ActionKind::SelectFromDeckTop3 => {
                let Some(Resolution::Reorder { card, mut chosen }) = state.resolution.clone() else {
                    return Err(Self::unexpected(state));
                };
                chosen.push(uid);
                if chosen.len() == 3 || chosen.len() == state.me().zones.deck.len() {
                    Self::finish(state, side, card, Selection::Cards(chosen))
                } else {
                    state.resolution = Some(Resolution::Reorder { card, chosen });
                    Ok(())
                }
            }
            ActionKind::SelectFromDeck => {
                let Some(Resolution::Ultimatum { card, mut offered }) = state.resolution.clone() else {
                    return Err(Self::unexpected(state));
                };
                offered.push(uid);
                let complete = offered.len() == 2;
                state.resolution = Some(Resolution::Ultimatum { card, offered });
                if complete {
                    state.phase = GamePhase::OppChoosingFromUltimatum;
                    state.pass_priority();
                }
                Ok(())
            }
            ActionKind::SelectFromUltimatum => {
                let (card, offered) = match &state.resolution {
                    Some(Resolution::Ultimatum { card, offered }) if offered.len() == 2 => {
                        (*card, [offered[0], offered[1]])
                    }
                    _ => return Err(Self::unexpected(state)),
                };
                state.pass_priority();
                let caster = state.active();
                Self::finish(state, caster, card, Selection::Ultimatum { offered, chosen: uid })
            }
        }
    }

    /// Face-up play of the selected card. Cards that need more choices
    /// move into their phase; everything else resolves now.
    fn play_face_up(state: &mut GameState) -> Result<()> {
        let side = state.active();
        let (card, name) = {
            let card = state.resolving_card()?;
            (card.uid, card.name)
        };

        let next = match name {
            CardName::LastStand if state.me().zones.graveyard.is_empty() => None,
            CardName::LastStand => {
                state.resolution = Some(Resolution::Graveyard { card, chosen: Picks::new() });
                Some(GamePhase::SelectingGraveyardCard)
            }
            CardName::Reconsider => {
                state.resolution = Some(Resolution::Reorder { card, chosen: Picks::new() });
                Some(GamePhase::ReorderingDeckTop3)
            }
            CardName::NobleSacrifice => Some(GamePhase::SacrificingLongCard),
            CardName::GoAllIn => Some(GamePhase::ChoosingGoAllInTarget),
            CardName::Fold => Some(GamePhase::ChoosingFoldTarget),
            CardName::PokerFace => Some(GamePhase::ChoosingPokerFaceTarget),
            CardName::CheapShot => Some(GamePhase::ChoosingCheapShotTarget),
            CardName::Ultimatum if state.me().zones.deck.len() == 1 => {
                state.me_mut().draw(1);
                state.reset_resolution();
                return Ok(());
            }
            CardName::Ultimatum => {
                state.resolution = Some(Resolution::Ultimatum { card, offered: SmallVec::new() });
                Some(GamePhase::ChoosingUltimatumCard)
            }
            CardName::Peek => Some(GamePhase::ChoosingFromDeckTop2),
            _ => None,
        };

        match next {
            Some(phase) => {
                state.phase = phase;
                Ok(())
            }
            None => Self::finish(state, side, card, Selection::None),
        }
    }

    /// A player-targeting card aimed at `target`: the effect is applied to
    /// the player directly and the card is then played without it.
    fn target_player(state: &mut GameState, target: Side) -> Result<()> {
        let side = state.active();
        let (card, name) = {
            let card = state.resolving_card()?;
            (card.uid, card.name)
        };
        EffectResolver::resolve_player_target(state, side, name, target)?;
        state.play_face_up(side, card, &Selection::None, true)?;
        state.reset_resolution();
        Ok(())
    }

    fn finish(state: &mut GameState, side: Side, card: CardUid, selection: Selection) -> Result<()> {
        state.play_face_up(side, card, &selection, false)?;
        state.reset_resolution();
        Ok(())
    }

    fn selected(state: &GameState) -> Result<CardUid> {
        state.resolving_card().map(|card| card.uid)
    }

    fn unexpected(state: &GameState) -> EngineError {
        match &state.resolution {
            None => EngineError::MissingResolution { phase: state.phase },
            Some(resolution) => EngineError::UnexpectedResolution {
                phase: state.phase,
                found: resolution.flow().to_string(),
            },
        }
    }

    // === Enactment ===

    /// Check, count the attempt, and if legal execute and run the
    /// post-action checks.
    ///
    /// Illegal actions change nothing but the acting player's action
    /// counter. Faults during execution come back as
    /// [`EngineError::ExecutionFault`].
    pub fn enact(&self, state: &mut GameState) -> Result<Legality> {
        let legality = self.check(state);
        state.me_mut().action_number += 1;
        if !legality.is_legal() {
            return Ok(legality);
        }

        let phase = state.phase;
        let resolution = state.resolution_names().join(", ");
        debug!(action = self.kind.name(), id = %self.id, %phase, "enact");

        self.execute(state)
            .and_then(|()| state.run_checks())
            .map_err(|source| EngineError::ExecutionFault {
                action: self.kind.name(),
                action_id: self.id.raw(),
                phase,
                resolution,
                source: Box::new(source),
            })?;

        if state.phase != phase {
            debug!(from = %phase, to = %state.phase, "phase change");
        }
        Ok(legality)
    }
}
