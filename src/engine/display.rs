//! Text rendering of the game for players and agents.
//!
//! Everything is rendered from the acting player's point of view. Hidden
//! zones only appear in the phases that reveal them.

use crate::actions::{DispatchTable, Legality};
use crate::cards::Card;
use crate::core::GameState;
use crate::rules::GamePhase;

/// `[A, B]` with names sorted.
fn names<'a>(cards: impl IntoIterator<Item = &'a Card>) -> String {
    let mut names: Vec<&str> = cards.into_iter().map(|card| card.name.as_str()).collect();
    names.sort_unstable();
    format!("[{}]", names.join(", "))
}

/// `[A (2), B (4)]`, long cards with their current health.
fn names_with_health<'a>(cards: impl IntoIterator<Item = &'a Card>) -> String {
    let mut cards: Vec<&Card> = cards.into_iter().collect();
    cards.sort_by_key(|card| card.name.as_str());
    let entries: Vec<String> = cards
        .iter()
        .map(|card| format!("{} ({})", card.name, card.health.unwrap_or_default()))
        .collect();
    format!("[{}]", entries.join(", "))
}

/// The state summary.
#[must_use]
pub fn render_state(state: &GameState) -> String {
    let (me, opp) = (state.me(), state.opp());
    let mut lines = vec![
        format!("{}'s TURN (Turn {})", me.side.as_str().to_uppercase(), state.turn_number),
        format!("Game Phase: {}", state.phase),
        format!(
            "My Health: {} | My Deck Size: {} | My Power: {}",
            me.health,
            me.zones.deck.len(),
            me.power
        ),
        format!(
            "Opp Health: {} | Opp Deck Size: {} | Opp Hand Size: {} | Opp Power Cards: {}",
            opp.health,
            opp.zones.deck.len(),
            opp.zones.hand.len(),
            opp.zones.power_cards.len()
        ),
    ];

    match state.phase {
        GamePhase::DiscardingFromOppHand => lines.push(format!("Opp hand: {}", names(&opp.zones.hand))),
        GamePhase::ChoosingFromDeckTop2 => {
            lines.push(format!("My deck top 2 cards: {}", names(me.zones.deck_top(2))));
        }
        GamePhase::ChoosingUltimatumCard => lines.push(format!("My deck: {}", names(&me.zones.deck))),
        GamePhase::OppChoosingFromUltimatum => {
            let offered = state
                .resolution
                .iter()
                .flat_map(|resolution| resolution.picks().iter())
                .filter_map(|&uid| state.card(uid));
            lines.push(format!("Opp Ultimatum: {}", names(offered)));
        }
        GamePhase::ReorderingDeckTop3 => {
            lines.push(format!("My deck top 3 cards: {}", names(me.zones.deck_top(3))));
        }
        _ => {}
    }

    let zones = [
        ("My Hand", &me.zones.hand),
        ("My Power Cards", &me.zones.power_cards),
    ];
    for (label, cards) in zones {
        if !cards.is_empty() {
            lines.push(format!("{label}: {}", names(cards)));
        }
    }
    if !me.zones.battlefield.is_empty() {
        lines.push(format!("My Battlefield: {}", names_with_health(&me.zones.battlefield)));
    }
    if !opp.zones.battlefield.is_empty() {
        lines.push(format!("Opp Battlefield: {}", names_with_health(&opp.zones.battlefield)));
    }
    if !me.zones.graveyard.is_empty() {
        lines.push(format!("My Graveyard: {}", names(&me.zones.graveyard)));
    }
    if !opp.zones.graveyard.is_empty() {
        lines.push(format!("Opp Graveyard: {}", names(&opp.zones.graveyard)));
    }
    if me.monsters_pawn_buff {
        lines.push("Monster's Pawn buff is active".to_string());
    }
    if let Some(resolution) = &state.resolution {
        lines.push(format!("Resolving: {}", names(resolution.uids().filter_map(|uid| state.card(uid)))));
    }

    if state.phase == GamePhase::ViewingCardInfo {
        if let Ok(card) = state.resolving_card() {
            lines.push(format!("Power Cost: {}\n{}", card.power_cost(), card.text()));
        }
    }

    lines.join("\n")
}

/// The numbered action menu, one line per dispatchable id.
///
/// Legal ids read `[id] Variant` or `[id] Variant: Card` for selections;
/// illegal ids read `[id] (Invalid) reason`. Ids that name nothing in this
/// phase are left out.
#[must_use]
pub fn render_menu(state: &GameState, table: &DispatchTable) -> String {
    let mut lines = vec!["Available Actions:".to_string()];
    for id in table.ids() {
        let action = table.action(id, state.phase);
        match action.check(state) {
            Legality::Legal { subject } => {
                let named = subject.filter(|_| action.kind.selects_card()).and_then(|uid| state.card(uid));
                match named {
                    Some(card) => lines.push(format!("[{id}] {}: {}", action.kind, card.name)),
                    None => lines.push(format!("[{id}] {}", action.kind)),
                }
            }
            Legality::Illegal(reason) if reason.is_hidden() => {}
            Legality::Illegal(reason) => lines.push(format!("[{id}] (Invalid) {reason}")),
        }
    }
    lines.join("\n")
}

/// The menu line for `id`, if the menu has one.
#[must_use]
pub fn find_line<'a>(menu: &'a str, id: u16) -> Option<&'a str> {
    let prefix = format!("[{id}]");
    menu.lines().map(str::trim).find(|line| line.starts_with(&prefix))
}

/// Ids of every legal line in a menu.
#[must_use]
pub fn parse_legal_ids(menu: &str) -> Vec<u16> {
    menu.lines()
        .map(str::trim)
        .filter(|line| line.starts_with('[') && !line.contains("(Invalid)"))
        .filter_map(|line| {
            let end = line.find(']')?;
            line[1..end].parse().ok()
        })
        .collect()
}
