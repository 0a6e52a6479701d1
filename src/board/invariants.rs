//! Conservation laws checked after every mutation.
//!
//! 1. bank coins + player coins == coins at setup
//! 2. pile cards + player cards == cards at setup
//! 3. points on unbought cards + player points == points at setup
//! 4. nothing in the bank or piles has an owner, and everything a player
//!    holds is owned by that player

use super::Board;
use crate::core::InvariantViolation;

pub(super) fn check(board: &Board) -> Result<(), InvariantViolation> {
    let bank = board.num_coins_available();
    let held_coins: usize = board.players.values().map(|p| p.coins.len()).sum();
    if bank + held_coins != board.num_total_coins {
        return Err(InvariantViolation::Coins {
            bank,
            players: held_coins,
            expected: board.num_total_coins,
        });
    }

    let piles = board.cards_remaining();
    let held_cards: usize = board.players.values().map(|p| p.cards.len()).sum();
    if piles + held_cards != board.num_total_cards {
        return Err(InvariantViolation::Cards {
            piles,
            players: held_cards,
            expected: board.num_total_cards,
        });
    }

    let unbought: u32 = board.piles.iter().flatten().map(|card| card.points).sum();
    let scored: u32 = board.players.values().map(|p| p.total_points()).sum();
    if unbought + scored != board.max_total_points {
        return Err(InvariantViolation::Points {
            unbought,
            players: scored,
            expected: board.max_total_points,
        });
    }

    check_owners(board)
}

fn check_owners(board: &Board) -> Result<(), InvariantViolation> {
    if let Some(coin) = board.bank.values().flatten().find(|coin| coin.owner.is_some()) {
        return Err(InvariantViolation::Owner {
            what: "coin",
            holder: "bank".to_string(),
            owner: coin.owner,
        });
    }
    if let Some(card) = board.piles.iter().flatten().find(|card| card.owner.is_some()) {
        return Err(InvariantViolation::Owner {
            what: "card",
            holder: "pile".to_string(),
            owner: card.owner,
        });
    }
    for (id, player) in board.players.iter() {
        if let Some(coin) = player.coins.iter().find(|coin| coin.owner != Some(id)) {
            return Err(InvariantViolation::Owner {
                what: "coin",
                holder: player.name.clone(),
                owner: coin.owner,
            });
        }
        if let Some(card) = player.cards.iter().find(|card| card.owner != Some(id)) {
            return Err(InvariantViolation::Owner {
                what: "card",
                holder: player.name.clone(),
                owner: card.owner,
            });
        }
    }
    Ok(())
}
