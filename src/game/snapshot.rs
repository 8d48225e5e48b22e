//! Persistence record for a game.
//!
//! A game is rebuilt from its snapshot before every action and saved again
//! afterwards, so the snapshot carries everything, down to the order of the
//! cards left in the deck.

use serde::{Deserialize, Serialize};

use crate::card::{Card, DECK_SIZE, Rank};
use crate::deck::Deck;
use crate::error::SnapshotError;
use crate::hand::Hand;
use crate::result::GameResult;

use super::{ActiveHand, Game, PlayerHands};

/// Flat, serializable form of a [`Game`].
///
/// # Example
///
/// ```
/// use blackjack_core::{Game, GameSnapshot};
///
/// let game = Game::from_seed(9);
/// let snapshot = game.snapshot();
/// assert_eq!(snapshot.deck.cards_remaining(), 48);
/// assert_eq!(Game::try_from(snapshot).unwrap(), game);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Cards left to deal, bottom first.
    pub deck: Deck,
    /// The player's main hand.
    pub player_hand: Hand,
    /// The split hand, if the player has split.
    #[serde(default)]
    pub split_hand: Option<Hand>,
    /// Hand currently receiving actions.
    #[serde(default)]
    pub active_hand: ActiveHand,
    /// The dealer's full hand.
    pub dealer_hand: Hand,
    /// Whether the round is over.
    pub game_over: bool,
    /// Whether the dealer's turn has started.
    pub dealer_turn: bool,
    /// Final result once the round is over.
    pub result: Option<GameResult>,
}

impl Game {
    /// Returns the persistence record for this game.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::from(self.clone())
    }
}

impl From<Game> for GameSnapshot {
    fn from(game: Game) -> Self {
        let game_over = game.is_game_over();
        let active_hand = game.player.active();
        let (player_hand, split_hand) = match game.player {
            PlayerHands::Single(main) => (main, None),
            PlayerHands::Split { main, split, .. } => (main, Some(split)),
        };

        Self {
            deck: game.deck,
            player_hand,
            split_hand,
            active_hand,
            dealer_hand: game.dealer_hand,
            game_over,
            dealer_turn: game.dealer_turn,
            result: game.result,
        }
    }
}

const fn card_index(card: Card) -> usize {
    card.suit as usize * Rank::ALL.len() + card.rank as usize
}

fn ensure_unique<'a>(cards: impl IntoIterator<Item = &'a Card>) -> Result<(), SnapshotError> {
    let mut seen = [false; DECK_SIZE];
    for card in cards {
        let slot = &mut seen[card_index(*card)];
        if *slot {
            return Err(SnapshotError::DuplicateCard);
        }
        *slot = true;
    }
    Ok(())
}

impl TryFrom<GameSnapshot> for Game {
    type Error = SnapshotError;

    fn try_from(snapshot: GameSnapshot) -> Result<Self, Self::Error> {
        if snapshot.game_over != snapshot.result.is_some() {
            return Err(SnapshotError::ResultMismatch);
        }

        // The dealer plays out inside the action that starts their turn, so
        // a saved game is either still with the player or fully resolved.
        if snapshot.dealer_turn != snapshot.game_over {
            return Err(SnapshotError::DealerTurnMismatch);
        }

        ensure_unique(
            snapshot
                .deck
                .cards()
                .iter()
                .chain(snapshot.player_hand.cards())
                .chain(snapshot.split_hand.iter().flat_map(Hand::cards))
                .chain(snapshot.dealer_hand.cards()),
        )?;

        let has_split = snapshot.split_hand.is_some();
        if snapshot
            .result
            .is_some_and(|result| result.is_split() != has_split)
        {
            return Err(SnapshotError::ResultShapeMismatch);
        }

        let player = match (snapshot.split_hand, snapshot.active_hand) {
            (None, ActiveHand::Main) => PlayerHands::Single(snapshot.player_hand),
            (None, ActiveHand::Split) => return Err(SnapshotError::SplitHandMissing),
            (Some(split), active) => PlayerHands::Split {
                main: snapshot.player_hand,
                split,
                active,
            },
        };

        // A bust hand hands play on within the same action.
        if !snapshot.game_over && player.active_hand().is_bust() {
            return Err(SnapshotError::UnresolvedBust);
        }

        Ok(Self {
            deck: snapshot.deck,
            player,
            dealer_hand: snapshot.dealer_hand,
            dealer_turn: snapshot.dealer_turn,
            result: snapshot.result,
        })
    }
}
