//! Player-facing view of a game.
//!
//! Views are one-way: they hide the dealer's hole card until the dealer's
//! turn and cannot be turned back into a [`Game`]. Use
//! [`GameSnapshot`](super::GameSnapshot) for persistence.

extern crate alloc;

use alloc::vec::Vec;

use serde::Serialize;

use crate::card::Card;
use crate::hand::Hand;
use crate::result::GameResult;

use super::{ActiveHand, Game};

/// A hand with its derived values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HandView {
    /// Cards in deal order.
    pub cards: Vec<Card>,
    /// Hand value.
    pub value: u8,
    /// Whether the hand is over 21.
    pub is_bust: bool,
    /// Whether the hand is a two-card 21.
    pub is_blackjack: bool,
}

impl From<&Hand> for HandView {
    fn from(hand: &Hand) -> Self {
        Self {
            cards: hand.cards().to_vec(),
            value: hand.value(),
            is_bust: hand.is_bust(),
            is_blackjack: hand.is_blackjack(),
        }
    }
}

/// What the player can see of the dealer's hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum DealerShowing {
    /// Before the dealer's turn: the up card and how many cards are face down.
    Hidden {
        /// The dealer's first card.
        card: Card,
        /// Number of face-down cards.
        hidden_cards: usize,
    },
    /// From the dealer's turn on: the whole hand.
    Revealed(HandView),
}

/// Everything a player-facing client needs to draw the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameView {
    /// The player's main hand.
    pub player_hand: HandView,
    /// The split hand, if the player has split.
    pub split_hand: Option<HandView>,
    /// Hand currently receiving actions.
    pub active_hand: ActiveHand,
    /// The dealer's visible cards; `None` before anything is dealt.
    pub dealer_showing: Option<DealerShowing>,
    /// Whether the round is over.
    pub game_over: bool,
    /// Whether the dealer's turn has started.
    pub dealer_turn: bool,
    /// Final result once the round is over.
    pub result: Option<GameResult>,
    /// Message for `result`, empty while the round is in progress.
    pub result_message: &'static str,
    /// Whether the player may split now.
    pub can_split: bool,
}

impl Game {
    /// Returns the dealer's cards as the player may see them.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_core::{DealerShowing, Game};
    ///
    /// let game = Game::from_seed(3);
    /// match game.dealer_showing() {
    ///     Some(DealerShowing::Hidden { hidden_cards, .. }) => {
    ///         assert!(!game.is_dealer_turn());
    ///         assert_eq!(hidden_cards, 1);
    ///     }
    ///     Some(DealerShowing::Revealed(hand)) => {
    ///         assert!(game.is_dealer_turn());
    ///         assert_eq!(hand.cards.len(), 2);
    ///     }
    ///     None => unreachable!("cards were dealt"),
    /// }
    /// ```
    #[must_use]
    pub fn dealer_showing(&self) -> Option<DealerShowing> {
        let up_card = *self.dealer_hand.cards().first()?;

        if self.dealer_turn {
            Some(DealerShowing::Revealed(HandView::from(&self.dealer_hand)))
        } else {
            Some(DealerShowing::Hidden {
                card: up_card,
                hidden_cards: self.dealer_hand.len() - 1,
            })
        }
    }

    /// Returns the player-facing view of the game.
    #[must_use]
    pub fn state(&self) -> GameView {
        GameView {
            player_hand: HandView::from(self.player_hand()),
            split_hand: self.split_hand().map(HandView::from),
            active_hand: self.active_hand(),
            dealer_showing: self.dealer_showing(),
            game_over: self.is_game_over(),
            dealer_turn: self.dealer_turn,
            result: self.result,
            result_message: self.result.map_or("", GameResult::message),
            can_split: self.can_split(),
        }
    }
}
