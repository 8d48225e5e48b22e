//! Game state types.

use serde::{Deserialize, Serialize};

use crate::hand::Hand;
use crate::result::GameResult;

/// Which player hand receives hits and stands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActiveHand {
    /// The original hand.
    #[default]
    Main,
    /// The hand created by splitting.
    Split,
}

/// Where the round currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing has been dealt yet.
    Dealing,
    /// Waiting for the player to act on the given hand.
    PlayerTurn(ActiveHand),
    /// Dealer is drawing.
    ///
    /// The dealer plays out inside the action that ends the player's turn,
    /// and restored games must already be resolved once the dealer's turn
    /// has started, so [`Game::phase`](super::Game::phase) never returns
    /// this for a game held by a caller.
    DealerTurn,
    /// Round has ended.
    Resolved(GameResult),
}

/// The player's hands: either one, or a split pair with a selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerHands {
    /// No split this round.
    Single(Hand),
    /// The pair has been split; `active` says which hand is in play.
    Split {
        /// The original hand.
        main: Hand,
        /// The hand holding the original second card.
        split: Hand,
        /// Hand currently receiving actions.
        active: ActiveHand,
    },
}

impl PlayerHands {
    /// Returns the original hand.
    #[must_use]
    pub const fn main(&self) -> &Hand {
        match self {
            Self::Single(main) | Self::Split { main, .. } => main,
        }
    }

    /// Returns the split hand, if any.
    #[must_use]
    pub const fn split(&self) -> Option<&Hand> {
        match self {
            Self::Single(_) => None,
            Self::Split { split, .. } => Some(split),
        }
    }

    /// Returns the hand currently receiving actions.
    #[must_use]
    pub const fn active(&self) -> ActiveHand {
        match self {
            Self::Single(_) => ActiveHand::Main,
            Self::Split { active, .. } => *active,
        }
    }

    /// Returns whether the pair has been split.
    #[must_use]
    pub const fn is_split(&self) -> bool {
        matches!(self, Self::Split { .. })
    }

    pub(super) const fn active_hand(&self) -> &Hand {
        match self {
            Self::Single(main)
            | Self::Split {
                main,
                active: ActiveHand::Main,
                ..
            } => main,
            Self::Split {
                split,
                active: ActiveHand::Split,
                ..
            } => split,
        }
    }

    pub(super) fn active_hand_mut(&mut self) -> &mut Hand {
        match self {
            Self::Single(main)
            | Self::Split {
                main,
                active: ActiveHand::Main,
                ..
            } => main,
            Self::Split {
                split,
                active: ActiveHand::Split,
                ..
            } => split,
        }
    }
}

impl Default for PlayerHands {
    fn default() -> Self {
        Self::Single(Hand::new())
    }
}
