extern crate alloc;

use crate::error::ActionError;
use crate::hand::Hand;

use super::{ActiveHand, Game, PlayerHands};

impl Game {
    fn ensure_player_turn(&self) -> Result<(), ActionError> {
        if self.result.is_some() {
            return Err(ActionError::GameOver);
        }

        if self.dealer_turn {
            return Err(ActionError::DealerTurn);
        }

        if self.player.main().is_empty() {
            return Err(ActionError::NotDealt);
        }

        Ok(())
    }

    /// Ends play on the active hand: moves on to the split hand if it is
    /// still waiting, otherwise hands over to the dealer.
    fn finish_active_hand(&mut self) -> Result<(), ActionError> {
        if let PlayerHands::Split {
            active: active @ ActiveHand::Main,
            ..
        } = &mut self.player
        {
            *active = ActiveHand::Split;
            tracing::debug!("moving to split hand");
            return Ok(());
        }

        self.dealer_play()
    }

    /// Player action: Hit (draw a card to the active hand).
    ///
    /// A bust ends play on that hand. If it was the main hand of a split
    /// pair, play continues on the split hand; otherwise the dealer plays
    /// and the round is resolved.
    ///
    /// # Errors
    ///
    /// Returns an error if nothing has been dealt, the dealer's turn has
    /// started, the round is over, or the deck runs out. The game is left
    /// unchanged on error.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_core::{ActionError, Game};
    ///
    /// let mut game = Game::new();
    /// assert_eq!(game.hit(), Err(ActionError::NotDealt));
    /// ```
    pub fn hit(&mut self) -> Result<(), ActionError> {
        self.transact(|game| {
            game.ensure_player_turn()?;

            let card = game.deck.deal()?;
            let active = game.player.active();
            let hand = game.player.active_hand_mut();
            hand.add_card(card);

            let value = hand.value();
            let busted = hand.is_bust();
            tracing::debug!(hand = ?active, %card, value, busted, "player hits");

            if busted {
                game.finish_active_hand()
            } else {
                Ok(())
            }
        })
    }

    /// Player action: Stand (keep the active hand).
    ///
    /// # Errors
    ///
    /// Returns an error if nothing has been dealt, the dealer's turn has
    /// started, the round is over, or the dealer runs out of cards. The game
    /// is left unchanged on error.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        self.transact(|game| {
            game.ensure_player_turn()?;

            tracing::debug!(hand = ?game.player.active(), "player stands");
            game.finish_active_hand()
        })
    }

    /// Player action: Split (split a pair into two hands).
    ///
    /// The main hand's second card starts the split hand, then each hand
    /// receives one fresh card, main first. Play stays on the main hand.
    /// A round can be split at most once.
    ///
    /// # Errors
    ///
    /// Returns an error if nothing has been dealt, the dealer's turn has
    /// started, the round is over, the player already split, the main hand
    /// is not a pair, or the deck runs out. The game is left unchanged on
    /// error.
    pub fn split(&mut self) -> Result<(), ActionError> {
        self.transact(|game| {
            game.ensure_player_turn()?;

            let PlayerHands::Single(hand) = &game.player else {
                return Err(ActionError::AlreadySplit);
            };

            if !hand.can_split() {
                return Err(ActionError::CannotSplit);
            }

            let mut main = hand.clone();
            let split_card = main.take_split_card().ok_or(ActionError::CannotSplit)?;
            let mut split = Hand::from_cards(alloc::vec![split_card]);

            main.add_card(game.deck.deal()?);
            split.add_card(game.deck.deal()?);

            tracing::debug!(
                main_value = main.value(),
                split_value = split.value(),
                "player splits"
            );

            game.player = PlayerHands::Split {
                main,
                split,
                active: ActiveHand::Main,
            };

            Ok(())
        })
    }
}
