use crate::error::ActionError;
use crate::hand::Hand;
use crate::result::{GameResult, Showdown};
use crate::rules::DEALER_STAND_VALUE;

use super::{Game, PlayerHands};

impl Game {
    /// Dealer plays their hand according to the rules, then the round is
    /// resolved.
    ///
    /// The dealer reveals their hole card and draws until reaching 17 or
    /// higher. Soft 17 stands like any other 17. The dealer draws even when
    /// every player hand has busted.
    pub(super) fn dealer_play(&mut self) -> Result<(), ActionError> {
        self.dealer_turn = true;

        while self.dealer_hand.value() < DEALER_STAND_VALUE {
            let card = self.deck.deal()?;
            self.dealer_hand.add_card(card);
            tracing::debug!(%card, dealer_value = self.dealer_hand.value(), "dealer draws");
        }

        self.resolve();
        Ok(())
    }

    /// Compares each player hand to the dealer and records the result.
    fn resolve(&mut self) {
        let dealer_value = self.dealer_hand.value();
        let dealer_bust = self.dealer_hand.is_bust();

        let showdown = |hand: &Hand| {
            Showdown::compare(hand.value(), hand.is_bust(), dealer_value, dealer_bust)
        };

        let result = match &self.player {
            PlayerHands::Single(hand) => GameResult::from(showdown(hand)),
            PlayerHands::Split { main, split, .. } => {
                GameResult::from_split(showdown(main).outcome(), showdown(split).outcome())
            }
        };

        tracing::info!(
            result = result.code(),
            dealer_value,
            split = self.player.is_split(),
            "round resolved"
        );

        self.result = Some(result);
    }
}
