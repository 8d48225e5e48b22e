//! Game engine and state management.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::deck::Deck;
use crate::error::{ActionError, DealError};
use crate::hand::Hand;
use crate::result::GameResult;

mod actions;
mod dealer;
pub mod snapshot;
pub mod state;
pub mod view;

pub use snapshot::GameSnapshot;
pub use state::{ActiveHand, Phase, PlayerHands};
pub use view::{DealerShowing, GameView, HandView};

/// One round of single-player blackjack, from the deal to the result.
///
/// The game owns its deck and every hand. It holds no randomness and no
/// session: callers inject an RNG to start a round and persist the game
/// between actions through [`GameSnapshot`], which is also the game's serde
/// representation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "GameSnapshot", try_from = "GameSnapshot")]
pub struct Game {
    /// Cards left to deal.
    deck: Deck,
    /// The player's hand or split pair.
    player: PlayerHands,
    /// The dealer's hand.
    dealer_hand: Hand,
    /// Whether the dealer's hole card is revealed.
    dealer_turn: bool,
    /// Final result, set exactly when the round is over.
    result: Option<GameResult>,
}

impl Game {
    /// Creates a game with a full unshuffled deck and nothing dealt.
    #[must_use]
    pub fn new() -> Self {
        Self {
            deck: Deck::new(),
            player: PlayerHands::default(),
            dealer_hand: Hand::new(),
            dealer_turn: false,
            result: None,
        }
    }

    /// Deals a new round from a deck shuffled with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_core::Game;
    ///
    /// let game = Game::from_seed(42);
    /// assert_eq!(game.player_hand().len(), 2);
    /// assert_eq!(game.dealer_hand().len(), 2);
    /// assert_eq!(game.deck().cards_remaining(), 48);
    /// assert_eq!(game, Game::from_seed(42));
    /// ```
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        let mut game = Self::new();
        game.start_new_game(&mut ChaCha8Rng::seed_from_u64(seed));
        game
    }

    /// Starts a new round: fresh shuffled deck, empty hands, opening deal.
    ///
    /// The player receives the first and third cards, the dealer the second
    /// and fourth. Naturals are settled immediately.
    #[expect(
        clippy::missing_panics_doc,
        reason = "a fresh deck always covers the opening deal"
    )]
    pub fn start_new_game<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let mut deck = Deck::new();
        deck.shuffle(rng);

        *self = Self::deal_from(deck).expect("a full deck covers the opening deal");
    }

    /// Starts a new round dealing from `deck` exactly as given, top card first.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck holds fewer than four cards.
    pub fn deal_from(deck: Deck) -> Result<Self, DealError> {
        let mut game = Self {
            deck,
            player: PlayerHands::default(),
            dealer_hand: Hand::new(),
            dealer_turn: false,
            result: None,
        };

        let mut player = Hand::new();
        player.add_card(game.deck.deal()?);
        game.dealer_hand.add_card(game.deck.deal()?);
        player.add_card(game.deck.deal()?);
        game.dealer_hand.add_card(game.deck.deal()?);

        let natural = match (player.is_blackjack(), game.dealer_hand.is_blackjack()) {
            (true, true) => Some(GameResult::Push),
            (true, false) => Some(GameResult::PlayerBlackjack),
            (false, true) => Some(GameResult::DealerBlackjack),
            (false, false) => None,
        };
        game.player = PlayerHands::Single(player);

        if let Some(result) = natural {
            game.dealer_turn = true;
            game.result = Some(result);
            tracing::info!(result = result.code(), "round settled on the deal");
        }

        tracing::debug!(
            player_value = game.player.main().value(),
            cards_remaining = game.deck.cards_remaining(),
            "new game dealt"
        );

        Ok(game)
    }

    /// Returns the deck.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the player's hands.
    #[must_use]
    pub const fn player_hands(&self) -> &PlayerHands {
        &self.player
    }

    /// Returns the player's main hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        self.player.main()
    }

    /// Returns the split hand, if the player has split.
    #[must_use]
    pub const fn split_hand(&self) -> Option<&Hand> {
        self.player.split()
    }

    /// Returns the player hand currently in play.
    #[must_use]
    pub const fn active_hand(&self) -> ActiveHand {
        self.player.active()
    }

    /// Returns the dealer's full hand, hole card included.
    ///
    /// Use [`Game::dealer_showing`] for what the player may see.
    #[must_use]
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer_hand
    }

    /// Returns whether the round is over.
    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        self.result.is_some()
    }

    /// Returns whether the dealer's turn has started.
    #[must_use]
    pub const fn is_dealer_turn(&self) -> bool {
        self.dealer_turn
    }

    /// Returns the final result once the round is over.
    #[must_use]
    pub const fn result(&self) -> Option<GameResult> {
        self.result
    }

    /// Returns the current phase of the round.
    #[must_use]
    pub fn phase(&self) -> Phase {
        match self.result {
            Some(result) => Phase::Resolved(result),
            None if self.dealer_turn => Phase::DealerTurn,
            None if self.player.main().is_empty() => Phase::Dealing,
            None => Phase::PlayerTurn(self.player.active()),
        }
    }

    /// Returns whether a split is currently allowed.
    #[must_use]
    pub fn can_split(&self) -> bool {
        matches!(&self.player, PlayerHands::Single(hand) if hand.can_split()) && !self.dealer_turn
    }

    /// Runs `action` against a copy of the game and keeps the copy only if
    /// the action succeeds.
    fn transact(
        &mut self,
        action: impl FnOnce(&mut Self) -> Result<(), ActionError>,
    ) -> Result<(), ActionError> {
        let mut next = self.clone();
        match action(&mut next) {
            Ok(()) => {
                *self = next;
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, "action rejected");
                Err(err)
            }
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
