//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when parsing card symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Suit name is not one of the four suits.
    #[error("unrecognized suit")]
    InvalidSuit,
    /// Rank symbol is not one of the thirteen ranks.
    #[error("unrecognized rank")]
    InvalidRank,
}

/// Errors that can occur when dealing from a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// No cards left in the deck.
    #[error("cannot deal from an empty deck")]
    Empty,
}

/// Errors that can occur during player actions.
///
/// A rejected action never changes the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// No cards have been dealt yet.
    #[error("no round has been dealt")]
    NotDealt,
    /// The round is already resolved.
    #[error("the game is over")]
    GameOver,
    /// The dealer is already playing.
    #[error("it is the dealer's turn")]
    DealerTurn,
    /// The player has already split this round.
    #[error("hand has already been split")]
    AlreadySplit,
    /// The main hand is not a pair.
    #[error("cannot split this hand")]
    CannotSplit,
    /// The deck ran out mid-action.
    #[error(transparent)]
    Deal(#[from] DealError),
}

/// Errors that can occur when restoring a game from a snapshot.
///
/// Structural problems (missing fields, unknown suits or ranks) are reported
/// by the deserializer itself; these cover records that parse but describe
/// an impossible game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SnapshotError {
    /// The same card appears twice across deck and hands.
    #[error("card appears more than once")]
    DuplicateCard,
    /// `active_hand` is `split` but there is no split hand.
    #[error("split hand is active but missing")]
    SplitHandMissing,
    /// `game_over` disagrees with the presence of `result`.
    #[error("game_over does not match result")]
    ResultMismatch,
    /// `dealer_turn` disagrees with `game_over`.
    #[error("dealer_turn does not match game_over")]
    DealerTurnMismatch,
    /// `result` is a split code without a split hand, or the other way round.
    #[error("result does not match the player's hands")]
    ResultShapeMismatch,
    /// The hand in play is bust but the round was not resolved.
    #[error("active hand is bust in an unresolved game")]
    UnresolvedBust,
}
