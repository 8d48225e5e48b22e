//! Round outcome codes.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Result of one player hand against the dealer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandOutcome {
    /// Player wins the hand.
    Win,
    /// Player loses the hand.
    Lose,
    /// Push (tie).
    Push,
}

/// How a single player hand compared against the dealer at showdown.
///
/// Checked in declaration order: a busted player loses even when the
/// dealer also busts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Showdown {
    /// Player went over 21.
    PlayerBust,
    /// Dealer went over 21.
    DealerBust,
    /// Player has the higher value.
    PlayerWins,
    /// Dealer has the higher value.
    DealerWins,
    /// Equal values.
    Push,
}

impl Showdown {
    /// Compares a player value against the dealer's.
    #[must_use]
    pub const fn compare(
        player_value: u8,
        player_bust: bool,
        dealer_value: u8,
        dealer_bust: bool,
    ) -> Self {
        if player_bust {
            Self::PlayerBust
        } else if dealer_bust {
            Self::DealerBust
        } else if player_value > dealer_value {
            Self::PlayerWins
        } else if dealer_value > player_value {
            Self::DealerWins
        } else {
            Self::Push
        }
    }

    /// Classifies the comparison as a win, loss or push.
    #[must_use]
    pub const fn outcome(self) -> HandOutcome {
        match self {
            Self::DealerBust | Self::PlayerWins => HandOutcome::Win,
            Self::PlayerBust | Self::DealerWins => HandOutcome::Lose,
            Self::Push => HandOutcome::Push,
        }
    }
}

/// Final result of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameResult {
    /// Player was dealt a natural and the dealer was not.
    PlayerBlackjack,
    /// Dealer was dealt a natural and the player was not.
    DealerBlackjack,
    /// Player busted.
    PlayerBust,
    /// Dealer busted.
    DealerBust,
    /// Player beat the dealer.
    PlayerWins,
    /// Dealer beat the player.
    DealerWins,
    /// Tie, including both players dealt a natural.
    Push,
    /// Both split hands won.
    BothWin,
    /// Both split hands lost.
    BothLose,
    /// Both split hands pushed.
    BothPush,
    /// One split hand won and the other lost.
    WinAndLose,
    /// One split hand won and the other pushed.
    WinAndPush,
    /// One split hand lost and the other pushed.
    LoseAndPush,
}

impl GameResult {
    /// Combines the outcomes of the main and split hands. Order does not matter.
    #[must_use]
    pub const fn from_split(main: HandOutcome, split: HandOutcome) -> Self {
        use HandOutcome::{Lose, Push, Win};

        match (main, split) {
            (Win, Win) => Self::BothWin,
            (Lose, Lose) => Self::BothLose,
            (Push, Push) => Self::BothPush,
            (Win, Push) | (Push, Win) => Self::WinAndPush,
            (Lose, Push) | (Push, Lose) => Self::LoseAndPush,
            (Win, Lose) | (Lose, Win) => Self::WinAndLose,
        }
    }

    /// Returns whether this result combines a split pair.
    #[must_use]
    pub const fn is_split(self) -> bool {
        matches!(
            self,
            Self::BothWin
                | Self::BothLose
                | Self::BothPush
                | Self::WinAndLose
                | Self::WinAndPush
                | Self::LoseAndPush
        )
    }

    /// Returns the wire code, e.g. `"player_blackjack"`.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::PlayerBlackjack => "player_blackjack",
            Self::DealerBlackjack => "dealer_blackjack",
            Self::PlayerBust => "player_bust",
            Self::DealerBust => "dealer_bust",
            Self::PlayerWins => "player_wins",
            Self::DealerWins => "dealer_wins",
            Self::Push => "push",
            Self::BothWin => "both_win",
            Self::BothLose => "both_lose",
            Self::BothPush => "both_push",
            Self::WinAndLose => "win_and_lose",
            Self::WinAndPush => "win_and_push",
            Self::LoseAndPush => "lose_and_push",
        }
    }

    /// Returns the message shown to the player.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::PlayerBlackjack => "Blackjack! You win!",
            Self::DealerBlackjack => "Dealer has Blackjack. You lose.",
            Self::PlayerBust => "Bust! You lose.",
            Self::DealerBust => "Dealer busts! You win!",
            Self::PlayerWins => "You win!",
            Self::DealerWins => "Dealer wins.",
            Self::Push => "It's a push (tie).",
            Self::BothWin => "You won both hands!",
            Self::BothLose => "You lost both hands.",
            Self::BothPush => "Both hands push (tie).",
            Self::WinAndLose => "Split result: One hand won, one hand lost.",
            Self::WinAndPush => "Split result: One hand won, one hand pushed.",
            Self::LoseAndPush => "Split result: One hand lost, one hand pushed.",
        }
    }
}

impl From<Showdown> for GameResult {
    fn from(showdown: Showdown) -> Self {
        match showdown {
            Showdown::PlayerBust => Self::PlayerBust,
            Showdown::DealerBust => Self::DealerBust,
            Showdown::PlayerWins => Self::PlayerWins,
            Showdown::DealerWins => Self::DealerWins,
            Showdown::Push => Self::Push,
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
