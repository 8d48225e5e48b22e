//! Fixed house rules.

/// Best possible hand value; anything above busts.
pub const BLACKJACK: u8 = 21;

/// The dealer draws below this value and stands at or above it,
/// soft or hard.
pub const DEALER_STAND_VALUE: u8 = 17;

/// Difference between counting an Ace as 11 and as 1.
pub const ACE_ADJUSTMENT: u8 = 10;
