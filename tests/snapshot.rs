//! Persistence and view serialization tests.

use blackjack_core::{
    ActiveHand, Card, Deck, Game, GameResult, GameSnapshot, Hand, Rank, SnapshotError, Suit,
};
use serde_json::{Value, json};

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

fn deal(draws: &[Card]) -> Game {
    let mut cards: Vec<Card> = draws.to_vec();
    cards.reverse();
    Game::deal_from(Deck::from_cards(cards)).unwrap()
}

fn split_pair() -> Game {
    let mut game = deal(&[
        card(Suit::Hearts, Rank::Eight),
        card(Suit::Clubs, Rank::Ten),
        card(Suit::Spades, Rank::Eight),
        card(Suit::Diamonds, Rank::Seven),
        card(Suit::Hearts, Rank::Three),
        card(Suit::Spades, Rank::Two),
        card(Suit::Clubs, Rank::King),
        card(Suit::Clubs, Rank::Nine),
    ]);
    game.split().unwrap();
    game
}

#[test]
fn card_serializes_with_value() {
    let json = serde_json::to_value(card(Suit::Hearts, Rank::King)).unwrap();
    assert_eq!(json, json!({ "suit": "Hearts", "rank": "K", "value": 10 }));

    let ten = serde_json::to_string(&card(Suit::Spades, Rank::Ten)).unwrap();
    assert_eq!(ten, r#"{"suit":"Spades","rank":"10","value":10}"#);
}

#[test]
fn card_value_is_recomputed_on_load() {
    let ace: Card = serde_json::from_str(r#"{"suit":"Diamonds","rank":"A"}"#).unwrap();
    assert_eq!(ace, card(Suit::Diamonds, Rank::Ace));
    assert_eq!(ace.value(), 11);

    let tampered: Card =
        serde_json::from_str(r#"{"suit":"Diamonds","rank":"A","value":1}"#).unwrap();
    assert_eq!(tampered.value(), 11);

    let original = r#"{"suit":"Clubs","rank":"7","value":7}"#;
    let reloaded: Card = serde_json::from_str(original).unwrap();
    assert_eq!(serde_json::to_string(&reloaded).unwrap(), original);
}

#[test]
fn malformed_cards_are_rejected() {
    assert!(serde_json::from_str::<Card>(r#"{"suit":"Hearts","rank":"1"}"#).is_err());
    assert!(serde_json::from_str::<Card>(r#"{"suit":"Stars","rank":"A"}"#).is_err());
    assert!(serde_json::from_str::<Card>(r#"{"suit":"Hearts"}"#).is_err());
    assert!(serde_json::from_str::<Hand>(r#"{"cards":[{"rank":"A"}]}"#).is_err());
}

#[test]
fn game_round_trips_through_json() {
    let game = Game::from_seed(17);
    let json = serde_json::to_string(&game).unwrap();
    let restored: Game = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, game);
    assert_eq!(restored.deck().cards(), game.deck().cards());
    assert_eq!(serde_json::to_string(&restored).unwrap(), json);
}

#[test]
fn restored_game_plays_identically() {
    let mut original = deal(&[
        card(Suit::Hearts, Rank::Five),
        card(Suit::Clubs, Rank::Nine),
        card(Suit::Spades, Rank::Six),
        card(Suit::Diamonds, Rank::Seven),
        card(Suit::Hearts, Rank::Four),
        card(Suit::Hearts, Rank::Two),
        card(Suit::Spades, Rank::Queen),
        card(Suit::Clubs, Rank::Three),
    ]);
    let mut restored: Game =
        serde_json::from_str(&serde_json::to_string(&original).unwrap()).unwrap();

    for game in [&mut original, &mut restored] {
        game.hit().unwrap();
        game.hit().unwrap();
        game.stand().unwrap();
    }

    assert_eq!(restored, original);
    assert_eq!(restored.dealer_hand().len(), 3);
    assert_eq!(restored.result(), Some(GameResult::DealerBust));
}

#[test]
fn snapshot_layout() {
    let game = split_pair();
    let json = serde_json::to_value(&game).unwrap();

    assert_eq!(json["active_hand"], "main");
    assert_eq!(json["game_over"], false);
    assert_eq!(json["dealer_turn"], false);
    assert_eq!(json["result"], Value::Null);
    assert_eq!(json["deck"]["cards"].as_array().unwrap().len(), 2);
    assert_eq!(json["player_hand"]["cards"][1]["rank"], "3");
    assert_eq!(json["split_hand"]["cards"][0]["suit"], "Spades");
    assert_eq!(json["dealer_hand"]["cards"][1]["rank"], "7");
}

#[test]
fn split_game_resumes_after_reload() {
    let mut game = split_pair();
    game.stand().unwrap();

    let mut restored: Game = serde_json::from_value(serde_json::to_value(&game).unwrap()).unwrap();
    assert_eq!(restored.active_hand(), ActiveHand::Split);
    assert_eq!(restored.split_hand().unwrap().value(), 10);

    restored.hit().unwrap();
    restored.stand().unwrap();

    // main 11, split 20 against 17
    assert_eq!(restored.result(), Some(GameResult::WinAndLose));
    let json = serde_json::to_value(&restored).unwrap();
    assert_eq!(json["result"], "win_and_lose");
    assert_eq!(json["game_over"], true);
    assert_eq!(json["dealer_turn"], true);
}

#[test]
fn missing_split_fields_default_to_single_hand() {
    let mut json = serde_json::to_value(Game::from_seed(2)).unwrap();
    let record = json.as_object_mut().unwrap();
    record.remove("split_hand");
    record.remove("active_hand");

    let game: Game = serde_json::from_value(json).unwrap();
    assert!(game.split_hand().is_none());
    assert_eq!(game.active_hand(), ActiveHand::Main);
}

#[test]
fn missing_deck_is_rejected() {
    let mut json = serde_json::to_value(Game::from_seed(2)).unwrap();
    json.as_object_mut().unwrap().remove("deck");
    assert!(serde_json::from_value::<Game>(json).is_err());
}

#[test]
fn inconsistent_snapshots_are_rejected() {
    let base = deal(&[
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Clubs, Rank::Nine),
        card(Suit::Spades, Rank::Eight),
        card(Suit::Diamonds, Rank::Queen),
        card(Suit::Hearts, Rank::Two),
    ])
    .snapshot();
    assert!(Game::try_from(base.clone()).is_ok());

    let snapshot = GameSnapshot {
        active_hand: ActiveHand::Split,
        ..base.clone()
    };
    assert_eq!(
        Game::try_from(snapshot).unwrap_err(),
        SnapshotError::SplitHandMissing
    );

    let snapshot = GameSnapshot {
        game_over: true,
        dealer_turn: true,
        ..base.clone()
    };
    assert_eq!(
        Game::try_from(snapshot).unwrap_err(),
        SnapshotError::ResultMismatch
    );

    let snapshot = GameSnapshot {
        dealer_turn: true,
        ..base.clone()
    };
    assert_eq!(
        Game::try_from(snapshot).unwrap_err(),
        SnapshotError::DealerTurnMismatch
    );

    let snapshot = GameSnapshot {
        game_over: true,
        dealer_turn: true,
        result: Some(GameResult::BothWin),
        ..base.clone()
    };
    assert_eq!(
        Game::try_from(snapshot.clone()).unwrap_err(),
        SnapshotError::ResultShapeMismatch
    );
    assert!(serde_json::from_value::<Game>(serde_json::to_value(&snapshot).unwrap()).is_err());

    let resolved = GameSnapshot {
        game_over: true,
        dealer_turn: true,
        result: Some(GameResult::PlayerWins),
        ..base.clone()
    };
    assert!(Game::try_from(resolved).is_ok());

    let mut snapshot = base.clone();
    snapshot.player_hand.add_card(card(Suit::Spades, Rank::King));
    assert_eq!(snapshot.player_hand.value(), 28);
    assert_eq!(
        Game::try_from(snapshot).unwrap_err(),
        SnapshotError::UnresolvedBust
    );

    let mut snapshot = base;
    let duplicate = snapshot.player_hand.cards()[0];
    snapshot.dealer_hand.add_card(duplicate);
    assert_eq!(
        Game::try_from(snapshot.clone()).unwrap_err(),
        SnapshotError::DuplicateCard
    );
    assert!(serde_json::from_value::<Game>(serde_json::to_value(&snapshot).unwrap()).is_err());
}

#[test]
fn split_results_require_split_hands() {
    let split = split_pair().snapshot();

    for result in [
        GameResult::PlayerWins,
        GameResult::PlayerBlackjack,
        GameResult::Push,
    ] {
        let snapshot = GameSnapshot {
            game_over: true,
            dealer_turn: true,
            result: Some(result),
            ..split.clone()
        };
        assert_eq!(
            Game::try_from(snapshot).unwrap_err(),
            SnapshotError::ResultShapeMismatch,
            "{result}"
        );
    }

    let snapshot = GameSnapshot {
        game_over: true,
        dealer_turn: true,
        result: Some(GameResult::WinAndLose),
        ..split.clone()
    };
    assert!(Game::try_from(snapshot).is_ok());

    let mut snapshot = split;
    snapshot.active_hand = ActiveHand::Split;
    let split_hand = snapshot.split_hand.as_mut().unwrap();
    split_hand.add_card(card(Suit::Hearts, Rank::Queen));
    split_hand.add_card(card(Suit::Diamonds, Rank::King));
    assert!(split_hand.is_bust());
    assert_eq!(
        Game::try_from(snapshot).unwrap_err(),
        SnapshotError::UnresolvedBust
    );
}

#[test]
fn view_hides_hole_card() {
    let game = deal(&[
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Clubs, Rank::Nine),
        card(Suit::Spades, Rank::Eight),
        card(Suit::Diamonds, Rank::Queen),
    ]);

    let view = serde_json::to_value(game.state()).unwrap();
    assert_eq!(
        view["dealer_showing"],
        json!({
            "card": { "suit": "Clubs", "rank": "9", "value": 9 },
            "hidden_cards": 1
        })
    );
    assert!(view.get("dealer_hand").is_none());
    assert!(!view.to_string().contains(r#""rank":"Q""#));
    assert_eq!(view["player_hand"]["value"], 18);
    assert_eq!(view["player_hand"]["is_bust"], false);
    assert_eq!(view["player_hand"]["is_blackjack"], false);
    assert_eq!(view["split_hand"], Value::Null);
    assert_eq!(view["can_split"], false);
    assert_eq!(view["result_message"], "");
}

#[test]
fn view_reveals_dealer_after_resolution() {
    let mut game = deal(&[
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Clubs, Rank::Nine),
        card(Suit::Spades, Rank::Queen),
        card(Suit::Diamonds, Rank::Eight),
    ]);
    game.stand().unwrap();

    let view = serde_json::to_value(game.state()).unwrap();
    assert_eq!(view["dealer_showing"]["cards"].as_array().unwrap().len(), 2);
    assert_eq!(view["dealer_showing"]["value"], 17);
    assert_eq!(view["result"], "player_wins");
    assert_eq!(view["result_message"], "You win!");
    assert_eq!(view["game_over"], true);
}

#[test]
fn result_codes_round_trip() {
    let code = serde_json::to_string(&GameResult::LoseAndPush).unwrap();
    assert_eq!(code, r#""lose_and_push""#);
    assert_eq!(
        serde_json::from_str::<GameResult>(r#""player_blackjack""#).unwrap(),
        GameResult::PlayerBlackjack
    );
    assert!(serde_json::from_str::<GameResult>(r#""surrender""#).is_err());
}
