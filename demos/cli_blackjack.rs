//! CLI blackjack example.
//!
//! The game is kept only as a JSON snapshot between commands and rebuilt
//! before each one, the way a web session would store it. Run with
//! `RUST_LOG=debug` to see engine events.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use blackjack_core::{ActiveHand, Card, DealerShowing, Game, GameView, HandView, Suit};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    println!("Blackjack CLI example (type 'q' to quit)");

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<u64>().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_secs()
        });
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let mut session = new_session(&mut rng);

    loop {
        let mut game = restore(&session, &mut rng);
        let view = game.state();
        print_table(&view);

        if view.game_over {
            println!("{}", view.result_message);
            match prompt_line("Play again? (y/n): ").as_str() {
                "y" | "yes" | "" => {
                    session = new_session(&mut rng);
                    continue;
                }
                _ => {
                    println!("Goodbye.");
                    break;
                }
            }
        }

        println!("{}", format_actions(&view));
        let result = match prompt_line("Action: ").as_str() {
            "h" | "hit" => game.hit(),
            "s" | "stand" => game.stand(),
            "p" | "split" => game.split(),
            "n" | "new" => {
                session = new_session(&mut rng);
                continue;
            }
            "q" | "quit" => return,
            _ => {
                println!("Unknown action.");
                continue;
            }
        };

        match result {
            Ok(()) => session = save(&game),
            Err(err) => println!("Cannot do that: {err}"),
        }
    }
}

fn new_session(rng: &mut ChaCha8Rng) -> String {
    let mut game = Game::new();
    game.start_new_game(rng);
    save(&game)
}

fn save(game: &Game) -> String {
    serde_json::to_string(game).unwrap_or_default()
}

/// Rebuilds the game, replacing a corrupted session with a fresh deal.
fn restore(session: &str, rng: &mut ChaCha8Rng) -> Game {
    serde_json::from_str(session).unwrap_or_else(|err| {
        tracing::warn!(error = %err, "discarding corrupted session");
        let mut game = Game::new();
        game.start_new_game(rng);
        game
    })
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::from("q");
    }
    input.trim().to_lowercase()
}

fn print_table(view: &GameView) {
    match &view.dealer_showing {
        None => println!("\nDealer: (no cards)"),
        Some(DealerShowing::Hidden { card, hidden_cards }) => {
            let hidden = vec!["??"; *hidden_cards].join(" ");
            println!("\nDealer: {} {hidden}", format_card(card));
        }
        Some(DealerShowing::Revealed(hand)) => {
            println!("\nDealer: {} (value {})", format_hand(hand), hand.value);
        }
    }

    let marker = |hand: ActiveHand| {
        if view.split_hand.is_some() && view.active_hand == hand && !view.dealer_turn {
            "*"
        } else {
            " "
        }
    };

    println!(
        "{} Hand: {} | value {}",
        marker(ActiveHand::Main),
        format_hand(&view.player_hand),
        view.player_hand.value
    );
    if let Some(split) = &view.split_hand {
        println!(
            "{} Split: {} | value {}",
            marker(ActiveHand::Split),
            format_hand(split),
            split.value
        );
    }
    println!();
}

fn format_actions(view: &GameView) -> String {
    let parts = [
        format_action("hit", "h", true),
        format_action("stand", "s", true),
        format_action("split", "p", view.can_split),
        format_action("new", "n", true),
    ];
    format!("Actions: {}", parts.join(" "))
}

fn format_action(label: &str, key: &str, allowed: bool) -> String {
    let text = format!("[{key}]{label}");
    if allowed {
        colorize(&text, "32")
    } else {
        colorize(&text, "90")
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_hand(hand: &HandView) -> String {
    if hand.cards.is_empty() {
        return "(empty)".to_string();
    }
    hand.cards
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: &Card) -> String {
    let (suit, color_code) = match card.suit {
        Suit::Hearts => ("H", "31"),
        Suit::Diamonds => ("D", "31"),
        Suit::Clubs => ("C", "32"),
        Suit::Spades => ("S", "34"),
    };

    let rank = card.rank.symbol();
    format!("{}{}", rank, colorize(suit, color_code))
}
