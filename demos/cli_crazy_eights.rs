//! CLI Crazy Eights example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use c8rs::{Card, Game, GameStatus, Rank, Suit, Turn};

/// Delay before the opponent moves, so its play reads as a decision.
const AI_DELAY: Duration = Duration::from_millis(1500);

fn main() {
    println!("Crazy Eights CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let game = Game::new(seed);
    game.start();

    loop {
        match game.status() {
            GameStatus::Start => game.start(),
            GameStatus::Playing => match game.turn() {
                Turn::Player => {
                    if !player_turn(&game) {
                        return;
                    }
                }
                Turn::Ai => ai_turn(&game),
            },
            GameStatus::SelectingSuit => {
                if !suit_selection(&game) {
                    return;
                }
            }
            GameStatus::GameOver => {
                print_table(&game);
                match game.winner() {
                    Some(Turn::Player) => println!("*** You won! You cleared your hand first. ***"),
                    Some(Turn::Ai) => println!("The AI won. Better luck next time."),
                    None => {}
                }
                match prompt_line("Play again? (y/n): ").as_str() {
                    "y" | "yes" => game.start(),
                    _ => return,
                }
            }
        }
    }
}

/// Handles one player prompt. Returns `false` to quit.
fn player_turn(game: &Game) -> bool {
    print_table(game);
    println!("{}", game.message());

    let hand = game.player_hand();
    println!("Actions: [0-{}]play [d]raw [n]ew game [q]uit", hand.len() - 1);

    let action = prompt_line("Action: ");
    match action.as_str() {
        "d" | "draw" => match game.draw_card() {
            Ok(Some(card)) => println!("You drew {}.", format_card(&card)),
            Ok(None) => println!("Deck is empty! Turn skipped."),
            Err(err) => println!("Draw error: {err}"),
        },
        "n" | "new" => game.start(),
        "q" | "quit" => return false,
        _ => match action.parse::<usize>() {
            Ok(index) if index < hand.len() => {
                if let Err(err) = game.play_card(hand[index]) {
                    println!("Play error: {err}");
                }
            }
            _ => println!("Unknown action."),
        },
    }

    true
}

/// Runs the opponent's deferred move, discarding it if the game was
/// restarted while it was pending.
fn ai_turn(game: &Game) {
    let generation = game.generation();
    thread::sleep(AI_DELAY);

    if game.ai_play(generation).is_ok() {
        println!("{}", game.message());
    }
}

/// Prompts for the suit after the player played an eight. Returns `false`
/// to quit.
fn suit_selection(game: &Game) -> bool {
    println!("You played an 8. Choose a new suit.");

    loop {
        let choice = prompt_line("Suit ([h]earts/[d]iamonds/[c]lubs/[s]pades): ");
        let suit = match choice.as_str() {
            "h" | "hearts" => Suit::Hearts,
            "d" | "diamonds" => Suit::Diamonds,
            "c" | "clubs" => Suit::Clubs,
            "s" | "spades" => Suit::Spades,
            "q" | "quit" => return false,
            _ => {
                println!("Unknown suit.");
                continue;
            }
        };

        if let Err(err) = game.select_suit(suit) {
            println!("Suit error: {err}");
        }
        return true;
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn print_table(game: &Game) {
    let snapshot = game.snapshot();

    println!("\nDeck: {} cards | AI holds {} cards", snapshot.deck_len, snapshot.ai_hand_len);

    if let Some(top) = snapshot.discard_top {
        let mut line = format!("Discard: {}", format_card(&top));
        // After an eight the required suit diverges from the card shown.
        if let Some(suit) = snapshot.active_suit {
            if top.rank == Rank::Eight {
                line.push_str(&format!(" (suit is now {})", format_suit(suit)));
            }
        }
        println!("{line}");
    }

    let mut parts = Vec::new();
    for (index, card) in snapshot.player_hand.iter().enumerate() {
        let text = format!("[{index}]{}", format_card(card));
        let playable = snapshot.status == GameStatus::Playing
            && snapshot.turn == Turn::Player
            && game.is_card_playable(*card);
        parts.push(if playable {
            colorize(&text, "32")
        } else {
            colorize(&text, "90")
        });
    }
    println!("Your hand: {}", parts.join(" "));
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_suit(suit: Suit) -> String {
    let (symbol, color_code) = suit_symbol(suit);
    colorize(symbol, color_code)
}

fn suit_symbol(suit: Suit) -> (&'static str, &'static str) {
    match suit {
        Suit::Hearts => ("H", "31"),
        Suit::Diamonds => ("D", "31"),
        Suit::Clubs => ("C", "32"),
        Suit::Spades => ("S", "34"),
    }
}

fn format_card(card: &Card) -> String {
    let (symbol, color_code) = suit_symbol(card.suit);
    let rank = card.rank.to_string();
    format!("{}{}", colorize(&rank, color_code), colorize(symbol, color_code))
}
