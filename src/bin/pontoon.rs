//! Terminal pontoon session.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use pontoon::{
    Card, Game, GameOptions, GameState, HandResult, Player, PlayerStatus, Suit, TurnError,
};

fn main() {
    println!("Pontoon: stick or twist up to 21 (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = GameOptions::default();
    let mut game = Game::new(options, seed);

    collect_players(&mut game);

    if game.player_count() == 0 {
        println!("Nobody joined. Goodbye.");
        return;
    }

    loop {
        if game.check_and_reshuffle() == Ok(true) {
            println!("Deck reshuffled.");
        }

        if let Err(err) = game.deal_initial() {
            println!("Cannot deal: {err}");
            break;
        }

        println!("\nEveryone is dealt two cards:");
        for player in game.players() {
            println!("  {}", format_player(player));
        }
        println!();

        if !play_turns(&mut game) {
            println!("Goodbye.");
            return;
        }

        if game.state() == GameState::HandOver {
            match game.outcome() {
                Ok(result) => print_result(&result),
                Err(err) => println!("Outcome error: {err}"),
            }
        } else {
            // Deck exhaustion leaves the hand unresolved.
            println!("The deck ran out of cards; the hand is abandoned with no winner.");
        }

        game.clear_hand();

        if prompt_line("\nPlay another hand? (y/n): ").to_lowercase() != "y" {
            println!("Goodbye.");
            break;
        }
    }
}

/// Reads player names, one per line; an empty line ends name entry.
fn collect_players(game: &mut Game) {
    loop {
        let number = game.player_count() + 1;
        let name = prompt_line(&format!("Player {number} name (blank line to finish): "));
        if name.is_empty() {
            break;
        }
        if game.add_player(&name).is_err() {
            break;
        }
    }
}

/// Runs stick/twist prompts until the hand resolves or the deck runs dry.
///
/// Returns `false` if the session was quit.
fn play_turns(game: &mut Game) -> bool {
    while game.state() == GameState::PlayerTurn {
        let Some(index) = game.current_player() else {
            break;
        };
        let player = &game.players()[index];
        let name = player.name().to_string();
        let prompt = format!(
            "{}, {} (score {}): [s]tick or [t]wist? ",
            name,
            format_cards(player.hand().cards()),
            player.score()
        );

        match prompt_line(&prompt).to_lowercase().as_str() {
            "s" | "stick" => {
                if game.stick(index).is_ok() {
                    println!("{name} sticks.");
                }
            }
            "t" | "twist" => match game.twist(index) {
                Ok(card) => {
                    println!("{name} draws {}.", format_card(&card));
                    if game.players()[index].status() == PlayerStatus::Bust {
                        println!("{name} goes bust with {}!", game.players()[index].score());
                    }
                }
                Err(TurnError::DeckExhausted) => return true,
                Err(err) => println!("Turn error: {err}"),
            },
            "q" | "quit" => return false,
            _ => println!("Please try again: press S to stick or T to twist."),
        }
    }

    true
}

fn print_result(result: &HandResult) {
    println!("\n--- Hand over ---");
    for standing in &result.standings {
        let note = match standing.status {
            PlayerStatus::Bust => ", bust",
            _ => "",
        };
        println!(
            "  {}: {} (score {}{})",
            standing.name,
            format_cards(&standing.cards),
            standing.score,
            note
        );
    }

    match (result.winners.as_slice(), result.winning_score) {
        ([], _) | (_, None) => println!("Everyone went bust. No winner this hand."),
        ([winner], Some(score)) => {
            println!("Winner: {} with {score}.", result.standings[*winner].name);
        }
        (winners, Some(score)) => {
            let names: Vec<&str> = winners
                .iter()
                .map(|&index| result.standings[index].name.as_str())
                .collect();
            println!("Winners: {} with {score}.", names.join(", "));
        }
    }

    println!("Cards remaining in the deck: {}", result.cards_remaining);
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_string()
}

fn format_player(player: &Player) -> String {
    format!(
        "{}: {} (score {})",
        player.name(),
        format_cards(player.hand().cards()),
        player.score()
    )
}

fn format_cards(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "(empty)".to_string();
    }
    cards
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

    let (rank, is_face) = match card.rank {
        1 => ("A".to_string(), true),
        11 => ("J".to_string(), true),
        12 => ("Q".to_string(), true),
        13 => ("K".to_string(), true),
        _ => (card.rank.to_string(), false),
    };

    let colored_rank = if is_face {
        colorize(&rank, color_code)
    } else {
        rank
    };
    let colored_suit = colorize(suit, color_code);
    format!("{colored_rank}{colored_suit}")
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
