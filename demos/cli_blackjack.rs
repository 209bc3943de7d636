//! Terminal front end standing in for the chat adapter.
//!
//! Configuration comes from the same environment variables the bot reads
//! (`BJ_STATS_FILE`, `LOG_LEVEL`, `BJ_TURN_TIMEOUT_SECS`, ...).

use std::io::{self, BufRead, Write};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::Duration;

use bjbot::{
    Action, BotConfig, Card, Game, GameError, GameStatus, JsonFileStore, PlayerId, Session,
    StatsRecord, StatsStore,
};
use tracing_subscriber::EnvFilter;

const PLAYER: PlayerId = 1;

fn main() {
    let config = match BotConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Configuration error: {err}");
            return;
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_level))
        .with_writer(io::stderr)
        .init();

    let store = JsonFileStore::new(&config.stats_file);
    let game = Game::new(config.game_options(), config.seed_or_now(), store);
    let input = spawn_input();

    println!("Blackjack CLI example");
    println!("Actions: [h]it / [s]tand, 'q' to quit.");

    loop {
        print!("\nPress enter to deal (q to quit, 'stats' for your record): ");
        let _ = io::stdout().flush();
        let Ok(line) = input.recv() else {
            break;
        };
        match line.as_str() {
            "q" | "quit" => break,
            "stats" => {
                print_stats(&game.stats().get(PLAYER));
                continue;
            }
            _ => {}
        }

        if !play_round(&game, &config, &input) {
            break;
        }
    }

    println!("Goodbye.");
}

/// Plays one game to the end. Returns `false` if the player quit.
fn play_round<S: StatsStore>(
    game: &Game<S>,
    config: &BotConfig,
    input: &Receiver<String>,
) -> bool {
    let mut session = match game.start(PLAYER) {
        Ok(session) => session,
        Err(GameError::AlreadyActive) => {
            println!("You already have an active game!");
            return true;
        }
        Err(err) => {
            println!("Could not start: {err}");
            return true;
        }
    };

    print_table(&session, session.is_over());

    let mut quit = false;
    while session.status == GameStatus::Playing {
        print!("Action: ");
        let _ = io::stdout().flush();

        let action = match input.recv_timeout(config.turn_timeout) {
            Ok(line) if line == "q" || line == "quit" => {
                quit = true;
                Action::Stand
            }
            Ok(line) => match line.parse::<Action>() {
                Ok(action) => action,
                Err(err) => {
                    println!("{err}");
                    continue;
                }
            },
            Err(RecvTimeoutError::Timeout) => {
                println!("\nToo slow, standing.");
                Action::TimedOut
            }
            Err(RecvTimeoutError::Disconnected) => {
                quit = true;
                Action::TimedOut
            }
        };

        session = match game.act(PLAYER, action) {
            Ok(session) => session,
            Err(err) => {
                println!("Action error: {err}");
                break;
            }
        };

        if action == Action::Hit && session.status == GameStatus::Playing {
            print_table(&session, false);
        } else {
            reveal_dealer(&session, config.reveal_delay);
        }
    }

    match game.finish(PLAYER) {
        Ok(finished) => {
            print_result(finished.session.status);
            print_stats(&finished.stats);
        }
        Err(err) => println!("Could not finish: {err}"),
    }

    !quit
}

/// Shows the dealer's hand one card at a time.
fn reveal_dealer(session: &Session, delay: Duration) {
    for (index, cards) in session.dealer_reveal().enumerate() {
        if index > 0 {
            thread::sleep(delay);
        }
        println!(
            "Dealer: {} (value {})",
            format_cards(cards),
            bjbot::evaluate(cards).total
        );
    }
    println!(
        "You:    {} (value {})",
        session.player_hand,
        session.player_hand.value()
    );
}

fn print_table(session: &Session, show_dealer: bool) {
    println!();
    if show_dealer {
        println!(
            "Dealer: {} (value {})",
            session.dealer_hand,
            session.dealer_hand.value()
        );
    } else {
        let up = session
            .dealer_hand
            .up_card()
            .map_or_else(String::new, ToString::to_string);
        println!(
            "Dealer: {up} ?? (visible value {})",
            session.dealer_hand.visible_value()
        );
    }
    println!(
        "You:    {} (value {})",
        session.player_hand,
        session.player_hand.value()
    );
}

fn print_result(status: GameStatus) {
    match status {
        GameStatus::PlayerWin => println!("You win!"),
        GameStatus::DealerWin => println!("Dealer wins!"),
        GameStatus::Tie => println!("It's a tie!"),
        GameStatus::Playing => {}
    }
}

fn print_stats(stats: &StatsRecord) {
    println!(
        "Wins {} | Losses {} | Draws {} | Total {} | Win rate {:.1}%",
        stats.wins,
        stats.losses,
        stats.draws,
        stats.total_games(),
        stats.win_rate()
    );
}

fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Reads stdin on its own thread so turns can time out.
fn spawn_input() -> Receiver<String> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else {
                break;
            };
            if tx.send(line.trim().to_lowercase()).is_err() {
                break;
            }
        }
    });
    rx
}
