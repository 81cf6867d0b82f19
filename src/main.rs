use anyhow::Result;

use std::io::{stdin, stdout, Write};
use std::time::Duration;

use connect4_minimax::*;

mod game;
use game::*;

const TIME_LIMIT: Duration = Duration::from_secs(2);

fn main() -> Result<()> {
    env_logger::init();

    let mut game = Game::new();

    let stdin = stdin();

    println!("Welcome to Connect 4\n");

    let mut ai_players = (false, false);

    // choose AI control of player 1
    loop {
        let mut buffer = String::new();
        print!("Is player 1 AI controlled? y/n: ");
        stdout().flush().expect("failed to flush to stdout!");
        stdin.read_line(&mut buffer)?;
        match buffer.to_lowercase().chars().next() {
            Some(_letter @ 'y') => {
                ai_players.0 = true;
                break;
            }
            Some(_letter @ 'n') => break,
            _ => println!("Unknown answer given"),
        }
    }

    // choose AI control of player 2
    loop {
        let mut buffer = String::new();
        print!("Is player 2 AI controlled? y/n: ");
        stdout().flush().expect("failed to flush to stdout!");
        stdin.read_line(&mut buffer)?;
        match buffer.to_lowercase().chars().next() {
            Some(_letter @ 'y') => {
                ai_players.1 = true;
                break;
            }
            Some(_letter @ 'n') => break,
            _ => println!("Unknown answer given"),
        }
    }

    // search settings only matter when an AI player is present
    let (depth, heuristic) = if ai_players != (false, false) {
        let depth = loop {
            let mut buffer = String::new();
            print!("Search depth? 1 is easy, 6+ is hard: ");
            stdout().flush().expect("failed to flush to stdout!");
            stdin.read_line(&mut buffer)?;
            match buffer.trim().parse::<usize>() {
                Ok(depth) if depth >= 1 => break depth,
                _ => println!("Invalid depth: {}", buffer.trim()),
            }
        };

        let heuristic = loop {
            let mut buffer = String::new();
            print!("AI evaluation? [w]indowed, [t]hreat-aware, [p]ositional: ");
            stdout().flush().expect("failed to flush to stdout!");
            stdin.read_line(&mut buffer)?;
            match buffer.to_lowercase().chars().next() {
                Some(_letter @ 'w') => break Heuristic::Windowed,
                Some(_letter @ 't') => break Heuristic::ThreatAware,
                Some(_letter @ 'p') => break Heuristic::PositionalMatrix,
                _ => println!("Unknown answer given"),
            }
        };

        (depth, heuristic)
    } else {
        (4, Heuristic::Windowed)
    };

    let mut searcher = Searcher::new();

    // game loop
    loop {
        game.display().expect("Failed to draw board!");

        match game.state {
            GameState::Playing => {
                let next_move =
                    // AI player
                    if (game.to_move == Cell::PlayerOne && ai_players.0)
                        || (game.to_move == Cell::PlayerTwo && ai_players.1)
                    {
                        println!("AI is thinking...");
                        stdout().flush().expect("Failed to flush to stdout!");

                        // slow down play if both players are AI
                        if ai_players == (true, true) {
                            std::thread::sleep(Duration::new(1, 0));
                        }

                        let (column, score) = searcher.choose_move(
                            &game.board,
                            game.to_move,
                            depth,
                            TIME_LIMIT,
                            heuristic,
                        )?;

                        if score >= eval::WIN_SCORE {
                            println!("AI can force a win.");
                        } else if score <= -eval::WIN_SCORE {
                            println!("AI can only lose against perfect play.");
                        }
                        println!("Best move: {}", column + 1);
                        column + 1

                    // human player
                    } else {
                        print!("Move input > ");
                        stdout().flush().expect("Failed to flush to stdout!");
                        let mut input_str = String::new();
                        stdin.read_line(&mut input_str)?;

                        match input_str.trim().parse::<usize>() {
                            Err(_) => {
                                println!("Invalid number: {}", input_str);
                                continue;
                            }
                            Ok(column) => column,
                        }
                    };

                if let Err(err) = game.play_checked(next_move) {
                    println!("{}", err);
                    // try the move again
                    continue;
                }
            }

            // end states
            GameState::PlayerOneWin => {
                println!("Player 1 wins!");
                break;
            }
            GameState::PlayerTwoWin => {
                println!("Player 2 wins!");
                break;
            }
            GameState::Draw => {
                println!("Draw!");
                break;
            }
        }
    }
    Ok(())
}
