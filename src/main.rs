//! tictactoe_minimax - terminal front end
//!
//! A line-based presentation layer over the game state and search engine.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::io::{self, BufRead, Write};
use std::path::Path;
use tictactoe_minimax::{
    Board, GameConfig, Mark, Outcome, Position, SearchEngine, Session, Turn, outcome,
};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { config, json } => run_play(&config, json),
        Command::Suggest { board, json } => run_suggest(&board, json),
        Command::Outcome { board } => run_outcome(&board),
    }
}

/// Run an interactive game on stdin/stdout.
#[instrument(skip(config_path), fields(config = %config_path.display()))]
fn run_play(config_path: &Path, json: bool) -> Result<()> {
    let config = GameConfig::load_or_default(config_path)?.with_json(json);
    let engine = SearchEngine::new();
    let mut session = Session::new();
    info!("Starting game");

    let mut out = io::stdout().lock();
    writeln!(out, "You are Player X. Enter a cell 1-9 or a name like 'center'; 'reset' or 'quit'.")?;
    render(&mut out, &session, &config)?;

    for line in io::stdin().lock().lines() {
        let line = line.context("Failed to read input")?;
        let input = line.trim();

        match input.to_ascii_lowercase().as_str() {
            "" => continue,
            "quit" | "q" | "exit" => break,
            "reset" | "r" => {
                session.restart();
                render(&mut out, &session, &config)?;
                continue;
            }
            _ => {}
        }

        if session.state().is_over() {
            writeln!(out, "The game is over. Type 'reset' to play again or 'quit'.")?;
            continue;
        }

        let Some(position) = Position::from_label_or_number(input) else {
            writeln!(out, "Unknown cell {:?}: enter 1-9 or a name like 'top-left'.", input)?;
            continue;
        };

        // Gate input before it reaches the game state.
        if !session.state().board().is_empty(position) {
            writeln!(out, "{} is already taken.", position)?;
            continue;
        }

        let hints = if *config.show_scores() {
            let after = session.state().board().with_mark(position, Mark::Player);
            if outcome(&after).is_terminal() {
                Vec::new()
            } else {
                engine.ranked_moves(&after)
            }
        } else {
            Vec::new()
        };

        let report = session.play(position.to_index())?;
        debug!(?report, "Turn played");

        if let Some(reply) = report.opponent_move {
            writeln!(out, "O plays {} ({}).", reply, reply.to_index() + 1)?;
        }
        for hint in &hints {
            writeln!(out, "  {:>13} -> {:+}", hint.position.label(), hint.score)?;
        }
        render(&mut out, &session, &config)?;
    }

    Ok(())
}

fn render(out: &mut impl Write, session: &Session, config: &GameConfig) -> Result<()> {
    if *config.json() {
        writeln!(out, "{}", session.snapshot().to_json()?)?;
        return Ok(());
    }

    let state = session.state();
    writeln!(out, "\n{}\n", state.board())?;
    match state.turn() {
        Turn::GameOver => {
            writeln!(out, "{}", state.outcome())?;
            writeln!(out, "Type 'reset' to play again.")?;
        }
        turn => writeln!(out, "{}", turn)?,
    }
    Ok(())
}

/// Print the opponent's choice and every candidate's score.
#[instrument]
fn run_suggest(board: &str, json: bool) -> Result<()> {
    let board: Board = board.parse()?;
    let result = outcome(&board);
    if result.is_terminal() {
        println!("{}", result);
        return Ok(());
    }

    let engine = SearchEngine::new();
    let ranked = engine.ranked_moves(&board);
    let choice = engine.choose_move(&board);

    if json {
        let value = serde_json::json!({
            "board": board.compact(),
            "choice": choice.map(Position::to_index),
            "ranked": ranked,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("{}\n", board);
    for candidate in &ranked {
        let marker = if Some(candidate.position) == choice { '*' } else { ' ' };
        println!(
            "{} {} ({}) -> {:+}",
            marker,
            candidate.position.label(),
            candidate.position.to_index(),
            candidate.score
        );
    }
    Ok(())
}

/// Print the outcome of a board.
#[instrument]
fn run_outcome(board: &str) -> Result<()> {
    let board: Board = board.parse()?;
    match outcome(&board) {
        Outcome::InProgress => println!("In progress ({} empty)", board.empty_positions().count()),
        other => println!("{}", other),
    }
    Ok(())
}
