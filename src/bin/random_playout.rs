//! Plays seeded random legal games and reports how they ended.
//!
//! Usage:
//! `cargo run --release --bin random_playout`
//! `cargo run --release --bin random_playout -- --seed 7 --games 50 --max-plies 300`

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use plum_rules::game::controller::{ChessGame, MoveOutcome};
use plum_rules::game::promotion::PromotionChoice;
use plum_rules::game_state::chess_types::{Color, GameOutcome};

fn parse_arg_u64(flag: &str, default: u64) -> u64 {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            if let Ok(v) = args[i + 1].parse::<u64>() {
                return v;
            }
        }
    }
    default
}

#[derive(Debug, Default)]
struct Tally {
    white_wins: usize,
    black_wins: usize,
    draws: usize,
    unfinished: usize,
    plies: usize,
}

fn play_one(rng: &mut StdRng, max_plies: u64) -> Result<(GameOutcome, usize), String> {
    let mut game = ChessGame::new();

    for _ in 0..max_plies {
        if game.current_outcome().is_terminal() {
            break;
        }

        let moves = game.legal_moves();
        let mv = *moves
            .choose(rng)
            .ok_or("no legal move in a game still in progress")?;

        let outcome = game
            .apply_move(mv.from, mv.to)
            .map_err(|e| e.to_string())?;
        match outcome {
            MoveOutcome::Rejected => {
                return Err(format!("generated move {} {} was rejected", mv.from, mv.to));
            }
            MoveOutcome::AwaitingPromotion => {
                let choice = *PromotionChoice::ALL
                    .choose(rng)
                    .ok_or("empty promotion list")?;
                game.resolve_promotion(choice).map_err(|e| e.to_string())?;
            }
            _ => {}
        }

        if game.in_check(Color::White) && game.in_check(Color::Black) {
            return Err("both kings reported in check".to_owned());
        }
    }

    Ok((game.current_outcome(), game.move_log().len()))
}

fn main() -> Result<(), String> {
    let filter =
        EnvFilter::try_from_env("PLUM_RULES_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let seed = parse_arg_u64("--seed", 1);
    let games = parse_arg_u64("--games", 20).max(1);
    let max_plies = parse_arg_u64("--max-plies", 400).max(1);

    println!("random playout: seed={seed} games={games} max_plies={max_plies}");
    let mut rng = StdRng::seed_from_u64(seed);
    let mut tally = Tally::default();

    for index in 0..games {
        let (outcome, plies) = play_one(&mut rng, max_plies).inspect_err(|e| {
            warn!(game = index, error = %e, "playout failed");
        })?;
        tally.plies += plies;
        match outcome {
            GameOutcome::Checkmate(Color::White) => tally.white_wins += 1,
            GameOutcome::Checkmate(Color::Black) => tally.black_wins += 1,
            GameOutcome::Draw => tally.draws += 1,
            GameOutcome::InProgress => tally.unfinished += 1,
        }
        println!("game {index}: {outcome} after {plies} plies");
    }

    println!(
        "white_wins={} black_wins={} draws={} unfinished={} avg_plies={:.1}",
        tally.white_wins,
        tally.black_wins,
        tally.draws,
        tally.unfinished,
        tally.plies as f64 / games as f64
    );
    Ok(())
}
