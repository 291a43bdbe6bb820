//! Random-vs-random match series runner.
//!
//! Run with:
//! `cargo run --release --bin self_play`
//! `cargo run --release --bin self_play -- --size 6 --games 20 --seed 7 --verbose`

use gota::referee::match_runner::{play_match, play_match_series, MatchConfig, MatchSeriesConfig};
use gota::referee::move_chooser::{MoveChooser, RandomChooser};
use gota::utils::render_board::render_board;

fn flag_value<T: std::str::FromStr>(args: &[String], name: &str, default: T) -> Result<T, String> {
    match args.iter().position(|a| a == name) {
        Some(i) => args
            .get(i + 1)
            .ok_or_else(|| format!("{name} needs a value"))?
            .parse()
            .map_err(|_| format!("{name} has an invalid value")),
        None => Ok(default),
    }
}

fn main() -> Result<(), String> {
    let args: Vec<String> = std::env::args().collect();
    let verbose = args.iter().any(|a| a == "--verbose" || a == "-v");
    let board_size = flag_value(&args, "--size", 8usize)?;
    let games = flag_value(&args, "--games", 10u16)?;
    let base_seed = flag_value(&args, "--seed", 0u64)?;

    let per_game = MatchConfig {
        board_size,
        verbose,
        ..MatchConfig::default()
    };

    // Show one game in full before the series.
    let mut white = RandomChooser::new(base_seed);
    let mut black = RandomChooser::new(base_seed.wrapping_add(1));
    let sample = play_match(
        &mut white,
        &mut black,
        &MatchConfig {
            seed: base_seed,
            ..per_game.clone()
        },
    )
    .map_err(|e| e.to_string())?;
    for line in &sample.info_lines {
        println!("{line}");
    }
    println!("{}", render_board(&sample.final_board));

    let stats = play_match_series(
        |seed| Box::new(RandomChooser::new(seed)) as Box<dyn MoveChooser>,
        |seed| Box::new(RandomChooser::new(seed.rotate_left(32))) as Box<dyn MoveChooser>,
        &MatchSeriesConfig {
            games,
            base_seed,
            per_game,
            verbose,
        },
    )
    .map_err(|e| e.to_string())?;

    println!("{}", stats.report());
    Ok(())
}
