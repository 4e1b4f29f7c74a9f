use broadside::{init_logging, play_out, GameConfig, Ocean, TargetingEngine};
use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde_json::json;

/// Play the targeting engine against randomly placed fleets and report shot counts.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Number of games to play.
    #[arg(long, default_value_t = 1)]
    games: usize,
    #[arg(long, help = "Fix RNG seed for reproducible runs (e.g., --seed 12345)")]
    seed: Option<u64>,
    /// JSON file with `board_size` and `fleet`.
    #[arg(long, conflicts_with_all = ["board_size", "fleet"])]
    config: Option<std::path::PathBuf>,
    #[arg(long)]
    board_size: Option<usize>,
    /// Ship lengths, e.g. 5,4,3,3,2.
    #[arg(long, value_delimiter = ',')]
    fleet: Option<Vec<usize>>,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => GameConfig::from_json(&std::fs::read_to_string(path)?)?,
        None => GameConfig::default(),
    };
    if let Some(size) = cli.board_size {
        config.board_size = size;
    }
    if let Some(fleet) = cli.fleet {
        config.fleet = fleet;
    }
    config.validate()?;

    let mut rng = if let Some(s) = cli.seed {
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let shot_limit = config.board_size * config.board_size;
    let mut shots = Vec::with_capacity(cli.games);
    let mut unfinished = 0usize;
    for game in 0..cli.games {
        let mut ocean = Ocean::random(config.board_size, &config.fleet, &mut rng)?;
        let mut engine = TargetingEngine::from_config(&config)?;
        let summary = play_out(&mut engine, &mut ocean, &mut rng, shot_limit)?;
        log::debug!("game {}: {:?}", game + 1, summary);
        if !summary.finished {
            unfinished += 1;
        }
        shots.push(summary.shots);
    }

    let mean = if shots.is_empty() {
        0.0
    } else {
        shots.iter().sum::<usize>() as f64 / shots.len() as f64
    };
    let result = json!({
        "board_size": config.board_size,
        "fleet": config.fleet,
        "games": cli.games,
        "min_shots": shots.iter().min(),
        "max_shots": shots.iter().max(),
        "mean_shots": mean,
        "unfinished": unfinished,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
