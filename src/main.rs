#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use cpu_battleship::{
    init_logging,
    ui::{describe_strategy, render_board},
    Board, CpuPlayer, GameStats, Player, Skirmish, CELL_COUNT,
};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use serde_json::json;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Let the CPU attacker play many games and print a JSON summary.
    Simulate {
        #[arg(long, default_value_t = 100)]
        games: u32,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Watch the CPU attacker play one game, turn by turn.
    Watch {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
fn seeded_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

/// Place a random fleet with `rng` and let a fresh attacker loose on it.
#[cfg(feature = "std")]
fn new_skirmish(rng: &mut SmallRng) -> anyhow::Result<Skirmish<CpuPlayer>> {
    let mut board = Board::new();
    let mut attacker = CpuPlayer::new(SmallRng::from_rng(&mut *rng));
    attacker
        .place_ships(rng, &mut board)
        .map_err(|e| anyhow::anyhow!(e))?;
    Ok(Skirmish::new(attacker, board))
}

#[cfg(feature = "std")]
fn simulate(games: u32, seed: Option<u64>) -> anyhow::Result<()> {
    let mut rng = seeded_rng(seed);
    let mut results: Vec<GameStats> = Vec::with_capacity(games as usize);
    for _ in 0..games {
        let mut skirmish = new_skirmish(&mut rng)?;
        let stats = skirmish
            .run(CELL_COUNT)
            .map_err(|e| anyhow::anyhow!(e))?;
        results.push(stats);
    }

    let shots: Vec<usize> = results.iter().map(|s| s.shots).collect();
    let average = if shots.is_empty() {
        0.0
    } else {
        shots.iter().sum::<usize>() as f64 / shots.len() as f64
    };
    let summary = json!({
        "games": games,
        "seed": seed,
        "won": results.iter().filter(|s| s.won).count(),
        "shots": {
            "average": average,
            "min": shots.iter().min(),
            "max": shots.iter().max(),
        },
    });
    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}

#[cfg(feature = "std")]
fn watch(seed: Option<u64>) -> anyhow::Result<()> {
    let mut rng = seeded_rng(seed);
    if let Some(s) = seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
    }
    let mut skirmish = new_skirmish(&mut rng)?;
    while !skirmish.is_over() && skirmish.stats().shots < CELL_COUNT {
        let turn = skirmish.play_turn().map_err(|e| anyhow::anyhow!(e))?;
        println!(
            "\nShot {}: {} -> {:?}",
            skirmish.stats().shots,
            turn.target,
            turn.result
        );
        println!("CPU is {}", describe_strategy(skirmish.attacker().strategy()));
        print!("{}", render_board(skirmish.board(), true));
    }
    println!("{}", serde_json::to_string_pretty(&skirmish.stats())?);
    Ok(())
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Simulate { games, seed } => simulate(games, seed),
        Commands::Watch { seed } => watch(seed),
    }
}
