#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use connect_n::{
    init_logging, read_score_file, CliSession, FileScoreStore, DEFAULT_COLS, DEFAULT_ROWS,
};

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use std::io;
#[cfg(feature = "std")]
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "Connect-N in the terminal", long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible obstacles (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, default_value = "high_scores.txt")]
    scores: PathBuf,
    #[arg(long, default_value_t = DEFAULT_ROWS)]
    rows: usize,
    #[arg(long, default_value_t = DEFAULT_COLS)]
    cols: usize,
    /// Print a JSON summary of the match when it ends.
    #[arg(long)]
    json: bool,
    /// Print the score file and exit.
    #[arg(long)]
    show_scores: bool,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    if cli.show_scores {
        for line in read_score_file(&cli.scores)? {
            println!("{}", line);
        }
        return Ok(());
    }

    let rng = if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (obstacles will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let stdin = io::stdin();
    let mut session = CliSession::new(stdin.lock(), io::stdout(), FileScoreStore::new(cli.scores));
    let game = session.run(cli.rows, cli.cols, rng)?;

    if cli.json {
        println!("{}", serde_json::to_string(&game.summary())?);
    }
    Ok(())
}
