mod cli;
mod console;

use std::process::ExitCode;

use cli::{parse_args, Command, USAGE};
use console::ConsoleSink;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use reaver::build_info;
use reaver::simulator::{run_simulation, SimConfig};
use reaver::{run_campaign, CampaignConfig};

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn rng_from(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = match parse_args(&args) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("error: {}", e);
            eprintln!("Run 'reaver --help' for usage.");
            return ExitCode::from(2);
        }
    };

    match command {
        Command::Help => println!("{}", USAGE),
        Command::Version => println!("{}", build_info::version_line()),
        Command::Simulate { runs, seed } => {
            let config = SimConfig {
                num_runs: runs,
                seed,
                ..Default::default()
            };
            let report = run_simulation(&config);
            println!("{}", report.to_text());
        }
        Command::Play { seed, name, json } => {
            let mut config = CampaignConfig::default();
            if let Some(name) = name {
                config.player_name = name;
            }
            let mut sink = if json {
                ConsoleSink::json()
            } else {
                ConsoleSink::text()
            };
            let mut rng = rng_from(seed);
            run_campaign(&config, &mut rng, &mut sink);
        }
    }

    ExitCode::SUCCESS
}
