// main.rs
mod ai_provider;
mod astrology;
mod cli;
mod config;
mod error;
mod generator;
mod model;
mod numerology;
mod pools;
mod rng;
mod select;
mod synthesizer;

use clap::Parser;
use cli::{Args, Commands};

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let result = match args.command {
        Commands::Report {
            name,
            birth_date,
            mbti,
            provider,
            model,
            date,
            json,
            data_dir,
        } => {
            cli::handle_report(name, birth_date, mbti, provider, model, date, json, data_dir).await
        }
        Commands::Zodiac { birth_date } => cli::handle_zodiac(birth_date),
        Commands::LifePath { birth_date } => cli::handle_life_path(birth_date),
    };

    if let Err(e) = result {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}
