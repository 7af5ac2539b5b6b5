//! GeoQuiz - fuzzy answer matching for geography trivia
//!
//! Command-line front end over the matching library.

use std::collections::HashSet;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use clap::{Parser, Subcommand};
use geoquiz::config::Config;
use geoquiz::daily::daily_selection;
use geoquiz::{
    edit_distance, is_accepted_answer, match_against_candidates, normalize, similarity, Catalog,
    GameSession, GameStatus,
};
use rand::seq::SliceRandom;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Candidate catalog (JSON); defaults to the configured or bundled list
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Find the best candidate for an answer
    Match {
        input: String,

        /// Candidate codes that are no longer eligible
        #[arg(short, long)]
        exclude: Vec<String>,
    },
    /// Show how two strings compare
    Score { a: String, b: String },
    /// Today's rounds: name the country behind each code
    Daily {
        /// Number of rounds (defaults to the configured value)
        #[arg(short, long)]
        count: Option<usize>,

        /// Only print the selection
        #[arg(long)]
        list: bool,

        /// Shuffle the rounds instead of using today's selection
        #[arg(long)]
        random: bool,
    },
    /// Name as many candidates as possible before time runs out
    Play,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::load()?;

    // Setup logging
    let level = if args.verbose {
        Level::DEBUG
    } else {
        config.log_level.parse().unwrap_or(Level::INFO)
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let catalog = match &args.catalog {
        Some(path) => Catalog::load(path)?,
        None => config.catalog()?,
    };
    info!("🌐 GeoQuiz v{} ({} candidates)", env!("CARGO_PKG_VERSION"), catalog.len());

    match args.command {
        Command::Match { input, exclude } => run_match(&catalog, &input, exclude),
        Command::Score { a, b } => run_score(&a, &b),
        Command::Daily {
            count,
            list,
            random,
        } => run_daily(
            &catalog,
            &config,
            count.unwrap_or(config.daily_rounds),
            list,
            random,
        ),
        Command::Play => run_play(&catalog, &config),
    }
}

fn run_match(catalog: &Catalog, input: &str, exclude: Vec<String>) -> Result<()> {
    let excluded: HashSet<String> = exclude.into_iter().map(|c| c.to_uppercase()).collect();

    if let Some(id) = catalog.resolve_abbreviation(input) {
        if !excluded.contains(id) {
            println!("{} (abbreviation)", describe(catalog, id));
            return Ok(());
        }
    }

    match match_against_candidates(input, catalog.candidates(), &excluded) {
        Some(m) => println!("{} score={:.3}", describe(catalog, &m.id), m.score),
        None => println!("no match"),
    }
    Ok(())
}

fn run_score(a: &str, b: &str) -> Result<()> {
    let (na, nb) = (normalize(a), normalize(b));
    println!("normalized: {:?} / {:?}", na, nb);
    println!("edit distance: {}", edit_distance(&na, &nb));
    println!("similarity: {:.3}", similarity(a, b));
    Ok(())
}

fn run_daily(
    catalog: &Catalog,
    config: &Config,
    count: usize,
    list: bool,
    random: bool,
) -> Result<()> {
    let rounds: Vec<_> = if random {
        let mut all: Vec<_> = catalog.candidates().iter().collect();
        all.shuffle(&mut rand::thread_rng());
        all.truncate(count);
        all
    } else {
        daily_selection(catalog.candidates(), chrono::Local::now().date_naive(), count)
    };

    if list {
        for candidate in &rounds {
            println!("{}", describe(catalog, &candidate.id));
        }
        return Ok(());
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut correct = 0;
    let mut wrong = 0;

    for (round, candidate) in rounds.iter().enumerate() {
        print!("[{}/{}] Which country has code {}? ", round + 1, rounds.len(), candidate.id);
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        if is_accepted_answer(&line, &candidate.name, &candidate.aliases) {
            correct += 1;
            println!("✅ Correct!");
        } else {
            wrong += 1;
            println!("❌ It was {}", candidate.name);
            if wrong >= config.max_wrong {
                println!("💀 Out of lives");
                break;
            }
        }
    }

    println!("Score: {}/{}", correct, rounds.len());
    Ok(())
}

fn run_play(catalog: &Catalog, config: &Config) -> Result<()> {
    let mut session = GameSession::new(config.time_limit_secs);
    session.start();
    println!(
        "Name all {} countries in {} minutes. Type 'give up' to stop.",
        catalog.len(),
        config.time_limit_secs / 60
    );

    let started = Instant::now();
    let mut elapsed_ticks = 0;

    for line in io::stdin().lock().lines() {
        let line = line?;

        let elapsed = started.elapsed().as_secs();
        while elapsed_ticks < elapsed && session.status() == GameStatus::Playing {
            session.tick();
            elapsed_ticks += 1;
        }
        if session.status() != GameStatus::Playing {
            break;
        }

        if line.trim().eq_ignore_ascii_case("give up") {
            session.give_up();
            break;
        }

        match session.submit(catalog, &line) {
            Some(guess) => println!(
                "✅ {} ({}/{}, {}s left)",
                describe(catalog, &guess.id),
                session.score(),
                catalog.len(),
                session.time_left()
            ),
            None => println!("…"),
        }

        if session.status() == GameStatus::Won {
            break;
        }
    }

    match session.status() {
        GameStatus::Won => println!("🏆 You named them all!"),
        _ => {
            println!("Final score: {}/{}", session.score(), catalog.len());
            let missed: Vec<_> = session
                .remaining(catalog)
                .iter()
                .map(|c| c.name.as_str())
                .collect();
            if !missed.is_empty() {
                println!("Missed: {}", missed.join(", "));
            }
        }
    }
    Ok(())
}

fn describe(catalog: &Catalog, id: &str) -> String {
    match catalog.get(id) {
        Some(candidate) => format!("{} [{}]", candidate.name, candidate.id),
        None => id.to_string(),
    }
}
