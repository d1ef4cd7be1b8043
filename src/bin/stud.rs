use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use stud_poker::core::StudError;
use stud_poker::stud::report::{format_deck, format_error, format_hands, format_winning_order};
use stud_poker::stud::{DEFAULT_HANDS, Deal, DealSource, StudGame, TestDeckParser};
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(name = "stud")]
#[command(about = "Deal or load five card stud hands and print the winning order")]
struct Cli {
    /// Test deck file, one comma separated hand per line.
    /// A shuffled deck is dealt when this is left out.
    deck_file: Option<PathBuf>,

    /// Number of hands to deal
    #[arg(short = 'n', long, default_value_t = DEFAULT_HANDS)]
    hands: usize,

    /// Seed for a repeatable shuffle
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Stopping");
            eprintln!("{}", format_error(&e));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), StudError> {
    let mut game = StudGame::new(cli.hands)?;
    if let Some(seed) = cli.seed {
        game = game.with_seed(seed);
    }

    println!("*** P O K E R    H A N D    A N A L Y Z E R ***\n\n");

    let deal = match &cli.deck_file {
        Some(path) => {
            println!("*** USING TEST DECK ***\n");
            println!("*** File: {}", path.display());
            let lines = TestDeckParser::read_lines(path)?;
            println!("{}\n", lines.join("\n"));
            game.load_lines(lines)?
        }
        None => {
            println!("*** USING RANDOMIZED DECK OF CARDS ***\n");
            game.deal_random()?
        }
    };

    print_deal(&deal);
    println!("{}\n", format_winning_order(&deal.rank()));
    Ok(())
}

fn print_deal(deal: &Deal) {
    match &deal.source {
        DealSource::Shuffled { deck, remaining } => {
            println!("*** Shuffled {} card deck", deck.len());
            println!("{}\n", format_deck(deck.iter(), false));
            print_hands(deal);
            println!("*** Here is what remains in the deck...");
            println!("{}\n", format_deck(remaining.iter(), true));
        }
        DealSource::TestDeck { .. } => print_hands(deal),
    }
}

fn print_hands(deal: &Deal) {
    println!("*** Here are the {} hands...", deal.hands.len());
    println!("{}\n", format_hands(&deal.hands));
}
