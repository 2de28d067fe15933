// Card recognition CLI: reads a rendered card image and prints the
// extracted PAN, expiry and CVV, or a per-position failure report.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use cardscan::models::CardData;
use cardscan::telemetry::LogSink;
use cardscan::utils::RecognitionError;
use cardscan::validation::{format_pan, ExpiryValidator};
use cardscan::CardReader;

#[derive(Parser)]
#[command(name = "cardscan", about = "Extract PAN, expiry and CVV from a rendered card image")]
struct Args {
    /// Path to the card image (JPEG or PNG)
    image: PathBuf,

    /// Print the result as JSON instead of a report
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let sink = LogSink;
    let reader = CardReader::new(&sink);

    match reader.recognize_file(&args.image) {
        Ok(card) => {
            if args.json {
                match serde_json::to_string_pretty(&card) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        eprintln!("Failed to serialize result: {}", e);
                        return ExitCode::FAILURE;
                    }
                }
            } else {
                print_report(&card);
            }
            ExitCode::SUCCESS
        }
        Err(error) => {
            print_failure(&error);
            ExitCode::FAILURE
        }
    }
}

fn print_report(card: &CardData) {
    println!("\n===============================================");
    println!("           CARD RECOGNITION REPORT");
    println!("===============================================\n");

    println!("  PAN:    {}", format_pan(&card.pan));
    println!("  Expiry: {}/{}", card.exp_month, card.exp_year);
    println!("  CVV:    {}", card.cvv);

    let expiry = ExpiryValidator::validate(&card.exp_month, &card.exp_year);
    if expiry.plausible {
        println!("\n  Expiry plausibility: OK");
    } else {
        println!("\n  Expiry plausibility: SUSPECT");
        for issue in &expiry.issues {
            println!("    - {}", issue);
        }
    }
}

fn print_failure(error: &RecognitionError) {
    eprintln!("Recognition failed: {}", error);

    if let RecognitionError::FailedInterpretation { fields } = error {
        for field in fields {
            eprintln!("\n{} field:", field.field.name());
            for position in &field.positions {
                eprintln!("  {:?}: {}", position.key, position.cause);
                if let Some(rows) = &position.rows {
                    eprintln!("  sampled rows:\n{}", rows);
                }
            }
        }
    }
}
