use std::io::{self, Read};

use clap::Parser;
use radix::{convert, get_result};

/// radix converts a real number from one numeral system to another.
///
/// Radices range from 1 (unary) to 36. Without arguments the source radix,
/// number and target radix are read from standard input, separated by
/// whitespace.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Radix the number is written in.
    #[arg(requires_all = ["number", "target_radix"])]
    source_radix: Option<String>,

    /// Number to convert, such as `ff` or `101.01`.
    number: Option<String>,

    /// Radix to convert the number to.
    target_radix: Option<String>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let result = match (&args.source_radix, &args.number, &args.target_radix) {
        (Some(source), Some(number), Some(target)) => convert(source, number, target),
        _ => {
            let mut input = String::new();
            io::stdin().read_to_string(&mut input).unwrap_or_else(|e| {
                                                      eprintln!("Failed to read standard input: {e}");
                                                      std::process::exit(1);
                                                  });
            get_result(&input)
        },
    };

    match result {
        Ok(number) => println!("{number}"),
        Err(e) => println!("{e}"),
    }
}
