use clap::Args;
use growthmind_core::catalog::{quotes, random_quote, Quote};

use super::{print_json, CmdResult};

#[derive(Args)]
pub struct QuoteArgs {
    /// Print every quote instead of a random one
    #[arg(long)]
    all: bool,
    /// Print as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(args: QuoteArgs) -> CmdResult {
    let picked: Vec<&Quote> = if args.all {
        quotes().iter().collect()
    } else {
        vec![random_quote()]
    };

    if args.json {
        return print_json(&picked);
    }
    for q in picked {
        println!("\"{}\"", q.quote);
        println!("  -- {}", q.author);
    }
    Ok(())
}
