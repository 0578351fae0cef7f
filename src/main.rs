use std::{env, io};

use bolt::{
    parser::parser::{ParserOptions, ValuePolicy},
    repl::{self, ReplMode, ReplOptions},
};
use clap::Parser;

#[derive(Parser)]
#[command(name = "bolt")]
#[command(about = "Interactive lexer and parser for the Bolt language", version)]
struct Cli {
    /// Print the token stream of each line instead of its syntax tree
    #[arg(long)]
    tokens: bool,

    /// Parse let and return values instead of skipping to the semicolon
    #[arg(long)]
    parse_values: bool,

    /// Print how long each line took to stderr
    #[arg(long)]
    timings: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let options = ReplOptions {
        mode: if cli.tokens {
            ReplMode::Tokens
        } else {
            ReplMode::Ast
        },
        parser: ParserOptions {
            value_policy: if cli.parse_values {
                ValuePolicy::Parse
            } else {
                ValuePolicy::Skip
            },
        },
        timings: cli.timings,
    };

    let user = env::var("USER").unwrap_or_else(|_| String::from("there"));
    println!("Hello {}! Welcome to Bolt ⚡️", user);
    println!("Type a command and press Enter to execute it.");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    repl::start(stdin.lock(), &mut stdout, options)?;

    Ok(())
}
