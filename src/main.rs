use std::{env, fs::read_to_string, process, time::Instant};

use minipas::{format_token_row, render_diagnostic, tokenize};
use owo_colors::OwoColorize;

const DEFAULT_SOURCE: &str = "code.txt";

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() > 2 {
        eprintln!("{} minipas [source file]", "usage:".red().bold());
        process::exit(2);
    }

    let file_path = args.get(1).map(String::as_str).unwrap_or(DEFAULT_SOURCE);

    let source = match read_to_string(file_path) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("{} failed to read {}: {}", "error:".red().bold(), file_path, error);
            process::exit(1);
        }
    };

    let start = Instant::now();
    let (tokens, diagnostics) = tokenize(&source);
    let elapsed = start.elapsed();

    for token in &tokens {
        println!("{}", format_token_row(token));
    }

    println!("Tokenized in {:?}", elapsed);

    if diagnostics.is_empty() {
        return;
    }

    for diagnostic in &diagnostics {
        let rendered = render_diagnostic(diagnostic, &source, file_path);
        let (heading, body) = rendered.split_once('\n').unwrap_or((rendered.as_str(), ""));
        eprintln!("{}", heading.red().bold());
        eprint!("{}", body.bright_black());
    }

    eprintln!(
        "{}",
        format!("{} lexical error(s) found", diagnostics.len()).yellow()
    );
    process::exit(1);
}
