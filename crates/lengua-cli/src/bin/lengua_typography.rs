// lengua-typography: Rewrite straight quotes into Spanish typography.
//
// Reads text from stdin (one line at a time) and prints each line with
// apostrophes curled and double quotes turned into guillemets.
//
// Usage:
//   lengua-typography [TEXT...]
//
// Options:
//   -h, --help   Print help

use std::io::{self, BufRead, Write};

use lengua_core::language::Language;

fn main() {
    lengua_cli::init_logging();
    let args: Vec<String> = std::env::args().skip(1).collect();

    if lengua_cli::wants_help(&args) {
        println!("lengua-typography: Rewrite quotes and apostrophes for Spanish.");
        println!();
        println!("Usage: lengua-typography [TEXT...]");
        println!();
        println!("If TEXT arguments are given, each one is rewritten and printed.");
        println!("Otherwise reads lines from stdin.");
        println!();
        println!("Options:");
        println!("  -h, --help   Print this help");
        return;
    }

    let es = lengua_cli::spanish();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if args.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("error reading stdin: {e}");
                    break;
                }
            };
            let _ = writeln!(out, "{}", es.to_advanced_typography(&line));
        }
    } else {
        for text in &args {
            let _ = writeln!(out, "{}", es.to_advanced_typography(text));
        }
    }
}
