// lengua-priority: Show how Spanish ranks rule ids.
//
// Prints `ID PRIORITY` for each rule id given on the command line or read
// from stdin. With --all, lists every rule Spanish constructs, highest
// priority first. With --table, prints the Spanish priority table itself.
//
// Usage:
//   lengua-priority [OPTIONS] [ID...]
//
// Options:
//   -c, --category CAT   Fall back to the priority of category CAT
//   --all                List all constructed rules by priority
//   --table              List the Spanish priority table
//   -h, --help           Print help

use std::io::{self, BufRead, Write};

use lengua_core::language::Language;
use lengua_core::priority::Priority;
use lengua_core::rule::DEFAULT_CATEGORY;
use lengua_es::rules::{SPANISH_MODEL_RULES, SPANISH_RULES};

fn main() {
    lengua_cli::init_logging();
    let args: Vec<String> = std::env::args().skip(1).collect();

    if lengua_cli::wants_help(&args) {
        println!("lengua-priority: Show Spanish rule priorities.");
        println!();
        println!("Usage: lengua-priority [OPTIONS] [ID...]");
        println!();
        println!("If ID arguments are given, prints the priority of each one.");
        println!("Otherwise reads rule ids from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  -c, --category CAT   Fall back to the priority of category CAT");
        println!("  --all                List all constructed rules by priority");
        println!("  --table              List the Spanish priority table");
        println!("  -h, --help           Print this help");
        return;
    }

    let (category, args) = lengua_cli::parse_option(&args, "category", Some("-c"))
        .unwrap_or_else(|e| lengua_cli::fatal(&e));
    let category = category.unwrap_or_else(|| DEFAULT_CATEGORY.to_string());
    lengua_cli::reject_unknown_flags(&args, &["--all", "--table"])
        .unwrap_or_else(|e| lengua_cli::fatal(&e));
    let list_all = args.iter().any(|a| a == "--all");
    let list_table = args.iter().any(|a| a == "--table");
    let ids: Vec<String> = args.into_iter().filter(|a| !a.starts_with('-')).collect();

    let es = lengua_cli::spanish();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if list_table {
        for (id, priority) in lengua_cli::ranked_table(&es) {
            let _ = writeln!(out, "{id} {priority}");
        }
        return;
    }

    if list_all {
        let mut ranked: Vec<(&str, Priority)> = SPANISH_RULES
            .iter()
            .chain(SPANISH_MODEL_RULES)
            .map(|spec| (spec.id, es.rule_priority(spec.id, &category)))
            .collect();
        ranked.sort_by_key(|&(_, p)| std::cmp::Reverse(p));
        for (id, priority) in ranked {
            let _ = writeln!(out, "{id} {priority}");
        }
        return;
    }

    if ids.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("error reading stdin: {e}");
                    break;
                }
            };
            let id = line.trim();
            if id.is_empty() {
                continue;
            }
            let _ = writeln!(out, "{id} {}", es.rule_priority(id, &category));
        }
    } else {
        for id in &ids {
            let _ = writeln!(out, "{id} {}", es.rule_priority(id, &category));
        }
    }
}
