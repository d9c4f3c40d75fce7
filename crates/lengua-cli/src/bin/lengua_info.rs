// lengua-info: Print the Spanish profile as JSON.
//
// Usage:
//   lengua-info [OPTIONS]
//
// Options:
//   --compact    Print on a single line
//   -h, --help   Print help

use lengua_core::language::{ComponentSelection, Contributor, Language, MaintainedState};
use lengua_core::priority::Priority;
use lengua_es::rules::{SPANISH_MODEL_RULES, SPANISH_RULES};
use serde::Serialize;

#[derive(Serialize)]
struct ProfileInfo<'a> {
    name: &'a str,
    code: &'a str,
    variants: Vec<String>,
    maintainers: &'a [Contributor],
    maintained_state: MaintainedState,
    components: ComponentSelection,
    opening_quote: &'a str,
    closing_quote: &'a str,
    rules: Vec<RuleInfo>,
}

#[derive(Serialize)]
struct RuleInfo {
    id: &'static str,
    priority: Priority,
    requires_model: bool,
}

fn main() {
    lengua_cli::init_logging();
    let args: Vec<String> = std::env::args().skip(1).collect();

    if lengua_cli::wants_help(&args) {
        println!("lengua-info: Print the Spanish language profile as JSON.");
        println!();
        println!("Usage: lengua-info [OPTIONS]");
        println!();
        println!("Options:");
        println!("  --compact    Print on a single line");
        println!("  -h, --help   Print this help");
        return;
    }
    let compact = args.iter().any(|a| a == "--compact");

    let es = lengua_cli::spanish();
    let info = ProfileInfo {
        name: es.name(),
        code: es.short_code(),
        variants: es.variants().iter().map(ToString::to_string).collect(),
        maintainers: es.maintainers(),
        maintained_state: es.maintained_state(),
        components: es.components(),
        opening_quote: es.opening_quote(),
        closing_quote: es.closing_quote(),
        rules: SPANISH_RULES
            .iter()
            .chain(SPANISH_MODEL_RULES)
            .map(|spec| RuleInfo {
                id: spec.id,
                priority: es.priority_of(spec.id),
                requires_model: spec.kind.requires_model(),
            })
            .collect(),
    };

    let json = if compact {
        serde_json::to_string(&info)
    } else {
        serde_json::to_string_pretty(&info)
    };
    match json {
        Ok(s) => println!("{s}"),
        Err(e) => lengua_cli::fatal(&format!("failed to serialize profile: {e}")),
    }
}
