//! pixhound CLI — driving adapter for the detection engine.
//!
//! Subcommands:
//! - `detect <url> [--method M] [--body FILE] [--rules FILE]` — run one
//!   request through the detector and print the extracted event
//! - `match <url> [--rules FILE]` — print which rule matches
//! - `check <rules-file>` — validate a JSON/YAML rules file loads
//! - `list [--rules FILE]` — print the catalogue

use std::collections::HashMap;
use std::process;

use pixhound::{categorize, Catalogue, CatalogueConfig, Detector, RequestContext};
use pixhound_rules::{builtin_catalogue, tag_hints};
use tracing_subscriber::EnvFilter;

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let result = match args[1].as_str() {
        "detect" => cmd_detect(&args[2..]),
        "match" => cmd_match(&args[2..]),
        "check" => cmd_check(&args[2..]),
        "list" => cmd_list(&args[2..]),
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        other => {
            eprintln!("error: unknown command \"{other}\"");
            print_usage();
            process::exit(1);
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

// ═══════════════════════════════════════════════════════════════════════════════
// Commands
// ═══════════════════════════════════════════════════════════════════════════════

fn cmd_detect(args: &[String]) -> Result<(), String> {
    let (url, flags) = parse_flags(args)?;
    let url = url.ok_or("detect requires a URL")?;

    let catalogue = build_catalogue(flags.get("rules").map(String::as_str))?;
    let detector = Detector::new(catalogue);

    let method = flags
        .get("method")
        .cloned()
        .unwrap_or_else(|| "GET".to_owned());
    let body = flags
        .get("body")
        .map(|path| {
            std::fs::read_to_string(path).map_err(|e| format!("failed to read \"{path}\": {e}"))
        })
        .transpose()?;

    // Container events POSTed to generic ad-network endpoints are
    // reprocessed under the Tag Manager rule.
    let effective_url = match &body {
        Some(body) if tag_hints::should_reroute(&url, body) => {
            tag_hints::TAG_MANAGER_REROUTE_URL.to_owned()
        }
        _ => url.clone(),
    };

    let mut ctx = RequestContext::new(effective_url, method);
    if let Some(body) = body {
        ctx = ctx.with_body(body);
    }

    let matched = detector.process(&ctx, |rule, event, _| {
        println!("rule:       {} ({})", rule.name(), rule.category());
        println!("event:      {}", event.event_name());
        println!("tracker id: {}", event.tracker_id());

        let groups = categorize(event.parameters(), rule.dictionary());
        for group in groups {
            println!("{}:", group.label);
            for item in group.items {
                println!("  {} = {}", item.name, item.value);
            }
        }
    });

    if !matched {
        println!("(no detection)");
    }

    Ok(())
}

fn cmd_match(args: &[String]) -> Result<(), String> {
    let (url, flags) = parse_flags(args)?;
    let url = url.ok_or("match requires a URL")?;

    let catalogue = build_catalogue(flags.get("rules").map(String::as_str))?;
    match catalogue.find_matching_rule(&url) {
        Some(rule) => println!("{}", rule.name()),
        None => println!("(no match)"),
    }

    Ok(())
}

fn cmd_check(args: &[String]) -> Result<(), String> {
    let path = args.first().ok_or("check requires a rules file path")?;
    let config = load_rules(path)?;
    let count = config.rules.len();

    // Build against a fresh catalogue to surface duplicate names and
    // invalid rules the same way runtime loading would.
    config.build().map_err(|e| e.to_string())?;

    println!("Config valid ({count} rules)");
    Ok(())
}

fn cmd_list(args: &[String]) -> Result<(), String> {
    let (_, flags) = parse_flags(args)?;
    let catalogue = build_catalogue(flags.get("rules").map(String::as_str))?;

    for rule in catalogue.snapshot().iter() {
        println!(
            "{:<24} {:<14} {}",
            rule.name(),
            rule.category().storage_key(),
            rule.url_patterns().join(", ")
        );
    }

    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════════════
// Catalogue assembly (composition root)
// ═══════════════════════════════════════════════════════════════════════════════

/// The built-in catalogue, with rules from `--rules FILE` appended after
/// the catch-all (lowest priority).
fn build_catalogue(rules_file: Option<&str>) -> Result<Catalogue, String> {
    let catalogue = builtin_catalogue();

    if let Some(path) = rules_file {
        let config = load_rules(path)?;
        let appended = config.rules.len();
        for rule_config in config.rules {
            let rule = rule_config.build().map_err(|e| e.to_string())?;
            catalogue.add_rule(rule).map_err(|e| e.to_string())?;
        }
        tracing::debug!(path, appended, "extra rules registered");
    }

    Ok(catalogue)
}

fn load_rules(path: &str) -> Result<CatalogueConfig, String> {
    let content =
        std::fs::read_to_string(path).map_err(|e| format!("failed to read \"{path}\": {e}"))?;

    let is_json = std::path::Path::new(path)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        serde_json::from_str(&content).map_err(|e| format!("JSON parse error: {e}"))
    } else {
        // Default to YAML (handles .yaml and .yml)
        serde_yaml::from_str(&content).map_err(|e| format!("YAML parse error: {e}"))
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Argument parsing
// ═══════════════════════════════════════════════════════════════════════════════

/// Split args into one positional value and `--flag value` pairs.
fn parse_flags(args: &[String]) -> Result<(Option<String>, HashMap<String, String>), String> {
    let mut positional = None;
    let mut flags = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        if let Some(name) = args[i].strip_prefix("--") {
            let value = args
                .get(i + 1)
                .ok_or_else(|| format!("flag --{name} requires a value"))?;
            flags.insert(name.to_owned(), value.clone());
            i += 2;
        } else if positional.is_none() {
            positional = Some(args[i].clone());
            i += 1;
        } else {
            return Err(format!("unexpected argument \"{}\"", args[i]));
        }
    }

    Ok((positional, flags))
}

fn print_usage() {
    eprintln!(
        "Usage: pixhound <command> [options]

Commands:
  detect <url> [--method M] [--body FILE] [--rules FILE]   Run detection on one request
  match <url> [--rules FILE]                               Print the matching rule
  check <rules-file>                                       Validate a rules file
  list [--rules FILE]                                      Print the catalogue
  help                                                     Show this help"
    );
}
