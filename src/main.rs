// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::io::{self, BufRead, Write};

use anyhow::{bail, Context, Result};
use clap::Parser;
use serde_json::json;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use suggestrix::{load_index, verify_index, Lookup, LookupKind, LookupOptions, SharedIndex, SuggestConfig};

mod cli;
use cli::{display, Cli, Commands};

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = SuggestConfig::resolve(cli.config.as_deref()).context("failed to load config")?;
    cli.apply(&mut config);
    init_tracing(&config.log_level);
    debug!(?config, "resolved configuration");

    let path = config
        .vocabulary
        .clone()
        .context("no vocabulary: pass --vocab <FILE> or set `vocabulary` in the config file")?;
    let index = load_index(&path, &config.feed)
        .with_context(|| format!("failed to load vocabulary from {}", path.display()))?;
    let shared = SharedIndex::new(index);
    let options = config.lookup_options();

    match cli.command {
        Commands::Lookup { query, json } => {
            let result = shared.lookup(&query, &options);
            emit(&query, &result, json)?;
        }
        Commands::Top { json } => {
            let result = Lookup::new(LookupKind::Top, shared.global_top_list());
            emit("", &result, json)?;
        }
        Commands::Repl => run_repl(&shared, &options)?,
        Commands::Inspect { json } => {
            let index = shared.read();
            let stats = index.stats();
            let report = verify_index(&index);
            if json {
                let errors: Vec<String> = report.errors.iter().map(ToString::to_string).collect();
                let out = json!({
                    "stats": stats,
                    "audit": {
                        "nodesChecked": report.nodes_checked,
                        "wordsChecked": report.words_checked,
                        "errors": errors,
                    },
                });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                display::print_inspect(&stats, &report);
            }
            if !report.is_ok() {
                bail!("index audit found {} violation(s)", report.errors.len());
            }
        }
    }
    Ok(())
}

/// `RUST_LOG` wins; otherwise the configured level. Logs go to stderr so
/// `--json` output stays clean.
fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn emit(query: &str, result: &Lookup, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
    } else {
        display::print_lookup(query, result);
    }
    Ok(())
}

fn run_repl(shared: &SharedIndex, options: &LookupOptions) -> Result<()> {
    info!(words = shared.read().len(), "ready; :top lists the best words, :quit exits");
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let query = line.trim_end_matches(['\r', '\n']);
        match query.trim() {
            ":quit" | ":q" => break,
            ":top" => display::print_lookup("", &Lookup::new(LookupKind::Top, shared.global_top_list())),
            _ => display::print_lookup(query, &shared.lookup(query, options)),
        }
    }
    Ok(())
}
