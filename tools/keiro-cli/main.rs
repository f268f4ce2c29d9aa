use clap::Parser;
use keiro::prelude::*;
use std::fs;
use std::io::{self, Write};

/// A flow definition inspection and exchange CLI
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to a flow JSON file to import (object form or bare node array)
    flow_path: Option<String>,

    /// Path of the persistence slot to resume from and write back to
    #[arg(short, long)]
    slot: Option<String>,

    /// Validate only; never write the slot
    #[arg(short, long)]
    check: bool,

    /// Print the canonical pretty-printed document to stdout
    #[arg(short, long)]
    export: bool,

    /// Assume "load anyway" on flagged imports (for scripted use)
    #[arg(short = 'y', long)]
    yes: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if cli.flow_path.is_none() && cli.slot.is_none() {
        exit_with_error("Provide a flow file to import, a slot to resume from, or both.");
    }

    let mut store = open_store(&cli);

    if let Some(flow_path) = &cli.flow_path {
        let raw = fs::read_to_string(flow_path).unwrap_or_else(|e| {
            exit_with_error(&format!("Failed to read flow file '{}': {}", flow_path, e))
        });

        let outcome = import_flow(&raw)
            .unwrap_or_else(|e| exit_with_error(&format!("Import failed: {}", e)));

        match outcome {
            ImportOutcome::Clean(document) => {
                store.load_document(document);
                println!("Loaded '{}' cleanly.", flow_path);
            }
            ImportOutcome::Flagged { document, errors } => {
                println!(
                    "{} node(s) in '{}' have validation issues:",
                    errors.len(),
                    flow_path
                );
                print_issues(&errors);

                if !cli.yes && !confirm("Load anyway?") {
                    exit_with_error("Import cancelled.");
                }
                store.load_document(document);
                println!("Loaded '{}' with pending issues.", flow_path);
            }
        }
    }

    print_summary(&store);

    if cli.export {
        let json = store
            .export()
            .unwrap_or_else(|e| exit_with_error(&format!("Export failed: {}", e)));
        println!("\n{}", json);
    }
}

/// Opens the store for this invocation: slot-backed when a slot path was
/// given (and not in check mode), in-memory otherwise.
fn open_store(cli: &Cli) -> FlowStore {
    match &cli.slot {
        Some(path) if !cli.check => FlowStore::with_slot(Box::new(FileSlotStore::new(path))),
        Some(path) => {
            // Check mode reads the slot once but never writes it back.
            let slot = FileSlotStore::new(path);
            match slot.load() {
                Ok(Some(nodes)) => {
                    let mut store = FlowStore::new();
                    store.dispatch(Action::SetNodes {
                        nodes,
                        start_node_id: None,
                    });
                    store
                }
                Ok(None) => FlowStore::new(),
                Err(e) => exit_with_error(&format!("Failed to read slot: {}", e)),
            }
        }
        None => FlowStore::new(),
    }
}

fn print_summary(store: &FlowStore) {
    let state = store.state();
    println!("\n--- Flow Summary ---");
    println!("Nodes:      {}", state.nodes.len());
    println!(
        "Start node: {}",
        state.start_node_id.as_deref().unwrap_or("(none)")
    );

    let errors = store.errors();
    let warnings = store.warnings();

    if errors.is_empty() {
        println!("Errors:     none");
    } else {
        println!("Errors:     {}", errors.len());
        print_issues(&errors);
    }
    if warnings.is_empty() {
        println!("Warnings:   none");
    } else {
        println!("Warnings:   {}", warnings.len());
        print_issues(&warnings);
    }
}

fn print_issues(issues: &[NodeIssues]) {
    for issue in issues {
        let label = if issue.node_id.is_empty() {
            "(empty id)"
        } else {
            issue.node_id.as_str()
        };
        for message in &issue.messages {
            println!("  {} - {}", label, message);
        }
    }
}

/// Prompts for a yes/no answer, defaulting to no.
fn confirm(prompt_text: &str) -> bool {
    let mut line = String::new();

    print!("> {} [y/N]: ", prompt_text);
    io::stdout().flush().unwrap();

    io::stdin()
        .read_line(&mut line)
        .expect("Failed to read line");
    matches!(line.trim(), "y" | "Y" | "yes")
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
