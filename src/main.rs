//! CLI entry point for combo-engine
//!
//! Provides command-line interface for validating rule files,
//! listing rules, and replaying input scripts through an engine.

use clap::{Parser, Subcommand};
use colored::*;
use combo_engine::config::EngineConfig;
use combo_engine::core::{
    builtin_rules, parse_rules_file, parse_script_file, ComboEngine, OverlapDetector, RuleSpec,
    ScriptEvent,
};
use std::cell::RefCell;
use std::fs;
use std::path::PathBuf;
use std::rc::Rc;

#[derive(Parser)]
#[command(name = "combo-engine")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a rules file and lint for unreachable rules
    Check {
        /// Path to the combo rules file
        #[arg(short, long)]
        rules: PathBuf,
    },

    /// List all rules in a rules file
    List {
        /// Path to the combo rules file
        #[arg(short, long)]
        rules: PathBuf,
    },

    /// Replay an input script through an engine
    Replay {
        /// Path to the combo rules file (built-in rules when omitted)
        #[arg(short, long)]
        rules: Option<PathBuf>,

        /// Path to the input script
        #[arg(short, long)]
        script: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check { rules } => check_rules(&rules)?,
        Commands::List { rules } => list_rules(&rules)?,
        Commands::Replay { rules, script } => replay_script(rules.as_ref(), &script)?,
    }

    Ok(())
}

/// Read a user-supplied path with tilde expansion
fn read_file(path: &PathBuf) -> anyhow::Result<String> {
    let expanded = shellexpand::tilde(
        path.to_str()
            .ok_or_else(|| anyhow::anyhow!("Invalid path encoding"))?,
    );
    let path = std::path::Path::new(expanded.as_ref());

    fs::read_to_string(path).map_err(|e| anyhow::anyhow!("Failed to read file: {}", e))
}

/// Parse a rules file into specs
fn load_rule_specs(path: &PathBuf) -> anyhow::Result<Vec<RuleSpec>> {
    let content = read_file(path)?;
    Ok(parse_rules_file(&content)?)
}

/// Validate a rules file against the engine configuration and lint for
/// unreachable rules
fn check_rules(rules_path: &PathBuf) -> anyhow::Result<()> {
    println!("{} Parsing rules: {}", "→".cyan(), rules_path.display());

    let specs = load_rule_specs(rules_path)?;
    println!("{} Found {} rules\n", "✓".green(), specs.len());

    // Registration-time validation: rule lengths vs the buffer bound
    let rules = specs.iter().cloned().map(RuleSpec::into_rule).collect();
    ComboEngine::new(EngineConfig::default(), rules)?;

    // Reachability lint
    let mut detector = OverlapDetector::new();
    for spec in specs {
        detector.add_spec(spec);
    }

    let overlaps = detector.find_overlaps();

    if overlaps.is_empty() {
        println!("{} {}", "✓".green().bold(), "No unreachable rules!".bold());
    } else {
        println!(
            "{} Found {} finding{}:\n",
            "✗".red().bold(),
            overlaps.len(),
            if overlaps.len() == 1 { "" } else { "s" }
        );

        for (i, overlap) in overlaps.iter().enumerate() {
            println!(
                "{} {}",
                format!("Finding {}", i + 1).yellow().bold(),
                overlap
            );
        }

        println!("\n{}", "⚠ These rules can never fire at runtime!".yellow());
        std::process::exit(1);
    }

    Ok(())
}

/// List all rules in a rules file
fn list_rules(rules_path: &PathBuf) -> anyhow::Result<()> {
    let specs = load_rule_specs(rules_path)?;

    println!(
        "{}",
        format!("Combo rules from: {}\n", rules_path.display()).bold()
    );

    let total = specs.len();

    for spec in specs {
        let pattern = spec
            .pattern
            .iter()
            .map(|t| t.name())
            .collect::<Vec<_>>()
            .join(" ");

        println!(
            "{} → {}",
            pattern.cyan().bold(),
            format!("{}", spec.action).green()
        );
    }

    println!("\n{} Total: {} rules", "✓".green(), total);

    Ok(())
}

/// Feed an input script through an engine and report executed combos
fn replay_script(rules_path: Option<&PathBuf>, script_path: &PathBuf) -> anyhow::Result<()> {
    let rules = match rules_path {
        Some(path) => load_rule_specs(path)?
            .into_iter()
            .map(RuleSpec::into_rule)
            .collect(),
        None => builtin_rules(),
    };

    let script = parse_script_file(&read_file(script_path)?)?;

    let mut engine = ComboEngine::new(EngineConfig::default(), rules)?;

    let executed = Rc::new(RefCell::new(0usize));
    let counter = Rc::clone(&executed);
    engine.subscribe(move |action| {
        *counter.borrow_mut() += 1;
        println!("{} Combo executed: {}", "✓".green().bold(), format!("{}", action).cyan());
    });

    println!(
        "{} Replaying {} events from {}\n",
        "→".cyan(),
        script.len(),
        script_path.display()
    );

    for event in script {
        match event {
            ScriptEvent::Press(token) => {
                println!("  press {}", format!("{}", token).magenta());
                engine.add_command(token);
            }
            ScriptEvent::Wait(seconds) => {
                if engine.tick(seconds) {
                    println!("  {} combo window expired", "…".dimmed());
                }
            }
        }
    }

    let total = *executed.borrow();
    if total == 0 {
        println!("\n{} No combos executed", "✗".yellow());
    } else {
        println!(
            "\n{} {} combo{} executed",
            "✓".green(),
            total,
            if total == 1 { "" } else { "s" }
        );
    }

    Ok(())
}
