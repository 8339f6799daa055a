use std::path::Path;

use anyhow::Context;
use caldiff_diff::{Change, ChangeKind, ChangeSet, Child, Differ, Entity, SkipSet};
use caldiff_types::{Component, QualifiedName, ICALENDAR_NS};
use colored::Colorize;

use crate::cli::*;
use crate::config::DiffConfig;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Diff(args) => cmd_diff(args, &cli.format),
        Command::Skips(args) => cmd_skips(args, &cli.format),
    }
}

fn cmd_diff(args: DiffArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let skip = resolve_skip_set(&args.skips)?;
    let left = load_document(&args.left)?;
    let right = load_document(&args.right)?;

    let set = Differ::new(skip)
        .diff(&left, &right)
        .with_context(|| format!("diffing {} against {}", args.left.display(), args.right.display()))?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&set)?),
        OutputFormat::Text => {
            for line in render_changes(&set) {
                println!("{line}");
            }
            println!("{}", summary_line(&set));
        }
    }
    Ok(())
}

fn cmd_skips(args: SkipsArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let skip = resolve_skip_set(&args.skips)?;
    match format {
        OutputFormat::Json => {
            let names: Vec<String> = skip.iter().map(QualifiedName::to_clark).collect();
            println!("{}", serde_json::to_string_pretty(&names)?);
        }
        OutputFormat::Text => {
            if skip.is_empty() {
                println!("Skip set is empty.");
            }
            for name in skip.iter() {
                println!("  {}", name.to_clark().dimmed());
            }
        }
    }
    Ok(())
}

/// Config file first, then command-line overrides.
fn resolve_skip_set(args: &SkipArgs) -> anyhow::Result<SkipSet> {
    let mut config = match &args.config {
        Some(path) => DiffConfig::load(path)?,
        None => DiffConfig::default(),
    };
    if args.no_default_skips {
        config.use_default_skips = false;
    }
    config.skip.extend(args.skip.iter().cloned());
    tracing::debug!(?config, "resolved skip configuration");
    config.skip_set()
}

fn load_document(path: &Path) -> anyhow::Result<Component> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    Component::from_json(&text).with_context(|| format!("parsing {}", path.display()))
}

/// iCalendar names print in their conventional upper-case form; anything else
/// in Clark notation.
fn display_name(name: &QualifiedName) -> String {
    if name.namespace() == ICALENDAR_NS {
        name.local_name().to_ascii_uppercase()
    } else {
        name.to_clark()
    }
}

fn describe(child: &Child) -> String {
    match child {
        Child::Leaf(leaf) => format!("{} = {}", display_name(leaf.name()), leaf.value()),
        Child::Composite(component) => match component.property_value("uid") {
            Some(uid) => format!("{} (uid {})", display_name(component.name()), uid),
            None => display_name(component.name()),
        },
    }
}

fn render_change(change: &Change, depth: usize, out: &mut Vec<String>) {
    let indent = "    ".repeat(depth);
    let line = match change.kind {
        ChangeKind::Add => format!("{indent}{} {}", "+".green().bold(), describe(&change.subject).green()),
        ChangeKind::Delete => format!("{indent}{} {}", "-".red().bold(), describe(&change.subject).red()),
        ChangeKind::Update => match (&change.subject, &change.previous) {
            (Child::Leaf(leaf), Some(Child::Leaf(previous))) if leaf.value() != previous.value() => {
                format!(
                    "{indent}{} {}: {} -> {}",
                    "~".yellow().bold(),
                    display_name(leaf.name()),
                    previous.value().to_string().red(),
                    leaf.value().to_string().green(),
                )
            }
            _ => format!("{indent}{} {}", "~".yellow().bold(), describe(&change.subject)),
        },
    };
    out.push(line);
    for nested in &change.nested {
        render_change(nested, depth + 1, out);
    }
}

pub fn render_changes(set: &ChangeSet) -> Vec<String> {
    let mut out = Vec::new();
    for change in set.iter() {
        render_change(change, 0, &mut out);
    }
    out
}

pub fn summary_line(set: &ChangeSet) -> String {
    if set.is_empty() {
        return format!("{} No changes.", "✓".green().bold());
    }
    format!(
        "{} changes ({} added, {} deleted, {} updated; {} records in total)",
        set.len().to_string().bold(),
        set.additions(),
        set.deletions(),
        set.updates(),
        set.total_recursive(),
    )
}
