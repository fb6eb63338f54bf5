//! xtask - Build tasks for placevisits
//!
//! Run with: cargo xtask <command>
//!
//! Commands:
//! - gen-docs: Generate documentation (man page, COMMANDS.md)

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Arg, CommandFactory, Parser, Subcommand};

use placevisits::cli::Cli;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build tasks for placevisits")]
struct Xtask {
    #[command(subcommand)]
    command: XtaskCommand,
}

#[derive(Subcommand)]
enum XtaskCommand {
    /// Generate documentation from CLI definitions
    #[command(name = "gen-docs")]
    GenDocs {
        /// Output directory (default: docs/)
        #[arg(long, short, default_value = "docs")]
        output: PathBuf,

        /// Generate the man page
        #[arg(long)]
        man: bool,

        /// Generate COMMANDS.md
        #[arg(long)]
        markdown: bool,
    },
}

fn main() -> Result<()> {
    let args = Xtask::parse();

    match args.command {
        XtaskCommand::GenDocs {
            output,
            man,
            markdown,
        } => {
            // If no specific format is specified, generate both
            let gen_all = !man && !markdown;

            if gen_all || man {
                generate_man_page(&output)?;
            }
            if gen_all || markdown {
                generate_markdown(&output)?;
            }
        }
    }

    Ok(())
}

/// Generate the man page using clap_mangen
fn generate_man_page(output: &Path) -> Result<()> {
    use clap_mangen::Man;

    let man_dir = output.join("man");
    fs::create_dir_all(&man_dir).context("Failed to create man directory")?;

    let man = Man::new(Cli::command());
    let mut buffer = Vec::new();
    man.render(&mut buffer)?;

    let path = man_dir.join("placevisits.1");
    fs::write(&path, buffer).with_context(|| format!("Failed to write {}", path.display()))?;
    println!("Generated: {}", path.display());
    Ok(())
}

/// Flag column for an option: `-v, --verbose <VALUE>`
fn flag_label(arg: &Arg) -> Option<String> {
    let long = arg.get_long().map(|l| format!("--{}", l));
    let short = arg.get_short().map(|s| format!("-{}", s));
    let mut label = match (short, long) {
        (Some(s), Some(l)) => format!("{}, {}", s, l),
        (None, Some(l)) => l,
        (Some(s), None) => s,
        (None, None) => return None,
    };
    if let Some(names) = arg.get_value_names() {
        for name in names {
            label.push_str(&format!(" <{}>", name));
        }
    }
    Some(label)
}

/// Generate COMMANDS.md markdown documentation
fn generate_markdown(output: &Path) -> Result<()> {
    fs::create_dir_all(output).context("Failed to create output directory")?;

    let cmd = Cli::command();
    let mut markdown = String::new();

    markdown.push_str("# placevisits Command Reference\n\n");
    markdown.push_str("This document is auto-generated from the CLI definitions.\n\n");

    if let Some(about) = cmd.get_about() {
        markdown.push_str(&format!("{}\n\n", about));
    }

    markdown.push_str("## Options\n\n");
    for arg in cmd.get_arguments() {
        let id = arg.get_id().as_str();
        if id == "help" || id == "version" {
            continue;
        }
        let Some(flag) = flag_label(arg) else {
            continue;
        };
        markdown.push_str(&format!("- `{}`", flag));
        if arg.is_required_set() {
            markdown.push_str(" (required)");
        }
        if let Some(help) = arg.get_help() {
            markdown.push_str(&format!(": {}", help));
        }
        markdown.push('\n');
    }
    markdown.push('\n');

    if let Some(long_about) = cmd.get_long_about() {
        markdown.push_str("## Description\n\n");
        markdown.push_str("```\n");
        markdown.push_str(&format!("{}\n", long_about));
        markdown.push_str("```\n\n");
    }

    markdown.push_str("\n*Generated by `cargo xtask gen-docs`*\n");

    let output_path = output.join("COMMANDS.md");
    fs::write(&output_path, markdown)?;
    println!("Generated: {}", output_path.display());

    Ok(())
}
