use crate::cli::{Cli, Command, PickOptions};
use crate::{clipboard, file_scanner};
use anyhow::{Context, Result};
use pagepick::console::Console;
use pagepick::navigator::{NavigatorOptions, pick_file, pick_folder};
use pagepick::picker::{FnRenderer, ItemPicker, Response};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

fn navigator_options(options: &PickOptions) -> NavigatorOptions {
    NavigatorOptions {
        show_hidden: !options.hide_hidden,
        batch_size: options.batch_size,
        styled: !options.no_color,
    }
}

// Flat listing of every file under `root`, shown relative to it.
fn run_scan<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    root: &Path,
    types: &[String],
    include_ignored: bool,
    options: &PickOptions,
) -> Result<Option<PathBuf>> {
    let root = root
        .canonicalize()
        .with_context(|| format!("cannot open {}", root.display()))?;
    let files = file_scanner::scan_files(&root, types, include_ignored)?;
    if files.is_empty() {
        println!("No files matched under {}.", root.display());
        return Ok(None);
    }

    let renderer = FnRenderer::new(|path: &PathBuf| {
        path.strip_prefix(&root).unwrap_or(path.as_path()).display().to_string()
    })
    .accepting(|_: &str| false);
    let mut picker = ItemPicker::new(renderer).styled(!options.no_color);
    picker.set_heading(format!("{} ({} files)", root.display(), files.len()));

    match picker.pick(console, &files, options.batch_size)? {
        Some(Response::Index(i)) => Ok(Some(files[i].clone())),
        Some(Response::Text(text)) => unreachable!("scan listing accepts no commands, got {text:?}"),
        None => Ok(None),
    }
}

// Main orchestrator: pick something, then report it.
pub fn run_pagepick(cli_args: Cli) -> Result<()> {
    let mut console = Console::stdio();
    let options = &cli_args.options;

    let picked = match &cli_args.command {
        Command::Folder { start } => {
            pick_folder(&mut console, start.as_deref(), navigator_options(options))?
        }
        Command::File { start } => {
            pick_file(&mut console, start.as_deref(), navigator_options(options))?
        }
        Command::Scan {
            root,
            types,
            include_ignored,
        } => run_scan(&mut console, root, types, *include_ignored, options)?,
    };

    let Some(path) = picked else {
        println!("\nNothing selected. Exiting.");
        return Ok(()); // Abandoning the pick is a graceful exit.
    };

    println!("\n{}", path.display());
    if options.copy {
        clipboard::copy_text_to_clipboard(&path.display().to_string())?;
        println!("✅ Copied to the clipboard.");
    }
    Ok(())
}
