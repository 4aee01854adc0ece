use clap::{Args, Parser, Subcommand};
use pagepick::picker::MAX_BATCH_SIZE;
use std::path::PathBuf;

/// pagepick – page through folders and files at the prompt and pick one
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[command(flatten)]
    pub options: PickOptions,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Browse folders and choose one (space selects the folder being listed)
    Folder {
        /// Folder to start in; "Downloads" means the one in your home folder (defaults to home)
        #[arg(value_name = "DIR")]
        start: Option<PathBuf>,
    },
    /// Browse folders and choose a file
    File {
        /// Folder to start in; "Downloads" means the one in your home folder (defaults to home)
        #[arg(value_name = "DIR")]
        start: Option<PathBuf>,
    },
    /// List every file under a folder and choose one by number
    Scan {
        /// Root to scan (defaults to CWD)
        #[arg(value_name = "DIR", default_value = ".")]
        root: PathBuf,

        /// Comma-separated file-types to include (extension only, no dot).
        #[arg(long, value_delimiter = ',', value_name = "EXTENSIONS")]
        types: Vec<String>,

        /// Include files ignored by .gitignore, and hidden files
        #[arg(long)]
        include_ignored: bool,
    },
}

#[derive(Args, Debug)]
pub struct PickOptions {
    /// Items listed per screen
    #[arg(long, global = true, default_value_t = 40, value_parser = parse_batch_size)]
    pub batch_size: usize,

    /// Start with hidden entries left out (toggle with H while browsing)
    #[arg(long, global = true)]
    pub hide_hidden: bool,

    /// Plain headings without terminal colours
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Also copy the chosen path to the clipboard
    #[arg(long, global = true)]
    pub copy: bool,
}

fn parse_batch_size(s: &str) -> Result<usize, String> {
    let n: usize = s.parse().map_err(|e| format!("{e}"))?;
    if (1..=MAX_BATCH_SIZE).contains(&n) {
        Ok(n)
    } else {
        Err(format!("must be between 1 and {MAX_BATCH_SIZE}"))
    }
}
