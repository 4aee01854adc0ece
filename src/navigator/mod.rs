//! Folder and file browsing on top of the paginated picker.
//!
//! One state machine serves both the folder picker and the file picker. Each
//! round lists the current folder afresh, lets the user pick, and then either
//! finishes (a folder or file was chosen, or input ran out) or moves: into a
//! child folder, up to the parent (or onto another drive at a root), or back
//! to the same folder with hidden entries toggled.

pub mod fs;
pub mod start;

use crate::console::Console;
use crate::picker::{ItemPicker, ItemRenderer, PickerError, PickerPrompts, Response};
use fs::{EnumerationOptions, Entry, Filesystem, LocalFilesystem, describe_volumes};
use regex::Regex;
use start::resolve_start;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use thiserror::Error;

/// Entries listed per screen while browsing.
pub const NAVIGATOR_BATCH_SIZE: usize = 40;

const HIDDEN_MARKER: &str = "*H";
const PARENT: &str = "..";
const CURRENT_FOLDER: &str = " ";

static DRIVE_SPEC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z])(?::\\?)?$").expect("drive pattern is valid")
});

#[derive(Debug, Error)]
pub enum NavigatorError {
    #[error("could not determine the home directory")]
    NoHomeDirectory,
    #[error(transparent)]
    Picker(#[from] PickerError),
}

impl From<io::Error> for NavigatorError {
    fn from(e: io::Error) -> Self {
        NavigatorError::Picker(PickerError::Io(e))
    }
}

/// How a browsing session ended with a choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Folder(PathBuf),
    File(PathBuf),
}

impl Selection {
    pub fn path(&self) -> &Path {
        match self {
            Selection::Folder(p) | Selection::File(p) => p,
        }
    }
}

/// What sets the folder picker and the file picker apart: what gets listed,
/// how entries look, and which typed commands are allowed.
pub trait NavigationMode: ItemRenderer<Entry> {
    /// List folders only; a numbered pick then always descends.
    const DIRECTORIES_ONLY: bool;
    /// Whether a lone space chooses the folder being listed.
    const SELECTS_CURRENT_FOLDER: bool;

    fn help(&self) -> &'static str;
}

/// Browses folders; ends by choosing the folder being listed.
#[derive(Debug, Clone, Copy, Default)]
pub struct FolderMode;

impl ItemRenderer<Entry> for FolderMode {
    fn render(&self, entry: &Entry) -> String {
        if entry.hidden {
            format!("{} {HIDDEN_MARKER}", entry.name)
        } else {
            entry.name.clone()
        }
    }

    fn accepts(&self, response: &str) -> bool {
        response == CURRENT_FOLDER || is_navigation_command(response)
    }
}

impl NavigationMode for FolderMode {
    const DIRECTORIES_ONLY: bool = true;
    const SELECTS_CURRENT_FOLDER: bool = true;

    fn help(&self) -> &'static str {
        "<Enter> to continue if listing paused; <Space> to select current folder;\n\
         (n)n to drill down to nn'th folder; .. for parent folder; H to show/hide Hidden; ? for Help\n\n\
         Please enter your response: "
    }
}

/// Browses folders and files; ends by choosing a file.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileMode;

impl ItemRenderer<Entry> for FileMode {
    fn render(&self, entry: &Entry) -> String {
        match (entry.is_dir, entry.hidden) {
            (false, _) => entry.name.clone(),
            (true, false) => format!("[{}]", entry.name),
            (true, true) => format!("[{}] {HIDDEN_MARKER}", entry.name),
        }
    }

    fn accepts(&self, response: &str) -> bool {
        is_navigation_command(response)
    }
}

impl NavigationMode for FileMode {
    const DIRECTORIES_ONLY: bool = false;
    const SELECTS_CURRENT_FOLDER: bool = false;

    fn help(&self) -> &'static str {
        "<Enter> to continue if listing paused; (n)n to select file or folder;\n \
         .. for parent folder; H to show/hide Hidden; ? for Help\n\n\
         Please enter your response: "
    }
}

fn is_navigation_command(response: &str) -> bool {
    response.eq_ignore_ascii_case("h") || response == PARENT
}

/// How a session started by [`pick_folder`] or [`pick_file`] behaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigatorOptions {
    /// List hidden entries from the first screen (H still toggles them).
    pub show_hidden: bool,
    pub batch_size: usize,
    /// Colour the headings.
    pub styled: bool,
}

impl Default for NavigatorOptions {
    fn default() -> Self {
        NavigatorOptions {
            show_hidden: true,
            batch_size: NAVIGATOR_BATCH_SIZE,
            styled: true,
        }
    }
}

pub struct Navigator<F, M> {
    fs: F,
    picker: ItemPicker<M>,
    current: PathBuf,
    show_hidden: bool,
    batch_size: usize,
}

impl<F: Filesystem, M: NavigationMode> Navigator<F, M> {
    pub fn new(fs: F, mode: M, start: impl Into<PathBuf>) -> Self {
        let prompts = PickerPrompts {
            help: mode.help().to_string(),
            ..PickerPrompts::default()
        };
        Navigator {
            fs,
            picker: ItemPicker::new(mode).with_prompts(prompts),
            current: start.into(),
            show_hidden: true,
            batch_size: NAVIGATOR_BATCH_SIZE,
        }
    }

    pub fn show_hidden(mut self, show: bool) -> Self {
        self.show_hidden = show;
        self
    }

    pub fn batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    pub fn styled(mut self, styled: bool) -> Self {
        self.picker = self.picker.styled(styled);
        self
    }

    pub fn options(self, options: NavigatorOptions) -> Self {
        self.show_hidden(options.show_hidden)
            .batch_size(options.batch_size)
            .styled(options.styled)
    }

    pub fn current_folder(&self) -> &Path {
        &self.current
    }

    pub fn showing_hidden(&self) -> bool {
        self.show_hidden
    }

    /// Browses until something is chosen (`Some`) or input runs out (`None`).
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> Result<Option<Selection>, NavigatorError> {
        loop {
            let entries = self.enumerate(console)?;
            let heading = self.heading();
            self.picker.set_heading(heading);

            match self.picker.pick(console, &entries, self.batch_size)? {
                None => {
                    tracing::debug!("browsing abandoned");
                    return Ok(None);
                }
                Some(Response::Index(index)) => {
                    let entry = &entries[index];
                    if entry.is_dir {
                        tracing::debug!("descending into {}", entry.path.display());
                        self.current = entry.path.clone();
                    } else {
                        return Ok(Some(Selection::File(entry.path.clone())));
                    }
                }
                Some(Response::Text(text)) => {
                    if text == CURRENT_FOLDER && M::SELECTS_CURRENT_FOLDER {
                        return Ok(Some(Selection::Folder(self.current.clone())));
                    } else if text.eq_ignore_ascii_case("h") {
                        self.show_hidden = !self.show_hidden;
                        tracing::debug!(show_hidden = self.show_hidden, "toggled hidden entries");
                    } else if text == PARENT {
                        if !self.ascend(console)? {
                            return Ok(None);
                        }
                    } else {
                        unreachable!("picker accepted a response the navigator cannot handle: {text:?}");
                    }
                }
            }
        }
    }

    fn heading(&self) -> String {
        if self.show_hidden {
            format!("{} (showing Hidden {HIDDEN_MARKER})", self.current.display())
        } else {
            self.current.display().to_string()
        }
    }

    fn enumerate<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
    ) -> Result<Vec<Entry>, NavigatorError> {
        let options = EnumerationOptions {
            include_hidden: self.show_hidden,
            directories_only: M::DIRECTORIES_ONLY,
        };
        match self.fs.children(&self.current, options) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                tracing::warn!("cannot list {}: {}", self.current.display(), e);
                console.write_line(&format!("\nCannot read {}: {e}", self.current.display()))?;
                Ok(Vec::new())
            }
        }
    }

    // Returns false if input ran out while asking for a drive.
    fn ascend<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> Result<bool, NavigatorError> {
        if let Some(parent) = self.fs.parent(&self.current) {
            tracing::debug!("ascending to {}", parent.display());
            self.current = parent;
            return Ok(true);
        }
        match self.choose_volume(console)? {
            Some(root) => {
                tracing::debug!("switching to volume {}", root.display());
                self.current = root;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn choose_volume<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
    ) -> io::Result<Option<PathBuf>> {
        let volumes = self.fs.volumes();
        if volumes.is_empty() {
            tracing::debug!("no volumes to choose from, staying at {}", self.current.display());
            return Ok(Some(self.current.clone()));
        }

        let prompt = format!("Select an available Drive ({}): ", describe_volumes(&volumes));
        loop {
            console.write(&prompt)?;
            let Some(line) = console.read_line()? else {
                return Ok(None);
            };
            let Some(letter) = parse_drive(&line) else {
                continue;
            };
            match volumes.iter().find(|v| v.letter.eq_ignore_ascii_case(&letter)) {
                Some(volume) => return Ok(Some(volume.root.clone())),
                None => console.write_line("Invalid drive specification")?,
            }
        }
    }
}

/// `c`, `C:` and `C:\` all name drive C.
pub fn parse_drive(input: &str) -> Option<char> {
    DRIVE_SPEC
        .captures(input)
        .and_then(|caps| caps[1].chars().next())
        .map(|c| c.to_ascii_uppercase())
}

/// Lets the user browse to a folder, starting at `start` (home if `None`).
pub fn pick_folder<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    start: Option<&Path>,
    options: NavigatorOptions,
) -> Result<Option<PathBuf>, NavigatorError> {
    browse(console, FolderMode, start, options)
}

/// Lets the user browse to a file, starting at `start` (home if `None`).
pub fn pick_file<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    start: Option<&Path>,
    options: NavigatorOptions,
) -> Result<Option<PathBuf>, NavigatorError> {
    browse(console, FileMode, start, options)
}

fn browse<M: NavigationMode, R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    mode: M,
    start: Option<&Path>,
    options: NavigatorOptions,
) -> Result<Option<PathBuf>, NavigatorError> {
    let home = dirs::home_dir().ok_or(NavigatorError::NoHomeDirectory)?;
    let start = resolve_start(start, &home);
    tracing::info!("browsing from {}", start.display());

    let mut navigator = Navigator::new(LocalFilesystem, mode, start).options(options);
    Ok(navigator.run(console)?.map(|s| s.path().to_path_buf()))
}
