//! Paginated item picker.
//!
//! Lists a sequence of items one batch (screen) at a time, numbering each
//! item within its batch, and reads one answer per batch:
//!
//! * ENTER shows the next batch (refused on the last one),
//! * a listed number selects that item,
//! * `?` prints the help text,
//! * other text is handed to the [`ItemRenderer`] to accept or refuse,
//! * end of input abandons the pick.
//!
//! Numbers typed by the user are batch-local; [`ItemPicker::pick`] always
//! hands back the index into the whole sequence.

pub mod grammar;
pub mod layout;
pub mod render;

use crate::console::Console;
use crossterm::style::Stylize;
use grammar::{Verdict, classify};
use std::io::{self, BufRead, Write};
use thiserror::Error;

pub use render::{DisplayRenderer, FnRenderer, ItemRenderer, OptionalRenderer};

/// Largest batch a single screen may hold.
pub const MAX_BATCH_SIZE: usize = 100;

const RESPONSE_PROMPT: &str = "\n\nEnter your response (? for help): ";

#[derive(Debug, Error)]
pub enum PickerError {
    #[error("batch size must be between 1 and {MAX_BATCH_SIZE}, got {0}")]
    BatchSize(usize),
    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// What the user settled on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Index into the full item sequence.
    Index(usize),
    /// Free text accepted by the renderer.
    Text(String),
}

/// Texts printed around each batch.
#[derive(Debug, Clone)]
pub struct PickerPrompts {
    pub heading: String,
    pub help: String,
    pub after_batch: String,
    pub after_final_batch: String,
}

impl Default for PickerPrompts {
    fn default() -> Self {
        PickerPrompts {
            heading: String::new(),
            help: format!(
                "Select item by number, or press ENTER to continue if listing paused.{RESPONSE_PROMPT}"
            ),
            after_batch: format!("more (press ENTER)...{RESPONSE_PROMPT}"),
            after_final_batch: format!("END OF LISTING.{RESPONSE_PROMPT}"),
        }
    }
}

pub struct ItemPicker<R> {
    renderer: R,
    prompts: PickerPrompts,
    styled: bool,
}

impl<R> ItemPicker<R> {
    pub fn new(renderer: R) -> Self {
        ItemPicker {
            renderer,
            prompts: PickerPrompts::default(),
            styled: false,
        }
    }

    pub fn with_prompts(mut self, prompts: PickerPrompts) -> Self {
        self.prompts = prompts;
        self
    }

    /// Highlight the batch heading with terminal colours.
    pub fn styled(mut self, styled: bool) -> Self {
        self.styled = styled;
        self
    }

    pub fn set_heading(&mut self, heading: impl Into<String>) {
        self.prompts.heading = heading.into();
    }

    /// Runs one pick session over `items`, `batch_size` at a time.
    ///
    /// Returns `Ok(None)` when input runs out before a choice is made.
    pub fn pick<T, In, Out>(
        &self,
        console: &mut Console<In, Out>,
        items: &[T],
        batch_size: usize,
    ) -> Result<Option<Response>, PickerError>
    where
        R: ItemRenderer<T>,
        In: BufRead,
        Out: Write,
    {
        if batch_size == 0 || batch_size > MAX_BATCH_SIZE {
            return Err(PickerError::BatchSize(batch_size));
        }

        let mut offset = 0;
        loop {
            let remaining = &items[offset..];
            let is_final = remaining.len() <= batch_size;
            let batch = &remaining[..remaining.len().min(batch_size)];
            tracing::debug!(offset, shown = batch.len(), is_final, "listing batch");

            self.list_batch(console, batch)?;
            if is_final {
                console.write("\n")?;
                console.write(&self.prompts.after_final_batch)?;
            } else {
                console.write(&self.prompts.after_batch)?;
            }

            match self.read_verdict::<T, _, _>(console, batch.len(), is_final)? {
                None => {
                    tracing::debug!("input exhausted, abandoning pick");
                    return Ok(None);
                }
                Some(Verdict::Continue) => offset += batch.len(),
                Some(Verdict::Select(local)) => return Ok(Some(Response::Index(offset + local))),
                Some(Verdict::Command(text)) => return Ok(Some(Response::Text(text))),
                Some(Verdict::Help | Verdict::Reject(_)) => {
                    unreachable!("read_verdict resolves help and rejections itself")
                }
            }
        }
    }

    fn list_batch<T, In: BufRead, Out: Write>(
        &self,
        console: &mut Console<In, Out>,
        batch: &[T],
    ) -> io::Result<()>
    where
        R: ItemRenderer<T>,
    {
        let heading = if self.styled {
            self.prompts.heading.as_str().white().on_dark_grey().to_string()
        } else {
            self.prompts.heading.clone()
        };
        console.write_line(&format!("\n{heading}"))?;

        let texts: Vec<String> = batch.iter().map(|item| self.renderer.render(item)).collect();
        for line in layout::layout_batch(&texts) {
            console.write_line(&line)?;
        }
        Ok(())
    }

    // Keeps reading until the line is something other than help or a rejection.
    fn read_verdict<T, In: BufRead, Out: Write>(
        &self,
        console: &mut Console<In, Out>,
        batch_len: usize,
        is_final: bool,
    ) -> io::Result<Option<Verdict>>
    where
        R: ItemRenderer<T>,
    {
        while let Some(line) = console.read_line()? {
            match classify::<T, R>(&line, batch_len, is_final, &self.renderer) {
                Verdict::Help => console.write(&self.prompts.help)?,
                Verdict::Reject(why) => {
                    tracing::debug!(?why, response = %line, "response rejected");
                    console.write(why.message())?;
                }
                verdict => return Ok(Some(verdict)),
            }
        }
        Ok(None)
    }
}
