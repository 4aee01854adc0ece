//! Classification of a single line typed in response to a batch.
//!
//! Precedence is fixed: `?`, then ENTER, then a number, then free text
//! offered to the renderer's validator.

use super::render::ItemRenderer;

/// What the picker should do with one line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// `?` was typed: show help, then read again.
    Help,
    /// ENTER on a batch that has more after it.
    Continue,
    /// Batch-local index of a listed item.
    Select(usize),
    /// Free text the renderer accepted.
    Command(String),
    /// Unusable input; print the message and read again.
    Reject(Rejection),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    NoMoreItems,
    NotListed,
    Invalid,
}

impl Rejection {
    pub fn message(self) -> &'static str {
        match self {
            Rejection::NoMoreItems => "No more items to list! Please choose again: ",
            Rejection::NotListed => "That is not an item listed. Please choose again: ",
            Rejection::Invalid => "Invalid response. Please try again: ",
        }
    }
}

pub fn classify<T: ?Sized, R: ItemRenderer<T> + ?Sized>(
    line: &str,
    batch_len: usize,
    is_final: bool,
    renderer: &R,
) -> Verdict {
    if line == "?" {
        return Verdict::Help;
    }
    if line.is_empty() {
        return if is_final {
            Verdict::Reject(Rejection::NoMoreItems)
        } else {
            Verdict::Continue
        };
    }
    if let Some(number) = parse_number(line) {
        return match usize::try_from(number) {
            Ok(index) if index < batch_len => Verdict::Select(index),
            _ => Verdict::Reject(Rejection::NotListed),
        };
    }
    if renderer.accepts(line) {
        Verdict::Command(line.to_string())
    } else {
        Verdict::Reject(Rejection::Invalid)
    }
}

// Surrounding blanks are tolerated around a number, but a blank-only line is not a number.
fn parse_number(line: &str) -> Option<i64> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse().ok()
}
