//! pagepick: paginated console picking.
//!
//! - [`picker`] lists any sequence in numbered batches and reads back a choice.
//! - [`navigator`] builds folder and file browsing on top of the picker.
//! - [`console`] is the line-oriented input/output both of them talk through.

pub mod console;
pub mod navigator;
pub mod picker;

#[cfg(test)]
mod test_support;

pub use console::Console;
pub use navigator::{
    FileMode, FolderMode, Navigator, NavigatorError, NavigatorOptions, Selection, pick_file,
    pick_folder,
};
pub use picker::{ItemPicker, ItemRenderer, PickerError, Response};
