//! Output formatting module
//!
//! Lists render as tables, single resources as field/value tables, and both
//! can be serialized to JSON or YAML instead.

mod common;

use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, ContentArrangement, Table};
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::error::Result;

pub use common::{output_serialized, quoted_list};

/// A resource that can be shown as a table row
pub trait Tabular: Serialize {
    /// Column headers, in display order
    fn headers() -> &'static [&'static str];

    /// Cell values matching `headers()`
    fn row(&self) -> Vec<String>;
}

/// Build a table with the shared preset
fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Render a list of resources
pub fn render_list<T: Tabular>(items: &[T]) -> String {
    let mut table = new_table();
    table.set_header(T::headers().iter().map(Cell::new).collect::<Vec<_>>());
    for item in items {
        table.add_row(item.row().into_iter().map(Cell::new).collect::<Vec<_>>());
    }
    table.to_string()
}

/// Render a single resource as a two-column field/value table
pub fn render_describe<T: Tabular>(item: &T) -> String {
    let mut table = new_table();
    for (header, value) in T::headers().iter().zip(item.row()) {
        table.add_row(vec![Cell::new(header), Cell::new(value)]);
    }
    table.to_string()
}

/// Output a list of resources in the requested format
pub fn output_list<T: Tabular>(items: &[T], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Human => {
            println!("{}", render_list(items));
            Ok(())
        }
        _ => output_serialized(items, format),
    }
}

/// Output a single resource in the requested format
pub fn output_describe<T: Tabular>(item: &T, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Human => {
            println!("{}", render_describe(item));
            Ok(())
        }
        _ => output_serialized(item, format),
    }
}
