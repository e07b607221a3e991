//! Output formatting for CLI results

use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::error::Result;

pub mod json;
pub mod table;

/// Types that can be rendered in any output format
pub trait Formattable {
    /// Format the data according to the specified format
    fn format(&self, format: OutputFormat) -> Result<String>;

    /// Format and print to stdout
    fn print(&self, format: OutputFormat) -> Result<()> {
        println!("{}", self.format(format)?);
        Ok(())
    }
}

impl<T: Tabled + Serialize> Formattable for Vec<T> {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Table => Ok(table::format_table(self)),
            OutputFormat::Json => Ok(json::format_json_list(self)?),
        }
    }
}

/// Print API models as JSON, or as table rows of display type `D`.
///
/// JSON keeps every field the server sent; the table shows the columns
/// `D` picks.
pub fn print_list<T, D>(items: Vec<T>, format: OutputFormat) -> Result<()>
where
    T: Serialize,
    D: From<T> + Tabled,
{
    let output = match format {
        OutputFormat::Json => json::format_json_list(&items)?,
        OutputFormat::Table => {
            let rows: Vec<D> = items.into_iter().map(D::from).collect();
            table::format_table(&rows)
        }
    };
    println!("{}", output);
    Ok(())
}

/// Print a single API model, as JSON or as a one-row table of `D`.
pub fn print_item<T, D>(item: T, format: OutputFormat) -> Result<()>
where
    T: Serialize,
    D: From<T> + Tabled,
{
    let output = match format {
        OutputFormat::Json => json::format_json(&item)?,
        OutputFormat::Table => table::format_table(&[D::from(item)]),
    };
    println!("{}", output);
    Ok(())
}
