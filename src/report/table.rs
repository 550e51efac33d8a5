//! The aligned stats table.
//!
//! Rows are appended in a fixed, hand-specified order; column widths are
//! derived from the rows as they arrive and never settable directly, so a
//! rendered table always fits its widest label, its widest value, and both
//! column titles. Width means display width: labels are measured with
//! unicode-width, not byte or char counts, because indentation markers and
//! localizable text can be multi-byte.

use std::io::{self, Write};

use unicode_width::UnicodeWidthStr;

use crate::report::counters::RepoStats;

const LABEL_TITLE: &str = "Repository stats";
const VALUE_TITLE: &str = "Value";

/// One display row: a bare section header, or a labeled count.
#[derive(Debug)]
struct Row {
    label: String,
    value: Option<String>,
}

/// An ordered list of rows plus the derived column widths.
#[derive(Debug, Default)]
pub struct Table {
    rows: Vec<Row>,
    label_width: usize,
    value_width: usize,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a header row with no value cell.
    pub fn add_label(&mut self, label: impl Into<String>) {
        self.push(label.into(), None);
    }

    /// Append a count row; the value cell is the decimal form.
    pub fn add_count(&mut self, label: impl Into<String>, value: u64) {
        self.push(label.into(), Some(value.to_string()));
    }

    fn push(&mut self, label: String, value: Option<String>) {
        self.label_width = self.label_width.max(label.width());
        if let Some(value) = &value {
            self.value_width = self.value_width.max(value.width());
        }
        self.rows.push(Row { label, value });
    }

    /// Final column widths: row maxima, never narrower than the titles.
    pub fn column_widths(&self) -> (usize, usize) {
        (
            self.label_width.max(LABEL_TITLE.width()),
            self.value_width.max(VALUE_TITLE.width()),
        )
    }

    /// Print the table: title row, dash separator, then every data row.
    /// Labels and titles are left-aligned, values right-aligned; header
    /// rows render an empty value cell.
    pub fn write(&self, out: &mut impl Write) -> io::Result<()> {
        let (label_width, value_width) = self.column_widths();

        writeln!(
            out,
            "| {} | {} |",
            pad_right(LABEL_TITLE, label_width),
            pad_right(VALUE_TITLE, value_width)
        )?;
        writeln!(
            out,
            "| {} | {} |",
            "-".repeat(label_width),
            "-".repeat(value_width)
        )?;

        for row in &self.rows {
            let value = row.value.as_deref().unwrap_or("");
            writeln!(
                out,
                "| {} | {} |",
                pad_right(&row.label, label_width),
                pad_left(value, value_width)
            )?;
        }

        Ok(())
    }
}

/// Build the stats report table in its fixed section/row order.
pub fn stats_table(stats: &RepoStats) -> Table {
    let mut table = Table::new();

    table.add_label("* References");
    table.add_count("  * Count", stats.refs.total());
    table.add_count("    * Branches", stats.refs.branches);
    table.add_count("    * Tags", stats.refs.tags);
    table.add_count("    * Remotes", stats.refs.remotes);
    table.add_count("    * Others", stats.refs.others);

    table.add_label("");
    table.add_label("* Reachable objects");
    table.add_count("  * Count", stats.objects.total());
    table.add_count("    * Commits", stats.objects.commits);
    table.add_count("    * Trees", stats.objects.trees);
    table.add_count("    * Blobs", stats.objects.blobs);
    table.add_count("    * Tags", stats.objects.tags);

    table
}

fn pad_right(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(padding))
}

fn pad_left(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(text.width());
    format!("{}{}", " ".repeat(padding), text)
}
