//! Output-format selection shared by both reports.

use clap::ValueEnum;

/// The requested output encoding. `info` has no table form and defaults
/// to keyvalue; `stats` accepts all three and defaults to table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Keyvalue,
    Nul,
}

impl OutputFormat {
    /// The key/record delimiter pair for the flat encodings, or `None`
    /// for the table form.
    pub fn delimiters(self) -> Option<(char, char)> {
        match self {
            OutputFormat::Table => None,
            OutputFormat::Keyvalue => Some(('=', '\n')),
            OutputFormat::Nul => Some(('\n', '\0')),
        }
    }

    /// Whether the `info` report can render in this format.
    pub fn supports_info(self) -> bool {
        !matches!(self, OutputFormat::Table)
    }
}
