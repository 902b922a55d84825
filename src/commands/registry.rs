//! Registry of every qsv subcommand modelled by this crate
//!
//! The table is written out by hand; there is no runtime discovery. A
//! name index over it is built once, on first lookup.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::QsvResult;
use crate::invoker::Invoker;

/// Every command descriptor type, plus the top-level `qsv` pseudo-command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommandKind {
    Apply,
    Behead,
    Cat,
    Count,
    Dedup,
    DescribeGpt,
    Enum,
    Explode,
    Fill,
    FixLengths,
    Flatten,
    Fmt,
    Frequency,
    Headers,
    Index,
    Join,
    MoarStats,
    Py,
    Rename,
    Replace,
    Reverse,
    Sample,
    Schema,
    Search,
    SearchSet,
    Select,
    Slice,
    Sniff,
    Sort,
    Sqlp,
    Stats,
    Validate,
    /// The tool itself, used for its top-level flags
    Qsv,
}

/// Registered commands, sorted by name. `Qsv` is deliberately absent.
const COMMANDS: &[(CommandKind, &str, &str)] = &[
    (CommandKind::Apply, "apply", "Apply series of transformations to a column"),
    (CommandKind::Behead, "behead", "Drop a CSV file's header"),
    (CommandKind::Cat, "cat", "Concatenate CSV files by row or by column"),
    (CommandKind::Count, "count", "Count the records in CSV data"),
    (CommandKind::Dedup, "dedup", "Remove redundant rows"),
    (
        CommandKind::DescribeGpt,
        "describegpt",
        "Infer metadata and summarise CSV data using an LLM",
    ),
    (CommandKind::Enum, "enum", "Add a new column enumerating CSV lines"),
    (CommandKind::Explode, "explode", "Explode rows based on some column separator"),
    (CommandKind::Fill, "fill", "Fill empty values"),
    (CommandKind::FixLengths, "fixlengths", "Make all records have the same length"),
    (
        CommandKind::Flatten,
        "flatten",
        "Print flattened records with labelled fields",
    ),
    (
        CommandKind::Fmt,
        "fmt",
        "Format CSV data with a custom delimiter or CRLF line endings",
    ),
    (CommandKind::Frequency, "frequency", "Compute a frequency table of CSV data"),
    (CommandKind::Headers, "headers", "Show header names"),
    (CommandKind::Index, "index", "Create an index of CSV data"),
    (CommandKind::Join, "join", "Join two sets of CSV data on the specified columns"),
    (
        CommandKind::MoarStats,
        "moarstats",
        "Compute additional statistics and outlier metadata",
    ),
    (CommandKind::Py, "py", "Evaluate a Python expression on CSV data"),
    (CommandKind::Rename, "rename", "Rename the columns of CSV data"),
    (CommandKind::Replace, "replace", "Replace patterns in CSV data"),
    (CommandKind::Reverse, "reverse", "Reverse rows of CSV data"),
    (CommandKind::Sample, "sample", "Randomly sample CSV data"),
    (
        CommandKind::Schema,
        "schema",
        "Generate JSON Schema or Polars Schema from CSV data",
    ),
    (CommandKind::Search, "search", "Search CSV data with a regex"),
    (CommandKind::SearchSet, "searchset", "Search CSV data with a regex set"),
    (
        CommandKind::Select,
        "select",
        "Select, re-order, duplicate or drop columns",
    ),
    (CommandKind::Slice, "slice", "Slice records from CSV data"),
    (CommandKind::Sniff, "sniff", "Quickly sniff CSV metadata"),
    (
        CommandKind::Sort,
        "sort",
        "Sort CSV data in alphabetical, numerical, reverse or random order",
    ),
    (
        CommandKind::Sqlp,
        "sqlp",
        "Run a SQL query against CSV files using the Polars engine",
    ),
    (CommandKind::Stats, "stats", "Compute summary statistics for CSV data"),
    (
        CommandKind::Validate,
        "validate",
        "Validate CSV data for RFC4180 compliance or against a JSON Schema",
    ),
];

static BY_NAME: Lazy<BTreeMap<&'static str, CommandKind>> =
    Lazy::new(|| COMMANDS.iter().map(|(kind, name, _)| (*name, *kind)).collect());

impl CommandKind {
    /// Stable lowercase identifier
    pub fn name(&self) -> &'static str {
        self.entry().map_or("qsv", |(_, name, _)| *name)
    }

    /// Token inserted after the executable; empty for the tool itself
    pub fn subcommand(&self) -> &'static str {
        match self {
            Self::Qsv => "",
            other => other.name(),
        }
    }

    /// One-line summary
    pub fn description(&self) -> &'static str {
        self.entry()
            .map_or("The qsv executable itself", |(_, _, description)| *description)
    }

    /// Fetch qsv's help text for this command
    pub fn help(&self, invoker: &Invoker) -> QsvResult<String> {
        invoker.invoke(self.subcommand(), &["--help".to_string()])
    }

    fn entry(&self) -> Option<&'static (CommandKind, &'static str, &'static str)> {
        COMMANDS.iter().find(|(kind, _, _)| kind == self)
    }
}

impl std::fmt::Display for CommandKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for CommandKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase();
        if name == "qsv" {
            return Ok(Self::Qsv);
        }
        lookup(&name).ok_or_else(|| format!("Unknown command: {}", s))
    }
}

/// Every registered command kind, sorted by name
pub fn all_command_kinds() -> Vec<CommandKind> {
    COMMANDS.iter().map(|(kind, _, _)| *kind).collect()
}

/// Find a registered command by its name
pub fn lookup(name: &str) -> Option<CommandKind> {
    BY_NAME.get(name).copied()
}

/// Collect qsv's help text for every registered command, in registry order
pub fn collect_help(invoker: &Invoker) -> QsvResult<Vec<(CommandKind, String)>> {
    all_command_kinds()
        .into_iter()
        .map(|kind| {
            tracing::debug!(command = kind.name(), "Fetching help");
            kind.help(invoker).map(|text| (kind, text))
        })
        .collect()
}
