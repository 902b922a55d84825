//! Commands that reshape, rewrite or filter CSV data

use serde::{Deserialize, Serialize};

use crate::commands::{CommandKind, QsvCommand};
use crate::params::Params;

/// Apply series of transformations to a column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Apply {
    column: String,
    operation: Option<String>,
    params: Params,
}

impl Apply {
    /// Transform `column`; the operation set is chosen with [`Apply::operation`]
    pub fn new(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            operation: None,
            params: Params::new(Self::PARAMS),
        }
    }

    /// Apply sub-mode placed before the column (`operations`, `emptyreplace`,
    /// `dynfmt`, `calcconv`), optionally followed by its operation list
    pub fn operation(mut self, operation: impl Into<String>) -> Self {
        self.operation = Some(operation.into());
        self
    }
}

declare_params!(Apply {
    replacement: text,
    formatstr: text,
    new_column: text,
    rename: text,
    comparand: text,
    jobs: int,
    batch: int = "50000",
    output: text,
    no_headers: flag,
    delimiter: text,
    progressbar: flag,
});

impl QsvCommand for Apply {
    fn kind(&self) -> CommandKind {
        CommandKind::Apply
    }

    fn params(&self) -> &Params {
        &self.params
    }

    fn assemble(&self, flags: Vec<String>, inputs: &[&str]) -> Vec<String> {
        let mut args = flags;
        if let Some(operation) = &self.operation
            && !operation.is_empty()
        {
            args.push(operation.clone());
        }
        args.push(self.column.clone());
        args.extend(inputs.iter().map(|s| s.to_string()));
        args
    }
}

plain_command!(
    /// Drop a CSV file's header
    Behead
);

declare_params!(Behead {
    flexible: flag,
    output: text,
});

/// How `cat` combines its inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatMode {
    /// Append records, one file after another
    #[default]
    Rows,
    /// Like rows, keyed on header names
    RowsKey,
    /// Join files side by side
    Columns,
}

impl CatMode {
    /// Token passed to qsv
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rows => "rows",
            Self::RowsKey => "rowskey",
            Self::Columns => "columns",
        }
    }
}

impl std::fmt::Display for CatMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for CatMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "rows" => Ok(Self::Rows),
            "rowskey" => Ok(Self::RowsKey),
            "columns" => Ok(Self::Columns),
            _ => Err(format!("Unknown cat mode: {}", s)),
        }
    }
}

/// Concatenate CSV files by row or by column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cat {
    mode: CatMode,
    params: Params,
}

impl Cat {
    /// Concatenate by rows
    pub fn new() -> Self {
        Self::with_mode(CatMode::default())
    }

    /// Concatenate using a specific mode
    pub fn with_mode(mode: CatMode) -> Self {
        Self {
            mode,
            params: Params::new(Self::PARAMS),
        }
    }

    /// The concatenation mode
    pub fn mode(&self) -> CatMode {
        self.mode
    }
}

impl Default for Cat {
    fn default() -> Self {
        Self::new()
    }
}

declare_params!(Cat {
    pad: flag,
    flexible: flag,
    group: text = "none",
    group_name: text = "file",
    output: text,
    no_headers: flag,
    delimiter: text,
});

impl QsvCommand for Cat {
    fn kind(&self) -> CommandKind {
        CommandKind::Cat
    }

    fn params(&self) -> &Params {
        &self.params
    }

    fn assemble(&self, flags: Vec<String>, inputs: &[&str]) -> Vec<String> {
        let mut args = flags;
        args.push(self.mode.as_str().to_string());
        args.extend(inputs.iter().map(|s| s.to_string()));
        args
    }
}

plain_command!(
    /// Remove redundant rows
    Dedup
);

declare_params!(Dedup {
    select: text,
    numeric: flag,
    ignore_case: flag,
    unique: flag,
    dupes_output: text,
    jobs: int,
    output: text,
    no_headers: flag,
    delimiter: text,
    memcheck: flag,
});

plain_command!(
    /// Add a new column enumerating CSV lines
    Enum
);

declare_params!(Enum {
    new_column: text = "index",
    start: int = "0",
    uuid: flag,
    constant: text,
    output: text,
    no_headers: flag,
    delimiter: text,
});

/// Explode rows based on some column separator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Explode {
    column: String,
    params: Params,
}

impl Explode {
    /// Explode `column`
    pub fn new(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            params: Params::new(Self::PARAMS),
        }
    }
}

declare_params!(Explode {
    separator: text = ",",
    rename: text,
    output: text,
    no_headers: flag,
    delimiter: text,
});

impl QsvCommand for Explode {
    fn kind(&self) -> CommandKind {
        CommandKind::Explode
    }

    fn params(&self) -> &Params {
        &self.params
    }

    fn assemble(&self, flags: Vec<String>, inputs: &[&str]) -> Vec<String> {
        let mut args = flags;
        args.push(self.column.clone());
        args.extend(inputs.iter().map(|s| s.to_string()));
        args
    }
}

plain_command!(
    /// Fill empty values
    Fill
);

declare_params!(Fill {
    value: text,
    backfill: flag,
    groupby: text,
    select: text,
    output: text,
    no_headers: flag,
    delimiter: text,
});

plain_command!(
    /// Make all records have the same length
    FixLengths
);

declare_params!(FixLengths {
    length: int,
    output: text,
    delimiter: text,
});

plain_command!(
    /// Print flattened records such that fields are labelled and separated by a new line
    Flatten
);

declare_params!(Flatten {
    condense: int,
    field_separator: text,
    separator: text = "#",
    no_headers: flag,
    delimiter: text,
});

plain_command!(
    /// Format CSV data with a custom delimiter or CRLF line endings
    Fmt
);

declare_params!(Fmt {
    out_delimiter: text = ",",
    crlf: flag,
    ascii: flag,
    quote: text = "\"",
    quote_always: flag,
    quote_never: flag,
    escape: text,
    no_final_newline: flag,
    output: text,
    delimiter: text,
});

/// Evaluate a Python expression on CSV data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Py {
    script: String,
    params: Params,
}

impl Py {
    /// Evaluate `script` (an expression or a `.py` file) per row
    pub fn new(script: impl Into<String>) -> Self {
        Self {
            script: script.into(),
            params: Params::new(Self::PARAMS),
        }
    }
}

declare_params!(Py {
    new_column: text,
    output: text,
    no_headers: flag,
    delimiter: text,
});

impl QsvCommand for Py {
    fn kind(&self) -> CommandKind {
        CommandKind::Py
    }

    fn params(&self) -> &Params {
        &self.params
    }

    fn assemble(&self, flags: Vec<String>, inputs: &[&str]) -> Vec<String> {
        let mut args = flags;
        args.push(self.script.clone());
        args.extend(inputs.iter().map(|s| s.to_string()));
        args
    }
}

/// Rename the columns of CSV data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rename {
    names: String,
    params: Params,
}

impl Rename {
    /// Rename columns to the comma-separated `names`
    pub fn new(names: impl Into<String>) -> Self {
        Self {
            names: names.into(),
            params: Params::new(Self::PARAMS),
        }
    }
}

declare_params!(Rename {
    output: text,
    no_headers: flag,
    delimiter: text,
});

impl QsvCommand for Rename {
    fn kind(&self) -> CommandKind {
        CommandKind::Rename
    }

    fn params(&self) -> &Params {
        &self.params
    }

    fn assemble(&self, flags: Vec<String>, inputs: &[&str]) -> Vec<String> {
        let mut args = flags;
        args.push(self.names.clone());
        args.extend(inputs.iter().map(|s| s.to_string()));
        args
    }
}

/// Replace patterns in CSV data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replace {
    pattern: String,
    replacement: String,
    params: Params,
}

impl Replace {
    /// Replace matches of `pattern` with `replacement`
    pub fn new(pattern: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            replacement: replacement.into(),
            params: Params::new(Self::PARAMS),
        }
    }
}

declare_params!(Replace {
    ignore_case: flag,
    literal: flag,
    exact: flag,
    select: text,
    unicode: flag,
    size_limit: int = "50",
    dfa_size_limit: int = "10",
    not_one: flag,
    jobs: int,
    output: text,
    no_headers: flag,
    delimiter: text,
    progressbar: flag,
    quiet: flag,
});

impl QsvCommand for Replace {
    fn kind(&self) -> CommandKind {
        CommandKind::Replace
    }

    fn params(&self) -> &Params {
        &self.params
    }

    fn assemble(&self, flags: Vec<String>, inputs: &[&str]) -> Vec<String> {
        let mut args = flags;
        args.push(self.pattern.clone());
        args.push(self.replacement.clone());
        args.extend(inputs.iter().map(|s| s.to_string()));
        args
    }
}

plain_command!(
    /// Reverse rows of CSV data
    Reverse
);

declare_params!(Reverse {
    output: text,
    no_headers: flag,
    delimiter: text,
    memcheck: flag,
});

/// Select, re-order, duplicate or drop columns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Select {
    selection: String,
    params: Params,
}

impl Select {
    /// Keep the columns named by `selection` (qsv selector syntax)
    pub fn new(selection: impl Into<String>) -> Self {
        Self {
            selection: selection.into(),
            params: Params::new(Self::PARAMS),
        }
    }
}

declare_params!(Select {
    random: flag,
    seed: int,
    sort: flag,
    output: text,
    no_headers: flag,
    delimiter: text,
});

impl QsvCommand for Select {
    fn kind(&self) -> CommandKind {
        CommandKind::Select
    }

    fn params(&self) -> &Params {
        &self.params
    }

    fn assemble(&self, flags: Vec<String>, inputs: &[&str]) -> Vec<String> {
        let mut args = flags;
        args.push(self.selection.clone());
        args.extend(inputs.iter().map(|s| s.to_string()));
        args
    }
}

plain_command!(
    /// Slice records from CSV data
    Slice
);

declare_params!(Slice {
    index: int,
    len: int,
    next: flag,
    output: text,
    no_headers: flag,
    delimiter: text,
});

plain_command!(
    /// Sort CSV data in alphabetical, numerical, reverse or random order
    Sort
);

declare_params!(Sort {
    select: text,
    numeric: flag,
    natural: flag,
    reverse: flag,
    ignore_case: flag,
    unique: flag,
    random: flag,
    seed: int,
    rng: text = "standard",
    jobs: int,
    faster: flag,
    output: text,
    no_headers: flag,
    delimiter: text,
    memcheck: flag,
});
