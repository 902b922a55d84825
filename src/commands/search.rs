//! Regex search commands

use crate::commands::{CommandKind, QsvCommand};
use crate::params::Params;

/// Search CSV data with a regex
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Search {
    pattern: String,
    params: Params,
}

impl Search {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            params: Params::new(Self::PARAMS),
        }
    }

    /// The regex being searched for
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

declare_params!(Search {
    ignore_case: flag,
    select: text,
    invert_match: flag,
    unicode: flag,
    /// Name of a column flagging matched rows instead of filtering
    flag: text,
    preview: int = "0",
    count: flag,
    size_limit: int = "50",
    dfa_size_limit: int = "10",
    json: flag,
    not_one: flag,
    jobs: int,
    output: text,
    no_headers: flag,
    delimiter: text,
    progressbar: flag,
    quiet: flag,
});

impl QsvCommand for Search {
    fn kind(&self) -> CommandKind {
        CommandKind::Search
    }

    fn params(&self) -> &Params {
        &self.params
    }

    fn assemble(&self, flags: Vec<String>, inputs: &[&str]) -> Vec<String> {
        let mut args = flags;
        args.push(self.pattern.clone());
        args.extend(inputs.iter().map(|s| s.to_string()));
        args
    }
}

/// Search CSV data with a set of regexes read from a file, one per line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSet {
    regexset_file: String,
    params: Params,
}

impl SearchSet {
    pub fn new(regexset_file: impl Into<String>) -> Self {
        Self {
            regexset_file: regexset_file.into(),
            params: Params::new(Self::PARAMS),
        }
    }
}

declare_params!(SearchSet {
    ignore_case: flag,
    literal: flag,
    exact: flag,
    select: text,
    invert_match: flag,
    unicode: flag,
    flag: text,
    flag_matches_only: flag,
    unmatched_output: text,
    quick: flag,
    count: flag,
    json: flag,
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

impl QsvCommand for SearchSet {
    fn kind(&self) -> CommandKind {
        CommandKind::SearchSet
    }

    fn params(&self) -> &Params {
        &self.params
    }

    fn assemble(&self, flags: Vec<String>, inputs: &[&str]) -> Vec<String> {
        let mut args = flags;
        args.push(self.regexset_file.clone());
        args.extend(inputs.iter().map(|s| s.to_string()));
        args
    }
}
