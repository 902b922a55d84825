//! Commands that combine or query several inputs

use crate::commands::{CommandKind, QsvCommand};
use crate::params::Params;

/// Join two sets of CSV data on the specified columns
///
/// `columns1` selects the key columns of the first input and `columns2`
/// those of the second. The first two inputs handed to `run` are the two
/// sides of the join; missing sides are left out of the argument vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Join {
    columns1: String,
    columns2: String,
    params: Params,
}

impl Join {
    pub fn new(columns1: impl Into<String>, columns2: impl Into<String>) -> Self {
        Self {
            columns1: columns1.into(),
            columns2: columns2.into(),
            params: Params::new(Self::PARAMS),
        }
    }
}

declare_params!(Join {
    left: flag,
    left_anti: flag,
    left_semi: flag,
    right: flag,
    right_anti: flag,
    right_semi: flag,
    full: flag,
    cross: flag,
    nulls: flag,
    keys_output: text,
    ignore_case: flag,
    ignore_leading_zeros: flag,
    output: text,
    no_headers: flag,
    delimiter: text,
});

impl QsvCommand for Join {
    fn kind(&self) -> CommandKind {
        CommandKind::Join
    }

    fn params(&self) -> &Params {
        &self.params
    }

    fn assemble(&self, flags: Vec<String>, inputs: &[&str]) -> Vec<String> {
        let mut args = flags;
        args.push(self.columns1.clone());
        if let Some(input1) = inputs.first() {
            args.push(input1.to_string());
        }
        args.push(self.columns2.clone());
        if let Some(input2) = inputs.get(1) {
            args.push(input2.to_string());
        }
        args
    }
}

/// Run a SQL query against CSV files using the Polars engine
///
/// Inputs are exposed to the query as tables named after their file stems,
/// or as `_t_1`, `_t_2`, ... in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sqlp {
    query: String,
    params: Params,
}

impl Sqlp {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            params: Params::new(Self::PARAMS),
        }
    }
}

declare_params!(Sqlp {
    /// Output format: csv, json, jsonl, parquet, arrow, avro
    format: text = "csv",
    output: text,
    no_headers: flag,
    delimiter: text,
    try_parsedates: flag,
    low_memory: flag,
    no_cache: flag,
    ignore_errors: flag,
});

impl QsvCommand for Sqlp {
    fn kind(&self) -> CommandKind {
        CommandKind::Sqlp
    }

    fn params(&self) -> &Params {
        &self.params
    }

    fn assemble(&self, flags: Vec<String>, inputs: &[&str]) -> Vec<String> {
        let mut args = flags;
        args.push(self.query.clone());
        args.extend(inputs.iter().map(|s| s.to_string()));
        args
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_interleaves_columns_and_inputs() {
        let cmd = Join::new("id", "customer_id").left(true);
        assert_eq!(
            cmd.args(&["orders.csv", "customers.csv"]),
            vec!["--left", "id", "orders.csv", "customer_id", "customers.csv"]
        );
    }

    #[test]
    fn test_join_missing_inputs() {
        let cmd = Join::new("a", "b");
        assert_eq!(cmd.args(&["one.csv"]), vec!["a", "one.csv", "b"]);
        assert_eq!(cmd.args(&[]), vec!["a", "b"]);
    }

    #[test]
    fn test_sqlp_query_precedes_inputs() {
        let cmd = Sqlp::new("select * from a").format("csv").try_parsedates(true);
        assert_eq!(
            cmd.args(&["a.csv", "b.csv"]),
            vec!["--try-parsedates", "select * from a", "a.csv", "b.csv"]
        );

        let cmd = Sqlp::new("select 1").format("parquet").output("out.parquet");
        assert_eq!(
            cmd.args(&["a.csv"]),
            vec![
                "--format",
                "parquet",
                "--output",
                "out.parquet",
                "select 1",
                "a.csv"
            ]
        );
    }
}
