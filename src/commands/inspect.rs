//! Commands that describe, index, sample or validate CSV data

use crate::commands::{CommandKind, QsvCommand};
use crate::params::Params;

plain_command!(
    /// Count the records in CSV data
    Count
);

declare_params!(Count {
    human_readable: flag,
    width: flag,
    width_no_delims: flag,
    json: flag,
    no_polars: flag,
    low_memory: flag,
    flexible: flag,
    no_headers: flag,
    delimiter: text,
});

plain_command!(
    /// Compute a frequency table of CSV data
    Frequency
);

declare_params!(Frequency {
    select: text,
    limit: int = "10",
    unq_limit: int = "10",
    lmt_threshold: int = "0",
    rank_strategy: text = "dense",
    pct_dec_places: int = "-5",
    other_sorted: flag,
    other_text: text = "Other",
    asc: flag,
    no_trim: flag,
    null_text: text = "(NULL)",
    no_nulls: flag,
    ignore_case: flag,
    all_unique_text: text = "<ALL_UNIQUE>",
    vis_whitespace: flag,
    jobs: int,
    json: flag,
    pretty_json: flag,
    no_stats: flag,
    output: text,
    no_headers: flag,
    delimiter: text,
    memcheck: flag,
    toon: flag,
    weight: text,
});

plain_command!(
    /// Show header names
    Headers
);

declare_params!(Headers {
    justify: text,
    delimiter: text,
    no_headers: flag,
});

plain_command!(
    /// Create an index of CSV data
    Index
);

declare_params!(Index { output: text });

/// Randomly sample CSV data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample {
    size: String,
    params: Params,
}

impl Sample {
    /// Sample size used when none is given
    pub const DEFAULT_SIZE: u64 = 100;

    /// Sample 100 records
    pub fn new() -> Self {
        Self::with_size(Self::DEFAULT_SIZE)
    }

    /// Sample `size` records
    pub fn with_size(size: u64) -> Self {
        Self {
            size: size.to_string(),
            params: Params::new(Self::PARAMS),
        }
    }

    /// Sample a fraction of the records (`0.0 < fraction < 1.0`)
    pub fn with_fraction(fraction: f64) -> Self {
        Self {
            size: fraction.to_string(),
            params: Params::new(Self::PARAMS),
        }
    }
}

impl Default for Sample {
    fn default() -> Self {
        Self::new()
    }
}

declare_params!(Sample {
    seed: int,
    output: text,
    no_headers: flag,
    delimiter: text,
});

impl QsvCommand for Sample {
    fn kind(&self) -> CommandKind {
        CommandKind::Sample
    }

    fn params(&self) -> &Params {
        &self.params
    }

    fn assemble(&self, flags: Vec<String>, inputs: &[&str]) -> Vec<String> {
        let mut args = flags;
        args.push(self.size.clone());
        args.extend(inputs.iter().map(|s| s.to_string()));
        args
    }
}

plain_command!(
    /// Generate JSON Schema or Polars Schema from CSV data
    Schema
);

declare_params!(Schema {
    enum_threshold: int = "50",
    ignore_case: flag,
    strict_dates: flag,
    strict_formats: flag,
    pattern_columns: text,
    dates_whitelist: text = "date,time,due,open,close,created",
    prefer_dmy: flag,
    force: flag,
    stdout: flag,
    jobs: int,
    output: text,
    polars: flag,
    no_headers: flag,
    delimiter: text,
    memcheck: flag,
});

plain_command!(
    /// Quickly sniff CSV metadata
    Sniff
);

declare_params!(Sniff {
    sample: int = "100",
    prefer_dmy: flag,
    delimiter: text,
    json: flag,
    pretty_json: flag,
    no_headers: flag,
});

/// Validate CSV data for RFC4180 compliance or against a JSON Schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validate {
    json_schema: Option<String>,
    params: Params,
}

impl Validate {
    /// RFC4180 validation only
    pub fn new() -> Self {
        Self {
            json_schema: None,
            params: Params::new(Self::PARAMS),
        }
    }

    /// Validate against the JSON Schema at `json_schema`
    pub fn with_schema(json_schema: impl Into<String>) -> Self {
        Self {
            json_schema: Some(json_schema.into()),
            ..Self::new()
        }
    }
}

impl Default for Validate {
    fn default() -> Self {
        Self::new()
    }
}

declare_params!(Validate {
    trim: flag,
    no_format_validation: flag,
    fail_fast: flag,
    /// Suffix for the valid-records file
    valid: text = "valid",
    /// Suffix for the invalid-records file
    invalid: text = "invalid",
    json: flag,
    pretty_json: flag,
    valid_output: text,
    jobs: int,
    batch: int = "50000",
    delimiter: text,
    progressbar: flag,
    quiet: flag,
});

impl QsvCommand for Validate {
    fn kind(&self) -> CommandKind {
        CommandKind::Validate
    }

    fn params(&self) -> &Params {
        &self.params
    }

    fn assemble(&self, flags: Vec<String>, inputs: &[&str]) -> Vec<String> {
        let mut args = flags;
        args.extend(inputs.iter().map(|s| s.to_string()));
        if let Some(schema) = &self.json_schema
            && !schema.is_empty()
        {
            args.push(schema.clone());
        }
        args
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequency_defaults_elided() {
        let cmd = Frequency::new()
            .limit(10)
            .pct_dec_places(-5)
            .null_text("(NULL)")
            .rank_strategy("dense");
        assert_eq!(cmd.args(&["a.csv"]), vec!["a.csv"]);

        let cmd = Frequency::new().limit(0).pct_dec_places(2).json(true);
        assert_eq!(
            cmd.args(&["a.csv"]),
            vec!["--limit", "0", "--pct-dec-places", "2", "--json", "a.csv"]
        );
    }

    #[test]
    fn test_index_output() {
        let cmd = Index::new().output("a.csv.idx");
        assert_eq!(cmd.args(&["a.csv"]), vec!["--output", "a.csv.idx", "a.csv"]);
    }

    #[test]
    fn test_sample_size_positional() {
        assert_eq!(Sample::new().args(&["a.csv"]), vec!["100", "a.csv"]);

        let cmd = Sample::with_size(20).seed(42);
        assert_eq!(cmd.args(&["a.csv"]), vec!["--seed", "42", "20", "a.csv"]);

        assert_eq!(Sample::with_fraction(0.25).args(&[]), vec!["0.25"]);
    }

    #[test]
    fn test_validate_schema_goes_last() {
        let cmd = Validate::with_schema("schema.json").fail_fast(true);
        assert_eq!(
            cmd.args(&["a.csv"]),
            vec!["--fail-fast", "a.csv", "schema.json"]
        );

        let cmd = Validate::new().valid("ok").invalid("invalid");
        assert_eq!(cmd.args(&["a.csv"]), vec!["--valid", "ok", "a.csv"]);
    }

    #[test]
    fn test_count_flags() {
        let cmd = Count::new().human_readable(true).width_no_delims(true);
        assert_eq!(
            cmd.args(&["a.csv"]),
            vec!["--human-readable", "--width-no-delims", "a.csv"]
        );
    }

    #[test]
    fn test_sniff_sample_default() {
        assert_eq!(Sniff::new().sample(100).args(&["a.csv"]), vec!["a.csv"]);
        assert_eq!(
            Sniff::new().sample(500).args(&["a.csv"]),
            vec!["--sample", "500", "a.csv"]
        );
    }
}
