//! Summary statistics commands
//!
//! Both commands start with `round_places = 4`. That value has no elided
//! default, so `--round 4` is always emitted unless it is cleared.

use crate::params::{ParamValue, Params};

/// Decimal places used by qsv's rounding unless told otherwise
pub const DEFAULT_ROUND_PLACES: i64 = 4;

/// Options `moarstats` forwards to the underlying `stats` run
pub const DEFAULT_MOARSTATS_OPTIONS: &str =
    "--infer-dates --infer-boolean --mad --quartiles --percentiles --force --stats-jsonl";

/// Compute summary statistics for CSV data
///
/// With `stats_jsonl(true)` qsv also writes a `.stats.csv.data.jsonl`
/// file next to the input, readable with
/// [`StatsFile`](crate::model::StatsFile).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stats {
    params: Params,
}

impl Stats {
    /// Create a descriptor rounding to four places
    pub fn new() -> Self {
        Self {
            params: Params::new(Self::PARAMS).with("round_places", DEFAULT_ROUND_PLACES),
        }
    }

    /// Stop emitting `--round`, leaving rounding to qsv
    pub fn clear_round_places(mut self) -> Self {
        self.params.set("round_places", ParamValue::Absent);
        self
    }
}

impl Default for Stats {
    fn default() -> Self {
        Self::new()
    }
}

declare_params!(Stats {
    select: text,
    everything: flag,
    typesonly: flag,
    infer_boolean: flag,
    boolean_patterns: text = "1:0,t*:f*,y*:n*",
    mode: flag,
    cardinality: flag,
    median: flag,
    mad: flag,
    quartiles: flag,
    percentiles: flag,
    percentile_list: text = "5,10,40,60,90,95",
    /// Emitted as `--round`
    round_places: int,
    nulls: flag,
    infer_dates: flag,
    dates_whitelist: text = "date,time,due,open,close,created",
    prefer_dmy: flag,
    force: flag,
    jobs: int,
    /// Also write the `.stats.csv.data.jsonl` companion file
    stats_jsonl: flag,
    cache_threshold: int = "5000",
    vis_whitespace: flag,
    dataset_stats: flag,
    output: text,
    no_headers: flag,
    delimiter: text,
    memcheck: flag,
    weight: text,
});

impl crate::commands::QsvCommand for Stats {
    fn kind(&self) -> crate::commands::CommandKind {
        crate::commands::CommandKind::Stats
    }

    fn params(&self) -> &Params {
        &self.params
    }
}

/// Compute additional statistics and outlier metadata on top of `stats`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoarStats {
    params: Params,
}

impl MoarStats {
    pub fn new() -> Self {
        Self {
            params: Params::new(Self::PARAMS).with("round_places", DEFAULT_ROUND_PLACES),
        }
    }

    /// Stop emitting `--round`, leaving rounding to qsv
    pub fn clear_round_places(mut self) -> Self {
        self.params.set("round_places", ParamValue::Absent);
        self
    }
}

impl Default for MoarStats {
    fn default() -> Self {
        Self::new()
    }
}

declare_params!(MoarStats {
    stats_options: text = "--infer-dates --infer-boolean --mad --quartiles --percentiles --force --stats-jsonl",
    round_places: int,
    use_percentiles: flag,
    pct_thresholds: text = "5,95",
    advanced: flag,
    output: text,
});

impl crate::commands::QsvCommand for MoarStats {
    fn kind(&self) -> crate::commands::CommandKind {
        crate::commands::CommandKind::MoarStats
    }

    fn params(&self) -> &Params {
        &self.params
    }
}
