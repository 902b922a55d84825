//! Typed descriptors for qsv subcommands
//!
//! Each descriptor owns a [`Params`] set declared in the order qsv's flags are
//! emitted, plus any positional fields its subcommand needs. Running one is:
//!
//! 1. compile the parameter set into flags ([`compile_flags`]),
//! 2. let the command place its positionals around the inputs
//!    ([`QsvCommand::assemble`]),
//! 3. hand the vector to the [`Invoker`].
//!
//! ## Example
//!
//! ```rust,ignore
//! use qsv_sdk::commands::{QsvCommand, Stats};
//!
//! let stats = Stats::new().everything(true).stats_jsonl(true).round_places(6);
//! assert_eq!(
//!     stats.args(&["sales.csv"]),
//!     ["--everything", "--round", "6", "--stats-jsonl", "sales.csv"]
//! );
//! let summary = stats.run(&["sales.csv"])?;
//! ```

use crate::error::QsvResult;
use crate::invoker::Invoker;
use crate::params::{Params, compile_flags};

/// Declare a command's parameter table and generate one chained setter per
/// parameter.
///
/// Kinds: `flag` (bool switch), `text` (string value), `int` (integer value).
/// `= "literal"` declares the default qsv assumes, which is elided when set.
macro_rules! declare_params {
    (@spec $name:ident) => {
        $crate::params::ParamSpec::new(stringify!($name))
    };
    (@spec $name:ident, $default:literal) => {
        $crate::params::ParamSpec::with_default(stringify!($name), $default)
    };
    (@setter $(#[$doc:meta])* $name:ident : flag) => {
        $(#[$doc])*
        pub fn $name(mut self, enabled: bool) -> Self {
            self.params.set(stringify!($name), enabled);
            self
        }
    };
    (@setter $(#[$doc:meta])* $name:ident : text) => {
        $(#[$doc])*
        pub fn $name(mut self, value: impl Into<String>) -> Self {
            self.params.set(stringify!($name), value.into());
            self
        }
    };
    (@setter $(#[$doc:meta])* $name:ident : int) => {
        $(#[$doc])*
        pub fn $name(mut self, value: i64) -> Self {
            self.params.set(stringify!($name), value);
            self
        }
    };
    (
        $ty:ident {
            $( $(#[$doc:meta])* $name:ident : $kind:ident $(= $default:literal)? ),* $(,)?
        }
    ) => {
        impl $ty {
            /// Declared parameters, in flag emission order
            pub const PARAMS: &'static [$crate::params::ParamSpec] = &[
                $( declare_params!(@spec $name $(, $default)?), )*
            ];

            $( declare_params!(@setter $(#[$doc])* $name : $kind); )*
        }
    };
}

/// Define a command that takes no positional arguments of its own
macro_rules! plain_command {
    ($(#[$doc:meta])* $ty:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $ty {
            params: $crate::params::Params,
        }

        impl $ty {
            /// Create a descriptor with every parameter at its default
            pub fn new() -> Self {
                Self {
                    params: $crate::params::Params::new(Self::PARAMS),
                }
            }
        }

        impl Default for $ty {
            fn default() -> Self {
                Self::new()
            }
        }

        impl $crate::commands::QsvCommand for $ty {
            fn kind(&self) -> $crate::commands::CommandKind {
                $crate::commands::CommandKind::$ty
            }

            fn params(&self) -> &$crate::params::Params {
                &self.params
            }
        }
    };
}

mod describe;
mod inspect;
mod query;
pub mod registry;
mod search;
mod stats;
mod toplevel;
mod transform;

pub use describe::DescribeGpt;
pub use inspect::{Count, Frequency, Headers, Index, Sample, Schema, Sniff, Validate};
pub use query::{Join, Sqlp};
pub use registry::{CommandKind, all_command_kinds, collect_help, lookup};
pub use search::{Search, SearchSet};
pub use stats::{DEFAULT_MOARSTATS_OPTIONS, DEFAULT_ROUND_PLACES, MoarStats, Stats};
pub use toplevel::Qsv;
pub use transform::{
    Apply, Behead, Cat, CatMode, Dedup, Enum, Explode, Fill, FixLengths, Flatten, Fmt, Py, Rename,
    Replace, Reverse, Select, Slice, Sort,
};

/// A qsv invocation described by typed parameters
pub trait QsvCommand {
    /// Which subcommand this descriptor drives
    fn kind(&self) -> CommandKind;

    /// The parameter set compiled into flags
    fn params(&self) -> &Params;

    /// Build the final argument vector from compiled flags and inputs
    ///
    /// The default places every flag first and appends the inputs. Commands
    /// with positional arguments override this to interleave them the way
    /// their qsv grammar expects.
    fn assemble(&self, flags: Vec<String>, inputs: &[&str]) -> Vec<String> {
        let mut args = flags;
        args.extend(inputs.iter().map(|s| s.to_string()));
        args
    }

    /// Stable lowercase identifier of the command
    fn name(&self) -> &'static str {
        self.kind().name()
    }

    /// Arguments passed after the subcommand token
    fn args(&self, inputs: &[&str]) -> Vec<String> {
        self.assemble(compile_flags(self.params()), inputs)
    }

    /// Run with the environment-configured invoker and return stdout
    ///
    /// When an output option redirects results to a file, the returned text
    /// is qsv's console summary rather than the result data.
    fn run(&self, inputs: &[&str]) -> QsvResult<String> {
        self.run_with(&Invoker::from_env(), inputs)
    }

    /// Run with a specific invoker and return stdout
    fn run_with(&self, invoker: &Invoker, inputs: &[&str]) -> QsvResult<String> {
        invoker.invoke(self.kind().subcommand(), &self.args(inputs))
    }

    /// qsv's own help text for this subcommand
    fn help(&self) -> QsvResult<String> {
        self.kind().help(&Invoker::from_env())
    }
}

/// Create an index for `input_path`, optionally writing it to `output`
pub fn index(input_path: &str, output: Option<&str>) -> QsvResult<String> {
    let command = match output {
        Some(output) => Index::new().output(output),
        None => Index::new(),
    };
    run_on(&command, input_path, &Invoker::from_env())
}

/// Select columns from `input_path`
pub fn select(input_path: &str, selection: &str) -> QsvResult<String> {
    run_on(&Select::new(selection), input_path, &Invoker::from_env())
}

/// Compute a frequency table of `input_path`
pub fn frequency(input_path: &str, command: &Frequency) -> QsvResult<String> {
    run_on(command, input_path, &Invoker::from_env())
}

/// Compute summary statistics for `input_path`
pub fn stats(input_path: &str, command: &Stats) -> QsvResult<String> {
    run_on(command, input_path, &Invoker::from_env())
}

/// Compute additional statistics for `input_path`
pub fn moarstats(input_path: &str, command: &MoarStats) -> QsvResult<String> {
    run_on(command, input_path, &Invoker::from_env())
}

/// Generate a schema for `input_path`
pub fn schema(input_path: &str, command: &Schema) -> QsvResult<String> {
    run_on(command, input_path, &Invoker::from_env())
}

/// Describe `input_path` using an LLM
pub fn describegpt(input_path: &str, command: &DescribeGpt) -> QsvResult<String> {
    run_on(command, input_path, &Invoker::from_env())
}

fn run_on(command: &impl QsvCommand, input_path: &str, invoker: &Invoker) -> QsvResult<String> {
    command.run_with(invoker, &[input_path])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_assembly_appends_inputs() {
        let reverse = Reverse::new().no_headers(true);
        assert_eq!(
            reverse.args(&["a.csv", "b.csv"]),
            vec!["--no-headers", "a.csv", "b.csv"]
        );
    }

    #[test]
    fn test_name_matches_kind() {
        assert_eq!(Reverse::new().name(), "reverse");
        assert_eq!(Qsv::new().name(), "qsv");
        assert_eq!(DescribeGpt::new().name(), "describegpt");
    }

    #[cfg(unix)]
    #[test]
    fn test_shortcut_runs_single_input() {
        use crate::config::QsvConfig;

        let invoker = Invoker::new(QsvConfig::new().with_program("echo"));
        let out = run_on(&Stats::new().everything(true), "a.csv", &invoker).unwrap();
        assert_eq!(out, "stats --everything --round 4 a.csv\n");

        let out = run_on(&Select::new("1,2"), "a.csv", &invoker).unwrap();
        assert_eq!(out, "select 1,2 a.csv\n");

        let out = run_on(&MoarStats::new().advanced(true), "a.csv", &invoker).unwrap();
        assert_eq!(out, "moarstats --round 4 --advanced a.csv\n");
    }

    #[test]
    fn test_descriptors_are_reusable() {
        let count = Count::new().json(true);
        assert_eq!(count.args(&["a.csv"]), vec!["--json", "a.csv"]);
        assert_eq!(count.args(&["b.csv"]), vec!["--json", "b.csv"]);
    }
}
