//! Argument compilation across the command descriptors

use qsv_sdk::commands::{
    Apply, Cat, CatMode, Dedup, DescribeGpt, Join, MoarStats, Qsv, Rename, Replace, Sample,
    Select, Sort, Sqlp, Stats, Validate,
};
use qsv_sdk::params::{ParamSpec, ParamValue, Params, compile_flags};
use qsv_sdk::{CommandKind, QsvCommand, all_command_kinds, lookup};

#[test]
fn test_round_places_compiles_to_round() {
    let args = Stats::new().round_places(6).args(&["data.csv"]);
    assert_eq!(args, vec!["--round", "6", "data.csv"]);
    assert!(!args.iter().any(|a| a == "--round-places"));

    let args = MoarStats::new().args(&["data.csv"]);
    assert_eq!(args, vec!["--round", "4", "data.csv"]);
}

#[test]
fn test_list_values_repeat_flag() {
    static SPECS: [ParamSpec; 2] = [ParamSpec::new("jobs"), ParamSpec::new("input_path")];
    let params = Params::new(&SPECS)
        .with("jobs", ParamValue::list([1, 2]))
        .with("input_path", "data.csv");
    assert_eq!(compile_flags(&params), vec!["--jobs", "1", "--jobs", "2"]);
}

#[test]
fn test_default_values_never_emitted() {
    let sort = Sort::new().rng("standard").numeric(true);
    assert_eq!(sort.args(&["a.csv"]), vec!["--numeric", "a.csv"]);

    let dedup = Dedup::new().ignore_case(false);
    assert_eq!(dedup.args(&["a.csv"]), vec!["a.csv"]);
}

#[test]
fn test_positional_layouts() {
    assert_eq!(Select::new("1,3").args(&["a.csv"]), vec!["1,3", "a.csv"]);
    assert_eq!(Rename::new("x,y").args(&["a.csv"]), vec!["x,y", "a.csv"]);
    assert_eq!(
        Replace::new("foo", "bar").ignore_case(true).args(&["a.csv"]),
        vec!["--ignore-case", "foo", "bar", "a.csv"]
    );
    assert_eq!(
        Apply::new("name").operation("upper").args(&["a.csv"]),
        vec!["upper", "name", "a.csv"]
    );
    assert_eq!(
        Cat::with_mode(CatMode::Columns).args(&["a.csv", "b.csv"]),
        vec!["columns", "a.csv", "b.csv"]
    );
    assert_eq!(
        Join::new("id", "id").full(true).args(&["a.csv", "b.csv"]),
        vec!["--full", "id", "a.csv", "id", "b.csv"]
    );
    assert_eq!(Sample::with_size(5).args(&["a.csv"]), vec!["5", "a.csv"]);
    assert_eq!(Sqlp::new("select 1").args(&["a.csv"]), vec!["select 1", "a.csv"]);
    assert_eq!(
        Validate::with_schema("s.json").args(&["a.csv"]),
        vec!["a.csv", "s.json"]
    );
}

#[test]
fn test_top_level_and_describegpt() {
    assert_eq!(Qsv::new().version(true).args(&[]), vec!["--version"]);
    assert_eq!(Qsv::new().kind().subcommand(), "");
    assert_eq!(
        DescribeGpt::new().include_all(true).args(&["a.csv"]),
        vec!["--all", "a.csv"]
    );
}

#[test]
fn test_registry_covers_every_descriptor() {
    let kinds = all_command_kinds();
    assert_eq!(kinds.len(), 32);
    assert_eq!(kinds.first(), Some(&CommandKind::Apply));
    assert_eq!(kinds.last(), Some(&CommandKind::Validate));

    for kind in kinds {
        assert_eq!(lookup(kind.name()), Some(kind));
        assert_eq!(kind.name().parse::<CommandKind>(), Ok(kind));
    }

    assert_eq!(Stats::new().name(), "stats");
    assert_eq!(MoarStats::new().name(), "moarstats");
}
