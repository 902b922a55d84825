//! Data files and the statistics qsv computes for them

pub mod data_file;
pub mod stats;
pub mod stats_file;

pub use data_file::{
    CsvDataFile, DataFile, DataFormat, DataProduct, ParquetDataFile, SasDataFile, SpssDataFile,
    StataDataFile,
};
pub use stats::StatsRecord;
pub use stats_file::{StatsFile, load_stats};
