//! Data products and the files inside them

use std::ops::Deref;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Root directory of a logical dataset
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DataProduct {
    /// Directory every data file path is resolved against
    pub root: String,
}

impl DataProduct {
    pub fn new(root: impl Into<String>) -> Self {
        Self { root: root.into() }
    }

    /// Root as a path
    pub fn root_path(&self) -> &Path {
        Path::new(&self.root)
    }
}

/// File format, inferred from a file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataFormat {
    Csv,
    Tsv,
    Parquet,
    Spss,
    Stata,
    Sas,
}

impl DataFormat {
    /// Infer the format from a lower-case extension without its dot
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension {
            "csv" => Some(Self::Csv),
            "tsv" | "tab" => Some(Self::Tsv),
            "parquet" | "pqt" => Some(Self::Parquet),
            "sav" | "zsav" => Some(Self::Spss),
            "dta" => Some(Self::Stata),
            "sas7bdat" | "xpt" => Some(Self::Sas),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Tsv => "tsv",
            Self::Parquet => "parquet",
            Self::Spss => "spss",
            Self::Stata => "stata",
            Self::Sas => "sas",
        }
    }

    pub fn all() -> &'static [DataFormat] {
        &[
            Self::Csv,
            Self::Tsv,
            Self::Parquet,
            Self::Spss,
            Self::Stata,
            Self::Sas,
        ]
    }
}

impl std::fmt::Display for DataFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for DataFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|format| format.name() == wanted)
            .ok_or_else(|| format!("Unknown data format: {}", s))
    }
}

/// A file inside a [`DataProduct`]
///
/// Only `product`, `name` and `subpath` are stored. Every path and name
/// component is derived on each call, so editing a stored field is always
/// reflected by the accessors.
///
/// # Example
///
/// ```rust
/// use qsv_sdk::model::{DataFile, DataProduct};
///
/// let file = DataFile::new(DataProduct::new("/data"), "sales.csv").with_subpath("raw");
/// assert_eq!(file.stem(), "sales");
/// assert_eq!(file.filepath(), std::path::PathBuf::from("/data/raw/sales.csv"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DataFile {
    pub product: DataProduct,
    /// File name including its extension
    pub name: String,
    /// Directory under the product root, empty for the root itself
    #[serde(default)]
    pub subpath: String,
}

impl DataFile {
    pub fn new(product: DataProduct, name: impl Into<String>) -> Self {
        Self {
            product,
            name: name.into(),
            subpath: String::new(),
        }
    }

    pub fn with_subpath(mut self, subpath: impl Into<String>) -> Self {
        self.subpath = subpath.into();
        self
    }

    /// File name without its last extension
    pub fn stem(&self) -> String {
        Path::new(&self.name)
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Lower-case last extension without the dot, empty when there is none
    pub fn extension(&self) -> String {
        Path::new(&self.name)
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .unwrap_or_default()
    }

    /// Directory holding the file
    pub fn dirpath(&self) -> PathBuf {
        if self.subpath.is_empty() {
            PathBuf::from(&self.product.root)
        } else {
            self.product.root_path().join(&self.subpath)
        }
    }

    /// Full path of the file
    pub fn filepath(&self) -> PathBuf {
        self.dirpath().join(&self.name)
    }

    /// Format implied by the extension
    pub fn format(&self) -> Option<DataFormat> {
        DataFormat::from_extension(&self.extension())
    }

    pub fn exists(&self) -> bool {
        self.filepath().is_file()
    }
}

/// Newtypes over [`DataFile`] that let signatures state the expected format
macro_rules! typed_data_file {
    ($($(#[$doc:meta])* $ty:ident;)*) => {
        $(
            $(#[$doc])*
            #[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
            #[serde(transparent)]
            pub struct $ty(pub DataFile);

            impl $ty {
                pub fn new(product: DataProduct, name: impl Into<String>) -> Self {
                    Self(DataFile::new(product, name))
                }

                pub fn with_subpath(self, subpath: impl Into<String>) -> Self {
                    Self(self.0.with_subpath(subpath))
                }

                pub fn into_inner(self) -> DataFile {
                    self.0
                }
            }

            impl Deref for $ty {
                type Target = DataFile;

                fn deref(&self) -> &DataFile {
                    &self.0
                }
            }

            impl From<DataFile> for $ty {
                fn from(file: DataFile) -> Self {
                    Self(file)
                }
            }

            impl AsRef<DataFile> for $ty {
                fn as_ref(&self) -> &DataFile {
                    &self.0
                }
            }
        )*
    };
}

typed_data_file! {
    /// A CSV file
    CsvDataFile;
    /// A Parquet file
    ParquetDataFile;
    /// An SPSS `.sav` file
    SpssDataFile;
    /// A Stata `.dta` file
    StataDataFile;
    /// A SAS file
    SasDataFile;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sales() -> DataFile {
        DataFile::new(DataProduct::new("/data"), "sales.csv").with_subpath("raw")
    }

    #[test]
    fn test_derived_paths() {
        let file = sales();
        assert_eq!(file.stem(), "sales");
        assert_eq!(file.extension(), "csv");
        assert_eq!(file.dirpath(), PathBuf::from("/data/raw"));
        assert_eq!(file.filepath(), PathBuf::from("/data/raw/sales.csv"));
    }

    #[test]
    fn test_empty_subpath_uses_root() {
        let file = DataFile::new(DataProduct::new("/data"), "sales.csv");
        assert_eq!(file.dirpath(), PathBuf::from("/data"));
        assert_eq!(file.filepath(), PathBuf::from("/data/sales.csv"));
    }

    #[test]
    fn test_derived_values_follow_edits() {
        let mut file = sales();
        file.name = "Archive.TAR.GZ".to_string();
        assert_eq!(file.stem(), "Archive.TAR");
        assert_eq!(file.extension(), "gz");

        file.name = "README".to_string();
        assert_eq!(file.stem(), "README");
        assert_eq!(file.extension(), "");
        assert_eq!(file.format(), None);
    }

    #[test]
    fn test_format_inference() {
        let product = DataProduct::new("/data");
        assert_eq!(
            DataFile::new(product.clone(), "a.TSV").format(),
            Some(DataFormat::Tsv)
        );
        assert_eq!(
            DataFile::new(product.clone(), "a.zsav").format(),
            Some(DataFormat::Spss)
        );
        assert_eq!(
            DataFile::new(product, "a.xpt").format(),
            Some(DataFormat::Sas)
        );
        assert_eq!("Parquet".parse::<DataFormat>().unwrap(), DataFormat::Parquet);
        assert!("xlsx".parse::<DataFormat>().is_err());
    }

    #[test]
    fn test_typed_variants_deref() {
        let csv = CsvDataFile::new(DataProduct::new("/data"), "sales.csv").with_subpath("raw");
        assert_eq!(csv.filepath(), sales().filepath());
        assert_eq!(csv.into_inner(), sales());
    }

    #[test]
    fn test_serializes_stored_fields_only() {
        let json = serde_json::to_value(sales()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "product": {"root": "/data"},
                "name": "sales.csv",
                "subpath": "raw"
            })
        );

        let file: DataFile =
            serde_json::from_str(r#"{"product": {"root": "/x"}, "name": "a.dta"}"#).unwrap();
        assert_eq!(file.subpath, "");
        assert_eq!(file.format(), Some(DataFormat::Stata));
    }
}
