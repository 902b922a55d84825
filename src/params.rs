//! Parameter values and the flag compiler
//!
//! A command's parameters are declared once, in a fixed order, as a table of
//! [`ParamSpec`]s. Values are held in a [`Params`] set aligned with that
//! table, and [`compile_flags`] turns the set into `--flag value` tokens.

use std::fmt;

/// Parameters that are positional in qsv's grammar and never become flags
pub const POSITIONAL_PARAMS: [&str; 2] = ["selection", "input_path"];

/// Parameter names whose flag is not derived mechanically from the name
pub const FLAG_RENAMES: [(&str, &str); 2] = [("round_places", "--round"), ("include_all", "--all")];

/// Value of a single named parameter
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ParamValue {
    /// Not set; emits nothing
    #[default]
    Absent,
    /// Switch; `true` emits the bare flag, `false` emits nothing
    Bool(bool),
    /// Emits the flag followed by the value
    Scalar(String),
    /// Emits the flag and one value per element
    List(Vec<String>),
}

impl ParamValue {
    /// Whether this value produces no tokens
    pub fn is_unset(&self) -> bool {
        matches!(self, ParamValue::Absent | ParamValue::Bool(false))
    }

    /// Create a list value from anything displayable
    pub fn list<I, T>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: fmt::Display,
    {
        ParamValue::List(values.into_iter().map(|v| v.to_string()).collect())
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Scalar(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Scalar(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Scalar(value.to_string())
    }
}

impl<T: Into<ParamValue>> From<Option<T>> for ParamValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(ParamValue::Absent, Into::into)
    }
}

/// Declaration of one parameter: its name and the value qsv assumes when
/// the flag is omitted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamSpec {
    pub name: &'static str,
    pub default: Option<&'static str>,
}

impl ParamSpec {
    /// Parameter without a declared default
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            default: None,
        }
    }

    /// Parameter whose default is elided when set
    pub const fn with_default(name: &'static str, default: &'static str) -> Self {
        Self {
            name,
            default: Some(default),
        }
    }

    /// The flag this parameter compiles to, `None` for positional parameters
    pub fn flag(&self) -> Option<String> {
        flag_for(self.name)
    }
}

/// Map a parameter name to its long flag
pub fn flag_for(name: &str) -> Option<String> {
    if POSITIONAL_PARAMS.contains(&name) {
        return None;
    }
    if let Some((_, flag)) = FLAG_RENAMES.iter().find(|(param, _)| *param == name) {
        return Some((*flag).to_string());
    }
    Some(format!("--{}", name.replace('_', "-")))
}

/// Ordered parameter values of one command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Params {
    specs: &'static [ParamSpec],
    values: Vec<ParamValue>,
}

impl Params {
    /// Create an all-absent set for a declared table
    pub fn new(specs: &'static [ParamSpec]) -> Self {
        Self {
            specs,
            values: vec![ParamValue::Absent; specs.len()],
        }
    }

    /// The declared table
    pub fn specs(&self) -> &'static [ParamSpec] {
        self.specs
    }

    /// Set a parameter
    ///
    /// A scalar equal to the declared default is stored as absent, so an
    /// explicit default and an untouched parameter compile identically.
    /// Names missing from the table are ignored.
    pub fn set(&mut self, name: &str, value: impl Into<ParamValue>) {
        let Some(index) = self.specs.iter().position(|spec| spec.name == name) else {
            tracing::warn!(param = name, "Ignoring undeclared parameter");
            return;
        };
        let value = value.into();
        let value = match (&value, self.specs[index].default) {
            (ParamValue::Scalar(v), Some(default)) if v == default => ParamValue::Absent,
            _ => value,
        };
        self.values[index] = value;
    }

    /// Builder form of [`Params::set`]
    pub fn with(mut self, name: &str, value: impl Into<ParamValue>) -> Self {
        self.set(name, value);
        self
    }

    /// Current value of a parameter
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.specs
            .iter()
            .position(|spec| spec.name == name)
            .map(|index| &self.values[index])
    }

    /// Iterate parameters in declared order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &ParamValue)> {
        self.specs
            .iter()
            .map(|spec| spec.name)
            .zip(self.values.iter())
    }

    /// Number of parameters that will emit tokens
    pub fn active_count(&self) -> usize {
        self.values.iter().filter(|v| !v.is_unset()).count()
    }
}

/// Compile a parameter set into flag tokens, in declared order
pub fn compile_flags(params: &Params) -> Vec<String> {
    let mut args = Vec::new();
    for (name, value) in params.iter() {
        if value.is_unset() {
            continue;
        }
        let Some(flag) = flag_for(name) else {
            continue;
        };
        match value {
            ParamValue::Absent | ParamValue::Bool(false) => {}
            ParamValue::Bool(true) => args.push(flag),
            ParamValue::Scalar(v) => {
                args.push(flag);
                args.push(v.clone());
            }
            ParamValue::List(items) => {
                for item in items {
                    args.push(flag.clone());
                    args.push(item.clone());
                }
            }
        }
    }
    args
}
