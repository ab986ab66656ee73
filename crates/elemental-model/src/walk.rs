//! Discovery of enumeration values this crate does not model.
//!
//! Documents produced by a newer service version can carry enumeration
//! values that fall back to `Other(_)`. They round-trip untouched, but
//! callers often want to know where they are.

use elemental_common::{Float, Timestamp};
use std::collections::BTreeMap;
use std::fmt;

/// One unmodelled enumeration value and where it was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownValue {
    /// Dotted field path, e.g. `Settings.OutputGroups[0].Outputs[1].Extension`.
    pub path: String,
    /// Name of the enumeration the field is typed with.
    pub enumeration: &'static str,
    /// The wire value as received.
    pub value: String,
}

impl fmt::Display for UnknownValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} is not a known {} value",
            self.path, self.value, self.enumeration
        )
    }
}

/// Walks a value and reports every unmodelled enumeration value inside it.
pub trait UnknownValues {
    /// Append the unknown values found under `path` to `out`.
    fn collect_unknown(&self, path: &str, out: &mut Vec<UnknownValue>);

    /// Every unknown value in `self`, in field declaration order.
    fn unknown_values(&self) -> Vec<UnknownValue> {
        let mut out = Vec::new();
        self.collect_unknown("", &mut out);
        out
    }
}

pub(crate) fn child_path(parent: &str, label: &str) -> String {
    if parent.is_empty() {
        label.to_owned()
    } else {
        format!("{parent}.{label}")
    }
}

macro_rules! leaf {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl UnknownValues for $ty {
                fn collect_unknown(&self, _path: &str, _out: &mut Vec<UnknownValue>) {}
            }
        )+
    };
}

leaf!(i32, i64, bool, String, Float, Timestamp);

impl<T: UnknownValues> UnknownValues for Vec<T> {
    fn collect_unknown(&self, path: &str, out: &mut Vec<UnknownValue>) {
        for (i, item) in self.iter().enumerate() {
            item.collect_unknown(&format!("{path}[{i}]"), out);
        }
    }
}

impl<T: UnknownValues> UnknownValues for BTreeMap<String, T> {
    fn collect_unknown(&self, path: &str, out: &mut Vec<UnknownValue>) {
        for (key, item) in self {
            item.collect_unknown(&format!("{path}[{key}]"), out);
        }
    }
}
