//! Diagnostic rendering of shapes.
//!
//! Every shape renders as `{Label: value,Label: value}` over its non-null
//! fields, in declaration order. Nested shapes render recursively, lists as
//! `[a, b]` and maps as `{key=value, key=value}`.

use crate::{Float, Timestamp};
use std::collections::BTreeMap;
use std::fmt;

/// A value that can appear inside a shape's diagnostic rendering.
pub trait Render {
    /// Write the rendering of `self` into `f`.
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

macro_rules! render_via_display {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Render for $ty {
                fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    fmt::Display::fmt(self, f)
                }
            }
        )+
    };
}

render_via_display!(i32, i64, bool, str, String, Float, Timestamp);

impl<T: Render> Render for [T] {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            item.render(f)?;
        }
        f.write_str("]")
    }
}

impl<T: Render> Render for Vec<T> {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_slice().render(f)
    }
}

impl<T: Render> Render for BTreeMap<String, T> {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key}=")?;
            value.render(f)?;
        }
        f.write_str("}")
    }
}

/// Writer for the `{Label: value,...}` form.
///
/// ```
/// use elemental_common::FieldList;
/// use std::fmt;
///
/// struct Clip {
///     start: Option<String>,
///     end: Option<String>,
/// }
///
/// impl fmt::Display for Clip {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         let mut fields = FieldList::new(f)?;
///         fields.entry("StartTimecode", self.start.as_ref())?;
///         fields.entry("EndTimecode", self.end.as_ref())?;
///         fields.finish()
///     }
/// }
///
/// let clip = Clip { start: Some("00:00:10:00".into()), end: None };
/// assert_eq!(clip.to_string(), "{StartTimecode: 00:00:10:00}");
/// ```
pub struct FieldList<'a, 'b> {
    f: &'a mut fmt::Formatter<'b>,
    empty: bool,
}

impl<'a, 'b> FieldList<'a, 'b> {
    /// Open the brace and start an empty field list.
    pub fn new(f: &'a mut fmt::Formatter<'b>) -> Result<Self, fmt::Error> {
        f.write_str("{")?;
        Ok(Self { f, empty: true })
    }

    /// Write `Label: value` when `value` is set; unset fields are skipped.
    pub fn entry<T: Render + ?Sized>(&mut self, label: &str, value: Option<&T>) -> fmt::Result {
        let Some(value) = value else {
            return Ok(());
        };
        if !self.empty {
            self.f.write_str(",")?;
        }
        self.empty = false;
        write!(self.f, "{label}: ")?;
        value.render(self.f)
    }

    /// Close the brace.
    pub fn finish(self) -> fmt::Result {
        self.f.write_str("}")
    }
}
