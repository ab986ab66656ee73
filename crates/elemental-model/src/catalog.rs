//! Catalog of every modelled enumeration.

/// Name and known values of one enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumInfo {
    /// Type name, e.g. `H264RateControlMode`.
    pub name: &'static str,
    /// Known wire values in declaration order.
    pub values: &'static [&'static str],
}

const MODULES: &[&[EnumInfo]] = &[
    crate::audio::ENUMERATIONS,
    crate::video::ENUMERATIONS,
    crate::captions::ENUMERATIONS,
    crate::containers::ENUMERATIONS,
    crate::encryption::ENUMERATIONS,
    crate::output_groups::ENUMERATIONS,
    crate::inputs::ENUMERATIONS,
    crate::job::ENUMERATIONS,
];

/// Iterate every modelled enumeration.
pub fn enumerations() -> impl Iterator<Item = &'static EnumInfo> {
    MODULES.iter().flat_map(|module| module.iter())
}

/// Look an enumeration up by type name, ignoring ASCII case.
pub fn find_enumeration(name: &str) -> Option<&'static EnumInfo> {
    enumerations().find(|info| info.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn names_are_unique() {
        let mut seen = HashSet::new();
        for info in enumerations() {
            assert!(seen.insert(info.name), "duplicate enumeration {}", info.name);
        }
    }

    #[test]
    fn every_enumeration_has_values() {
        for info in enumerations() {
            assert!(!info.values.is_empty(), "{} has no values", info.name);
        }
    }

    #[test]
    fn lookup_ignores_case() {
        let info = find_enumeration("aacratecontrolmode").unwrap();
        assert_eq!(info.name, "AacRateControlMode");
        assert_eq!(info.values, &["CBR", "VBR"]);
        assert!(find_enumeration("NoSuchEnumeration").is_none());
    }
}
