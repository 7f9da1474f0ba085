// envdecl: Typed Environment Variable Declarations
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::EnvSource;
use std::collections::BTreeMap;

#[test]
fn test_absent_variable_reads_as_empty() {
    let source: EnvSource = [("PORT", "8080")].into_iter().collect();

    assert_eq!(source.get("PORT"), "8080");
    assert_eq!(source.get("MISSING"), "");
}

#[test]
fn test_with_does_not_affect_clones() {
    let original = EnvSource::empty().with("A", "1");
    let modified = original.clone().with("A", "2").with("B", "3");

    assert_eq!(original.get("A"), "1");
    assert_eq!(original.get("B"), "");
    assert_eq!(modified.get("A"), "2");
    assert_eq!(modified.len(), 2);
}

#[test]
fn test_from_map_iterates_in_key_order() {
    let mut vars = BTreeMap::new();
    vars.insert("ZETA".to_string(), "z".to_string());
    vars.insert("ALPHA".to_string(), "a".to_string());

    let source = EnvSource::from_map(vars);
    let keys: Vec<_> = source.iter().map(|(k, _)| k).collect();

    assert_eq!(keys, ["ALPHA", "ZETA"]);
}

#[cfg(windows)]
#[test]
fn test_case_insensitive_on_windows() {
    let source = EnvSource::empty().with("Path", "C:\\bin");
    assert_eq!(source.get("PATH"), "C:\\bin");
}

#[test]
fn test_process_snapshot_is_immutable() {
    let source = EnvSource::from_process();
    let before = source.len();

    // The snapshot owns its data; nothing the process does later changes it.
    let copy = source.clone();
    assert_eq!(copy.len(), before);
    assert!(source.iter().all(|(k, v)| copy.get(k) == v));
}
