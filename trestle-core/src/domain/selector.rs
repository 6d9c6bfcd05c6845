// trestle-core/src/domain/selector.rs

use std::collections::BTreeSet;

/// Labels checked for select/exclude overlap.
pub const CONFLICT_LABELS: [&str; 2] = ["tag", "path"];

/// Extracts every `value` from `label:value` items carrying the given label.
/// Items without the label (or without a `:` at all) are ignored.
pub fn retrieve_by_label(statements: &[String], label: &str) -> BTreeSet<String> {
    statements
        .iter()
        .filter_map(|statement| statement.split_once(':'))
        .filter(|(item_label, _)| *item_label == label)
        .map(|(_, value)| value.to_string())
        .collect()
}

/// Values constrained by both lists under the same label. A non-empty result
/// means the selection is contradictory and the caller must fail the build.
pub fn conflicting_values(select: &[String], exclude: &[String], label: &str) -> BTreeSet<String> {
    let selected = retrieve_by_label(select, label);
    let excluded = retrieve_by_label(exclude, label);
    selected.intersection(&excluded).cloned().collect()
}
