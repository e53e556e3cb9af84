//! Plain-text and JSON renderings of the navigation tree.
//!
//! Used by `vista tree`; shares the row walk with the sidebar so both show
//! exactly the same rows for the same expansion state.

use tracing::warn;
use vista_types::{NavEntry, find_path_by_label, parent_paths};

use crate::ui::components::nav_tree::{ExpansionState, NavRow, indent, visible_rows};

/// Builds an expansion state with the given labels opened.
///
/// Each label opens the first entry carrying it. Unknown labels are logged
/// and skipped. `expand_all` opens every entry that has children.
pub fn expansion_for(entries: &[NavEntry], labels: &[String], expand_all: bool) -> ExpansionState {
    let mut expansion = ExpansionState::new();
    let targets = if expand_all {
        parent_paths(entries)
    } else {
        labels
            .iter()
            .filter_map(|label| {
                let path = find_path_by_label(entries, label);
                if path.is_none() {
                    warn!(label = %label, "no navigation entry with this label");
                }
                path
            })
            .collect()
    };
    for path in targets {
        if !expansion.is_expanded(&path) {
            expansion.toggle(&path);
        }
    }
    expansion
}

/// One line of the text outline.
pub fn outline_line(row: &NavRow) -> String {
    let indicator = row.indicator.map_or("  ".to_string(), |indicator| format!("{} ", indicator.glyph()));
    let mut line = format!("{}{indicator}{} {}", indent(row.depth), row.icon, row.label);
    if let Some(badge) = row.badge {
        line.push_str(&format!(" [{badge}]"));
    }
    if row.active {
        line.push_str(" *");
    }
    line
}

pub fn outline_lines(entries: &'static [NavEntry], expansion: &ExpansionState) -> Vec<String> {
    visible_rows(entries, expansion).iter().map(outline_line).collect()
}

/// Visible rows as a pretty-printed JSON array.
pub fn outline_json(entries: &'static [NavEntry], expansion: &ExpansionState) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&visible_rows(entries, expansion))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::NAV_ENTRIES;
    use serde_json::Value;

    #[test]
    fn collapsed_outline_lists_top_level_only() {
        let lines = outline_lines(NAV_ENTRIES, &ExpansionState::new());
        assert_eq!(
            lines,
            vec![
                "  ⌂ Dashboard *",
                "▸ ◔ Analytics",
                "▸ ☺ Customers",
                "▸ $ Commerce",
                "  ✉ Inbox [4]",
                "▸ ⚙ Settings",
            ]
        );
    }

    #[test]
    fn expanded_labels_show_children_with_badges() {
        let expansion = expansion_for(NAV_ENTRIES, &["Commerce".to_string(), "Commerce".to_string()], false);
        let lines = outline_lines(NAV_ENTRIES, &expansion);
        assert!(lines.contains(&"▾ $ Commerce".to_string()));
        assert!(lines.contains(&"    ▣ Orders [12]".to_string()));
        assert!(lines.contains(&"    % Discounts [New]".to_string()));
        assert!(!lines.iter().any(|line| line.contains("Overview")));
    }

    #[test]
    fn unknown_labels_are_ignored() {
        let expansion = expansion_for(NAV_ENTRIES, &["Nope".to_string()], false);
        assert!(expansion.is_empty());
    }

    #[test]
    fn expand_all_opens_every_parent() {
        let expansion = expansion_for(NAV_ENTRIES, &[], true);
        assert_eq!(expansion.len(), 4);
        assert_eq!(outline_lines(NAV_ENTRIES, &expansion).len(), 18);
    }

    #[test]
    fn json_outline_carries_paths_and_indicators() {
        let expansion = expansion_for(NAV_ENTRIES, &["Analytics".to_string()], false);
        let json: Value = serde_json::from_str(&outline_json(NAV_ENTRIES, &expansion).expect("json")).expect("parse");
        let rows = json.as_array().expect("array");
        assert_eq!(rows[1]["label"], "Analytics");
        assert_eq!(rows[1]["indicator"], "expanded");
        assert_eq!(rows[2]["path"], serde_json::json!([1, 0]));
        assert_eq!(rows[2]["depth"], 1);
        assert!(rows[2].get("indicator").is_none());
    }
}
