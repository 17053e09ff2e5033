//! Mirror status summary rendering.
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};

use crate::status::Action;

/// Column value derived from a "needs creation" flag.
fn status(needs_creation: bool) -> &'static str {
    if needs_creation {
        "missing"
    } else {
        "created"
    }
}

/// Render the decided actions as a table sorted by repository slug.
///
/// The two status columns come straight from the action flags; no decision
/// logic lives here.
pub fn render_summary(actions: &[Action]) -> Table {
    let mut actions: Vec<&Action> = actions.iter().collect();
    actions.sort_by(|a, b| {
        a.gitlab_repo
            .path_with_namespace
            .cmp(&b.gitlab_repo.path_with_namespace)
    });

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Repository", "GitHub repo", "Mirror"]);
    for action in actions {
        table.add_row(vec![
            action.gitlab_repo.path_with_namespace.as_str(),
            status(action.create_repo),
            status(action.create_mirror),
        ]);
    }
    table
}
