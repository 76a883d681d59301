use super::*;

fn sample_projects() -> Vec<Project> {
    vec![
        project("a", "Alpha", "First sample project.", &["Rust"], None, None),
        project("b", "Beta", "Second sample project.", &["Wasm"], Some("https://example.com/b"), None),
        project("c", "Gamma", "Third sample project.", &[], None, Some("https://example.com/c")),
    ]
}

// =============================================================
// Seed integrity
// =============================================================

#[test]
fn seed_projects_has_three_entries_in_order() {
    let seed = seed_projects();
    let ids = seed.iter().map(|p| p.id.as_str()).collect::<Vec<_>>();
    assert_eq!(ids, vec!["p1", "p2", "p3"]);
}

#[test]
fn seed_project_ids_are_unique() {
    let seed = seed_projects();
    for (i, a) in seed.iter().enumerate() {
        for b in seed.iter().skip(i + 1) {
            assert_ne!(a.id, b.id);
        }
    }
}

#[test]
fn seed_projects_have_display_text_and_tags() {
    for p in seed_projects() {
        assert!(!p.title.is_empty());
        assert!(!p.description.is_empty());
        assert!(!p.tags.is_empty());
    }
}

#[test]
fn seed_projects_without_links_suppress_both_urls() {
    let seed = seed_projects();
    assert!(seed[2].github_url.is_none());
    assert!(seed[2].live_url.is_none());
}

// =============================================================
// Load lifecycle
// =============================================================

#[test]
fn exactly_three_placeholders_while_loading() {
    assert_eq!(LOADING_PLACEHOLDER_COUNT, 3);
}

#[test]
fn default_state_is_empty_and_not_loading() {
    let state = ProjectsState::default();
    assert!(state.items.is_empty());
    assert!(!state.loading);
    assert_eq!(state.load_seq, 0);
}

#[test]
fn begin_load_sets_loading_until_finish() {
    let mut state = ProjectsState::default();
    let seq = state.begin_load();
    assert!(state.loading);
    assert!(state.items.is_empty());

    state.finish_load(seq, sample_projects());
    assert!(!state.loading);
    assert_eq!(state.items, sample_projects());
}

#[test]
fn finish_load_preserves_original_order() {
    let mut state = ProjectsState::default();
    let seq = state.begin_load();
    state.finish_load(seq, sample_projects());
    let ids = state.items.iter().map(|p| p.id.as_str()).collect::<Vec<_>>();
    assert_eq!(ids, vec!["a", "b", "c"]);
}

#[test]
fn superseded_load_is_fully_ignored() {
    let mut state = ProjectsState::default();
    let stale = state.begin_load();
    let current = state.begin_load();

    // The stale completion arrives first and must change nothing.
    state.finish_load(stale, vec![]);
    assert!(state.loading);
    assert!(state.items.is_empty());

    state.finish_load(current, sample_projects());
    assert!(!state.loading);
    assert_eq!(state.items.len(), 3);
}

#[test]
fn stale_completion_after_current_one_is_ignored() {
    let mut state = ProjectsState::default();
    let stale = state.begin_load();
    let current = state.begin_load();

    state.finish_load(current, sample_projects());
    state.finish_load(stale, vec![]);
    assert_eq!(state.items, sample_projects());
    assert!(!state.loading);
}
