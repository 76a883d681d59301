use super::*;

fn sample_table() -> Vec<Skill> {
    vec![
        skill("Java", 95, "Backend"),
        skill("SQL", 90, "Database"),
        skill("TS", 85, "Frontend"),
    ]
}

// =============================================================
// filter_by_category
// =============================================================

#[test]
fn filter_all_returns_everything_in_order() {
    let table = sample_table();
    assert_eq!(filter_by_category(&table, CATEGORY_ALL), table);
}

#[test]
fn filter_all_on_empty_table_is_empty() {
    assert!(filter_by_category(&[], CATEGORY_ALL).is_empty());
}

#[test]
fn filter_by_present_category_returns_exact_matches() {
    let table = sample_table();
    let filtered = filter_by_category(&table, "Database");
    assert_eq!(filtered, vec![skill("SQL", 90, "Database")]);
}

#[test]
fn filter_preserves_relative_order() {
    let table = vec![
        skill("A", 10, "x"),
        skill("B", 20, "y"),
        skill("C", 30, "x"),
        skill("D", 40, "x"),
    ];
    let names = filter_by_category(&table, "x")
        .into_iter()
        .map(|s| s.name)
        .collect::<Vec<_>>();
    assert_eq!(names, vec!["A", "C", "D"]);
}

#[test]
fn filter_by_absent_category_is_empty_not_an_error() {
    let table = sample_table();
    assert!(filter_by_category(&table, "Mobile").is_empty());
}

#[test]
fn filter_is_idempotent() {
    let table = sample_table();
    let once = filter_by_category(&table, "Frontend");
    let twice = filter_by_category(&once, "Frontend");
    assert_eq!(once, twice);
}

#[test]
fn filter_matches_category_exactly() {
    let table = vec![skill("A", 10, "Backend"), skill("B", 20, "backend")];
    let filtered = filter_by_category(&table, "Backend");
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].name, "A");
}

// =============================================================
// distinct_categories
// =============================================================

#[test]
fn distinct_categories_keeps_first_appearance_order() {
    let groups = vec![
        group("One", vec![skill("A", 1, "x"), skill("B", 2, "y")]),
        group("Two", vec![skill("C", 3, "x"), skill("D", 4, "z")]),
    ];
    assert_eq!(distinct_categories(&groups), vec!["x", "y", "z"]);
}

#[test]
fn distinct_categories_of_empty_groups_is_empty() {
    assert!(distinct_categories(&[]).is_empty());
    assert!(distinct_categories(&[group("Empty", vec![])]).is_empty());
}

#[test]
fn all_is_not_a_seed_category() {
    assert!(!distinct_categories(&skill_groups()).iter().any(|c| c == CATEGORY_ALL));
}

// =============================================================
// Seed integrity
// =============================================================

#[test]
fn seed_has_three_display_groups() {
    let titles = skill_groups().into_iter().map(|g| g.title).collect::<Vec<_>>();
    assert_eq!(titles, vec!["Languages", "Technologies", "Tools"]);
}

#[test]
fn seed_levels_are_percentages() {
    for group in skill_groups() {
        for skill in group.skills {
            assert!(skill.level <= 100, "{} exceeds 100", skill.name);
        }
    }
}

#[test]
fn seed_names_are_unique_within_their_group() {
    for group in skill_groups() {
        for (i, a) in group.skills.iter().enumerate() {
            for b in group.skills.iter().skip(i + 1) {
                assert_ne!(a.name, b.name, "duplicate in {}", group.title);
            }
        }
    }
}

#[test]
fn seed_filter_by_database_spans_groups() {
    let groups = skill_groups();
    let all = groups.iter().flat_map(|g| g.skills.clone()).collect::<Vec<_>>();
    let filtered = filter_by_category(&all, "Database");
    let names = filtered.iter().map(|s| s.name.as_str()).collect::<Vec<_>>();
    assert_eq!(names, vec!["SQL", "Spring JDBC", "MySQL", "NoSQL"]);
}
