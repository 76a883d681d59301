use super::*;

#[test]
fn timeline_has_three_entries_newest_first() {
    let entries = experience_entries();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].years, "2024 - Present");
}

#[test]
fn every_entry_is_fully_described() {
    for entry in experience_entries() {
        assert!(!entry.years.is_empty());
        assert!(!entry.title.is_empty());
        assert!(!entry.location.is_empty());
        assert!(!entry.description.is_empty());
        assert!(!entry.technologies.is_empty());
    }
}
