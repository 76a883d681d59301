use super::*;

#[test]
fn profile_email_matches_the_shared_recipient() {
    assert_eq!(profile().email, CONTACT_EMAIL);
    assert!(CONTACT_EMAIL.contains('@'));
}

#[test]
fn profile_has_three_hero_stats() {
    let stats = profile().stats;
    assert_eq!(stats.len(), 3);
    for stat in stats {
        assert!(!stat.value.is_empty());
        assert!(!stat.label.is_empty());
    }
}

#[test]
fn resume_download_has_fixed_suggested_filename() {
    let profile = profile();
    assert_eq!(profile.resume_filename, "Pratham_Gupta_Resume.pdf");
    assert!(profile.resume_href.ends_with(".pdf"));
}
