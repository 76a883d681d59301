//! Site owner identity block.
//!
//! One static value drives the header, hero, and contact sections; the
//! contact email here is the single source for both the relay endpoint and
//! the mailto recipient.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

/// Recipient for both the form relay and the mailto fallback.
pub const CONTACT_EMAIL: &str = "prathamgupta4174@gmail.com";

/// A headline figure shown in the hero ("10+ Projects Completed").
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

/// Everything the page knows about its owner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Profile {
    pub name: String,
    pub role: String,
    pub availability: String,
    pub tagline: String,
    pub email: String,
    pub phone: String,
    pub linkedin_url: String,
    pub location_note: String,
    /// Path the résumé asset is served under.
    pub resume_href: String,
    /// Suggested filename for the résumé download.
    pub resume_filename: String,
    pub stats: Vec<Stat>,
}

fn stat(value: &str, label: &str) -> Stat {
    Stat {
        value: value.to_owned(),
        label: label.to_owned(),
    }
}

/// The static owner profile.
pub fn profile() -> Profile {
    Profile {
        name: "Pratham Gupta".to_owned(),
        role: "Java Full-Stack Developer".to_owned(),
        availability: "Available for new opportunities".to_owned(),
        tagline: "Specializing in Java, Spring Boot, and React. Building \
                  scalable solutions that drive business success."
            .to_owned(),
        email: CONTACT_EMAIL.to_owned(),
        phone: "+91 8146823796".to_owned(),
        linkedin_url: "https://linkedin.com/in/pratham-gupta-b90b9b1a0".to_owned(),
        location_note: "Available for remote & onsite opportunities".to_owned(),
        resume_href: "/Pratham_Res_B.pdf".to_owned(),
        resume_filename: "Pratham_Gupta_Resume.pdf".to_owned(),
        stats: vec![
            stat("2+", "Years Experience"),
            stat("10+", "Projects Completed"),
            stat("15+", "Technologies"),
        ],
    }
}
