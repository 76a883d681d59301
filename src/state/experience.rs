//! Experience timeline seed.

#[cfg(test)]
#[path = "experience_test.rs"]
mod experience_test;

/// One entry in the professional journey timeline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExperienceEntry {
    pub years: String,
    pub title: String,
    pub location: String,
    pub description: String,
    pub technologies: Vec<String>,
}

fn entry(years: &str, title: &str, location: &str, description: &str, technologies: &[&str]) -> ExperienceEntry {
    ExperienceEntry {
        years: years.to_owned(),
        title: title.to_owned(),
        location: location.to_owned(),
        description: description.to_owned(),
        technologies: technologies.iter().map(|&t| t.to_owned()).collect(),
    }
}

/// The static timeline, newest first.
pub fn experience_entries() -> Vec<ExperienceEntry> {
    vec![
        entry(
            "2024 - Present",
            "Specialist Programmer · Infosys",
            "Bangalore, Karnataka",
            "Transformed legacy TDS system to Spring Boot microservices, implemented \
             Kafka pipelines, and optimized performance with multithreading.",
            &["Spring Boot", "Apache Kafka", "Microservices", "Apache Camel", "Multithreading"],
        ),
        entry(
            "2024",
            "Software Developer Intern · Hograth",
            "Gurugram, Haryana",
            "Enhanced email campaigns and created product display pages for major \
             brands, improving user engagement by 5%.",
            &["HTML", "CSS", "JavaScript", "Email Marketing"],
        ),
        entry(
            "2024",
            "Bachelor's in Computer Science · TIET",
            "Patiala, Punjab",
            "Graduated with expertise in computer science fundamentals and software \
             engineering principles.",
            &["Java", "Algorithms", "Data Structures", "Software Engineering"],
        ),
    ]
}
