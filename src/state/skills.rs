//! Skill table, display grouping, and category filtering.
//!
//! DESIGN
//! ======
//! The table is static and small, so the category universe and every
//! filtered view are rederived as pure recomputations; nothing is cached.

#[cfg(test)]
#[path = "skills_test.rs"]
mod skills_test;

/// The implicit first filter choice. Never a `category` value itself.
pub const CATEGORY_ALL: &str = "all";

/// One skill entry. `level` is a relative confidence score in 0..=100 used
/// only as a visual proportion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Skill {
    pub name: String,
    pub level: u8,
    pub category: String,
}

/// A titled display group of skills (the grid renders one card per group).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkillGroup {
    pub title: String,
    pub skills: Vec<Skill>,
}

/// Filter a skill list by the selected category.
///
/// [`CATEGORY_ALL`] returns every skill in original order; any other value
/// returns exactly the skills whose `category` equals it, relative order
/// preserved. A category with no matches yields an empty list.
pub fn filter_by_category(skills: &[Skill], selected: &str) -> Vec<Skill> {
    skills
        .iter()
        .filter(|skill| selected == CATEGORY_ALL || skill.category == selected)
        .cloned()
        .collect()
}

/// Distinct category values across all groups, in order of first appearance.
pub fn distinct_categories(groups: &[SkillGroup]) -> Vec<String> {
    let mut categories = Vec::new();
    for group in groups {
        for skill in &group.skills {
            if !categories.contains(&skill.category) {
                categories.push(skill.category.clone());
            }
        }
    }
    categories
}

fn skill(name: &str, level: u8, category: &str) -> Skill {
    Skill {
        name: name.to_owned(),
        level,
        category: category.to_owned(),
    }
}

fn group(title: &str, skills: Vec<Skill>) -> SkillGroup {
    SkillGroup {
        title: title.to_owned(),
        skills,
    }
}

/// The static skill table, grouped the way the grid displays it.
pub fn skill_groups() -> Vec<SkillGroup> {
    vec![
        group(
            "Languages",
            vec![
                skill("Java", 95, "Backend"),
                skill("SQL", 90, "Database"),
                skill("JavaScript", 88, "Frontend"),
                skill("TypeScript", 85, "Frontend"),
                skill("HTML/CSS", 92, "Frontend"),
                skill("OOP Concepts", 94, "Fundamentals"),
                skill("Linux", 82, "Systems"),
            ],
        ),
        group(
            "Technologies",
            vec![
                skill("Spring Boot", 92, "Backend"),
                skill("REST API", 90, "Architecture"),
                skill("Hibernate", 85, "ORM"),
                skill("Spring JDBC", 83, "Database"),
                skill("Maven", 88, "Build Tools"),
                skill("Apache Camel", 78, "Integration"),
                skill("Apache Kafka", 80, "Messaging"),
                skill("MVC Architecture", 89, "Architecture"),
                skill("JUnit", 86, "Testing"),
                skill("MQ", 75, "Messaging"),
            ],
        ),
        group(
            "Tools",
            vec![
                skill("Git", 91, "Version Control"),
                skill("MySQL", 89, "Database"),
                skill("Spring Consul", 76, "Service Discovery"),
                skill("Kafka", 79, "Streaming"),
                skill("NoSQL", 72, "Database"),
                skill("VS Code", 94, "IDE"),
                skill("STS", 88, "IDE"),
                skill("AWS", 75, "Cloud"),
                skill("ReactTS", 84, "Frontend"),
                skill("CI/CD Pipeline", 81, "DevOps"),
                skill("Jenkins", 77, "DevOps"),
                skill("Kubernetes", 70, "Containerization"),
            ],
        ),
    ]
}
