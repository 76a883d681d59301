//! Project showcase state and seed data.
//!
//! DESIGN
//! ======
//! The catalog swaps the whole item list in atomically once a load resolves.
//! A load sequence number makes the swap safe against superseded loads: only
//! the most recent `begin_load` may publish its result.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

/// One portfolio entry. Constructed once as part of the immutable seed set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Insertion order is display order.
    pub tags: Vec<String>,
    /// Absent URLs suppress the corresponding link in the card.
    pub github_url: Option<String>,
    pub live_url: Option<String>,
}

/// Number of skeleton cards shown while the catalog is loading.
pub const LOADING_PLACEHOLDER_COUNT: usize = 3;

/// Project list state for the showcase grid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProjectsState {
    pub items: Vec<Project>,
    pub loading: bool,
    pub load_seq: u64,
}

impl ProjectsState {
    /// Start a load: flips `loading` on and returns the sequence number the
    /// matching [`finish_load`](Self::finish_load) must present.
    pub fn begin_load(&mut self) -> u64 {
        self.loading = true;
        self.load_seq += 1;
        self.load_seq
    }

    /// Publish a finished load. A stale `seq` (another `begin_load` happened
    /// in the meantime) is ignored entirely so a superseded load can never
    /// overwrite newer state.
    pub fn finish_load(&mut self, seq: u64, items: Vec<Project>) {
        if seq != self.load_seq {
            return;
        }
        self.items = items;
        self.loading = false;
    }
}

fn project(
    id: &str,
    title: &str,
    description: &str,
    tags: &[&str],
    github_url: Option<&str>,
    live_url: Option<&str>,
) -> Project {
    Project {
        id: id.to_owned(),
        title: title.to_owned(),
        description: description.to_owned(),
        tags: tags.iter().map(|&t| t.to_owned()).collect(),
        github_url: github_url.map(str::to_owned),
        live_url: live_url.map(str::to_owned),
    }
}

/// The static project seed, in display order.
pub fn seed_projects() -> Vec<Project> {
    vec![
        project(
            "p1",
            "SmartCharge - EV Route Planner",
            "AI-powered EV trip optimization system with real-time wait time \
             predictions using XGBoost and route optimization.",
            &["Java", "Spring Boot", "ReactTS", "Machine Learning", "FlaskAPI", "XGBoost"],
            Some("https://github.com/Pratham4174/smartChargerBkend.git"),
            Some("#"),
        ),
        project(
            "p2",
            "PlayBox - Sports Booking App",
            "React Native sports venue booking application with Java backend, \
             featuring real-time availability and secure payments.",
            &["React Native", "Java", "Spring Boot", "Mobile Development", "REST API", "Payment Integration"],
            Some("https://github.com/Pratham4174/Playbox.git"),
            Some("#"),
        ),
        project(
            "p3",
            "Government TDS System",
            "Spring Boot microservices transformation with Kafka pipelines and \
             multithreading for tax processing system.",
            &["Spring Boot", "Apache Kafka", "Multithreading", "Apache Camel", "Microservices"],
            None,
            None,
        ),
    ]
}
