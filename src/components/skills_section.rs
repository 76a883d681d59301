//! Skills section with category filter buttons and grouped level bars.
//!
//! DESIGN
//! ======
//! The filter selection is local UI state; every filtered view is a pure
//! recomputation over the static table (`state::skills`), so there is no
//! derived state to keep in sync.

#[cfg(test)]
#[path = "skills_section_test.rs"]
mod skills_section_test;

use leptos::prelude::*;

use crate::state::skills::{
    CATEGORY_ALL, Skill, SkillGroup, distinct_categories, filter_by_category, skill_groups,
};

fn filter_button_class(selected: &str, category: &str) -> &'static str {
    if selected == category {
        "skill-filter skill-filter--active"
    } else {
        "skill-filter"
    }
}

#[component]
pub fn SkillsSection() -> impl IntoView {
    let groups = skill_groups();
    let categories = distinct_categories(&groups);
    let selected = RwSignal::new(CATEGORY_ALL.to_owned());

    view! {
        <section class="skills-section">
            <h3 class="section-heading">
                "Technical " <span class="accent">"Expertise"</span>
            </h3>
            <p class="skills-section__intro">
                "Comprehensive skill set spanning full-stack development, cloud \
                 technologies, and modern software architecture"
            </p>

            <div class="skills-section__filter">
                <button
                    class=move || filter_button_class(&selected.get(), CATEGORY_ALL)
                    on:click=move |_| selected.set(CATEGORY_ALL.to_owned())
                >
                    "All Skills"
                </button>
                {categories
                    .into_iter()
                    .map(|category| {
                        let value = category.clone();
                        let class_value = category.clone();
                        view! {
                            <button
                                class=move || filter_button_class(&selected.get(), &class_value)
                                on:click=move |_| selected.set(value.clone())
                            >
                                {category}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <div class="skills-section__groups">
                {groups
                    .into_iter()
                    .map(|group| view! { <SkillGroupCard group=group selected=selected /> })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}

/// One titled group card. Hidden entirely when the active filter leaves it
/// with no skills to show.
#[component]
fn SkillGroupCard(group: SkillGroup, selected: RwSignal<String>) -> impl IntoView {
    let SkillGroup { title, skills } = group;
    let skills_for_list = skills.clone();

    view! {
        <Show when=move || !filter_by_category(&skills, &selected.get()).is_empty()>
            <div class="skill-group">
                <h4 class="skill-group__title">{title.clone()}</h4>
                <div class="skill-group__list">
                    {
                        let skills = skills_for_list.clone();
                        move || {
                            filter_by_category(&skills, &selected.get())
                                .into_iter()
                                .map(|skill| view! { <SkillRow skill=skill /> })
                                .collect::<Vec<_>>()
                        }
                    }
                </div>
            </div>
        </Show>
    }
}

#[component]
fn SkillRow(skill: Skill) -> impl IntoView {
    let Skill { name, level, category } = skill;
    let fill_style = format!("width: {level}%");

    view! {
        <div class="skill-row">
            <div class="skill-row__meta">
                <h5 class="skill-row__name">{name}</h5>
                <p class="skill-row__category">{category}</p>
            </div>
            <div class="skill-row__level">
                <div class="skill-row__track" aria-hidden="true">
                    <div class="skill-row__fill" style=fill_style></div>
                </div>
                <span class="skill-row__percent">{format!("{level}%")}</span>
            </div>
        </div>
    }
}
