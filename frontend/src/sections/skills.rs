use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::{SkillGroup, SoftSkill, SKILL_GROUPS, SOFT_SKILLS};

#[derive(Properties, PartialEq)]
struct SkillGroupProps {
    group: SkillGroup,
}

#[function_component(SkillGroupView)]
fn skill_group_view(props: &SkillGroupProps) -> Html {
    html! {
        <Reveal class={classes!("skill-group")}>
            <h3 class="skill-group-title">{props.group.title}</h3>
            <div class="skill-grid">
                { for props.group.skills.iter().map(|skill| html! {
                    <div class="cyberpunk-card skill-card">
                        <img src={skill.icon} alt={skill.name} loading="lazy" />
                        <span>{skill.name}</span>
                    </div>
                }) }
            </div>
        </Reveal>
    }
}

#[derive(Properties, PartialEq)]
struct SoftSkillsProps {
    skills: &'static [SoftSkill],
}

#[function_component(SoftSkillsView)]
fn soft_skills_view(props: &SoftSkillsProps) -> Html {
    html! {
        <Reveal class={classes!("skill-group")}>
            <h3 class="skill-group-title">{"Soft Skills"}</h3>
            <div class="soft-skill-grid">
                { for props.skills.iter().map(|skill| html! {
                    <div class="cyberpunk-card soft-skill-card">
                        <h4>{skill.name}</h4>
                        <p>{skill.description}</p>
                    </div>
                }) }
            </div>
        </Reveal>
    }
}

#[function_component(Skills)]
pub fn skills() -> Html {
    html! {
        <section id="skills" class="page-section">
            <style>
                {r#"
                    .skill-group {
                        margin-bottom: 3rem;
                    }
                    .skill-group-title {
                        font-size: 1.5rem;
                        font-weight: 600;
                        color: #c084fc;
                        margin-bottom: 1.5rem;
                    }
                    .skill-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fill, minmax(120px, 1fr));
                        gap: 1rem;
                    }
                    .skill-card {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 0.75rem;
                        transition: transform 0.2s ease;
                    }
                    .skill-card:hover {
                        transform: translateY(-4px) scale(1.05);
                    }
                    .skill-card img {
                        width: 48px;
                        height: 48px;
                    }
                    .soft-skill-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fill, minmax(260px, 1fr));
                        gap: 1rem;
                    }
                    .soft-skill-card h4 {
                        font-weight: 600;
                        margin-bottom: 0.5rem;
                    }
                    .soft-skill-card p {
                        color: #9ca3af;
                        font-size: 0.875rem;
                    }
                "#}
            </style>
            <div class="section-container">
                <Reveal>
                    <h2 class="section-title">{"Skills"}</h2>
                </Reveal>
                { for SKILL_GROUPS.iter().map(|group| html! {
                    <SkillGroupView group={*group} />
                }) }
                <SoftSkillsView skills={SOFT_SKILLS} />
            </div>
        </section>
    }
}
