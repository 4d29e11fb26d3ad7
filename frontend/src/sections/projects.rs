use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::{tag_preview, Project, PROJECTS};

const CARD_TAG_LIMIT: usize = 3;

#[derive(Properties, PartialEq)]
struct ProjectCardProps {
    project: Project,
    on_select: Callback<u32>,
}

#[function_component(ProjectCard)]
fn project_card(props: &ProjectCardProps) -> Html {
    let project = props.project;
    let (tags, hidden) = tag_preview(project.technologies, CARD_TAG_LIMIT);

    let onclick = {
        let on_select = props.on_select.clone();
        Callback::from(move |_: MouseEvent| on_select.emit(project.id))
    };

    html! {
        <Reveal class={classes!("project-card-wrapper")} threshold={0.2}>
            <div class="cyberpunk-card project-card" onclick={onclick}>
                <div class="project-image">
                    <img src={project.image} alt={project.title} loading="lazy" />
                    <span class="project-category">{project.category}</span>
                </div>
                <h3>{project.title}</h3>
                <p>{project.description}</p>
                <div class="project-tags">
                    { for tags.iter().map(|tag| html! { <span class="project-tag">{*tag}</span> }) }
                    if hidden > 0 {
                        <span class="project-tag more">{format!("+{}", hidden)}</span>
                    }
                </div>
                <button class="project-details-button">{"View Details"}</button>
            </div>
        </Reveal>
    }
}

#[derive(Properties, PartialEq)]
struct ProjectModalProps {
    project: Project,
    on_close: Callback<()>,
}

#[function_component(ProjectModal)]
fn project_modal(props: &ProjectModalProps) -> Html {
    let project = props.project;

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    // Clicks inside the dialog must not reach the backdrop.
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="project-modal-backdrop" onclick={close.clone()}>
            <div class="cyberpunk-card project-modal" onclick={keep_open}>
                <div class="project-modal-image">
                    <img src={project.image} alt={project.title} />
                    <button class="project-modal-close" onclick={close} aria-label="Close">{"✕"}</button>
                </div>
                <span class="project-category">{project.category}</span>
                <h3 class="gradient-text">{project.title}</h3>
                <p>{project.long_description}</p>
                <div class="project-tags">
                    { for project.technologies.iter().map(|tag| html! { <span class="project-tag">{*tag}</span> }) }
                </div>
                <div class="project-links">
                    <a href={project.github} target="_blank" rel="noopener noreferrer" class="cyberpunk-button outline">
                        {"GitHub"}
                    </a>
                    if let Some(live) = project.live {
                        <a href={live} target="_blank" rel="noopener noreferrer" class="cyberpunk-button">
                            {"Live Demo"}
                        </a>
                    }
                </div>
            </div>
        </div>
    }
}

#[function_component(Projects)]
pub fn projects() -> Html {
    let selected = use_state(|| None::<u32>);

    let on_select = {
        let selected = selected.clone();
        Callback::from(move |id: u32| selected.set(Some(id)))
    };
    let on_close = {
        let selected = selected.clone();
        Callback::from(move |_: ()| selected.set(None))
    };

    let selected_project = (*selected).and_then(|id| PROJECTS.iter().find(|p| p.id == id));

    html! {
        <section id="projects" class="page-section">
            <style>
                {r#"
                    .project-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
                        gap: 2rem;
                    }
                    .project-card {
                        cursor: pointer;
                        height: 100%;
                        display: flex;
                        flex-direction: column;
                        gap: 0.75rem;
                        transition: transform 0.3s ease;
                    }
                    .project-card:hover {
                        transform: translateY(-6px);
                    }
                    .project-image, .project-modal-image {
                        position: relative;
                        overflow: hidden;
                        border-radius: 0.5rem;
                    }
                    .project-image img, .project-modal-image img {
                        width: 100%;
                        height: 12rem;
                        object-fit: cover;
                    }
                    .project-category {
                        font-size: 0.75rem;
                        color: #c084fc;
                        text-transform: uppercase;
                        letter-spacing: 0.05em;
                    }
                    .project-image .project-category {
                        position: absolute;
                        left: 0.75rem;
                        bottom: 0.75rem;
                        background: rgba(0, 0, 0, 0.7);
                        padding: 0.25rem 0.5rem;
                        border-radius: 0.25rem;
                    }
                    .project-tags {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 0.5rem;
                    }
                    .project-tag {
                        font-size: 0.75rem;
                        padding: 0.25rem 0.625rem;
                        border-radius: 9999px;
                        background: rgba(88, 28, 135, 0.3);
                        color: #d8b4fe;
                    }
                    .project-details-button {
                        margin-top: auto;
                        background: none;
                        border: none;
                        color: #c084fc;
                        text-align: left;
                        cursor: pointer;
                    }
                    .project-modal-backdrop {
                        position: fixed;
                        inset: 0;
                        z-index: 100;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 1rem;
                        background: rgba(0, 0, 0, 0.8);
                        backdrop-filter: blur(4px);
                        animation: fade 0.2s ease-out;
                    }
                    @keyframes fade {
                        from { opacity: 0; }
                        to { opacity: 1; }
                    }
                    .project-modal {
                        max-width: 48rem;
                        width: 100%;
                        max-height: 90vh;
                        overflow-y: auto;
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                    }
                    .project-modal-image img {
                        height: 18rem;
                    }
                    .project-modal-close {
                        position: absolute;
                        top: 0.75rem;
                        right: 0.75rem;
                        width: 2rem;
                        height: 2rem;
                        border-radius: 50%;
                        border: none;
                        background: rgba(0, 0, 0, 0.6);
                        color: #fff;
                        cursor: pointer;
                    }
                    .project-links {
                        display: flex;
                        gap: 1rem;
                    }
                "#}
            </style>
            <div class="section-container">
                <Reveal>
                    <h2 class="section-title">{"Projects"}</h2>
                </Reveal>
                <div class="project-grid">
                    { for PROJECTS.iter().map(|project| html! {
                        <ProjectCard key={project.id} project={*project} on_select={on_select.clone()} />
                    }) }
                </div>
            </div>
            if let Some(project) = selected_project {
                <ProjectModal project={*project} on_close={on_close} />
            }
        </section>
    }
}
