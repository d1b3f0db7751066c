use web_sys::KeyboardEvent;
use yew::prelude::*;
use yew_hooks::use_event_with_window;

use crate::data::{find_project, Project, PROJECTS};
use crate::i18n::{use_language, Language};
use crate::scroll::registry::SectionId;

const CARD_TECHNOLOGIES: usize = 3;

#[derive(Properties, PartialEq)]
struct ProjectCardProps {
    project: &'static Project,
    lang: Language,
    on_open: Callback<u32>,
}

#[function_component(ProjectCard)]
fn project_card(props: &ProjectCardProps) -> Html {
    let ProjectCardProps { project, lang, on_open } = props;
    let language = use_language();
    let (shown, hidden) = project.technology_preview(CARD_TECHNOLOGIES);

    let onclick = {
        let on_open = on_open.clone();
        let id = project.id;
        Callback::from(move |_: MouseEvent| on_open.emit(id))
    };

    html! {
        <div class="project-card" {onclick}>
            <div class="project-image">
                <img src={project.image} alt={project.title.get(*lang)} loading="lazy" />
                <div class="project-overlay">
                    <span>{ language.t("projects.viewProject") }</span>
                </div>
                <span class="project-year">{ project.year }</span>
            </div>
            <div class="project-body">
                <h3>{ project.title.get(*lang) }</h3>
                <p class="project-description">{ project.description.get(*lang) }</p>
                <div class="project-tags">
                    { for shown.iter().map(|tech| html! { <span class="tech-tag">{ *tech }</span> }) }
                    {
                        if hidden > 0 {
                            html! { <span class="tech-more">{ format!("+{} {}", hidden, language.t("projects.more")) }</span> }
                        } else {
                            html! {}
                        }
                    }
                </div>
                <div class="project-category">{ project.category.get(*lang) }</div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ProjectModalProps {
    project: &'static Project,
    lang: Language,
    on_close: Callback<()>,
}

#[function_component(ProjectModal)]
fn project_modal(props: &ProjectModalProps) -> Html {
    let ProjectModalProps { project, lang, on_close } = props;
    let language = use_language();

    let close = {
        let on_close = on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    // clicks inside the dialog must not reach the backdrop
    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="modal-backdrop" onclick={close.clone()}>
            <div class="modal-dialog" role="dialog" aria-modal="true" onclick={stop}>
                <div class="modal-header">
                    <img src={project.image} alt={project.title.get(*lang)} />
                    <button class="modal-close" onclick={close} aria-label={language.t("projects.close")}>
                        {"✕"}
                    </button>
                    <div class="modal-heading">
                        <h3>{ project.title.get(*lang) }</h3>
                        <div class="modal-meta">
                            <span>{ format!("📅 {}", project.year) }</span>
                            <span>{ format!("🏷 {}", project.category.get(*lang)) }</span>
                        </div>
                    </div>
                </div>
                <div class="modal-body">
                    <p>{ project.description.get(*lang) }</p>
                    <h4>{ language.t("projects.technologies") }</h4>
                    <div class="project-tags">
                        { for project.technologies.iter().map(|tech| html! { <span class="tech-tag large">{ *tech }</span> }) }
                    </div>
                </div>
            </div>
        </div>
    }
}

#[function_component(Projects)]
pub fn projects() -> Html {
    let language = use_language();
    let selected = use_state(|| None::<u32>);

    let on_open = {
        let selected = selected.clone();
        Callback::from(move |id: u32| selected.set(Some(id)))
    };
    let on_close = {
        let selected = selected.clone();
        Callback::from(move |_: ()| selected.set(None))
    };

    {
        let selected = selected.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if e.key() == "Escape" && selected.is_some() {
                selected.set(None);
            }
        });
    }

    html! {
        <section id={SectionId::Projects.as_str()} class="page-section projects-section">
            <style>
                {r#"
                    .projects-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
                        gap: 2rem;
                    }
                    .project-card {
                        cursor: pointer;
                        border-radius: 1.5rem;
                        overflow: hidden;
                        background: rgba(255, 255, 255, 0.05);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        transition: transform 0.3s ease;
                    }
                    .project-card:hover {
                        transform: translateY(-10px);
                    }
                    .project-image {
                        position: relative;
                        height: 200px;
                        overflow: hidden;
                    }
                    .project-image img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        transition: transform 0.7s ease;
                    }
                    .project-card:hover .project-image img {
                        transform: scale(1.1);
                    }
                    .project-overlay {
                        position: absolute;
                        inset: 0;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: rgba(0, 0, 0, 0.5);
                        color: #fff;
                        opacity: 0;
                        transition: opacity 0.3s ease;
                    }
                    .project-card:hover .project-overlay {
                        opacity: 1;
                    }
                    .project-year {
                        position: absolute;
                        top: 1rem;
                        inset-inline-end: 1rem;
                        padding: 0.25rem 0.75rem;
                        border-radius: 9999px;
                        background: linear-gradient(to right, #06b6d4, #2563eb);
                        color: #fff;
                        font-size: 0.85rem;
                    }
                    .project-body {
                        padding: 1.5rem;
                    }
                    .project-body h3 {
                        color: #fff;
                        margin: 0 0 0.75rem;
                    }
                    .project-description {
                        color: #9ca3af;
                        display: -webkit-box;
                        -webkit-line-clamp: 3;
                        -webkit-box-orient: vertical;
                        overflow: hidden;
                    }
                    .project-tags {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 0.5rem;
                        margin: 1rem 0;
                    }
                    .tech-tag {
                        padding: 0.25rem 0.75rem;
                        border-radius: 9999px;
                        font-size: 0.75rem;
                        color: #22d3ee;
                        background: rgba(255, 255, 255, 0.1);
                        border: 1px solid rgba(6, 182, 212, 0.3);
                    }
                    .tech-tag.large {
                        font-size: 0.95rem;
                        padding: 0.5rem 1rem;
                    }
                    .tech-more, .project-category {
                        color: #6b7280;
                        font-size: 0.85rem;
                    }
                    .modal-backdrop {
                        position: fixed;
                        inset: 0;
                        z-index: 50;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 1rem;
                        background: rgba(0, 0, 0, 0.8);
                        backdrop-filter: blur(4px);
                    }
                    .modal-dialog {
                        max-width: 900px;
                        width: 100%;
                        max-height: 90vh;
                        overflow-y: auto;
                        border-radius: 1rem;
                        background: #111827;
                        border: 1px solid #1f2937;
                    }
                    .modal-header {
                        position: relative;
                    }
                    .modal-header img {
                        width: 100%;
                        height: 320px;
                        object-fit: cover;
                    }
                    .modal-close {
                        position: absolute;
                        top: 1rem;
                        inset-inline-end: 1rem;
                        width: 40px;
                        height: 40px;
                        border-radius: 50%;
                        border: none;
                        background: rgba(0, 0, 0, 0.6);
                        color: #fff;
                        cursor: pointer;
                    }
                    .modal-heading {
                        position: absolute;
                        bottom: 0;
                        padding: 1.5rem 2rem;
                        width: 100%;
                        box-sizing: border-box;
                        background: linear-gradient(to top, rgba(0, 0, 0, 0.9), transparent);
                    }
                    .modal-heading h3 {
                        color: #fff;
                        font-size: 1.9rem;
                        margin: 0 0 0.5rem;
                    }
                    .modal-meta {
                        display: flex;
                        gap: 1rem;
                        color: #22d3ee;
                    }
                    .modal-body {
                        padding: 2rem;
                        color: #d1d5db;
                        line-height: 1.7;
                    }
                    .modal-body h4 {
                        color: #fff;
                    }
                "#}
            </style>
            <div class="section-inner">
                <div class="section-header">
                    <h2>{ language.t("projects.title") }</h2>
                    <p>{ language.t("projects.subtitle") }</p>
                </div>
                <div class="projects-grid">
                    { for PROJECTS.iter().map(|project| html! {
                        <ProjectCard
                            key={project.id}
                            {project}
                            lang={language.lang}
                            on_open={on_open.clone()}
                        />
                    }) }
                </div>
            </div>
            {
                match (*selected).and_then(find_project) {
                    Some(project) => html! {
                        <ProjectModal {project} lang={language.lang} {on_close} />
                    },
                    None => html! {},
                }
            }
        </section>
    }
}
