//! Home Page
//!
//! The whole portfolio on one page: static sections around the three
//! data-driven grids.

use dioxus::prelude::*;
use folio_core::render::{certification_sections, current_work_cards, project_cards};

use crate::components::cards::{CertificationCardView, CurrentWorkCardView, ProjectCardView};
use crate::components::{ContactFormView, Reveal};
use crate::context::use_page;

struct SkillGroup {
    title: &'static str,
    skills: &'static [&'static str],
}

const SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        title: "Languages",
        skills: &["Rust", "TypeScript", "Python", "Java", "SQL"],
    },
    SkillGroup {
        title: "Frontend",
        skills: &["React", "Next.js", "HTML & CSS", "Tailwind"],
    },
    SkillGroup {
        title: "Backend & Data",
        skills: &["Node.js", "PostgreSQL", "MongoDB", "REST APIs"],
    },
    SkillGroup {
        title: "Tools",
        skills: &["Git", "Docker", "Linux", "AWS"],
    },
];

struct Milestone {
    period: &'static str,
    title: &'static str,
    place: &'static str,
    summary: &'static str,
}

const TIMELINE: &[Milestone] = &[
    Milestone {
        period: "2024 - Present",
        title: "Software Engineering Student",
        place: "University",
        summary: "Systems programming, distributed systems and web development coursework alongside personal projects.",
    },
    Milestone {
        period: "2023",
        title: "Freelance Web Developer",
        place: "Self-employed",
        summary: "Built and shipped sites for small businesses, from design through deployment.",
    },
    Milestone {
        period: "2022",
        title: "Started Programming",
        place: "Self-taught",
        summary: "First programs, first open-source contributions and a lasting habit of building things.",
    },
];

struct ContactMethod {
    label: &'static str,
    value: &'static str,
    href: &'static str,
}

const CONTACT_METHODS: &[ContactMethod] = &[
    ContactMethod {
        label: "Email",
        value: "hello@example.com",
        href: "mailto:hello@example.com",
    },
    ContactMethod {
        label: "GitHub",
        value: "github.com/example",
        href: "https://github.com/example",
    },
    ContactMethod {
        label: "LinkedIn",
        value: "linkedin.com/in/example",
        href: "https://linkedin.com/in/example",
    },
];

#[component]
pub fn Home() -> Element {
    rsx! {
        main { class: "page",
            Hero {}
            About {}
            Skills {}
            Experience {}
            Projects {}
            CurrentWork {}
            Certifications {}
            Contact {}
        }
        Footer {}
    }
}

#[component]
fn Hero() -> Element {
    let ctx = use_page();

    rsx! {
        section { id: "home", class: "section hero",
            div { class: "hero-content",
                p { class: "hero-greeting", "Hi, I'm" }
                h1 { class: "hero-title", "A Software Developer" }
                p { class: "hero-subtitle",
                    "I build fast, reliable software and the interfaces around it."
                }
                div { class: "hero-actions",
                    a {
                        class: "btn btn-primary",
                        href: "#projects",
                        onclick: move |evt| {
                            evt.prevent_default();
                            ctx.navigate("projects");
                        },
                        "View My Work"
                    }
                    a {
                        class: "btn btn-secondary",
                        href: "#contact",
                        onclick: move |evt| {
                            evt.prevent_default();
                            ctx.navigate("contact");
                        },
                        "Get in Touch"
                    }
                }
            }
        }
    }
}

#[component]
fn About() -> Element {
    rsx! {
        section { id: "about", class: "section about",
            h2 { class: "section-title", "About Me" }
            div { class: "about-content",
                p {
                    "I enjoy working across the stack, from low-level systems code to "
                    "polished user interfaces. Most of my time goes into side projects "
                    "that teach me something new."
                }
                p {
                    "When I'm not coding I'm usually reading about compilers, "
                    "networking or whatever rabbit hole I fell into this week."
                }
            }
        }
    }
}

#[component]
fn Skills() -> Element {
    // Tags reveal one after another across all groups
    let mut position = 0usize;
    let groups = SKILL_GROUPS
        .iter()
        .map(|group| {
            let start = position;
            position += group.skills.len();
            (group, start)
        })
        .collect::<Vec<_>>();

    rsx! {
        section { id: "skills", class: "section skills",
            h2 { class: "section-title", "Skills" }
            div { class: "skills-grid",
                for (group, start) in groups {
                    div { key: "{group.title}", class: "skill-group",
                        h3 { class: "skill-group-title", "{group.title}" }
                        div { class: "skill-tags",
                            for (offset, skill) in group.skills.iter().enumerate() {
                                Reveal {
                                    key: "{skill}",
                                    id: "skill-{start + offset}",
                                    class: "skill-tag",
                                    stagger: start + offset,
                                    "{skill}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn Experience() -> Element {
    rsx! {
        section { id: "experience", class: "section experience",
            h2 { class: "section-title", "Experience" }
            div { class: "timeline",
                for (i, item) in TIMELINE.iter().enumerate() {
                    Reveal { key: "{i}", id: "timeline-{i}", class: "timeline-item",
                        div { class: "timeline-period", "{item.period}" }
                        div { class: "timeline-body",
                            h3 { class: "timeline-title", "{item.title}" }
                            p { class: "timeline-place", "{item.place}" }
                            p { class: "timeline-summary", "{item.summary}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn Projects() -> Element {
    let ctx = use_page();
    let cards = project_cards(ctx.store.projects());

    rsx! {
        section { id: "projects", class: "section projects",
            h2 { class: "section-title", "Projects" }
            div { id: "projects-container", class: "projects-grid",
                for card in cards {
                    ProjectCardView { key: "{card.index}", card }
                }
            }
        }
    }
}

#[component]
fn CurrentWork() -> Element {
    let ctx = use_page();
    let cards = current_work_cards(ctx.store.current_work());

    rsx! {
        section { id: "current", class: "section current",
            h2 { class: "section-title", "Currently Building" }
            div { id: "current-container", class: "current-grid",
                for card in cards {
                    CurrentWorkCardView { key: "{card.index}", card }
                }
            }
        }
    }
}

#[component]
fn Certifications() -> Element {
    let ctx = use_page();
    let sections = certification_sections(ctx.store.certifications());
    let has_more = sections.has_more();
    let disclosure = *ctx.cert_more.read();

    rsx! {
        section { id: "certifications", class: "section certifications",
            h2 { class: "section-title", "Certifications" }

            div { id: "cert-featured", class: "cert-grid",
                for card in sections.featured {
                    CertificationCardView { key: "{card.index}", card }
                }
            }

            if has_more {
                div { id: "certMoreWrap", class: "cert-more-wrap",
                    button {
                        id: "certMoreBtn",
                        class: "cert-more-btn",
                        r#type: "button",
                        "aria-expanded": disclosure.aria_expanded(),
                        "aria-controls": "cert-more",
                        onclick: move |_| ctx.toggle_cert_more(),
                        span { id: "certMoreIcon", class: "cert-more-icon", "{disclosure.icon()}" }
                        " More certifications"
                    }
                }

                div {
                    id: "cert-more",
                    class: "cert-grid cert-more",
                    hidden: !disclosure.is_expanded(),
                    for card in sections.more {
                        CertificationCardView { key: "{card.index}", card }
                    }
                }
            }
        }
    }
}

#[component]
fn Contact() -> Element {
    rsx! {
        section { id: "contact", class: "section contact",
            h2 { class: "section-title", "Get in Touch" }
            div { class: "contact-layout",
                div { class: "contact-methods",
                    for (i, method) in CONTACT_METHODS.iter().enumerate() {
                        Reveal { key: "{i}", id: "contact-method-{i}", class: "contact-method",
                            span { class: "contact-label", "{method.label}" }
                            a {
                                class: "contact-value",
                                href: "{method.href}",
                                target: "_blank",
                                rel: "noopener noreferrer",
                                "{method.value}"
                            }
                        }
                    }
                }
                ContactFormView {}
            }
        }
    }
}

#[component]
fn Footer() -> Element {
    let ctx = use_page();

    rsx! {
        footer { class: "footer",
            p { "Built with Rust and Dioxus." }
            a {
                class: "footer-top",
                href: "#home",
                onclick: move |evt| {
                    evt.prevent_default();
                    ctx.back_to_top();
                },
                "Back to top"
            }
        }
    }
}
