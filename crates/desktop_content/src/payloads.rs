//! Opaque renderable payloads for the registry items.
//!
//! Everything in this module is static display content. The window manager
//! mounts [`render_content`] inside a window body and treats the result as an
//! opaque view; nothing here reaches back into session state.

use leptos::*;

use crate::ContentId;

struct ProjectEntry {
    title: &'static str,
    summary: &'static str,
    tech: &'static [&'static str],
}

const PROJECTS: [ProjectEntry; 4] = [
    ProjectEntry {
        title: "Rubber Duckey V5",
        summary: "16 ready-to-use HID scripts built with Arduino",
        tech: &["Arduino", "C++", "Python", "Bash"],
    },
    ProjectEntry {
        title: "NTU Exam System",
        summary: "Exam and homework management for NTU students",
        tech: &["PHP", "MySQL", "JavaScript"],
    },
    ProjectEntry {
        title: "BreachTracker",
        summary: "Detect breaches, secure credentials, take control",
        tech: &["PHP", "MySQL", "JavaScript"],
    },
    ProjectEntry {
        title: "SunWay KinderGarten",
        summary: "Smart childcare, attendance, and financial management",
        tech: &["React", "NextJS", "MySQL"],
    },
];

struct SkillGroup {
    category: &'static str,
    skills: &'static [&'static str],
}

const SKILL_GROUPS: [SkillGroup; 3] = [
    SkillGroup {
        category: "CyberSecurity",
        skills: &["CTF", "SOC Analysis", "PenTester", "Digital Forensics"],
    },
    SkillGroup {
        category: "Web",
        skills: &["React", "Next.js", "PHP", "MySQL", "MongoDB"],
    },
    SkillGroup {
        category: "Programming Languages",
        skills: &["C++", "Python", "Bash"],
    },
];

/// Renders the payload view for `id`.
pub fn render_content(id: ContentId) -> View {
    match id {
        ContentId::AboutMe => view! { <AboutMeContent /> }.into_view(),
        ContentId::MyProjects => view! { <ProjectsContent /> }.into_view(),
        ContentId::MySkills => view! { <SkillsContent /> }.into_view(),
        ContentId::Contact => view! { <ContactContent /> }.into_view(),
    }
}

#[component]
fn AboutMeContent() -> impl IntoView {
    view! {
        <div class="content-page content-about">
            <h2>"Ali Saad"</h2>
            <h3>"Web Developer & Cybersecurity Enthusiast"</h3>
            <p>
                "Hi, I\u{2019}m Ali Saad, a cybersecurity student from Duhok, Iraq, currently \
                 studying at Northern Technical University (NTU). I am passionate about \
                 cybersecurity, web development, and creative arts."
            </p>
            <p>
                "In cybersecurity, I am an active CTF player on TryHackMe, ranking among the \
                 Top 5 in Iraq and the Top 1% globally, and a finalist of the Iraqi Minister \
                 of Cybersecurity Exam."
            </p>
            <p>
                "On the web side I build with Next.js, React, and PHP, blending technical \
                 skills with video editing and graphic design experience from Adobe Premiere, \
                 Photoshop, and After Effects."
            </p>
            <ul class="content-fact-list">
                <li>"ali2005saad12@gmail.com"</li>
                <li>"It takes 20 years to build a reputation and five minutes to ruin it."</li>
            </ul>
        </div>
    }
}

#[component]
fn ProjectsContent() -> impl IntoView {
    view! {
        <div class="content-page content-projects">
            {PROJECTS
                .iter()
                .map(|project| {
                    view! {
                        <article class="content-project-card">
                            <h3>{project.title}</h3>
                            <p>{project.summary}</p>
                            <div class="content-tech-tags">
                                {project
                                    .tech
                                    .iter()
                                    .map(|tech| view! { <span class="content-tech-tag">{*tech}</span> })
                                    .collect_view()}
                            </div>
                        </article>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn SkillsContent() -> impl IntoView {
    view! {
        <div class="content-page content-skills">
            {SKILL_GROUPS
                .iter()
                .map(|group| {
                    view! {
                        <section class="content-skill-group">
                            <h3>{group.category}</h3>
                            <ul>
                                {group
                                    .skills
                                    .iter()
                                    .map(|skill| view! { <li>{*skill}</li> })
                                    .collect_view()}
                            </ul>
                        </section>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn ContactContent() -> impl IntoView {
    view! {
        <div class="content-page content-contact">
            <div class="content-contact-cards">
                <a
                    href="https://github.com/SPeeDoA1"
                    target="_blank"
                    rel="noopener noreferrer"
                    class="content-contact-card"
                >
                    <img src="/icons/github.png" alt="GitHub" draggable="false" />
                    <span>"GitHub Profile"</span>
                </a>
                <a
                    href="https://www.linkedin.com/in/speedoa1/"
                    target="_blank"
                    rel="noopener noreferrer"
                    class="content-contact-card"
                >
                    <img src="/icons/linkedin.png" alt="LinkedIn" draggable="false" />
                    <span>"LinkedIn Profile"</span>
                </a>
            </div>
            <section class="content-contact-info">
                <h3>"Contact Information"</h3>
                <ul>
                    <li>"ali2005saad12@gmail.com"</li>
                    <li>"Duhok, Iraq"</li>
                </ul>
            </section>
        </div>
    }
}
