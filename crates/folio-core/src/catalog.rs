// crates/folio-core/src/catalog.rs
// Static site content: projects, skills, contact links, nav sections

use folio_types::{
    ContactKind, ContactLink, NavSection, Project, ProjectCategory, ProjectStatus, SkillGroup,
};

use ProjectCategory::*;

struct ProjectSeed {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    tags: &'static [&'static str],
    image_url: Option<&'static str>,
    github_url: Option<&'static str>,
    status: ProjectStatus,
    categories: &'static [ProjectCategory],
}

const PROJECTS: &[ProjectSeed] = &[
    ProjectSeed {
        id: "1",
        title: "Lost and Found Management System",
        description: "Full-stack web application for lost and found item reporting with user authentication and admin approval workflows. Features normalized MySQL database with secure CRUD operations and responsive frontend interface.",
        tags: &["PHP", "MySQL", "JavaScript", "Session Auth"],
        image_url: None,
        github_url: Some("https://github.com/SupaOhm/Lost-and-Found-Management-System"),
        status: ProjectStatus::Completed,
        categories: &[Web, Backend, Database],
    },
    ProjectSeed {
        id: "2",
        title: "Full-stack MERN Expense Tracker",
        description: "Complete expense management application with RESTful API using Express and Mongoose. Features real-time expense calculation, CRUD operations, and React frontend with Axios integration for seamless data flow.",
        tags: &["MongoDB", "Express.js", "React", "Node.js"],
        image_url: None,
        github_url: Some("https://github.com/SupaOhm/Expense-Tracker"),
        status: ProjectStatus::Completed,
        categories: &[Web, Backend, Database],
    },
    ProjectSeed {
        id: "3",
        title: "Baka Platform UX/UI Overhaul",
        description: "Ongoing collaboration with BAKA Co., Ltd. to redesign Baka Index, a sugarcane satellite-image platform using Google Earth Engine. Conducting user research among farmers, usability testing, and prototyping in Figma.",
        tags: &["Figma", "UX/UI Research", "Google Earth Engine"],
        image_url: None,
        github_url: None,
        status: ProjectStatus::InProgress,
        categories: &[Design, Web],
    },
    ProjectSeed {
        id: "4",
        title: "Online Shop Database System",
        description: "Designed and implemented a normalized relational database for an e-commerce platform. Created EERD models, obtained relational schema, and optimized MySQL queries for efficient data retrieval.",
        tags: &["MySQL", "Database Design", "Normalization"],
        image_url: None,
        github_url: None,
        status: ProjectStatus::Completed,
        categories: &[Database],
    },
    ProjectSeed {
        id: "5",
        title: "Binary Matching Arduino Game",
        description: "Educational embedded systems game for practicing binary to decimal conversion. Built with Arduino Uno R3, featuring LED displays and challenging players to match binary numbers with interactive gameplay.",
        tags: &["C++", "Arduino", "Embedded Systems"],
        image_url: Some("/images/projects/arduino.jpg"),
        github_url: Some("https://github.com/SupaOhm/Binary-Matching-Arduino-Game"),
        status: ProjectStatus::Completed,
        categories: &[Embedded],
    },
    ProjectSeed {
        id: "6",
        title: "NoSleep CLI Tool",
        description: "Lightweight Windows command-line utility that prevents system sleep mode and display shutdown. Simple yet effective solution for maintaining system activity during long-running tasks.",
        tags: &["Python", "CLI", "Windows"],
        image_url: Some("/images/projects/nosleep.jpg"),
        github_url: Some("https://github.com/SupaOhm/NoSleep-CLI"),
        status: ProjectStatus::Completed,
        categories: &[Tools],
    },
];

/// Showcase projects in definition order
pub fn projects() -> Vec<Project> {
    PROJECTS
        .iter()
        .map(|seed| Project {
            id: seed.id.to_string(),
            title: seed.title.to_string(),
            description: seed.description.to_string(),
            tags: seed.tags.iter().map(|t| t.to_string()).collect(),
            image_url: seed.image_url.map(str::to_string),
            github_url: seed.github_url.map(str::to_string),
            demo_url: None,
            status: Some(seed.status),
            categories: seed.categories.to_vec(),
        })
        .collect()
}

pub const SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        title: "Languages",
        skills: &[
            "Python", "Java", "C", "C++", "C#", "JavaScript", "TypeScript", "SQL", "PHP", "HTML",
            "CSS",
        ],
    },
    SkillGroup {
        title: "Frameworks, Libraries, and Tools",
        skills: &[
            "React", "Node.js", "Express.js", ".NET", "Tailwind CSS", "Bootstrap", "Mongoose",
            "Axios", "Postman", "MySQL", "MongoDB", "Git", "Figma", "CLI",
        ],
    },
    SkillGroup {
        title: "Core Concepts",
        skills: &[
            "Data Structures and Algorithms",
            "Object-Oriented Programming",
            "Operating Systems",
            "Database Design",
            "API Fundamentals",
            "REST APIs",
            "Software Engineering",
            "UX/UI Design",
            "Microcontrollers",
            "Version Control",
            "Cloud Computing",
            "Cybersecurity Principles",
        ],
    },
    SkillGroup {
        title: "Soft Skills",
        skills: &[
            "Quick Learning",
            "Communication",
            "Problem-Solving",
            "Adaptability",
            "Time Management",
            "Work Ethic",
            "Collaboration",
            "Growth Mindset",
        ],
    },
];

pub const CONTACT_LINKS: &[ContactLink] = &[
    ContactLink { name: "Phone", href: "tel:+66895772122", kind: ContactKind::Phone },
    ContactLink { name: "Email", href: "mailto:ohm.supakornth@gmail.com", kind: ContactKind::Email },
    ContactLink { name: "GitHub", href: "https://github.com/SupaOhm", kind: ContactKind::GitHub },
    ContactLink {
        name: "LinkedIn",
        href: "https://linkedin.com/in/supakornpra",
        kind: ContactKind::LinkedIn,
    },
];

pub const NAV_SECTIONS: &[NavSection] = &[
    NavSection { id: "home", label: "Home" },
    NavSection { id: "about", label: "About" },
    NavSection { id: "skills", label: "Skills" },
    NavSection { id: "projects", label: "Projects" },
    NavSection { id: "connect", label: "Connect" },
];

/// Phrases cycled by the hero typewriter
pub const HERO_PHRASES: &[&str] = &[
    "Computer Engineering Student",
    "Software Dev",
    "Tech Enthusiast",
    "Quick Learner",
    "Problem Solver",
    "Full-stack Dev",
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_project_ids_unique() {
        let projects = projects();
        let ids: HashSet<_> = projects.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), projects.len());
    }

    #[test]
    fn test_every_project_has_a_real_category() {
        for project in projects() {
            assert!(!project.categories.is_empty(), "{} has no category", project.title);
            assert!(!project.categories.contains(&ProjectCategory::All));
        }
    }

    #[test]
    fn test_nav_sections_start_at_home() {
        assert_eq!(NAV_SECTIONS[0].id, "home");
        assert!(NAV_SECTIONS.iter().any(|s| s.id == "projects"));
    }

    #[test]
    fn test_hero_phrases_non_empty() {
        assert!(!HERO_PHRASES.is_empty());
        assert!(HERO_PHRASES.iter().all(|p| !p.is_empty()));
    }
}
