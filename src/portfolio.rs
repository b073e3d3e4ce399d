//! Static portfolio content. Everything here is declared once and read-only for
//! the lifetime of the page.

pub const OWNER_NAME: &str = "Jatin Chhabra";
pub const RESUME_PATH: &str = "/myresume.pdf";
pub const GITHUB_URL: &str = "https://github.com/Chhabra-Jatin";
pub const LINKEDIN_URL: &str = "https://linkedin.com/in/jatinchhabra1997";
pub const MAILTO_URL: &str = "mailto:jatin.chhabra772@gmail.com";

pub const HERO_PHRASES: &[&str] = &["Software Developer", "Problem Solver"];

const DEVICON_BASE: &str = "https://cdn.jsdelivr.net/gh/devicons/devicon/icons";

/// Builds the CDN url for a devicon by name. There is no fallback if the
/// icon doesn't exist upstream.
pub fn devicon_url(name: &str) -> String {
    format!("{DEVICON_BASE}/{name}/{name}-original.svg")
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TechIcon {
    pub name: &'static str,
    pub x: u8,
    pub y: u8,
    pub delay: f32,
}

/// Float animation parameters for a background icon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Drift {
    pub dx: i32,
    pub dy: i32,
    pub duration: f32,
}

impl TechIcon {
    /// Drift offsets land in -10..20px and durations in 4..6s. Derived from the
    /// icon's slot so server and client render the same style.
    pub fn drift(&self, index: usize) -> Drift {
        let seed = self
            .name
            .bytes()
            .fold(index as u32 + 17, |acc, b| acc.wrapping_mul(31).wrapping_add(b as u32));
        Drift {
            dx: (seed % 30) as i32 - 10,
            dy: ((seed / 30) % 30) as i32 - 10,
            duration: 4.0 + ((seed / 900) % 200) as f32 / 100.0,
        }
    }
}

pub const TECH_ICONS: &[TechIcon] = &[
    TechIcon { name: "react", x: 20, y: 15, delay: 0.7 },
    TechIcon { name: "java", x: 75, y: 13, delay: 0.7 },
    TechIcon { name: "javascript", x: 25, y: 70, delay: 0.7 },
    TechIcon { name: "spring", x: 70, y: 75, delay: 0.7 },
    TechIcon { name: "html5", x: 10, y: 40, delay: 0.7 },
    TechIcon { name: "css3", x: 80, y: 50, delay: 0.7 },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExperienceEntry {
    pub title: &'static str,
    pub role: &'static str,
    pub details: &'static [&'static str],
}

pub const EXPERIENCE: &[ExperienceEntry] = &[
    ExperienceEntry {
        title: "Cognizant (Dec. 2020 – Aug. 2023)",
        role: "Software Developer",
        details: &[
            "Built and maintained RESTful API endpoints to support various functionalities and improve integration capabilities.",
            "Designed a role-based access control to enforce security policies across microservices, enhancing security and access control by 50%.",
            "Wrote unit tests and automated regression tests to ensure high-quality code, using JUnit and Mockito.",
            "Streamlined deployment processes by implementing DevOps automation and CI/CD pipelines using Jenkins, Git, and Nexus to automate builds and deployments, reducing deployment time from hours to minutes, for release reliability.",
            "Partnered with the product management team to gather requirements and actively participated in calls to address technical issues.",
            "Analyzed and modified existing batch scripts to accommodate business rule changes.",
        ],
    },
    ExperienceEntry {
        title: "Nugen IT Services (Jan. 2020 – Nov. 2020)",
        role: "Frontend Developer",
        details: &[
            "Built reusable React components and optimized frontend performance using React hooks and Redux for state management, improving application performance and reducing load times by 20%.",
            "Developed responsive and intuitive user interfaces using React, Redux, and modern JavaScript frameworks, adhering to design thinking principles.",
            "Implemented lazy loading and code splitting for improved page load speed.",
        ],
    },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectEntry {
    pub title: &'static str,
    pub tech: &'static [&'static str],
    pub link: &'static str,
    pub details: &'static [&'static str],
}

impl ProjectEntry {
    pub fn tech_icons(&self) -> impl Iterator<Item = (&'static str, String)> {
        self.tech.iter().map(|t| (*t, devicon_url(t)))
    }
}

pub const PROJECTS: &[ProjectEntry] = &[
    ProjectEntry {
        title: "Blog Application",
        tech: &["spring", "java", "mysql"],
        link: "https://github.com/Chhabra-Jatin/blog-application",
        details: &[
            "Built a robust RESTful API for blog application featuring POSTs, COMMENTS and CATEGORY management.",
            "Optimized REST APIs by introducing pagination and caching, reducing API response times by 60%.",
            "Integrated authentication and authorization mechanisms to ensure secure access to the API endpoints.",
            "Utilized Spring Security for role-based access control, enforcing permissions for different user roles.",
        ],
    },
    ProjectEntry {
        title: "Food Order Application",
        tech: &["react", "firebase"],
        link: "https://github.com/Chhabra-Jatin/food-order-application",
        details: &[
            "Developed a user-friendly web application for online food ordering.",
            "Implemented cart system, menu viewing, and order placement.",
            "Used Firebase Realtime Database for seamless data management.",
        ],
    },
    ProjectEntry {
        title: "Employee Data Management System",
        tech: &["react", "spring", "mysql"],
        link: "https://github.com/Chhabra-Jatin/employee-data-management/tree/master",
        details: &[
            "A full-stack web application that allows users to manage employee records with ease.",
            "Configured CORS to enable secure cross-origin communication between frontend and backend",
            "Integrated with MySQL using Spring Data JPA for persistent employee data.",
            "Communicates via RESTful APIs using Axios for HTTP requests from React to Spring Boot.",
        ],
    },
    ProjectEntry {
        title: "Warzone Game Development",
        tech: &["java"],
        link: "https://github.com/RancyKaur/WarzoneSOEN6441",
        details: &[
            "Created multiplayer strategy game using OOP design patterns.",
            "Developed CLI interface with real-time game validation.",
            "Implemented save/load game state features with unit testing.",
        ],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillEntry {
    pub label: &'static str,
    pub percent: u8,
}

impl SkillEntry {
    /// CSS width for the bar fill. Stays at zero until the section has been seen.
    pub fn fill_width(&self, seen: bool) -> String {
        if seen {
            format!("{}%", self.percent.min(100))
        } else {
            "0%".to_string()
        }
    }
}

pub const SKILLS: &[SkillEntry] = &[
    SkillEntry { label: "Java", percent: 90 },
    SkillEntry { label: "SpringBoot", percent: 85 },
    SkillEntry { label: "SQL", percent: 90 },
    SkillEntry { label: "JavaScript", percent: 90 },
    SkillEntry { label: "ReactJS", percent: 85 },
    SkillEntry { label: "AWS", percent: 60 },
    SkillEntry { label: "Microservices", percent: 60 },
    SkillEntry { label: "Python", percent: 70 },
    SkillEntry { label: "JUnit", percent: 75 },
    SkillEntry { label: "Git", percent: 70 },
    SkillEntry { label: "Docker & Kubernetes", percent: 50 },
];

/// Staggered delay for the i-th item of a list, in seconds.
pub fn stagger(index: usize) -> f32 {
    index as f32 * 0.1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_devicon_url() {
        assert_eq!(
            devicon_url("react"),
            "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/react/react-original.svg"
        );
        let icons = PROJECTS[0].tech_icons().collect::<Vec<_>>();
        assert_eq!(icons.len(), 3);
        assert_eq!(icons[0].0, "spring");
        assert!(icons[0].1.ends_with("/spring/spring-original.svg"));
    }

    #[test]
    fn test_skill_percents_in_range() {
        assert_eq!(SKILLS.len(), 11);
        for skill in SKILLS {
            assert!(skill.percent <= 100, "{} out of range", skill.label);
        }
    }

    #[test]
    fn test_skill_fill_waits_for_view() {
        let skill = SkillEntry { label: "Rust", percent: 80 };
        assert_eq!(skill.fill_width(false), "0%");
        assert_eq!(skill.fill_width(true), "80%");

        let over = SkillEntry { label: "Bad", percent: 150 };
        assert_eq!(over.fill_width(true), "100%");
    }

    #[test]
    fn test_entries_have_content() {
        assert_eq!(EXPERIENCE.len(), 2);
        assert_eq!(EXPERIENCE[0].role, "Software Developer");
        assert_eq!(EXPERIENCE[1].details.len(), 3);
        assert_eq!(PROJECTS.len(), 4);
        for project in PROJECTS {
            assert!(!project.details.is_empty());
            assert!(!project.tech.is_empty());
            assert!(project.link.starts_with("https://github.com/"));
        }
    }

    #[test]
    fn test_icon_drift_is_stable_and_bounded() {
        for (i, icon) in TECH_ICONS.iter().enumerate() {
            let drift = icon.drift(i);
            assert_eq!(drift, icon.drift(i));
            assert!((-10..20).contains(&drift.dx));
            assert!((-10..20).contains(&drift.dy));
            assert!(drift.duration >= 4.0 && drift.duration < 6.0);
        }
    }

    #[test]
    fn test_stagger() {
        assert_eq!(stagger(0), 0.0);
        assert!((stagger(3) - 0.3).abs() < f32::EPSILON);
    }
}
