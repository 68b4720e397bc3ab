//! Static portfolio content.
//!
//! Ordered sequences of immutable value records consumed by the display
//! components unchanged. No validation or transformation happens here.

/// Hero banner strings.
pub const GREETING: &str = "Hello, I'm";
pub const FULL_NAME: &str = "Yashwanth Chunchula";
pub const TAGLINE: &str = "Computer Science Student specializing in Data Science, passionate about building innovative web solutions and solving complex problems.";

/// External profile links.
pub const GITHUB_URL: &str = "https://github.com/yashhh-max";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/yashwanth-chunchula02";
pub const EMAIL_ADDRESS: &str = "yashwanthchunchula123@gmail.com";
pub const RESUME_PATH: &str = "/resume.pdf";

/// One navigation target in the header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    /// Section element id, also the scroll target.
    pub id: &'static str,
    pub label: &'static str,
    pub glyph: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { id: "home", label: "Home", glyph: "\u{2302}" },
    NavItem { id: "about", label: "About", glyph: "\u{25CE}" },
    NavItem { id: "skills", label: "Skills", glyph: "\u{2699}" },
    NavItem { id: "projects", label: "Projects", glyph: "\u{25A3}" },
    NavItem { id: "experience", label: "Experience", glyph: "\u{25C8}" },
    NavItem { id: "education", label: "Education", glyph: "\u{270E}" },
    NavItem { id: "contact", label: "Contact", glyph: "\u{2709}" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    /// Proficiency percentage, 0-100.
    pub level: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillCategory {
    pub name: &'static str,
    pub glyph: &'static str,
    pub skills: &'static [Skill],
}

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        name: "Frontend",
        glyph: "\u{25EF}",
        skills: &[
            Skill { name: "HTML", level: 85 },
            Skill { name: "CSS", level: 80 },
            Skill { name: "JavaScript", level: 40 },
        ],
    },
    SkillCategory {
        name: "Programming",
        glyph: "\u{2328}",
        skills: &[
            Skill { name: "Python", level: 70 },
            Skill { name: "Data Structures", level: 75 },
            Skill { name: "Algorithms", level: 70 },
            Skill { name: "OOP", level: 65 },
        ],
    },
    SkillCategory {
        name: "Tools & Technologies",
        glyph: "\u{2692}",
        skills: &[
            Skill { name: "Git", level: 50 },
            Skill { name: "VS Code", level: 70 },
        ],
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub github: &'static str,
    pub live: &'static str,
    pub featured: bool,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Portfolio Website",
        description: "A responsive portfolio website featuring a dark/light theme toggle, smooth scroll-triggered animations, and a typewriter hero banner.",
        tech: &["Rust", "Dioxus", "CSS"],
        github: GITHUB_URL,
        live: "#",
        featured: true,
    },
    Project {
        title: "BEFIT: Fitness & Nutrition Tracking",
        description: "An AI-powered fitness and nutrition tracking app designed to help users achieve their health goals through personalized insights, smart tracking, and intuitive design.",
        tech: &["React", "Tailwind CSS", "HTML & CSS"],
        github: GITHUB_URL,
        live: "#",
        featured: true,
    },
    Project {
        title: "YouTube Clone",
        description: "A static frontend clone of YouTube replicating the layout, styling, and responsiveness of the original interface without any JavaScript or backend functionality.",
        tech: &["HTML", "CSS"],
        github: GITHUB_URL,
        live: "#",
        featured: false,
    },
    Project {
        title: "iPhone Calculator App",
        description: "A functional calculator application with a modern design, supporting basic arithmetic operations and keyboard input.",
        tech: &["HTML", "CSS", "JavaScript"],
        github: GITHUB_URL,
        live: "#",
        featured: false,
    },
];

/// Timeline status for an experience entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExperienceStatus {
    Current,
    Goal,
}

impl ExperienceStatus {
    /// CSS class for the timeline dot.
    pub fn dot_class(&self) -> &'static str {
        match self {
            ExperienceStatus::Current => "timeline-dot-current",
            ExperienceStatus::Goal => "timeline-dot-goal",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Experience {
    pub role: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    pub duration: &'static str,
    pub kind: &'static str,
    pub description: &'static str,
    pub skills: &'static [&'static str],
    pub status: ExperienceStatus,
}

pub const EXPERIENCES: &[Experience] = &[Experience {
    role: "Frontend Development Intern (Future Goal)",
    company: "Tech Startup",
    location: "Remote",
    duration: "Summer 2024",
    kind: "Internship",
    description: "Looking forward to gaining hands-on experience in frontend development, working with modern frameworks and contributing to real-world projects.",
    skills: &["HTML & CSS", "JavaScript"],
    status: ExperienceStatus::Goal,
}];

pub const EXPERIENCE_OUTLOOK: &str = "As a student actively learning and growing, I'm eager to take on new challenges, internships, and collaborative projects that will help me develop into a skilled software engineer. I'm particularly interested in frontend development, data science applications, and contributing to meaningful projects.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Education {
    pub degree: &'static str,
    pub institution: &'static str,
    pub location: &'static str,
    pub duration: &'static str,
    pub cgpa: &'static str,
    pub description: &'static str,
    pub subjects: &'static [&'static str],
    pub achievements: &'static [&'static str],
}

pub const EDUCATION: &[Education] = &[Education {
    degree: "Bachelor of Technology - Computer Science & Engineering (Data Science)",
    institution: "Kommuri Pratap Reddy Institute of Technology",
    location: "Hyderabad, India",
    duration: "2023 - 2027",
    cgpa: "7.5",
    description: "Currently pursuing a specialized degree in Computer Science with a focus on Data Science. The curriculum covers core computer science concepts along with advanced topics in machine learning, data analysis, and statistical modeling.",
    subjects: &[
        "Data Structures & Algorithms",
        "Object-Oriented Programming",
        "Database Management Systems",
        "Machine Learning Fundamentals",
        "Statistical Analysis",
        "Web Development",
        "Software Engineering",
        "Computer Networks",
    ],
    achievements: &[
        "Maintaining consistent academic performance",
        "Active participation in coding competitions",
        "Regular contribution to class projects",
        "Strong foundation in programming languages",
    ],
}];

/// Progress status for a certification or course.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CertStatus {
    Completed,
    InProgress,
    Planned,
}

impl CertStatus {
    pub fn badge_class(&self) -> &'static str {
        match self {
            CertStatus::Completed => "badge-completed",
            CertStatus::InProgress => "badge-in-progress",
            CertStatus::Planned => "badge-planned",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CertStatus::Completed => "Completed",
            CertStatus::InProgress => "In Progress",
            CertStatus::Planned => "Planned",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Certification {
    pub title: &'static str,
    pub platform: &'static str,
    pub date: &'static str,
    pub status: CertStatus,
}

pub const CERTIFICATIONS: &[Certification] = &[
    Certification {
        title: "Web Development Basics",
        platform: "Self-Study",
        date: "2025",
        status: CertStatus::Completed,
    },
    Certification {
        title: "Python Programming Fundamentals",
        platform: "Online Learning",
        date: "Ongoing",
        status: CertStatus::InProgress,
    },
    Certification {
        title: "Data Science Fundamentals",
        platform: "Academic Course",
        date: "Ongoing",
        status: CertStatus::InProgress,
    },
    Certification {
        title: "Advanced React Development",
        platform: "Personal Learning",
        date: "Planned 2025",
        status: CertStatus::Planned,
    },
];

pub const CONTINUOUS_LEARNING: &str = "I believe in lifelong learning and continuously updating my skills to stay current with the rapidly evolving tech landscape. My goal is to graduate with strong technical foundations and practical experience in software development and data science.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactChannel {
    pub label: &'static str,
    pub value: &'static str,
    pub glyph: &'static str,
    /// `None` for channels that are informational only.
    pub href: Option<&'static str>,
}

pub const CONTACT_CHANNELS: &[ContactChannel] = &[
    ContactChannel {
        label: "Email",
        value: EMAIL_ADDRESS,
        glyph: "\u{2709}",
        href: Some("mailto:yashwanthchunchula123@gmail.com"),
    },
    ContactChannel {
        label: "GitHub",
        value: "yashhh-max",
        glyph: "\u{25D9}",
        href: Some(GITHUB_URL),
    },
    ContactChannel {
        label: "LinkedIn",
        value: "yashwanth-chunchula02",
        glyph: "\u{25A4}",
        href: Some(LINKEDIN_URL),
    },
    ContactChannel {
        label: "Location",
        value: "Hyderabad, India",
        glyph: "\u{2316}",
        href: None,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_nav_ids_unique_and_nonempty() {
        let mut seen = HashSet::new();
        for item in NAV_ITEMS {
            assert!(!item.id.is_empty());
            assert!(!item.label.is_empty());
            assert!(seen.insert(item.id), "duplicate nav id: {}", item.id);
        }
    }

    #[test]
    fn test_skill_levels_in_range() {
        for category in SKILL_CATEGORIES {
            assert!(!category.skills.is_empty());
            for skill in category.skills {
                assert!(skill.level <= 100, "{} out of range", skill.name);
            }
        }
    }

    #[test]
    fn test_projects_split_between_tiers() {
        assert!(PROJECTS.iter().any(|p| p.featured));
        assert!(PROJECTS.iter().any(|p| !p.featured));
        for project in PROJECTS {
            assert!(!project.tech.is_empty(), "{} has no tech tags", project.title);
        }
    }

    #[test]
    fn test_cert_status_labels() {
        assert_eq!(CertStatus::Completed.label(), "Completed");
        assert_eq!(CertStatus::InProgress.badge_class(), "badge-in-progress");
    }

    #[test]
    fn test_contact_channels_have_values() {
        for channel in CONTACT_CHANNELS {
            assert!(!channel.value.is_empty());
        }
        // At least one channel is an actionable link.
        assert!(CONTACT_CHANNELS.iter().any(|c| c.href.is_some()));
    }
}
