//! Static page content — identity, skills, experience, projects, contact.
//!
//! Everything here is process-wide constant data with no lifecycle. The
//! renderers consume these tables verbatim; layout and styling decisions
//! live in `ui`.

use crate::core::section::Section;

/// Accent colour role, resolved to a concrete colour by the palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Purple,
    Pink,
    Cyan,
}

// ───────────────────────────────────────── identity ──────────

pub struct Identity {
    pub name: &'static str,
    /// Single letter shown in the navbar monogram.
    pub monogram: &'static str,
    pub kicker: &'static str,
    pub headline: &'static str,
    pub intro: &'static str,
}

pub static IDENTITY: Identity = Identity {
    name: "Riddhi Joshi",
    monogram: "R",
    kicker: "Hi, my name is",
    headline: "I build intelligent AI solutions.",
    intro: "I'm an AI & Data Science student specializing in building \
            exceptional machine learning models, NLP systems, and scalable \
            cloud applications. Currently focused on crafting intelligent \
            solutions that make a real-world impact.",
};

/// Navbar links, left to right. The contact entry doubles as the
/// call-to-action button at the end of the bar.
pub static NAV_LINKS: &[Section] = Section::ALL;

// ───────────────────────────────────────── about ─────────────

pub static SUMMARY: &[&str] = &[
    "Results-driven AI & Data Science undergraduate with proven expertise \
     in developing scalable machine learning solutions and cloud-based \
     intelligent systems. Demonstrated track record of improving system \
     accuracy by 30% and reliability by 95% through innovative NLP and \
     Computer Vision implementations.",
    "Passionate about leveraging cutting-edge AI/ML technologies to solve \
     complex real-world challenges. Experience spans end-to-end ML pipeline \
     development, from data preprocessing and feature engineering to model \
     deployment and optimization. Strong collaborator with proven leadership \
     experience directing cross-functional teams and delivering technical \
     workshops to 200+ participants.",
];

pub struct Education {
    pub school: &'static str,
    pub degree: &'static str,
    pub gpa: &'static str,
    pub dates: &'static str,
}

pub static EDUCATION: Education = Education {
    school: "Mumbai University",
    degree: "B.Tech in AI & Data Science",
    gpa: "GPA: 9.5/10",
    dates: "June 2022 - May 2026",
};

pub static COMPETENCIES: &[&str] = &[
    "Machine Learning",
    "Natural Language Processing",
    "Computer Vision",
    "Cloud Architecture",
    "API Development",
    "Data Analytics",
];

// ───────────────────────────────────────── skills ────────────

pub struct Skill {
    pub name: &'static str,
    pub proficiency: u8,
    pub blurb: &'static str,
}

pub struct SkillCategory {
    pub name: &'static str,
    pub icon: &'static str,
    pub accent: Accent,
    pub skills: &'static [Skill],
}

pub static SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        name: "AI & Machine Learning",
        icon: "◆",
        accent: Accent::Purple,
        skills: &[
            Skill { name: "Python", proficiency: 95, blurb: "Primary language for AI/ML development" },
            Skill { name: "TensorFlow", proficiency: 88, blurb: "Deep learning framework" },
            Skill { name: "PyTorch", proficiency: 85, blurb: "Research-focused ML framework" },
            Skill { name: "OpenCV", proficiency: 90, blurb: "Computer vision library" },
            Skill { name: "Scikit-learn", proficiency: 90, blurb: "Machine learning library" },
        ],
    },
    SkillCategory {
        name: "Backend & APIs",
        icon: "λ",
        accent: Accent::Cyan,
        skills: &[
            Skill { name: "FastAPI", proficiency: 92, blurb: "Modern API framework" },
            Skill { name: "Flask", proficiency: 88, blurb: "Python web framework" },
            Skill { name: "SQL", proficiency: 85, blurb: "Database querying" },
            Skill { name: "REST APIs", proficiency: 90, blurb: "API design and development" },
        ],
    },
    SkillCategory {
        name: "Cloud & DevOps",
        icon: "☁",
        accent: Accent::Pink,
        skills: &[
            Skill { name: "Docker", proficiency: 85, blurb: "Containerization platform" },
            Skill { name: "Google Cloud", proficiency: 82, blurb: "Cloud Run, Cloud Build" },
            Skill { name: "Git", proficiency: 90, blurb: "Version control system" },
            Skill { name: "Linux", proficiency: 88, blurb: "Operating system & scripting" },
        ],
    },
    SkillCategory {
        name: "Data Science",
        icon: "σ",
        accent: Accent::Cyan,
        skills: &[
            Skill { name: "Pandas", proficiency: 93, blurb: "Data manipulation library" },
            Skill { name: "NumPy", proficiency: 91, blurb: "Numerical computing" },
            Skill { name: "Matplotlib", proficiency: 87, blurb: "Data visualization" },
            Skill { name: "Plotly", proficiency: 89, blurb: "Interactive visualizations" },
        ],
    },
];

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
    pub accent: Accent,
}

pub static STATS: &[Stat] = &[
    Stat { value: "15+", label: "Technologies", accent: Accent::Cyan },
    Stat { value: "2", label: "Internships", accent: Accent::Purple },
    Stat { value: "9.5", label: "GPA", accent: Accent::Pink },
];

// ───────────────────────────────────────── experience ────────

pub struct Experience {
    pub role: &'static str,
    pub org: &'static str,
    pub dates: &'static str,
    /// Optional pill shown above the card (e.g. "Present").
    pub badge: Option<&'static str>,
    pub summary: &'static str,
    pub achievements: &'static [&'static str],
    pub accent: Accent,
}

pub static EXPERIENCE: &[Experience] = &[
    Experience {
        role: "AI Intern",
        org: "TCET Open Source",
        dates: "June 2024 - August 2024",
        badge: Some("Present"),
        summary: "Leading AI-driven product development and cloud \
                  architecture for next-generation solutions.",
        achievements: &[
            "Built an AI-powered Resume Screening System using NLP and Computer Vision",
            "Improved screening accuracy by 30% through classification models",
            "Increased parsing reliability to 95% with OpenCV and Tesseract",
        ],
        accent: Accent::Purple,
    },
    Experience {
        role: "Applied Data Science Intern",
        org: "Utkarshini Edutech",
        dates: "Feb 2023 - June 2023",
        badge: None,
        summary: "Led AI pipeline integrations and developed predictive \
                  analytics systems.",
        achievements: &[
            "Built Educational Performance Prediction System for at-risk learners",
            "Achieved 85% accuracy with Random Forest and XGBoost models",
            "Created interactive dashboards for performance insights",
        ],
        accent: Accent::Pink,
    },
];

// ───────────────────────────────────────── projects ──────────

pub struct Project {
    pub name: &'static str,
    pub subtitle: &'static str,
    pub badge: &'static str,
    pub emblem: &'static str,
    pub blurb: &'static str,
    pub tech: &'static [&'static str],
    pub accent: Accent,
}

pub static PROJECTS: &[Project] = &[
    Project {
        name: "EchoVerse",
        subtitle: "Real-Time Speech Intelligence System",
        badge: "Smart AI",
        emblem: "♪",
        blurb: "An advanced speech-to-text system with sub-400 ms latency, \
                deployed via Docker and Cloud Run with autoscaling.",
        tech: &["FastAPI", "Faster-Whisper", "Cloud Run", "Docker"],
        accent: Accent::Purple,
    },
    Project {
        name: "Stock Market Analysis",
        subtitle: "Predictive Financial Analytics Tool",
        badge: "ML Prediction",
        emblem: "↗",
        blurb: "Built a Python-based tool to forecast stock trends using \
                Prophet and ML-based volatility prediction with interactive \
                visualizations.",
        tech: &["Python", "Scikit-learn", "Plotly", "Prophet"],
        accent: Accent::Pink,
    },
];

// ───────────────────────────────────────── contact ───────────

pub struct ContactLink {
    pub label: &'static str,
    pub value: &'static str,
    pub url: &'static str,
    pub accent: Accent,
}

pub static CONTACT_PITCH: &str = "I'm actively seeking ML/AI engineering \
    opportunities. Let's build something amazing together!";

pub static CONTACT_LINKS: &[ContactLink] = &[
    ContactLink {
        label: "Email",
        value: "riddhijoshi5900@gmail.com",
        url: "mailto:riddhijoshi5900@gmail.com",
        accent: Accent::Purple,
    },
    ContactLink {
        label: "LinkedIn",
        value: "riddhijoshi19",
        url: "https://linkedin.com/in/riddhijoshi19",
        accent: Accent::Cyan,
    },
    ContactLink {
        label: "GitHub",
        value: "riddhijoshi19",
        url: "https://github.com/riddhijoshi19",
        accent: Accent::Pink,
    },
    ContactLink {
        label: "Resume",
        value: "Riddhi_resume.pdf",
        url: "https://riddhijoshi.dev/Riddhi_resume.pdf",
        accent: Accent::Purple,
    },
];

pub static FOOTER_CREDIT: &str = "Designed & Built by Riddhi Joshi";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_are_populated() {
        assert!(!SKILL_CATEGORIES.is_empty());
        assert!(SKILL_CATEGORIES.iter().all(|c| !c.skills.is_empty()));
        assert!(!EXPERIENCE.is_empty());
        assert!(!PROJECTS.is_empty());
        assert!(!CONTACT_LINKS.is_empty());
        assert!(!STATS.is_empty());
    }

    #[test]
    fn nav_links_cover_every_section() {
        for &section in Section::ALL {
            assert!(NAV_LINKS.contains(&section));
        }
    }

    #[test]
    fn proficiency_is_a_percentage() {
        for category in SKILL_CATEGORIES {
            for skill in category.skills {
                assert!(skill.proficiency <= 100, "{}", skill.name);
            }
        }
    }
}
