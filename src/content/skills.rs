//! Skill matrix.

use crate::theme::Accent;

pub struct SkillCategory {
    pub title: &'static str,
    pub accent: Accent,
    pub skills: &'static [&'static str],
}

pub static SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        title: "Languages",
        accent: Accent::Primary,
        skills: &[
            "TypeScript", "JavaScript", "Python", "Java", "Go", "Solidity",
            "SQL", "HTML/CSS",
        ],
    },
    SkillCategory {
        title: "Frontend",
        accent: Accent::Secondary,
        skills: &["React", "Next.js", "Angular", "Tailwind CSS", "Framer Motion"],
    },
    SkillCategory {
        title: "Backend",
        accent: Accent::Tertiary,
        skills: &["Node.js", "FastAPI", "Spring Boot", "REST APIs", "GraphQL"],
    },
    SkillCategory {
        title: "Cloud & DevOps",
        accent: Accent::Primary,
        skills: &["GCP", "AWS", "Docker", "Kubernetes", "Terraform", "CI/CD"],
    },
    SkillCategory {
        title: "Databases",
        accent: Accent::Secondary,
        skills: &["PostgreSQL", "MongoDB", "DynamoDB", "Redis", "ChromaDB"],
    },
    SkillCategory {
        title: "AI/ML & Data",
        accent: Accent::Tertiary,
        skills: &["TensorFlow", "PyTorch", "LangChain", "PySpark", "Pandas", "NLP"],
    },
];
