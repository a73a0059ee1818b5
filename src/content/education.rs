//! Degree, coursework, and achievements.

pub struct Education {
    pub institution: &'static str,
    pub degree: &'static str,
    pub graduated: &'static str,
    pub location: &'static str,
    pub description: &'static str,
    pub gpa: f64,
}

pub static EDUCATION: Education = Education {
    institution: "Arizona State University",
    degree: "Master of Science in Computer Science",
    graduated: "May 2025",
    location: "Tempe, AZ",
    description: "Completed an intensive graduate program focusing on \
        software engineering, machine learning, and distributed systems. \
        Engaged in cutting-edge research and built practical projects \
        applying AI/ML to real-world problems.",
    gpa: 3.97,
};

pub static COURSEWORK: &[&str] = &[
    "Data Mining",
    "Machine Learning",
    "Cloud Computing",
    "Distributed Systems",
    "Natural Language Processing",
    "Blockchain & Applications",
];

pub static ACHIEVEMENTS: &[&str] = &["Top Performer", "Dean's List", "Research"];
