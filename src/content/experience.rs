//! Work history.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmploymentType {
    FullTime,
    Internship,
}

impl EmploymentType {
    pub fn label(self) -> &'static str {
        match self {
            EmploymentType::FullTime => "Full-time",
            EmploymentType::Internship => "Internship",
        }
    }
}

pub struct Experience {
    pub company: &'static str,
    pub role: &'static str,
    pub duration: &'static str,
    pub location: &'static str,
    pub kind: EmploymentType,
    pub highlights: &'static [&'static str],
    pub technologies: &'static [&'static str],
}

pub static EXPERIENCES: &[Experience] = &[
    Experience {
        company: "Ford Motor Company",
        role: "Software Engineer",
        duration: "Jul 2025 - Present",
        location: "Long Beach, CA",
        kind: EmploymentType::FullTime,
        highlights: &[
            "Engineered high-performance EV telemetry and cost visualization \
             tools, enabling engineers to explore large datasets and make \
             real-time, data-driven decisions",
            "Designed and owned scalable backend services using Python \
             (FastAPI), delivering secure RESTful APIs consumed by internal \
             dashboards and partner services",
            "Built and maintained ETL/data pipelines for BOM, telemetry, and \
             cost signals, validating part and variant mappings to power \
             downstream reporting and forecasting workflows",
            "Implemented event-driven ingestion on GCP Pub/Sub, decoupling \
             producers and consumers and improving reliability of backend \
             workflows",
            "Containerized backend services with Docker and deployed on GCP \
             Cloud Run, provisioning supporting infrastructure via Terraform",
            "Delivered an end-to-end internal EV charging platform that \
             processes charging-session telemetry and provides utilization, \
             performance, and cost monitoring across several EV programs",
        ],
        technologies: &[
            "Next.js", "Tailwind", "Python", "FastAPI", "GCP", "Docker",
            "Terraform", "Pub/Sub",
        ],
    },
    Experience {
        company: "Rocket Mortgage",
        role: "Software Engineer Intern",
        duration: "Jun 2025 - Jul 2025",
        location: "Detroit, MI",
        kind: EmploymentType::Internship,
        highlights: &[
            "Built an AI-powered incident analysis service leveraging MCP \
             servers and tools such as GitHub, PagerDuty, and Dynatrace to \
             correlate code changes, alerts, and telemetry",
            "Enabled faster root-cause prediction and improved after-hours \
             support response",
            "Built responsive web apps with Angular and scalable backend \
             APIs using Java Spring Boot",
        ],
        technologies: &[
            "Angular", "Java", "Spring Boot", "AI/ML", "PagerDuty", "Dynatrace",
        ],
    },
    Experience {
        company: "OpenText",
        role: "Software Engineer",
        duration: "Oct 2020 - Jul 2023",
        location: "Hyderabad, IN",
        kind: EmploymentType::FullTime,
        highlights: &[
            "Led front-end and API optimization efforts, reducing UI load \
             times by 30% through enhanced component design, lazy loading, \
             and efficient REST API integration",
            "Developed and maintained scalable RESTful services and Java \
             Spring Boot backends using JPA/Hibernate, enabling seamless \
             cross-database operations",
            "Successfully piloted an 8-week migration project from Angular 2 \
             to Angular 12",
            "Supervised and mentored interns in migrating test components \
             from Selenium to Cypress, boosting testing efficiency",
            "Led migration of core functionalities from on-premises to \
             cloud, applying Spring Cloud and containerized deployments, \
             achieving a 30% reduction in service downtime",
        ],
        technologies: &[
            "Angular", "Java", "Spring Boot", "JPA/Hibernate", "Spring Cloud",
            "Selenium", "Cypress",
        ],
    },
];
