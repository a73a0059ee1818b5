//! Identity, hero roles, stat cards, and social links.

/// Basic identity shown in the hero and about sections.
pub struct Profile {
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub tagline: &'static str,
    pub availability: &'static str,
    pub bio: [&'static str; 2],
}

pub static PROFILE: Profile = Profile {
    first_name: "Omkar",
    last_name: "Thipparthi",
    tagline: "Building the future with code. Crafting scalable systems, \
              cloud-native solutions, and AI-powered experiences.",
    availability: "Available for opportunities",
    bio: [
        "I'm a Software Engineer with over 3 years of experience crafting \
         scalable applications and cloud-native solutions. Currently at \
         Ford Motor Company, I build high-performance EV telemetry tools \
         and data pipelines that power real-time decision making.",
        "I hold a Master's in Computer Science from Arizona State \
         University with a GPA of 3.97. My journey spans from front-end \
         optimization to designing event-driven architectures on GCP, and \
         I love exploring the intersection of AI/ML with practical \
         engineering problems.",
    ],
};

/// Roles cycled by the hero typewriter.
pub static ROLES: &[&str] = &[
    "Software Engineer",
    "Full Stack Developer",
    "Cloud Architect",
    "AI/ML Explorer",
];

/// One animated stat card.
pub struct Stat {
    pub label: &'static str,
    pub value: f64,
    pub suffix: &'static str,
}

pub static STATS: &[Stat] = &[
    Stat { label: "Years Experience", value: 3.0, suffix: "+" },
    Stat { label: "Projects Built", value: 6.0, suffix: "+" },
    Stat { label: "Companies", value: 3.0, suffix: "" },
    Stat { label: "GPA", value: 3.97, suffix: "" },
];

/// External link shown in the hero and contact sections.
pub struct Social {
    pub label: &'static str,
    pub url: &'static str,
}

pub static SOCIALS: &[Social] = &[
    Social { label: "GitHub", url: "https://github.com/Omkarthipparthi" },
    Social { label: "LinkedIn", url: "https://linkedin.com/in/omkarthipparthi" },
    Social { label: "Email", url: "mailto:omkarthipparthi@gmail.com" },
];
