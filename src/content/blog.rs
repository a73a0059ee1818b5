//! Blog posts. The section only renders when enabled in the config.

pub struct BlogPost {
    pub title: &'static str,
    pub excerpt: &'static str,
    pub date: &'static str,
    pub read_time: &'static str,
    pub tags: &'static [&'static str],
}

pub static BLOG_POSTS: &[BlogPost] = &[
    BlogPost {
        title: "Building Scalable Data Pipelines with GCP",
        excerpt: "A deep dive into designing and implementing event-driven \
            data pipelines using GCP Pub/Sub, Cloud Functions, and BigQuery \
            for real-time analytics.",
        date: "2025-01-15",
        read_time: "8 min read",
        tags: &["GCP", "Data Engineering", "Cloud"],
    },
    BlogPost {
        title: "From Angular 2 to Angular 12: Migration Lessons",
        excerpt: "Key insights and best practices learned from leading a \
            large-scale Angular migration project, including common pitfalls \
            and how to avoid them.",
        date: "2024-11-20",
        read_time: "6 min read",
        tags: &["Angular", "Frontend", "Migration"],
    },
    BlogPost {
        title: "Natural Language to SQL: An AI Approach",
        excerpt: "Exploring how modern LLMs can translate human queries into \
            structured SQL, making databases accessible to non-technical \
            users.",
        date: "2024-09-05",
        read_time: "10 min read",
        tags: &["AI/ML", "NLP", "SQL"],
    },
];
