//! Static portfolio content.
//!
//! Everything the sections display lives here as plain `&'static` data,
//! completely separate from animation state and rendering. Editing the
//! portfolio means editing these tables.

pub mod blog;
pub mod education;
pub mod experience;
pub mod profile;
pub mod projects;
pub mod skills;

pub use blog::{BLOG_POSTS, BlogPost};
pub use education::{ACHIEVEMENTS, COURSEWORK, EDUCATION, Education};
pub use experience::{EXPERIENCES, EmploymentType, Experience};
pub use profile::{PROFILE, ROLES, SOCIALS, STATS, Profile, Social, Stat};
pub use projects::{PROJECTS, Project, ProjectCategory};
pub use skills::{SKILL_CATEGORIES, SkillCategory};
