//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` (or a connection inside a caller's transaction)
//! as the first argument.

pub mod badge_repo;
pub mod comment_repo;
pub mod enrollment_repo;
pub mod progress_repo;
pub mod roadmap_repo;
pub mod role_repo;
pub mod session_repo;
pub mod thread_repo;
pub mod user_repo;
pub mod xp_repo;

pub use badge_repo::BadgeRepo;
pub use comment_repo::CommentRepo;
pub use enrollment_repo::EnrollmentRepo;
pub use progress_repo::ProgressRepo;
pub use roadmap_repo::RoadmapRepo;
pub use role_repo::RoleRepo;
pub use session_repo::SessionRepo;
pub use thread_repo::ThreadRepo;
pub use user_repo::UserRepo;
pub use xp_repo::XpRepo;
