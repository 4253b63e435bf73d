//! Repository layer: one zero-sized struct per table, with async methods
//! taking the pool (or an open transaction) as the first argument.

pub mod gantt_repo;
pub mod milestone_repo;
pub mod organization_repo;
pub mod progress_repo;
pub mod project_organization_repo;
pub mod project_repo;
pub mod statistics_repo;
pub mod task_repo;
pub mod user_repo;

pub use gantt_repo::GanttRepo;
pub use milestone_repo::MilestoneRepo;
pub use organization_repo::OrganizationRepo;
pub use progress_repo::ProgressRepo;
pub use project_organization_repo::ProjectOrganizationRepo;
pub use project_repo::ProjectRepo;
pub use statistics_repo::StatisticsRepo;
pub use task_repo::TaskRepo;
pub use user_repo::UserRepo;
