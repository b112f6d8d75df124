pub mod assignments;
pub mod course_modules;
pub mod gradebook;
pub mod review;
pub mod rubrics;
pub mod submissions;

pub use assignments::AssignmentService;
pub use course_modules::CourseModuleService;
pub use gradebook::GradebookService;
pub use review::ReviewService;
pub use rubrics::RubricService;
pub use submissions::SubmissionService;
