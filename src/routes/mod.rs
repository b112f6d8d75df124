pub mod assignments;

pub mod course_modules;

pub mod gradebook;

pub mod review;

pub mod rubrics;

pub mod submissions;

pub use assignments::configure_assignments_routes;
pub use course_modules::configure_course_modules_routes;
pub use gradebook::configure_gradebook_routes;
pub use review::configure_review_routes;
pub use rubrics::configure_rubrics_routes;
pub use submissions::configure_submissions_routes;
