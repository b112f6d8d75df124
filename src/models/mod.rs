use serde::{Deserialize, Serialize};

pub mod assignments;
pub mod common;
pub mod course_modules;
pub mod gradebook;
pub mod questions;
pub mod review;
pub mod rubrics;
pub mod submissions;

pub use common::error_code::ErrorCode;
pub use common::pagination::{PaginationInfo, PaginationQuery};
pub use common::response::ApiResponse;
pub use common::role::Role;

/// 应用启动时间（用于运行时长统计）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
