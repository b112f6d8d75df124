use serde::Serialize;
use ts_rs::TS;

use crate::models::PaginationInfo;
use crate::models::course_modules::entities::CourseModule;

/// 课程模块列表项
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course_module.ts")]
pub struct CourseModuleListItem {
    #[serde(flatten)]
    #[ts(flatten)]
    pub module: CourseModule,
    pub assignment_count: i64,
}

/// 课程模块列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course_module.ts")]
pub struct CourseModuleListResponse {
    pub items: Vec<CourseModuleListItem>,
    pub pagination: PaginationInfo,
}
