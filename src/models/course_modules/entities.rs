use serde::Serialize;
use ts_rs::TS;

use crate::models::assignments::entities::TemporalState;

// 课程模块实体
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course_module.ts")]
pub struct CourseModule {
    pub id: i64,
    pub course_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub start_date: chrono::DateTime<chrono::Utc>,
    pub end_date: chrono::DateTime<chrono::Utc>,
    // 教师手动锁定，与日期窗口相互独立
    pub is_locked: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl CourseModule {
    /// 推导模块在 `as_of` 时刻的时间窗口状态
    ///
    /// 与作业不同，模块的结束日期是含端点的：`as_of > end_date` 才算 CLOSED。
    /// 锁定状态不改变时间窗口状态，只影响学生可见性。
    pub fn temporal_state(&self, as_of: chrono::DateTime<chrono::Utc>) -> TemporalState {
        if as_of < self.start_date {
            return TemporalState::NotStarted;
        }
        if as_of > self.end_date {
            return TemporalState::Closed;
        }
        TemporalState::Open
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn module_with_window(
        start: chrono::DateTime<Utc>,
        end: chrono::DateTime<Utc>,
    ) -> CourseModule {
        CourseModule {
            id: 1,
            course_id: 1,
            title: "Week 1".to_string(),
            description: None,
            start_date: start,
            end_date: end,
            is_locked: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_module_temporal_state() {
        let t = Utc::now();
        let m = module_with_window(t + Duration::days(1), t + Duration::days(7));

        assert_eq!(m.temporal_state(t), TemporalState::NotStarted);
        assert_eq!(m.temporal_state(t + Duration::days(3)), TemporalState::Open);
        assert_eq!(m.temporal_state(t + Duration::days(8)), TemporalState::Closed);
    }

    #[test]
    fn test_module_end_date_is_inclusive() {
        let t = Utc::now();
        let m = module_with_window(t - Duration::days(7), t);

        // 结束时刻当天仍然 OPEN
        assert_eq!(m.temporal_state(t), TemporalState::Open);
        assert_eq!(m.temporal_state(t + Duration::seconds(1)), TemporalState::Closed);
    }

    #[test]
    fn test_lock_does_not_change_temporal_state() {
        let t = Utc::now();
        let mut m = module_with_window(t - Duration::days(1), t + Duration::days(1));
        m.is_locked = true;

        assert_eq!(m.temporal_state(t), TemporalState::Open);
    }
}
