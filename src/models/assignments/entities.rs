use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 作业类型
#[derive(Debug, Clone, Copy, Serialize, PartialEq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub enum AssignmentType {
    Homework, // 作业
    Quiz,     // 测验
    Test,     // 考试
}

impl AssignmentType {
    pub const HOMEWORK: &'static str = "homework";
    pub const QUIZ: &'static str = "quiz";
    pub const TEST: &'static str = "test";
}

impl<'de> Deserialize<'de> for AssignmentType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            AssignmentType::HOMEWORK => Ok(AssignmentType::Homework),
            AssignmentType::QUIZ => Ok(AssignmentType::Quiz),
            AssignmentType::TEST => Ok(AssignmentType::Test),
            _ => Err(serde::de::Error::custom(format!(
                "无效的作业类型: '{s}'. 支持的类型: homework, quiz, test"
            ))),
        }
    }
}

impl std::fmt::Display for AssignmentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssignmentType::Homework => write!(f, "{}", AssignmentType::HOMEWORK),
            AssignmentType::Quiz => write!(f, "{}", AssignmentType::QUIZ),
            AssignmentType::Test => write!(f, "{}", AssignmentType::TEST),
        }
    }
}

impl std::str::FromStr for AssignmentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "homework" => Ok(AssignmentType::Homework),
            "quiz" => Ok(AssignmentType::Quiz),
            "test" => Ok(AssignmentType::Test),
            _ => Err(format!("Invalid assignment type: {s}")),
        }
    }
}

/// 时间窗口状态
///
/// 所有调用方（提交、编辑、可见性）共用这一个派生，避免各处用原始时间戳
/// 重复推导出不一致的结果。
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub enum TemporalState {
    NotStarted,
    Open,
    Closed,
}

impl std::fmt::Display for TemporalState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TemporalState::NotStarted => write!(f, "NOT_STARTED"),
            TemporalState::Open => write!(f, "OPEN"),
            TemporalState::Closed => write!(f, "CLOSED"),
        }
    }
}

/// 可用性 = 时间窗口状态 × 锁定状态，两者互相独立
#[derive(Debug, Clone, Copy, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct Availability {
    pub temporal: TemporalState,
    pub locked: bool,
}

// 作业实体
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct Assignment {
    pub id: i64,
    // 所属课程 ID（课程本身由外部系统管理）
    pub course_id: i64,
    // 所属课程模块 ID（可选）
    pub module_id: Option<i64>,
    // 绑定量规 ID；设置后该作业按量规评分，不再使用题目分值求和
    pub rubric_id: Option<i64>,
    pub assignment_type: AssignmentType,
    pub title: String,
    pub description: Option<String>,
    // 作业总分（用于展示；题目分值求和才是逐题评分的满分）
    pub points_possible: f64,
    // 开放时间，为空表示创建即开放
    pub start_date: Option<chrono::DateTime<chrono::Utc>>,
    pub due_date: chrono::DateTime<chrono::Utc>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Assignment {
    /// 推导作业在 `as_of` 时刻的时间窗口状态
    ///
    /// OPEN 要求 `as_of < due_date`，因此截止时刻及之后的提交
    /// 天然被拒绝；迟交展示位（submitted_at > due_date）与此无关。
    pub fn temporal_state(&self, as_of: chrono::DateTime<chrono::Utc>) -> TemporalState {
        if let Some(start) = self.start_date
            && as_of < start
        {
            return TemporalState::NotStarted;
        }
        if as_of >= self.due_date {
            return TemporalState::Closed;
        }
        TemporalState::Open
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn assignment_with_window(
        start: Option<chrono::DateTime<Utc>>,
        due: chrono::DateTime<Utc>,
    ) -> Assignment {
        Assignment {
            id: 1,
            course_id: 1,
            module_id: None,
            rubric_id: None,
            assignment_type: AssignmentType::Quiz,
            title: "Window test".to_string(),
            description: None,
            points_possible: 100.0,
            start_date: start,
            due_date: due,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_temporal_state_window() {
        let t = Utc::now();
        let a = assignment_with_window(Some(t + Duration::hours(1)), t + Duration::hours(2));

        assert_eq!(a.temporal_state(t), TemporalState::NotStarted);
        assert_eq!(
            a.temporal_state(t + Duration::minutes(90)),
            TemporalState::Open
        );
        assert_eq!(a.temporal_state(t + Duration::hours(3)), TemporalState::Closed);
    }

    #[test]
    fn test_temporal_state_without_start_date() {
        let t = Utc::now();
        let a = assignment_with_window(None, t + Duration::hours(2));

        assert_eq!(a.temporal_state(t), TemporalState::Open);
        assert_eq!(a.temporal_state(t + Duration::hours(2)), TemporalState::Closed);
    }

    #[test]
    fn test_due_date_is_exclusive() {
        let t = Utc::now();
        let a = assignment_with_window(None, t + Duration::hours(2));

        // 截止时刻整点即 CLOSED
        assert_eq!(
            a.temporal_state(t + Duration::hours(2) - Duration::seconds(1)),
            TemporalState::Open
        );
        assert_eq!(a.temporal_state(t + Duration::hours(2)), TemporalState::Closed);
    }
}
