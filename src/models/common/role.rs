use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 调用方角色
//
// 引擎不做鉴权，角色由已完成授权的调用方随请求传入，
// 仅用于学生视图脱敏和教师的可用性旁路。
#[derive(Debug, Clone, Copy, Serialize, PartialEq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/role.ts")]
pub enum Role {
    Student,    // 学生
    Instructor, // 教师
}

impl Role {
    pub const STUDENT: &'static str = "student";
    pub const INSTRUCTOR: &'static str = "instructor";

    pub fn is_student(&self) -> bool {
        matches!(self, Role::Student)
    }

    pub fn is_instructor(&self) -> bool {
        matches!(self, Role::Instructor)
    }
}

impl Default for Role {
    // 未声明角色时按学生处理，脱敏方向上更安全
    fn default() -> Self {
        Role::Student
    }
}

impl<'de> serde::Deserialize<'de> for Role {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            Role::STUDENT => Ok(Role::Student),
            Role::INSTRUCTOR => Ok(Role::Instructor),
            _ => Err(serde::de::Error::custom(format!(
                "无效的角色: '{s}'. 支持的角色: student, instructor"
            ))),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Student => write!(f, "{}", Role::STUDENT),
            Role::Instructor => write!(f, "{}", Role::INSTRUCTOR),
        }
    }
}

/// 读路径的调用方角色参数；缺省按学生处理
#[derive(Debug, Clone, Copy, Default, serde::Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/role.ts")]
pub struct ViewerParams {
    #[serde(default)]
    pub role: Role,
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "student" => Ok(Role::Student),
            "instructor" => Ok(Role::Instructor),
            _ => Err(format!("Invalid role: {s}")),
        }
    }
}
