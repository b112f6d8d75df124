//! API 错误码定义
//!
//! 与 HTTP 状态码配合使用：1xxx 通用，2xxx 作业/题目，3xxx 提交/评分，
//! 4xxx 量规，5xxx 课程模块，6xxx 审核批次。

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // 通用错误
    BadRequest = 1000,
    ValidationError = 1001,
    NotFound = 1004,
    InternalServerError = 1500,

    // 作业与题目
    AssignmentNotFound = 2001,
    QuestionNotFound = 2002,
    InvalidQuestion = 2003,

    // 提交与评分
    SubmissionNotFound = 3001,
    AlreadySubmitted = 3002,
    NotOpen = 3003,
    Locked = 3004,
    ResponseNotFound = 3005,
    ConcurrentModification = 3006,
    ScoreExceedsMaximum = 3007,

    // 量规
    RubricNotFound = 4001,
    IncompleteAssessment = 4002,
    InvalidRating = 4003,
    RubricNotConfigured = 4004,
    AssessmentNotFound = 4005,
    RubricInUse = 4006,

    // 课程模块
    ModuleNotFound = 5001,

    // 审核批次
    ReviewBatchNotFound = 6001,
    ReviewItemNotFound = 6002,
}
