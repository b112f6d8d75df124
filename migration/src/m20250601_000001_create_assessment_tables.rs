use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建课程模块表
        manager
            .create_table(
                Table::create()
                    .table(CourseModules::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CourseModules::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(CourseModules::CourseId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(CourseModules::Title).string().not_null())
                    .col(ColumnDef::new(CourseModules::Description).text().null())
                    .col(
                        ColumnDef::new(CourseModules::StartDate)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CourseModules::EndDate)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CourseModules::IsLocked)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(CourseModules::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CourseModules::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建评分量规表
        manager
            .create_table(
                Table::create()
                    .table(Rubrics::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Rubrics::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Rubrics::CourseId).big_integer().not_null())
                    .col(ColumnDef::new(Rubrics::Title).string().not_null())
                    .col(ColumnDef::new(Rubrics::Description).text().null())
                    .col(
                        ColumnDef::new(Rubrics::IsReusable)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Rubrics::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Rubrics::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建量规评分标准表
        manager
            .create_table(
                Table::create()
                    .table(RubricCriteria::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(RubricCriteria::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(RubricCriteria::RubricId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(RubricCriteria::Title).string().not_null())
                    .col(
                        ColumnDef::new(RubricCriteria::PointsPossible)
                            .double()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RubricCriteria::SortOrder)
                            .integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(RubricCriteria::Table, RubricCriteria::RubricId)
                            .to(Rubrics::Table, Rubrics::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建量规评分等级表
        manager
            .create_table(
                Table::create()
                    .table(RubricRatings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(RubricRatings::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(RubricRatings::CriterionId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(RubricRatings::Label).string().not_null())
                    .col(ColumnDef::new(RubricRatings::Description).text().null())
                    .col(ColumnDef::new(RubricRatings::Points).double().not_null())
                    .col(
                        ColumnDef::new(RubricRatings::SortOrder)
                            .integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(RubricRatings::Table, RubricRatings::CriterionId)
                            .to(RubricCriteria::Table, RubricCriteria::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建作业表
        manager
            .create_table(
                Table::create()
                    .table(Assignments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Assignments::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Assignments::CourseId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Assignments::ModuleId)
                            .big_integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Assignments::RubricId)
                            .big_integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Assignments::AssignmentType)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Assignments::Title).string().not_null())
                    .col(ColumnDef::new(Assignments::Description).text().null())
                    .col(
                        ColumnDef::new(Assignments::PointsPossible)
                            .double()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Assignments::StartDate).big_integer().null())
                    .col(
                        ColumnDef::new(Assignments::DueDate)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Assignments::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Assignments::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Assignments::Table, Assignments::ModuleId)
                            .to(CourseModules::Table, CourseModules::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Assignments::Table, Assignments::RubricId)
                            .to(Rubrics::Table, Rubrics::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建题目表
        manager
            .create_table(
                Table::create()
                    .table(Questions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Questions::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Questions::AssignmentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Questions::QuestionType)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Questions::Text).text().not_null())
                    .col(ColumnDef::new(Questions::Points).double().not_null())
                    .col(ColumnDef::new(Questions::SortOrder).integer().not_null())
                    .col(ColumnDef::new(Questions::CorrectValue).double().null())
                    .col(ColumnDef::new(Questions::Tolerance).double().null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Questions::Table, Questions::AssignmentId)
                            .to(Assignments::Table, Assignments::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建选项表（仅选择题）
        manager
            .create_table(
                Table::create()
                    .table(QuestionChoices::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(QuestionChoices::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(QuestionChoices::QuestionId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(QuestionChoices::Text).text().not_null())
                    .col(
                        ColumnDef::new(QuestionChoices::IsCorrect)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(QuestionChoices::SortOrder)
                            .integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(QuestionChoices::Table, QuestionChoices::QuestionId)
                            .to(Questions::Table, Questions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建提交表
        manager
            .create_table(
                Table::create()
                    .table(Submissions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Submissions::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Submissions::AssignmentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Submissions::StudentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Submissions::SubmittedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Submissions::Table, Submissions::AssignmentId)
                            .to(Assignments::Table, Assignments::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建答题记录表
        manager
            .create_table(
                Table::create()
                    .table(Responses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Responses::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Responses::SubmissionId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Responses::QuestionId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Responses::ResponseText).text().not_null())
                    .col(ColumnDef::new(Responses::PointsEarned).double().null())
                    .col(
                        ColumnDef::new(Responses::IsAutoGraded)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Responses::TeacherRemarks).text().null())
                    .col(
                        ColumnDef::new(Responses::Version)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .col(
                        ColumnDef::new(Responses::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Responses::Table, Responses::SubmissionId)
                            .to(Submissions::Table, Submissions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Responses::Table, Responses::QuestionId)
                            .to(Questions::Table, Questions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建量规评估表
        manager
            .create_table(
                Table::create()
                    .table(RubricAssessments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(RubricAssessments::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(RubricAssessments::SubmissionId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RubricAssessments::RubricId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RubricAssessments::IsComplete)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(RubricAssessments::TotalScore)
                            .double()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(RubricAssessments::GradedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RubricAssessments::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(RubricAssessments::Table, RubricAssessments::SubmissionId)
                            .to(Submissions::Table, Submissions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(RubricAssessments::Table, RubricAssessments::RubricId)
                            .to(Rubrics::Table, Rubrics::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建量规评估明细表
        manager
            .create_table(
                Table::create()
                    .table(RubricCriterionScores::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(RubricCriterionScores::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(RubricCriterionScores::AssessmentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RubricCriterionScores::CriterionId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RubricCriterionScores::SelectedRatingId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RubricCriterionScores::Comments)
                            .text()
                            .null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(
                                RubricCriterionScores::Table,
                                RubricCriterionScores::AssessmentId,
                            )
                            .to(RubricAssessments::Table, RubricAssessments::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(
                                RubricCriterionScores::Table,
                                RubricCriterionScores::CriterionId,
                            )
                            .to(RubricCriteria::Table, RubricCriteria::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建索引
        // 每个学生对每份作业至多一次提交，由唯一索引兜底并发提交
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uq_submissions_assignment_student")
                    .table(Submissions::Table)
                    .col(Submissions::AssignmentId)
                    .col(Submissions::StudentId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 每次提交至多一份量规评估
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uq_rubric_assessments_submission")
                    .table(RubricAssessments::Table)
                    .col(RubricAssessments::SubmissionId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 每份评估中每条标准至多一个选择
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uq_criterion_scores_assessment_criterion")
                    .table(RubricCriterionScores::Table)
                    .col(RubricCriterionScores::AssessmentId)
                    .col(RubricCriterionScores::CriterionId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 题目顺序在作业内唯一
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uq_questions_assignment_order")
                    .table(Questions::Table)
                    .col(Questions::AssignmentId)
                    .col(Questions::SortOrder)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_assignments_course_id")
                    .table(Assignments::Table)
                    .col(Assignments::CourseId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_assignments_due_date")
                    .table(Assignments::Table)
                    .col(Assignments::DueDate)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_course_modules_course_id")
                    .table(CourseModules::Table)
                    .col(CourseModules::CourseId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_questions_assignment_id")
                    .table(Questions::Table)
                    .col(Questions::AssignmentId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_responses_submission_id")
                    .table(Responses::Table)
                    .col(Responses::SubmissionId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_rubrics_course_id")
                    .table(Rubrics::Table)
                    .col(Rubrics::CourseId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 按照创建的相反顺序删除
        manager
            .drop_table(Table::drop().table(RubricCriterionScores::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(RubricAssessments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Responses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Submissions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(QuestionChoices::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Questions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Assignments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(RubricRatings::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(RubricCriteria::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Rubrics::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CourseModules::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum CourseModules {
    #[sea_orm(iden = "course_modules")]
    Table,
    Id,
    CourseId,
    Title,
    Description,
    StartDate,
    EndDate,
    IsLocked,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Assignments {
    #[sea_orm(iden = "assignments")]
    Table,
    Id,
    CourseId,
    ModuleId,
    RubricId,
    AssignmentType,
    Title,
    Description,
    PointsPossible,
    StartDate,
    DueDate,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Questions {
    #[sea_orm(iden = "questions")]
    Table,
    Id,
    AssignmentId,
    QuestionType,
    Text,
    Points,
    SortOrder,
    CorrectValue,
    Tolerance,
}

#[derive(DeriveIden)]
enum QuestionChoices {
    #[sea_orm(iden = "question_choices")]
    Table,
    Id,
    QuestionId,
    Text,
    IsCorrect,
    SortOrder,
}

#[derive(DeriveIden)]
enum Submissions {
    #[sea_orm(iden = "submissions")]
    Table,
    Id,
    AssignmentId,
    StudentId,
    SubmittedAt,
}

#[derive(DeriveIden)]
enum Responses {
    #[sea_orm(iden = "responses")]
    Table,
    Id,
    SubmissionId,
    QuestionId,
    ResponseText,
    PointsEarned,
    IsAutoGraded,
    TeacherRemarks,
    Version,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Rubrics {
    #[sea_orm(iden = "rubrics")]
    Table,
    Id,
    CourseId,
    Title,
    Description,
    IsReusable,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum RubricCriteria {
    #[sea_orm(iden = "rubric_criteria")]
    Table,
    Id,
    RubricId,
    Title,
    PointsPossible,
    SortOrder,
}

#[derive(DeriveIden)]
enum RubricRatings {
    #[sea_orm(iden = "rubric_ratings")]
    Table,
    Id,
    CriterionId,
    Label,
    Description,
    Points,
    SortOrder,
}

#[derive(DeriveIden)]
enum RubricAssessments {
    #[sea_orm(iden = "rubric_assessments")]
    Table,
    Id,
    SubmissionId,
    RubricId,
    IsComplete,
    TotalScore,
    GradedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum RubricCriterionScores {
    #[sea_orm(iden = "rubric_criterion_scores")]
    Table,
    Id,
    AssessmentId,
    CriterionId,
    SelectedRatingId,
    Comments,
}
