use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::RubricService;
use crate::models::rubrics::responses::{RubricDetail, RubricStudentView};
use crate::models::{ApiResponse, ErrorCode, Role};

/// 获取量规详情
/// GET /rubrics/{id}?role=student|instructor
///
/// 学生在提交评分前看不到等级的分值映射，只能看到标准、满分与
/// 等级描述；教师拿到完整量规。
pub async fn get_rubric(
    service: &RubricService,
    request: &HttpRequest,
    rubric_id: i64,
    role: Role,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let rubric = match storage.get_rubric_by_id(rubric_id).await {
        Ok(Some(rubric)) => rubric,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::RubricNotFound,
                "量规不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询量规失败: {e}"),
                )),
            );
        }
    };

    if role.is_student() {
        let view = RubricStudentView::from(&rubric);
        return Ok(HttpResponse::Ok().json(ApiResponse::success(view, "查询成功")));
    }

    let total_points_possible = rubric.total_points_possible();
    let detail = RubricDetail {
        rubric,
        total_points_possible,
    };
    Ok(HttpResponse::Ok().json(ApiResponse::success(detail, "查询成功")))
}
