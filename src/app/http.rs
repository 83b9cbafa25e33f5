// ==========================================
// 家禽杂交预测系统 - HTTP 路由
// ==========================================
// 职责: axum 路由,把 HTTP 请求转发给 BreedApi / CrossApi
// 状态码: InvalidInput / ValidationError → 400, NotFound → 404, 其他 → 500
// ==========================================

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tracing::{error, warn};

use crate::api::{
    ApiError, BreedSearchQuery, CrossApi, CrossCalculationRequest, CrossCalculationResponse,
    ErrorResponse,
};
use crate::app::state::AppState;
use crate::i18n::t;

/// 构建应用路由
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/breeds", get(list_breeds))
        .route("/api/breeds/search", get(search_breeds))
        .route("/api/breeds/categories", get(list_categories))
        .route("/api/breeds/category/:category", get(list_by_category))
        .route("/api/breeds/:id", get(get_breed))
        .route("/api/crosses/calculate", post(calculate_cross))
        .with_state(state)
}

// ==========================================
// 品种路由
// ==========================================

async fn list_breeds(State(state): State<Arc<AppState>>) -> Response {
    match state.breed_api.list_breeds() {
        Ok(breeds) => Json(breeds).into_response(),
        Err(e) => error_response(&e, "breed.fetch_failed"),
    }
}

async fn search_breeds(
    State(state): State<Arc<AppState>>,
    Query(query): Query<BreedSearchQuery>,
) -> Response {
    let q = query.q.unwrap_or_default();
    match state.breed_api.search_breeds(&q) {
        Ok(breeds) => Json(breeds).into_response(),
        Err(e) => error_response(&e, "breed.search_failed"),
    }
}

async fn list_categories(State(state): State<Arc<AppState>>) -> Response {
    match state.breed_api.list_categories() {
        Ok(categories) => Json(categories).into_response(),
        Err(e) => error_response(&e, "breed.category_fetch_failed"),
    }
}

async fn list_by_category(
    State(state): State<Arc<AppState>>,
    Path(category): Path<String>,
) -> Response {
    match state.breed_api.list_by_category(&category) {
        Ok(breeds) => Json(breeds).into_response(),
        Err(e) => error_response(&e, "breed.category_fetch_failed"),
    }
}

async fn get_breed(State(state): State<Arc<AppState>>, Path(id): Path<String>) -> Response {
    match state.breed_api.get_breed(&id) {
        Ok(breed) => Json(breed).into_response(),
        Err(e) => error_response(&e, "breed.fetch_failed"),
    }
}

// ==========================================
// 杂交路由（响应信封）
// ==========================================

async fn calculate_cross(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CrossCalculationRequest>, JsonRejection>,
) -> Response {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            warn!(error = %rejection, "杂交请求体无法解析");
            return envelope(
                StatusCode::BAD_REQUEST,
                CrossCalculationResponse::failure(t("cross.invalid_request")),
            );
        }
    };

    // 缓存可能落在 SQLite 上,放到阻塞线程池执行
    let cross_api = state.cross_api.clone();
    let outcome = tokio::task::spawn_blocking(move || cross_api.calculate(&request)).await;

    match outcome {
        Ok(result) => {
            let status = result.as_ref().err().map_or(StatusCode::OK, status_for);
            envelope(status, CrossApi::into_envelope(result))
        }
        Err(join_err) => {
            error!(error = %join_err, "杂交计算任务异常退出");
            envelope(
                StatusCode::INTERNAL_SERVER_ERROR,
                CrossCalculationResponse::failure(t("cross.calculation_failed")),
            )
        }
    }
}

// ==========================================
// 响应辅助
// ==========================================

fn status_for(err: &ApiError) -> StatusCode {
    match err {
        ApiError::InvalidInput(_) | ApiError::ValidationError(_) => StatusCode::BAD_REQUEST,
        ApiError::NotFound(_) => StatusCode::NOT_FOUND,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// 客户端错误带原始消息,服务端错误只返回本地化的概括消息
fn error_response(err: &ApiError, fallback_key: &str) -> Response {
    let message = match err {
        ApiError::InvalidInput(msg) | ApiError::NotFound(msg) | ApiError::ValidationError(msg) => {
            msg.clone()
        }
        _ => {
            error!(error = %err, code = err.code(), "请求处理失败");
            t(fallback_key)
        }
    };
    (status_for(err), Json(ErrorResponse::new(err.code(), message))).into_response()
}

fn envelope(status: StatusCode, body: CrossCalculationResponse) -> Response {
    (status, Json(body)).into_response()
}
