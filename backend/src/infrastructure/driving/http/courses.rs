use axum::{
    extract::State,
    response::Json,
    routing::get,
    Router,
};
use shared::{CourseResponse, CreateCourseRequest};

use crate::application::courses::commands::{create_course, list_courses};
use crate::domain::Course;
use crate::infrastructure::AppState;

use super::videos::video_response;

pub fn course_routes() -> Router<AppState> {
    Router::new().route("/courses", get(list).post(create))
}

fn course_response(course: &Course) -> CourseResponse {
    CourseResponse {
        id: course.id().value(),
        title: course.title().map(str::to_string),
        videos: course.videos().iter().map(video_response).collect(),
    }
}

async fn create(
    State(state): State<AppState>,
    Json(req): Json<CreateCourseRequest>,
) -> Json<CourseResponse> {
    let course = create_course::execute(&*state.course_repo, &state.course_ids, req.title).await;
    tracing::info!("[API] Created course {}", course.id());
    Json(course_response(&course))
}

async fn list(State(state): State<AppState>) -> Json<Vec<CourseResponse>> {
    let courses = list_courses::execute(&*state.course_repo).await;
    Json(courses.iter().map(course_response).collect())
}
