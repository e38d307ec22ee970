// src/services/courses.rs

//! Course service. Create and update are sent as multipart forms.

use crate::client::{ApiClient, ApiRequest};
use crate::error::Outcome;
use crate::models::{Action, CourseDto, CourseFilter, CourseInput, Entity};

pub struct CourseService {
    api: ApiClient,
}

impl CourseService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// List courses, optionally narrowed by department, degree or track.
    pub async fn get_all(&self, filter: &CourseFilter) -> Outcome<Vec<CourseDto>> {
        let request = ApiRequest::get("/Course/GetAll").query_pairs(filter.query());
        self.api.fetch_list(request, Entity::Course).await
    }

    pub async fn create(&self, course: &CourseInput) -> Outcome<CourseDto> {
        let request = ApiRequest::post("/Course/AddCourse").multipart(course.form_fields(None));
        self.api.submit_as(request, Entity::Course, Action::Create).await
    }

    pub async fn update(&self, id: &str, course: &CourseInput) -> Outcome<CourseDto> {
        let request =
            ApiRequest::put("/Course/UpdateCourse").multipart(course.form_fields(Some(id)));
        self.api.submit_as(request, Entity::Course, Action::Update).await
    }

    pub async fn delete(&self, id: &str) -> Outcome<()> {
        let request = ApiRequest::delete(format!("/Course/DeleteCourse/{id}"));
        self.api.remove(request, Entity::Course).await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::error::FailureKind;
    use crate::transport::RequestBody;
    use crate::transport::mock::{MockTransport, test_client};

    #[tokio::test]
    async fn test_get_all_maps_envelope() {
        let (api, mock) = test_client(MockTransport::new().respond_json(
            200,
            json!({
                "succeeded": true,
                "data": [{"Id": 1, "Code": "CS101", "IsOptional": "true", "Prerequisites": "CS100، MA101"}]
            }),
        ));
        let courses = CourseService::new(api)
            .get_all(&CourseFilter {
                msar_id: Some(3),
                ..Default::default()
            })
            .await
            .unwrap()
            .data;

        assert_eq!(courses.len(), 1);
        assert!(courses[0].is_optional);
        assert_eq!(courses[0].prerequisites, vec!["CS100", "MA101"]);
        assert!(
            mock.last_request()
                .unwrap()
                .url
                .as_str()
                .ends_with("/Course/GetAll?msarId=3")
        );
    }

    #[tokio::test]
    async fn test_create_sends_multipart() {
        let (api, mock) = test_client(
            MockTransport::new()
                .respond_json(200, json!({"succeeded": true, "data": {"id": 5, "code": "CS101"}})),
        );
        let input = CourseInput {
            code: "CS101".into(),
            name: "Intro".into(),
            credit_hours: 3,
            semester: 1,
            msar_id: 2,
            prerequisites: vec!["1".into(), "2".into()],
            ..Default::default()
        };
        let reply = CourseService::new(api).create(&input).await.unwrap();
        assert_eq!(reply.data.id, "5");

        let request = mock.last_request().unwrap();
        assert!(request.body.content_type().is_none());
        let RequestBody::Multipart(fields) = request.body else {
            panic!("expected multipart body");
        };
        let prerequisites: Vec<_> = fields
            .iter()
            .filter(|(name, _)| name == "PrerequisiteCourseIds")
            .map(|(_, value)| value.as_str())
            .collect();
        assert_eq!(prerequisites, vec!["1", "2"]);
    }

    #[tokio::test]
    async fn test_delete_accepts_bare_true() {
        let (api, mock) = test_client(MockTransport::new().respond(200, "true"));
        let reply = CourseService::new(api).delete("12").await.unwrap();
        assert_eq!(reply.message.as_deref(), Some("تم حذف المقرر بنجاح"));
        assert!(
            mock.last_request()
                .unwrap()
                .url
                .as_str()
                .ends_with("/Course/DeleteCourse/12")
        );
    }

    #[tokio::test]
    async fn test_update_not_found() {
        let (api, _) = test_client(MockTransport::new().respond(404, ""));
        let failure = CourseService::new(api)
            .update("9", &CourseInput::default())
            .await
            .unwrap_err();
        assert_eq!(failure.kind, FailureKind::NotFound);
    }
}
