// src/services/students.rs

//! Student service.

use crate::client::{ApiClient, ApiRequest};
use crate::error::Outcome;
use crate::models::{Action, Entity, NewStudent, StudentDto, StudentFilter};

/// Server text for a national id that is already registered.
const DUPLICATE_NATIONAL_ID: &str = "رقم الهوية الوطنية موجود بالفعل";

pub struct StudentService {
    api: ApiClient,
}

impl StudentService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn list(&self, filter: &StudentFilter) -> Outcome<Vec<StudentDto>> {
        let request = ApiRequest::get("/Student").query_pairs(filter.query());
        self.api.fetch_list(request, Entity::Student).await
    }

    pub async fn by_national_id(&self, national_id: &str) -> Outcome<StudentDto> {
        let request = ApiRequest::get(format!("/Student/getByNationalNum/{}", national_id.trim()));
        self.api.fetch_one(request, Entity::Student).await
    }

    /// Register a student. Qualification rows missing a qualification or an
    /// institution are dropped before sending.
    pub async fn create(&self, student: &NewStudent) -> Outcome<StudentDto> {
        let request = ApiRequest::post("/Student/add").json_of(&student.cleaned())?;
        self.api
            .submit_as(request, Entity::Student, Action::Create)
            .await
            .map_err(|failure| {
                if failure.message.contains(DUPLICATE_NATIONAL_ID) {
                    let message = self.api.messages().duplicate_national_id.clone();
                    failure.remap(message)
                } else {
                    failure
                }
            })
    }

    pub async fn delete(&self, national_id: &str) -> Outcome<()> {
        let request = ApiRequest::delete(format!("/Student/{}", national_id.trim()));
        self.api.remove(request, Entity::Student).await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::models::{Messages, NewQualification};
    use crate::transport::RequestBody;
    use crate::transport::mock::{MockTransport, test_client};

    #[tokio::test]
    async fn test_duplicate_national_id_message() {
        let (api, _) = test_client(MockTransport::new().respond_json(
            400,
            json!({"message": "رقم الهوية الوطنية موجود بالفعل في النظام"}),
        ));
        let failure = StudentService::new(api)
            .create(&NewStudent {
                national_id: "29801011234567".into(),
                ..Default::default()
            })
            .await
            .unwrap_err();
        assert_eq!(failure.message, Messages::default().duplicate_national_id);
    }

    #[tokio::test]
    async fn test_create_filters_qualifications() {
        let (api, mock) = test_client(
            MockTransport::new().respond_json(200, json!({"succeeded": true, "message": "تم الحفظ", "data": null})),
        );
        let reply = StudentService::new(api)
            .create(&NewStudent {
                national_id: "1".into(),
                qualifications: vec![
                    NewQualification {
                        qualification: 2,
                        institution: "Cairo University".into(),
                        grade: 1,
                        date_obtained: Some("2020-06-01".into()),
                    },
                    NewQualification::default(),
                ],
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(reply.message.as_deref(), Some("تم الحفظ"));

        let RequestBody::Json(body) = mock.last_request().unwrap().body else {
            panic!("expected JSON body");
        };
        assert_eq!(body["qualifications"].as_array().map(Vec::len), Some(1));
        assert_eq!(body["nationalId"], "1");
    }

    #[tokio::test]
    async fn test_by_national_id_reads_bare_record() {
        let (api, mock) = test_client(MockTransport::new().respond_json(
            200,
            json!({"nationalId": "123", "firstName": "Mona", "thirdName": "Hassan"}),
        ));
        let student = StudentService::new(api).by_national_id("123").await.unwrap().data;
        assert_eq!(student.full_name, "Mona Hassan");
        assert!(
            mock.last_request()
                .unwrap()
                .url
                .as_str()
                .ends_with("/Student/getByNationalNum/123")
        );
    }
}
