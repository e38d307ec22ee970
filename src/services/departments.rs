// src/services/departments.rs

//! Department service.

use crate::client::{ApiClient, ApiRequest};
use crate::error::{Failure, FailureKind, Outcome};
use crate::models::{Action, DepartmentDto, DepartmentInput, Entity, LookupKind};
use crate::services::{LookupKey, LookupService};

pub struct DepartmentService {
    api: ApiClient,
    lookups: LookupService,
}

impl DepartmentService {
    pub fn new(api: ApiClient, lookups: LookupService) -> Self {
        Self { api, lookups }
    }

    pub async fn get_all(&self) -> Outcome<Vec<DepartmentDto>> {
        self.api
            .fetch_list(ApiRequest::get("/Departments"), Entity::Department)
            .await
    }

    pub async fn by_program(&self, program_id: i64) -> Outcome<Vec<DepartmentDto>> {
        let request = ApiRequest::get(format!("/Departments/byProgram/{program_id}"));
        self.api.fetch_list(request, Entity::Department).await
    }

    pub async fn create(&self, department: &DepartmentInput) -> Outcome<DepartmentDto> {
        self.check(department)?;
        let request = ApiRequest::post("/Departments").json(department.body(None));
        let reply = self
            .api
            .submit_as(request, Entity::Department, Action::Create)
            .await?;
        self.lookups.invalidate(LookupKey::Kind(LookupKind::Departments));
        Ok(reply)
    }

    pub async fn update(&self, id: i64, department: &DepartmentInput) -> Outcome<DepartmentDto> {
        self.check(department)?;
        let request = ApiRequest::put(format!("/Departments/{id}")).json(department.body(Some(id)));
        let reply = self
            .api
            .submit_as(request, Entity::Department, Action::Update)
            .await?;
        self.lookups.invalidate(LookupKey::Kind(LookupKind::Departments));
        Ok(reply)
    }

    pub async fn delete(&self, id: i64) -> Outcome<()> {
        let request = ApiRequest::delete(format!("/Departments/{id}"));
        let reply = self.api.remove(request, Entity::Department).await?;
        self.lookups.invalidate(LookupKey::Kind(LookupKind::Departments));
        Ok(reply)
    }

    fn check(&self, department: &DepartmentInput) -> Result<(), Failure> {
        if department.has_valid_code() {
            Ok(())
        } else {
            Err(Failure::new(
                FailureKind::InvalidInput,
                self.api.messages().department_code_too_short.clone(),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::models::Messages;
    use crate::transport::RequestBody;
    use crate::transport::mock::{MockTransport, test_client};

    fn service(mock: MockTransport) -> (DepartmentService, std::sync::Arc<MockTransport>) {
        let (api, mock) = test_client(mock);
        let lookups = LookupService::new(api.clone(), None);
        (DepartmentService::new(api, lookups), mock)
    }

    #[tokio::test]
    async fn test_short_code_blocks_request() {
        let (departments, mock) = service(MockTransport::new());
        let failure = departments
            .create(&DepartmentInput {
                code: " X ".into(),
                name: "Physics".into(),
                ..Default::default()
            })
            .await
            .unwrap_err();

        assert_eq!(failure.kind, FailureKind::InvalidInput);
        assert_eq!(failure.message, Messages::default().department_code_too_short);
        assert_eq!(mock.request_count(), 0);
    }

    #[tokio::test]
    async fn test_create_sends_camel_case_json() {
        let (departments, mock) = service(
            MockTransport::new().respond_json(200, json!({"succeeded": true, "data": {"id": 4, "code": "CS"}})),
        );
        let reply = departments
            .create(&DepartmentInput {
                code: "CS".into(),
                name: "Computer Science".into(),
                description: String::new(),
                program_id: 1,
            })
            .await
            .unwrap();
        assert_eq!(reply.data.id, 4);

        let request = mock.last_request().unwrap();
        assert_eq!(
            request.body,
            RequestBody::Json(json!({"code": "CS", "name": "Computer Science", "description": "", "programId": 1}))
        );
    }

    #[tokio::test]
    async fn test_delete_with_children_is_integrity() {
        let (departments, _) = service(MockTransport::new().respond(500, ""));
        let failure = departments.delete(3).await.unwrap_err();
        assert_eq!(failure.kind, FailureKind::Integrity);
        assert_eq!(failure.message, Messages::default().integrity(Entity::Department));
    }

    #[tokio::test]
    async fn test_validation_errors_joined() {
        let (departments, _) = service(MockTransport::new().respond_json(
            400,
            json!({"title": "One or more validation errors occurred.", "errors": {"Name": ["Name is required"], "ProgramId": ["Invalid program"]}}),
        ));
        let failure = departments
            .update(
                2,
                &DepartmentInput {
                    code: "CS".into(),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert_eq!(failure.kind, FailureKind::Validation);
        assert_eq!(failure.message, "Name is required، Invalid program");
    }
}
