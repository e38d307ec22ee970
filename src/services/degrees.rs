// src/services/degrees.rs

//! Degree service. Successful changes drop the cached degree lists.

use crate::client::{ApiClient, ApiRequest};
use crate::error::Outcome;
use crate::models::{Action, DegreeDto, DegreeInput, Entity};
use crate::services::LookupService;

pub struct DegreeService {
    api: ApiClient,
    lookups: LookupService,
}

impl DegreeService {
    pub fn new(api: ApiClient, lookups: LookupService) -> Self {
        Self { api, lookups }
    }

    pub async fn get_all(&self) -> Outcome<Vec<DegreeDto>> {
        self.api
            .fetch_list(ApiRequest::get("/Degree"), Entity::Degree)
            .await
    }

    pub async fn by_department(&self, department_id: i64) -> Outcome<Vec<DegreeDto>> {
        let request = ApiRequest::get(format!("/Degree/by-department/{department_id}"));
        self.api.fetch_list(request, Entity::Degree).await
    }

    pub async fn create(&self, degree: &DegreeInput) -> Outcome<DegreeDto> {
        let request = ApiRequest::post("/Degree").json(degree.body(None));
        let reply = self
            .api
            .submit_as(request, Entity::Degree, Action::Create)
            .await?;
        self.lookups.invalidate_degrees();
        Ok(reply)
    }

    pub async fn update(&self, id: i64, degree: &DegreeInput) -> Outcome<DegreeDto> {
        let request = ApiRequest::put(format!("/Degree/{id}")).json(degree.body(Some(id)));
        let reply = self
            .api
            .submit_as(request, Entity::Degree, Action::Update)
            .await?;
        self.lookups.invalidate_degrees();
        Ok(reply)
    }

    pub async fn delete(&self, id: i64) -> Outcome<()> {
        let request = ApiRequest::delete(format!("/Degree/{id}"));
        let reply = self.api.remove(request, Entity::Degree).await?;
        self.lookups.invalidate_degrees();
        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::error::FailureKind;
    use crate::transport::mock::{MockTransport, test_client};

    #[tokio::test]
    async fn test_create_invalidates_cached_degrees() {
        let (api, mock) = test_client(
            MockTransport::new()
                .respond_json(200, json!({"succeeded": true, "data": [{"id": 1, "name": "BSc"}]}))
                .respond_json(200, json!({"succeeded": true, "data": {"id": 2, "name": "MSc"}}))
                .respond_json(200, json!({"succeeded": true, "data": [{"id": 1, "name": "BSc"}, {"id": 2, "name": "MSc"}]})),
        );
        let lookups = LookupService::new(api.clone(), None);
        let degrees = DegreeService::new(api, lookups.clone());

        assert_eq!(lookups.degrees_of_department(7).await.unwrap().len(), 1);
        degrees
            .create(&DegreeInput {
                name: "MSc".into(),
                department_id: 7,
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(lookups.degrees_of_department(7).await.unwrap().len(), 2);
        assert_eq!(mock.request_count(), 3);
    }

    #[tokio::test]
    async fn test_by_department_maps_degrees() {
        let (api, _) = test_client(MockTransport::new().respond_json(
            200,
            json!({"succeeded": true, "data": [{"Id": 3, "Name": "PhD", "StandardDurationYears": 3, "DepartmentName": "CS"}]}),
        ));
        let degrees = DegreeService::new(api.clone(), LookupService::new(api, None));
        let list = degrees.by_department(1).await.unwrap().data;
        assert_eq!(list[0].standard_duration_years, 3);
        assert_eq!(list[0].department_name, "CS");
    }

    #[tokio::test]
    async fn test_referenced_delete_is_integrity() {
        let (api, _) = test_client(MockTransport::new().respond_json(500, json!({"message": "Internal error"})));
        let degrees = DegreeService::new(api.clone(), LookupService::new(api, None));
        let failure = degrees.delete(3).await.unwrap_err();
        assert_eq!(failure.kind, FailureKind::Integrity);
    }
}
