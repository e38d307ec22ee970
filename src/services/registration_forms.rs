// src/services/registration_forms.rs

//! Registration form service: listing, council approvals and deletion.

use chrono::Utc;

use crate::client::{ApiClient, ApiRequest};
use crate::error::Outcome;
use crate::models::{Action, ApprovalDates, Entity, FormFilter, RegistrationFormDto};

pub struct RegistrationFormService {
    api: ApiClient,
}

impl RegistrationFormService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn list(&self, filter: &FormFilter) -> Outcome<Vec<RegistrationFormDto>> {
        let request = ApiRequest::get("/RegistrationForms").query_pairs(filter.query());
        self.api.fetch_list(request, Entity::RegistrationForm).await
    }

    /// Record council approval dates. The upload timestamp is set to now.
    pub async fn update_approvals(&self, id: i64, dates: &ApprovalDates) -> Outcome<RegistrationFormDto> {
        let request =
            ApiRequest::put(format!("/RegistrationForms/{id}")).json(dates.body(id, Utc::now()));
        self.api
            .submit_as(request, Entity::RegistrationForm, Action::Update)
            .await
    }

    pub async fn delete(&self, id: i64) -> Outcome<()> {
        let request = ApiRequest::delete(format!("/RegistrationForms/{id}"));
        self.api.remove(request, Entity::RegistrationForm).await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::*;
    use crate::error::FailureKind;
    use crate::transport::RequestBody;
    use crate::transport::mock::{MockTransport, test_client};

    #[tokio::test]
    async fn test_list_requires_envelope_success() {
        let (api, _) = test_client(
            MockTransport::new().respond_json(200, json!({"succeeded": false, "message": "فشل"})),
        );
        let failure = RegistrationFormService::new(api)
            .list(&FormFilter::default())
            .await
            .unwrap_err();
        assert_eq!(failure.kind, FailureKind::Rejected);
        assert_eq!(failure.message, "فشل");
    }

    #[tokio::test]
    async fn test_update_approvals_body() {
        let (api, mock) = test_client(MockTransport::new().respond_json(200, json!({"succeeded": true})));
        RegistrationFormService::new(api)
            .update_approvals(
                5,
                &ApprovalDates {
                    department_council: Some("2024-10-01".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let request = mock.last_request().unwrap();
        assert!(request.url.as_str().ends_with("/RegistrationForms/5"));
        let RequestBody::Json(body) = request.body else {
            panic!("expected JSON body");
        };
        assert_eq!(body["departmentCouncilApprovalDate"], "2024-10-01");
        assert_eq!(body["collegeCouncilApprovalDate"], Value::Null);
        assert!(body["fileUploadDate"].as_str().is_some());
    }
}
