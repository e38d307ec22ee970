// src/services/intakes.rs

//! Intake (academic year) service.

use crate::client::{ApiClient, ApiRequest};
use crate::error::Outcome;
use crate::models::{Action, Entity, IntakeDto, IntakeUpdate, NewIntake};

pub struct IntakeService {
    api: ApiClient,
}

impl IntakeService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn get_all(&self) -> Outcome<Vec<IntakeDto>> {
        self.api.fetch_list(ApiRequest::get("/Intake"), Entity::Intake).await
    }

    pub async fn create(&self, intake: &NewIntake) -> Outcome<IntakeDto> {
        let request = ApiRequest::post("/Intake").json_of(intake)?;
        self.api.submit_as(request, Entity::Intake, Action::Create).await
    }

    pub async fn update(&self, intake: &IntakeUpdate) -> Outcome<IntakeDto> {
        let request = ApiRequest::put(format!("/Intake/{}", intake.id)).json(intake.body());
        self.api.submit_as(request, Entity::Intake, Action::Update).await
    }

    pub async fn delete(&self, id: i64) -> Outcome<()> {
        self.api
            .remove(ApiRequest::delete(format!("/Intake/{id}")), Entity::Intake)
            .await
    }
}
