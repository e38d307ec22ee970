// src/services/institutions.rs

//! College and university services.

use crate::client::{ApiClient, ApiRequest};
use crate::error::Outcome;
use crate::models::{Action, CollegeDto, CollegeInput, Entity, LookupKind, UniversityDto, university_body};
use crate::services::{LookupKey, LookupService};

pub struct CollegeService {
    api: ApiClient,
    lookups: LookupService,
}

impl CollegeService {
    pub fn new(api: ApiClient, lookups: LookupService) -> Self {
        Self { api, lookups }
    }

    pub async fn get_all(&self) -> Outcome<Vec<CollegeDto>> {
        self.api.fetch_list(ApiRequest::get("/College"), Entity::College).await
    }

    pub async fn create(&self, college: &CollegeInput) -> Outcome<CollegeDto> {
        let request = ApiRequest::post("/College").json(college.body(None));
        let reply = self.api.submit_as(request, Entity::College, Action::Create).await?;
        self.lookups.invalidate(LookupKey::Kind(LookupKind::Colleges));
        Ok(reply)
    }

    pub async fn update(&self, id: i64, college: &CollegeInput) -> Outcome<CollegeDto> {
        let request = ApiRequest::put(format!("/College/{id}")).json(college.body(Some(id)));
        let reply = self.api.submit_as(request, Entity::College, Action::Update).await?;
        self.lookups.invalidate(LookupKey::Kind(LookupKind::Colleges));
        Ok(reply)
    }

    pub async fn delete(&self, id: i64) -> Outcome<()> {
        let reply = self
            .api
            .remove(ApiRequest::delete(format!("/College/{id}")), Entity::College)
            .await?;
        self.lookups.invalidate(LookupKey::Kind(LookupKind::Colleges));
        Ok(reply)
    }
}

pub struct UniversityService {
    api: ApiClient,
    lookups: LookupService,
}

impl UniversityService {
    pub fn new(api: ApiClient, lookups: LookupService) -> Self {
        Self { api, lookups }
    }

    pub async fn get_all(&self) -> Outcome<Vec<UniversityDto>> {
        self.api
            .fetch_list(ApiRequest::get("/University"), Entity::University)
            .await
    }

    pub async fn create(&self, name: &str) -> Outcome<UniversityDto> {
        let request = ApiRequest::post("/University").json(university_body(name, None));
        let reply = self
            .api
            .submit_as(request, Entity::University, Action::Create)
            .await?;
        self.lookups.invalidate(LookupKey::Kind(LookupKind::Universities));
        Ok(reply)
    }

    pub async fn update(&self, id: i64, name: &str) -> Outcome<UniversityDto> {
        let request = ApiRequest::put(format!("/University/{id}")).json(university_body(name, Some(id)));
        let reply = self
            .api
            .submit_as(request, Entity::University, Action::Update)
            .await?;
        self.lookups.invalidate(LookupKey::Kind(LookupKind::Universities));
        Ok(reply)
    }

    pub async fn delete(&self, id: i64) -> Outcome<()> {
        let reply = self
            .api
            .remove(ApiRequest::delete(format!("/University/{id}")), Entity::University)
            .await?;
        self.lookups.invalidate(LookupKey::Kind(LookupKind::Universities));
        Ok(reply)
    }
}
