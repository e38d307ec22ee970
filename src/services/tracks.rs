// src/services/tracks.rs

//! Track (msar) service.
//!
//! Create and update send a nested `degree` object and the department's
//! display name, which is resolved through the cached departments lookup.
//! A failed name lookup does not block the request; the name is sent empty.

use crate::client::{ApiClient, ApiRequest};
use crate::error::Outcome;
use crate::models::{Action, Entity, LookupItem, TrackDto, TrackInput};
use crate::services::LookupService;

pub struct TrackService {
    api: ApiClient,
    lookups: LookupService,
}

impl TrackService {
    pub fn new(api: ApiClient, lookups: LookupService) -> Self {
        Self { api, lookups }
    }

    pub async fn get_all(&self) -> Outcome<Vec<TrackDto>> {
        self.api.fetch_list(ApiRequest::get("/Msar"), Entity::Track).await
    }

    /// Tracks of one degree as lookup items, uncached.
    pub async fn by_degree(&self, degree_id: i64) -> Outcome<Vec<LookupItem>> {
        let request = ApiRequest::get("/Lookups/GetMsaratByDegreeId").query("id", degree_id);
        self.api.fetch_list(request, Entity::Track).await
    }

    pub async fn create(&self, track: &TrackInput) -> Outcome<TrackDto> {
        let department_name = self.lookups.department_name(track.department_id).await;
        let request = ApiRequest::post("/Msar").json(track.body(None, &department_name));
        let reply = self
            .api
            .submit_as(request, Entity::Track, Action::Create)
            .await?;
        self.lookups.invalidate_tracks();
        Ok(reply)
    }

    pub async fn update(&self, id: i64, track: &TrackInput) -> Outcome<TrackDto> {
        let department_name = self.lookups.department_name(track.department_id).await;
        let request = ApiRequest::put(format!("/Msar/{id}")).json(track.body(Some(id), &department_name));
        let reply = self
            .api
            .submit_as(request, Entity::Track, Action::Update)
            .await?;
        self.lookups.invalidate_tracks();
        Ok(reply)
    }

    pub async fn delete(&self, id: i64) -> Outcome<()> {
        let request = ApiRequest::delete(format!("/Msar/{id}"));
        let reply = self.api.remove(request, Entity::Track).await?;
        self.lookups.invalidate_tracks();
        Ok(reply)
    }
}
