// src/services/lookups.rs

//! Lookup lists, served through the shared [`LookupCache`].

use std::sync::Arc;
use std::time::Duration;

use crate::cascade::LookupCache;
use crate::client::{ApiClient, ApiRequest};
use crate::error::{Failure, Outcome};
use crate::models::{Entity, LookupItem, LookupKind};

/// Key of one cached lookup list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LookupKey {
    Kind(LookupKind),
    DegreesOfDepartment(i64),
    TracksOfDegree(i64),
}

pub type SharedLookupCache = Arc<LookupCache<LookupKey, Vec<LookupItem>>>;

/// Service for lookup lists.
#[derive(Clone)]
pub struct LookupService {
    api: ApiClient,
    cache: SharedLookupCache,
}

impl LookupService {
    /// Create a service with its own cache.
    pub fn new(api: ApiClient, ttl: Option<Duration>) -> Self {
        Self::with_cache(api, Arc::new(LookupCache::new(ttl)))
    }

    /// Create a service over an existing cache.
    pub fn with_cache(api: ApiClient, cache: SharedLookupCache) -> Self {
        Self { api, cache }
    }

    pub fn cache(&self) -> &SharedLookupCache {
        &self.cache
    }

    fn request(key: LookupKey) -> (ApiRequest, Entity) {
        match key {
            LookupKey::Kind(kind) => (
                ApiRequest::get(format!("/Lookups/{}", kind.path_segment())),
                Entity::Lookup,
            ),
            LookupKey::DegreesOfDepartment(id) => (
                ApiRequest::get(format!("/Degree/by-department/{id}")),
                Entity::Degree,
            ),
            LookupKey::TracksOfDegree(id) => (
                ApiRequest::get("/Lookups/GetMsaratByDegreeId").query("id", id),
                Entity::Track,
            ),
        }
    }

    /// Fetch a list straight from the API, bypassing the cache.
    pub async fn fetch(&self, key: LookupKey) -> Outcome<Vec<LookupItem>> {
        let (request, entity) = Self::request(key);
        self.api.fetch_list(request, entity).await
    }

    /// Cached list for `key`.
    pub async fn get(&self, key: LookupKey) -> Result<Arc<Vec<LookupItem>>, Failure> {
        let service = self.clone();
        self.cache
            .get_or_load(key, move || async move {
                service.fetch(key).await.map(|reply| reply.data)
            })
            .await
    }

    pub async fn kind(&self, kind: LookupKind) -> Result<Arc<Vec<LookupItem>>, Failure> {
        self.get(LookupKey::Kind(kind)).await
    }

    pub async fn degrees_of_department(
        &self,
        department_id: i64,
    ) -> Result<Arc<Vec<LookupItem>>, Failure> {
        self.get(LookupKey::DegreesOfDepartment(department_id)).await
    }

    pub async fn tracks_of_degree(&self, degree_id: i64) -> Result<Arc<Vec<LookupItem>>, Failure> {
        self.get(LookupKey::TracksOfDegree(degree_id)).await
    }

    /// Display name of a department, or empty when it cannot be resolved.
    pub async fn department_name(&self, department_id: i64) -> String {
        match self.kind(LookupKind::Departments).await {
            Ok(items) => items
                .iter()
                .find(|item| item.id == department_id)
                .map(|item| item.value.clone())
                .unwrap_or_default(),
            Err(failure) => {
                log::warn!("Department name lookup failed: {failure}");
                String::new()
            }
        }
    }

    pub fn invalidate(&self, key: LookupKey) {
        self.cache.invalidate(&key);
    }

    /// Drop every cached degree list.
    pub fn invalidate_degrees(&self) {
        self.cache.invalidate_where(|key| {
            matches!(
                key,
                LookupKey::DegreesOfDepartment(_) | LookupKey::Kind(LookupKind::Degrees)
            )
        });
    }

    /// Drop every cached track list.
    pub fn invalidate_tracks(&self) {
        self.cache
            .invalidate_where(|key| matches!(key, LookupKey::TracksOfDegree(_)));
    }

    pub fn invalidate_all(&self) {
        self.cache.clear();
    }
}
