// src/registrar.rs

//! Entry point bundling every service over one client and one lookup cache.

use std::sync::Arc;

use crate::cascade::{CascadeResolver, LookupCache};
use crate::client::ApiClient;
use crate::error::Result;
use crate::models::{Config, LocaleConfig};
use crate::services::{
    CollegeService, CourseService, DegreeService, DepartmentService, IntakeService, LookupService,
    RegistrationFormService, SharedLookupCache, StudentService, TrackService, UniversityService,
};
use crate::session::Session;
use crate::transport::Transport;

/// Handle to the registrar API.
#[derive(Clone)]
pub struct Registrar {
    api: ApiClient,
    cache: SharedLookupCache,
}

impl Registrar {
    /// Build over a real HTTP transport.
    pub fn new(config: &Config, locale: LocaleConfig, session: Session) -> Result<Self> {
        config.validate()?;
        let api = ApiClient::new(config.api.clone(), locale.messages, session)?;
        Ok(Self::from_client(api, config))
    }

    /// Build over a custom transport.
    pub fn with_transport(
        transport: Arc<dyn Transport>,
        config: &Config,
        locale: LocaleConfig,
        session: Session,
    ) -> Self {
        let api = ApiClient::with_transport(transport, config.api.clone(), locale.messages, session);
        Self::from_client(api, config)
    }

    fn from_client(api: ApiClient, config: &Config) -> Self {
        Self {
            api,
            cache: Arc::new(LookupCache::new(config.cache.ttl())),
        }
    }

    pub fn client(&self) -> &ApiClient {
        &self.api
    }

    pub fn lookups(&self) -> LookupService {
        LookupService::with_cache(self.api.clone(), self.cache.clone())
    }

    pub fn cascade(&self) -> CascadeResolver {
        CascadeResolver::new(self.lookups())
    }

    pub fn courses(&self) -> CourseService {
        CourseService::new(self.api.clone())
    }

    pub fn departments(&self) -> DepartmentService {
        DepartmentService::new(self.api.clone(), self.lookups())
    }

    pub fn degrees(&self) -> DegreeService {
        DegreeService::new(self.api.clone(), self.lookups())
    }

    pub fn tracks(&self) -> TrackService {
        TrackService::new(self.api.clone(), self.lookups())
    }

    pub fn intakes(&self) -> IntakeService {
        IntakeService::new(self.api.clone())
    }

    pub fn students(&self) -> StudentService {
        StudentService::new(self.api.clone())
    }

    pub fn registration_forms(&self) -> RegistrationFormService {
        RegistrationFormService::new(self.api.clone())
    }

    pub fn colleges(&self) -> CollegeService {
        CollegeService::new(self.api.clone(), self.lookups())
    }

    pub fn universities(&self) -> UniversityService {
        UniversityService::new(self.api.clone(), self.lookups())
    }
}
