use crate::api::client::WorkCodeClient;
use crate::api::models::{WorkCode, WorkCodeDraft, WorkCodePayload};
use crate::core::fields::{FieldConfig, default_field_config, visible_field_names};
use crate::core::filter::filter_records;
use crate::core::notify::{ChangeNotifier, RecordEvent};
use crate::core::rate_limit::{RateLimiter, RateLimiterState};
use crate::core::services::traits::{
    CreateService, CrudService, DeleteService, GetService, ListService, UpdateService,
};
use crate::core::services::types::{ListParams, ServiceError};
use crate::core::validation::{sanitize_draft, validate_draft};
use crate::error::ApiError;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

const SUBMIT_WINDOW: Duration = Duration::from_secs(10);
const SUBMIT_MAX_EVENTS: usize = 5;

/// Work-code service: CRUD against the backend with the local validation,
/// filtering, rate-limit, and notification pieces wired in front of it.
pub struct WorkCodeService {
    client: WorkCodeClient,
    field_config: HashMap<String, FieldConfig>,
    limiter: RateLimiter,
    limiter_state: Mutex<RateLimiterState>,
    notifier: ChangeNotifier,
}

impl WorkCodeService {
    /// Create a service with the default field configuration. The notifier
    /// is supplied by the caller so observers outlive no hidden singleton.
    pub fn new(client: WorkCodeClient, notifier: ChangeNotifier) -> Self {
        Self::with_field_config(client, notifier, default_field_config())
    }

    pub fn with_field_config(
        client: WorkCodeClient,
        notifier: ChangeNotifier,
        field_config: HashMap<String, FieldConfig>,
    ) -> Self {
        Self {
            client,
            field_config,
            limiter: RateLimiter::new(SUBMIT_WINDOW, SUBMIT_MAX_EVENTS),
            limiter_state: Mutex::new(RateLimiterState::default()),
            notifier,
        }
    }

    pub fn field_config(&self) -> &HashMap<String, FieldConfig> {
        &self.field_config
    }

    /// Validate and sanitize a draft, returning the cleaned draft or the
    /// offending field's display label as a service error.
    fn checked_draft(&self, draft: &WorkCodeDraft) -> Result<WorkCodeDraft, ServiceError> {
        let clean = sanitize_draft(draft);
        let outcome = validate_draft(&clean, &self.field_config);
        if !outcome.is_valid {
            return Err(ServiceError::Validation {
                field: outcome
                    .missing_or_invalid_field
                    .unwrap_or_else(|| "unknown".to_string()),
            });
        }
        Ok(clean)
    }

    /// Admit one submission through the sliding window, or reject.
    fn admit_submission(&self) -> Result<(), ServiceError> {
        let mut state = self
            .limiter_state
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let (next, admitted) = self.limiter.admit(&state, Instant::now());
        *state = next;

        if admitted {
            Ok(())
        } else {
            Err(ServiceError::RateLimited {
                window_secs: self.limiter.window_secs(),
            })
        }
    }

    fn map_not_found(error: ApiError, id: u32) -> ServiceError {
        match error {
            ApiError::Http { status: 404, .. } => ServiceError::NotFound {
                resource_type: "work code".to_string(),
                id,
            },
            other => ServiceError::Api(other),
        }
    }
}

#[async_trait]
impl ListService<WorkCode> for WorkCodeService {
    async fn list(&self, params: ListParams) -> Result<Vec<WorkCode>, ServiceError> {
        let records = self.client.list_work_codes().await?;

        let visible = visible_field_names(&self.field_config);
        let mut records = match params.search.as_deref() {
            Some(query) => filter_records(records, query, &visible),
            None => records,
        };

        if let Some(limit) = params.limit {
            records.truncate(limit as usize);
        }
        Ok(records)
    }
}

#[async_trait]
impl GetService<WorkCode> for WorkCodeService {
    async fn get(&self, id: u32) -> Result<WorkCode, ServiceError> {
        self.client
            .get_work_code(id)
            .await
            .map_err(|e| Self::map_not_found(e, id))
    }
}

#[async_trait]
impl CreateService<WorkCode, WorkCodeDraft> for WorkCodeService {
    async fn create(&self, input: WorkCodeDraft) -> Result<WorkCode, ServiceError> {
        let draft = self.checked_draft(&input)?;
        self.admit_submission()?;

        let payload = WorkCodePayload::from_draft(&draft);
        let created = self.client.create_work_code(&payload).await?;
        self.notifier.emit(RecordEvent::Created(created.id));
        Ok(created)
    }
}

#[async_trait]
impl UpdateService<WorkCode, WorkCodeDraft> for WorkCodeService {
    async fn update(&self, id: u32, input: WorkCodeDraft) -> Result<WorkCode, ServiceError> {
        let draft = self.checked_draft(&input)?;
        self.admit_submission()?;

        let payload = WorkCodePayload::from_draft(&draft);
        let updated = self
            .client
            .update_work_code(id, &payload)
            .await
            .map_err(|e| Self::map_not_found(e, id))?;
        self.notifier.emit(RecordEvent::Updated(updated.id));
        Ok(updated)
    }
}

#[async_trait]
impl DeleteService for WorkCodeService {
    async fn delete(&self, id: u32) -> Result<(), ServiceError> {
        self.client
            .delete_work_code(id)
            .await
            .map_err(|e| Self::map_not_found(e, id))?;
        self.notifier.emit(RecordEvent::Deleted(id));
        Ok(())
    }
}

impl CrudService<WorkCode, WorkCodeDraft, WorkCodeDraft> for WorkCodeService {}
