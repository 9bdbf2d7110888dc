use crate::core::services::types::{ListParams, ServiceError};
use async_trait::async_trait;

/// Trait for services that can list resources
#[async_trait]
pub trait ListService<T> {
    /// List all resources matching the given parameters
    async fn list(&self, params: ListParams) -> Result<Vec<T>, ServiceError>;
}

/// Trait for services that can retrieve individual resources
#[async_trait]
pub trait GetService<T> {
    /// Get a single resource by ID
    async fn get(&self, id: u32) -> Result<T, ServiceError>;
}

/// Trait for services that can create resources
#[async_trait]
pub trait CreateService<T, CreateInput> {
    /// Create a new resource
    async fn create(&self, input: CreateInput) -> Result<T, ServiceError>;
}

/// Trait for services that can update resources
#[async_trait]
pub trait UpdateService<T, UpdateInput> {
    /// Update an existing resource
    async fn update(&self, id: u32, input: UpdateInput) -> Result<T, ServiceError>;
}

/// Trait for services that can delete resources
#[async_trait]
pub trait DeleteService {
    /// Delete a resource by ID
    async fn delete(&self, id: u32) -> Result<(), ServiceError>;
}

/// Combined CRUD trait for full resource management
#[async_trait]
pub trait CrudService<T, CreateInput, UpdateInput>:
    ListService<T>
    + GetService<T>
    + CreateService<T, CreateInput>
    + UpdateService<T, UpdateInput>
    + DeleteService
{
}
