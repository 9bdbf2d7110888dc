pub mod traits;
pub mod types;
pub mod work_code_service;

pub use traits::{CreateService, CrudService, DeleteService, GetService, ListService, UpdateService};
pub use types::{ListParams, ServiceError};
pub use work_code_service::WorkCodeService;
