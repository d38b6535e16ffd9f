//! Template record and the request/response DTOs of the catalog API.

pub mod requests;
pub mod responses;
pub mod template;

// Re-export commonly used types
pub use requests::{SearchParams, TemplateQueryParams};
pub use responses::{
    ClearResponse, ErrorResponse, HealthResponse, MessageResponse, StatsResponse,
};
pub use template::{Category, ColorScheme, Difficulty, Layout, ResumeTemplate};
