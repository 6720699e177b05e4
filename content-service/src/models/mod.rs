//! Wire types for the content generation endpoint.

pub mod envelope;
pub mod request;
pub mod response;

pub use envelope::{ErrorBody, ErrorCode, ErrorEnvelope};
pub use request::{GenerationRequest, HospitalInfo};
pub use response::{
    ComplianceReport, ContentBody, ContentMetadata, ContentPackage, ContentSafetyCheck,
    EngagementPrediction, GenerationMetadata, GenerationResponse, KeywordAnalysis,
    KeywordMetric, SeoAnalysis,
};
