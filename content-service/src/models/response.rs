//! The fixed-shape success body. Field names are part of the public contract.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationResponse {
    pub content_packages: Vec<ContentPackage>,
    pub compliance_report: ComplianceReport,
    pub seo_analysis: SeoAnalysis,
    pub generation_metadata: GenerationMetadata,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentPackage {
    pub platform: String,
    pub content: ContentBody,
    pub metadata: ContentMetadata,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentBody {
    pub title: String,
    pub body: String,
    pub hashtags: Vec<String>,
    pub call_to_action: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentMetadata {
    /// Length of the body in UTF-16 code units.
    pub character_count: usize,
    /// Minutes, at 500 characters per minute, rounded up.
    pub estimated_reading_time: usize,
    pub platform_categories: Vec<String>,
    pub seo_score: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceReport {
    pub overall_compliance: String,
    pub mfds_compliance: bool,
    pub mohw_compliance: bool,
    pub kftc_compliance: bool,
    pub medical_act_compliance: bool,
    pub violations: Vec<String>,
    pub required_disclaimers: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeoAnalysis {
    pub naver_seo_score: u32,
    pub google_seo_score: u32,
    pub keyword_analysis: KeywordAnalysis,
    pub readability_score: u32,
    pub engagement_prediction: EngagementPrediction,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordAnalysis {
    pub primary_keywords: Vec<KeywordMetric>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordMetric {
    pub keyword: String,
    pub density: f64,
    pub position: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngagementPrediction {
    pub expected_ctr: f64,
    pub expected_engagement_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationMetadata {
    pub request_id: String,
    pub timestamp: String,
    pub processing_time: f64,
    pub model_version: String,
    pub content_safety_check: ContentSafetyCheck,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentSafetyCheck {
    pub passed: bool,
    pub flags: Vec<String>,
}
