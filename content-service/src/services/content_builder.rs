//! Shapes a completion into the [`GenerationResponse`] envelope.
//!
//! Scores, compliance flags, disclaimers and categories are fixed values.
//! Nothing here analyses the generated text beyond measuring its length.

use crate::models::{
    ComplianceReport, ContentBody, ContentMetadata, ContentPackage, ContentSafetyCheck,
    EngagementPrediction, GenerationMetadata, GenerationRequest, GenerationResponse,
    KeywordAnalysis, KeywordMetric, SeoAnalysis,
};
use chrono::{DateTime, SecondsFormat, Utc};

pub const PLATFORM: &str = "naver_blog";
pub const TITLE_SUFFIX: &str = "전문의가 알려드리는 정보";
pub const DEFAULT_CALL_TO_ACTION: &str = "전문의 상담 예약";
pub const PLATFORM_CATEGORIES: [&str; 2] = ["건강", "의료"];
pub const REQUIRED_DISCLAIMERS: [&str; 2] = [
    "개인에 따라 치료 결과가 다를 수 있습니다.",
    "정확한 진단을 위해서는 전문의와 상담하시기 바랍니다.",
];
pub const MODEL_VERSION: &str = "gpt-4-turbo";

const CHARACTERS_PER_MINUTE: usize = 500;
const SEO_SCORE: u32 = 85;
const NAVER_SEO_SCORE: u32 = 85;
const GOOGLE_SEO_SCORE: u32 = 82;
const READABILITY_SCORE: u32 = 78;
const KEYWORD_DENSITY: f64 = 2.1;
const KEYWORD_POSITION: &str = "title";
const EXPECTED_CTR: f64 = 3.2;
const EXPECTED_ENGAGEMENT_RATE: f64 = 5.8;
const PROCESSING_TIME: f64 = 2.5;

/// Per-response identity: request id and creation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationStamp {
    pub request_id: String,
    pub timestamp: String,
}

impl GenerationStamp {
    pub fn now() -> Self {
        Self::at(Utc::now())
    }

    /// `req_<unix millis>` and an ISO-8601 UTC timestamp with milliseconds.
    pub fn at(instant: DateTime<Utc>) -> Self {
        Self {
            request_id: format!("req_{}", instant.timestamp_millis()),
            timestamp: iso_timestamp(instant),
        }
    }
}

pub fn iso_timestamp(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Build the success body for `request` around the generated `body`.
pub fn build_response(
    request: &GenerationRequest,
    body: &str,
    stamp: GenerationStamp,
) -> GenerationResponse {
    let keywords = &request.ophthalmology_keywords;
    let character_count = body.encode_utf16().count();

    let call_to_action = match request.hospital_name() {
        Some(name) => format!("{} 상담 예약", name),
        None => DEFAULT_CALL_TO_ACTION.to_string(),
    };

    GenerationResponse {
        content_packages: vec![ContentPackage {
            platform: PLATFORM.to_string(),
            content: ContentBody {
                title: format!("{} {} - {}", request.region, keywords.join(", "), TITLE_SUFFIX),
                body: body.to_string(),
                hashtags: keywords.iter().map(|k| format!("#{}", k)).collect(),
                call_to_action,
            },
            metadata: ContentMetadata {
                character_count,
                estimated_reading_time: character_count.div_ceil(CHARACTERS_PER_MINUTE),
                platform_categories: to_strings(&PLATFORM_CATEGORIES),
                seo_score: SEO_SCORE,
            },
        }],
        compliance_report: ComplianceReport {
            overall_compliance: "compliant".to_string(),
            mfds_compliance: true,
            mohw_compliance: true,
            kftc_compliance: true,
            medical_act_compliance: true,
            violations: Vec::new(),
            required_disclaimers: to_strings(&REQUIRED_DISCLAIMERS),
        },
        seo_analysis: SeoAnalysis {
            naver_seo_score: NAVER_SEO_SCORE,
            google_seo_score: GOOGLE_SEO_SCORE,
            keyword_analysis: KeywordAnalysis {
                primary_keywords: keywords
                    .iter()
                    .map(|keyword| KeywordMetric {
                        keyword: keyword.clone(),
                        density: KEYWORD_DENSITY,
                        position: KEYWORD_POSITION.to_string(),
                    })
                    .collect(),
            },
            readability_score: READABILITY_SCORE,
            engagement_prediction: EngagementPrediction {
                expected_ctr: EXPECTED_CTR,
                expected_engagement_rate: EXPECTED_ENGAGEMENT_RATE,
            },
        },
        generation_metadata: GenerationMetadata {
            request_id: stamp.request_id,
            timestamp: stamp.timestamp,
            processing_time: PROCESSING_TIME,
            model_version: MODEL_VERSION.to_string(),
            content_safety_check: ContentSafetyCheck {
                passed: true,
                flags: Vec::new(),
            },
        },
    }
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}
