use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of `POST /api/generate-content`.
///
/// Missing fields deserialize to empty values so that "absent" and "empty"
/// fail the same validation rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct GenerationRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "prompt is required"))]
    pub prompt: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "region is required"))]
    pub region: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "at least one keyword is required"))]
    pub ophthalmology_keywords: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hospital_info: Option<HospitalInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HospitalInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl GenerationRequest {
    /// Decode and validate a raw request body.
    ///
    /// The error string describes what was wrong for logging; callers answer
    /// with a fixed message regardless.
    pub fn from_body(body: &[u8]) -> Result<Self, String> {
        let request: GenerationRequest =
            serde_json::from_slice(body).map_err(|e| format!("invalid JSON body: {}", e))?;
        request.validate().map_err(|e| e.to_string())?;
        Ok(request)
    }

    /// Hospital name when one was supplied and is not blank.
    pub fn hospital_name(&self) -> Option<&str> {
        self.hospital_info
            .as_ref()
            .and_then(|info| info.name.as_deref())
            .filter(|name| !name.is_empty())
    }
}
