use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationCreateRequest {
    #[validate(length(min = 1))]
    pub job_id: String,
    pub cover_letter: Option<String>,
    pub resume_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resume_is_optional_and_omitted_fields_serialize_as_null() {
        let req = ApplicationCreateRequest {
            job_id: "j1".into(),
            cover_letter: Some("I would like to apply".into()),
            resume_url: None,
        };
        assert!(req.validate().is_ok());
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["jobId"], "j1");
        assert!(json["resumeUrl"].is_null());
    }
}
