use std::env;

use reqwest::blocking::multipart::{Form, Part};
use reqwest::blocking::{Client, Response};
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use serde::Deserialize;

use crate::recognition::domain::vision_client::{VisionClient, VisionError};
use crate::shared::bounding_box::BoundingBox;
use crate::shared::celebrity::Celebrity;
use crate::shared::comparison::ComparisonResult;
use crate::shared::constants::{API_KEY_ENV, ENDPOINT_ENV};

const RECOGNIZE_OP: &str = "celebrity recognition";
const COMPARE_OP: &str = "face comparison";

/// Connection settings for the recognition service.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub endpoint: String,
    pub api_key: Option<String>,
}

impl ClientConfig {
    /// Endpoint from the caller, API key from the environment.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_key: env::var(API_KEY_ENV).ok(),
        }
    }

    /// Both endpoint and API key from the environment.
    /// `None` when `LIMELIGHT_ENDPOINT` is unset.
    pub fn from_env() -> Option<Self> {
        env::var(ENDPOINT_ENV).ok().map(Self::new)
    }
}

/// Blocking HTTP adapter for the recognition and comparison endpoints.
pub struct HttpVisionClient {
    http: Client,
    endpoint: String,
    api_key: Option<String>,
}

impl HttpVisionClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: Client::new(),
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            api_key: config.api_key,
        }
    }

    fn post(&self, path: &str) -> reqwest::blocking::RequestBuilder {
        let mut request = self.http.post(format!("{}{path}", self.endpoint));
        if let Some(key) = &self.api_key {
            request = request.header("x-api-key", key);
        }
        request
    }
}

impl VisionClient for HttpVisionClient {
    fn recognize_celebrities(&self, image: &[u8]) -> Result<Vec<Celebrity>, VisionError> {
        let response = self
            .post("/v1/celebrities/recognize")
            .header(CONTENT_TYPE, "application/octet-stream")
            .body(image.to_vec())
            .send()
            .map_err(|e| transport(RECOGNIZE_OP, e))?;

        let response = check_status(RECOGNIZE_OP, response)?;
        let payload: RecognizeResponse =
            response.json().map_err(|e| transport(RECOGNIZE_OP, e))?;

        Ok(payload
            .celebrity_faces
            .into_iter()
            .map(|face| Celebrity::from_wire(face.bounding_box, face.name, face.match_confidence))
            .collect())
    }

    fn compare_faces(
        &self,
        source: &[u8],
        target: &[u8],
    ) -> Result<ComparisonResult, VisionError> {
        let form = Form::new()
            .part("source", octet_part(source.to_vec())?)
            .part("target", octet_part(target.to_vec())?);

        let response = self
            .post("/v1/faces/compare")
            .multipart(form)
            .send()
            .map_err(|e| transport(COMPARE_OP, e))?;

        let response = check_status(COMPARE_OP, response)?;
        response.json().map_err(|e| transport(COMPARE_OP, e))
    }
}

#[derive(Deserialize)]
struct RecognizeResponse {
    #[serde(default)]
    celebrity_faces: Vec<WireFace>,
}

#[derive(Deserialize)]
struct WireFace {
    bounding_box: BoundingBox,
    name: Option<String>,
    match_confidence: Option<f64>,
}

#[derive(Deserialize)]
struct ErrorPayload {
    code: String,
    message: String,
}

fn transport(operation: &'static str, source: reqwest::Error) -> VisionError {
    VisionError::Transport {
        operation,
        source: Box::new(source),
    }
}

fn check_status(operation: &'static str, response: Response) -> Result<Response, VisionError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().unwrap_or_default();
    let (code, message) = parse_error_payload(status, &body);
    Err(VisionError::Service {
        operation,
        code,
        message,
    })
}

/// Falls back to the HTTP status and raw body when the service
/// didn't send a structured `{"code", "message"}` payload.
fn parse_error_payload(status: StatusCode, body: &str) -> (String, String) {
    match serde_json::from_str::<ErrorPayload>(body) {
        Ok(payload) => (payload.code, payload.message),
        Err(_) => (status.as_u16().to_string(), body.to_string()),
    }
}

fn octet_part(bytes: Vec<u8>) -> Result<Part, VisionError> {
    Part::bytes(bytes)
        .mime_str("application/octet-stream")
        .map_err(|e| transport(COMPARE_OP, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_recognize_response_decodes_faces() {
        let payload: RecognizeResponse = serde_json::from_str(
            r#"{"celebrity_faces": [{
                "bounding_box": {"left": 0.1, "top": 0.2, "width": 0.3, "height": 0.4},
                "name": "Grace Hopper",
                "match_confidence": 98.7
            }]}"#,
        )
        .unwrap();

        assert_eq!(payload.celebrity_faces.len(), 1);
        let face = &payload.celebrity_faces[0];
        assert_eq!(face.name.as_deref(), Some("Grace Hopper"));
        assert_relative_eq!(face.match_confidence.unwrap(), 98.7);
    }

    #[test]
    fn test_recognize_response_tolerates_missing_optionals() {
        let payload: RecognizeResponse = serde_json::from_str(
            r#"{"celebrity_faces": [{
                "bounding_box": {"left": 0.1, "top": 0.2, "width": 0.3, "height": 0.4}
            }]}"#,
        )
        .unwrap();

        let face = &payload.celebrity_faces[0];
        let celebrity =
            Celebrity::from_wire(face.bounding_box, face.name.clone(), face.match_confidence);
        assert_eq!(celebrity.name, "");
        assert_relative_eq!(celebrity.match_confidence, 0.0);
    }

    #[test]
    fn test_empty_response_body_is_no_celebrities() {
        let payload: RecognizeResponse = serde_json::from_str("{}").unwrap();
        assert!(payload.celebrity_faces.is_empty());
    }

    #[test]
    fn test_error_payload_parses_structured_body() {
        let (code, message) = parse_error_payload(
            StatusCode::BAD_REQUEST,
            r#"{"code": "InvalidImage", "message": "unsupported format"}"#,
        );
        assert_eq!(code, "InvalidImage");
        assert_eq!(message, "unsupported format");
    }

    #[test]
    fn test_error_payload_falls_back_to_status_and_body() {
        let (code, message) = parse_error_payload(StatusCode::SERVICE_UNAVAILABLE, "throttled");
        assert_eq!(code, "503");
        assert_eq!(message, "throttled");
    }

    #[test]
    fn test_config_endpoint_trailing_slash_trimmed() {
        let client = HttpVisionClient::new(ClientConfig {
            endpoint: "http://vision.local/".to_string(),
            api_key: None,
        });
        assert_eq!(client.endpoint, "http://vision.local");
    }
}
