//! Azure Computer Vision REST backend.
//!
//! Talks to the v2.0 describe and analyze operations with subscription-key
//! authentication. Local images go up as octet-stream bodies; remote images
//! as a JSON `{"url": ...}` body the service fetches itself.

use super::provider::{FeatureSet, ImageSource, VisionBackend};
use crate::config::{resolve_env_var, AzureConfig, API_KEY_VAR, ENDPOINT_VAR};
use crate::error::{VisionError, VisionResult};
use crate::types::ImageAnalysis;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Computer Vision backend over the Azure REST API.
#[derive(Debug)]
pub struct AzureVision {
    endpoint: String,
    api_key: String,
    client: reqwest::Client,
}

/// JSON body for analyzing a remote image.
#[derive(Serialize)]
struct ImageUrlBody<'a> {
    url: &'a str,
}

/// Lenient decoding of the two error shapes the service produces:
/// `{"error": {"code", "message"}}` for gateway errors (e.g., bad key)
/// and flat `{"code", "message"}` for ComputerVisionError responses.
#[derive(Deserialize)]
struct ApiErrorBody {
    code: Option<String>,
    message: Option<String>,
    error: Option<InnerError>,
}

#[derive(Deserialize)]
struct InnerError {
    code: Option<String>,
    message: Option<String>,
}

impl AzureVision {
    pub fn new(endpoint: &str, api_key: &str) -> Self {
        Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Build a backend from config, resolving `${ENV_VAR}` credential
    /// references. A missing credential fails here, before any network
    /// call is made.
    pub fn from_config(config: &AzureConfig) -> VisionResult<Self> {
        let endpoint = resolve_env_var(&config.endpoint).ok_or_else(|| {
            VisionError::MissingCredential {
                name: credential_name(&config.endpoint, ENDPOINT_VAR),
            }
        })?;
        let api_key = resolve_env_var(&config.api_key).ok_or_else(|| {
            VisionError::MissingCredential {
                name: credential_name(&config.api_key, API_KEY_VAR),
            }
        })?;
        Ok(Self::new(&endpoint, &api_key))
    }

    /// The resolved base endpoint this backend sends requests to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn operation_url(&self, operation: &str) -> String {
        format!("{}/vision/v2.0/{operation}", self.endpoint)
    }

    /// POST an image to an operation URL and decode the analysis response.
    async fn post(
        &self,
        url: String,
        query: &[(&str, String)],
        source: &ImageSource,
    ) -> VisionResult<ImageAnalysis> {
        let request = self
            .client
            .post(url.as_str())
            .query(query)
            .header("Ocp-Apim-Subscription-Key", &self.api_key);

        let request = match source {
            ImageSource::Bytes(bytes) => request
                .header(reqwest::header::CONTENT_TYPE, "application/octet-stream")
                .body(bytes.clone()),
            ImageSource::Url(image_url) => request.json(&ImageUrlBody { url: image_url }),
        };

        let response = request.send().await.map_err(|e| VisionError::Request {
            endpoint: url.clone(),
            message: e.to_string(),
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(decode_api_error(status.as_u16(), &body));
        }

        response.json().await.map_err(|e| VisionError::Decode {
            message: e.to_string(),
        })
    }
}

/// Map a non-success response to a typed API error, keeping the status
/// code intact for retry classification.
fn decode_api_error(status_code: u16, body: &str) -> VisionError {
    let (code, message) = match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(parsed) => {
            let (code, message) = match parsed.error {
                Some(inner) => (inner.code, inner.message),
                None => (parsed.code, parsed.message),
            };
            (
                code.unwrap_or_else(|| status_code.to_string()),
                message.unwrap_or_else(|| body.to_string()),
            )
        }
        Err(_) => (status_code.to_string(), body.to_string()),
    };
    VisionError::Api {
        status_code,
        code,
        message,
    }
}

/// Name to report for an unresolvable credential: the referenced env var
/// if the config value is an `${ENV_VAR}` reference, else the default var.
fn credential_name(value: &str, fallback: &str) -> String {
    if value.starts_with("${") && value.ends_with('}') {
        value[2..value.len() - 1].to_string()
    } else {
        fallback.to_string()
    }
}

#[async_trait]
impl VisionBackend for AzureVision {
    fn name(&self) -> &str {
        "azure"
    }

    async fn describe(
        &self,
        source: &ImageSource,
        max_candidates: u32,
    ) -> VisionResult<ImageAnalysis> {
        self.post(
            self.operation_url("describe"),
            &[("maxCandidates", max_candidates.to_string())],
            source,
        )
        .await
    }

    async fn analyze(
        &self,
        source: &ImageSource,
        features: &FeatureSet,
    ) -> VisionResult<ImageAnalysis> {
        self.post(
            self.operation_url("analyze"),
            &[("visualFeatures", features.to_query())],
            source,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vision::provider::VisualFeature;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const TEST_KEY: &str = "test-subscription-key";

    fn describe_body() -> serde_json::Value {
        json!({
            "description": {
                "tags": ["cat", "chair"],
                "captions": [{"text": "a cat sitting on a chair", "confidence": 0.96}]
            },
            "requestId": "req-1",
            "metadata": {"width": 640, "height": 480, "format": "Jpeg"}
        })
    }

    #[tokio::test]
    async fn test_describe_sends_key_and_octet_stream_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/vision/v2.0/describe"))
            .and(query_param("maxCandidates", "3"))
            .and(header("Ocp-Apim-Subscription-Key", TEST_KEY))
            .and(header("content-type", "application/octet-stream"))
            .respond_with(ResponseTemplate::new(200).set_body_json(describe_body()))
            .expect(1)
            .mount(&server)
            .await;

        let backend = AzureVision::new(&server.uri(), TEST_KEY);
        let source = ImageSource::Bytes(vec![0xFF, 0xD8, 0xFF, 0xE0]);
        let analysis = backend.describe(&source, 3).await.unwrap();

        let description = analysis.into_description().unwrap();
        assert_eq!(
            description.top_caption().unwrap().text,
            "a cat sitting on a chair"
        );
    }

    #[tokio::test]
    async fn test_analyze_remote_image_sends_url_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/vision/v2.0/analyze"))
            .and(query_param("visualFeatures", "Description,Tags"))
            .and(body_json(json!({"url": "https://example.com/landmark.jpg"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "description": {"tags": [], "captions": []},
                "tags": [{"name": "building", "confidence": 0.99}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let backend = AzureVision::new(&server.uri(), TEST_KEY);
        let source = ImageSource::Url("https://example.com/landmark.jpg".to_string());
        let features =
            FeatureSet::new(vec![VisualFeature::Description, VisualFeature::Tags]).unwrap();
        let analysis = backend.analyze(&source, &features).await.unwrap();

        assert_eq!(analysis.tags.unwrap()[0].name, "building");
    }

    #[tokio::test]
    async fn test_invalid_key_maps_to_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/vision/v2.0/describe"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "error": {
                    "code": "401",
                    "message": "Access denied due to invalid subscription key."
                }
            })))
            .mount(&server)
            .await;

        let backend = AzureVision::new(&server.uri(), "wrong-key");
        let source = ImageSource::Bytes(vec![1, 2, 3]);
        let err = backend.describe(&source, 1).await.unwrap_err();

        match err {
            VisionError::Api {
                status_code,
                code,
                message,
            } => {
                assert_eq!(status_code, 401);
                assert_eq!(code, "401");
                assert!(message.contains("invalid subscription key"));
            }
            other => panic!("Expected Api error, got: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_flat_error_shape_is_decoded() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/vision/v2.0/analyze"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "code": "InvalidImageSize",
                "message": "Input image is too large.",
                "requestId": "req-2"
            })))
            .mount(&server)
            .await;

        let backend = AzureVision::new(&server.uri(), TEST_KEY);
        let source = ImageSource::Bytes(vec![1, 2, 3]);
        let err = backend
            .analyze(&source, &FeatureSet::description())
            .await
            .unwrap_err();

        match err {
            VisionError::Api { code, message, .. } => {
                assert_eq!(code, "InvalidImageSize");
                assert!(message.contains("too large"));
            }
            other => panic!("Expected Api error, got: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_rate_limit_preserves_status_code() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/vision/v2.0/describe"))
            .respond_with(ResponseTemplate::new(429).set_body_string("Too Many Requests"))
            .mount(&server)
            .await;

        let backend = AzureVision::new(&server.uri(), TEST_KEY);
        let source = ImageSource::Bytes(vec![1, 2, 3]);
        let err = backend.describe(&source, 1).await.unwrap_err();

        match err {
            VisionError::Api { status_code, .. } => assert_eq!(status_code, 429),
            other => panic!("Expected Api error, got: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_malformed_success_body_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/vision/v2.0/describe"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let backend = AzureVision::new(&server.uri(), TEST_KEY);
        let source = ImageSource::Bytes(vec![1, 2, 3]);
        let err = backend.describe(&source, 1).await.unwrap_err();
        assert!(matches!(err, VisionError::Decode { .. }));
    }

    #[test]
    fn test_endpoint_trailing_slash_is_trimmed() {
        let backend = AzureVision::new("https://westus.api.cognitive.microsoft.com/", "key");
        assert_eq!(
            backend.endpoint(),
            "https://westus.api.cognitive.microsoft.com"
        );
    }

    #[test]
    fn test_from_config_missing_key_names_the_env_var() {
        let config = AzureConfig {
            endpoint: "https://westus.api.cognitive.microsoft.com".to_string(),
            api_key: "${GLIMPSE_TEST_UNSET_KEY_VAR}".to_string(),
        };
        let err = AzureVision::from_config(&config).unwrap_err();
        match err {
            VisionError::MissingCredential { name } => {
                assert_eq!(name, "GLIMPSE_TEST_UNSET_KEY_VAR");
            }
            other => panic!("Expected MissingCredential, got: {other:?}"),
        }
    }
}
