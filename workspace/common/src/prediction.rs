//! Wire types exchanged with the prediction service, plus the form record
//! they are built from.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, trace};
use validator::Validate;

use crate::error::{InputError, PredictionError};

/// Form field names, in the order the model expects its features.
pub const FEATURE_ORDER: [&str; 5] = ["temperature", "cloud_cover", "humidity", "hour", "month"];

const SUCCESS_STATUS: &str = "success";

/// Raw field values exactly as typed into the prediction form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PredictionForm {
    pub temperature: String,
    pub cloud_cover: String,
    pub humidity: String,
    pub hour: String,
    pub month: String,
}

impl PredictionForm {
    /// Parses and range-checks every field. The first failing field, in
    /// feature order, is reported.
    pub fn parse(&self) -> Result<PredictionInput, InputError> {
        trace!(form = ?self, "Parsing prediction form");
        let input = PredictionInput {
            temperature: parse_float("temperature", &self.temperature)?,
            cloud_cover: parse_float("cloud_cover", &self.cloud_cover)?,
            humidity: parse_float("humidity", &self.humidity)?,
            hour: parse_integer("hour", &self.hour)?,
            month: parse_integer("month", &self.month)?,
        };
        input.check()?;
        debug!(?input, "Prediction form parsed");
        Ok(input)
    }
}

fn parse_float(field: &'static str, raw: &str) -> Result<f64, InputError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(InputError::Missing { field });
    }
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(InputError::NotANumber {
            field,
            value: raw.to_string(),
        }),
    }
}

fn parse_integer(field: &'static str, raw: &str) -> Result<i32, InputError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(InputError::Missing { field });
    }
    if let Ok(value) = raw.parse::<i32>() {
        return Ok(value);
    }
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => Err(InputError::NotAnInteger {
            field,
            value: raw.to_string(),
        }),
        _ => Err(InputError::NotANumber {
            field,
            value: raw.to_string(),
        }),
    }
}

/// Request body of `POST /predict`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
pub struct PredictionInput {
    /// Air temperature in °C
    #[validate(range(min = -10.0, max = 50.0, message = "Temperature must be between -10°C and 50°C"))]
    pub temperature: f64,
    /// Cloud cover in percent
    #[validate(range(min = 0.0, max = 100.0, message = "Cloud cover must be between 0% and 100%"))]
    pub cloud_cover: f64,
    /// Relative humidity in percent
    #[validate(range(min = 0.0, max = 100.0, message = "Humidity must be between 0% and 100%"))]
    pub humidity: f64,
    /// Hour of day, 0-23
    #[validate(range(min = 0, max = 23, message = "Hour must be between 0 and 23"))]
    pub hour: i32,
    /// Month, 1-12
    #[validate(range(min = 1, max = 12, message = "Month must be between 1 and 12"))]
    pub month: i32,
}

impl PredictionInput {
    pub fn new(temperature: f64, cloud_cover: f64, humidity: f64, hour: i32, month: i32) -> Self {
        Self {
            temperature,
            cloud_cover,
            humidity,
            hour,
            month,
        }
    }

    /// Rejects non-finite values and anything outside the model's ranges.
    pub fn check(&self) -> Result<(), InputError> {
        for (field, value) in [
            ("temperature", self.temperature),
            ("cloud_cover", self.cloud_cover),
            ("humidity", self.humidity),
        ] {
            if !value.is_finite() {
                return Err(InputError::NotANumber {
                    field,
                    value: value.to_string(),
                });
            }
        }

        let Err(errors) = self.validate() else {
            return Ok(());
        };

        let field_errors = errors.field_errors();
        for field in FEATURE_ORDER {
            if let Some(error) = field_errors.get(field).and_then(|errs| errs.first()) {
                let message = error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is out of range", field));
                return Err(InputError::OutOfRange { field, message });
            }
        }

        Err(InputError::OutOfRange {
            field: "form",
            message: errors.to_string(),
        })
    }
}

/// Body of a `/predict` reply. Both the success and the failure shape decode
/// into this one struct; [`PredictionResponse::into_irradiance`] tells them
/// apart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    /// `"success"` on success; anything else, or nothing, is a failure
    #[serde(default)]
    pub status: Option<Value>,
    #[serde(default)]
    pub predicted_solar_irradiance: Option<f64>,
    /// Usually a string, but any JSON value is accepted and shown as text
    #[serde(default)]
    pub error: Option<Value>,
    #[serde(default)]
    pub unit: Option<String>,
    /// Inputs echoed back by the service
    #[serde(default)]
    pub input_features: Option<Value>,
}

impl PredictionResponse {
    pub fn success(irradiance: f64) -> Self {
        Self {
            status: Some(Value::String(SUCCESS_STATUS.to_string())),
            predicted_solar_irradiance: Some(irradiance),
            ..Default::default()
        }
    }

    pub fn failure(error: Option<&str>) -> Self {
        Self {
            status: Some(Value::String("failed".to_string())),
            error: error.map(|e| Value::String(e.to_string())),
            ..Default::default()
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(&self.status, Some(Value::String(status)) if status == SUCCESS_STATUS)
    }

    /// The service's `error` as display text. `null`, `false` and `0` count
    /// as no message at all.
    pub fn error_text(&self) -> Option<String> {
        match self.error.as_ref()? {
            Value::Null | Value::Bool(false) => None,
            Value::Number(n) if n.as_f64() == Some(0.0) => None,
            Value::String(message) => Some(message.clone()),
            other => Some(other.to_string()),
        }
    }

    /// The predicted value, or the domain error the service reported.
    pub fn into_irradiance(self) -> Result<f64, PredictionError> {
        if !self.is_success() {
            return Err(PredictionError::domain(self.error_text()));
        }
        self.predicted_solar_irradiance
            .ok_or_else(|| PredictionError::domain(self.error_text()))
    }
}

/// What came back over the wire: the HTTP status and the decoded body.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceReply {
    pub http_status: u16,
    pub body: PredictionResponse,
}

impl ServiceReply {
    pub fn new(http_status: u16, body: PredictionResponse) -> Self {
        Self { http_status, body }
    }

    pub fn is_http_ok(&self) -> bool {
        (200..300).contains(&self.http_status)
    }

    /// A reply only counts as a prediction when both the HTTP status and the
    /// body say so.
    pub fn into_irradiance(self) -> Result<f64, PredictionError> {
        if !self.is_http_ok() {
            return Err(PredictionError::domain(self.body.error_text()));
        }
        self.body.into_irradiance()
    }
}

/// Payload of the service's `GET /` health check.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceStatus {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub service: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
}

impl ServiceStatus {
    pub fn is_running(&self) -> bool {
        self.status.as_deref() == Some("running")
    }
}

/// Payload of the service's `GET /model-info`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelInfo {
    #[serde(default)]
    pub model_type: Option<String>,
    #[serde(default)]
    pub n_estimators: Option<u32>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub target: Option<String>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(
        temperature: &str,
        cloud_cover: &str,
        humidity: &str,
        hour: &str,
        month: &str,
    ) -> PredictionForm {
        PredictionForm {
            temperature: temperature.to_string(),
            cloud_cover: cloud_cover.to_string(),
            humidity: humidity.to_string(),
            hour: hour.to_string(),
            month: month.to_string(),
        }
    }

    #[test]
    fn test_parse_valid_form() {
        let input = form(" 35 ", "10", "40.5", "12", "6").parse().unwrap();
        assert_eq!(input, PredictionInput::new(35.0, 10.0, 40.5, 12, 6));
    }

    #[test]
    fn test_parse_reports_first_bad_field() {
        let err = form("", "abc", "40", "12", "6").parse().unwrap_err();
        assert_eq!(err, InputError::Missing { field: "temperature" });

        let err = form("20", "abc", "40", "12", "6").parse().unwrap_err();
        assert_eq!(
            err,
            InputError::NotANumber {
                field: "cloud_cover",
                value: "abc".to_string()
            }
        );
    }

    #[test]
    fn test_parse_rejects_non_finite_and_fractional_hours() {
        let err = form("NaN", "10", "40", "12", "6").parse().unwrap_err();
        assert_eq!(err.field(), "temperature");

        let err = form("20", "10", "inf", "12", "6").parse().unwrap_err();
        assert_eq!(err.field(), "humidity");

        let err = form("20", "10", "40", "12.5", "6").parse().unwrap_err();
        assert_eq!(
            err,
            InputError::NotAnInteger {
                field: "hour",
                value: "12.5".to_string()
            }
        );
    }

    #[test]
    fn test_range_checks_use_service_messages() {
        let err = form("60", "10", "40", "12", "6").parse().unwrap_err();
        assert_eq!(err.to_string(), "Temperature must be between -10°C and 50°C");

        let err = form("20", "10", "40", "24", "6").parse().unwrap_err();
        assert_eq!(err.to_string(), "Hour must be between 0 and 23");

        let err = form("20", "10", "40", "12", "0").parse().unwrap_err();
        assert_eq!(err.to_string(), "Month must be between 1 and 12");
    }

    #[test]
    fn test_range_bounds_are_inclusive() {
        assert!(form("-10", "0", "0", "0", "1").parse().is_ok());
        assert!(form("50", "100", "100", "23", "12").parse().is_ok());
    }

    #[test]
    fn test_check_rejects_nan_built_directly() {
        let input = PredictionInput::new(f64::NAN, 10.0, 40.0, 12, 6);
        assert_eq!(input.check().unwrap_err().field(), "temperature");
    }

    #[test]
    fn test_input_serializes_as_request_body() {
        let input = PredictionInput::new(35.0, 10.0, 40.0, 12, 6);
        let json = serde_json::to_value(input).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "temperature": 35.0,
                "cloud_cover": 10.0,
                "humidity": 40.0,
                "hour": 12,
                "month": 6
            })
        );
    }

    #[test]
    fn test_decode_full_service_success() {
        let body = r#"{
            "predicted_solar_irradiance": 642.18,
            "unit": "W/m²",
            "status": "success",
            "input_features": {"temperature": 30.0, "cloud_cover": 15.0, "humidity": 45.0, "hour": 13, "month": 5}
        }"#;
        let response: PredictionResponse = serde_json::from_str(body).unwrap();
        assert!(response.is_success());
        assert_eq!(response.into_irradiance(), Ok(642.18));
    }

    #[test]
    fn test_decode_failures() {
        let response: PredictionResponse =
            serde_json::from_str(r#"{"status":"error","error":"out of range"}"#).unwrap();
        assert_eq!(
            response.into_irradiance(),
            Err(PredictionError::Domain("out of range".to_string()))
        );

        let response: PredictionResponse = serde_json::from_str(r#"{"status":"error"}"#).unwrap();
        assert_eq!(
            response.into_irradiance(),
            Err(PredictionError::Domain("Prediction failed".to_string()))
        );

        // status present but not a string
        let response: PredictionResponse =
            serde_json::from_str(r#"{"status":1,"predicted_solar_irradiance":10}"#).unwrap();
        assert!(!response.is_success());

        // success without a value is still a failure
        let response: PredictionResponse = serde_json::from_str(r#"{"status":"success"}"#).unwrap();
        assert!(matches!(response.into_irradiance(), Err(PredictionError::Domain(_))));
    }

    #[test]
    fn test_non_string_error_is_shown_as_text() {
        let response: PredictionResponse =
            serde_json::from_str(r#"{"status":"error","error":{"code":42}}"#).unwrap();
        assert_eq!(
            response.into_irradiance(),
            Err(PredictionError::Domain(r#"{"code":42}"#.to_string()))
        );

        let response: PredictionResponse =
            serde_json::from_str(r#"{"status":"error","error":503}"#).unwrap();
        assert_eq!(
            response.into_irradiance(),
            Err(PredictionError::Domain("503".to_string()))
        );

        for empty in ["null", "false", "0", "\"\""] {
            let body = format!(r#"{{"status":"error","error":{}}}"#, empty);
            let response: PredictionResponse = serde_json::from_str(&body).unwrap();
            assert_eq!(
                response.into_irradiance(),
                Err(PredictionError::Domain("Prediction failed".to_string())),
                "error = {}",
                empty
            );
        }
    }

    #[test]
    fn test_reply_requires_http_ok() {
        let reply = ServiceReply::new(500, PredictionResponse::success(120.0));
        assert_eq!(
            reply.into_irradiance(),
            Err(PredictionError::Domain("Prediction failed".to_string()))
        );

        let reply = ServiceReply::new(
            400,
            PredictionResponse::failure(Some("Missing required features: month")),
        );
        assert_eq!(
            reply.into_irradiance(),
            Err(PredictionError::Domain("Missing required features: month".to_string()))
        );

        let reply = ServiceReply::new(200, PredictionResponse::success(120.0));
        assert_eq!(reply.into_irradiance(), Ok(120.0));
    }

    #[test]
    fn test_decode_status_payloads() {
        let status: ServiceStatus = serde_json::from_str(
            r#"{"status":"running","service":"Solar Irradiance Prediction API","model":"Random Forest Regressor","version":"1.0"}"#,
        )
        .unwrap();
        assert!(status.is_running());

        let info: ModelInfo = serde_json::from_str(
            r#"{"model_type":"Random Forest Regressor","n_estimators":100,"features":["temperature","cloud_cover","humidity","hour","month"],"target":"solar_irradiance","unit":"W/m²","status":"ready"}"#,
        )
        .unwrap();
        assert_eq!(info.n_estimators, Some(100));
        assert_eq!(info.features, FEATURE_ORDER.map(String::from).to_vec());
    }
}
