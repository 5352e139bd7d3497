//! API handlers for the IEP validation server
//!
//! Provides REST endpoints for:
//! - Draft validation
//! - Health checks

use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::ServerError;
use iep_validator::{format_report, IepValidator, ReportFormat};
use shared_types::{IepInput, ValidationResult};

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

/// Handler: GET /health
pub async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "iep-server",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Validation request body
#[derive(Deserialize)]
pub struct ValidateRequest {
    pub input: IepInput,
    /// The generated draft HTML, as received from the generation pipeline
    pub document: String,
    /// Optional rendered report: "text" or "markup"
    pub report_format: Option<String>,
}

/// Validation response
#[derive(Serialize)]
pub struct ValidateResponse {
    pub success: bool,
    pub result: ValidationResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<String>,
}

/// Handler: POST /api/validate
pub async fn handle_validate(
    Json(req): Json<ValidateRequest>,
) -> Result<Json<ValidateResponse>, ServerError> {
    let report_format = req
        .report_format
        .as_deref()
        .map(parse_report_format)
        .transpose()?;

    let validator = IepValidator::new();
    let result = validator.validate(&req.input, &req.document);

    info!(
        "Draft validated: compliant={}, violations={}",
        result.compliant, result.summary.total
    );

    let report = report_format.map(|format| format_report(&result, format));

    Ok(Json(ValidateResponse {
        success: true,
        result,
        report,
    }))
}

/// Parse a report format string into ReportFormat
fn parse_report_format(format: &str) -> Result<ReportFormat, ServerError> {
    match format.to_lowercase().as_str() {
        "text" => Ok(ReportFormat::Text),
        "markup" | "html" => Ok(ReportFormat::Markup),
        other => Err(ServerError::InvalidRequest(format!(
            "Unknown report format: {}",
            other
        ))),
    }
}
