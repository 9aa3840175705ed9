use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::infra::{deserialize_optional_date, AppState, InMemorySubmissionGateway, RecordingNotifier};
use donor_intake::workflows::registration::{
    eligibility, identity, validators, EligibilityConfig, GovernmentIdKind, RegistrationDraft,
    RegistrationService, RegistrationServiceError, RegistrationWizard, ValidationErrors,
    WizardError, WizardStep,
};

pub(crate) type IntakeService = RegistrationService<InMemorySubmissionGateway, RecordingNotifier>;

pub(crate) fn registration_routes(service: Arc<IntakeService>) -> Router {
    Router::new()
        .route("/api/v1/registration/format", post(format_endpoint))
        .route("/api/v1/registration/validate", post(validate_endpoint))
        .route(
            "/api/v1/registration/eligibility",
            post(eligibility_endpoint),
        )
        .route(
            "/api/v1/registration/submissions",
            post(submit_endpoint).with_state(service),
        )
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[derive(Debug, Deserialize)]
pub(crate) struct FormatRequest {
    pub(crate) id_type: GovernmentIdKind,
    pub(crate) value: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct FormatResponse {
    pub(crate) formatted: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) error: Option<String>,
}

/// Keystroke formatting plus blur-time validation for one ID value.
pub(crate) async fn format_endpoint(Json(payload): Json<FormatRequest>) -> Json<FormatResponse> {
    let formatted = identity::format(payload.id_type, &payload.value);
    let error = identity::validate(payload.id_type, &formatted);
    Json(FormatResponse { formatted, error })
}

#[derive(Debug, Deserialize)]
pub(crate) struct ValidateRequest {
    pub(crate) step: WizardStep,
    pub(crate) draft: RegistrationDraft,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub(crate) today: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ValidateResponse {
    pub(crate) step: u8,
    pub(crate) label: &'static str,
    pub(crate) valid: bool,
    pub(crate) errors: ValidationErrors,
}

/// Stateless per-step validation, as invoked on every "Next" press.
pub(crate) async fn validate_endpoint(Json(payload): Json<ValidateRequest>) -> Json<ValidateResponse> {
    let today = payload.today.unwrap_or_else(|| Local::now().date_naive());
    let errors = validators::run(payload.step.fields(), &payload.draft, today);
    Json(ValidateResponse {
        step: payload.step.number(),
        label: payload.step.label(),
        valid: errors.is_empty(),
        errors,
    })
}

#[derive(Debug, Deserialize)]
pub(crate) struct EligibilityRequest {
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub(crate) date_of_birth: Option<NaiveDate>,
    #[serde(default)]
    pub(crate) weight: Option<f32>,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub(crate) today: Option<NaiveDate>,
}

pub(crate) async fn eligibility_endpoint(
    Json(payload): Json<EligibilityRequest>,
) -> Json<eligibility::EligibilityOutcome> {
    let today = payload.today.unwrap_or_else(|| Local::now().date_naive());
    Json(eligibility::assess(
        payload.date_of_birth,
        payload.weight,
        today,
        &EligibilityConfig::default(),
    ))
}

#[derive(Debug, Serialize)]
pub(crate) struct SubmissionResponse {
    pub(crate) registration_id: String,
    pub(crate) status: &'static str,
}

/// Full-draft submission: replay the draft through every wizard step so the
/// complete rule set runs, then hand it to the submission gateway.
pub(crate) async fn submit_endpoint(
    State(service): State<Arc<IntakeService>>,
    Json(draft): Json<RegistrationDraft>,
) -> Response {
    let today = Local::now().date_naive();
    let mut wizard = RegistrationWizard::with_draft(draft);

    while wizard.step() != WizardStep::Consent {
        let step = wizard.step();
        let errors = wizard.next(today);
        if !errors.is_empty() {
            let payload = json!({
                "step": step.number(),
                "errors": errors,
            });
            return (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response();
        }
    }

    match service.submit(&mut wizard, today) {
        Ok(receipt) => {
            let payload = SubmissionResponse {
                registration_id: receipt.registration_id,
                status: "submitted",
            };
            (StatusCode::ACCEPTED, Json(payload)).into_response()
        }
        Err(RegistrationServiceError::Wizard(WizardError::Invalid(errors))) => {
            let payload = json!({
                "step": WizardStep::Consent.number(),
                "errors": errors,
            });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
        Err(RegistrationServiceError::Gateway(err)) => {
            let payload = json!({ "error": err.to_string() });
            (StatusCode::BAD_GATEWAY, Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}
