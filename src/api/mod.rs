use axum::{
    Router,
    extract::{
        Json, Query,
        rejection::{JsonRejection, QueryRejection},
    },
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use tokio::net::TcpListener;

use crate::core::{Inputs, ProjectionResult, YearRecord, project};

const INDEX_HTML: &str = include_str!("../../web/index.html");
const CALCULATOR_HTML: &str = include_str!("../../web/epf_calculator.html");
const ABOUT_HTML: &str = include_str!("../../web/about.html");
const STYLES_CSS: &str = include_str!("../../web/styles.css");
const APP_JS: &str = include_str!("../../web/app.js");

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CalculatePayload {
    #[serde(alias = "monthly_salary")]
    monthly_salary: f64,
    #[serde(alias = "current_age")]
    current_age: u32,
    #[serde(alias = "retirement_age")]
    retirement_age: u32,
    #[serde(alias = "contribution_rate", alias = "epf_contribution_rate")]
    contribution_rate: f64,
    #[serde(alias = "annual_increase", alias = "annual_salary_increase")]
    annual_increase: f64,
    #[serde(alias = "interest_rate")]
    interest_rate: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CalculateResponse {
    final_balance: f64,
    total_contribution: f64,
    total_interest: f64,
    yearly_data: Vec<YearRecord>,
}

impl From<ProjectionResult> for CalculateResponse {
    fn from(result: ProjectionResult) -> Self {
        Self {
            final_balance: result.final_balance,
            total_contribution: result.total_contribution,
            total_interest: result.total_interest,
            yearly_data: result.yearly_data,
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

// The web form and wire payload carry rates in 0-100 percent space; the
// engine works in fractions.
fn inputs_from_payload(payload: &CalculatePayload) -> Inputs {
    Inputs {
        monthly_salary: payload.monthly_salary,
        current_age: payload.current_age,
        retirement_age: payload.retirement_age,
        contribution_rate: payload.contribution_rate / 100.0,
        annual_salary_growth: payload.annual_increase / 100.0,
        interest_rate: payload.interest_rate / 100.0,
    }
}

pub async fn run_http_server(port: u16) -> std::io::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let app = Router::new()
        .route("/", get(index_handler))
        .route("/index.html", get(index_handler))
        .route("/epf-calculator", get(calculator_handler))
        .route("/about", get(about_handler))
        .route("/styles.css", get(styles_handler))
        .route("/app.js", get(app_js_handler))
        .route(
            "/calculate-epf",
            get(calculate_get_handler).post(calculate_post_handler),
        )
        .fallback(not_found_handler);

    let listener = TcpListener::bind(addr).await?;
    log::info!("EPF calculator listening on http://{addr}");
    log::info!("local access: http://127.0.0.1:{port}/");

    axum::serve(listener, app).await
}

async fn index_handler() -> impl IntoResponse {
    with_cache_control(Html(INDEX_HTML))
}

async fn calculator_handler() -> impl IntoResponse {
    with_cache_control(Html(CALCULATOR_HTML))
}

async fn about_handler() -> impl IntoResponse {
    with_cache_control(Html(ABOUT_HTML))
}

async fn styles_handler() -> impl IntoResponse {
    with_cache_control((
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        STYLES_CSS,
    ))
}

async fn app_js_handler() -> impl IntoResponse {
    with_cache_control((
        [(
            header::CONTENT_TYPE,
            "application/javascript; charset=utf-8",
        )],
        APP_JS,
    ))
}

async fn not_found_handler() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found")
}

async fn calculate_get_handler(query: Result<Query<CalculatePayload>, QueryRejection>) -> Response {
    match query {
        Ok(Query(payload)) => calculate_handler_impl(payload),
        Err(rejection) => error_response(
            StatusCode::BAD_REQUEST,
            &format!("Invalid calculator payload: {rejection}"),
        ),
    }
}

async fn calculate_post_handler(payload: Result<Json<CalculatePayload>, JsonRejection>) -> Response {
    match payload {
        Ok(Json(payload)) => calculate_handler_impl(payload),
        Err(rejection) => error_response(
            StatusCode::BAD_REQUEST,
            &format!("Invalid calculator payload: {rejection}"),
        ),
    }
}

fn calculate_handler_impl(payload: CalculatePayload) -> Response {
    let inputs = inputs_from_payload(&payload);
    match project(&inputs) {
        Ok(result) => json_response(StatusCode::OK, CalculateResponse::from(result)),
        Err(err) => {
            log::warn!("rejected calculator request: {err}");
            error_response(StatusCode::BAD_REQUEST, &err.to_string())
        }
    }
}

fn with_cache_control<R: IntoResponse>(response: R) -> Response {
    let mut response = response.into_response();
    response.headers_mut().insert(
        header::CACHE_CONTROL,
        "no-store".parse().expect("valid header"),
    );
    response
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    let mut response = (status, Json(body)).into_response();
    response.headers_mut().insert(
        header::CACHE_CONTROL,
        "no-store".parse().expect("valid header"),
    );
    response
}

fn error_response(status: StatusCode, msg: &str) -> Response {
    json_response(
        status,
        ErrorResponse {
            error: msg.to_string(),
        },
    )
}

#[cfg(test)]
fn payload_from_json(json: &str) -> Result<CalculatePayload, String> {
    serde_json::from_str::<CalculatePayload>(json)
        .map_err(|e| format!("Invalid calculator payload: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    const EPS: f64 = 1e-6;

    fn assert_approx(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= EPS,
            "expected {expected}, got {actual}"
        );
    }

    fn sample_payload() -> CalculatePayload {
        CalculatePayload {
            monthly_salary: 20_000.0,
            current_age: 40,
            retirement_age: 45,
            contribution_rate: 12.0,
            annual_increase: 3.0,
            interest_rate: 6.0,
        }
    }

    fn assert_golden_snapshot(path: &str, actual: &str) {
        let update = matches!(
            std::env::var("UPDATE_GOLDEN").as_deref(),
            Ok("1") | Ok("true") | Ok("TRUE")
        );
        let snapshot_path = Path::new(path);

        if update {
            if let Some(parent) = snapshot_path.parent() {
                fs::create_dir_all(parent).expect("failed to create snapshot directory");
            }
            fs::write(snapshot_path, actual).expect("failed to write golden snapshot");
            return;
        }

        let expected = fs::read_to_string(snapshot_path).unwrap_or_else(|_| {
            panic!("missing golden snapshot at {path}; run with UPDATE_GOLDEN=1 to generate")
        });
        assert_eq!(
            actual, expected,
            "snapshot mismatch for {path}; run with UPDATE_GOLDEN=1 to refresh if expected"
        );
    }

    #[test]
    fn payload_from_json_parses_web_keys() {
        let json = r#"{
          "monthlySalary": 50000,
          "currentAge": 30,
          "retirementAge": 60,
          "contributionRate": 24,
          "annualIncrease": 5,
          "interestRate": 8.25
        }"#;
        let payload = payload_from_json(json).expect("json should parse");

        assert_approx(payload.monthly_salary, 50_000.0);
        assert_eq!(payload.current_age, 30);
        assert_eq!(payload.retirement_age, 60);
        assert_approx(payload.contribution_rate, 24.0);
        assert_approx(payload.annual_increase, 5.0);
        assert_approx(payload.interest_rate, 8.25);
    }

    #[test]
    fn payload_from_json_accepts_snake_case_aliases() {
        let json = r#"{
          "monthly_salary": 45000,
          "current_age": 28,
          "retirement_age": 58,
          "epf_contribution_rate": 24,
          "annual_increase": 4,
          "interest_rate": 8.1
        }"#;
        let payload = payload_from_json(json).expect("aliases should parse");

        assert_approx(payload.monthly_salary, 45_000.0);
        assert_eq!(payload.current_age, 28);
        assert_eq!(payload.retirement_age, 58);
        assert_approx(payload.contribution_rate, 24.0);
    }

    #[test]
    fn payload_from_json_rejects_missing_fields() {
        let json = r#"{"monthlySalary": 50000, "currentAge": 30}"#;
        let err = payload_from_json(json).expect_err("must reject incomplete payloads");
        assert!(err.contains("Invalid calculator payload"));
    }

    #[test]
    fn inputs_from_payload_converts_percentages() {
        let inputs = inputs_from_payload(&sample_payload());

        assert_approx(inputs.monthly_salary, 20_000.0);
        assert_eq!(inputs.current_age, 40);
        assert_eq!(inputs.retirement_age, 45);
        assert_approx(inputs.contribution_rate, 0.12);
        assert_approx(inputs.annual_salary_growth, 0.03);
        assert_approx(inputs.interest_rate, 0.06);
    }

    #[test]
    fn projection_failure_maps_to_validation_message() {
        let mut payload = sample_payload();
        payload.retirement_age = 20;

        let err = project(&inputs_from_payload(&payload)).expect_err("must reject");
        assert_eq!(err.to_string(), "retirement age must be >= current age");
    }

    #[test]
    fn calculate_response_serialization_contains_expected_fields() {
        let result = project(&inputs_from_payload(&sample_payload())).expect("valid inputs");
        let json = serde_json::to_string(&CalculateResponse::from(result))
            .expect("response should serialize");

        assert!(json.contains("\"finalBalance\""));
        assert!(json.contains("\"totalContribution\""));
        assert!(json.contains("\"totalInterest\""));
        assert!(json.contains("\"yearlyData\""));
        assert!(json.contains("\"monthlySalary\""));
        assert!(json.contains("\"yearlyContribution\""));
        assert!(json.contains("\"interestEarned\""));
        assert!(json.contains("\"balanceAfter\""));
    }

    #[test]
    fn error_response_serializes_error_key() {
        let json = serde_json::to_string(&ErrorResponse {
            error: "retirement age must be >= current age".to_string(),
        })
        .expect("error body should serialize");
        assert_eq!(
            json,
            r#"{"error":"retirement age must be >= current age"}"#
        );
    }

    #[test]
    fn golden_snapshot_five_year_projection_json() {
        let result = project(&inputs_from_payload(&sample_payload())).expect("valid inputs");
        let json = format!(
            "{}\n",
            serde_json::to_string(&CalculateResponse::from(result))
                .expect("response should serialize")
        );

        assert_golden_snapshot("tests/golden/five_year_projection.json", &json);
    }
}
