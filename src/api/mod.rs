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
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::{debug, info, warn};

use crate::core::{
    CompoundingFrequency, ProjectionInput, ProjectionResult, Scenario, YearValue, project,
};
use crate::present::{ChartData, ProjectionTable, headline_sentence, pick_message};

const INDEX_HTML: &str = include_str!("../../web/index.html");
const STYLES_CSS: &str = include_str!("../../web/styles.css");
const APP_JS: &str = include_str!("../../web/app.js");

const MAX_YEARS: u32 = 1_000;

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum CliCompoundFrequency {
    Annually,
    Quarterly,
    Monthly,
    Daily,
}

impl From<CliCompoundFrequency> for CompoundingFrequency {
    fn from(value: CliCompoundFrequency) -> Self {
        match value {
            CliCompoundFrequency::Annually => CompoundingFrequency::Annually,
            CliCompoundFrequency::Quarterly => CompoundingFrequency::Quarterly,
            CliCompoundFrequency::Monthly => CompoundingFrequency::Monthly,
            CliCompoundFrequency::Daily => CompoundingFrequency::Daily,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
enum ApiCompoundFrequency {
    #[serde(alias = "Annually", alias = "annual", alias = "yearly")]
    Annually,
    #[serde(alias = "Quarterly", alias = "quarter")]
    Quarterly,
    #[serde(alias = "Monthly", alias = "month")]
    Monthly,
    #[serde(alias = "Daily", alias = "day")]
    Daily,
}

impl From<ApiCompoundFrequency> for CliCompoundFrequency {
    fn from(value: ApiCompoundFrequency) -> Self {
        match value {
            ApiCompoundFrequency::Annually => CliCompoundFrequency::Annually,
            ApiCompoundFrequency::Quarterly => CliCompoundFrequency::Quarterly,
            ApiCompoundFrequency::Monthly => CliCompoundFrequency::Monthly,
            ApiCompoundFrequency::Daily => CliCompoundFrequency::Daily,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct ProjectPayload {
    initial_investment: Option<f64>,
    monthly_contribution: Option<f64>,
    years: Option<u32>,
    annual_rate: Option<f64>,
    rate_variance: Option<f64>,
    compound_frequency: Option<ApiCompoundFrequency>,
    compounding_periods_per_year: Option<u32>,
    seed: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CtaQuery {
    seed: Option<u64>,
}

#[derive(Parser, Debug)]
#[command(
    name = "compounder",
    about = "Compound interest calculator (lump sum + periodic contributions, optional rate variance band)"
)]
pub struct Cli {
    #[arg(long, default_value_t = 0.0, help = "Initial investment")]
    initial_investment: f64,
    #[arg(
        long,
        default_value_t = 0.0,
        allow_negative_numbers = true,
        help = "Contribution credited each compounding period; negative for withdrawals"
    )]
    monthly_contribution: f64,
    #[arg(long, default_value_t = 1, help = "Length of time in years")]
    years: u32,
    #[arg(
        long,
        default_value_t = 0.0,
        help = "Expected annual return in percent, e.g. 7.5"
    )]
    interest_rate: f64,
    #[arg(
        long,
        default_value_t = 0.0,
        help = "Projects extra scenarios at interest-rate minus and plus this many percent"
    )]
    rate_variance: f64,
    #[arg(long, value_enum, default_value_t = CliCompoundFrequency::Annually)]
    compound_frequency: CliCompoundFrequency,
    #[arg(
        long,
        help = "Raw compounding periods per year; overrides --compound-frequency"
    )]
    compounding_periods: Option<u32>,
    #[arg(long, help = "Seed for the call-to-action line")]
    seed: Option<u64>,
}

#[derive(Debug)]
struct ApiRequest {
    input: ProjectionInput,
    seed: Option<u64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ProjectResponse {
    headline: f64,
    headline_text: String,
    years: u32,
    compound_frequency: CompoundingFrequency,
    scenarios: Vec<Scenario>,
    contributions: Vec<YearValue>,
    table: ProjectionTable,
    chart: ChartData,
    call_to_action: &'static str,
}

#[derive(Debug, Serialize)]
struct CtaResponse {
    message: &'static str,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

fn build_input(cli: &Cli) -> Result<ProjectionInput, String> {
    if !cli.initial_investment.is_finite() || cli.initial_investment < 0.0 {
        return Err("--initial-investment must be >= 0".to_string());
    }

    if !cli.monthly_contribution.is_finite() {
        return Err("--monthly-contribution must be a finite number".to_string());
    }

    if cli.years == 0 {
        return Err("--years must be >= 1".to_string());
    }

    if cli.years > MAX_YEARS {
        return Err(format!("--years must be <= {MAX_YEARS}"));
    }

    if !cli.interest_rate.is_finite() || cli.interest_rate < 0.0 {
        return Err("--interest-rate must be >= 0".to_string());
    }

    if !cli.rate_variance.is_finite() || cli.rate_variance < 0.0 {
        return Err("--rate-variance must be >= 0".to_string());
    }

    let frequency: CompoundingFrequency = cli.compound_frequency.into();

    Ok(ProjectionInput {
        initial_investment: cli.initial_investment,
        monthly_contribution: cli.monthly_contribution,
        years: cli.years,
        annual_rate_percent: cli.interest_rate,
        rate_variance_percent: cli.rate_variance,
        compounding_periods_per_year: cli
            .compounding_periods
            .unwrap_or_else(|| frequency.periods_per_year()),
    })
}

/// Runs one projection from command-line flags and renders the headline,
/// the year-by-year table and a call-to-action line.
pub fn run_cli(cli: &Cli) -> Result<String, String> {
    let input = build_input(cli)?;
    let result = project(&input).map_err(|e| e.to_string())?;
    debug!(
        years = input.years,
        scenarios = result.scenarios.len(),
        "projection complete"
    );

    let table = ProjectionTable::from_result(&result);
    let mut out = String::new();
    out.push_str(&headline_sentence(result.years(), result.headline_value()));
    out.push('\n');
    out.push_str(&format!("Compound Frequency: {}", result.frequency.label()));
    out.push_str("\n\n");
    out.push_str(&table.render_text());
    out.push('\n');
    out.push_str(pick_message(cli.seed));
    out.push('\n');
    Ok(out)
}

pub async fn run_http_server(port: u16) -> std::io::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr).await?;
    info!("compounder HTTP API listening on http://{addr}");
    info!("local access: http://127.0.0.1:{port}/");

    axum::serve(listener, router()).await
}

fn router() -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/index.html", get(index_handler))
        .route("/styles.css", get(styles_handler))
        .route("/app.js", get(app_js_handler))
        .route(
            "/api/project",
            get(project_get_handler).post(project_post_handler),
        )
        .route("/api/cta", get(cta_handler))
        .fallback(not_found_handler)
}

async fn index_handler() -> impl IntoResponse {
    with_cache_control(Html(INDEX_HTML))
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

async fn project_get_handler(
    payload: Result<Query<ProjectPayload>, QueryRejection>,
) -> Response {
    match payload {
        Ok(Query(payload)) => project_handler_impl(payload),
        Err(rejection) => rejected_payload(rejection.body_text()),
    }
}

async fn project_post_handler(payload: Result<Json<ProjectPayload>, JsonRejection>) -> Response {
    match payload {
        Ok(Json(payload)) => project_handler_impl(payload),
        Err(rejection) => rejected_payload(rejection.body_text()),
    }
}

async fn cta_handler(query: Result<Query<CtaQuery>, QueryRejection>) -> Response {
    let query = match query {
        Ok(Query(query)) => query,
        Err(rejection) => return rejected_payload(rejection.body_text()),
    };
    json_response(
        StatusCode::OK,
        CtaResponse {
            message: pick_message(query.seed),
        },
    )
}

fn project_handler_impl(payload: ProjectPayload) -> Response {
    match handle_project(payload) {
        Ok(response) => json_response(StatusCode::OK, response),
        Err(msg) => {
            warn!(error = %msg, "rejected projection request");
            error_response(StatusCode::BAD_REQUEST, &msg)
        }
    }
}

// Extractor rejections are plain text by default; the page expects JSON.
fn rejected_payload(detail: String) -> Response {
    let msg = format!("Invalid request payload: {detail}");
    warn!(error = %msg, "rejected request payload");
    error_response(StatusCode::BAD_REQUEST, &msg)
}

fn handle_project(payload: ProjectPayload) -> Result<ProjectResponse, String> {
    let request = api_request_from_payload(payload)?;
    let result = project(&request.input).map_err(|e| e.to_string())?;
    debug!(
        years = request.input.years,
        periods = request.input.compounding_periods_per_year,
        scenarios = result.scenarios.len(),
        "projection complete"
    );
    Ok(build_project_response(result, request.seed))
}

fn with_cache_control<R: IntoResponse>(response: R) -> Response {
    let mut response = response.into_response();
    response.headers_mut().insert(
        header::CACHE_CONTROL,
        header::HeaderValue::from_static("no-store"),
    );
    response
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    with_cache_control((status, Json(body)))
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
fn api_request_from_json(json: &str) -> Result<ApiRequest, String> {
    let payload = serde_json::from_str::<ProjectPayload>(json)
        .map_err(|e| format!("Invalid request payload: {e}"))?;
    api_request_from_payload(payload)
}

fn api_request_from_payload(payload: ProjectPayload) -> Result<ApiRequest, String> {
    let mut cli = default_cli_for_api();

    if let Some(v) = payload.initial_investment {
        cli.initial_investment = v;
    }
    if let Some(v) = payload.monthly_contribution {
        cli.monthly_contribution = v;
    }
    if let Some(v) = payload.years {
        cli.years = v;
    }
    if let Some(v) = payload.annual_rate {
        cli.interest_rate = v;
    }
    if let Some(v) = payload.rate_variance {
        cli.rate_variance = v;
    }
    if let Some(v) = payload.compound_frequency {
        cli.compound_frequency = v.into();
    }
    if let Some(v) = payload.compounding_periods_per_year {
        cli.compounding_periods = Some(v);
    }

    let input = build_input(&cli)?;
    Ok(ApiRequest {
        input,
        seed: payload.seed,
    })
}

fn default_cli_for_api() -> Cli {
    Cli {
        initial_investment: 0.0,
        monthly_contribution: 0.0,
        years: 1,
        interest_rate: 0.0,
        rate_variance: 0.0,
        compound_frequency: CliCompoundFrequency::Annually,
        compounding_periods: None,
        seed: None,
    }
}

fn build_project_response(result: ProjectionResult, seed: Option<u64>) -> ProjectResponse {
    let years = result.years();
    let headline = result.headline_value();
    ProjectResponse {
        headline,
        headline_text: headline_sentence(years, headline),
        years,
        compound_frequency: result.frequency,
        table: ProjectionTable::from_result(&result),
        chart: ChartData::from_result(&result),
        call_to_action: pick_message(seed),
        scenarios: result.scenarios,
        contributions: result.contributions,
    }
}
