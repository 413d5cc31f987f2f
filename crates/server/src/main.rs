// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    body::Bytes,
    extract::{Path, Query, State as AxumState},
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{delete, get, post},
};
use catalog_api::{
    ApiError, AuthenticatedActor, BatchDeleteResponse, DemoCheckResponse, ExportPayload,
    ListAuditResponse, LoadDemoResponse, RemoveDemoRequest, RemoveDemoResponse, SeedAllResponse,
    SeedResponse, batch_delete_software, check_demo, export_catalog, list_audit, load_demo,
    remove_demo, seed_all, seed_reference,
};
use catalog_audit::Actor;
use catalog_persistence::Persistence;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info, warn};

/// Header carrying the caller id, set by the upstream auth layer.
const ACTOR_ID_HEADER: &str = "x-actor-id";
/// Header carrying the caller role, set by the upstream auth layer.
const ACTOR_ROLE_HEADER: &str = "x-actor-role";

/// Software Catalog Server - HTTP server for catalog data lifecycle and audit
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Database connection string: `sqlite://path`, a plain path, or `:memory:`.
    #[arg(long, env = "DATABASE_URL", default_value = ":memory:")]
    database_url: String,

    /// Address to bind the server to
    #[arg(long, env = "CATALOG_BIND", default_value = "127.0.0.1")]
    bind: String,

    /// Port to bind the server to
    #[arg(short, long, env = "CATALOG_PORT", default_value_t = 3000)]
    port: u16,

    /// Seed every reference kind at startup
    #[arg(long)]
    seed_reference_data: bool,
}

/// Application state shared across handlers.
///
/// One long-lived persistence handle, locked for the duration of a single
/// operation.
#[derive(Clone)]
struct AppState {
    persistence: Arc<Mutex<Persistence>>,
}

/// Query parameters for the export endpoint.
#[derive(Debug, Deserialize)]
struct ExportQuery {
    /// `json` (default) or `csv`.
    format: Option<String>,
}

/// Query parameters for the audit listing.
#[derive(Debug, Deserialize)]
struct AuditQuery {
    limit: Option<usize>,
}

/// Error body returned by every failing route.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    error: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match &err {
            ApiError::AuthenticationFailed { .. } => StatusCode::UNAUTHORIZED,
            ApiError::Unauthorized { .. } => StatusCode::FORBIDDEN,
            ApiError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            ApiError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Persistence { operation, message } => {
                error!(operation = %operation, error = %message, "Persistence error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ApiError::Internal { message } => {
                error!(error = %message, "Internal error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        Self {
            status,
            message: err.to_string(),
        }
    }
}

/// Reads the caller identity from the auth headers.
fn actor_from_headers(headers: &HeaderMap) -> Result<AuthenticatedActor, HttpError> {
    let id: Option<&str> = headers
        .get(ACTOR_ID_HEADER)
        .and_then(|value| value.to_str().ok());
    let role: Option<&str> = headers
        .get(ACTOR_ROLE_HEADER)
        .and_then(|value| value.to_str().ok());

    AuthenticatedActor::from_identity(id, role).map_err(|err| {
        warn!(error = %err, "Rejected request without a usable actor");
        HttpError::from(ApiError::from(err))
    })
}

/// Handler for GET `/api/demo/check`.
async fn handle_check_demo(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<DemoCheckResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: DemoCheckResponse = check_demo(&mut persistence)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/api/demo/load`.
///
/// Resets the catalog and loads the demo dataset.
async fn handle_load_demo(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
) -> Result<Json<LoadDemoResponse>, HttpError> {
    let actor: AuthenticatedActor = actor_from_headers(&headers)?;
    info!(actor_id = %actor.id, "Handling load_demo request");

    let mut persistence = app_state.persistence.lock().await;
    let response: LoadDemoResponse = load_demo(&mut persistence, &actor)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/api/demo/remove`.
///
/// The body is optional; when present it may set `includeFooterLinks`.
async fn handle_remove_demo(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<RemoveDemoResponse>, HttpError> {
    let actor: AuthenticatedActor = actor_from_headers(&headers)?;
    info!(actor_id = %actor.id, "Handling remove_demo request");

    let request: RemoveDemoRequest = if body.iter().all(u8::is_ascii_whitespace) {
        RemoveDemoRequest::default()
    } else {
        serde_json::from_slice::<Option<RemoveDemoRequest>>(&body)
            .map_err(|err| ApiError::InvalidInput {
                field: String::from("body"),
                message: format!("Malformed request body: {err}"),
            })?
            .unwrap_or_default()
    };

    let mut persistence = app_state.persistence.lock().await;
    let response: RemoveDemoResponse = remove_demo(&mut persistence, &actor, &request)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/api/seed`.
async fn handle_seed_all(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
) -> Result<Json<SeedAllResponse>, HttpError> {
    let actor: AuthenticatedActor = actor_from_headers(&headers)?;
    info!(actor_id = %actor.id, "Handling seed_all request");

    let mut persistence = app_state.persistence.lock().await;
    let response: SeedAllResponse = seed_all(&mut persistence, &actor)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/api/seed/{kind}`.
async fn handle_seed_reference(
    AxumState(app_state): AxumState<AppState>,
    Path(kind): Path<String>,
    headers: HeaderMap,
) -> Result<Json<SeedResponse>, HttpError> {
    let actor: AuthenticatedActor = actor_from_headers(&headers)?;
    info!(actor_id = %actor.id, kind = %kind, "Handling seed_reference request");

    let mut persistence = app_state.persistence.lock().await;
    let response: SeedResponse = seed_reference(&mut persistence, &actor, &kind)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for DELETE `/api/software/batch`.
///
/// An absent body or a body without `ids` deletes every entry.
async fn handle_batch_delete(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<BatchDeleteResponse>, HttpError> {
    let actor: AuthenticatedActor = actor_from_headers(&headers)?;
    info!(actor_id = %actor.id, "Handling batch_delete_software request");

    let mut persistence = app_state.persistence.lock().await;
    let response: BatchDeleteResponse = batch_delete_software(&mut persistence, &actor, &body)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/api/admin/export`.
///
/// Requires a caller identity; any role may export.
async fn handle_export(
    AxumState(app_state): AxumState<AppState>,
    Query(params): Query<ExportQuery>,
    headers: HeaderMap,
) -> Result<Response, HttpError> {
    let actor: AuthenticatedActor = actor_from_headers(&headers)?;
    info!(actor_id = %actor.id, "Handling export_catalog request");

    let mut persistence = app_state.persistence.lock().await;
    let payload: ExportPayload = export_catalog(&mut persistence, params.format.as_deref())?;
    drop(persistence);

    Ok(match payload {
        ExportPayload::Json(rows) => Json(rows).into_response(),
        ExportPayload::Csv(text) => (
            [
                (
                    header::CONTENT_TYPE,
                    HeaderValue::from_static("text/csv; charset=utf-8"),
                ),
                (
                    header::CONTENT_DISPOSITION,
                    HeaderValue::from_static("attachment; filename=\"software-export.csv\""),
                ),
            ],
            text,
        )
            .into_response(),
    })
}

/// Handler for GET `/api/audit`.
///
/// Requires a caller identity.
async fn handle_list_audit(
    AxumState(app_state): AxumState<AppState>,
    Query(params): Query<AuditQuery>,
    headers: HeaderMap,
) -> Result<Json<ListAuditResponse>, HttpError> {
    let actor: AuthenticatedActor = actor_from_headers(&headers)?;
    info!(actor_id = %actor.id, "Handling list_audit request");

    let mut persistence = app_state.persistence.lock().await;
    let response: ListAuditResponse = list_audit(&mut persistence, params.limit)?;
    drop(persistence);

    Ok(Json(response))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    let api: Router<AppState> = Router::new()
        .route("/demo/check", get(handle_check_demo))
        .route("/demo/load", post(handle_load_demo))
        .route("/demo/remove", post(handle_remove_demo))
        .route("/seed", post(handle_seed_all))
        .route("/seed/{kind}", post(handle_seed_reference))
        .route("/software/batch", delete(handle_batch_delete))
        .route("/admin/export", get(handle_export))
        .route("/audit", get(handle_list_audit));

    Router::new().nest("/api", api).with_state(app_state)
}

/// Resolves when the process receives Ctrl-C.
async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!(error = %err, "Failed to listen for shutdown signal");
    }
    info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Software Catalog Server");

    let mut persistence: Persistence = Persistence::connect(&args.database_url)?;
    info!(database_url = %args.database_url, "Database ready");

    if args.seed_reference_data {
        for summary in persistence.seed_all_reference_data(&Actor::System)? {
            info!(
                kind = %summary.kind.as_str(),
                inserted = summary.inserted,
                skipped = summary.skipped,
                "Seeded reference data at startup"
            );
        }
    }

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
    };

    let app: Router = build_router(app_state);

    let listener = tokio::net::TcpListener::bind((args.bind.as_str(), args.port)).await?;
    info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}
