//! HTTP + WebSocket API for Tamago
//!
//! Endpoints:
//! - POST /session/new - Create new session
//! - GET /session/{id} - Get session status
//! - POST /session/{id}/steps - Report a step count (one evaluation)
//! - POST /session/{id}/restart - Reset after death
//! - WS /ws/{id} - Live updates
//! - GET /health - Health check

use axum::{
    extract::{
        ws::{Message, WebSocket},
        Path, State, WebSocketUpgrade,
    },
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{broadcast, RwLock};

use crate::core::EvolutionEngine;
use crate::types::EggState;

/// Session state: one pet per session
#[derive(Debug)]
pub struct Session {
    pub id: String,
    pub engine: EvolutionEngine,
    pub update_tx: broadcast::Sender<SessionUpdate>,
}

/// Live update message
#[derive(Debug, Clone, Serialize)]
pub struct SessionUpdate {
    pub steps: u64,
    pub state: String,
    pub message: String,
    pub days_since: Option<i64>,
    pub alive: bool,
}

/// App state
pub struct AppState {
    pub sessions: RwLock<HashMap<String, Session>>,
}

/// Create new session response
#[derive(Debug, Serialize)]
pub struct NewSessionResponse {
    pub session_id: String,
    pub websocket_url: String,
}

/// Session status response
#[derive(Debug, Serialize)]
pub struct SessionStatusResponse {
    pub session_id: String,
    pub state: String,
    pub message: String,
    pub steps: u64,
    pub days_since: Option<i64>,
    pub last_transition: Option<DateTime<Utc>>,
    pub alive: bool,
    pub update_count: u64,
}

/// Report steps request
#[derive(Debug, Deserialize)]
pub struct ReportStepsRequest {
    pub steps: u64,
    /// Evaluation time; defaults to the server clock when absent
    pub timestamp: Option<DateTime<Utc>>,
}

/// Report steps response
#[derive(Debug, Serialize)]
pub struct ReportStepsResponse {
    pub state: String,
    pub message: String,
    pub days_since: Option<i64>,
    pub reason: String,
    pub alive: bool,
}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub sessions_active: usize,
}

/// Create the API router
pub fn create_router() -> Router {
    let state = Arc::new(AppState {
        sessions: RwLock::new(HashMap::new()),
    });

    Router::new()
        .route("/health", get(health))
        .route("/session/new", post(create_session))
        .route("/session/:id", get(get_session))
        .route("/session/:id/steps", post(report_steps))
        .route("/session/:id/restart", post(restart_session))
        .route("/ws/:id", get(websocket_handler))
        .with_state(state)
}

/// Health check endpoint
async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let sessions = state.sessions.read().await;
    Json(HealthResponse {
        status: "ok".to_string(),
        version: crate::VERSION.to_string(),
        sessions_active: sessions.len(),
    })
}

/// Create new session
async fn create_session(
    State(state): State<Arc<AppState>>,
) -> Result<Json<NewSessionResponse>, StatusCode> {
    let session_id = generate_session_id();
    let (tx, _) = broadcast::channel(100);

    let session = Session {
        id: session_id.clone(),
        engine: EvolutionEngine::new(),
        update_tx: tx,
    };

    let mut sessions = state.sessions.write().await;
    sessions.insert(session_id.clone(), session);

    Ok(Json(NewSessionResponse {
        session_id: session_id.clone(),
        websocket_url: format!("/ws/{}", session_id),
    }))
}

/// Get session status
async fn get_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<SessionStatusResponse>, StatusCode> {
    let sessions = state.sessions.read().await;
    let session = sessions.get(&id).ok_or(StatusCode::NOT_FOUND)?;

    let context = session.engine.context();
    let now = Utc::now();

    Ok(Json(SessionStatusResponse {
        session_id: id,
        state: context.state.to_string(),
        message: context.message.clone(),
        steps: context.steps,
        days_since: context.days_since(now),
        last_transition: context.last_transition,
        alive: context.state.is_alive(),
        update_count: session.engine.update_count(),
    }))
}

/// Report a step count - the onStepCountUpdate callback over the wire
///
/// The write lock on the session map serializes evaluate-then-write, so
/// concurrent reports cannot interleave inside one evaluation.
async fn report_steps(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<ReportStepsRequest>,
) -> Result<Json<ReportStepsResponse>, StatusCode> {
    let mut sessions = state.sessions.write().await;
    let session = sessions.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;

    let now = req.timestamp.unwrap_or_else(Utc::now);
    let output = session.engine.on_step_update(req.steps, now);

    let update = SessionUpdate {
        steps: output.steps,
        state: output.state.to_string(),
        message: output.message.clone(),
        days_since: output.days_since,
        alive: output.alive,
    };
    let _ = session.update_tx.send(update);

    Ok(Json(ReportStepsResponse {
        state: output.state.to_string(),
        message: output.message,
        days_since: output.days_since,
        reason: output.reason.code().to_string(),
        alive: output.alive,
    }))
}

/// Restart a dead session - the onRestartRequested callback over the wire
///
/// Rejected with 409 while the pet is alive, so a stray call cannot wipe a
/// running game.
async fn restart_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<SessionStatusResponse>, StatusCode> {
    let mut sessions = state.sessions.write().await;
    let session = sessions.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;

    if session.engine.state() != EggState::Dead {
        return Err(StatusCode::CONFLICT);
    }

    session.engine.restart();
    let context = session.engine.context();

    let update = SessionUpdate {
        steps: context.steps,
        state: context.state.to_string(),
        message: context.message.clone(),
        days_since: None,
        alive: true,
    };
    let _ = session.update_tx.send(update);

    Ok(Json(SessionStatusResponse {
        session_id: id,
        state: context.state.to_string(),
        message: context.message.clone(),
        steps: context.steps,
        days_since: None,
        last_transition: context.last_transition,
        alive: context.state.is_alive(),
        update_count: session.engine.update_count(),
    }))
}

/// WebSocket handler for live updates
async fn websocket_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    ws: WebSocketUpgrade,
) -> Result<impl IntoResponse, StatusCode> {
    let sessions = state.sessions.read().await;
    let session = sessions.get(&id).ok_or(StatusCode::NOT_FOUND)?;
    let rx = session.update_tx.subscribe();
    drop(sessions);

    Ok(ws.on_upgrade(move |socket| async move {
        handle_websocket(socket, rx).await;
    }))
}

/// Handle WebSocket connection
async fn handle_websocket(mut socket: WebSocket, mut rx: broadcast::Receiver<SessionUpdate>) {
    while let Ok(update) = rx.recv().await {
        let json = serde_json::to_string(&update).unwrap_or_default();
        if socket.send(Message::Text(json)).await.is_err() {
            break;
        }
    }
}

/// Generate session ID
fn generate_session_id() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    format!("session_{:x}", nanos as u64)
}

/// Run the API server
pub async fn run_server(addr: &str) -> Result<(), Box<dyn std::error::Error>> {
    let router = create_router();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    println!("🥚 Tamago API running on {}", addr);
    println!("  POST /session/new         - Create session");
    println!("  GET  /session/:id         - Get status");
    println!("  POST /session/:id/steps   - Report a step count");
    println!("  POST /session/:id/restart - Reset after death");
    println!("  WS   /ws/:id              - Live updates");
    println!("  GET  /health              - Health check");
    axum::serve(listener, router).await?;
    Ok(())
}
