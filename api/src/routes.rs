use std::sync::Arc;

use askama::Template;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Form, Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use shared::{FormState, LandingPage, Strategy, StrategyForm, StrategyPanel, SubmitOutcome};
use tower_http::trace::TraceLayer;
use tracing::error;

#[derive(Clone)]
pub struct AppState {
    pub panel: Arc<StrategyPanel>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(landing_page))
        .route("/strategies", get(landing_page).post(create_strategy))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Raw form fields as the browser posts them.
#[derive(Debug, Deserialize)]
pub struct StrategyFormInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub symbol: String,
    #[serde(default)]
    pub timeframe: String,
    #[serde(default)]
    pub risk_per_trade: String,
}

impl From<StrategyFormInput> for StrategyForm {
    fn from(input: StrategyFormInput) -> Self {
        StrategyForm {
            name: input.name,
            description: input.description,
            symbol: input.symbol,
            timeframe: input.timeframe,
            risk_per_trade: input.risk_per_trade,
        }
    }
}

async fn landing_page(State(state): State<AppState>) -> Response {
    let strategies = state.panel.mount().await;
    render_page(StatusCode::OK, &strategies, &FormState::default())
}

async fn create_strategy(
    State(state): State<AppState>,
    Form(input): Form<StrategyFormInput>,
) -> Response {
    let mut form = FormState::with_fields(input.into());
    let status = match state.panel.submit(&mut form).await {
        SubmitOutcome::Rejected(_) => StatusCode::UNPROCESSABLE_ENTITY,
        SubmitOutcome::Created | SubmitOutcome::Failed => StatusCode::OK,
    };

    let strategies = state.panel.strategies().await;
    render_page(status, &strategies, &form)
}

async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

fn render_page(status: StatusCode, strategies: &[Strategy], form: &FormState) -> Response {
    match LandingPage::new(strategies, form).render() {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => {
            error!("Failed to render landing page: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to render page").into_response()
        }
    }
}
