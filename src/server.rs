use std::path::PathBuf;
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Form, Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use crate::catalog::list_symbols;
use crate::config::Config;
use crate::error::DataError;
use crate::page;
use crate::range::describe_range;
use crate::report::{generate, ReportRequest};
use crate::structs::Symbol;

/// Read-only for the life of the process.
#[derive(Clone)]
pub struct AppState {
    stocks_dir: Arc<PathBuf>,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            stocks_dir: Arc::new(config.stocks_dir.clone()),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/symbols", get(symbols))
        .route("/range", get(range))
        .route("/predict", post(predict))
        .route("/health", get(|| async { "ok" }))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// A failed request. The body is a plain-text message for the results box.
pub struct AppError(DataError);

impl From<DataError> for AppError {
    fn from(e: DataError) -> Self {
        Self(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            DataError::NoSymbol
            | DataError::InvalidSymbol(_)
            | DataError::InvalidDateInput(_)
            | DataError::CapitalOutOfRange(_) => StatusCode::BAD_REQUEST,
            DataError::MissingSymbol { .. } => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            error!("request failed: {}", self.0);
        } else {
            warn!("rejected request: {}", self.0);
        }
        (status, self.0.to_string()).into_response()
    }
}

async fn index(State(state): State<AppState>) -> Html<String> {
    Html(page::render(&list_symbols(&state.stocks_dir)))
}

async fn symbols(State(state): State<AppState>) -> Json<Vec<Symbol>> {
    Json(list_symbols(&state.stocks_dir))
}

#[derive(Deserialize)]
struct RangeQuery {
    symbol: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct RangeResponse {
    pub text: String,
}

async fn range(
    State(state): State<AppState>,
    Query(query): Query<RangeQuery>,
) -> Result<Json<RangeResponse>, AppError> {
    let text = describe_range(&state.stocks_dir, query.symbol.as_deref())?;
    Ok(Json(RangeResponse { text }))
}

#[derive(Serialize, Deserialize, Debug)]
pub struct PredictResponse {
    pub summary: String,
    pub chart: Option<String>,
    pub points: usize,
}

async fn predict(
    State(state): State<AppState>,
    Form(request): Form<ReportRequest>,
) -> Result<Json<PredictResponse>, AppError> {
    let outcome = generate(&state.stocks_dir, &request)?;
    let points = outcome.chart().map(|c| c.len()).unwrap_or(0);
    // Losing the picture should not lose the numbers.
    let chart = outcome.chart().and_then(|c| match c.render_svg() {
        Ok(svg) => Some(svg),
        Err(e) => {
            warn!("chart for {} not rendered: {}", c.title, e);
            None
        }
    });
    Ok(Json(PredictResponse {
        summary: outcome.summary(),
        chart,
        points,
    }))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use axum::body::Body;
    use axum::http::{header, Request};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use super::*;

    fn fixture() -> (tempfile::TempDir, Router) {
        let dir = tempfile::tempdir().unwrap();
        let mut csv = String::from("Date,Close\n");
        for day in 1..=10 {
            csv.push_str(&format!("2020-01-{day:02},{}\n", 300 + day));
        }
        fs::write(dir.path().join("AAPL.csv"), csv).unwrap();
        fs::write(dir.path().join("MSFT.csv"), "Date,Close\n2021-03-01,230.1\n").unwrap();

        let config = Config {
            stocks_dir: dir.path().to_path_buf(),
            ..Config::default()
        };
        let app = router(AppState::new(&config));
        (dir, app)
    }

    async fn get_body(app: Router, uri: &str) -> (StatusCode, String) {
        let res = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = res.status();
        let bytes = res.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    async fn post_form(app: Router, body: &str) -> (StatusCode, String) {
        let res = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/predict")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = res.status();
        let bytes = res.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn index_offers_catalog() {
        let (_dir, app) = fixture();
        let (status, html) = get_body(app, "/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("<option value=\"AAPL\">AAPL</option>"));
        assert!(html.contains("<option value=\"MSFT\">MSFT</option>"));
        assert!(html.contains("Select a stock"));
    }

    #[tokio::test]
    async fn symbols_are_sorted_json() {
        let (_dir, app) = fixture();
        let (status, body) = get_body(app, "/symbols").await;
        assert_eq!(status, StatusCode::OK);
        let symbols: Vec<String> = serde_json::from_str(&body).unwrap();
        assert_eq!(symbols, vec!["AAPL", "MSFT"]);
    }

    #[tokio::test]
    async fn missing_catalog_serves_empty_list() {
        let config = Config {
            stocks_dir: PathBuf::from("/definitely/not/here"),
            ..Config::default()
        };
        let app = router(AppState::new(&config));
        let (status, body) = get_body(app, "/symbols").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "[]");
    }

    #[tokio::test]
    async fn range_without_symbol_is_placeholder() {
        let (_dir, app) = fixture();
        let (status, body) = get_body(app, "/range").await;
        assert_eq!(status, StatusCode::OK);
        let range: RangeResponse = serde_json::from_str(&body).unwrap();
        assert_eq!(range.text, "Select a stock");
    }

    #[tokio::test]
    async fn range_for_symbol() {
        let (_dir, app) = fixture();
        let (status, body) = get_body(app, "/range?symbol=AAPL").await;
        assert_eq!(status, StatusCode::OK);
        let range: RangeResponse = serde_json::from_str(&body).unwrap();
        assert_eq!(range.text, "2020-01-01 → 2020-01-10");
    }

    #[tokio::test]
    async fn range_for_unknown_symbol_is_not_found() {
        let (_dir, app) = fixture();
        let (status, _) = get_body(app, "/range?symbol=GOOG").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn predict_reports_window() {
        let (_dir, app) = fixture();
        let (status, body) = post_form(
            app,
            "symbol=AAPL&capital=10000&start_date=2020-01-03&end_date=2020-01-05",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let res: PredictResponse = serde_json::from_str(&body).unwrap();
        assert!(res.summary.contains("$10,000.00"));
        assert!(res.summary.contains("$10,500.00"));
        assert_eq!(res.points, 3);
        let svg = res.chart.expect("ready report carries a chart");
        assert!(svg.contains("AAPL Price History"));
        assert!(svg.contains("Close Price"));
    }

    #[tokio::test]
    async fn predict_with_unprojectable_capital_is_bad_request() {
        let (_dir, app) = fixture();
        let (status, body) = post_form(
            app,
            "symbol=AAPL&capital=79228162514264337593543950335&start_date=2020-01-01&end_date=2020-01-10",
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("too large"));
    }

    #[tokio::test]
    async fn predict_without_symbol() {
        let (_dir, app) = fixture();
        let (status, body) =
            post_form(app, "symbol=&capital=10000&start_date=2020-01-03&end_date=2020-01-05").await;
        assert_eq!(status, StatusCode::OK);
        let res: PredictResponse = serde_json::from_str(&body).unwrap();
        assert_eq!(res.summary, "Missing inputs");
        assert!(res.chart.is_none());
        assert_eq!(res.points, 0);
    }

    #[tokio::test]
    async fn predict_outside_data() {
        let (_dir, app) = fixture();
        let (status, body) = post_form(
            app,
            "symbol=MSFT&capital=10000&start_date=2020-01-01&end_date=2020-12-31",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let res: PredictResponse = serde_json::from_str(&body).unwrap();
        assert_eq!(res.summary, "No data for selected range");
        assert!(res.chart.is_none());
    }

    #[tokio::test]
    async fn predict_with_bad_date_is_bad_request() {
        let (_dir, app) = fixture();
        let (status, body) = post_form(
            app,
            "symbol=AAPL&capital=10000&start_date=03%2F01%2F2020&end_date=2020-01-05",
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("03/01/2020"));
    }

    #[tokio::test]
    async fn health() {
        let (_dir, app) = fixture();
        assert_eq!(get_body(app, "/health").await, (StatusCode::OK, "ok".to_string()));
    }
}
