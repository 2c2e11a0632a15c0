#![allow(dead_code)]

use axum::{
    extract::Path,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use dealership_api::{
    build_router,
    config::Config,
    repository::{InMemoryCarRepository, InMemoryUserRepository},
    service::AppState,
    upstream::HttpUpstream,
};
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

pub struct TestApp {
    pub addr: SocketAddr,
    pub cars: Arc<InMemoryCarRepository>,
    pub users: Arc<InMemoryUserRepository>,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}/djangoapp{}", self.addr, path)
    }
}

async fn serve(app: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    // Wait until the listener accepts connections
    let mut retries = 0;
    while retries < 10 {
        if tokio::net::TcpStream::connect(addr).await.is_ok() {
            break;
        }
        tokio::time::sleep(Duration::from_millis(50)).await;
        retries += 1;
    }

    addr
}

fn dealers() -> Value {
    json!([
        {"id": 1, "city": "El Paso", "state": "Texas", "st": "TX", "full_name": "Holdlamis Car Dealership", "zip": "88563"},
        {"id": 2, "city": "Minneapolis", "state": "Minnesota", "st": "MN", "full_name": "Temp Car Dealership", "zip": "55458"},
        {"id": 15, "city": "Topeka", "state": "Kansas", "st": "KS", "full_name": "Best Cars", "zip": "66611"}
    ])
}

async fn fetch_dealers() -> Json<Value> {
    Json(dealers())
}

async fn fetch_dealers_by_state(Path(state): Path<String>) -> impl IntoResponse {
    let matching: Vec<Value> = dealers()
        .as_array()
        .into_iter()
        .flatten()
        .filter(|d| d["state"] == state.as_str())
        .cloned()
        .collect();

    if matching.is_empty() {
        (StatusCode::NOT_FOUND, Json(json!({"message": "No dealers found in this state"})))
    } else {
        (StatusCode::OK, Json(Value::Array(matching)))
    }
}

async fn fetch_dealer(Path(id): Path<i64>) -> impl IntoResponse {
    match dealers().as_array().and_then(|all| all.iter().find(|d| d["id"] == id).cloned()) {
        Some(dealer) => (StatusCode::OK, Json(dealer)),
        None => (StatusCode::NOT_FOUND, Json(json!({"message": "Dealer not found"}))),
    }
}

async fn fetch_reviews(Path(id): Path<i64>) -> impl IntoResponse {
    match id {
        15 => (
            StatusCode::OK,
            Json(json!([
                {"id": 1, "name": "Berkly Shepley", "dealership": 15, "review": "Fantastic services", "purchase": true, "car_make": "Audi", "car_model": "A6", "car_year": 2010},
                {"id": 2, "name": "Gwenora Zettoi", "dealership": 15, "review": "Terrible paperwork", "purchase": false},
                {"id": 3, "name": "Quiet Customer", "dealership": 15, "review": "mute reply please", "purchase": false},
                {"id": 4, "name": "Plain Visitor", "dealership": 15, "review": "Average visit", "purchase": false}
            ])),
        ),
        99 => (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({"error": "Error fetching documents"}))),
        _ => (StatusCode::OK, Json(json!([]))),
    }
}

async fn insert_review(Json(review): Json<Value>) -> Json<Value> {
    let mut saved = review;
    saved["id"] = json!(1001);
    Json(saved)
}

async fn analyze(Path(text): Path<String>) -> impl IntoResponse {
    let lower = text.to_lowercase();
    if lower.contains("fantastic") {
        (StatusCode::OK, Json(json!({"sentiment": "positive"})))
    } else if lower.contains("terrible") {
        (StatusCode::OK, Json(json!({"sentiment": "negative"})))
    } else if lower.contains("mute") {
        (StatusCode::OK, Json(json!({})))
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, Json(json!({"error": "model not loaded"})))
    }
}

/// Starts a stand-in for both the inventory backend and the sentiment analyzer.
pub async fn spawn_upstream() -> SocketAddr {
    let app = Router::new()
        .route("/fetchDealers", get(fetch_dealers))
        .route("/fetchDealers/:state", get(fetch_dealers_by_state))
        .route("/fetchDealer/:id", get(fetch_dealer))
        .route("/fetchReviews/dealer/:id", get(fetch_reviews))
        .route("/insert_review", post(insert_review))
        .route("/analyze/:text", get(analyze));

    serve(app).await
}

/// An address nothing listens on.
pub fn unreachable_addr() -> SocketAddr {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}

pub async fn spawn_app(upstream: SocketAddr) -> TestApp {
    spawn_app_with_session_ttl(upstream, Duration::from_secs(3600)).await
}

pub async fn spawn_app_with_session_ttl(upstream: SocketAddr, session_ttl: Duration) -> TestApp {
    let mut config = Config::from_lookup(|_| None);
    config.backend_url = format!("http://{}", upstream);
    config.sentiment_analyzer_url = format!("http://{}/", upstream);
    config.upstream_timeout = Duration::from_secs(2);
    config.session_ttl = session_ttl;

    let cars = Arc::new(InMemoryCarRepository::new());
    let users = Arc::new(InMemoryUserRepository::new());
    let state = AppState::new(
        cars.clone(),
        users.clone(),
        Arc::new(HttpUpstream::new(&config).unwrap()),
        config.session_ttl,
    );

    let addr = serve(build_router(state)).await;
    TestApp { addr, cars, users }
}

/// `Cookie` header value carrying the session issued in `response`.
pub fn session_cookie_from(response: &reqwest::Response) -> String {
    let set_cookie = response
        .headers()
        .get(reqwest::header::SET_COOKIE)
        .expect("login should set a session cookie")
        .to_str()
        .unwrap();
    set_cookie.split(';').next().unwrap().to_string()
}
