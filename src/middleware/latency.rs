use axum::{
    extract::{Request, State},
    http::Method,
    middleware::Next,
    response::Response,
};
use std::time::Duration;

use crate::router::RecordsState;

const READ_DELAY: Duration = Duration::from_millis(200);
const WRITE_DELAY: Duration = Duration::from_millis(400);

/// Fixed delay for the matched API route, before its extractors run.
pub fn delay_for(method: &Method) -> Duration {
    match *method {
        Method::GET | Method::POST => READ_DELAY,
        _ => WRITE_DELAY,
    }
}

pub async fn simulate_latency(
    State(state): State<RecordsState>,
    req: Request,
    next: Next,
) -> Response {
    state.delay(delay_for(req.method())).await;
    next.run(req).await
}
