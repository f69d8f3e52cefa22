//! Rate limiting middleware using a cache-backed fixed-window counter.

use axum::{
    extract::{ConnectInfo, Request, State},
    middleware::Next,
    response::Response,
};
use std::net::SocketAddr;
use tracing::{error, warn};

use crate::application::services::Admission;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::client_ip::resolve_client_ip;

/// Admits or rejects a request before any other processing.
///
/// # Key Extraction
///
/// The identity is the client IP: the socket peer address, or the forwarding
/// headers when the service runs behind a trusted proxy (see
/// [`resolve_client_ip`]). The peer address is only available when the
/// server is started with `into_make_service_with_connect_info::<SocketAddr>()`.
///
/// # Errors
///
/// Returns `400 Bad Request` (plain text) if no identity can be determined.
/// Returns `429 Too Many Requests` (plain text) once the client has used up
/// its window.
///
/// A cache failure admits the request.
///
/// # Example
///
/// ```rust,ignore
/// let app = Router::new()
///     .route("/api/urlshortener/shorten", post(shorten_handler))
///     .layer(middleware::from_fn_with_state(state.clone(), rate_limit::layer));
/// ```
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let peer = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| *addr);

    let ip = resolve_client_ip(req.headers(), peer, st.behind_proxy).ok_or_else(|| {
        warn!("Unable to determine client IP address");
        AppError::ClientIdentityUnavailable
    })?;

    match st.rate_limiter.check(&ip.to_string()).await {
        Ok(Admission::Admitted { .. }) => {}
        Ok(Admission::Rejected { .. }) => return Err(AppError::RateLimitExceeded),
        Err(e) => error!(error = ?e, "Rate limiter unavailable, admitting request"),
    }

    Ok(next.run(req).await)
}
