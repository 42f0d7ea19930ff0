use std::future::{Future, IntoFuture};
use std::io::{self, Write};
use std::time::Duration;

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::{
        header::{
            ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN, ALLOW, CONTENT_LENGTH,
            CONTENT_TYPE,
        },
        StatusCode, Uri,
    },
    response::{IntoResponse, Response},
    Router,
};
use echo_core::{
    decode_body, declared_content_length, EchoMethod, Envelope, ExchangeTrace, RequestTrace,
};
use tokio::{net::TcpListener, sync::oneshot};
use tracing::{debug, error, info, info_span, warn, Instrument};
use uuid::Uuid;

pub mod banner;
pub mod config;
pub mod error;
pub mod logging;

pub use config::Config;
pub use error::ServerError;

/// Every path and every method lands on the same handler.
pub fn app() -> Router {
    Router::new().fallback(echo)
}

/// How long open connections get to finish once shutdown starts.
pub const DRAIN_TIMEOUT: Duration = Duration::from_secs(2);

/// Serve until `shutdown` resolves, then stop accepting connections.
///
/// Connections still open after [`DRAIN_TIMEOUT`] are abandoned, so a
/// stalled client cannot hold the process up.
pub async fn run_until<F>(listener: TcpListener, shutdown: F) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let (drain, draining) = oneshot::channel::<()>();
    let serve = axum::serve(listener, app())
        .with_graceful_shutdown(async move {
            let _ = draining.await;
        })
        .into_future();
    tokio::pin!(serve);

    tokio::select! {
        result = &mut serve => return result.map_err(ServerError::from),
        () = shutdown => {}
    }

    let _ = drain.send(());
    match tokio::time::timeout(DRAIN_TIMEOUT, serve).await {
        Ok(result) => result?,
        Err(_) => warn!(timeout = ?DRAIN_TIMEOUT, "abandoning open connections"),
    }
    info!("listener stopped");
    Ok(())
}

async fn echo(request: Request) -> Response {
    let span = info_span!(
        "request",
        id = %Uuid::new_v4(),
        method = %request.method(),
        path = %request_path(request.uri()),
    );
    handle(request).instrument(span).await
}

async fn handle(request: Request) -> Response {
    let Ok(method) = request.method().as_str().parse::<EchoMethod>() else {
        warn!("unsupported method");
        return method_not_allowed();
    };

    let path = request_path(request.uri()).to_string();
    let headers = request.headers().iter().map(|(name, value)| {
        (
            name.as_str(),
            String::from_utf8_lossy(value.as_bytes()).into_owned(),
        )
    });
    let mut trace = RequestTrace::new(method, &path, headers);

    if method.reads_body() {
        let declared = declared_content_length(
            request
                .headers()
                .get(CONTENT_LENGTH)
                .and_then(|v| v.to_str().ok()),
        );
        let bytes = match Bytes::from_request(request, &()).await {
            Ok(bytes) => bytes,
            Err(rejection) => {
                warn!(%rejection, "failed to read request body");
                print_trace(&ExchangeTrace {
                    request: &trace,
                    response: None,
                });
                return rejection.into_response();
            }
        };
        trace = trace.with_body(decode_body(&bytes, declared));
    }

    let envelope = Envelope::for_request(method, &path, trace.body.as_deref());
    let response = match &envelope {
        Some(envelope) => json_response(envelope),
        None => preflight_response(),
    };
    print_trace(&ExchangeTrace {
        request: &trace,
        response: envelope.as_ref(),
    });
    response
}

/// Write one request's trace to stdout while holding the lock, so traces
/// from concurrent connections never interleave.
fn print_trace(trace: &ExchangeTrace<'_>) {
    let mut out = io::stdout().lock();
    if let Err(err) = write_trace(&mut out, trace) {
        debug!(%err, "failed to write console trace");
    }
}

fn write_trace<W: Write>(out: &mut W, trace: &ExchangeTrace<'_>) -> io::Result<()> {
    writeln!(out, "{trace}")?;
    out.flush()
}

/// Path plus query string, verbatim.
fn request_path(uri: &Uri) -> &str {
    uri.path_and_query().map_or("/", |pq| pq.as_str())
}

fn json_response(envelope: &Envelope) -> Response {
    let body = match envelope.to_pretty_json() {
        Ok(body) => body,
        Err(err) => {
            error!(%err, "failed to serialize envelope");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };
    debug!(status = envelope.status, "responding");
    (
        StatusCode::OK,
        [
            (CONTENT_TYPE, "application/json"),
            (ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
        ],
        body,
    )
        .into_response()
}

fn preflight_response() -> Response {
    let allow = EchoMethod::allow_header_value();
    (
        StatusCode::OK,
        [
            (ALLOW, allow.clone()),
            (ACCESS_CONTROL_ALLOW_ORIGIN, "*".to_string()),
            (ACCESS_CONTROL_ALLOW_METHODS, allow),
        ],
    )
        .into_response()
}

fn method_not_allowed() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        [(ALLOW, EchoMethod::allow_header_value())],
    )
        .into_response()
}
