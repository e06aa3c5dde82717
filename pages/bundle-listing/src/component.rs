//! Spin HTTP component entry point.

use bundle_catalog::{bundle_cards, CatalogError};
use shop_auth::resolve_session;
use shop_core::{Method, RequestContext};
use shop_db::Db;
use shop_observability::{LogLevel, StructuredLogger};
use spin_sdk::http::{Request, Response};
use spin_sdk::http_component;

use crate::data::load_bundles;
use crate::{render_error_page, render_page};

/// Handle one navigation to the bundle listing route.
#[http_component]
fn handle_bundle_listing(req: Request) -> Response {
    let method = convert_method(req.method());
    let ctx = request_context(&req, method);
    let logger = StructuredLogger::new(ctx.request_id.clone())
        .with_page("bundle-listing")
        .with_route(&ctx.path)
        .with_min_level(LogLevel::Debug);

    if method != Some(Method::Get) {
        return html_response(405, render_error_page("Method not allowed"), &ctx);
    }

    let session = match resolve_session(&ctx) {
        Ok(session) => session,
        Err(e) => {
            logger
                .warn_builder("session resolution failed")
                .field("error", e.to_string())
                .emit();
            return html_response(401, render_error_page("No shop session"), &ctx);
        }
    };

    let outcome = Db::open_default()
        .map_err(CatalogError::from)
        .and_then(|db| load_bundles(&db, &session));

    match outcome {
        Ok(records) => {
            let cards = bundle_cards(&records);
            logger
                .info_builder("bundle listing rendered")
                .field("shop", session.shop.as_str())
                .field_i64("bundles", cards.len() as i64)
                .emit();
            html_response(200, render_page(&cards), &ctx)
        }
        Err(err) => {
            match &err {
                CatalogError::NotFound => logger.warn("no bundles found"),
                CatalogError::Fetch(cause) => logger
                    .error_builder("bundle fetch failed")
                    .field("cause", cause.to_string())
                    .emit(),
            }
            let body = match &err {
                CatalogError::NotFound => render_error_page("No bundles found"),
                // Generic message outward; the cause stays in the log.
                CatalogError::Fetch(_) => render_error_page("Failed to fetch bundles data"),
            };
            html_response(err.status(), body, &ctx)
        }
    }
}

fn request_context(req: &Request, method: Option<Method>) -> RequestContext {
    // The context wants a concrete method; for unknown ones the placeholder
    // is never observed because the handler rejects them up front.
    let mut ctx = RequestContext::new(method.unwrap_or(Method::Get), req.path());
    for pair in req.query().split('&').filter(|p| !p.is_empty()) {
        let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
        ctx.query.insert(name.to_string(), value.to_string());
    }
    for (name, value) in req.headers() {
        if let Some(v) = value.as_str() {
            ctx.headers.insert(name.to_string(), v.to_string());
        }
    }
    ctx
}

/// Map the wire method onto ours. Anything we never serve collapses to
/// `None` and gets the 405 path.
fn convert_method(method: &spin_sdk::http::Method) -> Option<Method> {
    use spin_sdk::http::Method as Wire;
    match method {
        Wire::Get => Some(Method::Get),
        Wire::Post => Some(Method::Post),
        Wire::Put => Some(Method::Put),
        Wire::Delete => Some(Method::Delete),
        Wire::Patch => Some(Method::Patch),
        Wire::Head => Some(Method::Head),
        Wire::Options => Some(Method::Options),
        _ => None,
    }
}

fn html_response(status: u16, body: String, ctx: &RequestContext) -> Response {
    Response::builder()
        .status(status)
        .header("content-type", "text/html; charset=utf-8")
        .header("x-request-id", ctx.request_id.as_str())
        .body(body)
        .build()
}
