// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Per-request attribution for order history.

use axum::{
    extract::{FromRequestParts, OriginalUri},
    http::request::Parts,
};
use std::convert::Infallible;
use svc_orders_audit::{Actor, Cause};
use tracing::debug;

/// Header naming the operator who issued the request.
pub const ACTOR_HEADER: &str = "x-actor-id";

/// Who made the request and which request it was.
///
/// The actor comes from the `x-actor-id` header; a missing or blank header
/// yields [`Actor::anonymous`]. The cause records the method and path.
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub actor: Actor,
    pub cause: Cause,
}

impl RequestContext {
    fn from_parts(parts: &Parts) -> Self {
        let actor: Actor = parts
            .headers
            .get(ACTOR_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map_or_else(Actor::anonymous, |id| {
                Actor::new(id.to_string(), String::from("operator"))
            });

        // Nested routers see a stripped URI; record the full path.
        let path: &str = parts
            .extensions
            .get::<OriginalUri>()
            .map_or_else(|| parts.uri.path(), |original| original.0.path());
        let cause: Cause = Cause::new(
            format!("{} {path}", parts.method),
            String::from("HTTP request"),
        );

        Self { actor, cause }
    }
}

impl<S> FromRequestParts<S> for RequestContext
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let context = Self::from_parts(parts);
        debug!(actor_id = %context.actor.id, cause = %context.cause.id, "Request context");
        Ok(context)
    }
}
