//! Attribute collection submit webhook.

use crate::{
    AppResources,
    error::HookError,
    logging::wide_events::WideEvent,
    response::SubmitResponse,
    submit::handle_body,
};
use axum::{
    http::{StatusCode, header},
    response::IntoResponse,
};
use bytes::Bytes;
use utoipa_axum::{router::OpenApiRouter, routes};

/// Tag for OpenAPI documentation.
pub const HOOK_TAG: &str = "Authentication Events";

pub fn router() -> OpenApiRouter {
    OpenApiRouter::new().routes(routes!(modify_sign_up_user_attributes))
}

/// The body is taken as raw bytes so that the identity platform's content type is
/// never a reason to reject the event.
#[tracing::instrument(skip(resources, body))]
#[utoipa::path(
    post,
    path = "/ModifySignUpUserAttributes",
    tag = HOOK_TAG,
    operation_id = "Modify Sign-Up User Attributes",
    summary = "Attribute collection submit handler",
    description = "Inspects `data.userSignUpInfo.identities[0].signInType`. Federated sign-ups \
                   receive a `modifyAttributeValues` action that sets `displayName` to \
                   \"<givenName> <surname>\" and `city` to the identity's `issuerAssignedId`. \
                   Every other sign-up receives `continueWithDefaultBehavior`.",
    request_body(content = serde_json::Value, description = "Attribute collection submit event", content_type = "application/json"),
    responses(
        (status = 200, description = "Action for the identity platform", body = SubmitResponse, content_type = "application/json"),
        (status = 413, description = "Body exceeds the configured transport limit"),
        (status = 500, description = "Body was not a well-formed event", content_type = "application/json")
    )
)]
pub async fn modify_sign_up_user_attributes(
    axum::Extension(resources): axum::Extension<AppResources>,
    body: Bytes,
) -> Result<impl IntoResponse, HookError> {
    let evt = WideEvent::new("attribute_submit");
    let _enter = evt.span().enter();
    evt.add("body_bytes", body.len());

    let payload = handle_body(&body, &resources.parser).and_then(|response| {
        if let Some(action) = response.action() {
            evt.add("action", action.name());
        }
        serde_json::to_vec(&response).map_err(HookError::Serialize)
    });
    let payload = match payload {
        Ok(payload) => payload,
        Err(e) => {
            evt.add("error", &e);
            if e.is_client_fault() {
                evt.warn("processed a request");
            } else {
                evt.error("processed a request");
            }
            return Err(e);
        }
    };
    evt.info("processed a request");

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        payload,
    ))
}
