//! OpenAPI/Utoipa configuration.

use crate::api::{health::MISC_TAG, submit::HOOK_TAG};
use utoipa::OpenApi;

/// OpenAPI documentation configuration.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Attribute Submit Hook API",
        version = "1.0.0",
        description = "Custom authentication extension invoked when a user submits \
                       sign-up attributes. Callers are authenticated by the hosting gateway."
    ),
    tags(
        (name = MISC_TAG, description = "Miscellaneous endpoints"),
        (name = HOOK_TAG, description = "Authentication event webhooks")
    )
)]
pub struct ApiDoc;
