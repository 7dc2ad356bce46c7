//! Decision logic for the attribute-collection-submit hook.

use serde_json::Value;

use crate::error::HookError;
use crate::event::SignUpEvent;
use crate::response::{AttributeOverrides, SubmitResponse};
use crate::security::BoundedJsonParser;

const GIVEN_NAME: &str = "givenName";
const SURNAME: &str = "surname";

/// Parse a raw request body and decide the response for it.
///
/// A body that fails to parse never yields a response document.
pub fn handle_body(body: &[u8], parser: &BoundedJsonParser) -> Result<SubmitResponse, HookError> {
    let event = parser.parse(body)?;
    Ok(evaluate(&event))
}

/// Decide the response for an already parsed event.
///
/// Non-federated sign-ups continue with default behaviour. Federated sign-ups get
/// `displayName` set to "<givenName> <surname>" and `city` set to the identity's
/// `issuerAssignedId`.
pub fn evaluate(raw: &Value) -> SubmitResponse {
    let event = SignUpEvent::new(raw);
    if !event.is_federated() {
        return SubmitResponse::continue_with_default();
    }

    let given_name = required_attribute(&event, GIVEN_NAME);
    let surname = required_attribute(&event, SURNAME);
    let city = event.issuer_assigned_id().unwrap_or_default();

    SubmitResponse::modify_attributes(AttributeOverrides {
        display_name: format!("{given_name} {surname}"),
        city,
    })
}

fn required_attribute(event: &SignUpEvent<'_>, name: &str) -> String {
    event.attribute_value(name).unwrap_or_else(|| {
        tracing::warn!(
            attribute = name,
            "federated sign-up without attribute value, using empty string"
        );
        String::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::SubmitAction;
    use serde_json::json;

    fn overrides(response: &SubmitResponse) -> &AttributeOverrides {
        match response.action() {
            Some(SubmitAction::ModifyAttributeValues { attributes }) => attributes,
            other => panic!("expected modifyAttributeValues, got {other:?}"),
        }
    }

    fn federated(identity: Value, attributes: Value) -> Value {
        json!({
            "data": {
                "userSignUpInfo": {
                    "identities": [identity],
                    "attributes": attributes
                }
            }
        })
    }

    #[test]
    fn federated_sign_up_is_rewritten() {
        let raw = federated(
            json!({ "signInType": "federated", "issuerAssignedId": "1234567890" }),
            json!({ "givenName": { "value": "David" }, "surname": { "value": "H." } }),
        );
        let response = evaluate(&raw);
        assert_eq!(response.data.actions.len(), 1);
        assert_eq!(
            overrides(&response),
            &AttributeOverrides {
                display_name: "David H.".into(),
                city: "1234567890".into(),
            }
        );
    }

    #[test]
    fn names_are_joined_without_trimming() {
        let raw = federated(
            json!({ "signInType": "federated", "issuerAssignedId": "id" }),
            json!({ "givenName": { "value": " Ada " }, "surname": { "value": "" } }),
        );
        assert_eq!(overrides(&evaluate(&raw)).display_name, " Ada  ");
    }

    #[test]
    fn missing_issuer_assigned_id_yields_empty_city() {
        let raw = federated(
            json!({ "signInType": "federated" }),
            json!({ "givenName": { "value": "David" }, "surname": { "value": "H." } }),
        );
        let response = evaluate(&raw);
        assert_eq!(overrides(&response).city, "");
        assert_eq!(overrides(&response).display_name, "David H.");
    }

    #[test]
    fn missing_names_default_to_empty() {
        let raw = federated(
            json!({ "signInType": "federated", "issuerAssignedId": "x" }),
            json!({ "surname": { "value": "H." } }),
        );
        assert_eq!(overrides(&evaluate(&raw)).display_name, " H.");

        let raw = json!({
            "data": { "userSignUpInfo": { "identities": [{ "signInType": "federated" }] } }
        });
        assert_eq!(
            overrides(&evaluate(&raw)),
            &AttributeOverrides {
                display_name: " ".into(),
                city: String::new(),
            }
        );
    }

    #[test]
    fn non_federated_sign_ups_continue() {
        for raw in [
            json!({}),
            json!({ "data": { "userSignUpInfo": { "identities": [] } } }),
            federated(
                json!({ "signInType": "emailAddress", "issuerAssignedId": "x" }),
                json!({ "givenName": { "value": "A" }, "surname": { "value": "B" } }),
            ),
            federated(json!({ "signInType": null }), json!({})),
        ] {
            assert_eq!(evaluate(&raw), SubmitResponse::continue_with_default());
        }
    }

    #[test]
    fn malformed_body_is_an_error() {
        let parser = BoundedJsonParser::default();
        assert!(handle_body(b"not json", &parser).is_err());
        assert!(handle_body(b"{\"data\":", &parser).is_err());
    }

    #[test]
    fn identical_bodies_give_identical_output() {
        let parser = BoundedJsonParser::default();
        let body = serde_json::to_vec(&federated(
            json!({ "signInType": "federated", "issuerAssignedId": "42" }),
            json!({ "givenName": { "value": "A" }, "surname": { "value": "B" } }),
        ))
        .unwrap();
        let first = serde_json::to_vec(&handle_body(&body, &parser).unwrap()).unwrap();
        let second = serde_json::to_vec(&handle_body(&body, &parser).unwrap()).unwrap();
        assert_eq!(first, second);
    }
}
