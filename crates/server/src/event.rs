//! Read-only view over an inbound attribute-collection-submit event.
//!
//! The event is kept as an untyped [`serde_json::Value`]: the identity platform sends
//! far more than this hook consumes and no schema is enforced. Every accessor walks its
//! path null-safely, so a missing intermediate node is reported as `None` instead of
//! failing the request.

use serde_json::Value;

/// `signInType` value that marks a sign-up through an external identity provider.
pub const FEDERATED_SIGN_IN_TYPE: &str = "federated";

const SIGN_UP_INFO: &str = "/data/userSignUpInfo";

#[derive(Debug, Clone, Copy)]
pub struct SignUpEvent<'a> {
    root: &'a Value,
}

impl<'a> SignUpEvent<'a> {
    pub fn new(root: &'a Value) -> Self {
        Self { root }
    }

    fn sign_up_info(&self, rest: &str) -> Option<&'a Value> {
        self.root.pointer(&format!("{SIGN_UP_INFO}{rest}"))
    }

    /// First entry of `identities`, if the list exists and is non-empty.
    fn first_identity(&self) -> Option<&'a Value> {
        self.sign_up_info("/identities")?.as_array()?.first()
    }

    /// `identities[0].signInType`, only when it is a JSON string.
    pub fn sign_in_type(&self) -> Option<&'a str> {
        self.first_identity()?.get("signInType")?.as_str()
    }

    pub fn is_federated(&self) -> bool {
        self.sign_in_type() == Some(FEDERATED_SIGN_IN_TYPE)
    }

    /// `identities[0].issuerAssignedId` as text.
    pub fn issuer_assigned_id(&self) -> Option<String> {
        self.first_identity()?
            .get("issuerAssignedId")
            .and_then(text_of)
    }

    /// `attributes.<name>.value` as text.
    pub fn attribute_value(&self, name: &str) -> Option<String> {
        self.sign_up_info("/attributes")?
            .get(name)?
            .get("value")
            .and_then(text_of)
    }
}

/// Textual form of a JSON node: strings yield their content, `null` yields nothing,
/// numbers and booleans yield their literal, arrays and objects yield indented JSON.
pub fn text_of(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Array(_) | Value::Object(_) => serde_json::to_string_pretty(value).ok(),
        Value::Bool(_) | Value::Number(_) => Some(value.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn federated_event() -> Value {
        json!({
            "data": {
                "userSignUpInfo": {
                    "identities": [{
                        "signInType": "federated",
                        "issuer": "https://my-idp.com",
                        "issuerAssignedId": "1234567890"
                    }],
                    "attributes": {
                        "givenName": { "value": "David" },
                        "surname": { "value": "H." }
                    }
                }
            }
        })
    }

    #[test]
    fn reads_nested_fields() {
        let raw = federated_event();
        let event = SignUpEvent::new(&raw);
        assert_eq!(event.sign_in_type(), Some("federated"));
        assert!(event.is_federated());
        assert_eq!(event.issuer_assigned_id().as_deref(), Some("1234567890"));
        assert_eq!(event.attribute_value("givenName").as_deref(), Some("David"));
        assert_eq!(event.attribute_value("surname").as_deref(), Some("H."));
    }

    #[test]
    fn missing_intermediate_nodes_are_absent() {
        for raw in [
            json!({}),
            json!({ "data": null }),
            json!({ "data": { "userSignUpInfo": {} } }),
            json!({ "data": { "userSignUpInfo": { "identities": [] } } }),
            json!({ "data": { "userSignUpInfo": { "identities": {} } } }),
            json!([1, 2, 3]),
            json!("federated"),
        ] {
            let event = SignUpEvent::new(&raw);
            assert_eq!(event.sign_in_type(), None, "input: {raw}");
            assert!(!event.is_federated());
            assert_eq!(event.issuer_assigned_id(), None);
            assert_eq!(event.attribute_value("givenName"), None);
        }
    }

    #[test]
    fn only_exact_string_is_federated() {
        for sign_in_type in [
            json!("Federated"),
            json!("federated "),
            json!("emailAddress"),
            json!(null),
            json!(true),
            json!(1),
            json!({ "value": "federated" }),
        ] {
            let raw = json!({
                "data": { "userSignUpInfo": { "identities": [{ "signInType": sign_in_type }] } }
            });
            assert!(!SignUpEvent::new(&raw).is_federated(), "input: {raw}");
        }
    }

    #[test]
    fn only_first_identity_is_consulted() {
        let raw = json!({
            "data": { "userSignUpInfo": { "identities": [
                { "signInType": "emailAddress" },
                { "signInType": "federated", "issuerAssignedId": "other" }
            ] } }
        });
        let event = SignUpEvent::new(&raw);
        assert!(!event.is_federated());
        assert_eq!(event.issuer_assigned_id(), None);
    }

    #[test]
    fn non_string_values_use_their_json_text() {
        assert_eq!(text_of(&json!(42)), Some("42".to_string()));
        assert_eq!(text_of(&json!(true)), Some("true".to_string()));
        assert_eq!(text_of(&json!(["a"])), Some("[\n  \"a\"\n]".to_string()));
        assert_eq!(
            text_of(&json!({ "id": 7 })),
            Some("{\n  \"id\": 7\n}".to_string())
        );
        assert_eq!(text_of(&json!(null)), None);
    }
}
