use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Discriminator of the submit response payload.
pub const SUBMIT_RESPONSE_DATA_TYPE: &str =
    "microsoft.graph.onAttributeCollectionSubmitResponseData";

/// Response document returned to the identity platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SubmitResponse {
    pub data: SubmitResponseData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SubmitResponseData {
    #[serde(rename = "@odata.type")]
    pub odata_type: String,
    pub actions: Vec<SubmitAction>,
}

/// Follow-up behaviour requested from the identity platform.
///
/// The default-continue variant serializes without an `attributes` field at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "@odata.type")]
pub enum SubmitAction {
    #[serde(rename = "microsoft.graph.attributeCollectionSubmit.continueWithDefaultBehavior")]
    ContinueWithDefaultBehavior,
    #[serde(rename = "microsoft.graph.attributeCollectionSubmit.modifyAttributeValues")]
    ModifyAttributeValues { attributes: AttributeOverrides },
}

/// Attribute values written to the account instead of the collected ones.
///
/// Field order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AttributeOverrides {
    pub display_name: String,
    /// Holds the external identity's `issuerAssignedId`; consumers read it from `city`.
    pub city: String,
}

impl SubmitResponse {
    fn with_action(action: SubmitAction) -> Self {
        SubmitResponse {
            data: SubmitResponseData {
                odata_type: SUBMIT_RESPONSE_DATA_TYPE.to_string(),
                actions: vec![action],
            },
        }
    }

    pub fn continue_with_default() -> Self {
        Self::with_action(SubmitAction::ContinueWithDefaultBehavior)
    }

    pub fn modify_attributes(attributes: AttributeOverrides) -> Self {
        Self::with_action(SubmitAction::ModifyAttributeValues { attributes })
    }

    /// The single action carried by this document.
    pub fn action(&self) -> Option<&SubmitAction> {
        self.data.actions.first()
    }
}

impl SubmitAction {
    pub fn name(&self) -> &'static str {
        match self {
            SubmitAction::ContinueWithDefaultBehavior => "continueWithDefaultBehavior",
            SubmitAction::ModifyAttributeValues { .. } => "modifyAttributeValues",
        }
    }
}
