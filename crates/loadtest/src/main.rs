use goose::prelude::*;
use serde_json::{Value, json};
use std::env;

const HOOK_PATH: &str = "/api/ModifySignUpUserAttributes";

fn sign_up_event(sign_in_type: &str) -> Value {
    let issuer_assigned_id =
        env::var("ISSUER_ASSIGNED_ID").unwrap_or_else(|_| "1234567890".to_string());
    json!({
        "data": {
            "userSignUpInfo": {
                "identities": [{
                    "signInType": sign_in_type,
                    "issuer": "https://my-idp.com",
                    "issuerAssignedId": issuer_assigned_id
                }],
                "attributes": {
                    "givenName": { "value": "David" },
                    "surname": { "value": "H." }
                }
            }
        }
    })
}

async fn health_check(user: &mut GooseUser) -> TransactionResult {
    let _goose_metrics = user.get("/healthz").await?;
    Ok(())
}

async fn submit_federated(user: &mut GooseUser) -> TransactionResult {
    let _goose_metrics = user.post_json(HOOK_PATH, &sign_up_event("federated")).await?;
    Ok(())
}

async fn submit_email(user: &mut GooseUser) -> TransactionResult {
    let _goose_metrics = user
        .post_json(HOOK_PATH, &sign_up_event("emailAddress"))
        .await?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), GooseError> {
    println!(
        "issuerAssignedId used in events: {}",
        env::var("ISSUER_ASSIGNED_ID").unwrap_or_else(|_| "1234567890".to_string())
    );

    GooseAttack::initialize()?
        .register_scenario(
            scenario!("HealthCheck").register_transaction(transaction!(health_check)),
        )
        .register_scenario(
            scenario!("AttributeSubmit")
                .register_transaction(transaction!(submit_federated))
                .register_transaction(transaction!(submit_email)),
        )
        .execute()
        .await?;

    Ok(())
}
