//! # Populate Elements Utility
//!
//! Bulk-creates numbered attendee elements on a page. Element `n` is a
//! select field bound to the given option list, labelled from the n-th line
//! of `customer_contact_approvals.attendees` and shown only when
//! `customer_contact_approvals.attendees_count >= n`.
//!
//! ## Usage
//!
//! ```bash
//! SERVER=acme CLIENT_KEY=... CLIENT_SECRET=... \
//! PROFILE_ID=490141 PAGE_ID=3780454 OPTIONLIST_ID=4941145 \
//! cargo run --bin populate_elements
//! ```
//!
//! Variables are also read from a `.env` file. Optional: `REGION` (default
//! `us`), `API_VERSION` (default `8`), `ELEMENT_COUNT` (default `100`),
//! `ZERION_LOG` and `ZERION_LOG_FILE`.

use anyhow::Context;
use serde_json::json;
use zerion_sdk::{build_dispatch, Client, ClientConfig, LogConfig};

/// Select (option list) element data type.
const SELECT_DATA_TYPE: u64 = 7;

fn required(name: &str) -> anyhow::Result<String> {
    std::env::var(name).with_context(|| format!("missing environment variable {name}"))
}

fn optional(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

fn parse_id(name: &str) -> anyhow::Result<u64> {
    required(name)?
        .parse()
        .with_context(|| format!("{name} must be a numeric id"))
}

/// Body of the n-th attendee element (1-based).
fn attendee_element(n: u64, optionlist_id: u64) -> serde_json::Value {
    json!({
        "label": format!("Attendee {n}"),
        "name": format!("attendee_{n}"),
        "data_type": SELECT_DATA_TYPE,
        "optionlist_id": optionlist_id,
        "dynamic_label": format!(
            r#"customer_contact_approvals.attendees.split("\n")[{}].split(",")[0]"#,
            n - 1
        ),
        "condition_value": format!("customer_contact_approvals.attendees_count >= {n}"),
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let dispatch = build_dispatch(&LogConfig::from_env()).context("failed to open log file")?;
    tracing::dispatcher::set_global_default(dispatch)
        .context("failed to install log subscriber")?;

    let server = required("SERVER")?;
    let region = optional("REGION", "us");
    let client_key = required("CLIENT_KEY")?;
    let client_secret = required("CLIENT_SECRET")?;
    let version: f64 = optional("API_VERSION", "8")
        .parse()
        .context("API_VERSION must be a number")?;

    let profile_id = parse_id("PROFILE_ID")?;
    let page_id = parse_id("PAGE_ID")?;
    let optionlist_id = parse_id("OPTIONLIST_ID")?;
    let count: u64 = optional("ELEMENT_COUNT", "100")
        .parse()
        .context("ELEMENT_COUNT must be a positive integer")?;

    let config = ClientConfig::new(&server, &region, &client_key, &client_secret, version)?
        .simple_response(true);
    let client = Client::new(config).await;

    if let Some(err) = client.take_auth_error() {
        return Err(err).context("authentication failed");
    }

    tracing::info!(profile_id, page_id, count, "creating attendee elements");

    let elements = client.elements();
    for n in 1..=count {
        let response = elements
            .post_elements(profile_id, page_id, attendee_element(n, optionlist_id))
            .await?;
        println!("{}", response);
    }

    tracing::info!(
        api_calls = client.api_count(),
        lifetime_secs = client.api_lifetime(),
        "done"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attendee_element() {
        let body = attendee_element(3, 4941145);
        assert_eq!(body["label"], "Attendee 3");
        assert_eq!(body["name"], "attendee_3");
        assert_eq!(body["data_type"], 7);
        assert_eq!(body["optionlist_id"], 4941145);
        assert_eq!(
            body["dynamic_label"],
            r#"customer_contact_approvals.attendees.split("\n")[2].split(",")[0]"#
        );
        assert_eq!(
            body["condition_value"],
            "customer_contact_approvals.attendees_count >= 3"
        );
    }
}
