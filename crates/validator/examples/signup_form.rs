//! Validates a few signup submissions and prints the outcome.
//!
//! Run with `RUST_LOG=formschema_validator=trace` to see per-field events.

use formschema_validator::prelude::*;
use serde_json::json;
use tracing_subscriber::EnvFilter;

fn signup_schema() -> Result<ObjectValidator, SchemaError> {
    let username = string_field(
        StringConstraints::new()
            .required()
            .min_length(3)
            .max_length(20)
            .pattern(r"^[a-z0-9_]+$"),
    )?;
    let age = number_field(NumberConstraints::new().required().min(13.0).integer())?;

    let address = ObjectValidator::new()
        .try_field("city", fields::text(true))?
        .try_field(
            "zip",
            string_field(StringConstraints::new().pattern(r"^\d{5}$"))?,
        )?;

    ObjectValidator::new()
        .try_field("username", username)?
        .try_field("email", email_field(EmailConstraints::new().required()))?
        .try_field("age", age)?
        .try_field("favoriteColor", fields::color().optional())?
        .try_field("address", address)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let schema = signup_schema()?;

    let submissions = [
        json!({
            "username": "ann_lee",
            "email": "ann@example.com",
            "age": "30",
            "favoriteColor": "#3366ff",
            "address": {"city": "Seoul", "zip": "04524"}
        }),
        json!({
            "username": "A",
            "email": "ann@",
            "age": "12.5",
            "address": {"city": "", "zip": "abc"}
        }),
        json!("not a form"),
    ];

    for submission in &submissions {
        match schema.validate_value(submission) {
            Ok(clean) => println!("accepted: {}", serde_json::Value::Object(clean)),
            Err(issues) => {
                println!("rejected with {} issue(s):", issues.len());
                for issue in &issues {
                    println!("  {:<16} {:<14} {}", issue.path_string(), issue.kind.code(), issue.message);
                }
                println!("  as JSON: {}", serde_json::to_string(&issues)?);
            }
        }
    }

    Ok(())
}
