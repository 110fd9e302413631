use serde_json::Value;
use tokio::io::AsyncReadExt;

use crate::config::{Config, PayloadKind};
use crate::core::validation::{ValidationError, Validator};
use crate::utils::{CinedexResult, Clock, Error};

/// Read the raw JSON payload from a file, or stdin when `path` is "-".
pub async fn read_payload(path: &str) -> CinedexResult<Value> {
    let raw = if path == "-" {
        let mut buf = String::new();
        tokio::io::stdin().read_to_string(&mut buf).await?;
        buf
    } else {
        tokio::fs::read_to_string(path).await?
    };
    Ok(serde_json::from_str(&raw)?)
}

/// Validate `raw` as the given kind and return the normalized request as JSON.
pub fn validate_payload<C: Clock>(
    validator: &Validator<C>,
    kind: PayloadKind,
    raw: &Value,
) -> CinedexResult<Value> {
    let normalized = match kind {
        PayloadKind::Create => serde_json::to_value(validator.validate_create(raw)?)?,
        PayloadKind::Update => serde_json::to_value(validator.validate_update(raw)?)?,
    };
    Ok(normalized)
}

pub fn render(value: &Value, pretty: bool) -> CinedexResult<String> {
    let out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(out)
}

/// Outcome of one run, ready to be written to stdout.
#[derive(Debug)]
pub enum Outcome {
    Accepted(Value),
    Rejected(ValidationError),
}

impl Outcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::Accepted(_) => 0,
            Outcome::Rejected(_) => 1,
        }
    }

    /// JSON written to stdout: the normalized request, or the client-error body.
    pub fn into_body(self) -> Value {
        match self {
            Outcome::Accepted(normalized) => normalized,
            Outcome::Rejected(e) => e.to_response_body(),
        }
    }
}

pub async fn run(config: &Config) -> CinedexResult<Outcome> {
    let raw = read_payload(&config.input.path).await?;
    let validator = Validator::new(config.clock());
    tracing::debug!(
        "Validating {:?} payload from '{}'",
        config.input.kind,
        config.input.path
    );

    match validate_payload(&validator, config.input.kind, &raw) {
        Ok(normalized) => {
            tracing::info!("Payload accepted");
            Ok(Outcome::Accepted(normalized))
        }
        Err(Error::ValidationError(e)) => {
            tracing::warn!("Payload rejected ({} violation(s)): {e}", e.len());
            Ok(Outcome::Rejected(e))
        }
        Err(e) => Err(e),
    }
}
