//! Submit command - order a catalog item or submit a record producer

use crate::cli::connect;
use crate::cli::output::emit;
use crate::cli::progress::CliProgress;
use anyhow::{bail, Context};
use serde_json::{Map, Value};
use sn_catalog::catalog::{submit_catalog_request, SubmitParams};
use sn_catalog::types::ItemType;
use std::process::ExitCode;

/// Run the submit command
pub async fn run_submit(
    instance: Option<&str>,
    item_id: &str,
    item_type: ItemType,
    variables_json: Option<&str>,
    vars: &[String],
    quantity: Option<u32>,
) -> anyhow::Result<ExitCode> {
    let variables = collect_variables(variables_json, vars)?;

    let mut params = SubmitParams::new(item_id).with_item_type(item_type);
    if let Some(variables) = variables {
        params = params.with_variables(variables);
    }
    if let Some(quantity) = quantity {
        params = params.with_quantity(quantity);
    }

    let transport = connect(instance)?;
    let progress = CliProgress::new();
    let outcome = submit_catalog_request(&transport, &params, &progress).await;
    emit(&outcome)
}

/// Merge `--variables` JSON with `--var KEY=VALUE` pairs (pairs win)
fn collect_variables(
    variables_json: Option<&str>,
    vars: &[String],
) -> anyhow::Result<Option<Map<String, Value>>> {
    let mut variables = match variables_json {
        Some(raw) => match serde_json::from_str::<Value>(raw)
            .context("--variables is not valid JSON")?
        {
            Value::Object(map) => map,
            other => bail!("--variables must be a JSON object, got {other}"),
        },
        None => Map::new(),
    };

    for pair in vars {
        let (key, value) = parse_var(pair)?;
        variables.insert(key, value);
    }

    Ok((variables_json.is_some() || !vars.is_empty()).then_some(variables))
}

/// Parse `KEY=VALUE`; the value is JSON when it parses as JSON, else a string
fn parse_var(pair: &str) -> anyhow::Result<(String, Value)> {
    let Some((key, raw)) = pair.split_once('=') else {
        bail!("--var expects KEY=VALUE, got {pair:?}");
    };
    let key = key.trim();
    if key.is_empty() {
        bail!("--var has an empty key: {pair:?}");
    }
    let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
    Ok((key.to_string(), value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_var_values() {
        assert_eq!(parse_var("cpu=4").unwrap(), ("cpu".into(), json!(4)));
        assert_eq!(parse_var("urgent=true").unwrap(), ("urgent".into(), json!(true)));
        assert_eq!(
            parse_var("notes=needs a dock").unwrap(),
            ("notes".into(), json!("needs a dock"))
        );
        assert_eq!(parse_var("eq=a=b").unwrap(), ("eq".into(), json!("a=b")));
        assert!(parse_var("novalue").is_err());
        assert!(parse_var("=x").is_err());
    }

    #[test]
    fn test_collect_variables_none_when_nothing_given() {
        assert_eq!(collect_variables(None, &[]).unwrap(), None);
    }

    #[test]
    fn test_var_overrides_json() {
        let vars = collect_variables(
            Some(r#"{"cpu": 2, "ram": "8GB"}"#),
            &["cpu=4".to_string()],
        )
        .unwrap()
        .unwrap();
        assert_eq!(vars.get("cpu"), Some(&json!(4)));
        assert_eq!(vars.get("ram"), Some(&json!("8GB")));
    }

    #[test]
    fn test_variables_must_be_object() {
        assert!(collect_variables(Some("[1,2]"), &[]).is_err());
        assert!(collect_variables(Some("{oops"), &[]).is_err());
    }
}
