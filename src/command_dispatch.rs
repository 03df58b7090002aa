//! Purpose: Hold top-level CLI command dispatch for `jsontags`.
//! Exports: `dispatch_command`.
//! Role: Keep `main.rs` focused on parse/bootstrap and delegate command execution.
//! Invariants: JSON output goes through `emit_json`; demo text goes straight to stdout.
//! Invariants: Policy order in combined output follows `Policy::ALL`.

use super::*;
use jsontags::api::AnyRecord;

pub(super) fn dispatch_command(command: Command, color_mode: ColorMode) -> Result<RunOutcome, Error> {
    match command {
        Command::Demo => {
            for line in demo::walkthrough()? {
                println!("{line}");
            }
            Ok(RunOutcome::ok())
        }
        Command::Zero { policy } => {
            let record = AnyRecord::zero(policy.into());
            emit_json(record.to_value()?, color_mode);
            Ok(RunOutcome::ok())
        }
        Command::Decode { policy, input } => {
            let bytes = read_input(input)?;
            let record = AnyRecord::decode_slice(&bytes, policy.into())?;
            emit_json(record.to_value()?, color_mode);
            Ok(RunOutcome::ok())
        }
        Command::Compare { input } => {
            let bytes = read_input(input)?;
            emit_json(compare_json(&bytes)?, color_mode);
            Ok(RunOutcome::ok())
        }
        Command::Policies => {
            emit_json(policies_json(), color_mode);
            Ok(RunOutcome::ok())
        }
    }
}

fn compare_json(bytes: &[u8]) -> Result<Value, Error> {
    let mut map = Map::new();
    for policy in Policy::ALL {
        let record = AnyRecord::decode_slice(bytes, policy)?;
        map.insert(policy.as_str().to_string(), record.to_value()?);
    }
    Ok(Value::Object(map))
}

fn policies_json() -> Value {
    let policies = Policy::ALL
        .into_iter()
        .map(|policy| {
            json!({
                "name": policy.as_str(),
                "letter": policy.letter().to_string(),
                "preserves_null": policy.preserves_null(),
                "omits_empty": policy.omits_empty(),
                "emits_unset_references": policy.emits_unset_references(),
                "other_by_value": policy.other_by_value(),
            })
        })
        .collect::<Vec<_>>();
    json!({ "policies": policies })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compare_collapses_null_outside_tri_state() {
        let value = compare_json(br#"{"name":null,"age":null}"#).expect("compare");
        let keys: Vec<_> = value.as_object().expect("object").keys().cloned().collect();
        assert_eq!(keys, ["tri-state", "omit-empty", "always-emit", "inline-other"]);
        assert_eq!(value["tri-state"]["name"], Value::Null);
        assert!(value["tri-state"].get("name").is_some());
        assert!(value["omit-empty"].get("name").is_none());
        assert_eq!(value["always-emit"]["name"], "");
        assert_eq!(value["always-emit"]["age"], 0);
        assert_eq!(value["inline-other"]["other"], json!({}));
    }

    #[test]
    fn compare_fails_on_first_bad_document() {
        let err = compare_json(br#"{"salary":"lots"}"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Data);
        assert_eq!(err.path(), Some("$.salary"));
    }

    #[test]
    fn compare_rejects_invalid_utf8_as_decode_error() {
        let err = compare_json(b"{\"name\":\"\xfe\"}").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Syntax);
    }

    #[test]
    fn policies_json_lists_all_four() {
        let value = policies_json();
        let list = value["policies"].as_array().expect("array");
        assert_eq!(list.len(), 4);
        assert_eq!(list[0]["name"], "tri-state");
        assert_eq!(list[3]["other_by_value"], true);
    }
}
