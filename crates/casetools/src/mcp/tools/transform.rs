use super::{CallToolResult, Content, JsonRpcError};
use casetools_core::Operation;
use serde::Deserialize;

pub fn handle_transform(
    operation: Operation,
    arguments: Option<serde_json::Value>,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    #[serde(deny_unknown_fields)]
    struct TransformArgs {
        input: String,
    }

    let args: TransformArgs =
        serde_json::from_value(arguments.unwrap_or(serde_json::Value::Null)).map_err(|e| {
            JsonRpcError::invalid_params(format!("Invalid arguments for {operation}: {e}"))
        })?;

    log::trace!("{operation}: {} chars in", args.input.chars().count());

    let text = operation.execute(&args.input);

    let result = CallToolResult {
        content: vec![Content::Text { text }],
        is_error: None,
    };

    serde_json::to_value(result).map_err(|e| JsonRpcError::internal(format!("Internal error: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of(value: serde_json::Value) -> String {
        value["content"][0]["text"].as_str().unwrap().to_string()
    }

    #[test]
    fn test_transform_scenarios() {
        let cases = [
            (Operation::Ascii, "Hello 世界!", "Hello !"),
            (Operation::Latinize, "räksmörgås", "raksmorgas"),
            (Operation::Camel, "Hello World!", "helloWorld"),
            (Operation::Elite, "Sponge Bob!", "SPoNGe BoB!"),
            (Operation::Sponge, "Café-World", "cAfÉ-wOrLd"),
        ];

        for (op, input, expected) in cases {
            let value = handle_transform(op, Some(serde_json::json!({ "input": input }))).unwrap();
            assert_eq!(text_of(value), expected, "{op}");
        }
    }

    #[test]
    fn test_transform_empty_input() {
        let value = handle_transform(Operation::Train, Some(serde_json::json!({ "input": "" })));
        assert_eq!(text_of(value.unwrap()), "");
    }

    #[test]
    fn test_transform_missing_input() {
        let err = handle_transform(Operation::Flat, Some(serde_json::json!({}))).unwrap_err();

        assert_eq!(err.code, -32602);
        assert!(err.message.starts_with("Invalid arguments for flat:"));
    }

    #[test]
    fn test_transform_non_string_input() {
        let err =
            handle_transform(Operation::Kebab, Some(serde_json::json!({ "input": 42 }))).unwrap_err();
        assert_eq!(err.code, -32602);
    }

    #[test]
    fn test_transform_unknown_argument() {
        let err = handle_transform(
            Operation::Kebab,
            Some(serde_json::json!({ "input": "a", "locale": "sv" })),
        )
        .unwrap_err();
        assert_eq!(err.code, -32602);
    }
}
