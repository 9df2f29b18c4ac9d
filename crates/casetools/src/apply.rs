use crate::prelude::{eprintln, println, *};
use casetools_core::Operation;
use std::io::{IsTerminal, Read};

#[derive(Debug, clap::Args, Clone)]
pub struct ApplyOptions {
    /// Operation to apply (see `casetools list`)
    #[arg(value_name = "OPERATION")]
    pub operation: Operation,

    /// Text to transform. Read from stdin when omitted.
    #[arg(value_name = "INPUT")]
    pub input: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, serde::Serialize)]
pub struct ApplyOutput {
    pub operation: Operation,
    pub input: String,
    pub output: String,
}

pub fn run(options: ApplyOptions, global: crate::Global) -> Result<()> {
    let bytes = match options.input {
        Some(input) => input.into_bytes(),
        None => read_stdin()?,
    };

    if global.verbose {
        eprintln!("Applying {} to {} bytes", options.operation, bytes.len());
    }

    let output = apply_data(options.operation, &bytes)?;

    if options.json {
        let json = serde_json::to_string_pretty(&output)
            .map_err(|e| eyre!("JSON serialization failed: {}", e))?;
        println!("{json}");
    } else {
        println!("{}", output.output);
    }

    Ok(())
}

/// Runs `operation` over raw bytes, which must be UTF-8.
pub fn apply_data(operation: Operation, bytes: &[u8]) -> Result<ApplyOutput, Error> {
    let output = operation.execute_bytes(bytes)?;

    Ok(ApplyOutput {
        operation,
        input: String::from_utf8_lossy(bytes).into_owned(),
        output,
    })
}

fn read_stdin() -> Result<Vec<u8>, Error> {
    let mut stdin = std::io::stdin();
    if stdin.is_terminal() {
        return Err(Error::MissingInput);
    }

    let mut bytes = Vec::new();
    stdin.read_to_end(&mut bytes)?;

    Ok(strip_line_ending(bytes))
}

/// Drops the single line ending that `echo` and heredocs append.
fn strip_line_ending(mut bytes: Vec<u8>) -> Vec<u8> {
    if bytes.ends_with(b"\n") {
        bytes.pop();
        if bytes.ends_with(b"\r") {
            bytes.pop();
        }
    }
    bytes
}
