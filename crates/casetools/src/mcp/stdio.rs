use crate::prelude::{eprintln, *};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

pub async fn run_stdio(global: crate::Global) -> Result<()> {
    if global.verbose {
        eprintln!("Starting MCP server with stdio transport...");
        eprintln!();
    }

    serve_lines(
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
        global.verbose,
    )
    .await
}

/// Answer newline-delimited JSON-RPC messages until `reader` hits EOF.
///
/// Blank lines are skipped and notifications produce no output line.
async fn serve_lines<R, W>(reader: R, mut writer: W, verbose: bool) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();

    while let Some(line) = lines
        .next_line()
        .await
        .wrap_err("Failed to read request")?
    {
        let message = line.trim();
        if message.is_empty() {
            continue;
        }

        if verbose {
            eprintln!("Received: {message}");
        }

        let Some(response) = super::handle_request(message) else {
            log::debug!("no response for notification");
            continue;
        };

        let mut encoded = serde_json::to_string(&response)?;
        if verbose {
            eprintln!("Sending: {encoded}");
        }
        encoded.push('\n');

        writer.write_all(encoded.as_bytes()).await?;
        writer.flush().await?;
    }

    Ok(())
}
