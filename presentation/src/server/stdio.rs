//! Newline-delimited JSON-RPC server loop.
//!
//! ```text
//! reader ──lines──▶ spawn per request ──▶ RequestHandler ──▶ mpsc ──▶ writer ──▶ stdout
//! ```
//!
//! Requests run concurrently; responses go through a single writer, one
//! JSON object per line, in completion order. When the shutdown token is
//! cancelled the loop stops reading, waits for in-flight requests (which
//! then complete as `Interrupted` tool results) and flushes their replies.
//!
//! Process stdin is read on a plain OS thread feeding an in-memory pipe.
//! A blocked read there does not hold the runtime open at exit.

use crate::server::error::{Result, ServerError};
use crate::server::handler::RequestHandler;
use crate::server::protocol::JsonRpcResponse;
use std::io::Read;
use tokio::io::{
    AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, DuplexStream,
};
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Chunk size for the stdin pump
const STDIN_CHUNK: usize = 8192;

pub struct StdioServer {
    handler: RequestHandler,
    shutdown: CancellationToken,
}

impl StdioServer {
    pub fn new(handler: RequestHandler, shutdown: CancellationToken) -> Self {
        Self { handler, shutdown }
    }

    /// Serve the process's own stdin/stdout until EOF or shutdown
    pub async fn serve_stdio(self) -> Result<()> {
        let stdin = spawn_input_pump(std::io::stdin())?;
        self.serve(BufReader::new(stdin), tokio::io::stdout()).await
    }

    /// Serve `reader`/`writer` until EOF or shutdown.
    ///
    /// The response writer finishes once every in-flight request has replied.
    pub async fn serve<R, W>(self, reader: R, writer: W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        info!("Serving tools over stdio");

        let (tx, rx) = mpsc::unbounded_channel::<JsonRpcResponse>();

        let reading = async move {
            let mut lines = reader.lines();
            let mut in_flight = JoinSet::new();

            loop {
                tokio::select! {
                    _ = self.shutdown.cancelled() => {
                        info!("Shutdown requested, draining {} in-flight request(s)", in_flight.len());
                        break;
                    }
                    line = lines.next_line() => {
                        let Some(line) = line? else {
                            debug!("Input closed");
                            break;
                        };
                        if line.trim().is_empty() {
                            continue;
                        }

                        let handler = self.handler.clone();
                        let tx = tx.clone();
                        in_flight.spawn(async move {
                            if let Some(response) = handler.handle_line(&line).await {
                                let _ = tx.send(response);
                            }
                        });
                    }
                }
            }

            while in_flight.join_next().await.is_some() {}
            Ok::<(), ServerError>(())
        };

        let (read_result, write_result) = tokio::join!(reading, write_responses(rx, writer));
        read_result?;
        write_result
    }
}

/// Copy a blocking `source` into an async stream from a detached thread.
///
/// The stream reaches EOF when `source` does. The thread exits after its next
/// read once the returned stream is dropped.
fn spawn_input_pump<S>(mut source: S) -> Result<DuplexStream>
where
    S: Read + Send + 'static,
{
    let (mut sink, stream) = tokio::io::duplex(STDIN_CHUNK);
    let runtime = tokio::runtime::Handle::current();

    std::thread::Builder::new()
        .name("advisor-mcp-stdin".to_string())
        .spawn(move || {
            let mut chunk = [0u8; STDIN_CHUNK];
            loop {
                let n = match source.read(&mut chunk) {
                    Ok(0) => break,
                    Ok(n) => n,
                    Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                    Err(e) => {
                        warn!("Failed to read stdin: {}", e);
                        break;
                    }
                };
                if runtime.block_on(sink.write_all(&chunk[..n])).is_err() {
                    break;
                }
            }
        })?;

    Ok(stream)
}

async fn write_responses<W>(
    mut rx: mpsc::UnboundedReceiver<JsonRpcResponse>,
    mut writer: W,
) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    while let Some(response) = rx.recv().await {
        let mut line = serde_json::to_vec(&response)?;
        line.push(b'\n');
        writer.write_all(&line).await?;
        writer.flush().await?;
    }
    Ok(())
}
