//! Terminal world clock. Reads country names from stdin, one per line, and
//! keeps the last one's clock running until the next line or `:q`.

use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;
use worldclock_core::clock::SystemClock;
use worldclock_display::client::TimeServerClient;
use worldclock_display::controller::ClockController;
use worldclock_display::render::TerminalRenderer;

const DEFAULT_SERVER_URL: &str = "http://localhost:3000";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);
const QUIT_COMMAND: &str = ":q";

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Logs go to stderr so they do not interleave with the clock.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let server_url =
        std::env::var("WORLDCLOCK_SERVER_URL").unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string());
    let source = TimeServerClient::new(&server_url, REQUEST_TIMEOUT)?;
    tracing::info!(endpoint = %source.endpoint(), "using time server");

    let mut controller = ClockController::new(
        Arc::new(source),
        Arc::new(SystemClock),
        Arc::new(TerminalRenderer),
    );

    // A line typed while a lookup is outstanding abandons that lookup and is
    // handled next. `next_line` is cancel-safe.
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut queued: Option<String> = None;
    loop {
        let line = match queued.take() {
            Some(line) => line,
            None => match lines.next_line().await? {
                Some(line) => line,
                None => break,
            },
        };
        if line.trim() == QUIT_COMMAND {
            break;
        }

        tokio::select! {
            outcome = controller.submit(&line) => {
                outcome?;
            }
            next = lines.next_line() => match next? {
                Some(next) => queued = Some(next),
                None => break,
            },
        }
    }

    controller.reset();
    Ok(())
}
