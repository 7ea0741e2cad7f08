//! Line-oriented session shell.
//!
//! Interactions arrive as JSON lines on standard input and every one of them is
//! answered by exactly one JSON line on standard output. Host events are written
//! as JSON lines to standard error. Note that `env_logger` also writes to
//! standard error, so a host reading that stream should leave `RUST_LOG` unset
//! or skip lines that do not parse as a host event.

mod config;

use api::{Board, HostEvent, HostSink, Interaction, Reply};
use tokio::{
    io::{self, AsyncBufReadExt, AsyncWriteExt, BufReader},
    runtime::Builder,
    sync::mpsc,
};

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let config = config::Config::from_env()?;

    // Everything runs on this one thread
    let runtime = Builder::new_current_thread().build()?;
    runtime.block_on(run(config))
}

/// Answers a single input line. Blank lines get no reply. Anything that is not
/// a valid interaction (including bytes that are not UTF-8) gets an error reply.
fn handle_line<S: HostSink>(board: &mut Board<S>, line: &[u8]) -> Option<Reply> {
    let line = line.trim_ascii();
    if line.is_empty() {
        return None;
    }

    let reply = match serde_json::from_slice::<Interaction>(line) {
        Ok(interaction) => board.on_interaction(interaction),
        Err(err) => {
            log::warn!("malformed interaction: {err}");
            Reply::Error { message: String::from("Malformed interaction.") }
        }
    };
    Some(reply)
}

async fn run(config: config::Config) -> anyhow::Result<()> {
    let (tx, rx) = mpsc::unbounded_channel();
    let forwarder = tokio::spawn(forward_host_events(rx));
    let mut board = Board::new(config.policy, tx);
    log::info!("starting session with {:?} voting", board.store().policy());

    // One JSON interaction per line, one JSON reply per line
    let mut stdin = BufReader::new(io::stdin());
    let mut stdout = io::stdout();
    let mut line = Vec::new();
    loop {
        line.clear();
        if stdin.read_until(b'\n', &mut line).await? == 0 {
            break;
        }

        let Some(reply) = handle_line(&mut board, &line) else {
            continue;
        };

        let mut bytes = serde_json::to_vec(&reply)?;
        bytes.push(b'\n');
        stdout.write_all(&bytes).await?;
        stdout.flush().await?;
    }

    // Dropping the board closes the channel so that the forwarder can drain
    log::info!("input closed after {} poll(s)", board.store().len());
    drop(board);
    forwarder.await?
}

/// Plays the role of the embedding page: every host event becomes a JSON line
/// on standard error.
async fn forward_host_events(mut rx: mpsc::UnboundedReceiver<HostEvent>) -> anyhow::Result<()> {
    let mut stderr = io::stderr();
    while let Some(event) = rx.recv().await {
        let mut bytes = serde_json::to_vec(&event)?;
        bytes.push(b'\n');
        stderr.write_all(&bytes).await?;
    }
    stderr.flush().await?;
    Ok(())
}
