//! Interactive session driving an environment from line-based input
//!
//! Each non-empty input line is a key-combo identifier. It is dispatched
//! as a key press and release, and every hint produced by the started
//! plugins is written out as one JSON line.

use std::future::Future;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::environment::Environment;
use crate::events::KeyEvent;
use crate::plugin::Hint;

/// Counters reported when a session ends
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    /// Combos read from input
    pub combos: usize,
    /// Hints written to output
    pub hints: usize,
}

/// Run until `input` reaches EOF or `shutdown` resolves
pub async fn run_session<R, W, S>(
    env: &Environment,
    input: R,
    hint_rx: &mut mpsc::UnboundedReceiver<Hint>,
    mut output: W,
    shutdown: S,
) -> Result<SessionStats>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
    S: Future<Output = ()>,
{
    let mut lines = input.lines();
    let mut stats = SessionStats::default();
    tokio::pin!(shutdown);

    info!("session started");

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("failed to read input")? else {
                    debug!("input closed");
                    break;
                };
                let combo = line.trim();
                if combo.is_empty() {
                    continue;
                }

                stats.combos += 1;
                env.dispatch(&KeyEvent::key_down(combo));
                env.dispatch(&KeyEvent::key_up(combo));

                while let Ok(hint) = hint_rx.try_recv() {
                    let mut json = serde_json::to_vec(&hint)?;
                    json.push(b'\n');
                    output.write_all(&json).await.context("failed to write hint")?;
                    stats.hints += 1;
                }
                output.flush().await?;
            }

            _ = &mut shutdown => {
                debug!("session interrupted");
                break;
            }
        }
    }

    info!(combos = stats.combos, hints = stats.hints, "session finished");
    Ok(stats)
}
