// Reader worker: parses track-stream lines and sends them through a channel

use crate::pipeline::types::FrameRecord;
use anyhow::Result;
use crossbeam::channel::Sender;
use std::io::BufRead;

/// Reads newline-delimited JSON frame records from a track stream and sends
/// them to the session driver.
///
/// Malformed lines are skipped with a warning; they never abort the session.
pub fn read_worker<R: BufRead>(source: R, tx: Sender<FrameRecord>) -> Result<()> {
    for (line_no, line) in source.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match serde_json::from_str::<FrameRecord>(&line) {
            Ok(record) => {
                if tx.send(record).is_err() {
                    return Ok(()); // Receiver closed
                }
            }
            Err(e) => {
                tracing::warn!("Skipping malformed frame record at line {}: {}", line_no + 1, e);
            }
        }
    }

    Ok(())
}
