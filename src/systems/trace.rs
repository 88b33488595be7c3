//! Background trace thread.
//!
//! Receives [`TraceCmd`] messages from the pointer observer over the bridge
//! channel and logs the observations. Keeping the log sink off the main
//! thread means a slow logger never stalls the frame.

use crate::resources::bridge::TraceCmd;
use crossbeam_channel::Receiver;
use log::{debug, info};

/// Entry point for the trace thread.
///
/// Blocks on the command channel until [`TraceCmd::Shutdown`] arrives or the
/// sending side is dropped, then reports the total sample count.
pub fn trace_thread(rx: Receiver<TraceCmd>) {
    let mut samples: u64 = 0;
    while let Ok(cmd) = rx.recv() {
        match cmd {
            TraceCmd::Sample(sample) => {
                samples += 1;
                match sample.element {
                    Some(rel) => debug!(
                        "pointer page=({:.1}, {:.1}) element=({:.1}, {:.1})",
                        sample.page.x, sample.page.y, rel.x, rel.y
                    ),
                    None => debug!(
                        "pointer page=({:.1}, {:.1}) unbound",
                        sample.page.x, sample.page.y
                    ),
                }
            }
            TraceCmd::Shutdown => break,
        }
    }
    info!("Trace thread exiting after {} samples", samples);
}
