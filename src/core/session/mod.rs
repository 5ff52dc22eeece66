//! # Session Module
//!
//! The scan flow: frames in, at most one hit out per scan.
//!
//! A [`ScanSession`] owns a single background decode worker fed one frame
//! at a time. With the keep-only-latest policy (the camera default), the
//! worker drops stale undelivered frames and decodes only the newest one;
//! batch scanning turns the policy off so every frame is processed.
//!
//! A boolean scan gate suppresses further decode results once a valid
//! payload has been found; it reopens when the caller resumes the session
//! (the scan screen regaining focus). The gate is only ever set to a fixed
//! value by each side - the worker closes it, the controlling thread
//! reopens it - so an atomic flag is all the synchronization it needs.

use crate::core::classify::classify;
use crate::core::decode::{BarcodeDecoder, Frame};
use crate::error::SessionError;
use crate::events::{Event, EventSender, ScanEvent};
use crossbeam_channel::{unbounded, Receiver, Sender};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

/// The navigation boundary: the two strings handed to the result flow
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanHit {
    /// Raw decoded payload, never empty
    pub content: String,
    /// Barcode format wire name (e.g. `QR_CODE`)
    pub format: String,
}

/// Configuration for a scan session
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Drop stale undelivered frames and decode only the newest one.
    ///
    /// This is the camera-feed policy: if the worker is still busy when
    /// new frames arrive, older ones are discarded rather than queued.
    /// Batch file scanning turns this off so every frame is decoded.
    pub keep_only_latest: bool,

    /// Reopen the gate immediately after each hit.
    ///
    /// Camera-style scanning leaves this off and calls
    /// [`ScanSession::resume`] when the user returns to the scan screen;
    /// batch file scanning turns it on so every file gets a chance.
    pub auto_resume: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            keep_only_latest: true,
            auto_resume: false,
        }
    }
}

impl SessionConfig {
    /// Policy for scanning a fixed set of files: process everything,
    /// reopen the gate after each hit
    pub fn batch() -> Self {
        Self {
            keep_only_latest: false,
            auto_resume: true,
        }
    }
}

/// Cloneable producer handle feeding frames to the decode worker.
///
/// Submitting never blocks; backpressure is applied by the worker
/// according to the session's frame policy.
#[derive(Clone)]
pub struct FrameFeed {
    tx: Sender<Frame>,
}

impl FrameFeed {
    /// Submit a frame for decoding.
    ///
    /// Fails only when the decode worker is gone.
    pub fn send(&self, frame: Frame) -> Result<(), SessionError> {
        self.tx
            .send(frame)
            .map_err(|_| SessionError::WorkerStopped)
    }
}

/// One scanning session: gate, feed, and decode worker
pub struct ScanSession {
    feed: FrameFeed,
    gate: Arc<AtomicBool>,
    worker: JoinHandle<usize>,
}

impl ScanSession {
    /// Spawn the decode worker and return the session plus the hit
    /// receiver (the result flow's inbound side).
    pub fn spawn(
        decoder: Box<dyn BarcodeDecoder>,
        config: SessionConfig,
        events: EventSender,
    ) -> (Self, Receiver<ScanHit>) {
        let (tx, frames) = unbounded();
        let (hit_tx, hit_rx) = unbounded();
        let gate = Arc::new(AtomicBool::new(true));

        let worker_gate = Arc::clone(&gate);
        let worker = thread::spawn(move || {
            run_worker(decoder, config, frames, hit_tx, worker_gate, events)
        });

        (
            Self {
                feed: FrameFeed { tx },
                gate,
                worker,
            },
            hit_rx,
        )
    }

    /// A producer handle for feeding frames from another thread.
    ///
    /// Outstanding handles keep the worker alive past [`close`](Self::close).
    pub fn feed(&self) -> FrameFeed {
        self.feed.clone()
    }

    /// Submit a frame for decoding
    pub fn send(&self, frame: Frame) -> Result<(), SessionError> {
        self.feed.send(frame)
    }

    /// Whether the gate is currently open
    pub fn is_scanning(&self) -> bool {
        self.gate.load(Ordering::Acquire)
    }

    /// Reopen the gate - the scan screen became active again
    pub fn resume(&self) {
        self.gate.store(true, Ordering::Release);
    }

    /// Close the gate without a hit - the scan screen lost focus
    pub fn pause(&self) {
        self.gate.store(false, Ordering::Release);
    }

    /// Shut the feed and wait for the worker; returns frames handled
    pub fn close(self) -> usize {
        drop(self.feed);
        self.worker.join().unwrap_or(0)
    }
}

fn run_worker(
    decoder: Box<dyn BarcodeDecoder>,
    config: SessionConfig,
    frames: Receiver<Frame>,
    hits: Sender<ScanHit>,
    gate: Arc<AtomicBool>,
    events: EventSender,
) -> usize {
    events.send(Event::Scan(ScanEvent::Started));

    let mut handled = 0usize;
    while let Ok(mut frame) = frames.recv() {
        if config.keep_only_latest {
            // Skip to the newest frame; stale ones drop here
            while let Ok(newer) = frames.try_recv() {
                frame = newer;
            }
        }
        handled += 1;

        // Gate closed: a payload was already delivered this session
        if !gate.load(Ordering::Acquire) {
            continue;
        }

        match decoder.decode(&frame) {
            Err(e) => {
                tracing::warn!("frame decode failed: {e}");
                events.send(Event::Scan(ScanEvent::DecodeFailed {
                    message: e.to_string(),
                }));
            }
            Ok(barcodes) => {
                if barcodes.is_empty() {
                    // No code in this frame - not worth a status update
                    continue;
                }

                match barcodes.into_iter().find(|b| !b.raw.is_empty()) {
                    Some(barcode) => {
                        let format = barcode.format.as_str().to_string();

                        gate.store(false, Ordering::Release);
                        events.send(Event::Scan(ScanEvent::PayloadFound {
                            content_type: classify(&barcode.raw),
                            format: format.clone(),
                        }));
                        let _ = hits.send(ScanHit {
                            content: barcode.raw,
                            format,
                        });

                        if config.auto_resume {
                            gate.store(true, Ordering::Release);
                        }
                    }
                    None => {
                        // A code was detected but carried nothing
                        events.send(Event::Scan(ScanEvent::EmptyPayload));
                    }
                }
            }
        }
        // The frame drops here; its buffer is released exactly once
        // whatever the decode outcome was
    }

    events.send(Event::Scan(ScanEvent::Finished {
        frames_processed: handled,
    }));
    handled
}
