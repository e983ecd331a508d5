use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::{Duration, Instant};

use log::{debug, warn};

use crate::config::LibrarySettings;

use super::scan::{BuildReport, build_until};

/// A finished folder scan, tagged with the request that started it.
#[derive(Debug)]
pub struct ScanDone {
    pub generation: u64,
    pub root: PathBuf,
    pub report: BuildReport,
}

/// Runs folder scans on a helper thread, one current request at a time.
///
/// Every `request` bumps the generation. Older scans notice at their next walk
/// entry and stop early; anything they still deliver is dropped by `poll`.
pub struct ScanWorker {
    settings: LibrarySettings,
    latest: Arc<AtomicU64>,
    tx: Sender<ScanDone>,
    rx: Receiver<ScanDone>,
}

impl ScanWorker {
    pub fn new(settings: LibrarySettings) -> Self {
        let (tx, rx) = mpsc::channel::<ScanDone>();
        Self {
            settings,
            latest: Arc::new(AtomicU64::new(0)),
            tx,
            rx,
        }
    }

    /// Start scanning `root`, superseding any scan still in flight.
    pub fn request(&self, root: PathBuf) -> u64 {
        let generation = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        debug!("scan #{generation} requested for {}", root.display());

        let latest = Arc::clone(&self.latest);
        let tx = self.tx.clone();
        let settings = self.settings.clone();
        let job = move || {
            let stale = || latest.load(Ordering::SeqCst) != generation;
            let report = build_until(&root, &settings, &stale);
            if stale() {
                debug!("scan #{generation} superseded, dropping result");
                return;
            }
            let _ = tx.send(ScanDone {
                generation,
                root,
                report,
            });
        };

        if let Err(e) = thread::Builder::new()
            .name(format!("pmusic-scan-{generation}"))
            .spawn(job)
        {
            warn!("cannot spawn scan thread ({e}); scan #{generation} aborted");
        }

        generation
    }

    /// Generation of the most recent request (0 before the first one).
    pub fn latest(&self) -> u64 {
        self.latest.load(Ordering::SeqCst)
    }

    /// Non-blocking: the current scan's result, if it has arrived.
    pub fn poll(&self) -> Option<ScanDone> {
        while let Ok(done) = self.rx.try_recv() {
            if done.generation == self.latest() {
                return Some(done);
            }
            debug!("ignoring stale scan #{}", done.generation);
        }
        None
    }

    /// Block until the current scan delivers or `timeout` passes.
    #[cfg(test)]
    pub fn wait(&self, timeout: Duration) -> Option<ScanDone> {
        let deadline = Instant::now() + timeout;
        loop {
            let left = deadline.saturating_duration_since(Instant::now());
            match self.rx.recv_timeout(left) {
                Ok(done) if done.generation == self.latest() => return Some(done),
                Ok(done) => debug!("ignoring stale scan #{}", done.generation),
                Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => {
                    return None;
                }
            }
        }
    }
}
