//! The animator: playback state machine and recording walk.

use std::{
    path::Path,
    sync::{
        Arc, Mutex, MutexGuard, PoisonError,
        atomic::{AtomicBool, Ordering},
    },
};

use crate::{
    foundation::{
        core::Fps,
        error::{KinegraphError, KinegraphResult},
    },
    frame::model::{Frame, KeyFrame},
    host::ViewHost,
    interpolation::sequence::build_sequence,
    playback::clock::TickSource,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// Where the animator is in its play/pause/stop cycle.
pub enum PlaybackState {
    /// Not advancing; the next play starts from the current index.
    #[default]
    Stopped,
    /// A tick source is advancing through the sequence.
    Playing,
    /// Ticking is suspended; the current index is retained.
    Paused,
}

#[derive(Clone, Debug, Default)]
/// Shared cancellation handle for a recording walk.
///
/// Clone it, hand one clone to [`Animator::record`], and call
/// [`cancel`](CancelFlag::cancel) from another thread to end the walk
/// after the frame currently being exported.
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    /// Creates a flag in the not-cancelled state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation. Idempotent.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Whether cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// State touched by both the owning thread and the tick thread.
struct Shared<H> {
    sequence: Arc<Vec<Frame>>,
    index: usize,
    state: PlaybackState,
    host: H,
}

/// Drives one host view through an interpolated frame sequence.
///
/// The animator owns the key frame list and rebuilds the flattened
/// sequence whenever keys change. Playback runs on a background tick
/// thread at the configured frame rate; all shared state sits behind a
/// single mutex, and a tick that arrives while the owning thread holds
/// the lock is simply dropped rather than queued.
pub struct Animator<H> {
    keys: Vec<KeyFrame>,
    fps: Fps,
    shared: Arc<Mutex<Shared<H>>>,
    ticker: Option<TickSource>,
}

fn lock<H>(shared: &Mutex<Shared<H>>) -> MutexGuard<'_, Shared<H>> {
    shared.lock().unwrap_or_else(PoisonError::into_inner)
}

fn on_tick<H: ViewHost>(shared: &Mutex<Shared<H>>) {
    // A tick during a rebuild or a manual step finds the lock held and
    // is dropped. try_lock also guarantees two ticks never overlap.
    let Ok(mut guard) = shared.try_lock() else {
        return;
    };
    if guard.state != PlaybackState::Playing || guard.sequence.is_empty() {
        return;
    }
    let sequence = Arc::clone(&guard.sequence);
    let index = guard.index;
    if let Err(error) = guard.host.apply_state(&sequence[index]) {
        tracing::warn!(frame = index, %error, "failed to apply frame during playback");
    } else if let Err(error) = guard.host.clear_transients() {
        tracing::warn!(frame = index, %error, "failed to clear transients during playback");
    }
    guard.index = (index + 1) % sequence.len();
}

impl<H: ViewHost + Send + 'static> Animator<H> {
    /// Creates an animator for `host` with no keys at the default rate.
    pub fn new(host: H) -> Self {
        Self::with_fps(host, Fps::default())
    }

    /// Creates an animator for `host` ticking at `fps`.
    pub fn with_fps(host: H, fps: Fps) -> Self {
        Self {
            keys: Vec::new(),
            fps,
            shared: Arc::new(Mutex::new(Shared {
                sequence: Arc::new(Vec::new()),
                index: 0,
                state: PlaybackState::Stopped,
                host,
            })),
            ticker: None,
        }
    }

    /// The key frames in playback order.
    pub fn keys(&self) -> &[KeyFrame] {
        &self.keys
    }

    /// The configured playback rate.
    pub fn fps(&self) -> Fps {
        self.fps
    }

    /// The current playback state.
    pub fn state(&self) -> PlaybackState {
        lock(&self.shared).state
    }

    /// The index of the frame the next tick or step will show.
    pub fn frame_index(&self) -> usize {
        lock(&self.shared).index
    }

    /// The length of the flattened frame sequence.
    pub fn sequence_len(&self) -> usize {
        lock(&self.shared).sequence.len()
    }

    /// Captures the host's current visual state and appends it as a new
    /// key frame, with the stride to the next key derived from the
    /// frame rate.
    #[tracing::instrument(skip(self))]
    pub fn capture_key(&mut self) -> KinegraphResult<()> {
        let index = self.keys.len();
        let frame = lock(&self.shared)
            .host
            .capture_state()
            .map_err(|source| KinegraphError::Capture { index, source })?;
        self.keys.push(KeyFrame::new(frame, self.fps.get()));
        self.rebuild()
    }

    /// Appends a key frame and rebuilds the sequence.
    pub fn add_key(&mut self, key: KeyFrame) -> KinegraphResult<()> {
        self.keys.push(key);
        self.rebuild()
    }

    /// Inserts a key frame at `index`, shifting later keys up.
    pub fn insert_key(&mut self, index: usize, key: KeyFrame) -> KinegraphResult<()> {
        if index > self.keys.len() {
            return Err(KinegraphError::validation(format!(
                "insert position {index} is past the end of {} keys",
                self.keys.len()
            )));
        }
        self.keys.insert(index, key);
        self.rebuild()
    }

    /// Removes the key frame at `index` and rebuilds the sequence.
    pub fn delete_key(&mut self, index: usize) -> KinegraphResult<()> {
        if index >= self.keys.len() {
            return Err(KinegraphError::validation(format!(
                "no key at index {index}, have {}",
                self.keys.len()
            )));
        }
        self.keys.remove(index);
        self.rebuild()
    }

    /// Changes the playback rate. Takes effect immediately if playing.
    pub fn set_fps(&mut self, fps: Fps) {
        self.fps = fps;
        if self.ticker.is_some() {
            self.stop_ticker();
            self.start_ticker();
        }
    }

    /// Starts or resumes playback. A no-op with an empty sequence.
    pub fn play(&mut self) {
        {
            let mut guard = lock(&self.shared);
            if guard.sequence.is_empty() {
                return;
            }
            guard.state = PlaybackState::Playing;
        }
        if self.ticker.is_none() {
            self.start_ticker();
        }
    }

    /// Suspends playback, keeping the current frame index.
    pub fn pause(&mut self) {
        self.stop_ticker();
        let mut guard = lock(&self.shared);
        if guard.state == PlaybackState::Playing {
            guard.state = PlaybackState::Paused;
        }
    }

    /// Ends playback and rewinds to the start of the sequence.
    pub fn stop(&mut self) {
        self.stop_ticker();
        let mut guard = lock(&self.shared);
        guard.state = PlaybackState::Stopped;
        guard.index = 0;
    }

    /// Stops playback and shows the next frame, wrapping at the end.
    pub fn step_forward(&mut self) -> KinegraphResult<()> {
        self.step(1)
    }

    /// Stops playback and shows the previous frame, wrapping at the
    /// start.
    pub fn step_backward(&mut self) -> KinegraphResult<()> {
        self.step(-1)
    }

    fn step(&mut self, delta: isize) -> KinegraphResult<()> {
        self.stop_ticker();
        let mut guard = lock(&self.shared);
        guard.state = PlaybackState::Stopped;
        let len = guard.sequence.len();
        if len == 0 {
            return Ok(());
        }
        let index = (guard.index as isize + delta).rem_euclid(len as isize) as usize;
        guard.index = index;
        let sequence = Arc::clone(&guard.sequence);
        guard
            .host
            .apply_state(&sequence[index])
            .map_err(|source| KinegraphError::Apply { frame: index, source })?;
        guard
            .host
            .clear_transients()
            .map_err(|source| KinegraphError::Apply { frame: index, source })
    }

    /// Walks the whole sequence, applying each frame to the host and
    /// exporting a still named `frame_NNNNN.png` into `dir`. Returns
    /// the number of stills written. Checks `cancel` between frames;
    /// a cancelled walk returns the partial count without error.
    ///
    /// The walk runs independently of playback: it holds the state lock
    /// for its duration (ticks arriving meanwhile are dropped) and
    /// leaves both the playback state and the current frame index as
    /// they were.
    #[tracing::instrument(skip(self, dir, cancel), fields(dir = %dir.as_ref().display()))]
    pub fn record(&mut self, dir: impl AsRef<Path>, cancel: &CancelFlag) -> KinegraphResult<usize> {
        let mut guard = lock(&self.shared);
        let sequence = Arc::clone(&guard.sequence);
        let mut written = 0;
        for (index, frame) in sequence.iter().enumerate() {
            if cancel.is_cancelled() {
                break;
            }
            guard
                .host
                .apply_state(frame)
                .map_err(|source| KinegraphError::Apply { frame: index, source })?;
            guard
                .host
                .clear_transients()
                .map_err(|source| KinegraphError::Apply { frame: index, source })?;
            let path = dir.as_ref().join(format!("frame_{index:05}.png"));
            guard
                .host
                .export_still(&path)
                .map_err(|source| KinegraphError::Export {
                    frame: index,
                    written,
                    source,
                })?;
            written += 1;
        }
        Ok(written)
    }

    fn rebuild(&mut self) -> KinegraphResult<()> {
        let sequence = build_sequence(&self.keys)?;
        let mut guard = lock(&self.shared);
        guard.sequence = Arc::new(sequence);
        guard.index = 0;
        Ok(())
    }

    fn start_ticker(&mut self) {
        let shared = Arc::clone(&self.shared);
        self.ticker = Some(TickSource::spawn(self.fps.period(), move || {
            on_tick(&shared);
        }));
    }

    fn stop_ticker(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.stop();
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/playback/animator.rs"]
mod tests;
