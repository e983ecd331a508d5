use crate::library::Track;

/// The media engine as seen from the state machine.
///
/// Implementations report back through their own event channel; in particular
/// they must announce every track they start loading.
pub trait Player {
    /// Replace the engine's queue. Playback is stopped by the caller first.
    fn set_queue(&mut self, tracks: &[Track]);
    /// Make `index` the current track; starts loading it right away when playing.
    fn select(&mut self, index: usize);
    fn play(&mut self);
    fn pause(&mut self);
    fn stop(&mut self);
}
