use crate::audio::EngineState;

/// The playback state of the application.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum PlaybackStatus {
    #[default]
    Stopped,
    Playing,
    Paused,
}

impl PlaybackStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Stopped => "Stopped",
            Self::Playing => "Playing",
            Self::Paused => "Paused",
        }
    }
}

impl From<EngineState> for PlaybackStatus {
    fn from(state: EngineState) -> Self {
        match state {
            EngineState::Playing => Self::Playing,
            EngineState::Paused => Self::Paused,
            EngineState::Stopped | EngineState::Idle => Self::Stopped,
        }
    }
}
