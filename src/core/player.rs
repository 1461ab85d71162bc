/// Analyser average reported before any audio has been attached.
pub const FALLBACK_FREQUENCY: f32 = 10.0;

/// Label shown when a file name strips down to nothing.
pub const UNKNOWN_TRACK: &str = "Unknown";

/// MIME types accepted from the file input; everything else is ignored.
pub const ACCEPTED_AUDIO_MIME: &[&str] = &["audio/mp3", "audio/mpeg"];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Playback {
    #[default]
    Idle,
    Playing,
    Paused,
}

impl Playback {
    /// Transition toward playing. Returns true when the state actually
    /// changed, so the caller knows whether to touch the audio context and
    /// the play/pause indicators.
    pub fn play(&mut self) -> bool {
        match *self {
            Playback::Playing => false,
            _ => {
                *self = Playback::Playing;
                true
            }
        }
    }

    /// Transition toward paused. No-op unless currently playing.
    pub fn pause(&mut self) -> bool {
        match *self {
            Playback::Playing => {
                *self = Playback::Paused;
                true
            }
            _ => false,
        }
    }

    pub fn is_playing(&self) -> bool {
        matches!(self, Playback::Playing)
    }
}

pub fn is_supported_audio_mime(mime: &str) -> bool {
    ACCEPTED_AUDIO_MIME.contains(&mime)
}

/// Display name for a track: file name with a trailing audio extension
/// stripped, falling back to [`UNKNOWN_TRACK`] for degenerate names.
pub fn display_name(file_name: &str) -> String {
    let trimmed = file_name.trim();
    let base = match trimmed.rsplit_once('.') {
        Some((stem, ext)) if matches!(ext.to_ascii_lowercase().as_str(), "mp3" | "mpeg") => stem,
        _ => trimmed,
    };
    if base.is_empty() {
        UNKNOWN_TRACK.to_string()
    } else {
        base.to_string()
    }
}

/// Mean magnitude over the analyser's byte frequency bins.
///
/// An empty slice means no analyser data is available yet and yields the
/// fallback constant, matching the pre-audio behavior of the frequency
/// uniform.
pub fn average_frequency(bins: &[u8]) -> f32 {
    if bins.is_empty() {
        return FALLBACK_FREQUENCY;
    }
    let sum: u32 = bins.iter().map(|&b| b as u32).sum();
    sum as f32 / bins.len() as f32
}

/// Monotonic sequence guard for overlapping async track loads.
///
/// Each load call takes a token from `begin`; when its decode completes it
/// offers the token back via `commit`. Only the newest outstanding token is
/// allowed to commit, so a slow early decode can never clobber a later
/// request.
#[derive(Debug, Default)]
pub struct LoadTokens {
    issued: u64,
    committed: Option<u64>,
}

impl LoadTokens {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new load; invalidates every token issued before it.
    pub fn begin(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    /// True when `token` is still the newest issued and has not committed
    /// yet. A successful commit records the token so duplicate completions
    /// are also rejected.
    pub fn commit(&mut self, token: u64) -> bool {
        if token == self.issued && self.committed != Some(token) {
            self.committed = Some(token);
            true
        } else {
            false
        }
    }

    /// Whether any load has ever completed. Drives the analyser fallback.
    pub fn has_committed(&self) -> bool {
        self.committed.is_some()
    }
}
