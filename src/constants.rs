// Web-layer wiring constants: element ids the page contract provides, the
// default asset, and analyser sizing. Scene/orbit tuning lives with the pure
// math in `core::scene`.

// DOM contract (see www/index.html)
pub const CANVAS_ID: &str = "app-canvas";
pub const PLAY_ICON_ID: &str = "play-icon";
pub const PAUSE_ICON_ID: &str = "pause-icon";
pub const FILE_INPUT_ID: &str = "file-upload";
pub const NOW_PLAYING_ID: &str = "now-playing";

// Class applied to whichever transport icon is inactive
pub const GREYED_CLASS: &str = "greyed";

// Bundled track fetched at startup
pub const DEFAULT_TRACK_PATH: &str = "assets/audio/chill_bebop.mp3";

// fftSize 64 gives the 32 frequency bins the average is taken over
pub const ANALYSER_FFT_SIZE: u32 = 64;

// Icosphere mesh parameters
pub const ICO_RADIUS: f32 = 0.7;
pub const ICO_DETAIL: u32 = 4;

// MSAA sample count for the line pipeline
pub const MSAA_SAMPLES: u32 = 4;
