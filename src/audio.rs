use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

use crate::constants::ANALYSER_FFT_SIZE;
use crate::core::{
    average_frequency, display_name, is_supported_audio_mime, LoadTokens, Playback,
    FALLBACK_FREQUENCY,
};
use crate::ui;

/// One decoded track, one looping source, one analyser. Loading a new track
/// stops and replaces the old one; overlapping loads are serialized by a
/// monotonic token so only the newest decode lands.
pub struct AudioPlayer {
    ctx: web::AudioContext,
    gain: web::GainNode,
    analyser: web::AnalyserNode,
    source: Option<web::AudioBufferSourceNode>,
    buffer: Option<web::AudioBuffer>,
    playback: Playback,
    tokens: LoadTokens,
    bins: Vec<u8>,
}

impl AudioPlayer {
    pub fn new() -> Result<Self, ()> {
        let ctx = web::AudioContext::new().map_err(|e| {
            log::error!("AudioContext error: {:?}", e);
        })?;
        let gain = web::GainNode::new(&ctx).map_err(|e| {
            log::error!("GainNode error: {:?}", e);
        })?;
        gain.gain().set_value(1.0);
        let analyser = web::AnalyserNode::new(&ctx).map_err(|e| {
            log::error!("AnalyserNode error: {:?}", e);
        })?;
        analyser.set_fft_size(ANALYSER_FFT_SIZE);

        // source -> gain -> analyser -> destination
        _ = gain.connect_with_audio_node(&analyser);
        _ = analyser.connect_with_audio_node(&ctx.destination());

        let bins = vec![0_u8; analyser.frequency_bin_count() as usize];
        Ok(Self {
            ctx,
            gain,
            analyser,
            source: None,
            buffer: None,
            playback: Playback::Idle,
            tokens: LoadTokens::new(),
            bins,
        })
    }

    pub fn context(&self) -> web::AudioContext {
        self.ctx.clone()
    }

    pub fn is_playing(&self) -> bool {
        self.playback.is_playing()
    }

    /// Mean analyser magnitude over the 32 bins; the fallback constant until
    /// a track has actually been attached.
    pub fn average_frequency(&mut self) -> f32 {
        if !self.tokens.has_committed() {
            return FALLBACK_FREQUENCY;
        }
        self.analyser.get_byte_frequency_data(&mut self.bins);
        average_frequency(&self.bins)
    }

    pub fn begin_load(&mut self) -> u64 {
        self.tokens.begin()
    }

    pub fn commit_load(&mut self, token: u64) -> bool {
        self.tokens.commit(token)
    }

    /// Install a freshly decoded buffer, stopping whatever was playing.
    pub fn set_track(&mut self, buffer: web::AudioBuffer) {
        self.stop_source();
        self.buffer = Some(buffer);
    }

    /// Start (or resume) playback. Idempotent; reports whether the state
    /// changed so the caller can refresh the transport icons.
    pub fn play(&mut self) -> bool {
        if self.buffer.is_none() || !self.playback.play() {
            return false;
        }
        if self.source.is_none() && !self.spawn_source() {
            self.playback = Playback::Idle;
            return false;
        }
        _ = self.ctx.resume();
        true
    }

    /// Suspend playback, keeping the looping source's position. Idempotent.
    pub fn pause(&mut self) -> bool {
        if !self.playback.pause() {
            return false;
        }
        _ = self.ctx.suspend();
        true
    }

    fn stop_source(&mut self) {
        if let Some(src) = self.source.take() {
            _ = src.stop();
        }
        self.playback = Playback::Idle;
    }

    fn spawn_source(&mut self) -> bool {
        let Some(buffer) = &self.buffer else {
            return false;
        };
        match web::AudioBufferSourceNode::new(&self.ctx) {
            Ok(src) => {
                src.set_buffer(Some(buffer));
                src.set_loop(true);
                _ = src.connect_with_audio_node(&self.gain);
                if let Err(e) = src.start() {
                    log::error!("source start error: {:?}", e);
                    return false;
                }
                self.source = Some(src);
                true
            }
            Err(e) => {
                log::error!("AudioBufferSourceNode error: {:?}", e);
                false
            }
        }
    }
}

/// Fetch and decode the bundled track. Installed with loop on and full
/// volume but not auto-played; the play icon starts it. Failures are logged
/// and leave the player untouched.
pub fn load_default_track(player: Rc<RefCell<AudioPlayer>>, path: &str) {
    let token = player.borrow_mut().begin_load();
    let ctx = player.borrow().context();
    let path = path.to_string();
    spawn_local(async move {
        let data = match fetch_array_buffer(&path).await {
            Ok(d) => d,
            Err(e) => {
                log::error!("loading the audio failed: {:?}", e);
                return;
            }
        };
        let buffer = match decode_audio_data(&ctx, &data).await {
            Ok(b) => b,
            Err(e) => {
                log::error!("decoding the audio data failed: {:?}", e);
                return;
            }
        };
        let mut p = player.borrow_mut();
        if p.commit_load(token) {
            p.set_track(buffer);
        }
    });
}

/// Decode a user-picked file and start playing it. Files with an unsupported
/// MIME type are ignored without any user-visible error.
pub fn load_user_file(player: Rc<RefCell<AudioPlayer>>, document: web::Document, file: web::File) {
    if !is_supported_audio_mime(&file.type_()) {
        return;
    }
    let name = display_name(&file.name());
    let token = player.borrow_mut().begin_load();
    let ctx = player.borrow().context();
    spawn_local(async move {
        let data = match JsFuture::from(file.array_buffer()).await {
            Ok(v) => v.unchecked_into::<js_sys::ArrayBuffer>(),
            Err(e) => {
                log::error!("reading the file failed: {:?}", e);
                return;
            }
        };
        let buffer = match decode_audio_data(&ctx, &data).await {
            Ok(b) => b,
            Err(e) => {
                log::error!("decoding the audio data failed: {:?}", e);
                return;
            }
        };
        let mut p = player.borrow_mut();
        if !p.commit_load(token) {
            return;
        }
        p.set_track(buffer);
        let playing = p.play();
        drop(p);
        ui::set_transport_icons(&document, playing);
        ui::set_now_playing(&document, &name);
    });
}

async fn fetch_array_buffer(path: &str) -> Result<js_sys::ArrayBuffer, JsValue> {
    let window = web::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let resp: web::Response = JsFuture::from(window.fetch_with_str(path)).await?.dyn_into()?;
    if !resp.ok() {
        return Err(JsValue::from_str(&format!("fetch status {}", resp.status())));
    }
    let data = JsFuture::from(resp.array_buffer()?).await?;
    Ok(data.unchecked_into::<js_sys::ArrayBuffer>())
}

async fn decode_audio_data(
    ctx: &web::AudioContext,
    data: &js_sys::ArrayBuffer,
) -> Result<web::AudioBuffer, JsValue> {
    let decoded = JsFuture::from(ctx.decode_audio_data(data)?).await?;
    decoded.dyn_into::<web::AudioBuffer>()
}
