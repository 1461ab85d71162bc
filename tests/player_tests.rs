// Host-side integration tests for the pure playback/analysis core.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod player {
    include!("../src/core/player.rs");
}

use player::*;

#[test]
fn mime_gate_accepts_only_mp3_types() {
    assert!(is_supported_audio_mime("audio/mp3"));
    assert!(is_supported_audio_mime("audio/mpeg"));
    assert!(!is_supported_audio_mime("text/plain"));
    assert!(!is_supported_audio_mime("audio/ogg"));
    assert!(!is_supported_audio_mime(""));
    // no substring matching: the whole type must be listed
    assert!(!is_supported_audio_mime("audio/mpeg; codecs=mp3"));
}

#[test]
fn display_name_strips_audio_extension() {
    assert_eq!(display_name("chill_bebop.mp3"), "chill_bebop");
    assert_eq!(display_name("track.MP3"), "track");
    assert_eq!(display_name("loop.mpeg"), "loop");
    // only the final audio extension is stripped
    assert_eq!(display_name("my.album.mp3"), "my.album");
}

#[test]
fn display_name_leaves_other_names_alone() {
    assert_eq!(display_name("notes.txt"), "notes.txt");
    assert_eq!(display_name("plain"), "plain");
}

#[test]
fn display_name_degenerate_inputs_fall_back() {
    assert_eq!(display_name(""), UNKNOWN_TRACK);
    assert_eq!(display_name("   "), UNKNOWN_TRACK);
    assert_eq!(display_name(".mp3"), UNKNOWN_TRACK);
}

#[test]
fn average_frequency_fallback_without_data() {
    assert_eq!(average_frequency(&[]), FALLBACK_FREQUENCY);
}

#[test]
fn average_frequency_is_the_mean_of_bins() {
    assert_eq!(average_frequency(&[0, 0, 0, 0]), 0.0);
    assert_eq!(average_frequency(&[10, 20, 30, 40]), 25.0);
    assert_eq!(average_frequency(&[255; 32]), 255.0);
}

#[test]
fn average_frequency_never_negative() {
    for n in 1..64 {
        let bins: Vec<u8> = (0..n).map(|i| (i * 7) as u8).collect();
        assert!(average_frequency(&bins) >= 0.0);
    }
}

#[test]
fn playback_play_is_idempotent() {
    let mut p = Playback::Idle;
    assert!(p.play(), "idle -> playing should report a change");
    assert!(p.is_playing());
    assert!(!p.play(), "play while playing is a no-op");
    assert!(p.is_playing());
}

#[test]
fn playback_pause_is_idempotent() {
    let mut p = Playback::Idle;
    assert!(!p.pause(), "pause before ever playing is a no-op");
    assert!(p.play());
    assert!(p.pause());
    assert_eq!(p, Playback::Paused);
    assert!(!p.pause(), "pause while paused is a no-op");
    assert!(p.play(), "resume from paused reports a change");
}

#[test]
fn load_tokens_newest_wins_exactly_once() {
    let mut tokens = LoadTokens::new();
    let first = tokens.begin();
    let second = tokens.begin();

    // the earlier request finished late: it must not commit
    assert!(!tokens.commit(first));
    assert!(!tokens.has_committed());

    assert!(tokens.commit(second));
    assert!(tokens.has_committed());
    // duplicate completion of the same request is also rejected
    assert!(!tokens.commit(second));
}

#[test]
fn load_tokens_out_of_order_completion() {
    let mut tokens = LoadTokens::new();
    let a = tokens.begin();
    let b = tokens.begin();

    // newest completes first, stale one afterwards
    assert!(tokens.commit(b));
    assert!(!tokens.commit(a));

    // a new load invalidates the committed one
    let c = tokens.begin();
    assert!(tokens.commit(c));
}

#[test]
fn load_tokens_fresh_state() {
    let mut tokens = LoadTokens::new();
    assert!(!tokens.has_committed());
    // a token that was never issued cannot commit
    assert!(!tokens.commit(7));
}
