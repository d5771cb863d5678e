use skyward_dash::audio::{Audio, AudioSink, Sound};
use speculoos::prelude::*;
use strum::IntoEnumIterator;

#[test]
fn test_disabled_audio_ignores_every_call() {
    let mut audio = Audio::disabled();

    for sound in Sound::iter() {
        audio.play(sound);
        audio.play_looped(sound);
        audio.stop(sound);
    }

    assert_that(&audio.is_disabled()).is_true();
}

#[test]
fn test_clones_of_disabled_audio_stay_disabled() {
    let audio = Audio::disabled();
    let mut sink: Box<dyn AudioSink> = Box::new(audio.clone());

    sink.play_looped(Sound::BackgroundMusic);
    sink.stop(Sound::BackgroundMusic);

    assert_that(&audio.is_disabled()).is_true();
}

#[test]
fn test_missing_audio_subsystem_falls_back_to_silence() {
    let (subsystem, mut audio) = Audio::with_subsystem(Err("No available audio device".to_string()));

    assert_that(&subsystem.is_none()).is_true();
    assert_that(&audio.is_disabled()).is_true();

    audio.play(Sound::Jump);
    audio.play_looped(Sound::BackgroundMusic);
    audio.stop(Sound::BackgroundMusic);
}
