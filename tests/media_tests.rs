//! Media key pipeline tests: interceptor decisions, dispatch, the tap
//! lifecycle and Accessibility remediation, all against fake backends.

mod common;

use std::sync::Arc;

use common::{
    interceptor, interceptor_with, FakeAccessibility, FakeBackend, FakeHook, RecordingEngine,
    RecordingRemediator,
};
use media_butler::media::keys::NX_KEYTYPE_PLAY;
use media_butler::media::{
    control_script, ensure_accessibility, DispatchOutcome, EventSink, EventTapController,
    HookState, MediaKey, RawEvent, ScriptFailure, TapDisabledReason,
};
use media_butler::model::constants::{
    ACCESSIBILITY_SETTINGS_URLS, AUTOMATION_SETTINGS_URL, SCRIPT_ERR_NOT_AUTHORIZED,
    SCRIPT_ERR_NOT_RUNNING,
};
use media_butler::model::TargetApp;
use media_butler::{ButlerError, Disposition};

fn key_down(key: MediaKey) -> RawEvent {
    RawEvent::media_key(key, true)
}

// === Interceptor decisions ===

#[test]
fn non_media_key_passes_through_without_dispatch() {
    let (_, sink) = interceptor(Some(TargetApp::Spotify));
    let hook = FakeHook::default();

    // NX_KEYTYPE_SOUND_UP (0), key-down
    let volume = RawEvent::SystemDefined {
        subtype: 8,
        data1: 0x0000_0A00,
    };
    assert_eq!(sink.on_event(&volume, &hook), Disposition::PassThrough);
    assert!(sink.dispatcher().engine().executed().is_empty());
}

#[test]
fn other_subtypes_pass_through() {
    let (_, sink) = interceptor(Some(TargetApp::Spotify));
    let hook = FakeHook::default();

    // Play key code, but not an aux-control-buttons event.
    let event = RawEvent::SystemDefined {
        subtype: 7,
        data1: ((NX_KEYTYPE_PLAY as i64) << 16) | 0x0A00,
    };
    assert_eq!(sink.on_event(&event, &hook), Disposition::PassThrough);
    assert_eq!(sink.on_event(&RawEvent::Other(10), &hook), Disposition::PassThrough);
    assert!(sink.dispatcher().engine().executed().is_empty());
}

#[test]
fn key_up_passes_through() {
    let (_, sink) = interceptor(Some(TargetApp::Spotify));
    let hook = FakeHook::default();

    let up = RawEvent::media_key(MediaKey::PlayPause, false);
    assert_eq!(sink.on_event(&up, &hook), Disposition::PassThrough);
    assert!(sink.dispatcher().engine().executed().is_empty());
}

#[test]
fn no_target_passes_through() {
    let (_, sink) = interceptor(None);
    let hook = FakeHook::default();

    assert_eq!(
        sink.on_event(&key_down(MediaKey::PlayPause), &hook),
        Disposition::PassThrough
    );
    assert!(sink.dispatcher().engine().compiled.lock().unwrap().is_empty());
}

#[test]
fn spotify_play_pause_runs_script_and_consumes() {
    let (_, sink) = interceptor(Some(TargetApp::Spotify));
    let hook = FakeHook::default();

    assert_eq!(
        sink.on_event(&key_down(MediaKey::PlayPause), &hook),
        Disposition::Consume
    );

    let executed = sink.dispatcher().engine().executed();
    let expected = control_script(MediaKey::PlayPause, TargetApp::Spotify).unwrap();
    assert_eq!(executed, vec![expected.to_string()]);
}

#[test]
fn apple_music_fast_forward_passes_through() {
    let (_, sink) = interceptor(Some(TargetApp::AppleMusic));
    let hook = FakeHook::default();

    assert_eq!(
        sink.on_event(&key_down(MediaKey::FastForward), &hook),
        Disposition::PassThrough
    );
    assert_eq!(
        sink.on_event(&key_down(MediaKey::Rewind), &hook),
        Disposition::PassThrough
    );
    assert!(sink.dispatcher().engine().executed().is_empty());
}

#[test]
fn next_and_previous_reach_apple_music() {
    let (_, sink) = interceptor(Some(TargetApp::AppleMusic));
    let hook = FakeHook::default();

    assert_eq!(sink.on_event(&key_down(MediaKey::Next), &hook), Disposition::Consume);
    assert_eq!(
        sink.on_event(&key_down(MediaKey::Previous), &hook),
        Disposition::Consume
    );

    let executed = sink.dispatcher().engine().executed();
    assert_eq!(executed.len(), 2);
    assert!(executed.iter().all(|s| s.contains("tell application \"Music\"")));
}

#[test]
fn tap_disabled_reenables_and_passes_through() {
    let (_, sink) = interceptor(Some(TargetApp::Spotify));
    let hook = FakeHook::default();

    for reason in [TapDisabledReason::Timeout, TapDisabledReason::UserInput] {
        assert_eq!(
            sink.on_event(&RawEvent::TapDisabled(reason), &hook),
            Disposition::PassThrough
        );
    }
    assert_eq!(hook.reenable_count(), 2);
    assert!(sink.dispatcher().engine().compiled.lock().unwrap().is_empty());
}

#[test]
fn switching_targets_never_reaches_the_old_one() {
    let (selector, sink) = interceptor(Some(TargetApp::Spotify));
    let hook = FakeHook::default();

    sink.on_event(&key_down(MediaKey::Next), &hook);

    selector.clear();
    assert_eq!(
        sink.on_event(&key_down(MediaKey::Next), &hook),
        Disposition::PassThrough
    );

    selector.select(Some(TargetApp::AppleMusic));
    sink.on_event(&key_down(MediaKey::Next), &hook);

    let executed = sink.dispatcher().engine().executed();
    assert_eq!(executed.len(), 2);
    assert!(executed[0].contains("\"Spotify\""));
    assert!(executed[1].contains("\"Music\""));
    assert!(!executed[1].contains("Spotify"));
}

// === Dispatch failures ===

#[test]
fn failed_dispatch_still_consumes() {
    let (_, sink) = interceptor_with(Some(TargetApp::Spotify), RecordingEngine::failing_with(-1));
    let hook = FakeHook::default();

    assert_eq!(sink.on_event(&key_down(MediaKey::Next), &hook), Disposition::Consume);
    assert!(sink.dispatcher().remediator().urls().is_empty());
    assert!(sink.dispatcher().remediator().launches().is_empty());
}

#[test]
fn not_authorized_opens_automation_settings_and_activates_player() {
    let (_, sink) = interceptor_with(
        Some(TargetApp::AppleMusic),
        RecordingEngine::failing_with(SCRIPT_ERR_NOT_AUTHORIZED),
    );
    let hook = FakeHook::default();

    sink.on_event(&key_down(MediaKey::PlayPause), &hook);

    let remediator = sink.dispatcher().remediator();
    assert_eq!(remediator.urls(), vec![AUTOMATION_SETTINGS_URL.to_string()]);
    assert_eq!(remediator.launches(), vec![(TargetApp::AppleMusic, true)]);
}

#[test]
fn not_running_launches_player_in_background() {
    let (_, sink) = interceptor_with(
        Some(TargetApp::Spotify),
        RecordingEngine::failing_with(SCRIPT_ERR_NOT_RUNNING),
    );
    let hook = FakeHook::default();

    sink.on_event(&key_down(MediaKey::Previous), &hook);
    sink.on_event(&key_down(MediaKey::Previous), &hook);

    let remediator = sink.dispatcher().remediator();
    assert!(remediator.urls().is_empty());
    // No latch: every failure remediates again.
    assert_eq!(
        remediator.launches(),
        vec![(TargetApp::Spotify, false), (TargetApp::Spotify, false)]
    );
}

#[test]
fn compile_failure_is_reported_without_execution() {
    let engine = RecordingEngine {
        compile_error: Some(ScriptFailure::new(Some(-2741), "syntax")),
        ..RecordingEngine::default()
    };
    let (_, sink) = interceptor_with(Some(TargetApp::Spotify), engine);

    let outcome = sink
        .dispatcher()
        .dispatch(MediaKey::PlayPause, TargetApp::Spotify);
    assert_eq!(
        outcome,
        DispatchOutcome::Failed(ButlerError::ScriptCompileFailed("syntax".into()))
    );
    assert!(sink.dispatcher().engine().executed().is_empty());
}

// === Tap lifecycle ===

#[test]
fn activate_installs_once() {
    let (_, sink) = interceptor(None);
    let mut tap = EventTapController::new(FakeBackend::default(), sink);

    assert_eq!(tap.state(), HookState::Uninitialized);
    tap.activate().unwrap();
    tap.activate().unwrap();

    assert!(tap.is_active());
    assert_eq!(tap.backend().installs, 1);
    assert!(tap.backend().has_sink());
}

#[test]
fn double_deactivate_uninstalls_once() {
    let (_, sink) = interceptor(Some(TargetApp::Spotify));
    let mut tap = EventTapController::new(FakeBackend::default(), sink);

    tap.activate().unwrap();
    tap.deactivate();
    tap.deactivate();

    assert_eq!(tap.state(), HookState::Disposed);
    assert_eq!(tap.backend().uninstalls, 1);
    assert!(!tap.backend().has_sink());
}

#[test]
fn disposed_tap_passes_everything_through() {
    let (_, sink) = interceptor(Some(TargetApp::Spotify));
    let observer = Arc::clone(&sink);
    let mut tap = EventTapController::new(FakeBackend::default(), sink);
    let hook = FakeHook::default();

    tap.activate().unwrap();
    assert_eq!(
        tap.handle(&key_down(MediaKey::PlayPause), &hook),
        Disposition::Consume
    );

    tap.deactivate();
    assert_eq!(
        tap.handle(&key_down(MediaKey::PlayPause), &hook),
        Disposition::PassThrough
    );
    assert_eq!(observer.dispatcher().engine().executed().len(), 1);
    assert_eq!(tap.activate(), Err(ButlerError::HookDisposed));
}

#[test]
fn failed_install_disposes_controller() {
    let (_, sink) = interceptor(Some(TargetApp::Spotify));
    let mut tap = EventTapController::new(FakeBackend::failing(), sink);

    assert_eq!(tap.activate(), Err(ButlerError::HookCreationFailed));
    assert_eq!(tap.state(), HookState::Disposed);
    assert_eq!(tap.activate(), Err(ButlerError::HookDisposed));

    tap.deactivate();
    assert_eq!(tap.backend().uninstalls, 0);
}

#[test]
fn inactive_tap_ignores_events() {
    let (_, sink) = interceptor(Some(TargetApp::Spotify));
    let tap = EventTapController::new(FakeBackend::default(), sink);
    let hook = FakeHook::default();

    assert_eq!(
        tap.handle(&key_down(MediaKey::Next), &hook),
        Disposition::PassThrough
    );
}

// === Accessibility remediation ===

#[test]
fn trusted_process_skips_prompt_and_settings() {
    let probe = FakeAccessibility::trusted();
    let remediator = RecordingRemediator::default();

    assert!(ensure_accessibility(&probe, &remediator));
    assert_eq!(probe.prompt_count(), 0);
    assert!(remediator.urls().is_empty());
}

#[test]
fn granted_prompt_does_not_open_settings() {
    let probe = FakeAccessibility::granted_on_prompt();
    let remediator = RecordingRemediator::default();

    assert!(ensure_accessibility(&probe, &remediator));
    assert_eq!(probe.prompt_count(), 1);
    assert!(remediator.urls().is_empty());
}

#[test]
fn denied_prompt_opens_both_settings_panes_in_order() {
    let probe = FakeAccessibility::denied();
    let remediator = RecordingRemediator::default();

    assert!(!ensure_accessibility(&probe, &remediator));
    assert_eq!(probe.prompt_count(), 1);
    assert_eq!(remediator.urls(), ACCESSIBILITY_SETTINGS_URLS.to_vec());
    assert!(remediator.launches().is_empty());
}
