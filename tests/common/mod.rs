//! Fakes shared by the integration tests.
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use media_butler::error::Result;
use media_butler::media::{
    AccessibilityProbe, CommandDispatcher, EventSink, HookControl, KeyInterceptor, Remediator, ScriptEngine,
    ScriptFailure, TapBackend, TargetSelector,
};
use media_butler::model::TargetApp;
use media_butler::ButlerError;

/// Script engine that records sources instead of running them.
#[derive(Default)]
pub struct RecordingEngine {
    pub compiled: Mutex<Vec<String>>,
    pub executed: Mutex<Vec<String>>,
    pub compile_error: Option<ScriptFailure>,
    pub execute_error: Option<ScriptFailure>,
}

impl RecordingEngine {
    pub fn failing_with(code: i64) -> Self {
        Self {
            execute_error: Some(ScriptFailure::new(Some(code), "scripted failure")),
            ..Self::default()
        }
    }

    pub fn executed(&self) -> Vec<String> {
        self.executed.lock().unwrap().clone()
    }
}

impl ScriptEngine for RecordingEngine {
    type Script = String;

    fn compile(&self, source: &str) -> std::result::Result<String, ScriptFailure> {
        self.compiled.lock().unwrap().push(source.to_string());
        match &self.compile_error {
            Some(failure) => Err(failure.clone()),
            None => Ok(source.to_string()),
        }
    }

    fn execute(&self, script: &String) -> std::result::Result<(), ScriptFailure> {
        self.executed.lock().unwrap().push(script.clone());
        match &self.execute_error {
            Some(failure) => Err(failure.clone()),
            None => Ok(()),
        }
    }
}

#[derive(Default)]
pub struct RecordingRemediator {
    pub urls: Mutex<Vec<String>>,
    pub launches: Mutex<Vec<(TargetApp, bool)>>,
}

impl RecordingRemediator {
    pub fn urls(&self) -> Vec<String> {
        self.urls.lock().unwrap().clone()
    }

    pub fn launches(&self) -> Vec<(TargetApp, bool)> {
        self.launches.lock().unwrap().clone()
    }
}

impl Remediator for RecordingRemediator {
    fn open_url(&self, url: &str) {
        self.urls.lock().unwrap().push(url.to_string());
    }

    fn launch_app(&self, app: TargetApp, activate: bool) {
        self.launches.lock().unwrap().push((app, activate));
    }
}

/// Counts re-enable requests.
#[derive(Default)]
pub struct FakeHook {
    pub reenabled: AtomicUsize,
}

impl FakeHook {
    pub fn reenable_count(&self) -> usize {
        self.reenabled.load(Ordering::SeqCst)
    }
}

impl HookControl for FakeHook {
    fn reenable(&self) {
        self.reenabled.fetch_add(1, Ordering::SeqCst);
    }
}

/// Accessibility trust state with a scripted answer to the prompt.
#[derive(Default)]
pub struct FakeAccessibility {
    pub trusted: bool,
    pub granted_on_prompt: bool,
    pub prompts: AtomicUsize,
}

impl FakeAccessibility {
    pub fn trusted() -> Self {
        Self {
            trusted: true,
            ..Self::default()
        }
    }

    pub fn granted_on_prompt() -> Self {
        Self {
            granted_on_prompt: true,
            ..Self::default()
        }
    }

    pub fn denied() -> Self {
        Self::default()
    }

    pub fn prompt_count(&self) -> usize {
        self.prompts.load(Ordering::SeqCst)
    }
}

impl AccessibilityProbe for FakeAccessibility {
    fn is_trusted(&self) -> bool {
        self.trusted
    }

    fn request(&self) -> bool {
        self.prompts.fetch_add(1, Ordering::SeqCst);
        self.granted_on_prompt
    }
}

/// Backend that only tracks registration.
#[derive(Default)]
pub struct FakeBackend {
    pub installs: usize,
    pub uninstalls: usize,
    pub fail_install: bool,
    sink: Option<Arc<dyn EventSink>>,
}

impl FakeBackend {
    pub fn failing() -> Self {
        Self {
            fail_install: true,
            ..Self::default()
        }
    }

    pub fn has_sink(&self) -> bool {
        self.sink.is_some()
    }
}

impl TapBackend for FakeBackend {
    fn install(&mut self, sink: Arc<dyn EventSink>) -> Result<()> {
        if self.fail_install {
            return Err(ButlerError::HookCreationFailed);
        }
        self.installs += 1;
        self.sink = Some(sink);
        Ok(())
    }

    fn uninstall(&mut self) {
        self.uninstalls += 1;
        self.sink = None;
    }

    fn is_installed(&self) -> bool {
        self.sink.is_some()
    }
}

pub type TestInterceptor = KeyInterceptor<RecordingEngine, RecordingRemediator>;

pub fn interceptor_with(
    selected: Option<TargetApp>,
    engine: RecordingEngine,
) -> (Arc<TargetSelector>, Arc<TestInterceptor>) {
    let selector = Arc::new(TargetSelector::new(selected));
    let dispatcher = CommandDispatcher::new(engine, RecordingRemediator::default());
    let interceptor = Arc::new(KeyInterceptor::new(Arc::clone(&selector), dispatcher));
    (selector, interceptor)
}

pub fn interceptor(selected: Option<TargetApp>) -> (Arc<TargetSelector>, Arc<TestInterceptor>) {
    interceptor_with(selected, RecordingEngine::default())
}
