//! Recording backends shared by the workspace and dashboard tests.

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use paneboard_common::{EnvironmentError, PaneId, Rect, SurfaceError};
use tokio::sync::watch;
use url::Url;

use crate::backend::{EnvironmentFactory, PaneHost, SurfaceBackend};
use crate::environment::ResourceKey;
use crate::policy::PanePolicy;

#[derive(Debug)]
pub(crate) struct MockEnvironment {
    pub key: String,
    pub serial: usize,
}

/// Counts creations; can fail chosen keys and hold every creation until a
/// gate opens.
pub(crate) struct MockFactory {
    created: Arc<AtomicUsize>,
    failing: HashSet<String>,
    gate: Option<watch::Receiver<bool>>,
}

impl MockFactory {
    pub fn new() -> Self {
        Self {
            created: Arc::new(AtomicUsize::new(0)),
            failing: HashSet::new(),
            gate: None,
        }
    }

    pub fn failing(mut self, key: &str) -> Self {
        self.failing.insert(key.to_lowercase());
        self
    }

    /// Hold creations until `true` is sent on the returned sender.
    pub fn gated(mut self) -> (Self, watch::Sender<bool>) {
        let (tx, rx) = watch::channel(false);
        self.gate = Some(rx);
        (self, tx)
    }

    pub fn counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.created)
    }
}

#[async_trait]
impl EnvironmentFactory for MockFactory {
    type Environment = MockEnvironment;

    async fn create_environment(
        &self,
        key: &ResourceKey,
    ) -> Result<MockEnvironment, EnvironmentError> {
        let serial = self.created.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.gate {
            let mut gate = gate.clone();
            let _ = gate.wait_for(|open| *open).await;
        }
        if self.failing.contains(key.as_str()) {
            return Err(EnvironmentError::CreationFailed {
                key: key.to_string(),
                reason: "mock failure".into(),
            });
        }
        Ok(MockEnvironment {
            key: key.to_string(),
            serial,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum HostCall {
    Created(PaneId, String),
    Attached(PaneId, String),
    Policy(PaneId, PanePolicy),
    Navigated(PaneId, String),
    Reloaded(PaneId),
    Bounds(PaneId, Rect),
    Unavailable(PaneId, String),
    Disposed(PaneId),
}

impl HostCall {
    fn pane_id(&self) -> PaneId {
        match self {
            HostCall::Created(id, _)
            | HostCall::Attached(id, _)
            | HostCall::Policy(id, _)
            | HostCall::Navigated(id, _)
            | HostCall::Reloaded(id)
            | HostCall::Bounds(id, _)
            | HostCall::Unavailable(id, _)
            | HostCall::Disposed(id) => *id,
        }
    }
}

#[derive(Debug, Default)]
pub(crate) struct Behaviour {
    pub fail_create: bool,
    pub fail_navigate: bool,
    pub fail_reload: bool,
}

/// Shared call log and failure switches.
#[derive(Clone, Default)]
pub(crate) struct Recorder {
    calls: Arc<Mutex<Vec<HostCall>>>,
    behaviour: Arc<Mutex<Behaviour>>,
}

impl Recorder {
    pub fn calls(&self) -> Vec<HostCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_for(&self, pane_id: PaneId) -> Vec<HostCall> {
        self.calls()
            .into_iter()
            .filter(|c| c.pane_id() == pane_id)
            .collect()
    }

    pub fn count(&self, pred: impl Fn(&HostCall) -> bool) -> usize {
        self.calls().iter().filter(|c| pred(c)).count()
    }

    pub fn set(&self, f: impl FnOnce(&mut Behaviour)) {
        f(&mut self.behaviour.lock().unwrap());
    }

    fn record(&self, call: HostCall) {
        self.calls.lock().unwrap().push(call);
    }

    fn fails(&self, f: impl FnOnce(&Behaviour) -> bool) -> bool {
        f(&self.behaviour.lock().unwrap())
    }
}

pub(crate) struct MockBackend {
    pub recorder: Recorder,
}

impl MockBackend {
    pub fn new() -> (Self, Recorder) {
        let recorder = Recorder::default();
        (
            Self {
                recorder: recorder.clone(),
            },
            recorder,
        )
    }
}

impl SurfaceBackend for MockBackend {
    type Host = MockHost;

    fn create_host(&mut self, pane_id: PaneId, title: &str) -> Result<MockHost, SurfaceError> {
        if self.recorder.fails(|b| b.fail_create) {
            return Err(SurfaceError::Backend("no window".into()));
        }
        self.recorder
            .record(HostCall::Created(pane_id, title.to_string()));
        Ok(MockHost {
            pane_id,
            recorder: self.recorder.clone(),
        })
    }
}

pub(crate) struct MockHost {
    pane_id: PaneId,
    recorder: Recorder,
}

impl PaneHost for MockHost {
    type Environment = MockEnvironment;

    fn attach(&mut self, environment: Arc<MockEnvironment>) -> Result<(), SurfaceError> {
        self.recorder
            .record(HostCall::Attached(self.pane_id, environment.key.clone()));
        Ok(())
    }

    fn apply_policy(&mut self, policy: &PanePolicy) -> Result<(), SurfaceError> {
        self.recorder
            .record(HostCall::Policy(self.pane_id, policy.clone()));
        Ok(())
    }

    fn navigate(&mut self, url: &Url) -> Result<(), SurfaceError> {
        if self.recorder.fails(|b| b.fail_navigate) {
            return Err(SurfaceError::Backend("navigation refused".into()));
        }
        self.recorder
            .record(HostCall::Navigated(self.pane_id, url.to_string()));
        Ok(())
    }

    fn reload(&mut self) -> Result<(), SurfaceError> {
        if self.recorder.fails(|b| b.fail_reload) {
            return Err(SurfaceError::Backend("renderer gone".into()));
        }
        self.recorder.record(HostCall::Reloaded(self.pane_id));
        Ok(())
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.recorder.record(HostCall::Bounds(self.pane_id, bounds));
    }

    fn show_unavailable(&mut self, reason: &str) {
        self.recorder
            .record(HostCall::Unavailable(self.pane_id, reason.to_string()));
    }

    fn dispose(&mut self) {
        self.recorder.record(HostCall::Disposed(self.pane_id));
    }
}
