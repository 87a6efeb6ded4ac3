// ABOUTME: In-memory launcher, process handle and host used by backend and lifecycle tests.
// ABOUTME: Records launches, interrupts, dialogs and quits instead of touching the OS.

use std::cell::{Cell, RefCell};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::mpsc::{UnboundedReceiver, unbounded_channel};

use super::supervisor::Supervisor;
use super::types::{
    BackendError, BackendHandle, BackendLauncher, BackendReady, DesktopHost, Lifetime,
};
use crate::platform::Platform;

pub const READY_LINE: &[u8] = b"Starting web interface on 127.0.0.1:8642";

pub struct FakeHandle {
    pid: u32,
    interrupts: Arc<AtomicUsize>,
}

impl BackendHandle for FakeHandle {
    fn pid(&self) -> u32 {
        self.pid
    }

    fn interrupt(&mut self) -> Result<(), BackendError> {
        self.interrupts.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[derive(Default)]
pub struct FakeLauncher {
    fail: bool,
    pub launches: RefCell<Vec<(PathBuf, Vec<String>, Lifetime)>>,
    interrupts: Arc<AtomicUsize>,
}

impl FakeLauncher {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn launch_count(&self) -> usize {
        self.launches.borrow().len()
    }

    pub fn interrupt_count(&self) -> usize {
        self.interrupts.load(Ordering::SeqCst)
    }
}

impl BackendLauncher for FakeLauncher {
    type Handle = FakeHandle;

    fn launch(
        &self,
        program: &Path,
        args: &[String],
        lifetime: Lifetime,
    ) -> Result<FakeHandle, BackendError> {
        if self.fail {
            return Err(BackendError::Spawn {
                path: program.to_path_buf(),
                reason: "No such file or directory (os error 2)".to_string(),
            });
        }
        self.launches
            .borrow_mut()
            .push((program.to_path_buf(), args.to_vec(), lifetime));
        Ok(FakeHandle {
            pid: 4000 + lifetime.0 as u32,
            interrupts: Arc::clone(&self.interrupts),
        })
    }
}

#[derive(Default)]
pub struct FakeHost {
    pub dialogs: RefCell<Vec<(String, String)>>,
    pub quits: Cell<usize>,
}

impl DesktopHost for FakeHost {
    fn show_error(&self, title: &str, message: &str) {
        self.dialogs
            .borrow_mut()
            .push((title.to_string(), message.to_string()));
    }

    fn quit(&self) {
        self.quits.set(self.quits.get() + 1);
    }
}

/// Supervisor for a Linux install under `/opt/Unicoin`.
pub fn supervisor() -> (Supervisor<FakeHandle>, UnboundedReceiver<BackendReady>) {
    let (tx, rx) = unbounded_channel();
    let supervisor = Supervisor::for_platform(
        Platform::Linux,
        Path::new("/opt/Unicoin/unicoin-desktop"),
        tx,
    );
    (supervisor, rx)
}

/// Start a backend that is expected to spawn.
pub fn spawned(supervisor: &mut Supervisor<FakeHandle>, launcher: &FakeLauncher) -> Lifetime {
    match supervisor.start(launcher) {
        super::StartOutcome::Spawned(lifetime) => lifetime,
        other => panic!("expected spawn, got {:?}", other),
    }
}

pub fn drain(rx: &mut UnboundedReceiver<BackendReady>) -> Vec<BackendReady> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}
