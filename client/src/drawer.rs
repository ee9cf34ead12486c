//! Drawer session: the gesture engine wired to the sync register.
//!
//! DESIGN
//! ======
//! One tokio task owns every piece of mutable state — the gesture engine,
//! the sync register, and the error state. Pointer events and network
//! completions are discrete messages consumed by that single task, so no
//! two handlers ever run at once and there is never ambiguity about which
//! version of the rectangle a dispatch carries. The only suspension point
//! is the awaited network call, held in a single optional join handle;
//! pointer gestures keep flowing while it is outstanding and park their
//! commits in the register's pending slot.
//!
//! The rendering layer observes the session through a watch channel: the
//! current rectangle, whether a save is on the wire, and the latest sync
//! failure (cleared by the next successful save).

#[cfg(test)]
#[path = "drawer_test.rs"]
mod drawer_test;

use std::fmt;
use std::sync::Arc;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use geometry::camera::{CanvasTransform, Point};
use geometry::engine::{Action, DrawerCore};
use geometry::handle::Handle;
use geometry::rect::{Rect, SizeLocation};

use crate::api::{RectangleStore, StoreError};
use crate::sync::SyncRegister;

/// User-visible failure of the sync layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawerError {
    /// The initial fetch failed; a default rectangle is shown instead.
    Load,
    /// The server rejected the last write and said why.
    Validation(String),
    /// The last write never reached the server.
    Transport(String),
}

impl fmt::Display for DrawerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Load => write!(f, "failed to load initial size"),
            Self::Validation(message) => write!(f, "{message}"),
            Self::Transport(_) => write!(f, "failed to save rectangle"),
        }
    }
}

/// Snapshot of session state published to the rendering layer.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawerStatus {
    /// Working rectangle to draw.
    pub rect: Rect,
    /// Whether a save request is currently on the wire.
    pub syncing: bool,
    /// Latest sync failure, cleared by the next successful save.
    pub error: Option<DrawerError>,
}

enum Command {
    PointerDown { screen: Point, handle: Option<Handle> },
    PointerMove { screen: Point },
    PointerUp,
    PointerLeave,
    SetTransform(CanvasTransform),
    ClearTransform,
    SetRect(Rect),
}

/// Handle to a running drawer session.
///
/// Dropping the handle tears the session down: the task drains out, any
/// in-flight save is aborted, and a parked retry is discarded — nothing
/// mutates state after teardown.
pub struct Drawer {
    commands: mpsc::UnboundedSender<Command>,
    status: watch::Receiver<DrawerStatus>,
    task: JoinHandle<()>,
}

impl Drawer {
    /// Spawn a session backed by `store`. Must be called within a tokio
    /// runtime. The task first fetches the remote rectangle and adopts it
    /// as both the working copy and the acknowledged state; commands sent
    /// in the meantime queue up and are applied afterwards.
    #[must_use]
    pub fn spawn<S: RectangleStore + 'static>(store: S) -> Self {
        let core = DrawerCore::new();
        let (commands, rx) = mpsc::unbounded_channel();
        let (status_tx, status) = watch::channel(DrawerStatus {
            rect: core.rect(),
            syncing: false,
            error: None,
        });
        let task = DrawerTask {
            core,
            register: SyncRegister::new(),
            store: Arc::new(store),
            status: status_tx,
            error: None,
        };
        Self { commands, status, task: tokio::spawn(task.run(rx)) }
    }

    /// Watch channel carrying the state to render.
    #[must_use]
    pub fn status(&self) -> watch::Receiver<DrawerStatus> {
        self.status.clone()
    }

    /// Pointer pressed: on a handle to start a resize, elsewhere on the
    /// rectangle body to start a drag.
    pub fn pointer_down(&self, screen: Point, handle: Option<Handle>) {
        self.send(Command::PointerDown { screen, handle });
    }

    /// Pointer moved.
    pub fn pointer_move(&self, screen: Point) {
        self.send(Command::PointerMove { screen });
    }

    /// Pointer released: ends the gesture and saves its result.
    pub fn pointer_up(&self) {
        self.send(Command::PointerUp);
    }

    /// Pointer left the canvas: commits exactly like a release.
    pub fn pointer_leave(&self) {
        self.send(Command::PointerLeave);
    }

    /// Report the canvas's current screen transform.
    pub fn set_transform(&self, transform: CanvasTransform) {
        self.send(Command::SetTransform(transform));
    }

    /// The canvas unmounted; pointer events become no-ops.
    pub fn clear_transform(&self) {
        self.send(Command::ClearTransform);
    }

    /// Replace the rectangle directly (numeric width/height inputs) and
    /// save it immediately.
    pub fn set_rect(&self, rect: Rect) {
        self.send(Command::SetRect(rect));
    }

    /// Tear down the session and wait for the task to finish.
    pub async fn shutdown(self) {
        let Self { commands, status, task } = self;
        drop(commands);
        drop(status);
        // JoinError here only means the task itself was aborted externally.
        let _ = task.await;
    }

    fn send(&self, command: Command) {
        // After teardown the receiver is gone; events are dropped by design.
        let _ = self.commands.send(command);
    }
}

type Flight = JoinHandle<Result<(), StoreError>>;

/// Resolve the in-flight save's outcome; pends forever when nothing is on
/// the wire, leaving the select loop driven by commands alone.
async fn flight_outcome(flight: &mut Option<Flight>) -> Result<(), StoreError> {
    match flight {
        Some(task) => match task.await {
            Ok(outcome) => outcome,
            Err(_) => Err(StoreError::Cancelled),
        },
        None => std::future::pending().await,
    }
}

struct DrawerTask<S> {
    core: DrawerCore,
    register: SyncRegister,
    store: Arc<S>,
    status: watch::Sender<DrawerStatus>,
    error: Option<DrawerError>,
}

impl<S: RectangleStore + 'static> DrawerTask<S> {
    async fn run(mut self, mut commands: mpsc::UnboundedReceiver<Command>) {
        self.load_initial().await;

        let mut flight: Option<Flight> = None;
        loop {
            tokio::select! {
                command = commands.recv() => {
                    let Some(command) = command else { break };
                    if let Some(payload) = self.apply(command) {
                        flight = Some(self.dispatch(payload));
                    }
                }
                outcome = flight_outcome(&mut flight) => {
                    flight = None;
                    if let Some(payload) = self.finish(outcome) {
                        flight = Some(self.dispatch(payload));
                    }
                    self.publish();
                }
            }
        }

        // Teardown: discard the in-flight save and with it any retry.
        if let Some(flight) = flight {
            flight.abort();
        }
    }

    /// Fetch the remote rectangle once and adopt it. On failure the
    /// session keeps the in-memory default and surfaces a load error.
    async fn load_initial(&mut self) {
        match self.store.fetch_size_location().await {
            Ok(remote) => {
                self.core.set_rect(Rect::from(remote));
                self.register.adopt(remote);
            }
            Err(_) => self.error = Some(DrawerError::Load),
        }
        self.publish();
    }

    /// Feed one command to the engine; returns a payload to dispatch when
    /// a finished gesture's commit warrants a network call.
    fn apply(&mut self, command: Command) -> Option<SizeLocation> {
        let action = match command {
            Command::PointerDown { screen, handle } => self.core.on_pointer_down(screen, handle),
            Command::PointerMove { screen } => self.core.on_pointer_move(screen),
            Command::PointerUp => self.core.on_pointer_up(),
            Command::PointerLeave => self.core.on_pointer_leave(),
            Command::SetTransform(transform) => {
                self.core.set_transform(transform);
                Action::None
            }
            Command::ClearTransform => {
                self.core.clear_transform();
                Action::None
            }
            Command::SetRect(rect) => {
                self.core.set_rect(rect);
                Action::CommitRequested(rect)
            }
        };
        let dispatch = match action {
            Action::None | Action::RectChanged => None,
            Action::CommitRequested(rect) => {
                let sanitized = SizeLocation::from(rect.sanitize(self.core.min_size()));
                self.register.request(sanitized)
            }
        };
        self.publish();
        dispatch
    }

    /// Record a completed save. The local rectangle is kept as-is even on
    /// failure (no snap-back); acknowledgement only advances on success,
    /// so the next gesture retries whatever the user settles on.
    fn finish(&mut self, outcome: Result<(), StoreError>) -> Option<SizeLocation> {
        let ok = outcome.is_ok();
        match outcome {
            Ok(()) => self.error = None,
            Err(StoreError::Validation { message }) => {
                self.error = Some(DrawerError::Validation(message));
            }
            Err(err) => self.error = Some(DrawerError::Transport(err.to_string())),
        }
        self.register.complete(ok)
    }

    fn dispatch(&self, payload: SizeLocation) -> Flight {
        let store = Arc::clone(&self.store);
        tokio::spawn(async move { store.persist_size_location(payload).await })
    }

    fn publish(&self) {
        let next = DrawerStatus {
            rect: self.core.rect(),
            syncing: self.register.is_in_flight(),
            error: self.error.clone(),
        };
        self.status.send_if_modified(|current| {
            if *current == next {
                false
            } else {
                *current = next;
                true
            }
        });
    }
}
