use std::{
    cell::RefCell,
    rc::{Rc, Weak},
    time::Duration,
};

use log::{debug, warn};

use super::{BackgroundConfig, CancelToken, EffectError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Active,
    Failed,
    Destroyed,
}

impl Phase {
    /// The static gradient stays up until the animation is actually running.
    pub fn shows_fallback(self) -> bool {
        self != Phase::Active
    }
}

/// Deferred execution on the host event loop.
pub trait Scheduler {
    /// A pending task. Dropping it cancels the task if it hasn't run yet.
    type Timer;

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Self::Timer;
}

/// A running animation instance bound to a mount target.
pub trait EffectHandle {
    fn resize(&mut self) -> Result<(), EffectError>;
    fn destroy(&mut self) -> Result<(), EffectError>;
}

pub type LoadCallback<T> = Box<dyn FnOnce(Result<T, EffectError>)>;

/// Loads the effect libraries and builds handles from them.
///
/// `Library` carries everything construction needs, the rendering runtime
/// included, so nothing is registered globally between the two steps.
pub trait EffectLoader {
    type Library;
    type Target;
    type Handle: EffectHandle;

    /// Starts loading; `done` runs once the libraries are available or failed.
    fn load(&self, done: LoadCallback<Self::Library>);

    fn construct(
        &self,
        library: Self::Library,
        target: &Self::Target,
    ) -> Result<Self::Handle, EffectError>;
}

struct State<L: EffectLoader, S: Scheduler> {
    phase: Phase,
    token: Option<CancelToken>,
    target: Option<L::Target>,
    handle: Option<L::Handle>,
    // A fired timer stays in its slot until it is replaced or cleared.
    settle: Option<S::Timer>,
    deadline: Option<S::Timer>,
    reveal: Option<S::Timer>,
    debounce: Option<S::Timer>,
}

impl<L: EffectLoader, S: Scheduler> State<L, S> {
    fn new() -> Self {
        Self {
            phase: Phase::Idle,
            token: None,
            target: None,
            handle: None,
            settle: None,
            deadline: None,
            reveal: None,
            debounce: None,
        }
    }

    fn clear_timers(&mut self) {
        self.settle = None;
        self.deadline = None;
        self.reveal = None;
        self.debounce = None;
    }
}

struct Shared<L: EffectLoader, S: Scheduler> {
    loader: L,
    scheduler: S,
    config: BackgroundConfig,
    state: RefCell<State<L, S>>,
    observer: RefCell<Option<Box<dyn Fn(Phase)>>>,
}

/// Owns the background effect from mount to teardown.
///
/// Idle -> (settle delay) -> Loading -> (construct, reveal delay) -> Active,
/// or Failed on any load or construction error. Unmount moves every phase to
/// Destroyed. At most one handle is ever constructed, and it is destroyed at
/// most once. Failures are logged and otherwise swallowed.
pub struct EffectLifecycle<L: EffectLoader, S: Scheduler> {
    shared: Rc<Shared<L, S>>,
}

impl<L: EffectLoader, S: Scheduler> Clone for EffectLifecycle<L, S> {
    fn clone(&self) -> Self {
        Self {
            shared: Rc::clone(&self.shared),
        }
    }
}

impl<L, S> EffectLifecycle<L, S>
where
    L: EffectLoader + 'static,
    S: Scheduler + 'static,
{
    pub fn new(loader: L, scheduler: S, config: BackgroundConfig) -> Self {
        Self {
            shared: Rc::new(Shared {
                loader,
                scheduler,
                config,
                state: RefCell::new(State::new()),
                observer: RefCell::new(None),
            }),
        }
    }

    pub fn phase(&self) -> Phase {
        self.shared.state.borrow().phase
    }

    pub fn shows_fallback(&self) -> bool {
        self.phase().shows_fallback()
    }

    /// Registers the callback run after every phase transition.
    pub fn on_phase_change(&self, observer: impl Fn(Phase) + 'static) {
        *self.shared.observer.borrow_mut() = Some(Box::new(observer));
    }

    /// Schedules loading against `target` once the settle delay has passed.
    ///
    /// Only the first call does anything.
    pub fn mount(&self, target: L::Target) {
        let shared = &self.shared;
        let mut state = shared.state.borrow_mut();
        if state.phase != Phase::Idle || state.token.is_some() {
            debug!("background effect already mounted ({:?})", state.phase);
            return;
        }
        let token = CancelToken::new();
        state.token = Some(token.clone());
        state.target = Some(target);
        state.settle = Some(shared.schedule(shared.config.settle_delay(), move |shared| {
            shared.begin_load(token)
        }));
    }

    /// Debounces a viewport resize into a single `resize` on the active handle.
    pub fn handle_resize(&self) {
        let shared = &self.shared;
        let mut state = shared.state.borrow_mut();
        if state.phase != Phase::Active {
            return;
        }
        state.debounce = Some(
            shared.schedule(shared.config.resize_debounce(), |shared| {
                shared.flush_resize()
            }),
        );
    }

    /// Cancels pending work and releases the handle. Repeated calls are no-ops.
    pub fn unmount(&self) {
        let handle = {
            let mut state = self.shared.state.borrow_mut();
            if state.phase == Phase::Destroyed {
                return;
            }
            if let Some(token) = state.token.take() {
                token.cancel();
            }
            state.clear_timers();
            state.target = None;
            state.phase = Phase::Destroyed;
            state.handle.take()
        };
        if let Some(handle) = handle {
            release(handle);
        }
        self.shared.notify(Phase::Destroyed);
    }
}

impl<L, S> Shared<L, S>
where
    L: EffectLoader + 'static,
    S: Scheduler + 'static,
{
    fn schedule(
        self: &Rc<Self>,
        delay: Duration,
        task: impl FnOnce(&Rc<Self>) + 'static,
    ) -> S::Timer {
        let weak: Weak<Self> = Rc::downgrade(self);
        self.scheduler.schedule(
            delay,
            Box::new(move || {
                if let Some(shared) = weak.upgrade() {
                    task(&shared);
                }
            }),
        )
    }

    fn notify(&self, phase: Phase) {
        if let Some(observer) = self.observer.borrow().as_ref() {
            observer(phase);
        }
    }

    fn begin_load(self: &Rc<Self>, token: CancelToken) {
        if token.is_cancelled() {
            return;
        }
        {
            let mut state = self.state.borrow_mut();
            if state.phase != Phase::Idle {
                return;
            }
            state.phase = Phase::Loading;
            if let Some(limit) = self.config.load_timeout() {
                let token = token.clone();
                state.deadline =
                    Some(self.schedule(limit, move |shared| shared.expire(&token, limit)));
            }
        }
        self.notify(Phase::Loading);
        if token.is_cancelled() {
            return;
        }

        debug!("loading background effect");
        let weak = Rc::downgrade(self);
        self.loader.load(Box::new(move |result: Result<L::Library, EffectError>| {
            if let Some(shared) = weak.upgrade() {
                shared.finish_load(&token, result);
            }
        }));
    }

    fn finish_load(self: &Rc<Self>, token: &CancelToken, result: Result<L::Library, EffectError>) {
        if token.is_cancelled() {
            debug!("discarding background effect loaded after unmount");
            return;
        }
        let target = {
            let mut state = self.state.borrow_mut();
            if state.phase != Phase::Loading || state.handle.is_some() {
                debug!("discarding background effect loaded while {:?}", state.phase);
                return;
            }
            state.deadline = None;
            state.target.take()
        };

        let library = match result {
            Ok(library) => library,
            Err(err) => return self.fail(err),
        };
        let Some(target) = target else {
            return self.fail(EffectError::Construct("mount target is gone".to_string()));
        };
        let handle = match self.loader.construct(library, &target) {
            Ok(handle) => handle,
            Err(err) => return self.fail(err),
        };

        let mut state = self.state.borrow_mut();
        state.handle = Some(handle);
        let token = token.clone();
        state.reveal = Some(self.schedule(self.config.reveal_delay(), move |shared| {
            shared.reveal(&token)
        }));
    }

    fn reveal(&self, token: &CancelToken) {
        if token.is_cancelled() {
            return;
        }
        {
            let mut state = self.state.borrow_mut();
            if state.phase != Phase::Loading || state.handle.is_none() {
                return;
            }
            state.phase = Phase::Active;
        }
        debug!("background effect active");
        self.notify(Phase::Active);
    }

    fn expire(&self, token: &CancelToken, limit: Duration) {
        if token.is_cancelled() {
            return;
        }
        {
            let state = self.state.borrow();
            if state.phase != Phase::Loading || state.handle.is_some() {
                return;
            }
        }
        self.fail(EffectError::Timeout(limit));
    }

    fn fail(&self, err: EffectError) {
        warn!("background effect unavailable, keeping fallback: {err}");
        self.state.borrow_mut().phase = Phase::Failed;
        self.notify(Phase::Failed);
    }

    fn flush_resize(&self) {
        let mut state = self.state.borrow_mut();
        if state.phase != Phase::Active {
            return;
        }
        if let Some(handle) = state.handle.as_mut() {
            if let Err(err) = handle.resize() {
                warn!("{err}");
            }
        }
    }
}

impl<L: EffectLoader, S: Scheduler> Drop for Shared<L, S> {
    fn drop(&mut self) {
        let state = self.state.get_mut();
        if let Some(token) = state.token.take() {
            token.cancel();
        }
        if let Some(handle) = state.handle.take() {
            release(handle);
        }
    }
}

fn release<H: EffectHandle>(mut handle: H) {
    if let Err(err) = handle.destroy() {
        warn!("{err}");
    }
}
