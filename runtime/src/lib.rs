//! # Shopgrid Runtime
//!
//! The [`Store`] drives a reducer at runtime: it owns the state, serializes
//! reducer passes, and interprets the [`Effect`] values reducers return.
//!
//! Every effect runs in its own spawned task. When an effect settles with an
//! action, that action is broadcast to observers and then fed back through
//! the reducer, which is how fetch completions reach the state. Completion
//! of the effects started by one `send` is trackable through the returned
//! [`EffectHandle`].
//!
//! ## Example
//!
//! ```ignore
//! use shopgrid_runtime::Store;
//!
//! let store = Store::new(initial_state, reducer, environment);
//!
//! // Dispatch an event
//! store.send(Action::Started).await?;
//!
//! // Read a slice of state
//! let page = store.state(|s| s.pagination.current_page).await;
//! ```

use shopgrid_core::{effect::Effect, reducer::Reducer};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::{RwLock, broadcast, watch};

/// Error types for the Store runtime
pub mod error {
    use thiserror::Error;

    /// Ways a Store operation can fail
    #[derive(Error, Debug)]
    pub enum StoreError {
        /// The store has begun shutting down and rejects new actions
        #[error("Store is shutting down")]
        ShutdownInProgress,

        /// In-flight effects outlived the shutdown deadline
        #[error("Shutdown timed out with {0} effects still running")]
        ShutdownTimeout(usize),

        /// `send_and_wait_for` gave up before a matching action appeared
        #[error("Timeout waiting for action")]
        Timeout,

        /// The action broadcast closed while an observer was waiting
        #[error("Action broadcast channel closed")]
        ChannelClosed,
    }
}

pub use error::StoreError;

/// Tracks the effects started by one `send`.
///
/// [`Store::send`] returns as soon as effect execution has started; await
/// the handle when a test or caller needs those effects settled first.
///
/// # Example
///
/// ```ignore
/// let mut handle = store.send(Action::Started).await?;
/// handle.wait_with_timeout(Duration::from_secs(5)).await?;
/// // every effect of Action::Started has now settled
/// ```
#[derive(Clone)]
pub struct EffectHandle {
    pending: Arc<AtomicUsize>,
    completion: watch::Receiver<()>,
}

impl EffectHandle {
    fn new() -> (Self, EffectTracking) {
        let counter = Arc::new(AtomicUsize::new(0));
        let (notifier, completion) = watch::channel(());

        let handle = Self {
            pending: Arc::clone(&counter),
            completion,
        };

        (handle, EffectTracking { counter, notifier })
    }

    /// A handle with nothing left to wait for
    ///
    /// Useful as the seed value in loops that keep a `last_handle`.
    #[must_use]
    pub fn completed() -> Self {
        let (notifier, completion) = watch::channel(());
        let _ = notifier.send(());

        Self {
            pending: Arc::new(AtomicUsize::new(0)),
            completion,
        }
    }

    /// Block until every tracked effect has settled
    pub async fn wait(&mut self) {
        while self.pending.load(Ordering::SeqCst) > 0 {
            let _ = self.completion.changed().await;
        }
    }

    /// [`EffectHandle::wait`] with a deadline
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Timeout`] when effects are still pending at the
    /// deadline.
    pub async fn wait_with_timeout(&mut self, timeout: Duration) -> Result<(), StoreError> {
        tokio::time::timeout(timeout, self.wait())
            .await
            .map_err(|_| StoreError::Timeout)
    }
}

impl std::fmt::Debug for EffectHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EffectHandle")
            .field("pending_effects", &self.pending.load(Ordering::SeqCst))
            .finish_non_exhaustive()
    }
}

/// Counter/notifier pair shared between a handle and its effect tasks
#[derive(Clone)]
struct EffectTracking {
    counter: Arc<AtomicUsize>,
    notifier: watch::Sender<()>,
}

impl EffectTracking {
    fn increment(&self) {
        self.counter.fetch_add(1, Ordering::SeqCst);
    }

    fn decrement(&self) {
        if self.counter.fetch_sub(1, Ordering::SeqCst) == 1 {
            let _ = self.notifier.send(());
        }
    }
}

/// Decrements handle tracking on drop, so a panicking effect task still
/// counts as settled
struct DecrementGuard(EffectTracking);

impl Drop for DecrementGuard {
    fn drop(&mut self) {
        self.0.decrement();
    }
}

/// Decrements the store-wide pending counter on drop (shutdown accounting)
struct PendingGuard(Arc<AtomicUsize>);

impl Drop for PendingGuard {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Runtime coordinator for a reducer.
///
/// Owns the state behind an `RwLock`, the reducer, and the injected
/// environment; interprets effects and routes their feedback actions back
/// through `send`.
///
/// # Type Parameters
///
/// - `S`: state type
/// - `A`: action type
/// - `E`: environment type
/// - `R`: reducer implementation
///
/// # Concurrency
///
/// A reducer pass runs under the state write lock, so concurrent `send`
/// calls serialize there. Effect tasks overlap freely and settle in any
/// order; a reducer that cares about response ordering stamps a token into
/// its feedback actions and checks it on the way back in.
pub struct Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E>,
{
    state: Arc<RwLock<S>>,
    reducer: R,
    environment: E,
    shutdown: Arc<AtomicBool>,
    pending_effects: Arc<AtomicUsize>,
    /// Every action an effect feeds back goes out here before it is reduced.
    ///
    /// Observers use this to wait for fetch completion or to watch the
    /// event flow.
    action_broadcast: broadcast::Sender<A>,
}

impl<S, A, E, R> Clone for Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E> + Clone,
    E: Clone,
{
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            reducer: self.reducer.clone(),
            environment: self.environment.clone(),
            shutdown: Arc::clone(&self.shutdown),
            pending_effects: Arc::clone(&self.pending_effects),
            action_broadcast: self.action_broadcast.clone(),
        }
    }
}

impl<S, A, E, R> Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E> + Clone + Send + Sync + 'static,
    A: Send + Clone + 'static,
    S: Send + Sync + 'static,
    E: Clone + Send + Sync + 'static,
{
    /// Build a store from initial state, reducer, and environment
    ///
    /// Action broadcast capacity defaults to 16; use
    /// [`Store::with_broadcast_capacity`] when many slow observers are
    /// expected.
    #[must_use]
    pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
        Self::with_broadcast_capacity(initial_state, reducer, environment, 16)
    }

    /// Build a store with an explicit action broadcast capacity
    #[must_use]
    pub fn with_broadcast_capacity(
        initial_state: S,
        reducer: R,
        environment: E,
        capacity: usize,
    ) -> Self {
        let (action_broadcast, _) = broadcast::channel(capacity);

        Self {
            state: Arc::new(RwLock::new(initial_state)),
            reducer,
            environment,
            shutdown: Arc::new(AtomicBool::new(false)),
            pending_effects: Arc::new(AtomicUsize::new(0)),
            action_broadcast,
        }
    }

    /// Dispatch an action.
    ///
    /// Runs one reducer pass under the write lock, then starts executing the
    /// returned effects. `send` does not wait for the effects themselves;
    /// the returned [`EffectHandle`] does.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ShutdownInProgress`] once shutdown has begun.
    #[tracing::instrument(skip(self, action), name = "store_send")]
    pub async fn send(&self, action: A) -> Result<EffectHandle, StoreError> {
        if self.shutdown.load(Ordering::Acquire) {
            tracing::warn!("dropping action, store is shutting down");
            return Err(StoreError::ShutdownInProgress);
        }

        tracing::debug!("reducing action");
        metrics::counter!("store.actions.total").increment(1);

        let (handle, tracking) = EffectHandle::new();

        let effects = {
            let mut state = self.state.write().await;

            let started = std::time::Instant::now();
            let effects = self.reducer.reduce(&mut state, action, &self.environment);
            metrics::histogram!("store.reducer.duration_seconds")
                .record(started.elapsed().as_secs_f64());

            tracing::trace!(count = effects.len(), "reducer returned effects");
            effects
        };

        for effect in effects {
            self.execute_effect(effect, tracking.clone());
        }

        Ok(handle)
    }

    /// Dispatch an action and wait for a matching feedback action.
    ///
    /// The request/response shape: the subscription opens *before* the send
    /// so the feedback cannot slip past, then the first effect-produced
    /// action matching the predicate is returned.
    ///
    /// # Errors
    ///
    /// - [`StoreError::Timeout`]: nothing matched within `timeout`
    /// - [`StoreError::ChannelClosed`]: broadcast closed while waiting
    /// - [`StoreError::ShutdownInProgress`]: store is shutting down
    pub async fn send_and_wait_for<F>(
        &self,
        action: A,
        predicate: F,
        timeout: Duration,
    ) -> Result<A, StoreError>
    where
        F: Fn(&A) -> bool,
    {
        let mut rx = self.action_broadcast.subscribe();

        self.send(action).await?;

        tokio::time::timeout(timeout, async {
            loop {
                match rx.recv().await {
                    Ok(action) if predicate(&action) => return Ok(action),
                    Ok(_) => {},
                    Err(broadcast::error::RecvError::Lagged(skipped)) => {
                        tracing::warn!(skipped, "action observer fell behind");
                    },
                    Err(broadcast::error::RecvError::Closed) => {
                        return Err(StoreError::ChannelClosed);
                    },
                }
            }
        })
        .await
        .map_err(|_| StoreError::Timeout)?
    }

    /// Observe every action that effects feed back.
    ///
    /// Actions passed directly to [`Store::send`] are not broadcast, only
    /// effect output.
    #[must_use]
    pub fn subscribe_actions(&self) -> broadcast::Receiver<A> {
        self.action_broadcast.subscribe()
    }

    /// Read state through a closure.
    ///
    /// The read lock is held only for the closure:
    ///
    /// ```ignore
    /// let shop_count = store.state(|s| s.fetch.shops.len()).await;
    /// ```
    pub async fn state<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&S) -> T,
    {
        let state = self.state.read().await;
        f(&state)
    }

    /// Shut down gracefully: stop accepting actions, drain in-flight
    /// effects.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ShutdownTimeout`] when effects are still
    /// running at the deadline.
    pub async fn shutdown(&self, timeout: Duration) -> Result<(), StoreError> {
        tracing::info!("store shutdown requested");
        self.shutdown.store(true, Ordering::Release);

        let deadline = std::time::Instant::now() + timeout;
        loop {
            let pending = self.pending_effects.load(Ordering::Acquire);

            if pending == 0 {
                tracing::info!("store drained, shutdown complete");
                return Ok(());
            }

            if std::time::Instant::now() >= deadline {
                tracing::error!(pending, "shutdown deadline passed with effects in flight");
                return Err(StoreError::ShutdownTimeout(pending));
            }

            tokio::time::sleep(Duration::from_millis(100)).await;
        }
    }

    /// Spawn one effect task with handle and shutdown accounting attached.
    ///
    /// Both counters are released by guards, so the accounting survives a
    /// panicking task body.
    fn spawn_tracked<Fut>(&self, tracking: EffectTracking, task: impl FnOnce(Self) -> Fut)
    where
        Fut: std::future::Future<Output = ()> + Send + 'static,
    {
        tracking.increment();
        self.pending_effects.fetch_add(1, Ordering::SeqCst);
        let pending_guard = PendingGuard(Arc::clone(&self.pending_effects));

        let fut = task(self.clone());
        tokio::spawn(async move {
            let _guard = DecrementGuard(tracking);
            let _pending_guard = pending_guard;
            fut.await;
        });
    }

    /// Broadcast a fed-back action and run it through the reducer
    async fn feed_back(&self, action: A) {
        let _ = self.action_broadcast.send(action.clone());
        let _ = self.send(action).await;
    }

    /// Interpret one effect value.
    ///
    /// A `Future` that resolves to `None` simply produces no feedback; no
    /// effect outcome can halt the store.
    fn execute_effect(&self, effect: Effect<A>, tracking: EffectTracking) {
        match effect {
            Effect::None => {
                metrics::counter!("store.effects.executed", "kind" => "none").increment(1);
            },
            Effect::Future(fut) => {
                metrics::counter!("store.effects.executed", "kind" => "future").increment(1);
                self.spawn_tracked(tracking, |store| async move {
                    if let Some(action) = fut.await {
                        tracing::trace!("effect settled with a feedback action");
                        store.feed_back(action).await;
                    } else {
                        tracing::trace!("effect settled with no action");
                    }
                });
            },
            Effect::Delay { duration, action } => {
                metrics::counter!("store.effects.executed", "kind" => "delay").increment(1);
                self.spawn_tracked(tracking, |store| async move {
                    tokio::time::sleep(duration).await;
                    store.feed_back(*action).await;
                });
            },
            Effect::Parallel(effects) => {
                metrics::counter!("store.effects.executed", "kind" => "parallel").increment(1);
                for effect in effects {
                    self.execute_effect(effect, tracking.clone());
                }
            },
            Effect::Sequential(effects) => {
                metrics::counter!("store.effects.executed", "kind" => "sequential").increment(1);
                self.spawn_tracked(tracking, |store| async move {
                    for effect in effects {
                        // Each step gets its own tracking pair; the loop
                        // holds at the watch until the step has settled
                        let (notifier, mut settled) = watch::channel(());
                        let step_tracking = EffectTracking {
                            counter: Arc::new(AtomicUsize::new(0)),
                            notifier,
                        };

                        store.execute_effect(effect, step_tracking.clone());

                        if step_tracking.counter.load(Ordering::SeqCst) > 0 {
                            let _ = settled.changed().await;
                        }
                    }
                });
            },
        }
    }
}
