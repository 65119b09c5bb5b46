//! Deep link dispatch.
//!
//! [`DeepLinkManager`] is the one place that subscribes to the host's
//! "URL opened" events. Every incoming string is validated and the resulting
//! navigable [`DeepLinkData`] is handed to each registered handler.
//!
//! # Architecture
//!
//! - **Single-threaded**: state lives behind `Rc`/`RefCell`; the manager is
//!   `!Send` and is shared by cloning the handle.
//! - **Ordered**: URLs are processed in arrival order, and all handlers see
//!   one URL before the next is validated.
//! - **Isolated handlers**: an `Err` from one handler is logged and does not
//!   stop the others. On unwinding targets the same holds for a panic; where
//!   panics abort (`wasm32-unknown-unknown` by default) a panicking handler
//!   ends the program.
//! - **Generations**: every `start_listening` call and every `stop_listening`
//!   bumps a counter. Only the attempt holding the current generation may
//!   change the listening state, and callbacks from older subscriptions are
//!   ignored.

use std::any::Any;
use std::cell::{Cell, RefCell};
use std::future::Future;
use std::panic::{self, AssertUnwindSafe};
use std::rc::{Rc, Weak};

use crate::core::error::{DispatchError, HandlerError};
use crate::core::navigation::{Navigator, create_navigation_handler};
use crate::core::validator::{is_navigable, validate_deep_link_url};
use crate::models::DeepLinkData;

/// Callback notified with every validated deep link.
pub type DeepLinkHandler = Rc<dyn Fn(&DeepLinkData) -> Result<(), HandlerError>>;

/// Callback an event source invokes with one or more raw URLs.
pub type UrlCallback = Box<dyn Fn(Vec<String>)>;

// ============================================================================
// Event Source
// ============================================================================

/// Host mechanism that delivers URLs opened from outside the application.
pub trait UrlEventSource {
    /// Handle that keeps the subscription alive; dropping it unsubscribes.
    type Subscription: 'static;

    /// Register `on_urls`. May deliver URLs before resolving, e.g. the URL
    /// that launched the application.
    fn subscribe(
        &self,
        on_urls: UrlCallback,
    ) -> impl Future<Output = Result<Self::Subscription, DispatchError>>;
}

// ============================================================================
// Manager
// ============================================================================

/// Identifies a registered handler for later removal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HandlerId(u64);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum ListenState {
    #[default]
    Idle,
    /// Awaiting the event source's subscription.
    Starting,
    Listening,
}

#[derive(Default)]
struct ManagerState {
    handlers: RefCell<Vec<(HandlerId, DeepLinkHandler)>>,
    next_id: Cell<u64>,
    listen_state: Cell<ListenState>,
    generation: Cell<u64>,
    subscription: RefCell<Option<Box<dyn Any>>>,
}

/// Routes incoming deep links to registered handlers.
///
/// Cloning yields another handle to the same manager.
#[derive(Clone, Default)]
pub struct DeepLinkManager {
    inner: Rc<ManagerState>,
}

impl DeepLinkManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to `source`. Does nothing if already listening or starting.
    ///
    /// Returns [`DispatchError::Cancelled`] if `stop_listening` ran while the
    /// subscription was pending; the late subscription is dropped.
    pub async fn start_listening<S: UrlEventSource>(
        &self,
        source: &S,
    ) -> Result<(), DispatchError> {
        if self.inner.listen_state.get() != ListenState::Idle {
            log::debug!("deep link manager already listening");
            return Ok(());
        }
        let generation = self.bump_generation();
        self.inner.listen_state.set(ListenState::Starting);

        let weak = Rc::downgrade(&self.inner);
        let on_urls: UrlCallback =
            Box::new(move |urls: Vec<String>| Self::on_urls(&weak, generation, urls));

        let outcome = source.subscribe(on_urls).await;
        let current = self.inner.generation.get() == generation;

        match outcome {
            Ok(subscription) if current => {
                *self.inner.subscription.borrow_mut() = Some(Box::new(subscription));
                self.inner.listen_state.set(ListenState::Listening);
                log::debug!("deep link manager listening");
                Ok(())
            }
            Ok(subscription) => {
                drop(subscription);
                log::debug!("deep link subscription {} cancelled by stop_listening", generation);
                Err(DispatchError::Cancelled)
            }
            Err(err) => {
                if current {
                    self.inner.listen_state.set(ListenState::Idle);
                }
                log::error!("{}", err);
                Err(err)
            }
        }
    }

    fn bump_generation(&self) -> u64 {
        let generation = self.inner.generation.get() + 1;
        self.inner.generation.set(generation);
        generation
    }

    fn on_urls(weak: &Weak<ManagerState>, generation: u64, urls: Vec<String>) {
        let Some(inner) = weak.upgrade() else {
            return;
        };
        let manager = Self { inner };

        for url in urls {
            if manager.inner.generation.get() != generation
                || manager.inner.listen_state.get() == ListenState::Idle
            {
                break;
            }
            manager.handle_deep_link_url(&url);
        }
    }

    /// Stop processing future events and release the subscription.
    ///
    /// A URL already being handled is not interrupted. A `start_listening`
    /// call still awaiting its subscription is cancelled.
    pub fn stop_listening(&self) {
        self.bump_generation();
        self.inner.listen_state.set(ListenState::Idle);
        let subscription = self.inner.subscription.borrow_mut().take();
        drop(subscription);
    }

    pub fn is_listening(&self) -> bool {
        self.inner.listen_state.get() == ListenState::Listening
    }

    /// Validate `url` and notify every handler with the navigable result.
    pub fn handle_deep_link_url(&self, url: &str) -> DeepLinkData {
        let result = validate_deep_link_url(url);

        if !result.valid {
            log::warn!("invalid deep link: {}", result.diagnostics_json());
        } else if !result.warnings.is_empty() {
            log::info!("deep link accepted with warnings: {}", result.diagnostics_json());
        } else {
            log::debug!("deep link accepted: {}", url);
        }

        let data = if is_navigable(&result.data) {
            result.data
        } else {
            log::error!("validator returned a non-navigable route for {}", url);
            DeepLinkData::fallback(url)
        };

        self.notify(&data);
        data
    }

    fn notify(&self, data: &DeepLinkData) {
        // snapshot so handlers may register or remove handlers
        // catch_unwind only helps where panics unwind
        let handlers = self.inner.handlers.borrow().clone();

        for (id, handler) in handlers {
            match panic::catch_unwind(AssertUnwindSafe(|| handler(data))) {
                Ok(Ok(())) => {}
                Ok(Err(err)) => log::error!("deep link handler {:?} failed: {}", id, err),
                Err(_) => log::error!("deep link handler {:?} panicked", id),
            }
        }
    }

    /// Register a handler. The same handler may be registered more than once
    /// and is then notified once per registration.
    pub fn add_handler(&self, handler: DeepLinkHandler) -> HandlerId {
        let id = HandlerId(self.inner.next_id.get());
        self.inner.next_id.set(id.0 + 1);
        self.inner.handlers.borrow_mut().push((id, handler));
        log::debug!("registered deep link handler {:?}", id);
        id
    }

    /// Remove a handler; returns whether it was registered.
    pub fn remove_handler(&self, id: HandlerId) -> bool {
        let mut handlers = self.inner.handlers.borrow_mut();
        let before = handlers.len();
        handlers.retain(|(existing, _)| *existing != id);
        handlers.len() != before
    }

    pub fn clear_handlers(&self) {
        self.inner.handlers.borrow_mut().clear();
    }

    pub fn handler_count(&self) -> usize {
        self.inner.handlers.borrow().len()
    }
}

/// Create a manager that drives `navigator` and start listening on `source`.
pub async fn initialize_deep_linking<S, N>(
    source: &S,
    navigator: Rc<N>,
) -> Result<DeepLinkManager, DispatchError>
where
    S: UrlEventSource,
    N: Navigator + 'static,
{
    let manager = DeepLinkManager::new();
    manager.add_handler(create_navigation_handler(navigator));
    manager.start_listening(source).await?;
    Ok(manager)
}

// ============================================================================
// Tests
// ============================================================================
