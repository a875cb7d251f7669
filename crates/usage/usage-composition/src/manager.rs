//! PageCompositionManager: registry plus a trailing-edge debounce.
//!
//! Every mutation marks the registry dirty and re-arms a single timer. When
//! the timer survives a full quiet window, one `CompositionChange` reflecting
//! the final state is handed to the change handler. Each re-arm bumps a
//! generation counter, and a timer only emits if its generation is still
//! current.

use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use chrono::Utc;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use usage_core::config::CompositionConfig;
use usage_core::models::{
    ChangeType, CompositionChange, CompositionStatus, PageComposition, ProjectContext, Props,
};
use usage_core::traits::ICompositionHandler;
use usage_observability::tracing_setup::events;
use usage_props::PropsSanitizer;

use crate::fingerprint::{composition_hash, page_fingerprint};
use crate::registry::CompositionRegistry;

struct ManagerState {
    context: ProjectContext,
    page_fingerprint: String,
    registry: CompositionRegistry,
    dirty: bool,
    generation: u64,
    pending: Option<JoinHandle<()>>,
    handler: Option<Arc<dyn ICompositionHandler>>,
    last_emitted_hash: Option<String>,
}

impl ManagerState {
    fn composition(&self) -> PageComposition {
        let components = self.registry.summaries();
        let composition_hash = composition_hash(&components);
        PageComposition {
            page_fingerprint: self.page_fingerprint.clone(),
            components,
            composition_hash,
            last_updated: Utc::now(),
        }
    }

    fn cancel_pending(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
    }
}

/// Page-scoped composition tracker. Construct one per page and share it
/// with the call sites that mount components.
#[derive(Clone)]
pub struct PageCompositionManager {
    inner: Arc<Mutex<ManagerState>>,
    sanitizer: PropsSanitizer,
    debounce: Duration,
    suppress_unchanged: bool,
}

impl PageCompositionManager {
    pub fn new(context: ProjectContext, config: &CompositionConfig) -> Self {
        Self::with_sanitizer(context, config, PropsSanitizer::new())
    }

    pub fn with_sanitizer(
        context: ProjectContext,
        config: &CompositionConfig,
        sanitizer: PropsSanitizer,
    ) -> Self {
        let state = ManagerState {
            page_fingerprint: page_fingerprint(&context),
            context,
            registry: CompositionRegistry::new(),
            dirty: false,
            generation: 0,
            pending: None,
            handler: None,
            last_emitted_hash: None,
        };
        Self {
            inner: Arc::new(Mutex::new(state)),
            sanitizer,
            debounce: config.debounce(),
            suppress_unchanged: config.suppress_unchanged,
        }
    }

    fn lock(&self) -> MutexGuard<'_, ManagerState> {
        lock_state(&self.inner)
    }

    pub fn context(&self) -> ProjectContext {
        self.lock().context.clone()
    }

    /// Register one mounted instance. Returns the props signature.
    pub fn register_component(&self, name: &str, props: &Props) -> String {
        let (safe, signature) = self.sanitizer.sign(props, name);
        let mut state = self.lock();
        state.registry.register(name, &signature, safe);
        state.dirty = true;
        self.arm(&mut state);
        signature
    }

    /// Drop one instance. Returns `false` (and arms nothing) when the pair
    /// was never registered.
    pub fn unregister_component(&self, name: &str, props: &Props) -> bool {
        let (_, signature) = self.sanitizer.sign(props, name);
        let mut state = self.lock();
        if state.registry.unregister(name, &signature).is_none() {
            tracing::debug!(component = %name, signature = %signature, "unregister of unknown pair ignored");
            return false;
        }
        state.dirty = true;
        self.arm(&mut state);
        true
    }

    /// Move one instance from its old props signature to the new one.
    /// Returns the new signature.
    pub fn reregister_component(&self, name: &str, old_props: &Props, new_props: &Props) -> String {
        let (_, old_signature) = self.sanitizer.sign(old_props, name);
        let (safe, new_signature) = self.sanitizer.sign(new_props, name);
        if old_signature == new_signature {
            return new_signature;
        }
        let mut state = self.lock();
        state.registry.unregister(name, &old_signature);
        state.registry.register(name, &new_signature, safe);
        state.dirty = true;
        self.arm(&mut state);
        new_signature
    }

    /// Replace the change handler. There is at most one consumer.
    pub fn set_composition_change_handler(&self, handler: Arc<dyn ICompositionHandler>) {
        self.lock().handler = Some(handler);
    }

    pub fn clear_composition_change_handler(&self) {
        self.lock().handler = None;
    }

    /// Current composition, derived from the live registry.
    pub fn composition(&self) -> PageComposition {
        self.lock().composition()
    }

    pub fn get_status(&self) -> CompositionStatus {
        let state = self.lock();
        let composition = state.composition();
        CompositionStatus {
            page_fingerprint: state.page_fingerprint.clone(),
            page_route: state.context.page_route.clone(),
            entry_count: state.registry.entry_count(),
            total_instances: state.registry.total_instances(),
            dirty: state.dirty,
            pending_flush: state.pending.as_ref().is_some_and(|p| !p.is_finished()),
            composition_hash: composition.composition_hash,
            last_emitted_hash: state.last_emitted_hash.clone(),
            components: composition.components,
        }
    }

    /// Emit any pending change now and cancel the timer.
    ///
    /// Returns the delivered change, or `None` when nothing was pending or
    /// the change was suppressed as unchanged. With `suppress_unchanged` set,
    /// a window whose final state equals the last emitted one emits nothing,
    /// and so does mount-then-unmount before the first emission.
    pub fn flush(&self) -> Option<CompositionChange> {
        {
            let mut state = self.lock();
            state.cancel_pending();
        }
        emit_pending(&self.inner, None, self.suppress_unchanged)
    }

    /// Switch to a new page. Pending changes for the old page are flushed
    /// first, then the registry starts empty under the new fingerprint.
    pub fn navigate(&self, context: ProjectContext) {
        self.flush();
        let mut state = self.lock();
        state.cancel_pending();
        state.generation = state.generation.wrapping_add(1);
        state.registry.clear();
        state.dirty = false;
        state.last_emitted_hash = None;
        state.page_fingerprint = page_fingerprint(&context);
        tracing::debug!(
            route = %context.page_route,
            page_fingerprint = %state.page_fingerprint,
            "composition reset for navigation"
        );
        state.context = context;
    }

    fn arm(&self, state: &mut ManagerState) {
        state.generation = state.generation.wrapping_add(1);
        state.cancel_pending();

        let Ok(runtime) = Handle::try_current() else {
            tracing::debug!("no async runtime, composition change waits for flush()");
            return;
        };

        let inner = Arc::clone(&self.inner);
        let generation = state.generation;
        let window = self.debounce;
        let suppress_unchanged = self.suppress_unchanged;
        state.pending = Some(runtime.spawn(async move {
            tokio::time::sleep(window).await;
            emit_pending(&inner, Some(generation), suppress_unchanged);
        }));
    }
}

impl std::fmt::Debug for PageCompositionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.lock();
        f.debug_struct("PageCompositionManager")
            .field("page_fingerprint", &state.page_fingerprint)
            .field("entries", &state.registry.entry_count())
            .field("dirty", &state.dirty)
            .field("debounce", &self.debounce)
            .finish()
    }
}

fn lock_state(inner: &Mutex<ManagerState>) -> MutexGuard<'_, ManagerState> {
    // A panicking handler runs outside the lock, so poisoning only follows a
    // bug inside the critical section. The state is still consistent.
    inner.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Build and deliver the change for the current state.
///
/// `generation` is `Some` when called from a timer; a stale timer returns
/// without touching anything. The handler runs after the lock is released
/// and a panic inside it is contained.
///
/// A window ends in at most one emission. It ends in none when the final
/// composition hash matches the last emitted one (with `suppress_unchanged`)
/// or when the page is still empty and nothing has been emitted yet.
fn emit_pending(
    inner: &Mutex<ManagerState>,
    generation: Option<u64>,
    suppress_unchanged: bool,
) -> Option<CompositionChange> {
    let (change, handler, fingerprint) = {
        let mut state = lock_state(inner);
        if generation.is_some_and(|g| g != state.generation) {
            return None;
        }
        if generation.is_some() {
            // The timer is this task; dropping the handle detaches it.
            state.pending = None;
        }
        if !state.dirty {
            return None;
        }
        state.dirty = false;

        let composition = state.composition();
        let change_type = match (&state.last_emitted_hash, composition.components.is_empty()) {
            // Mounted and unmounted before anything was reported.
            (None, true) => return None,
            (None, false) => ChangeType::Initial,
            (Some(_), true) => ChangeType::Cleared,
            (Some(_), false) => ChangeType::Updated,
        };
        if suppress_unchanged
            && state.last_emitted_hash.as_deref() == Some(composition.composition_hash.as_str())
        {
            tracing::debug!(
                page_fingerprint = %state.page_fingerprint,
                composition_hash = %composition.composition_hash,
                "composition unchanged since last emission"
            );
            return None;
        }
        state.last_emitted_hash = Some(composition.composition_hash.clone());

        let change = CompositionChange {
            change_type,
            page_composition: composition,
        };
        (change, state.handler.clone(), state.page_fingerprint.clone())
    };

    events::composition_changed(
        &fingerprint,
        &change.page_composition.composition_hash,
        change.page_composition.components.len(),
        change_type_label(change.change_type),
    );

    if let Some(handler) = handler {
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            handler.on_composition_changed(&change);
        }));
        if result.is_err() {
            events::handler_panicked(&fingerprint);
        }
    }

    Some(change)
}

fn change_type_label(change_type: ChangeType) -> &'static str {
    match change_type {
        ChangeType::Initial => "initial",
        ChangeType::Updated => "updated",
        ChangeType::Cleared => "cleared",
    }
}
