use std::sync::{Arc, Condvar, Mutex, MutexGuard};
use std::thread;
use std::time::{Duration, Instant};

use beckon_core::catalog::CommandCatalog;
use beckon_core::config::LifecycleConfig;
use beckon_core::errors::{BeckonError, BeckonResult, NluError};
use beckon_core::models::{LifecycleState, MemoryStatus};
use beckon_core::traits::{IContextAnnotator, ITextEncoder};
use chrono::{DateTime, Utc};
use moka::sync::Cache;
use tracing::{debug, info, warn};

use crate::annotate::TemplateAnnotator;
use crate::encoders::HashedTfIdfEncoder;
use crate::semantic::{EmbeddingIndex, SemanticMatch};

/// Query-embedding cache capacity per load cycle.
const QUERY_CACHE_CAPACITY: u64 = 256;

/// The models one load cycle produces.
pub struct LoadedModels {
    pub encoder: Box<dyn ITextEncoder>,
    /// Optional secondary model for display-only context strings.
    pub annotator: Option<Box<dyn IContextAnnotator>>,
}

/// Constructs the language-understanding models.
///
/// The seam that keeps model acquisition (file loading, downloads,
/// inference runtimes) out of the lifecycle logic.
pub trait IModelFactory: Send + Sync {
    fn build(&self) -> BeckonResult<LoadedModels>;
}

/// Factory for the built-in hashed TF-IDF encoder plus template annotator.
pub struct BuiltinModelFactory {
    dimensions: usize,
}

impl BuiltinModelFactory {
    pub fn new(dimensions: usize) -> Self {
        Self { dimensions }
    }
}

impl IModelFactory for BuiltinModelFactory {
    fn build(&self) -> BeckonResult<LoadedModels> {
        Ok(LoadedModels {
            encoder: Box::new(HashedTfIdfEncoder::new(self.dimensions)),
            annotator: Some(Box::new(TemplateAnnotator)),
        })
    }
}

/// Everything that exists only while `Loaded`. Dropping this is the
/// "release model references and reclaim memory" step.
struct LoadedState {
    encoder: Box<dyn ITextEncoder>,
    annotator: Option<Box<dyn IContextAnnotator>>,
    index: EmbeddingIndex,
    /// Per-load-cycle cache of query embeddings; cleared on unload.
    query_cache: Cache<String, Vec<f32>>,
}

struct Inner {
    state: LifecycleState,
    loaded: Option<LoadedState>,
    usage_count: u64,
    last_used: Option<DateTime<Utc>>,
    /// Monotonic clock for the idle check.
    last_used_at: Option<Instant>,
}

impl Inner {
    fn touch(&mut self) {
        self.last_used = Some(Utc::now());
        self.last_used_at = Some(Instant::now());
    }
}

/// Owns the semantic models and the embedding index, tracks usage, and
/// unloads after an idle timeout to bound idle memory use.
///
/// One instance per interpreter — no hidden globals; components that need
/// semantic resolution hold a reference to this manager.
pub struct LifecycleManager {
    catalog: CommandCatalog,
    factory: Box<dyn IModelFactory>,
    config: LifecycleConfig,
    inner: Mutex<Inner>,
    /// Signalled whenever a load attempt finishes, so concurrent
    /// `ensure_loaded` callers await the in-flight load instead of
    /// starting their own.
    load_complete: Condvar,
}

impl LifecycleManager {
    /// Create the manager in `Unloaded` and start the idle sweeper thread.
    ///
    /// The sweeper holds only a `Weak` reference, so dropping the last
    /// `Arc` ends it on its next tick.
    pub fn start(
        catalog: CommandCatalog,
        factory: Box<dyn IModelFactory>,
        config: LifecycleConfig,
    ) -> Arc<Self> {
        let manager = Arc::new(Self {
            catalog,
            factory,
            config,
            inner: Mutex::new(Inner {
                state: LifecycleState::Unloaded,
                loaded: None,
                usage_count: 0,
                last_used: None,
                last_used_at: None,
            }),
            load_complete: Condvar::new(),
        });

        let weak = Arc::downgrade(&manager);
        let interval = Duration::from_millis(manager.config.sweep_interval_ms.max(1));
        let spawned = thread::Builder::new()
            .name("beckon-idle-sweeper".to_string())
            .spawn(move || loop {
                thread::sleep(interval);
                match weak.upgrade() {
                    Some(m) => m.maybe_rest(),
                    None => break,
                }
            });
        if let Err(e) = spawned {
            warn!(error = %e, "idle sweeper thread failed to start; rest mode is manual only");
        }

        manager
    }

    fn lock(&self) -> BeckonResult<MutexGuard<'_, Inner>> {
        self.inner.lock().map_err(|e| {
            BeckonError::from(NluError::LockPoisoned {
                reason: e.to_string(),
            })
        })
    }

    /// Transition `Unloaded → Loading → Loaded`, constructing the models
    /// and the embedding index.
    ///
    /// Single-flight: a caller observing `Loading` waits for the in-flight
    /// load to finish rather than starting a second one. On failure the
    /// state reverts to `Unloaded` and the error is returned; semantic
    /// queries degrade to confidence 0 until the next successful load.
    pub fn ensure_loaded(&self) -> BeckonResult<()> {
        let mut inner = self.lock()?;
        loop {
            match inner.state {
                LifecycleState::Loaded => return Ok(()),
                LifecycleState::Loading => {
                    inner = self.load_complete.wait(inner).map_err(|e| {
                        BeckonError::from(NluError::LockPoisoned {
                            reason: e.to_string(),
                        })
                    })?;
                }
                LifecycleState::Unloaded => break,
            }
        }

        inner.state = LifecycleState::Loading;
        drop(inner);

        // If the factory panics (or this thread unwinds for any other
        // reason) while the lock is released, waiters must not be left
        // blocked on a permanent `Loading`; the guard restores `Unloaded`
        // and wakes them.
        struct LoadReset<'a> {
            manager: &'a LifecycleManager,
            armed: bool,
        }
        impl Drop for LoadReset<'_> {
            fn drop(&mut self) {
                if !self.armed {
                    return;
                }
                let mut inner = match self.manager.inner.lock() {
                    Ok(g) => g,
                    Err(poisoned) => poisoned.into_inner(),
                };
                inner.state = LifecycleState::Unloaded;
                inner.loaded = None;
                self.manager.load_complete.notify_all();
            }
        }
        let mut reset = LoadReset {
            manager: self,
            armed: true,
        };

        info!("loading language models");
        let built = self.factory.build().and_then(|models| {
            let index = EmbeddingIndex::build(&self.catalog, models.encoder.as_ref())?;
            Ok((models, index))
        });

        let mut inner = self.lock()?;
        match built {
            Ok((models, index)) => {
                info!(
                    encoder = models.encoder.name(),
                    phrases = index.len(),
                    "models loaded"
                );
                inner.loaded = Some(LoadedState {
                    encoder: models.encoder,
                    annotator: models.annotator,
                    index,
                    query_cache: Cache::new(QUERY_CACHE_CAPACITY),
                });
                inner.state = LifecycleState::Loaded;
                inner.touch();
                reset.armed = false;
                self.load_complete.notify_all();
                Ok(())
            }
            Err(e) => {
                inner.state = LifecycleState::Unloaded;
                inner.loaded = None;
                reset.armed = false;
                self.load_complete.notify_all();
                warn!(error = %e, "model load failed; deterministic matching only");
                Err(e)
            }
        }
    }

    /// Record one interpreter call: usage counter and idle-timer reset.
    pub fn note_usage(&self) {
        if let Ok(mut inner) = self.inner.lock() {
            inner.usage_count += 1;
            inner.touch();
        }
    }

    /// Resolve a query against the loaded index.
    ///
    /// Returns `None` when models are not loaded (degraded mode) or the
    /// encoder fails — never an error to the caller. Annotator failures
    /// are swallowed: the match survives with no context string.
    pub fn semantic_resolve(&self, input: &str) -> Option<(SemanticMatch, Option<String>)> {
        let mut inner = match self.inner.lock() {
            Ok(inner) => inner,
            Err(e) => {
                warn!(error = %e, "lifecycle lock poisoned during query");
                return None;
            }
        };

        let result = {
            let loaded = inner.loaded.as_ref()?;

            let vector = match loaded.query_cache.get(input) {
                Some(v) => v,
                None => match loaded.encoder.encode(input) {
                    Ok(v) => {
                        loaded.query_cache.insert(input.to_string(), v.clone());
                        v
                    }
                    Err(e) => {
                        warn!(error = %e, "query encoding failed");
                        return None;
                    }
                },
            };

            let hit = loaded.index.nearest(input, &vector)?;
            debug!(
                command = %hit.command,
                phrase = %hit.phrase,
                score = hit.score,
                "semantic match"
            );

            let context = loaded.annotator.as_ref().and_then(|a| {
                match a.annotate(input, hit.command) {
                    Ok(text) => Some(text),
                    Err(e) => {
                        debug!(annotator = a.name(), error = %e, "context annotation failed");
                        None
                    }
                }
            });

            Some((hit, context))
        };

        if result.is_some() {
            inner.touch();
        }
        result
    }

    /// Idle sweep: unload only when `Loaded` and idle for at least the
    /// configured timeout. Runs under the state lock, so it can never race
    /// an in-flight query.
    fn maybe_rest(&self) {
        let Ok(mut inner) = self.inner.lock() else {
            return;
        };
        if inner.state != LifecycleState::Loaded {
            return;
        }
        let idle_for = match inner.last_used_at {
            Some(at) => at.elapsed(),
            None => return,
        };
        if idle_for >= Duration::from_secs(self.config.idle_timeout_secs) {
            Self::unload_locked(&mut inner, "idle timeout");
        }
    }

    /// Manual `Loaded → Unloaded`, identical cleanup to the idle path.
    pub fn force_rest(&self) {
        if let Ok(mut inner) = self.inner.lock() {
            if inner.state == LifecycleState::Loaded {
                Self::unload_locked(&mut inner, "manual rest");
            }
        }
    }

    fn unload_locked(inner: &mut Inner, reason: &str) {
        let freed = inner
            .loaded
            .as_ref()
            .map(|l| l.index.memory_bytes() + l.encoder.memory_bytes())
            .unwrap_or(0);
        inner.loaded = None; // drops encoder, annotator, index, cache
        inner.state = LifecycleState::Unloaded;
        info!(reason, freed_bytes = freed, "models unloaded");
    }

    /// Snapshot for status displays.
    pub fn status(&self) -> MemoryStatus {
        match self.inner.lock() {
            Ok(inner) => MemoryStatus {
                state: inner.state,
                models_loaded: inner.state == LifecycleState::Loaded,
                rest_mode: inner.state == LifecycleState::Unloaded,
                index_bytes: inner
                    .loaded
                    .as_ref()
                    .map(|l| l.index.memory_bytes() + l.encoder.memory_bytes())
                    .unwrap_or(0),
                usage_count: inner.usage_count,
                last_used: inner.last_used,
            },
            Err(_) => MemoryStatus {
                state: LifecycleState::Unloaded,
                models_loaded: false,
                rest_mode: true,
                index_bytes: 0,
                usage_count: 0,
                last_used: None,
            },
        }
    }
}
