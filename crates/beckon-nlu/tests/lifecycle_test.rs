//! Lifecycle behavior through the public interpreter surface: eager load,
//! idle unload by the sweeper thread, reload on the next call, and manual
//! rest.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use beckon_core::catalog::{CommandCatalog, CommandId};
use beckon_core::config::{InterpreterConfig, LifecycleConfig};
use beckon_core::errors::BeckonResult;
use beckon_core::models::LifecycleState;
use beckon_core::traits::ITextEncoder;
use beckon_nlu::{IModelFactory, Interpreter, LifecycleManager, LoadedModels};

fn short_idle_config() -> InterpreterConfig {
    let mut config = InterpreterConfig::default();
    config.lifecycle.idle_timeout_secs = 1;
    config.lifecycle.sweep_interval_ms = 20;
    config
}

/// Poll the interpreter until the lifecycle reaches `want` or the deadline
/// passes. The sweeper runs on its own thread, so unload timing is not
/// exact.
fn wait_for_state(i: &Interpreter, want: LifecycleState, deadline: Duration) -> bool {
    let start = Instant::now();
    while start.elapsed() < deadline {
        if i.memory_status().state == want {
            return true;
        }
        thread::sleep(Duration::from_millis(10));
    }
    false
}

#[test]
fn models_load_eagerly_on_first_call() {
    let i = Interpreter::new(&InterpreterConfig::default());
    assert_eq!(i.memory_status().state, LifecycleState::Unloaded);

    i.process("ip");
    let status = i.memory_status();
    assert_eq!(status.state, LifecycleState::Loaded);
    assert!(status.models_loaded);
    assert!(!status.rest_mode);
    assert!(status.index_bytes > 0);
}

#[test]
fn lazy_mode_skips_loading_for_deterministic_hits() {
    let mut config = InterpreterConfig::default();
    config.nlu.lazy_semantic_load = true;
    let i = Interpreter::new(&config);

    let r = i.process("take a screenshot");
    assert_eq!(r.command(), Some(CommandId::TakeScreenshot));
    assert_eq!(i.memory_status().state, LifecycleState::Unloaded);

    // A miss in the deterministic stages still triggers the load.
    i.process("open the calculator please");
    assert_eq!(i.memory_status().state, LifecycleState::Loaded);
}

#[test]
fn idle_timeout_unloads_and_next_call_reloads() {
    let i = Interpreter::new(&short_idle_config());
    i.process("open the calculator please");
    assert_eq!(i.memory_status().state, LifecycleState::Loaded);

    assert!(
        wait_for_state(&i, LifecycleState::Unloaded, Duration::from_secs(5)),
        "sweeper never unloaded the idle models"
    );
    let rested = i.memory_status();
    assert!(rested.rest_mode);
    assert_eq!(rested.index_bytes, 0);

    // The next call wakes everything back up and still resolves.
    let r = i.process("open the calculator please");
    assert_eq!(r.command(), Some(CommandId::OpenCalculator));
    assert_eq!(i.memory_status().state, LifecycleState::Loaded);
}

#[test]
fn activity_resets_the_idle_timer() {
    let i = Interpreter::new(&short_idle_config());
    i.process("ip");

    // Keep touching it for longer than the timeout; it must stay loaded.
    let start = Instant::now();
    while start.elapsed() < Duration::from_millis(1600) {
        i.process("ip");
        thread::sleep(Duration::from_millis(100));
        assert_eq!(i.memory_status().state, LifecycleState::Loaded);
    }
}

#[test]
fn force_rest_unloads_immediately() {
    let i = Interpreter::new(&InterpreterConfig::default());
    i.process("ip");
    assert_eq!(i.memory_status().state, LifecycleState::Loaded);

    i.force_rest();
    let status = i.memory_status();
    assert_eq!(status.state, LifecycleState::Unloaded);
    assert_eq!(status.index_bytes, 0);
}

#[test]
fn usage_count_survives_unload_cycles() {
    let i = Interpreter::new(&InterpreterConfig::default());
    i.process("ip");
    i.force_rest();
    i.process("check battery");

    let status = i.memory_status();
    assert_eq!(status.usage_count, 2);
    assert!(status.last_used.is_some());
}

#[test]
fn concurrent_ensure_loaded_builds_models_once() {
    /// Counts constructions and holds the load open long enough for the
    /// other callers to pile up behind it.
    struct CountingFactory {
        builds: Arc<AtomicUsize>,
    }

    impl IModelFactory for CountingFactory {
        fn build(&self) -> BeckonResult<LoadedModels> {
            self.builds.fetch_add(1, Ordering::SeqCst);
            thread::sleep(Duration::from_millis(50));
            let encoder: Box<dyn ITextEncoder> =
                Box::new(beckon_nlu::encoders::HashedTfIdfEncoder::new(64));
            Ok(LoadedModels {
                encoder,
                annotator: None,
            })
        }
    }

    let builds = Arc::new(AtomicUsize::new(0));
    let manager = LifecycleManager::start(
        CommandCatalog::builtin(),
        Box::new(CountingFactory {
            builds: Arc::clone(&builds),
        }),
        LifecycleConfig::default(),
    );

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let m = Arc::clone(&manager);
            thread::spawn(move || m.ensure_loaded())
        })
        .collect();
    for handle in handles {
        handle.join().unwrap().unwrap();
    }

    assert_eq!(builds.load(Ordering::SeqCst), 1);
    assert_eq!(manager.status().state, LifecycleState::Loaded);
}

#[test]
fn panicking_factory_leaves_manager_reloadable() {
    /// Panics on the first build, succeeds afterwards.
    struct FlakyFactory {
        builds: Arc<AtomicUsize>,
    }

    impl IModelFactory for FlakyFactory {
        fn build(&self) -> BeckonResult<LoadedModels> {
            if self.builds.fetch_add(1, Ordering::SeqCst) == 0 {
                panic!("model weights corrupted");
            }
            let encoder: Box<dyn ITextEncoder> =
                Box::new(beckon_nlu::encoders::HashedTfIdfEncoder::new(64));
            Ok(LoadedModels {
                encoder,
                annotator: None,
            })
        }
    }

    let manager = LifecycleManager::start(
        CommandCatalog::builtin(),
        Box::new(FlakyFactory {
            builds: Arc::new(AtomicUsize::new(0)),
        }),
        LifecycleConfig::default(),
    );

    let unwound = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        manager.ensure_loaded()
    }));
    assert!(unwound.is_err());

    // The aborted load must not leave the state stuck in `Loading`,
    // which would block every later caller on the load condvar.
    assert_eq!(manager.status().state, LifecycleState::Unloaded);

    manager.ensure_loaded().unwrap();
    assert_eq!(manager.status().state, LifecycleState::Loaded);
}

#[test]
fn deterministic_stages_resolve_while_rested() {
    let mut config = InterpreterConfig::default();
    config.nlu.lazy_semantic_load = true;
    let i = Interpreter::new(&config);

    let r = i.process("restart computer");
    assert_eq!(r.command(), Some(CommandId::Restart));
    assert_eq!(i.memory_status().state, LifecycleState::Unloaded);
}
