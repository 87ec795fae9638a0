//! Dispatcher integration tests: gate decisions end to end, sequential
//! multi-step execution, history recording, and the file-backed store.

use std::sync::{Arc, Mutex};

use beckon_core::catalog::CommandId;
use beckon_core::config::{DispatchConfig, InterpreterConfig};
use beckon_core::errors::{BeckonResult, DispatchError};
use beckon_core::models::{ExecuteOutcome, HistoryEntry, Resolution};
use beckon_core::traits::{ICommandExecutor, IHistoryStore};
use beckon_dispatch::{DispatchReport, Dispatcher, JsonFileHistory, MemoryHistory};
use beckon_nlu::Interpreter;
use proptest::prelude::*;

/// Executor that records calls and fails on command ids it was told to.
struct MockExecutor {
    calls: Arc<Mutex<Vec<CommandId>>>,
    fail_on: Vec<CommandId>,
}

impl MockExecutor {
    fn new() -> (Self, Arc<Mutex<Vec<CommandId>>>) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                calls: Arc::clone(&calls),
                fail_on: Vec::new(),
            },
            calls,
        )
    }

    fn failing_on(fail_on: Vec<CommandId>) -> (Self, Arc<Mutex<Vec<CommandId>>>) {
        let (mut executor, calls) = Self::new();
        executor.fail_on = fail_on;
        (executor, calls)
    }
}

impl ICommandExecutor for MockExecutor {
    fn execute(&self, command: CommandId, _context: Option<&str>) -> BeckonResult<ExecuteOutcome> {
        self.calls.lock().unwrap().push(command);
        if self.fail_on.contains(&command) {
            Ok(ExecuteOutcome::failed("mock failure"))
        } else {
            Ok(ExecuteOutcome::ok("done"))
        }
    }
}

fn no_delay_config() -> DispatchConfig {
    DispatchConfig {
        inter_step_delay_ms: 0,
        ..DispatchConfig::default()
    }
}

fn dispatcher_with(executor: MockExecutor) -> Dispatcher {
    Dispatcher::new(
        Box::new(executor),
        Box::new(MemoryHistory::new(50)),
        no_delay_config(),
    )
}

#[test]
fn confident_resolution_executes_and_records() {
    let (executor, calls) = MockExecutor::new();
    let dispatcher = dispatcher_with(executor);

    let r = Resolution::single("open notepad", CommandId::OpenNotepad, 0.95, None);
    let report = dispatcher.dispatch(&r).unwrap();

    assert!(matches!(report, DispatchReport::Executed(o) if o.success));
    assert_eq!(calls.lock().unwrap().as_slice(), &[CommandId::OpenNotepad]);

    let history = dispatcher.history(10).unwrap();
    assert_eq!(history.len(), 1);
    assert!(history[0].success);
    assert!(history[0].description.contains("open_notepad"));
}

#[test]
fn mid_confidence_surfaces_without_executing() {
    let (executor, calls) = MockExecutor::new();
    let dispatcher = dispatcher_with(executor);

    let r = Resolution::single("maybe notepad", CommandId::OpenNotepad, 0.3, None);
    let report = dispatcher.dispatch(&r).unwrap();

    assert_eq!(
        report,
        DispatchReport::Surfaced {
            command: CommandId::OpenNotepad,
            confidence: 0.3
        }
    );
    assert!(calls.lock().unwrap().is_empty());

    // Surfacing still leaves a (failed) history entry.
    let history = dispatcher.history(10).unwrap();
    assert_eq!(history.len(), 1);
    assert!(!history[0].success);
}

#[test]
fn low_confidence_rejects_without_executing() {
    let (executor, calls) = MockExecutor::new();
    let dispatcher = dispatcher_with(executor);

    let r = Resolution::single("hmm", CommandId::OpenNotepad, 0.1, None);
    assert_eq!(dispatcher.dispatch(&r).unwrap(), DispatchReport::Rejected);
    assert!(calls.lock().unwrap().is_empty());
    assert_eq!(dispatcher.history(10).unwrap().len(), 1);
}

#[test]
fn unknown_resolution_rejects() {
    let (executor, calls) = MockExecutor::new();
    let dispatcher = dispatcher_with(executor);

    let report = dispatcher.dispatch(&Resolution::unknown("qwxz")).unwrap();
    assert_eq!(report, DispatchReport::Rejected);
    assert!(calls.lock().unwrap().is_empty());
}

#[test]
fn complex_dispatch_runs_all_steps_in_order() {
    let (executor, calls) = MockExecutor::new();
    let dispatcher = dispatcher_with(executor);

    let r = Resolution::complex(
        "open notepad and take a screenshot",
        vec![CommandId::OpenNotepad, CommandId::TakeScreenshot],
    );
    let report = dispatcher.dispatch(&r).unwrap();

    let DispatchReport::Complex(summary) = report else {
        panic!("expected a complex report");
    };
    assert_eq!(summary.succeeded, 2);
    assert_eq!(summary.total, 2);
    assert!(summary.all_succeeded());
    assert_eq!(
        calls.lock().unwrap().as_slice(),
        &[CommandId::OpenNotepad, CommandId::TakeScreenshot]
    );
    // One history entry per step.
    assert_eq!(dispatcher.history(10).unwrap().len(), 2);
}

#[test]
fn complex_dispatch_continues_past_failures() {
    let (executor, calls) =
        MockExecutor::failing_on(vec![CommandId::OpenNotepad]);
    let dispatcher = dispatcher_with(executor);

    let r = Resolution::complex(
        "open notepad then take a screenshot",
        vec![CommandId::OpenNotepad, CommandId::TakeScreenshot],
    );
    let DispatchReport::Complex(summary) = dispatcher.dispatch(&r).unwrap() else {
        panic!("expected a complex report");
    };

    assert_eq!(summary.succeeded, 1);
    assert_eq!(summary.total, 2);
    assert_eq!(summary.failed, vec![CommandId::OpenNotepad]);
    // The failure did not stop the second step.
    assert_eq!(calls.lock().unwrap().len(), 2);
}

#[test]
fn executor_error_is_surfaced_and_recorded() {
    struct ErroringExecutor;
    impl ICommandExecutor for ErroringExecutor {
        fn execute(
            &self,
            command: CommandId,
            _context: Option<&str>,
        ) -> BeckonResult<ExecuteOutcome> {
            Err(DispatchError::ExecutorFailed {
                command: command.as_str().to_string(),
                message: "os refused".to_string(),
            }
            .into())
        }
    }

    let dispatcher = Dispatcher::new(
        Box::new(ErroringExecutor),
        Box::new(MemoryHistory::new(50)),
        no_delay_config(),
    );
    let r = Resolution::single("open notepad", CommandId::OpenNotepad, 0.95, None);

    assert!(dispatcher.dispatch(&r).is_err());
    let history = dispatcher.history(10).unwrap();
    assert_eq!(history.len(), 1);
    assert!(!history[0].success);
}

#[test]
fn pipeline_to_dispatch_end_to_end() {
    let interpreter = Interpreter::new(&InterpreterConfig::default());
    let (executor, calls) = MockExecutor::new();
    let dispatcher = dispatcher_with(executor);

    let r = interpreter.process("open notepad and take a screenshot");
    let DispatchReport::Complex(summary) = dispatcher.dispatch(&r).unwrap() else {
        panic!("expected a complex report");
    };
    assert!(summary.all_succeeded());
    assert_eq!(
        calls.lock().unwrap().as_slice(),
        &[CommandId::OpenNotepad, CommandId::TakeScreenshot]
    );
}

#[test]
fn json_file_history_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.json");

    {
        let store = JsonFileHistory::open(&path, 50).unwrap();
        store.append(HistoryEntry::new("first", true)).unwrap();
        store.append(HistoryEntry::new("second", false)).unwrap();
    }

    let reopened = JsonFileHistory::open(&path, 50).unwrap();
    let loaded = reopened.load(10).unwrap();
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded[0].description, "first");
    assert!(loaded[0].success);
    assert_eq!(loaded[1].description, "second");
    assert!(!loaded[1].success);
}

#[test]
fn json_file_history_truncates_to_capacity_on_open() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.json");

    {
        let store = JsonFileHistory::open(&path, 50).unwrap();
        for n in 0..10 {
            store.append(HistoryEntry::new(format!("entry {n}"), true)).unwrap();
        }
    }

    let reopened = JsonFileHistory::open(&path, 3).unwrap();
    assert_eq!(reopened.len(), 3);
    let loaded = reopened.load(10).unwrap();
    assert_eq!(loaded[0].description, "entry 7");
    assert_eq!(loaded[2].description, "entry 9");
}

proptest! {
    /// After any sequence of more than `capacity` appends, the store holds
    /// exactly `capacity` entries, the oldest evicted first and relative
    /// order preserved.
    #[test]
    fn history_bound_holds_under_arbitrary_append_counts(
        capacity in 1usize..20,
        appends in 1usize..100,
    ) {
        let store = MemoryHistory::new(capacity);
        for n in 0..appends {
            store.append(HistoryEntry::new(format!("entry {n}"), n % 2 == 0)).unwrap();
        }

        let expected_len = appends.min(capacity);
        prop_assert_eq!(store.len(), expected_len);

        let loaded = store.load(usize::MAX).unwrap();
        prop_assert_eq!(loaded.len(), expected_len);
        // The survivors are the most recent `expected_len`, in order.
        let first_kept = appends - expected_len;
        for (i, entry) in loaded.iter().enumerate() {
            prop_assert_eq!(&entry.description, &format!("entry {}", first_kept + i));
        }
    }
}
