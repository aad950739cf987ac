use std::{
    path::{Path, PathBuf},
    sync::Mutex,
};
use uimigrate_core::{CommandRunner, MigrateError, Result, format_command};

use crate::reporter::Reporter;

/// Records commands instead of running them. Fails commands whose first
/// argument equals `fail_on`.
#[derive(Default)]
pub(crate) struct RecordingRunner {
    calls: Mutex<Vec<(String, PathBuf)>>,
    fail_on: Option<&'static str>,
}

impl RecordingRunner {
    pub(crate) fn failing_on(verb: &'static str) -> Self {
        Self { calls: Mutex::default(), fail_on: Some(verb) }
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().iter().map(|(cmd, _)| cmd.clone()).collect()
    }

    pub(crate) fn dirs(&self) -> Vec<PathBuf> {
        self.calls.lock().unwrap().iter().map(|(_, dir)| dir.clone()).collect()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, program: &str, args: &[String], cwd: &Path) -> Result<()> {
        let command = format_command(program, args);
        self.calls.lock().unwrap().push((command.clone(), cwd.to_path_buf()));

        if self.fail_on.is_some_and(|verb| args.first().is_some_and(|a| a == verb)) {
            return Err(MigrateError::Process { command, reason: "exit status: 1".to_string() });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Event {
    Stage(String),
    FileDone(PathBuf),
    Success(String),
    Failure(String),
}

#[derive(Default)]
pub(crate) struct RecordingReporter {
    events: Mutex<Vec<Event>>,
}

impl RecordingReporter {
    pub(crate) fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }

    pub(crate) fn stages(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Stage(label) => Some(label),
                _ => None,
            })
            .collect()
    }
}

impl Reporter for RecordingReporter {
    fn on_stage(&self, label: &str) {
        self.events.lock().unwrap().push(Event::Stage(label.to_string()));
    }

    fn on_file_done(&self, path: &Path) {
        self.events.lock().unwrap().push(Event::FileDone(path.to_path_buf()));
    }

    fn on_success(&self, message: &str) {
        self.events.lock().unwrap().push(Event::Success(message.to_string()));
    }

    fn on_failure(&self, error: &MigrateError) {
        self.events.lock().unwrap().push(Event::Failure(error.to_string()));
    }
}
