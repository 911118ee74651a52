//! Scripted [`CommandRunner`] for unit tests

use std::collections::{HashMap, VecDeque};
use std::path::Path;
use std::sync::Mutex;

use super::{display_command, CommandOutput, CommandRunner};
use crate::error::Result;

/// Answers commands from a script keyed by the full command line.
///
/// Several responses queued for one command line are returned in order; the
/// last one keeps answering. Unscripted commands fail with exit status 1.
#[derive(Default)]
pub struct ScriptedRunner {
    responses: Mutex<HashMap<String, VecDeque<CommandOutput>>>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, command_line: &str, output: CommandOutput) -> &Self {
        self.responses
            .lock()
            .unwrap()
            .entry(command_line.to_string())
            .or_default()
            .push_back(output);
        self
    }

    pub fn ok(&self, command_line: &str, stdout: &str) -> &Self {
        self.respond(command_line, CommandOutput::ok(stdout))
    }

    pub fn fail(&self, command_line: &str, stderr: &str) -> &Self {
        self.respond(command_line, CommandOutput::failed(stderr))
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn was_called(&self, command_line: &str) -> bool {
        self.calls().iter().any(|c| c == command_line)
    }

    pub fn calls_starting_with(&self, prefix: &str) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter(|c| c.starts_with(prefix))
            .collect()
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, program: &str, args: &[&str], _cwd: Option<&Path>) -> Result<CommandOutput> {
        let line = display_command(program, args);
        self.calls.lock().unwrap().push(line.clone());

        let mut responses = self.responses.lock().unwrap();
        let output = match responses.get_mut(&line) {
            Some(queue) if queue.len() > 1 => queue.pop_front().unwrap(),
            Some(queue) => queue.front().cloned().unwrap(),
            None => CommandOutput::failed(format!("unscripted command: {line}")),
        };
        Ok(output)
    }
}
