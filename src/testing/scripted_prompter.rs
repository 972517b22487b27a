use std::collections::VecDeque;
use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::Prompter;

/// Answers prompts from fixed scripts and records what was asked.
pub struct ScriptedPrompter {
    inputs: Mutex<VecDeque<String>>,
    confirmations: Mutex<VecDeque<bool>>,
    asked: Mutex<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn new(inputs: &[&str], confirmations: &[bool]) -> Self {
        Self {
            inputs: Mutex::new(inputs.iter().map(|value| value.to_string()).collect()),
            confirmations: Mutex::new(confirmations.iter().copied().collect()),
            asked: Mutex::new(Vec::new()),
        }
    }

    /// Text prompts asked so far, in order.
    pub fn asked(&self) -> Vec<String> {
        self.asked.lock().unwrap().clone()
    }
}

impl Prompter for ScriptedPrompter {
    fn input(&self, prompt: &str) -> Result<String, AppError> {
        self.asked.lock().unwrap().push(prompt.to_string());
        self.inputs
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| AppError::Prompt(format!("no scripted answer for '{prompt}'")))
    }

    fn confirm(&self, _question: &str) -> Result<bool, AppError> {
        Ok(self.confirmations.lock().unwrap().pop_front().unwrap_or(false))
    }
}
