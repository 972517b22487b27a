use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::ProcessRunner;

type Hook = Box<dyn Fn(&[String]) + Send>;

/// Records every command instead of running it. Hooks simulate side effects
/// of specific commands (e.g. certbot writing a certificate).
#[derive(Default)]
pub struct RecordingRunner {
    commands: Mutex<Vec<Vec<String>>>,
    hooks: Mutex<Vec<(Vec<String>, Hook)>>,
    failures: Mutex<Vec<Vec<String>>>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `hook` for commands whose argv contains `pattern` as a contiguous run.
    pub fn on<F>(&self, pattern: &[&str], hook: F)
    where
        F: Fn(&[String]) + Send + 'static,
    {
        let pattern = pattern.iter().map(|part| part.to_string()).collect();
        self.hooks.lock().unwrap().push((pattern, Box::new(hook)));
    }

    /// Drop hooks registered with exactly `pattern`.
    pub fn clear_hooks(&self, pattern: &[&str]) {
        self.hooks.lock().unwrap().retain(|(registered, _)| registered.as_slice() != pattern);
    }

    /// Fail commands whose argv contains `pattern`, as a strict runner would.
    pub fn fail_on(&self, pattern: &[&str]) {
        let pattern = pattern.iter().map(|part| part.to_string()).collect();
        self.failures.lock().unwrap().push(pattern);
    }

    pub fn commands(&self) -> Vec<Vec<String>> {
        self.commands.lock().unwrap().clone()
    }

    /// Commands that contain `pattern` as a contiguous run.
    pub fn matching(&self, pattern: &[&str]) -> Vec<Vec<String>> {
        self.commands().into_iter().filter(|argv| contains_run(argv, pattern)).collect()
    }
}

fn contains_run<S: AsRef<str>>(argv: &[String], pattern: &[S]) -> bool {
    pattern.is_empty()
        || argv.windows(pattern.len()).any(|window| {
            window.iter().zip(pattern).all(|(arg, part)| arg == part.as_ref())
        })
}

impl ProcessRunner for RecordingRunner {
    fn run(&self, argv: &[String]) -> Result<String, AppError> {
        self.commands.lock().unwrap().push(argv.to_vec());
        if self.failures.lock().unwrap().iter().any(|pattern| contains_run(argv, pattern.as_slice())) {
            return Err(AppError::CommandFailed {
                command: argv.join(" "),
                status: "exit status: 1".to_string(),
                stderr: String::new(),
            });
        }
        for (pattern, hook) in self.hooks.lock().unwrap().iter() {
            if contains_run(argv, pattern.as_slice()) {
                hook(argv);
            }
        }
        Ok(String::new())
    }
}
