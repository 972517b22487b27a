pub mod assets;
pub mod certificates;
pub mod compose;
pub mod console;
pub mod host_lock;
pub mod input;
pub mod materializer;
pub mod progress_tracker;

pub use compose::ComposeStack;
pub use materializer::{ConfigMaterializer, PatchOutcome};
pub use progress_tracker::ProgressTracker;
