//! User-facing console messages, mirrored into the log.

use tracing::info;

pub fn show_message(text: &str) {
    info!("{text}");
    println!("{text}");
}

pub fn show_title(text: &str) {
    show_message(&format!("\n####### {text} #######\n"));
}
