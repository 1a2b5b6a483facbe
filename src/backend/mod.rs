/// Simulated peer backend
///
/// The peer runs on its own thread with a Tokio runtime and plays scripted
/// messages back to the UI:
/// - `main_loop`: runtime setup and the action polling loop
/// - `handlers`: action handling and script playback tasks
mod handlers;
mod main_loop;

// Re-export the backend entry point
pub use main_loop::run_backend;
