pub mod log_sink;
pub mod recording_sink;

pub use log_sink::TracingSink;
pub use recording_sink::RecordingSink;
