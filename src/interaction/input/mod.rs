pub mod key_snapshot;

pub use key_snapshot::{InputCapturePlugin, KeySnapshot};
