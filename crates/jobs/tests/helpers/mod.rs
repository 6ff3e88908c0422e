
pub use mock_ports::{CountingReporter, ScriptedProber};
