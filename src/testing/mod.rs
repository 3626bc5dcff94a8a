mod fake_port_probe;
mod fake_runtime;
mod memory_answer_store;
mod recording_reporter;
mod scripted_prompter;

pub use fake_port_probe::FakePortProbe;
pub use fake_runtime::FakeRuntime;
pub use memory_answer_store::MemoryAnswerStore;
pub use recording_reporter::RecordingReporter;
pub use scripted_prompter::{Answer, ScriptedPrompter};
