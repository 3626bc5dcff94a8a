mod answer_store;
mod container_runtime;
mod port_probe;
mod prompter;
mod reporter;

pub use answer_store::AnswerStore;
pub use container_runtime::ContainerRuntime;
pub use port_probe::PortProbe;
pub use prompter::Prompter;
pub use reporter::Reporter;
