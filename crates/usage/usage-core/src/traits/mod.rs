pub mod composition_handler;
pub mod environment;
pub mod event_sink;
pub mod storage;

pub use composition_handler::ICompositionHandler;
pub use environment::IEnvironmentSource;
pub use event_sink::IEventSink;
pub use storage::IKeyValueStore;
