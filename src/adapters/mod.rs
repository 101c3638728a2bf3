// Adapters layer: concrete implementations for external collaborators (files, terminal).

pub mod catalog;
pub mod conversation_log;
pub mod intake;
pub mod storage;

pub use catalog::JsonCatalog;
pub use conversation_log::JsonlConversationLog;
pub use storage::LocalStorage;
