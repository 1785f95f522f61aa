mod service;
mod task;

pub use service::EmailAssistant;
pub use task::EmailTask;
