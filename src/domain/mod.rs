//! Domain layer: page builder, references and publish rules
//!
//! This layer is independent of repositories, configuration and logging setup.

pub mod error;
pub mod page;
pub mod publish;
pub mod record;
pub mod reference;

pub use error::ValidationError;
pub use page::FakePage;
pub use publish::{PublishWindow, PublishedStatus};
pub use record::ContentRecord;
pub use reference::ContentReference;
