mod terminal;
mod types;

pub use terminal::TerminalPage;
pub use types::*;

use async_trait::async_trait;

/// The environment a handler runs against: controls to read, regions to
/// write, and a way to raise a blocking notice.
#[async_trait]
pub trait Page: Send + Sync {
    async fn read_file(&self, control: Control) -> Option<SelectedFile>;

    async fn read_value(&self, control: Control) -> Option<String>;

    /// Replaces the region's previous content.
    async fn write(&self, region: Region, content: Content);

    async fn notify(&self, message: &str);
}
