mod queries;
mod types;

pub use queries::{ChannelsForm, UpdatesQuery};
pub use types::{ChannelSource, ConnectorSummary, SourceChannel, UpdateRecord};
