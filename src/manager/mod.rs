mod dispatcher;
mod poller;
mod projector;
mod store;
mod view;

#[cfg(test)]
pub(crate) mod testing;

pub use dispatcher::{ConnectorManager, ConnectorManagerBuilder};
pub use poller::RefreshPoller;
pub use projector::{SyncState, SyncStateProjector};
pub use store::SnapshotStore;
pub use view::{DialogView, RenderMode, RowHandle};
