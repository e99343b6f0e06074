pub mod codec;
pub mod config;
pub mod context;
pub mod discovery;
pub mod entry;
pub mod error;
pub mod manager;
pub mod runtime;

pub mod prelude {
    pub use crate::codec::{decode_labels, encode_labels};
    pub use crate::config::RoomsConfig;
    pub use crate::context::{LabelContext, RoomUrl, UrlTemplate};
    pub use crate::discovery::Discovery;
    pub use crate::entry::container_to_entry;
    pub use crate::error::CoreError;
    pub use crate::manager::RoomManager;
    pub use crate::runtime::{
        ContainerInspect, ContainerRuntime, ContainerSummary, ListFilters, ListOptions,
        MemoryRuntime, RuntimeError,
    };
}
