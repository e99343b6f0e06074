mod labels;
pub use labels::RoomLabels;

mod entry;
pub use entry::RoomEntry;
