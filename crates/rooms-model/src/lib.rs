mod domain;
pub use domain::keys;
pub use domain::{
    BrowserPolicy, BrowserPolicyType, Constraint, ConstraintAction, EprPorts, Labels, PortConfig,
};

mod error;
pub use error::{LabelError, LabelResult};

mod room;
pub use room::{RoomEntry, RoomLabels};
