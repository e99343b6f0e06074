mod labels;
pub use labels::Labels;

mod ports;
pub use ports::{EprPorts, PortConfig};

mod policy;
pub use policy::{BrowserPolicy, BrowserPolicyType};

mod constraint;
pub use constraint::{Constraint, ConstraintAction};

pub mod keys;
