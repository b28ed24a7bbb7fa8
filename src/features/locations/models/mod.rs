pub mod address;
pub mod location;

pub use address::{Address, GeocodeOutcome};
pub use location::{LocationDocument, LocationRecord, NewLocation};
