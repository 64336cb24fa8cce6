pub mod dose_event;
pub mod enums;
pub mod medicine;

pub use dose_event::DoseEvent;
pub use medicine::Medicine;
