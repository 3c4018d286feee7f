pub mod bytes;
pub mod combine;
pub mod number;
pub mod tags;
