//! Risk Register Records

mod risk;

pub use risk::Risk;
