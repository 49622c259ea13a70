pub mod expected;
pub mod lunch;
pub mod status;
pub mod worked;
