pub mod calculator;
pub mod clock;
pub mod config;
pub mod logic;
pub mod normalizer;
pub mod validator;
