pub mod calculator;
pub mod catalogue;
pub mod config;
pub mod quote;
pub mod validator;
