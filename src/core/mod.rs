//! Core modules: the validator contract, the registries, selection and
//! execution. Built-in validators live in [`crate::plugins`].

pub mod bundle;
pub mod config;
pub mod error;
pub mod filter;
pub mod harness;
pub mod output;
pub mod registry;
pub mod result;
pub mod validator;
