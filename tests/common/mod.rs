#![allow(dead_code)]

mod assertions;
mod fixtures;
mod test_app;

pub use assertions::*;
pub use fixtures::*;
pub use test_app::{TestApp, TestAppBuilder};
