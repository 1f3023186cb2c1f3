use super::*;

mod channel;
mod common;
mod paths;
mod relay;
