#![allow(dead_code)]

pub mod chain;
pub mod server;
pub mod subgraph;
