pub mod common;
pub mod demo;
pub mod mst;
pub mod shortest;
pub mod show;
pub mod structure;
pub mod toposort;
pub mod traverse;
