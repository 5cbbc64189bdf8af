//! Shared network models for the wakr workspace.

pub mod network;
