//! MCP tool handlers for the Gantt server
//!
//! This module contains the implementation of all MCP tool handlers.
//! Each handler is in a separate file for better organization.

pub mod chart;
pub mod clear;
pub mod parse;
pub mod sample;
pub mod show;
pub mod transfer;
