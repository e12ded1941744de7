//! Input processing module
//! Handles file detection, record parsing, and input management

pub mod file_detector;
pub mod manager;
pub mod record_reader;
