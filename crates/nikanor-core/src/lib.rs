//! Core Nikanor library (text layout, bubble frame, art streaming, config).

pub mod art;
pub mod bubble;
pub mod config;
pub mod text;
