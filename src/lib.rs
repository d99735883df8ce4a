//! nf-mcdm - Multi-criteria decision making over neutrosophic fuzzy sets
//!
//! This crate ranks alternatives described by (Mu, T, I, F) membership
//! vectors using entropy-based criterion weights and nine similarity
//! formulas against ideal reference vectors.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
