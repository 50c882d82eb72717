//! Splitting input text into fragments along a set of separator literals.

pub mod fragment;
