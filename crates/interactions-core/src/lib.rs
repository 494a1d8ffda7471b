//! Interactions Core Types and Definitions
//!
//! This crate provides the foundational types for drawing interaction
//! grids. It includes:
//!
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Draw**: A pixel canvas and the primitives drawn onto it: lines,
//!   triangles, circles, rectangles, arrows, node shapes and bitmap text
//!   ([`draw`] module)

pub mod color;
pub mod draw;
pub mod geometry;
