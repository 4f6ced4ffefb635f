//! SDFV Core Types and Primitives
//!
//! This crate provides the leaf building blocks of the SDFG viewer. It
//! includes:
//!
//! - **Geometry**: Points, sizes and bounding boxes ([`geometry`] module)
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Draw**: The immediate-mode [`draw::DrawContext`] capability set, stroke
//!   definitions, shape primitives and two context backends ([`draw`] module)

pub mod color;
pub mod draw;
pub mod geometry;
