//! fenboard Core Types and Definitions
//!
//! This crate provides the foundational types shared by the fenboard parser,
//! renderer and CLI. It includes:
//!
//! - **Squares**: Algebraic and grid addressing of the 8x8 board ([`square`] module)
//! - **Orientation**: Which side is drawn at the bottom ([`orientation`] module)
//! - **Pieces**: Piece kinds and sides ([`piece`] module)
//! - **Annotations**: Highlights, arrows and move-quality icons ([`annotation`] module)
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Draw**: SVG primitives and the layer system ([`draw`] module)

pub mod annotation;
pub mod color;
pub mod draw;
pub mod geometry;
pub mod orientation;
pub mod piece;
pub mod square;
