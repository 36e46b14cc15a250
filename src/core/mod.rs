//! Core domain model for hexpeek.
//!
//! Holds the byte buffer shared by the decoding and rendering steps. Pure
//! data, no I/O.

pub mod buffer;

pub use buffer::ByteBuffer;
