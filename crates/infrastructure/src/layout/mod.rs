//! Packing of C records into a caller-supplied buffer.
//!
//! Every NSS entry point receives a flat `char *buffer` next to the struct it
//! must fill. Strings, address bytes and pointer arrays the struct refers to
//! all have to live inside that buffer, each piece (a segment) starting on a
//! pointer boundary. The layout is planned up front so the size check happens
//! before the first byte is written.
mod buffer;
mod writer;

pub use buffer::AlignedBuffer;
pub use writer::{align_up, LayoutPlan, RecordLayoutWriter, Segment, POINTER_WIDTH};
