//! Core RDS (IEC 62106) / RBDS decoder: block reassembly, double-reception
//! validation, per-group-type decoding, TMC multi-group reassembly with
//! bit-array extraction, and Modified-Julian-Day date/time conversion.
//!
//! The crate is organized leaves-first: lookup tables and bit/validation
//! primitives at the bottom, per-group-id decoders built on top of them,
//! and [`Decoder`] as the public facade tying block assembly, validation
//! buffers, the TMC engine and the published [`DecoderState`] snapshot
//! together.
//!
//! Out of scope: the tuner driver that produces raw blocks, any kernel
//! interface for receiving them, and any CLI or application consuming the
//! decoded state. The core never returns a fatal error; lossy reception is
//! absorbed into per-field pending buffers and the [`Statistics`] counters.

#![no_std]
#![cfg_attr(docrs, feature(doc_cfg))]

#[cfg(feature = "std")]
extern crate std;

pub mod block;
pub mod error;
mod fields;
mod fixed_vec;
mod groups;
mod pending;
pub mod state;
mod statistics;
pub mod tables;
pub mod time;
pub mod tmc;

mod decoder;

pub use block::{BlockFlags, BlockId, Group, RawBlock, Version, VersionRepr};
pub use decoder::Decoder;
pub use error::TimeError;
pub use fields::{UpdatedFields, ValidFields};
pub use fixed_vec::FixedVec;
pub use state::{AlternativeFrequencies, DecoderState, DiFlags, OdaEntry, MAX_AF, MAX_ODA};
pub use statistics::Statistics;
pub use time::DecodedTime;
pub use tmc::{AdditionalField, MessageKind, TmcMessage, TmcSystem, MAX_ADDITIONAL};
