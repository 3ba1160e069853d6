//! # canmux
//!
//! This library dispatches multiplexed CAN parameter updates into fixed-size storage in
//! no_std environments. A multiplexed message carries a selector (index) and a shared value
//! field; the index picks which parameter the value belongs to. Dispatch is a bounds check
//! and an array store, with no branch per parameter and no dynamic memory allocation.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────┐  ┌────────┐  UpdateRequest  ┌─────────────────────┐
//! │ CAN Rx   ├─►│ Demux  ├────────────────►│ impl Dispatch       │
//! └──────────┘  └────────┘                 │ ┌─────────────────┐ │
//!                 │ decode                 │ │ ParameterTable  │ │
//!                 │ filter by id           │ └─────────────────┘ │
//!                 │ log + count            │ ┌─────────────────┐ │
//!                 ▼                        │ │ WriteTargets    │ │
//!               Stats                      │ └─────────────────┘ │
//!                                          └─────────────────────┘
//! ```
//! Components:
//! * _ParameterTable_ owns `N` signed 16-bit slots addressed by 1-based index. It rejects
//!   out-of-range indices before any write.
//! * _WriteTargets_ is a lookup table of mutable references for storage with named fields.
//!   It follows the same contract as the table.
//! * _Demux_ accepts frames implementing [`embedded_can::Frame`], decodes the payload,
//!   dispatches it, and keeps outcome counters. Rejections are logged here.
//! * _Frame_ is a classic CAN frame implementation for hosts without a driver frame type.
//!
//! ## Concurrency model
//!
//! All operations are synchronous and complete in constant time. The storage is a plain
//! value; sharing it between execution contexts requires external synchronization, e.g.
//! a blocking mutex owned by the application.
//!
//! ## Feature flags
//!
//! * `defmt`: log through `defmt` and derive `defmt::Format` for public types.
//! * `log`: log through the `log` facade.
//!
//! The two logging features are mutually exclusive.
#![no_std]

pub use canmux_core as core;

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

pub mod config;
pub mod demux;
pub mod frame;
pub mod table;
pub mod targets;
