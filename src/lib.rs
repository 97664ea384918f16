#![deny(missing_docs)]
#![warn(missing_copy_implementations)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unused_import_braces)]
#![warn(unused_qualifications)]

//! A small message-passing library for a fixed group of cooperating processes.
//!
//! `procgroup` is conceptually an MPI subset: a process group of size `p` is
//! created by a single call, the library forks `p - 1` children, assigns each
//! member a distinct rank in `[0, p)`, wires the group with a full matrix of
//! unidirectional byte channels, and exposes point-to-point and collective
//! operations on top of it.
//!
//! # Usage
//!
//! ```no_run
//! use procgroup::{make_group, ops, Topology};
//!
//! fn main() -> Result<(), procgroup::Error> {
//!     let mut group = make_group(4, Topology::Switch)?;
//!     let mine = group.rank() as i64;
//!     let total = group.all_reduce(mine, ops::sum)?;
//!     assert_eq!(total, 0 + 1 + 2 + 3);
//!     group.join()?;
//!     Ok(())
//! }
//! ```
//!
//! # Supported
//!
//! - **Group bootstrap**: [`make_group`] forks the group and assigns ranks.
//! - **Point-to-point**: [`Group::send`]/[`Group::recv`], topology-gated.
//! - **Collectives**: [`Group::broadcast`], [`Group::scatter`], [`Group::collect`],
//!   [`Group::all_broadcast`], [`Group::reduce`], [`Group::all_reduce`],
//!   [`Group::barrier`].
//! - **Topologies**: the fixed catalogue in [`Topology`].
//!
//! # Not supported
//!
//! - Cross-host networking, dynamic membership, fault tolerance, non-blocking
//!   operations, and thread-level parallelism within a rank are all out of scope;
//!   see the crate's design notes for the reasoning.

mod channel;
pub mod codec;
pub mod collective;
pub mod edge;
pub mod error;
pub mod group;
pub mod ops;
pub mod point_to_point;
pub mod topology;

#[doc(inline)]
pub use codec::Payload;
#[doc(inline)]
pub use edge::Edge;
#[doc(inline)]
pub use error::{DecodeError, Error};
#[doc(inline)]
pub use group::{make_group, Group};
#[doc(inline)]
pub use topology::Topology;
