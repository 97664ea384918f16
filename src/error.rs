//! Error types for group bootstrap, point-to-point communication, and collectives.

use std::io;

/// Everything that can go wrong once a [`Group`](crate::group::Group) exists.
///
/// A topology violation is the only variant a caller is expected to recover from;
/// every other variant reflects a condition the spec calls fatal (malformed wire
/// data, a broken pipe, or a failed `fork`/`pipe` during bootstrap) and the calling
/// rank has no good option but to abort the operation that produced it.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// `make_group` was asked to build a group of zero processes.
    #[error("a process group must contain at least one rank (requested size {0})")]
    InvalidSize(usize),

    /// `send`/`recv` was called for a peer the active topology does not connect to.
    #[error("rank {rank} may not reach rank {peer} directly under this topology (group size {size})")]
    TopologyViolation {
        /// The rank that attempted the send or receive.
        rank: usize,
        /// The peer rank that was not reachable.
        peer: usize,
        /// The size of the group the attempt was made in.
        size: usize,
    },

    /// A message read off a channel could not be decoded.
    #[error("malformed message on a channel")]
    Decode(#[from] DecodeError),

    /// A read or write on a channel failed at the OS level.
    #[error("channel I/O failure")]
    Io(#[from] io::Error),

    /// `fork` or `pipe` failed while assembling the channel matrix.
    #[error("group bootstrap failed")]
    Bootstrap(#[from] nix::Error),
}

/// Failure to decode a self-delimiting message off a channel.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The channel was closed (or produced no bytes) before a full message arrived.
    #[error("unexpected end of stream while decoding a message")]
    UnexpectedEof,

    /// A line was read but its shape did not match the expected payload encoding.
    #[error("malformed message line: {0:?}")]
    MalformedLine(String),

    /// A numeric field in the message could not be parsed.
    #[error("invalid integer in message")]
    ParseInt(#[from] std::num::ParseIntError),

    /// The underlying read failed at the OS level.
    #[error("I/O failure while decoding a message")]
    Io(#[from] io::Error),
}
