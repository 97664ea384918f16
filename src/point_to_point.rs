//! Point-to-point sends and receives, topology-gated and raw.
//!
//! `send`/`recv` consult the group's [`Topology`](crate::topology::Topology) before
//! touching a channel. The `raw_*` variants bypass that check; they exist for the
//! collectives in [`crate::collective`], whose traffic patterns the library already
//! knows are legal regardless of the active topology (§4.5).

use crate::codec::Payload;
use crate::error::Error;
use crate::group::Group;

impl Group {
    /// Sends `v` to rank `dst`, blocking until the OS accepts the bytes.
    ///
    /// Returns [`Error::TopologyViolation`] without touching the channel if the
    /// active topology does not connect this rank to `dst`.
    pub fn send<T: Payload>(&mut self, dst: usize, v: &T) -> Result<(), Error> {
        self.check_reachable(dst)?;
        self.raw_send(dst, v)
    }

    /// Receives one value from rank `src`, blocking until it has arrived.
    ///
    /// Returns [`Error::TopologyViolation`] without touching the channel if the
    /// active topology does not connect this rank to `src`.
    pub fn recv<T: Payload>(&mut self, src: usize) -> Result<T, Error> {
        self.check_reachable(src)?;
        self.raw_recv(src)
    }

    /// Sends `v` to rank `dst`, bypassing the topology predicate.
    ///
    /// Reserved for the collectives, whose send/receive patterns are verified safe
    /// independent of topology.
    pub(crate) fn raw_send<T: Payload>(&mut self, dst: usize, v: &T) -> Result<(), Error> {
        let rank = self.rank();
        let out = self.channels.writer(rank, dst)?;
        v.encode(out)?;
        Ok(())
    }

    /// Receives one value from rank `src`, bypassing the topology predicate.
    pub(crate) fn raw_recv<T: Payload>(&mut self, src: usize) -> Result<T, Error> {
        let rank = self.rank();
        let input = self.channels.reader(src, rank)?;
        Ok(T::decode(input)?)
    }

    fn check_reachable(&self, peer: usize) -> Result<(), Error> {
        if self.topology().allows(self.rank(), peer, self.size()) {
            Ok(())
        } else {
            tracing::warn!(rank = self.rank(), peer, size = self.size(), "topology violation");
            Err(Error::TopologyViolation {
                rank: self.rank(),
                peer,
                size: self.size(),
            })
        }
    }
}
