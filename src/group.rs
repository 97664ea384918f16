//! Group bootstrap: forks a process group and assigns ranks.
//!
//! `make_group` is the one place the library calls `fork`. It allocates the
//! channel matrix first, in the single pre-fork process, so that every rank that
//! comes out of the fork loop below inherits identical channel endpoints (§4.3).

use nix::unistd::{ForkResult, Pid};

use crate::channel::ChannelMatrix;
use crate::error::Error;
use crate::topology::Topology;

/// A bootstrapped group of cooperating ranks.
///
/// Every rank holds its own `Group`; there is no shared state after `fork` beyond
/// the inherited channel endpoints. A `Group`'s lifetime is the owning process's
/// lifetime.
pub struct Group {
    rank: usize,
    size: usize,
    topology: Topology,
    pub(crate) channels: ChannelMatrix,
    children: Vec<Pid>,
}

impl Group {
    /// This process's rank within the group, in `[0, size())`.
    pub fn rank(&self) -> usize {
        self.rank
    }

    /// The number of ranks in the group.
    pub fn size(&self) -> usize {
        self.size
    }

    /// The topology this group was built with.
    pub fn topology(&self) -> Topology {
        self.topology
    }

    /// Blocks until every child process this rank forked has exited, and returns an
    /// aggregate exit status: `0` if every child exited cleanly, otherwise the first
    /// non-zero status observed. Non-root ranks (which fork no children) return `0`
    /// immediately. Per §2, rank 0 is the one responsible for a meaningful overall
    /// exit status.
    pub fn join(&self) -> Result<i32, Error> {
        use nix::sys::wait::{waitpid, WaitStatus};

        let mut status = 0;
        for &pid in &self.children {
            match waitpid(pid, None)? {
                WaitStatus::Exited(_, code) => {
                    if code != 0 && status == 0 {
                        status = code;
                    }
                }
                WaitStatus::Signaled(..) => {
                    if status == 0 {
                        status = 1;
                    }
                }
                _ => {}
            }
        }
        Ok(status)
    }
}

/// Forks `p - 1` child processes and returns, in every one of the `p` resulting
/// processes, a [`Group`] describing that process's place in it.
///
/// Ranks are assigned in fork order: the calling process keeps forking and stays at
/// rank 0 until it has spawned `p - 1` children; each child stops forking as soon as
/// it observes itself as the fork's child side and takes the next rank (§4.3).
pub fn make_group(p: usize, topology: Topology) -> Result<Group, Error> {
    if p == 0 {
        return Err(Error::InvalidSize(p));
    }

    let mut channels = ChannelMatrix::allocate(p)?;
    tracing::debug!(size = p, "allocated channel matrix, forking group");

    let mut rank = 0usize;
    let mut children = Vec::new();
    for candidate in 1..p {
        // SAFETY: no heap allocation or synchronization happens between `fork` and
        // the child reading `rank`/`candidate` below, on either side of the fork.
        match unsafe { nix::unistd::fork() }? {
            ForkResult::Parent { child } => {
                children.push(child);
            }
            ForkResult::Child => {
                rank = candidate;
                break;
            }
        }
    }

    tracing::debug!(rank, pid = %nix::unistd::getpid(), "rank assigned");
    channels.close_unused(rank);

    Ok(Group {
        rank,
        size: p,
        topology,
        channels,
        children,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_a_group_of_zero() {
        assert!(matches!(
            make_group(0, Topology::Switch),
            Err(Error::InvalidSize(0))
        ));
    }
}
