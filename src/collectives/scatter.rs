//! `scatter`: one-to-many distribution, the dual of `gather`.

use std::time::Duration;

use super::Collectives;
use crate::error::{Error, Result};
use crate::key_layout;
use crate::timeout_scope::TimeoutScope;

impl Collectives {
    /// Distribute `data[i]` to peer `i` for every `i != rank`, and return
    /// `data[rank]` locally.
    ///
    /// `data.len()` must equal `world_size`; this implementation checks
    /// the precondition and reports a mismatch as
    /// [`Error::PreconditionViolation`] rather than relying purely on the
    /// caller.
    pub fn scatter_send(
        &self,
        prefix: &str,
        data: &[Vec<u8>],
        timeout: Option<Duration>,
    ) -> Result<Vec<u8>> {
        if data.len() != self.world_size {
            return Err(Error::PreconditionViolation(format!(
                "scatter_send: data.len() == {} but world_size == {}",
                data.len(),
                self.world_size
            )));
        }

        let _scope = TimeoutScope::new(self.store.as_ref(), self.resolve_timeout(timeout));

        let peer_keys = key_layout::peer_keys(prefix, self.world_size, self.rank);
        let peer_values: Vec<Vec<u8>> = data
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != self.rank)
            .map(|(_, slice)| slice.clone())
            .collect();

        self.store.multi_set(&peer_keys, &peer_values)?;
        Ok(data[self.rank].clone())
    }

    /// Receive the slice sent to this rank under `prefix`.
    pub fn scatter_recv(&self, prefix: &str, timeout: Option<Duration>) -> Result<Vec<u8>> {
        let _scope = TimeoutScope::new(self.store.as_ref(), self.resolve_timeout(timeout));
        self.store.get(&key_layout::rank_key(prefix, self.rank))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::memory_store::MemoryStore;

    #[test]
    fn sender_and_receivers_get_their_own_slice() {
        let store = Arc::new(MemoryStore::new());
        let world_size = 4;
        let data: Vec<Vec<u8>> = (10..14).map(|v: u8| vec![v]).collect();

        let sender = Collectives::new(store.clone(), 0, world_size).unwrap();
        assert_eq!(sender.scatter_send("s3", &data, None).unwrap(), vec![10u8]);

        for rank in 1..world_size {
            let receiver = Collectives::new(store.clone(), rank, world_size).unwrap();
            assert_eq!(
                receiver.scatter_recv("s3", None).unwrap(),
                vec![10u8 + rank as u8]
            );
        }
    }

    #[test]
    fn mismatched_length_is_a_precondition_violation() {
        let store = Arc::new(MemoryStore::new());
        let sender = Collectives::new(store, 0, 4).unwrap();
        let err = sender
            .scatter_send("bad", &[vec![1], vec![2]], None)
            .unwrap_err();
        assert!(matches!(err, Error::PreconditionViolation(_)));
    }

    #[test]
    fn world_size_one_returns_the_single_slice() {
        let store = Arc::new(MemoryStore::new());
        let collectives = Collectives::new(store, 0, 1).unwrap();
        assert_eq!(
            collectives.scatter_send("single", &[vec![7]], None).unwrap(),
            vec![7]
        );
    }
}
