//! Pure naming convention mapping `(prefix, rank)` to store keys.
//!
//! No I/O, no state. Every primitive in [`crate::collectives`] goes through
//! these helpers so the key namespace stays centralized in one place.

/// The broadcast payload key, and the counter key reused by `all_sum`.
pub fn root(prefix: &str) -> String {
    prefix.to_string()
}

/// `rank`'s contributed payload / presence-marker key under `prefix`.
pub fn rank_key(prefix: &str, rank: usize) -> String {
    format!("{prefix}/{rank}")
}

/// The join counter key for the barrier under `prefix`.
pub fn num_members(prefix: &str) -> String {
    format!("{prefix}/num_members")
}

/// The barrier release flag key under `prefix`.
pub fn last_members(prefix: &str) -> String {
    format!("{prefix}/last_members")
}

/// `rank_key(prefix, i)` for every `i` in `[0, world_size)` except `skip`,
/// in ascending rank order.
pub fn peer_keys(prefix: &str, world_size: usize, skip: usize) -> Vec<String> {
    (0..world_size)
        .filter(|&i| i != skip)
        .map(|i| rank_key(prefix, i))
        .collect()
}

/// `rank_key(prefix, i)` for every `i` in `[0, world_size)`, in ascending
/// rank order.
pub fn all_keys(prefix: &str, world_size: usize) -> Vec<String> {
    (0..world_size).map(|i| rank_key(prefix, i)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_namespaced_under_the_prefix() {
        assert_eq!(root("P"), "P");
        assert_eq!(rank_key("P", 3), "P/3");
        assert_eq!(num_members("P"), "P/num_members");
        assert_eq!(last_members("P"), "P/last_members");
    }

    #[test]
    fn peer_keys_skip_self_and_stay_rank_ordered() {
        assert_eq!(
            peer_keys("P", 4, 2),
            vec!["P/0".to_string(), "P/1".to_string(), "P/3".to_string()]
        );
    }

    #[test]
    fn all_keys_cover_the_full_world_in_order() {
        assert_eq!(
            all_keys("P", 3),
            vec!["P/0".to_string(), "P/1".to_string(), "P/2".to_string()]
        );
    }

    #[test]
    fn world_size_one_peer_keys_is_empty() {
        assert!(peer_keys("P", 1, 0).is_empty());
        assert_eq!(all_keys("P", 1), vec!["P/0".to_string()]);
    }
}
