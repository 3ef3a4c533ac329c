use std::collections::HashMap;
use std::hash::Hash;

/// Sums `value` per key. Keys keep the order of their first appearance.
pub fn sum_by<T, K, F, V>(items: &[T], mut key: F, mut value: V) -> Vec<(K, f64)>
where
    K: Eq + Hash + Clone,
    F: FnMut(&T) -> K,
    V: FnMut(&T) -> f64,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<(K, f64)> = Vec::new();

    for item in items {
        let k = key(item);
        let v = value(item);
        match index.get(&k) {
            Some(&i) => groups[i].1 += v,
            None => {
                index.insert(k.clone(), groups.len());
                groups.push((k, v));
            }
        }
    }

    groups
}

/// Counts items per key. Keys keep the order of their first appearance.
pub fn count_by<T, K, F>(items: &[T], key: F) -> Vec<(K, usize)>
where
    K: Eq + Hash + Clone,
    F: FnMut(&T) -> K,
{
    sum_by(items, key, |_| 1.0)
        .into_iter()
        .map(|(k, n)| (k, n as usize))
        .collect()
}

/// Stable descending sort on `rank`, then keep the first `limit` entries.
/// Ties keep their input order.
pub fn top_n<T, F>(mut entries: Vec<T>, limit: usize, rank: F) -> Vec<T>
where
    F: Fn(&T) -> f64,
{
    entries.sort_by(|a, b| rank(b).total_cmp(&rank(a)));
    entries.truncate(limit);
    entries
}
