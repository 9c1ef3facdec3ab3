//! Bounded recency cache - at most N recently touched keys, none older than a max age.
//!
//! Entries live in a hash map; recency is tracked by a queue of
//! `(key, stamp)` pairs. Touching an entry gives it a fresh stamp and pushes
//! a new pair, leaving the old one stale. Stale pairs are skipped when popped
//! and compacted away once they outnumber live ones, so `get` and `set` stay
//! O(1) amortized.

use chrono::{DateTime, Duration, Utc};
use std::collections::{HashMap, VecDeque};
use std::fmt::Debug;
use std::hash::Hash;
use tracing::debug;

#[derive(Debug, Clone)]
struct CacheEntry<V> {
    value: V,
    touched_at: DateTime<Utc>,
    stamp: u64,
}

/// A key -> value map evicting by recency (never frequency) and by age.
#[derive(Debug, Clone)]
pub struct RecencyCache<K, V> {
    entries: HashMap<K, CacheEntry<V>>,
    order: VecDeque<(K, u64)>,
    next_stamp: u64,
    max_size: usize,
    max_age: Duration,
}

impl<K, V> RecencyCache<K, V>
where
    K: Eq + Hash + Clone + Debug,
{
    pub fn new(max_size: usize, max_age: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            order: VecDeque::new(),
            next_stamp: 0,
            max_size,
            max_age,
        }
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    pub fn max_age(&self) -> Duration {
        self.max_age
    }

    /// Number of entries held, expired ones included until they are swept.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Read and touch. Expired entries are dropped and reported absent.
    pub fn get(&mut self, key: &K, now: DateTime<Utc>) -> Option<&V> {
        if self.is_expired(key, now)? {
            self.entries.remove(key);
            debug!(key = ?key, "Cache entry expired");
            return None;
        }
        let stamp = self.bump_stamp();
        let entry = self.entries.get_mut(key)?;
        entry.touched_at = now;
        entry.stamp = stamp;
        self.order.push_back((key.clone(), stamp));
        self.compact();
        self.entries.get(key).map(|entry| &entry.value)
    }

    /// Read without touching.
    pub fn peek(&self, key: &K, now: DateTime<Utc>) -> Option<&V> {
        self.entries
            .get(key)
            .filter(|entry| !self.is_stale(entry, now))
            .map(|entry| &entry.value)
    }

    pub fn contains(&self, key: &K, now: DateTime<Utc>) -> bool {
        self.peek(key, now).is_some()
    }

    /// Insert or replace, touching the entry. Sweeps expired entries, then
    /// evicts least recently touched ones while over capacity.
    pub fn set(&mut self, key: K, value: V, now: DateTime<Utc>) {
        self.sweep_expired(now);

        let stamp = self.bump_stamp();
        self.order.push_back((key.clone(), stamp));
        self.entries.insert(
            key,
            CacheEntry {
                value,
                touched_at: now,
                stamp,
            },
        );

        while self.entries.len() > self.max_size {
            if self.evict_oldest().is_none() {
                break;
            }
        }
        self.compact();
    }

    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.entries.remove(key).map(|entry| entry.value)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }

    /// Drop every entry older than the max age. Returns how many went.
    pub fn sweep_expired(&mut self, now: DateTime<Utc>) -> usize {
        let mut removed = 0;
        while let Some((key, stamp)) = self.order.front() {
            match self.entries.get(key) {
                Some(entry) if entry.stamp == *stamp => {
                    if !self.is_stale(entry, now) {
                        break;
                    }
                    debug!(key = ?key, "Cache entry expired");
                    self.entries.remove(key);
                    removed += 1;
                }
                // superseded by a later touch, or already removed
                _ => {}
            }
            self.order.pop_front();
        }
        removed
    }

    /// Evict the least recently touched entry.
    pub fn evict_oldest(&mut self) -> Option<K> {
        while let Some((key, stamp)) = self.order.pop_front() {
            if self.entries.get(&key).map(|entry| entry.stamp) == Some(stamp) {
                self.entries.remove(&key);
                debug!(key = ?key, "Cache entry evicted (capacity)");
                return Some(key);
            }
        }
        None
    }

    fn is_stale(&self, entry: &CacheEntry<V>, now: DateTime<Utc>) -> bool {
        now - entry.touched_at > self.max_age
    }

    fn is_expired(&self, key: &K, now: DateTime<Utc>) -> Option<bool> {
        self.entries.get(key).map(|entry| self.is_stale(entry, now))
    }

    fn bump_stamp(&mut self) -> u64 {
        let stamp = self.next_stamp;
        self.next_stamp += 1;
        stamp
    }

    fn compact(&mut self) {
        if self.order.len() <= 2 * self.entries.len() + 16 {
            return;
        }
        let entries = &self.entries;
        self.order
            .retain(|(key, stamp)| entries.get(key).map(|entry| entry.stamp) == Some(*stamp));
    }
}
