//! Fixed-size hash table with separate chaining.
//!
//! Buckets are chosen with the polynomial [`RollingHash::DEFAULT`] over the
//! key's UTF-8 bytes, so bucket assignment is the same on every run and
//! every platform.

use std::fmt;

use crate::RollingHash;

#[derive(Debug, Clone)]
pub struct HashTable<V> {
    buckets: Vec<Vec<(String, V)>>,
    len: usize,
}

impl<V> HashTable<V> {
    /// Create a table with `size` buckets. A size of zero is raised to one.
    pub fn new(size: usize) -> Self {
        let size = if size == 0 {
            log::warn!("HashTable::new: bucket count 0 raised to 1");
            1
        } else {
            size
        };

        let mut buckets = Vec::with_capacity(size);
        buckets.resize_with(size, Vec::new);
        Self { buckets, len: 0 }
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn bucket_of(&self, key: &str) -> usize {
        (RollingHash::DEFAULT.hash(key.as_bytes()) % self.buckets.len() as u64) as usize
    }

    /// Insert or update `key`. Returns the previous value if there was one.
    pub fn insert(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        let key = key.into();
        let idx = self.bucket_of(&key);
        let bucket = &mut self.buckets[idx];

        if let Some((_, slot)) = bucket.iter_mut().find(|(k, _)| *k == key) {
            return Some(std::mem::replace(slot, value));
        }

        bucket.push((key, value));
        self.len += 1;
        None
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.buckets[self.bucket_of(key)]
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn remove(&mut self, key: &str) -> Option<V> {
        let idx = self.bucket_of(key);
        let bucket = &mut self.buckets[idx];
        let pos = bucket.iter().position(|(k, _)| k == key)?;
        self.len -= 1;
        Some(bucket.remove(pos).1)
    }

    /// (bucket, key, value) in bucket order, then insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str, &V)> {
        self.buckets
            .iter()
            .enumerate()
            .flat_map(|(i, bucket)| bucket.iter().map(move |(k, v)| (i, k.as_str(), v)))
    }
}

impl<V: fmt::Display> fmt::Display for HashTable<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "hash table is empty");
        }

        let headers = ["Bucket", "Key", "Value"];
        let rows: Vec<[String; 3]> = self
            .iter()
            .map(|(i, k, v)| [i.to_string(), k.to_string(), v.to_string()])
            .collect();

        let mut widths = headers.map(|h| h.chars().count());
        for row in &rows {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = (*w).max(cell.chars().count());
            }
        }

        let rule = |fill: char| -> String {
            let mut line = String::from("+");
            for w in widths {
                line.extend(std::iter::repeat_n(fill, w + 2));
                line.push('+');
            }
            line
        };
        let line = |cells: &[&str]| -> String {
            let mut out = String::from("|");
            for (cell, w) in cells.iter().zip(widths) {
                let pad = w - cell.chars().count();
                out.push(' ');
                out.push_str(cell);
                out.extend(std::iter::repeat_n(' ', pad + 1));
                out.push('|');
            }
            out
        };

        writeln!(f, "{}", rule('-'))?;
        writeln!(f, "{}", line(&headers[..]))?;
        write!(f, "{}", rule('='))?;
        for row in &rows {
            let cells = [row[0].as_str(), row[1].as_str(), row[2].as_str()];
            write!(f, "\n{}\n{}", line(&cells[..]), rule('-'))?;
        }
        Ok(())
    }
}
