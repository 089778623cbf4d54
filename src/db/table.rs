// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Keyed record table with stable insertion order.
//!
//! Records live in a `DashMap` keyed by ID, so single-record reads and writes
//! from concurrent handlers only contend on one shard. Every row carries the
//! sequence number it was first inserted with; scans sort on it, so listings
//! come back in insertion order and replacing a record keeps its position.

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};

struct Row<T> {
    seq: u64,
    record: T,
}

pub struct Table<T> {
    name: &'static str,
    rows: DashMap<String, Row<T>>,
    next_seq: AtomicU64,
}

impl<T: Clone> Table<T> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            rows: DashMap::new(),
            next_seq: AtomicU64::new(0),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<T> {
        self.rows.get(id).map(|row| row.record.clone())
    }

    /// Store a record under `id`. An existing record is replaced in place.
    pub fn insert(&self, id: String, record: T) {
        match self.rows.entry(id) {
            Entry::Occupied(mut entry) => {
                tracing::debug!(table = self.name, id = %entry.key(), "Record replaced");
                entry.get_mut().record = record;
            }
            Entry::Vacant(entry) => {
                let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
                tracing::debug!(table = self.name, id = %entry.key(), "Record inserted");
                entry.insert(Row { seq, record });
            }
        }
    }

    /// Mutate the record under `id` in place and return the result.
    ///
    /// Returns `None` (and does nothing) when the ID is unknown.
    pub fn update<F>(&self, id: &str, apply: F) -> Option<T>
    where
        F: FnOnce(&mut T),
    {
        let mut row = self.rows.get_mut(id)?;
        apply(&mut row.record);
        tracing::debug!(table = self.name, id, "Record updated");
        Some(row.record.clone())
    }

    /// All records matching `predicate`, in insertion order.
    pub fn filter<P>(&self, predicate: P) -> Vec<T>
    where
        P: Fn(&T) -> bool,
    {
        let mut matches: Vec<(u64, T)> = self
            .rows
            .iter()
            .filter(|row| predicate(&row.record))
            .map(|row| (row.seq, row.record.clone()))
            .collect();
        matches.sort_unstable_by_key(|(seq, _)| *seq);
        matches.into_iter().map(|(_, record)| record).collect()
    }

    /// First record (in insertion order) matching `predicate`.
    pub fn find<P>(&self, predicate: P) -> Option<T>
    where
        P: Fn(&T) -> bool,
    {
        self.rows
            .iter()
            .filter(|row| predicate(&row.record))
            .min_by_key(|row| row.seq)
            .map(|row| row.record.clone())
    }

    pub fn all(&self) -> Vec<T> {
        self.filter(|_| true)
    }
}
