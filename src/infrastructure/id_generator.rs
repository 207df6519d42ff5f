// ID Generator - Snowflake-like ids for entities created at runtime
// 64-bit layout: [timestamp:42][node:10][sequence:12], rendered as a decimal string

use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::{AppError, AppResult};

const NODE_BITS: u64 = 10;
const SEQUENCE_BITS: u64 = 12;
const TIMESTAMP_SHIFT: u64 = NODE_BITS + SEQUENCE_BITS;
const SEQUENCE_MASK: u64 = (1 << SEQUENCE_BITS) - 1;
const TIMESTAMP_MASK: u64 = 0x3FF_FFFF_FFFF;

/// Node ids must stay below this bound to fit their 10 bits
pub const NODE_LIMIT: u16 = 1 << NODE_BITS;

/// Generates strictly increasing ids; two calls on one generator never collide
#[derive(Debug)]
pub struct IdGenerator {
    node_id: u16,
    last_id: AtomicU64,
}

impl IdGenerator {
    pub fn new(node_id: u16) -> AppResult<Self> {
        if node_id >= NODE_LIMIT {
            return Err(AppError::IdGeneration(format!(
                "node id {} must be less than {}",
                node_id, NODE_LIMIT
            )));
        }
        Ok(Self {
            node_id,
            last_id: AtomicU64::new(0),
        })
    }

    pub fn next_raw(&self) -> u64 {
        let now = chrono::Utc::now().timestamp_millis().max(0) as u64;
        let node_bits = (self.node_id as u64) << SEQUENCE_BITS;
        let candidate = ((now & TIMESTAMP_MASK) << TIMESTAMP_SHIFT) | node_bits;

        let previous = self
            .last_id
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                Some(Self::next_after(last, candidate, node_bits))
            })
            .unwrap_or_else(|last| last);
        Self::next_after(previous, candidate, node_bits)
    }

    // Same millisecond (or a clock step backwards) bumps the sequence. A full sequence
    // moves on to the next millisecond so the node bits are never touched.
    fn next_after(last: u64, candidate: u64, node_bits: u64) -> u64 {
        if candidate > last {
            candidate
        } else if last & SEQUENCE_MASK == SEQUENCE_MASK {
            ((Self::extract_timestamp(last) + 1) << TIMESTAMP_SHIFT) | node_bits
        } else {
            last + 1
        }
    }

    pub fn next_id(&self) -> String {
        self.next_raw().to_string()
    }

    pub fn node_id(&self) -> u16 {
        self.node_id
    }

    pub fn extract_timestamp(id: u64) -> u64 {
        id >> TIMESTAMP_SHIFT
    }

    pub fn extract_node_id(id: u64) -> u16 {
        ((id >> SEQUENCE_BITS) & (NODE_LIMIT as u64 - 1)) as u16
    }

    pub fn extract_sequence(id: u64) -> u16 {
        (id & SEQUENCE_MASK) as u16
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_id_generation() {
        let generator = IdGenerator::new(123).unwrap();

        let ids: Vec<u64> = (0..1000).map(|_| generator.next_raw()).collect();

        let unique: HashSet<_> = ids.iter().collect();
        assert_eq!(unique.len(), ids.len());
        assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_node_extraction() {
        let generator = IdGenerator::new(500).unwrap();
        let id = generator.next_raw();

        assert_eq!(IdGenerator::extract_node_id(id), 500);
        assert_eq!(generator.node_id(), 500);
        assert!(IdGenerator::extract_timestamp(id) > 0);
    }

    #[test]
    fn test_sequence_increments_within_a_millisecond() {
        let generator = IdGenerator::new(1).unwrap();
        let first = generator.next_raw();
        let second = generator.next_raw();
        if IdGenerator::extract_timestamp(first) == IdGenerator::extract_timestamp(second) {
            assert_eq!(
                IdGenerator::extract_sequence(second),
                IdGenerator::extract_sequence(first) + 1
            );
        }
    }

    #[test]
    fn test_full_sequence_rolls_into_next_millisecond() {
        let generator = IdGenerator::new(500).unwrap();
        let ids: Vec<u64> = (0..20_000).map(|_| generator.next_raw()).collect();

        assert!(ids.iter().all(|id| IdGenerator::extract_node_id(*id) == 500));
        assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_node_id_out_of_range() {
        assert!(matches!(IdGenerator::new(1024), Err(AppError::IdGeneration(_))));
    }
}
