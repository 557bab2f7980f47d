#![no_std]

//! `RingDeque`: a growable double-ended queue on a circular buffer.
//!
//! `RingDeque` keeps its elements in a contiguous circular window of a single
//! heap block, so removing from the front never shifts data. Both ends grow
//! and shrink in amortized O(1); arbitrary positions are reached in O(1) and
//! edited in O(min(k, n − k)) by shifting whichever side of the target is
//! shorter.
//!
//! This crate is `no_std` compatible (it requires `alloc`).
//!
//! # Performance Characteristics
//!
//! ## Time Complexity
//! - `push_front()`, `push_back()`: O(1) amortized - may trigger doubling growth
//! - `pop_front()`, `pop_back()`: O(1) - constant time removal
//! - `get()`, indexing: O(1) - direct slot lookup modulo capacity
//! - `insert(k)`, `remove(k)`: O(min(k, n − k)) - the shorter side shifts
//! - Iterator operations: O(n) - linear traversal, O(1) `nth()`
//!
//! ## Space Complexity
//! - One allocation of `capacity` element slots; no per-element overhead
//! - Growth doubles the capacity (minimum 2), moving each element once
//!
//! # Failure Contract
//!
//! The only externally reported failure is allocation: operations that may
//! acquire memory (`with_capacity`, the pushes, `insert`, `try_clone`)
//! return `Result` and leave the deque untouched when they fail. Removal and
//! access never fail; out-of-range lookups return `None`, and only the
//! indexing sugar (`deque[i]`) panics.
//!
//! ```
//! use ringdeque::RingDeque;
//!
//! let mut deque = RingDeque::new();
//! deque.push_back(2).unwrap();
//! deque.push_back(3).unwrap();
//! deque.push_front(1).unwrap();
//!
//! assert_eq!(deque.len(), 3);
//! assert_eq!(deque[1], 2);
//!
//! deque.insert(1, 9).unwrap();
//! assert_eq!(deque.iter().copied().collect::<Vec<_>>(), [1, 9, 2, 3]);
//!
//! assert_eq!(deque.remove(1), Some(9));
//! assert_eq!(deque.pop_front(), Some(1));
//! assert_eq!(deque.pop_back(), Some(3));
//! ```
//!
//! # Iterator Support
//!
//! `RingDeque` implements standard Rust iterator patterns in both
//! directions; the cursors wrap around the end of the backing block
//! transparently:
//!
//! ```
//! use ringdeque::RingDeque;
//!
//! let deque: RingDeque<i32> = (0..5).collect();
//!
//! let forward: Vec<i32> = deque.iter().copied().collect();
//! let backward: Vec<i32> = deque.iter().rev().copied().collect();
//! assert_eq!(forward, [0, 1, 2, 3, 4]);
//! assert_eq!(backward, [4, 3, 2, 1, 0]);
//!
//! let owned: Vec<i32> = deque.into_iter().collect();
//! assert_eq!(owned, [0, 1, 2, 3, 4]);
//! ```

extern crate alloc;

mod deque;
mod error;
mod iter;
mod raw;

// Re-export public types and traits
pub use deque::RingDeque;
pub use error::RingDequeError;
pub use iter::{RingDequeIntoIter, RingDequeIter, RingDequeIterMut};
