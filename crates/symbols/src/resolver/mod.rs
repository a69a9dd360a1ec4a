//! Resolution of canonical keys against the broker universe.
//!
//! Strategies run strictly in this order and the first success wins:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │ 1. Exact        "eurusd"  -> "EURUSD"       (ignoring case)  │
//! │ 2. Suffix       "EURUSD"  -> "EURUSD.c"     (shortest wins)  │
//! │ 3. Alias        "GOLD"    -> "XAUUSD.iux"   (table order)    │
//! │ 4. Substring    "GOLD"    -> "SPOTGOLD"     (prefix/suffix)  │
//! └──────────────────────────────────────────────────────────────┘
//!                             │ miss
//!                             ▼
//!                    SymbolError::NotFound
//! ```
//!
//! Precision comes first: exact identity is trusted before decorated names,
//! decorated names before aliases, and the loose substring scan is last.

mod engine;

pub use engine::resolve;
