// Design Patterns: Singleton, Builder, Strategy
// Library side of the pattern demos. Each module is paired with a binary
// under src/bin that walks through it on the console.

pub mod builder;
pub mod config;
pub mod logging;
pub mod singleton;
pub mod strategy;

pub mod examples {
    //! # Design Patterns Walkthrough
    //!
    //! ## Pattern 1: Singleton
    //! - Lazy, thread-safe construction with `OnceLock`
    //! - Mutex-serialized state machine on the shared handle
    //! - Owned `Registry<T>` for dependency injection
    //!
    //! ## Pattern 2: Builder
    //! - Chaining `&mut self` builders behind a trait
    //! - Director with preset recipes
    //!
    //! ## Pattern 3: Strategy
    //! - Trait objects selected at runtime from a channel name
    //! - Fallback strategy for unknown channels
    //!
    //! Run individual examples with:
    //! ```bash
    //! cargo run --bin p1_singleton
    //! cargo run --bin p2_builder
    //! cargo run --bin p3_strategy
    //! ```
}
