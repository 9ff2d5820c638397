//! Actor Model: runs a typewriter on its own thread.
//!
//! The engine is single-threaded and clock-driven. For hosts that simply
//! want frames as they happen, [`TypewriterActor`] owns the engine on a
//! dedicated ticker thread and streams frames over a crossbeam channel:
//!
//! ```text
//! ┌────────────────┐        Frame         ┌──────────────┐
//! │ Ticker Thread  │ ───────────────────▶ │  Main Loop   │
//! │  (Typewriter)  │ ◀─────────────────── │  (renders)   │
//! └────────────────┘    stop (on drop)    └──────────────┘
//! ```

mod ticker;

pub use ticker::TypewriterActor;
