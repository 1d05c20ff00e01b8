//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter    | Implements      | Connects to              |
//! |------------|-----------------|--------------------------|
//! | `hardware` | InputEdgeSource | Button GPIOs (debounced) |
//! |            | OutputSink      | LED PWM channels         |
//! | `log_sink` | EventSink       | Serial log output        |

pub mod hardware;
pub mod log_sink;
