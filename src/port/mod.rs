//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports are the seams between the normalization logic and the two external
//! collaborators: the indexing service and the contract runtime.
//!
//! ```text
//!                 ┌──────────────────────────┐
//!                 │   Domain + Port traits   │
//!                 └──────────────────────────┘
//!                    ▲          ▲          ▲
//!                    │          │          │
//!            ┌───────────┐ ┌──────────┐ ┌────────────┐
//!            │ Subgraph  │ │Multicall │ │ Prediction │
//!            │  Adapter  │ │ Adapter  │ │  Contract  │
//!            └───────────┘ └──────────┘ └────────────┘
//! ```

pub mod outbound;
