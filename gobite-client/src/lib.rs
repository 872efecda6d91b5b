//! Gobite table-side ordering client
//!
//! # Architecture
//!
//! A diner scans the table link, browses the menu, fills a cart and checks
//! out. All durable state lives in one [`SessionStore`] backed by an embedded
//! redb file:
//!
//! - **Session** (`session`): identity, cart, table binding, order history
//! - **Cart rules** (`cart`): line identity, merging, money
//! - **Auth** (`auth`): simulated one-time-code sign-in
//! - **Flows** (`flows`): cancellable checkout latency and redirect countdown
//!
//! # Module layout
//!
//! ```text
//! gobite-client/src/
//! ├── core/          # config, errors
//! ├── session/       # SessionStore + redb storage
//! ├── cart/          # line identity, merge rules, money
//! ├── auth/          # OTP sign-in flow
//! ├── flows/         # timer-driven flows
//! └── utils/         # logging, environment
//! ```

pub mod auth;
pub mod cart;
pub mod core;
pub mod flows;
pub mod session;
pub mod utils;

// Re-export public types
pub use auth::{OtpFlow, OtpStep};
pub use core::{AuthError, Config, FlowError, StoreError, StoreResult};
pub use flows::{Countdown, CountdownOutcome, cancellable_delay, submit_order};
pub use session::{KvStorage, RedbStorage, SessionStore, StorageError};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};
pub use utils::{load_dotenv, setup_environment};
