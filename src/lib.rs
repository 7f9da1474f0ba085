// envdecl: Typed Environment Variable Declarations
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                     application
//!                          |
//!          env.integer(..).range(..).declare()
//!                          v
//!              ,-----------------------,
//!              |      declaration      |
//!              |  kinds, presence,     |
//!              |  Declaration::value   |
//!              '---+---------------+---'
//!                  |               |
//!                  v               v
//!              schema          environment
//!           scalar / enum   registry, lifecycle,
//!           ranges          InitializeOptions
//!                  |               |
//!                  +-------+-------+
//!                          v
//!                      variable
//!               resolve(EnvSource) -> Result
//!                          |
//!                          v
//!                       report
//!              summary table, JSON, quoting
//!
//!   +-----------------------------------------+
//!   |  foundation   error, maybe, source      |
//!   +-----------------------------------------+
//!   |  demo binary  cli, logging              |
//!   +-----------------------------------------+
//! ```
//!
//! # Example
//!
//! ```
//! use envdecl::{EnvSource, Environment, InitializeOptions};
//!
//! let env = Environment::new();
//! let port = env
//!     .network_port_number("PORT", "listen port for the HTTP server")
//!     .default(8080)
//!     .declare()?;
//! let weight = env.integer("WEIGHT", "weighting for this node").declare()?;
//!
//! env.initialize(
//!     InitializeOptions::new().with_source(EnvSource::empty().with("WEIGHT", "123456")),
//! );
//!
//! assert_eq!(port.value()?, 8080);
//! assert_eq!(weight.value()?, 123_456);
//! # Ok::<(), envdecl::Error>(())
//! ```

pub mod cli;
pub mod declaration;
pub mod environment;
pub mod error;
pub mod logging;
pub mod maybe;
pub mod report;
pub mod schema;
pub mod source;
pub mod variable;

pub use declaration::binary::Encoding;
pub use declaration::boolean::BooleanLiterals;
pub use declaration::kubernetes::{
    KubernetesAddress, KubernetesAddressDeclaration, KubernetesAddressDeclarator,
};
pub use declaration::{Declaration, Declarator, Kind, Optional, Presence, Required};
pub use environment::{DefaultHandler, EXIT_CODE, Environment, InitializeOptions, InvalidEnvironment};
pub use error::{Error, Result, SpecError, ValueError};
pub use maybe::Maybe;
pub use schema::EnumMember;
pub use source::EnvSource;
pub use variable::{Example, Value, VariableInfo, VariableResult};
