// envdecl: Typed Environment Variable Declarations
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point of the demo service.
//!
//! ```text
//! cli::parse() --> Logging --> declare --> initialize
//!   text: invalid --> stderr summary, exit 1 | valid --> values on stdout
//!   json: report on stdout, exit 1 when invalid
//! ```

use std::cell::Cell;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::Context;
use envdecl::cli::{self, Cli, OutputFormat};
use envdecl::logging::init_logging;
use envdecl::report::render_json;
use envdecl::{
    Declaration, EnumMember, Environment, InitializeOptions, KubernetesAddressDeclaration,
    Optional,
};
use url::Url;

fn main() -> ExitCode {
    let cli = cli::parse();

    let _log_guard = match init_logging(&cli.global.to_log_config()) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Verbosity {
    Error,
    Warn,
    Info,
    Debug,
}

impl Verbosity {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        }
    }
}

/// Variables of the sample service.
struct Service {
    cdn_url: Declaration<Url>,
    earth_atom_count: Declaration<i128, Optional>,
    grpc_timeout: Declaration<Duration, Optional>,
    debug: Declaration<bool>,
    log_level: Declaration<Verbosity>,
    port: Declaration<u16>,
    read_dsn: Declaration<String>,
    redis_primary: KubernetesAddressDeclaration,
    sample_ratio: Declaration<f64, Optional>,
    session_key: Declaration<Vec<u8>>,
    weight: Declaration<i64>,
}

impl Service {
    fn declare(env: &Environment) -> envdecl::Result<Self> {
        Ok(Self {
            cdn_url: env
                .url("CDN_URL", "CDN to use when serving static assets")
                .protocols(["http", "https"])
                .declare()?,
            earth_atom_count: env
                .big_integer("EARTH_ATOM_COUNT", "number of atoms on earth")
                .optional()
                .declare()?,
            grpc_timeout: env
                .duration("GRPC_TIMEOUT", "gRPC request timeout")
                .optional()
                .declare()?,
            debug: env
                .boolean("DEBUG", "enable or disable debugging features")
                .default(false)
                .declare()?,
            log_level: env
                .enumeration(
                    "LOG_LEVEL",
                    "the minimum log level to record",
                    vec![
                        EnumMember::new("error", Verbosity::Error, "errors only"),
                        EnumMember::new("warn", Verbosity::Warn, "warnings and errors"),
                        EnumMember::new("info", Verbosity::Info, "information and above"),
                        EnumMember::new("debug", Verbosity::Debug, "everything"),
                    ],
                )
                .default(Verbosity::Info)
                .declare()?,
            port: env
                .network_port_number("PORT", "listen port for the HTTP server")
                .default(8080)
                .declare()?,
            read_dsn: env
                .string("READ_DSN", "database connection string for read-models")
                .declare()?,
            redis_primary: env.kubernetes_address("redis-primary").declare()?,
            sample_ratio: env
                .number("SAMPLE_RATIO", "ratio of requests to sample")
                .range(0.0..=1.0)
                .optional()
                .declare()?,
            session_key: env
                .binary("SESSION_KEY", "session token signing key")
                .sensitive(true)
                .declare()?,
            weight: env
                .integer("WEIGHT", "weighting for this node")
                .range(0..)
                .declare()?,
        })
    }

    fn print(&self) -> envdecl::Result<()> {
        let optional = |value: Option<String>| value.unwrap_or_else(|| "-".to_string());

        println!("CDN_URL            {}", self.cdn_url.value()?);
        println!(
            "EARTH_ATOM_COUNT   {}",
            optional(self.earth_atom_count.value()?.map(|n| n.to_string()))
        );
        println!(
            "GRPC_TIMEOUT       {}",
            optional(self.grpc_timeout.value()?.map(|d| format!("{d:?}")))
        );
        println!("DEBUG              {}", self.debug.value()?);
        println!("LOG_LEVEL          {}", self.log_level.value()?.as_str());
        println!("PORT               {}", self.port.value()?);
        println!("READ_DSN           {}", self.read_dsn.value()?);
        println!("REDIS_PRIMARY      {}", self.redis_primary.value()?);
        println!(
            "SAMPLE_RATIO       {}",
            optional(self.sample_ratio.value()?.map(|r| r.to_string()))
        );
        println!("SESSION_KEY        {} bytes", self.session_key.value()?.len());
        println!("WEIGHT             {}", self.weight.value()?);
        Ok(())
    }
}

fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let env = Environment::new();
    let service = Service::declare(&env).context("failed to declare the service environment")?;
    let options = InitializeOptions::new().with_source(cli.global.to_source());

    match cli.format {
        OutputFormat::Text => {
            // exits with a summary on stderr when anything is invalid
            env.initialize(options);
            service.print()?;
            Ok(ExitCode::SUCCESS)
        }
        OutputFormat::Json => {
            let is_valid = Cell::new(true);
            env.initialize(options.on_invalid(|_| is_valid.set(false)));
            println!("{}", render_json(&env.results())?);
            if is_valid.get() {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::FAILURE)
            }
        }
    }
}
