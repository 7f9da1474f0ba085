// envdecl: Typed Environment Variable Declarations
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for declarations through the public API.

use std::time::Duration;

use envdecl::{
    BooleanLiterals, Encoding, EnumMember, EnvSource, Environment, Error, InitializeOptions,
    KubernetesAddress, SpecError,
};
use url::Url;

fn initialize(env: &Environment, source: EnvSource) {
    env.initialize(
        InitializeOptions::new()
            .with_source(source)
            .on_invalid(|_| {}),
    );
}

// =============================================================================
// Presence
// =============================================================================

#[test]
fn required_optional_and_default() {
    let env = Environment::new();
    let timeout = env
        .duration("GRPC_TIMEOUT", "timeout")
        .optional()
        .declare()
        .unwrap();
    let debug = env
        .boolean("DEBUG", "debugging")
        .default(false)
        .declare()
        .unwrap();
    let atoms = env
        .big_integer("EARTH_ATOM_COUNT", "atoms")
        .optional()
        .declare()
        .unwrap();
    initialize(
        &env,
        EnvSource::empty().with("EARTH_ATOM_COUNT", "0x1E240"),
    );

    let timeout: Option<Duration> = timeout.value().unwrap();
    let debug: bool = debug.value().unwrap();
    let atoms: Option<i128> = atoms.value().unwrap();
    assert_eq!(timeout, None);
    assert!(!debug);
    assert_eq!(atoms, Some(123_456));
}

#[test]
fn variable_info_describes_declarations() {
    let env = Environment::new();
    env.network_port_number("PORT", "listen port")
        .default(8080)
        .declare()
        .unwrap();
    env.binary("SESSION_KEY", "signing key")
        .default(b"secret".to_vec())
        .sensitive(true)
        .declare()
        .unwrap();

    let variables = env.variables();
    let port = &variables[0];
    let key = &variables[1];

    assert_eq!(port.name(), "PORT");
    assert!(port.is_optional());
    assert_eq!(port.examples()[0].canonical, "8080");
    assert_eq!(port.examples()[0].description, "(default)");
    assert!(key.is_sensitive());
    assert!(key.examples().iter().all(|example| example.canonical != "c2VjcmV0"));
}

// =============================================================================
// Scalars
// =============================================================================

#[test]
fn scalar_values() {
    let env = Environment::new();
    let cdn = env
        .url("CDN_URL", "cdn")
        .protocols(["http", "https"])
        .declare()
        .unwrap();
    let key = env
        .binary("SESSION_KEY", "key")
        .encoding(Encoding::Hex)
        .declare()
        .unwrap();
    let timeout = env.duration("GRPC_TIMEOUT", "timeout").declare().unwrap();
    let ratio = env
        .number("SAMPLE_RATIO", "ratio")
        .range(0.0..=1.0)
        .declare()
        .unwrap();
    initialize(
        &env,
        EnvSource::empty()
            .with("CDN_URL", "https://cdn.example.org/assets/")
            .with("SESSION_KEY", "cafe")
            .with("GRPC_TIMEOUT", "PT1M30S")
            .with("SAMPLE_RATIO", "0.25"),
    );

    assert_eq!(
        cdn.value().unwrap(),
        Url::parse("https://cdn.example.org/assets/").unwrap()
    );
    assert_eq!(key.value().unwrap(), [0xca, 0xfe]);
    assert_eq!(timeout.value().unwrap(), Duration::from_secs(90));
    assert_eq!(ratio.value().unwrap().to_bits(), 0.25_f64.to_bits());
}

#[test]
fn range_messages() {
    let env = Environment::new();
    let ratio = env
        .number("SAMPLE_RATIO", "ratio")
        .range(0.0..1.0)
        .declare()
        .unwrap();
    let weight = env
        .integer("WEIGHT", "weighting")
        .range(..=10)
        .declare()
        .unwrap();
    initialize(
        &env,
        EnvSource::empty()
            .with("SAMPLE_RATIO", "1")
            .with("WEIGHT", "11"),
    );

    insta::assert_snapshot!(
        ratio.value().unwrap_err().to_string(),
        @"value of SAMPLE_RATIO is invalid: must be >= 0 and < 1"
    );
    insta::assert_snapshot!(
        weight.value().unwrap_err().to_string(),
        @"value of WEIGHT is invalid: must be <= 10"
    );
}

#[test]
fn enumeration_and_boolean_literals() {
    #[derive(Debug, Clone, PartialEq)]
    enum Region {
        Eu,
        Us,
    }

    let env = Environment::new();
    let region = env
        .enumeration(
            "REGION",
            "deployment region",
            vec![
                EnumMember::new("eu", Region::Eu, "Europe"),
                EnumMember::new("us", Region::Us, "United States"),
            ],
        )
        .declare()
        .unwrap();
    let verbose = env
        .boolean("VERBOSE", "verbose output")
        .literals(BooleanLiterals::new(["on", "yes"], ["off", "no"]))
        .declare()
        .unwrap();
    initialize(
        &env,
        EnvSource::empty().with("REGION", "us").with("VERBOSE", "off"),
    );

    assert_eq!(region.value().unwrap(), Region::Us);
    assert!(!verbose.value().unwrap());
}

// =============================================================================
// Declaration errors
// =============================================================================

#[test]
fn declaration_errors_name_the_variable() {
    let env = Environment::new();
    let err = env
        .enumeration(
            "REGION",
            "deployment region",
            vec![
                EnumMember::new("eu", 1, "Europe"),
                EnumMember::new("eu", 2, "Europe again"),
            ],
        )
        .declare()
        .unwrap_err();

    assert_eq!(err.name(), "REGION");
    assert_eq!(
        err,
        Error::Spec {
            name: "REGION".to_string(),
            cause: SpecError::ReusedLiteral {
                literal: "eu".to_string()
            },
        }
    );
}

// =============================================================================
// Kubernetes
// =============================================================================

#[test]
fn kubernetes_address() {
    let env = Environment::new();
    let redis = env
        .kubernetes_address("redis-primary")
        .declare()
        .unwrap();
    initialize(
        &env,
        EnvSource::empty()
            .with("REDIS_PRIMARY_SERVICE_HOST", "10.0.0.11")
            .with("REDIS_PRIMARY_SERVICE_PORT", "6379"),
    );

    let address = redis.value().unwrap();
    assert_eq!(address, KubernetesAddress::new("10.0.0.11", 6379));
    assert_eq!(redis.host().name(), "REDIS_PRIMARY_SERVICE_HOST");
    assert_eq!(redis.port().name(), "REDIS_PRIMARY_SERVICE_PORT");
}
