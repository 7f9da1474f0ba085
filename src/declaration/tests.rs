// envdecl: Typed Environment Variable Declarations
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::time::Duration;

use super::binary::Encoding;
use super::boolean::BooleanLiterals;
use super::duration::{format_duration, parse_duration};
use super::kubernetes::KubernetesAddress;
use crate::environment::{Environment, InitializeOptions};
use crate::error::{Error, SpecError, ValueError};
use crate::schema::EnumMember;
use crate::source::EnvSource;

fn initialize(env: &Environment, source: EnvSource) {
    env.initialize(
        InitializeOptions::new()
            .with_source(source)
            .on_invalid(|_| {}),
    );
}

fn cause(err: Error) -> ValueError {
    match err {
        Error::Validation { cause, .. } => cause,
        other => panic!("expected a validation error, got {other:?}"),
    }
}

fn spec_cause(err: Error) -> SpecError {
    match err {
        Error::Spec { cause, .. } => cause,
        other => panic!("expected a spec error, got {other:?}"),
    }
}

// --- Lifecycle through declarations ---

#[test]
fn test_value_before_initialize() {
    let env = Environment::new();
    let weight = env.integer("WEIGHT", "weighting").declare().unwrap();

    let err = weight.value().unwrap_err();
    assert_eq!(
        err,
        Error::Uninitialized {
            name: "WEIGHT".to_string()
        }
    );
}

#[test]
fn test_declaration_info() {
    let env = Environment::new();
    let weight = env
        .integer("WEIGHT", "weighting")
        .sensitive(true)
        .declare()
        .unwrap();

    assert_eq!(weight.info().name(), "WEIGHT");
    assert!(weight.info().is_sensitive());
}

#[test]
fn test_declare_after_initialize() {
    let env = Environment::new();
    initialize(&env, EnvSource::empty());

    let err = env.string("LATE", "declared too late").declare().unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"LATE can not be defined after the environment is initialized."
    );
}

#[test]
fn test_required_default_and_optional_shapes() {
    let env = Environment::new();
    let port = env
        .network_port_number("PORT", "listen port")
        .default(8080)
        .declare()
        .unwrap();
    let ratio = env
        .number("SAMPLE_RATIO", "sampling")
        .optional()
        .declare()
        .unwrap();
    let dsn = env.string("READ_DSN", "database").declare().unwrap();
    initialize(&env, EnvSource::empty());

    let port: u16 = port.value().unwrap();
    let ratio: Option<f64> = ratio.value().unwrap();
    assert_eq!(port, 8080);
    assert_eq!(ratio, None);
    assert_eq!(
        dsn.value().unwrap_err(),
        Error::Undefined {
            name: "READ_DSN".to_string()
        }
    );
}

#[test]
fn test_empty_value_counts_as_unset() {
    let env = Environment::new();
    let port = env
        .network_port_number("PORT", "listen port")
        .default(8080)
        .declare()
        .unwrap();
    initialize(&env, EnvSource::empty().with("PORT", ""));

    assert_eq!(port.value().unwrap(), 8080);
}

#[test]
fn test_optional_keeps_default() {
    let env = Environment::new();
    let weight = env
        .integer("WEIGHT", "weighting")
        .default(5)
        .optional()
        .declare()
        .unwrap();
    let ratio = env
        .number("RATIO", "ratio")
        .optional()
        .declare()
        .unwrap();
    initialize(&env, EnvSource::empty());

    assert_eq!(weight.value().unwrap(), Some(5));
    assert_eq!(ratio.value().unwrap(), None);
}

// --- Numeric ---

#[test]
fn test_integer_literal_forms() {
    let cases = [
        ("123456", 123_456),
        ("-123456", -123_456),
        ("1.23456e+5", 123_456),
        ("0x1E240", 123_456),
        ("0o361100", 123_456),
        ("0b11110001001000000", 123_456),
    ];
    for (raw, expected) in cases {
        let env = Environment::new();
        let weight = env.integer("WEIGHT", "weighting").declare().unwrap();
        initialize(&env, EnvSource::empty().with("WEIGHT", raw));
        assert_eq!(weight.value().unwrap(), expected, "{raw}");
    }
}

#[test]
fn test_integer_rejections() {
    let cases = [
        ("1.5", ValueError::NotInteger),
        ("heavy", ValueError::NotInteger),
        ("0x-1", ValueError::NotInteger),
    ];
    for (raw, expected) in cases {
        let env = Environment::new();
        let weight = env.integer("WEIGHT", "weighting").declare().unwrap();
        initialize(&env, EnvSource::empty().with("WEIGHT", raw));
        assert_eq!(cause(weight.value().unwrap_err()), expected, "{raw}");
    }
}

#[test]
fn test_integer_range() {
    let env = Environment::new();
    let weight = env
        .integer("WEIGHT", "weighting")
        .range(1..=100)
        .declare()
        .unwrap();
    initialize(&env, EnvSource::empty().with("WEIGHT", "101"));

    let err = weight.value().unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"value of WEIGHT is invalid: must be between 1 and 100");
}

#[test]
fn test_empty_range_is_a_declaration_error() {
    let env = Environment::new();
    #[allow(clippy::reversed_empty_ranges)]
    let err = env
        .integer("WEIGHT", "weighting")
        .range(10..=1)
        .declare()
        .unwrap_err();

    insta::assert_snapshot!(
        err.to_string(),
        @"specification for WEIGHT is invalid: range [10, 1] does not contain any values."
    );
    assert!(env.variables().is_empty());
}

#[test]
fn test_big_integer_beyond_i64() {
    let env = Environment::new();
    let atoms = env
        .big_integer("EARTH_ATOM_COUNT", "atoms")
        .declare()
        .unwrap();
    initialize(
        &env,
        EnvSource::empty().with("EARTH_ATOM_COUNT", "133000000000000000000000000000000000000"),
    );

    assert_eq!(
        atoms.value().unwrap(),
        133_000_000_000_000_000_000_000_000_000_000_000_000
    );
}

#[test]
fn test_number_values() {
    let cases = [
        ("-1.5", -1.5),
        ("1.23456e+5", 123_456.0),
        ("0x1E240", 123_456.0),
        ("Infinity", f64::INFINITY),
    ];
    for (raw, expected) in cases {
        let env = Environment::new();
        let ratio = env.number("RATIO", "ratio").declare().unwrap();
        initialize(&env, EnvSource::empty().with("RATIO", raw));
        assert_eq!(ratio.value().unwrap().to_bits(), expected.to_bits(), "{raw}");
    }

    let env = Environment::new();
    let ratio = env.number("RATIO", "ratio").declare().unwrap();
    initialize(&env, EnvSource::empty().with("RATIO", "NaN"));
    assert_eq!(cause(ratio.value().unwrap_err()), ValueError::NotNumeric);
}

#[test]
fn test_number_prefixed_literal_beyond_u64() {
    let env = Environment::new();
    let ratio = env.number("RATIO", "ratio").declare().unwrap();
    let empty = env.number("EMPTY_HEX", "ratio").declare().unwrap();
    initialize(
        &env,
        EnvSource::empty()
            .with("RATIO", "0x1FFFFFFFFFFFFFFFF")
            .with("EMPTY_HEX", "0x"),
    );

    assert_eq!(ratio.value().unwrap(), 2.0_f64.powi(65));
    assert_eq!(cause(empty.value().unwrap_err()), ValueError::NotNumeric);
}

#[test]
fn test_number_nan_bound() {
    let env = Environment::new();
    let err = env
        .number("RATIO", "ratio")
        .range(f64::NAN..1.0)
        .declare()
        .unwrap_err();
    assert_eq!(spec_cause(err), SpecError::NanBound);
}

// --- Port ---

#[test]
fn test_port_rejections() {
    let cases = [
        ("70000", "must be between 1 and 65535"),
        ("0", "must be between 1 and 65535"),
        ("08080", "must not have leading zeros"),
        ("-1", "must be an unsigned integer"),
        ("80.0", "must be an unsigned integer"),
    ];
    for (raw, expected) in cases {
        let env = Environment::new();
        let port = env
            .network_port_number("PORT", "listen port")
            .declare()
            .unwrap();
        initialize(&env, EnvSource::empty().with("PORT", raw));
        assert_eq!(cause(port.value().unwrap_err()).to_string(), expected, "{raw}");
    }
}

// --- Boolean ---

#[test]
fn test_boolean_default_literals() {
    let env = Environment::new();
    let debug = env.boolean("DEBUG", "debug").declare().unwrap();
    initialize(&env, EnvSource::empty().with("DEBUG", "TRUE"));

    insta::assert_snapshot!(
        debug.value().unwrap_err().to_string(),
        @r#"value of DEBUG is invalid: expected "true" or "false""#
    );
}

#[test]
fn test_boolean_custom_literals() {
    let env = Environment::new();
    let debug = env
        .boolean("DEBUG", "debug")
        .literals(BooleanLiterals::new(["y", "yes"], ["n", "no"]))
        .default(false)
        .declare()
        .unwrap();
    let verbose = env
        .boolean("VERBOSE", "verbose")
        .literals(BooleanLiterals::new(["y", "yes"], ["n", "no"]))
        .declare()
        .unwrap();
    initialize(&env, EnvSource::empty().with("VERBOSE", "yes"));

    assert!(!debug.value().unwrap());
    assert!(verbose.value().unwrap());

    let results = env.results();
    let debug_result = results[0].result.as_ref().unwrap().as_ref().unwrap();
    assert_eq!(debug_result.verbatim(), "n");
    assert!(debug_result.is_default());
}

#[test]
fn test_boolean_literal_errors() {
    let env = Environment::new();
    let empty = env
        .boolean("EMPTY", "empty literal")
        .literals(BooleanLiterals::new(["yes", ""], ["no"]))
        .declare()
        .unwrap_err();
    let reused = env
        .boolean("REUSED", "reused literal")
        .literals(BooleanLiterals::new(["yes"], ["no", "yes"]))
        .declare()
        .unwrap_err();

    assert_eq!(spec_cause(empty), SpecError::EmptyLiteral);
    insta::assert_snapshot!(
        reused.to_string(),
        @r#"specification for REUSED is invalid: literal "yes" can not be used multiple times."#
    );
}

#[test]
fn test_boolean_default_outside_literals() {
    let env = Environment::new();
    let err = env
        .boolean("DEBUG", "debug")
        .literals(BooleanLiterals::new(["yes"], Vec::<String>::new()))
        .default(false)
        .declare()
        .unwrap_err();

    insta::assert_snapshot!(
        err.to_string(),
        @"specification for DEBUG is invalid: default value is not a member of the enumeration."
    );
    assert!(env.variables().is_empty());
}

#[test]
fn test_boolean_examples_follow_literals() {
    let env = Environment::new();
    env.boolean("DEBUG", "debug")
        .literals(BooleanLiterals::new(["on"], ["off"]))
        .default(true)
        .declare()
        .unwrap();

    let variables = env.variables();
    let canonical: Vec<&str> = variables[0]
        .examples()
        .iter()
        .map(|example| example.canonical.as_str())
        .collect();
    assert_eq!(canonical, ["on", "on", "off"]);
}

// --- Enumeration ---

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Level {
    Error,
    Info,
}

fn levels() -> Vec<EnumMember<Level>> {
    vec![
        EnumMember::new("error", Level::Error, "errors only"),
        EnumMember::new("info", Level::Info, "informational"),
    ]
}

#[test]
fn test_enumeration_values() {
    let env = Environment::new();
    let level = env
        .enumeration("LOG_LEVEL", "verbosity", levels())
        .default(Level::Info)
        .declare()
        .unwrap();
    let other = env
        .enumeration("OTHER_LEVEL", "verbosity", levels())
        .declare()
        .unwrap();
    initialize(&env, EnvSource::empty().with("OTHER_LEVEL", "debug"));

    assert_eq!(level.value().unwrap(), Level::Info);
    insta::assert_snapshot!(
        other.value().unwrap_err().to_string(),
        @r#"value of OTHER_LEVEL is invalid: expected "error" or "info""#
    );
}

#[test]
fn test_enumeration_without_members() {
    let env = Environment::new();
    let err = env
        .enumeration::<Level>("LOG_LEVEL", "verbosity", Vec::new())
        .declare()
        .unwrap_err();
    assert_eq!(spec_cause(err), SpecError::NoMembers);
}

#[test]
fn test_enumeration_default_outside_members() {
    let env = Environment::new();
    let err = env
        .enumeration("LOG_LEVEL", "verbosity", levels()[..1].to_vec())
        .default(Level::Info)
        .declare()
        .unwrap_err();

    assert_eq!(spec_cause(err), SpecError::NonMemberDefault);
}

// --- Binary ---

#[test]
fn test_binary_encodings() {
    let cases = [
        (Encoding::Base64, "Y29ucXVpc3RhZG9y"),
        (Encoding::Base64Url, "Y29ucXVpc3RhZG9y"),
        (Encoding::Hex, "636f6e717569737461646f72"),
    ];
    for (encoding, raw) in cases {
        let env = Environment::new();
        let key = env
            .binary("SESSION_KEY", "key")
            .encoding(encoding)
            .declare()
            .unwrap();
        initialize(&env, EnvSource::empty().with("SESSION_KEY", raw));
        assert_eq!(key.value().unwrap(), b"conquistador", "{encoding}");
    }
}

#[test]
fn test_binary_url_safe_without_padding() {
    assert_eq!(Encoding::Base64Url.decode("-_8").unwrap(), [0xfb, 0xff]);
    assert_eq!(Encoding::Base64Url.decode("-_8=").unwrap(), [0xfb, 0xff]);
    assert_eq!(
        Encoding::Base64.decode("-_8=").unwrap_err(),
        ValueError::InvalidEncoding { encoding: "base64" }
    );
}

#[test]
fn test_binary_invalid_hex() {
    let env = Environment::new();
    let key = env
        .binary("SESSION_KEY", "key")
        .encoding(Encoding::Hex)
        .declare()
        .unwrap();
    initialize(&env, EnvSource::empty().with("SESSION_KEY", "xyz"));

    insta::assert_snapshot!(
        key.value().unwrap_err().to_string(),
        @"value of SESSION_KEY is invalid: must be hex encoded"
    );
}

// --- Duration ---

#[test]
fn test_duration_forms() {
    assert_eq!(parse_duration("PT30S").unwrap(), Duration::from_secs(30));
    assert_eq!(parse_duration("PT1M30S").unwrap(), Duration::from_secs(90));
    assert_eq!(parse_duration("P1DT2H").unwrap(), Duration::from_secs(93_600));
    assert_eq!(parse_duration("P2W").unwrap(), Duration::from_secs(1_209_600));
    assert_eq!(parse_duration("PT0,5S").unwrap(), Duration::from_millis(500));
}

#[test]
fn test_duration_rejections() {
    for raw in ["P", "PT", "P1DT", "P1Y", "P1M", "30s", "PT-1S", "P1WT1H"] {
        assert_eq!(parse_duration(raw), Err(ValueError::InvalidDuration), "{raw}");
    }
}

#[test]
fn test_duration_formatting() {
    assert_eq!(format_duration(&Duration::ZERO), "PT0S");
    assert_eq!(format_duration(&Duration::from_secs(90)), "PT1M30S");
    assert_eq!(format_duration(&Duration::from_secs(86_400)), "P1D");
    assert_eq!(format_duration(&Duration::from_millis(93_600_250)), "P1DT2H0.25S");
}

#[test]
fn test_duration_default_is_marshaled() {
    let env = Environment::new();
    let timeout = env
        .duration("GRPC_TIMEOUT", "timeout")
        .default(Duration::from_secs(30))
        .declare()
        .unwrap();
    initialize(&env, EnvSource::empty());

    assert_eq!(timeout.value().unwrap(), Duration::from_secs(30));
    let variables = env.variables();
    assert_eq!(variables[0].examples()[0].canonical, "PT30S");
}

// --- URL ---

#[test]
fn test_url_base_and_protocols() {
    let env = Environment::new();
    let api = env
        .url("API_URL", "api")
        .base(::url::Url::parse("https://api.example.org/v1/").unwrap())
        .declare()
        .unwrap();
    let cdn = env
        .url("CDN_URL", "cdn")
        .protocols(["https"])
        .declare()
        .unwrap();
    let relative = env.url("RELATIVE_URL", "relative").declare().unwrap();
    initialize(
        &env,
        EnvSource::empty()
            .with("API_URL", "items")
            .with("CDN_URL", "http://cdn.example.org/")
            .with("RELATIVE_URL", "path/to/resource"),
    );

    assert_eq!(api.value().unwrap().as_str(), "https://api.example.org/v1/items");
    insta::assert_snapshot!(
        cdn.value().unwrap_err().to_string(),
        @"value of CDN_URL is invalid: protocol must be https:"
    );
    assert_eq!(cause(relative.value().unwrap_err()), ValueError::InvalidUrl);
}

// --- Kubernetes ---

#[test]
fn test_kubernetes_variable_names() {
    let env = Environment::new();
    let plain = env.kubernetes_address("redis-primary");
    let named = env.kubernetes_address("redis-primary").port_name("db-port");

    assert_eq!(plain.host_variable_name(), "REDIS_PRIMARY_SERVICE_HOST");
    assert_eq!(plain.port_variable_name(), "REDIS_PRIMARY_SERVICE_PORT");
    assert_eq!(named.port_variable_name(), "REDIS_PRIMARY_SERVICE_PORT_DB_PORT");
}

#[test]
fn test_kubernetes_address_value() {
    let env = Environment::new();
    let redis = env
        .kubernetes_address("redis-primary")
        .port_name("db")
        .declare()
        .unwrap();
    let cache = env
        .kubernetes_address("cache")
        .default(KubernetesAddress::new("cache.local", 11211))
        .declare()
        .unwrap();
    let metrics = env.kubernetes_address("metrics").optional().declare().unwrap();
    initialize(
        &env,
        EnvSource::empty()
            .with("REDIS_PRIMARY_SERVICE_HOST", "10.0.0.11")
            .with("REDIS_PRIMARY_SERVICE_PORT_DB", "6379"),
    );

    assert_eq!(redis.value().unwrap(), KubernetesAddress::new("10.0.0.11", 6379));
    assert_eq!(cache.value().unwrap().to_string(), "cache.local:11211");
    assert_eq!(metrics.value().unwrap(), None);
    assert_eq!(env.variables().len(), 6);
}

#[test]
fn test_kubernetes_missing_port() {
    let env = Environment::new();
    let redis = env.kubernetes_address("redis").declare().unwrap();
    initialize(&env, EnvSource::empty().with("REDIS_SERVICE_HOST", "10.0.0.11"));

    assert_eq!(redis.value().unwrap_err().name(), "REDIS_SERVICE_PORT");
}

#[test]
fn test_kubernetes_empty_service_name() {
    let env = Environment::new();
    let err = env.kubernetes_address("").declare().unwrap_err();

    assert_eq!(
        spec_cause(err),
        SpecError::EmptyName {
            part: "service name"
        }
    );
    assert!(env.variables().is_empty());
}

#[test]
fn test_kubernetes_optional_keeps_default() {
    let env = Environment::new();
    let cache = env
        .kubernetes_address("cache")
        .default(KubernetesAddress::new("cache.local", 11211))
        .optional()
        .declare()
        .unwrap();
    initialize(&env, EnvSource::empty());

    assert_eq!(
        cache.value().unwrap(),
        Some(KubernetesAddress::new("cache.local", 11211))
    );
}

#[test]
fn test_kubernetes_taken_port_registers_nothing() {
    let env = Environment::new();
    env.network_port_number("REDIS_SERVICE_PORT", "taken")
        .declare()
        .unwrap();

    let err = env.kubernetes_address("redis").declare().unwrap_err();

    assert_eq!(
        err,
        Error::Duplicate {
            name: "REDIS_SERVICE_PORT".to_string()
        }
    );
    assert_eq!(env.variables().len(), 1);
}
