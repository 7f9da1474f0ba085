// envdecl: Typed Environment Variable Declarations
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Kubernetes service address declarations.
//!
//! A service discovered through the variables Kubernetes injects into every
//! pod is declared as a pair of variables:
//!
//! ```text
//! env.kubernetes_address("redis-primary")
//!     REDIS_PRIMARY_SERVICE_HOST          string
//!     REDIS_PRIMARY_SERVICE_PORT          port number
//!
//! env.kubernetes_address("redis-primary").port_name("db")
//!     REDIS_PRIMARY_SERVICE_HOST          string
//!     REDIS_PRIMARY_SERVICE_PORT_DB       port number
//! ```

use std::fmt;
use std::marker::PhantomData;

use serde::Serialize;

use super::port::PortNumber;
use super::string::Text;
use super::{Declaration, Declarator, Kind, Optional, Presence, Required};
use crate::environment::Environment;
use crate::error::{Error, Result, SpecError};
use crate::maybe::Maybe;

/// Host and port of a Kubernetes service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct KubernetesAddress {
    pub host: String,
    pub port: u16,
}

impl KubernetesAddress {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }
}

impl fmt::Display for KubernetesAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

/// Collects the options of a Kubernetes address before it is registered.
#[must_use = "a variable is only declared once `declare` is called"]
pub struct KubernetesAddressDeclarator<'e, P = Required> {
    env: &'e Environment,
    service_name: String,
    port_name: Option<String>,
    default: Maybe<Option<KubernetesAddress>>,
    presence: PhantomData<P>,
}

impl<'e> KubernetesAddressDeclarator<'e, Required> {
    /// Address used when the variables are empty or unset.
    pub fn default(mut self, address: KubernetesAddress) -> Self {
        self.default = Maybe::Defined(Some(address));
        self
    }

    /// Resolves to `None` instead of failing when the variables are unset.
    ///
    /// A default set with [`Self::default`] is kept.
    pub fn optional(self) -> KubernetesAddressDeclarator<'e, Optional> {
        let default = match self.default {
            Maybe::Defined(Some(address)) => Maybe::Defined(Some(address)),
            Maybe::Defined(None) | Maybe::Undefined => Maybe::Defined(None),
        };
        KubernetesAddressDeclarator {
            env: self.env,
            service_name: self.service_name,
            port_name: self.port_name,
            default,
            presence: PhantomData,
        }
    }
}

impl<P: Presence> KubernetesAddressDeclarator<'_, P> {
    /// Reads the port from a named service port.
    pub fn port_name(mut self, port_name: impl Into<String>) -> Self {
        self.port_name = Some(port_name.into());
        self
    }

    /// Name of the host variable.
    #[must_use]
    pub fn host_variable_name(&self) -> String {
        format!("{}_SERVICE_HOST", env_prefix(&self.service_name))
    }

    /// Name of the port variable.
    #[must_use]
    pub fn port_variable_name(&self) -> String {
        let prefix = env_prefix(&self.service_name);
        match &self.port_name {
            Some(port_name) => format!("{prefix}_SERVICE_PORT_{}", env_prefix(port_name)),
            None => format!("{prefix}_SERVICE_PORT"),
        }
    }

    /// Validates the names and registers the host and port variables.
    ///
    /// # Errors
    ///
    /// [`Error::Spec`] for an empty service or port name, otherwise any
    /// registration error of the underlying variables. Neither variable is
    /// registered when either one fails.
    pub fn declare(self) -> Result<KubernetesAddressDeclaration<P>> {
        let host_name = self.host_variable_name();
        let port_name = self.port_variable_name();
        if self.service_name.is_empty() {
            return Err(Error::spec(
                &host_name,
                SpecError::EmptyName {
                    part: "service name",
                },
            ));
        }
        if self.port_name.as_deref() == Some("") {
            return Err(Error::spec(
                &port_name,
                SpecError::EmptyName { part: "port name" },
            ));
        }

        let host_default = self
            .default
            .as_ref()
            .map(|address| address.as_ref().map(|address| address.host.clone()));
        let port_default = self
            .default
            .as_ref()
            .map(|address| address.as_ref().map(|address| address.port));

        let (env, host) = component(
            self.env,
            host_name,
            format!("Kubernetes `{}` service host", self.service_name),
            Text,
            host_default,
        )
        .build()?;
        let (_, port) = component(
            self.env,
            port_name,
            format!("Kubernetes `{}` service port", self.service_name),
            PortNumber,
            port_default,
        )
        .build()?;
        let [host, port] = env.register_all([host, port])?;

        Ok(KubernetesAddressDeclaration {
            host: Declaration::registered(env, host),
            port: Declaration::registered(env, port),
            presence: PhantomData,
        })
    }
}

impl<P> fmt::Debug for KubernetesAddressDeclarator<'_, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KubernetesAddressDeclarator")
            .field("service_name", &self.service_name)
            .field("port_name", &self.port_name)
            .field("default", &self.default)
            .finish_non_exhaustive()
    }
}

/// Handle to a declared Kubernetes address.
pub struct KubernetesAddressDeclaration<P = Required> {
    host: Declaration<String, Optional>,
    port: Declaration<u16, Optional>,
    presence: PhantomData<fn() -> P>,
}

impl<P: Presence> KubernetesAddressDeclaration<P> {
    #[must_use]
    pub fn host(&self) -> &Declaration<String, Optional> {
        &self.host
    }

    #[must_use]
    pub fn port(&self) -> &Declaration<u16, Optional> {
        &self.port
    }

    /// Returns the resolved address.
    ///
    /// # Errors
    ///
    /// [`Error::Uninitialized`] before initialization, or the first error of
    /// the host and port variables.
    pub fn value(&self) -> Result<P::Output<KubernetesAddress>> {
        let address = match (self.host.value()?, self.port.value()?) {
            (Some(host), Some(port)) => Some(KubernetesAddress { host, port }),
            _ => None,
        };
        P::output(address, self.host.name())
    }
}

impl<P> Clone for KubernetesAddressDeclaration<P> {
    fn clone(&self) -> Self {
        Self {
            host: self.host.clone(),
            port: self.port.clone(),
            presence: PhantomData,
        }
    }
}

impl<P> fmt::Debug for KubernetesAddressDeclaration<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KubernetesAddressDeclaration")
            .field("host", &self.host)
            .field("port", &self.port)
            .finish()
    }
}

impl Environment {
    /// Declares the host and port variables of a Kubernetes service.
    pub fn kubernetes_address(
        &self,
        service_name: impl Into<String>,
    ) -> KubernetesAddressDeclarator<'_> {
        KubernetesAddressDeclarator {
            env: self,
            service_name: service_name.into(),
            port_name: None,
            default: Maybe::Undefined,
            presence: PhantomData,
        }
    }
}

/// Upper-cases a Kubernetes name and replaces dashes.
fn env_prefix(name: &str) -> String {
    name.to_ascii_uppercase().replace('-', "_")
}

/// Builds a component declarator carrying the address-level default.
///
/// Components are always optional-typed; presence is enforced on the
/// combined value.
fn component<K: Kind>(
    env: &Environment,
    name: String,
    description: String,
    kind: K,
    default: Maybe<Option<K::Native>>,
) -> Declarator<'_, K, Optional> {
    Declarator {
        env,
        name,
        description,
        kind,
        default,
        is_sensitive: false,
        presence: PhantomData,
    }
}
