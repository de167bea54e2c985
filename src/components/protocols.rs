// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;

/// Wire protocols a component can speak.
///
/// TLS entries describe the security layer and have no port of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Protocol {
    Amqp10,
    Mqtt,
    Stomp,
    Openwire,
    Tls12,
    Tls13,
}

impl Protocol {
    pub fn name(&self) -> &'static str {
        match self {
            Protocol::Amqp10 => "AMQP 1.0",
            Protocol::Mqtt => "MQTT",
            Protocol::Stomp => "STOMP",
            Protocol::Openwire => "OpenWire",
            Protocol::Tls12 => "TLS 1.2",
            Protocol::Tls13 => "TLS 1.3",
        }
    }

    pub fn default_port(&self) -> Option<u16> {
        match self {
            Protocol::Amqp10 => Some(5672),
            Protocol::Mqtt => Some(1883),
            Protocol::Stomp => Some(61613),
            Protocol::Openwire => Some(61616),
            Protocol::Tls12 | Protocol::Tls13 => None,
        }
    }

    pub fn is_security_layer(&self) -> bool {
        matches!(self, Protocol::Tls12 | Protocol::Tls13)
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}
