// Closed enumerations
//
// Status, mode, and protocol fields that only accept a fixed set of wire
// values. Matching is exact: numeric enums accept JSON integers only (a quoted
// "1" is rejected), string enums accept their tag verbatim (no case folding).

use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::error::{FieldPath, ValidationError};
use crate::schema::FromRaw;

fn invalid_enum(path: &FieldPath, enumeration: &'static str, raw: &Value) -> ValidationError {
    ValidationError::InvalidEnumValue {
        path: path.clone(),
        enumeration,
        value: raw.clone(),
    }
}

/// Define a closed enumeration keyed by integer codes or string tags.
macro_rules! closed_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident : code {
            $( $(#[$vmeta:meta])* $variant:ident = $code:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter, strum::IntoStaticStr)]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            pub const NAME: &'static str = stringify!($name);

            /// Wire code of this value.
            pub const fn code(self) -> i64 {
                match self {
                    $( Self::$variant => $code ),+
                }
            }

            pub const fn from_code(code: i64) -> Option<Self> {
                match code {
                    $( $code => Some(Self::$variant), )+
                    _ => None,
                }
            }
        }

        impl FromRaw for $name {
            fn from_raw(raw: &Value, path: &FieldPath) -> Result<Self, ValidationError> {
                raw.as_i64()
                    .and_then(Self::from_code)
                    .ok_or_else(|| invalid_enum(path, Self::NAME, raw))
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_i64(self.code())
            }
        }
    };

    (
        $(#[$meta:meta])*
        pub enum $name:ident : tag {
            $( $(#[$vmeta:meta])* $variant:ident = $tag:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter, strum::IntoStaticStr)]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            pub const NAME: &'static str = stringify!($name);

            /// Wire tag of this value.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $( Self::$variant => $tag ),+
                }
            }

            pub fn from_tag(tag: &str) -> Option<Self> {
                match tag {
                    $( $tag => Some(Self::$variant), )+
                    _ => None,
                }
            }
        }

        impl FromRaw for $name {
            fn from_raw(raw: &Value, path: &FieldPath) -> Result<Self, ValidationError> {
                raw.as_str()
                    .and_then(Self::from_tag)
                    .ok_or_else(|| invalid_enum(path, Self::NAME, raw))
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }
    };
}

closed_enum! {
    /// WAN / VPN link state.
    pub enum ConnectionStatus: code {
        Connected = 0,
        Dialing = 1,
        CouldNotConnect = 2,
        Disconnected = 3,
        Off = 4,
    }
}

closed_enum! {
    /// Generic on/off switch.
    pub enum BasicStatus: code {
        Off = 0,
        On = 1,
    }
}

closed_enum! {
    /// VPN tunnel protocol.
    pub enum VpnProto: tag {
        L2tp = "l2tp",
        Pptp = "pptp",
    }
}

closed_enum! {
    /// WiFi radio encryption.
    pub enum WifiEncryption: tag {
        Psk2 = "psk2",
        MixedPsk = "mixed-psk",
    }
}

closed_enum! {
    /// Smart VPN tunnel state.
    pub enum SmartVpnConnectStatus: code {
        Connected = 0,
        Disconnected = 1,
    }
}

closed_enum! {
    /// Smart VPN traffic steering. Codes mirror the firmware and are not in
    /// declaration order.
    pub enum SmartVpnMode: code {
        Disabled = 0,
        TrafficByDevice = 2,
        TrafficByService = 1,
    }
}

closed_enum! {
    /// Add/remove flag for smart VPN service list updates.
    pub enum SmartVpnServiceUpdateFlag: code {
        Add = 0,
        Delete = 1,
    }
}
