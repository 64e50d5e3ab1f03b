// Validation entry point
//
// Maps an endpoint identifier to its top-level record and runs the schema
// graph over a raw payload. The identifier's snake_case name roots every
// field path in the errors it produces (`wan.info.mac`).

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::error::{FieldPath, ValidationError, ValidationErrors};
use crate::models::{
    BasicCodeResponse, BasicStatusResponse, DeviceListResponse, DmzResponse, LanDhcpDetails,
    LanInfoDetails, LanguageResponse, LocationResponse, MacBindInfo, MacFilterInfo,
    NewStatusResponse, PortForwardList, PppoeStatus, QosInfo, RouterName, SmartVpnInfoResponse,
    SystemStatusResponse, TimeResponse, VpnCreateItem, VpnResponse, VpnStatusResponse,
    WanDetails, WifiDetails, WifiShareInfoResponse,
};
use crate::schema::{FromRaw, Record};

// ── Envelope ─────────────────────────────────────────────────────────

/// Top-level records carrying the firmware's integer result code.
pub trait Envelope {
    /// Result code; `None` for request bodies, which carry none.
    fn code(&self) -> Option<i64>;
}

macro_rules! coded_envelope {
    ($($record:ty),+ $(,)?) => {
        $(
            impl Envelope for $record {
                fn code(&self) -> Option<i64> {
                    Some(self.code)
                }
            }
        )+
    };
}

coded_envelope!(
    WanDetails,
    PppoeStatus,
    LanDhcpDetails,
    LanInfoDetails,
    DmzResponse,
    PortForwardList,
    WifiDetails,
    WifiShareInfoResponse,
    MacFilterInfo,
    MacBindInfo,
    DeviceListResponse,
    VpnStatusResponse,
    VpnResponse,
    SmartVpnInfoResponse,
    SystemStatusResponse,
    NewStatusResponse,
    TimeResponse,
    RouterName,
    LocationResponse,
    LanguageResponse,
    QosInfo,
    BasicCodeResponse,
    BasicStatusResponse,
);

impl Envelope for VpnCreateItem {
    fn code(&self) -> Option<i64> {
        None
    }
}

// ── Registry ─────────────────────────────────────────────────────────

macro_rules! endpoints {
    ($( $(#[$doc:meta])* $variant:ident => $record:ty ),+ $(,)?) => {
        /// Endpoint identifiers with a registered schema.
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash,
            strum::Display, strum::EnumString, strum::EnumIter, strum::IntoStaticStr,
        )]
        #[strum(serialize_all = "snake_case")]
        pub enum Endpoint {
            $( $(#[$doc])* $variant ),+
        }

        impl Endpoint {
            /// Name of the record type validated for this endpoint.
            pub const fn record_name(self) -> &'static str {
                match self {
                    $( Self::$variant => <$record as Record>::NAME ),+
                }
            }

            fn validate(self, raw: &Value, path: &FieldPath) -> Result<Response, ValidationError> {
                match self {
                    $( Self::$variant => <$record>::from_raw(raw, path).map(Response::$variant) ),+
                }
            }
        }

        /// A validated top-level record, one variant per endpoint.
        ///
        /// Serializes untagged, as the record's canonical JSON object.
        #[derive(Debug, Clone, PartialEq, Serialize)]
        #[serde(untagged)]
        #[allow(clippy::large_enum_variant)]
        pub enum Response {
            $( $variant($record) ),+
        }

        impl Response {
            pub const fn endpoint(&self) -> Endpoint {
                match self {
                    $( Self::$variant(_) => Endpoint::$variant ),+
                }
            }

            /// Envelope result code, `None` for request bodies.
            pub fn code(&self) -> Option<i64> {
                match self {
                    $( Self::$variant(record) => Envelope::code(record) ),+
                }
            }
        }
    };
}

endpoints! {
    /// WAN link status and settings.
    Wan => WanDetails,
    PppoeStatus => PppoeStatus,
    LanDhcp => LanDhcpDetails,
    LanInfo => LanInfoDetails,
    Dmz => DmzResponse,
    PortForward => PortForwardList,
    /// Per-radio WiFi configuration.
    Wifi => WifiDetails,
    WifiShare => WifiShareInfoResponse,
    MacFilter => MacFilterInfo,
    MacBind => MacBindInfo,
    DeviceList => DeviceListResponse,
    VpnStatus => VpnStatusResponse,
    Vpn => VpnResponse,
    /// Request body for adding or editing a VPN tunnel.
    VpnCreate => VpnCreateItem,
    SmartVpn => SmartVpnInfoResponse,
    SystemStatus => SystemStatusResponse,
    NewStatus => NewStatusResponse,
    Time => TimeResponse,
    RouterName => RouterName,
    Location => LocationResponse,
    Language => LanguageResponse,
    Qos => QosInfo,
    /// Bare acknowledgement from setters.
    BasicCode => BasicCodeResponse,
    BasicStatus => BasicStatusResponse,
}

impl Endpoint {
    /// Identifier used on the wire and as the error path root.
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// Resolve an identifier, failing with `UnknownRecord`.
    pub fn resolve(name: &str) -> Result<Self, ValidationError> {
        name.parse().map_err(|_| ValidationError::UnknownRecord {
            name: name.to_owned(),
        })
    }
}

// ── Entry points ─────────────────────────────────────────────────────

/// Validate one raw response against the schema registered for `endpoint`.
pub fn parse_response(endpoint: Endpoint, raw: &Value) -> Result<Response, ValidationErrors> {
    let path = FieldPath::root(endpoint.as_str());
    match endpoint.validate(raw, &path) {
        Ok(response) => {
            debug!(
                endpoint = %endpoint,
                record = endpoint.record_name(),
                code = ?response.code(),
                "validated response"
            );
            Ok(response)
        }
        Err(err) => {
            debug!(endpoint = %endpoint, kind = %err.kind(), error = %err, "response rejected");
            Err(err.into())
        }
    }
}

/// Like [`parse_response`], resolving the endpoint from its identifier.
pub fn parse_named(name: &str, raw: &Value) -> Result<Response, ValidationErrors> {
    let endpoint = Endpoint::resolve(name)?;
    parse_response(endpoint, raw)
}

/// Validate `raw` as record `T`, with error paths rooted at `root`.
pub fn parse<T: Record>(root: &str, raw: &Value) -> Result<T, ValidationErrors> {
    let path = FieldPath::root(root);
    T::from_raw(raw, &path).map_err(|err| {
        debug!(record = T::NAME, error = %err, "record rejected");
        ValidationErrors::from(err)
    })
}

/// Validate independent responses, collecting every failure.
///
/// Returns the validated responses in input order only when all of them pass.
pub fn parse_batch<'a, I>(items: I) -> Result<Vec<Response>, ValidationErrors>
where
    I: IntoIterator<Item = (Endpoint, &'a Value)>,
{
    collect_batch(
        items
            .into_iter()
            .map(|(endpoint, raw)| parse_response(endpoint, raw)),
    )
}

/// [`parse_batch`] keyed by identifier. Unknown identifiers are reported
/// alongside the other failures.
pub fn parse_named_batch<'a, I>(items: I) -> Result<Vec<Response>, ValidationErrors>
where
    I: IntoIterator<Item = (&'a str, &'a Value)>,
{
    collect_batch(items.into_iter().map(|(name, raw)| parse_named(name, raw)))
}

fn collect_batch(
    results: impl Iterator<Item = Result<Response, ValidationErrors>>,
) -> Result<Vec<Response>, ValidationErrors> {
    let mut responses = Vec::new();
    let mut failures: Option<ValidationErrors> = None;
    for result in results {
        match result {
            Ok(response) => responses.push(response),
            Err(errors) => match failures.as_mut() {
                Some(all) => all.extend(errors),
                None => failures = Some(errors),
            },
        }
    }
    match failures {
        Some(errors) => {
            debug!(failed = errors.len(), passed = responses.len(), "batch rejected");
            Err(errors)
        }
        None => Ok(responses),
    }
}
