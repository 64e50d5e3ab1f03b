// miwifi-api: typed validation for MiWiFi router management API responses.
//
// The router's HTTP API answers with loosely typed JSON: numbers arrive
// quoted or bare, absent values arrive as the string "nil", and status
// fields are small integer codes. This crate turns such a payload into a
// typed record or a path-annotated error. It performs no I/O; callers fetch
// the payload and hand it over as a `serde_json::Value`.
//
// Layering, leaf first:
//   sentinel  "nil" → null, per mapping level
//   scalar    ByteCount, Uptime and field-specific coercions
//   enums     closed status/mode/protocol sets
//   schema    FromRaw / Record traits and field binding
//   models    every record of the schema graph
//   endpoint  identifier → record dispatch, batching

pub mod endpoint;
pub mod enums;
pub mod error;
pub mod models;
pub mod scalar;
pub mod schema;
pub mod sentinel;

// ── Primary re-exports ──
pub use endpoint::{
    Endpoint, Envelope, Response, parse, parse_batch, parse_named, parse_named_batch,
    parse_response,
};
pub use enums::{
    BasicStatus, ConnectionStatus, SmartVpnConnectStatus, SmartVpnMode,
    SmartVpnServiceUpdateFlag, VpnProto, WifiEncryption,
};
pub use error::{ErrorKind, FieldPath, PathSegment, ValidationError, ValidationErrors};
pub use scalar::{ByteCount, Uptime};
pub use schema::{Fields, FromRaw, Record};
