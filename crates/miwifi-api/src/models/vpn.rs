// ── VPN tunnels and smart VPN ──

use std::ops::Deref;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::enums::{BasicStatus, ConnectionStatus, SmartVpnConnectStatus, SmartVpnMode, VpnProto};
use crate::error::ValidationError;
use crate::scalar::{Uptime, int_flag};
use crate::schema::{Fields, Record};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VpnStatusResponse {
    pub code: i64,
    pub status: ConnectionStatus,
    pub uptime: Uptime,
}

impl Record for VpnStatusResponse {
    const NAME: &'static str = "VpnStatusResponse";

    fn bind(f: &mut Fields<'_>) -> Result<Self, ValidationError> {
        Ok(Self {
            code: f.required("code")?,
            status: f.required("status")?,
            uptime: f.required("uptime")?,
        })
    }
}

/// A configured VPN tunnel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VpnItem {
    pub username: String,
    pub id: String,
    pub password: String,
    pub server: String,
    /// Display name.
    pub oname: Option<String>,
    pub proto: VpnProto,
}

impl Record for VpnItem {
    const NAME: &'static str = "VpnItem";

    fn bind(f: &mut Fields<'_>) -> Result<Self, ValidationError> {
        Ok(Self {
            username: f.required("username")?,
            id: f.required("id")?,
            password: f.required("password")?,
            server: f.required("server")?,
            oname: f.optional("oname")?,
            proto: f.required("proto")?,
        })
    }
}

/// The tunnel currently selected: every [`VpnItem`] field plus `auto`.
///
/// `auto` is reported as `"1"`, `1`, or `true` depending on firmware; it
/// always binds to an integer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VpnCurrentItem {
    #[serde(flatten)]
    pub tunnel: VpnItem,
    pub auto: i64,
}

impl Deref for VpnCurrentItem {
    type Target = VpnItem;

    fn deref(&self) -> &VpnItem {
        &self.tunnel
    }
}

impl Record for VpnCurrentItem {
    const NAME: &'static str = "VpnCurrentItem";

    fn bind(f: &mut Fields<'_>) -> Result<Self, ValidationError> {
        Ok(Self {
            tunnel: VpnItem::bind(f)?,
            auto: f.required_with("auto", int_flag)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VpnResponse {
    pub code: i64,
    pub list: Vec<VpnItem>,
    pub current: VpnCurrentItem,
}

impl Record for VpnResponse {
    const NAME: &'static str = "VpnResponse";

    fn bind(f: &mut Fields<'_>) -> Result<Self, ValidationError> {
        Ok(Self {
            code: f.required("code")?,
            list: f.required("list")?,
            current: f.required("current")?,
        })
    }
}

/// Request body for creating or editing a tunnel. `id` is absent on create.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VpnCreateItem {
    pub id: Option<String>,
    pub oname: Option<String>,
    pub proto: VpnProto,
    pub server: String,
    pub username: String,
    pub password: String,
}

impl Record for VpnCreateItem {
    const NAME: &'static str = "VpnCreateItem";

    fn bind(f: &mut Fields<'_>) -> Result<Self, ValidationError> {
        Ok(Self {
            id: f.optional("id")?,
            oname: f.optional("oname")?,
            proto: f.required("proto")?,
            server: f.required("server")?,
            username: f.required("username")?,
            password: f.required("password")?,
        })
    }
}

// ── Smart VPN ────────────────────────────────────────────────────────

/// Smart VPN routing state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SmartVpnInfo {
    pub status: SmartVpnConnectStatus,
    pub mode: SmartVpnMode,
    /// Service (URL) list routed through the tunnel.
    pub ulist: Option<Vec<String>>,
    /// Device MAC list routed through the tunnel.
    pub mlist: Option<Vec<String>>,
    pub name: Option<Map<String, Value>>,
    pub switch: BasicStatus,
}

impl Record for SmartVpnInfo {
    const NAME: &'static str = "SmartVpnInfo";

    fn bind(f: &mut Fields<'_>) -> Result<Self, ValidationError> {
        Ok(Self {
            status: f.required("status")?,
            mode: f.required("mode")?,
            ulist: f.optional("ulist")?,
            mlist: f.optional("mlist")?,
            name: f.optional("name")?,
            switch: f.required("switch")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SmartVpnInfoResponse {
    pub code: i64,
    pub info: SmartVpnInfo,
}

impl Record for SmartVpnInfoResponse {
    const NAME: &'static str = "SmartVpnInfoResponse";

    fn bind(f: &mut Fields<'_>) -> Result<Self, ValidationError> {
        Ok(Self {
            code: f.required("code")?,
            info: f.required("info")?,
        })
    }
}
