// ── Connected devices, MAC filtering, MAC binding ──
//
// `authority` and `company` blobs on device entries are opaque: their keys
// depend on the device class and the firmware's vendor database.

use std::net::Ipv4Addr;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::ValidationError;
use crate::scalar::ByteCount;
use crate::schema::{Fields, Record};

// ── MAC filter ───────────────────────────────────────────────────────

/// Traffic counters attached to a MAC filter device entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MacFilterDeviceStatistics {
    pub mac: String,
    #[serde(rename = "maxdownloadspeed")]
    pub max_download_speed: i64,
    pub upload: ByteCount,
    #[serde(rename = "upspeed")]
    pub up_speed: ByteCount,
    pub ip: String,
    #[serde(rename = "downspeed")]
    pub down_speed: ByteCount,
    pub online: i64,
    pub dev: String,
    #[serde(rename = "maxuploadspeed")]
    pub max_upload_speed: ByteCount,
    pub download: ByteCount,
}

impl Record for MacFilterDeviceStatistics {
    const NAME: &'static str = "MacFilterDeviceStatistics";

    fn bind(f: &mut Fields<'_>) -> Result<Self, ValidationError> {
        Ok(Self {
            mac: f.required("mac")?,
            max_download_speed: f.required("maxdownloadspeed")?,
            upload: f.required("upload")?,
            up_speed: f.required("upspeed")?,
            ip: f.required("ip")?,
            down_speed: f.required("downspeed")?,
            online: f.required("online")?,
            dev: f.required("dev")?,
            max_upload_speed: f.required("maxuploadspeed")?,
            download: f.required("download")?,
        })
    }
}

/// A device known to the router, as listed by MAC filter and MAC bind.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeviceEntry {
    #[serde(rename = "isap")]
    pub is_ap: i64,
    pub parent: String,
    pub added: Option<i64>,
    pub ip: String,
    pub port: i64,
    pub hostname: String,
    pub mac: String,
    pub origin_name: String,
    pub ptype: i64,
    pub authority: Map<String, Value>,
    pub company: Map<String, Value>,
    pub push: i64,
    pub name: String,
    pub times: i64,
    #[serde(rename = "type")]
    pub device_type: String,
    pub statistics: MacFilterDeviceStatistics,
    pub ctype: i64,
    pub online: i64,
}

impl Record for DeviceEntry {
    const NAME: &'static str = "DeviceEntry";

    fn bind(f: &mut Fields<'_>) -> Result<Self, ValidationError> {
        Ok(Self {
            is_ap: f.required("isap")?,
            parent: f.required("parent")?,
            added: f.optional("added")?,
            ip: f.required("ip")?,
            port: f.required("port")?,
            hostname: f.required("hostname")?,
            mac: f.required("mac")?,
            origin_name: f.required("origin_name")?,
            ptype: f.required("ptype")?,
            authority: f.required("authority")?,
            company: f.required("company")?,
            push: f.required("push")?,
            name: f.required("name")?,
            times: f.required("times")?,
            device_type: f.required("type")?,
            statistics: f.required("statistics")?,
            ctype: f.required("ctype")?,
            online: f.required("online")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MacFilterInfo {
    /// Web filter entries, untyped.
    pub weblist: Vec<Value>,
    pub flist: Vec<DeviceEntry>,
    pub code: i64,
}

impl Record for MacFilterInfo {
    const NAME: &'static str = "MacFilterInfo";

    fn bind(f: &mut Fields<'_>) -> Result<Self, ValidationError> {
        Ok(Self {
            weblist: f.required("weblist")?,
            flist: f.required("flist")?,
            code: f.required("code")?,
        })
    }
}

// ── MAC binding (static leases) ──────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MacBindEntry {
    pub mac: String,
    pub tag: i64,
    pub name: String,
    pub ip: String,
}

impl Record for MacBindEntry {
    const NAME: &'static str = "MacBindEntry";

    fn bind(f: &mut Fields<'_>) -> Result<Self, ValidationError> {
        Ok(Self {
            mac: f.required("mac")?,
            tag: f.required("tag")?,
            name: f.required("name")?,
            ip: f.required("ip")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MacBindInfo {
    #[serde(rename = "devicelist")]
    pub device_list: Vec<DeviceEntry>,
    pub list: Vec<MacBindEntry>,
    pub code: i64,
}

impl Record for MacBindInfo {
    const NAME: &'static str = "MacBindInfo";

    fn bind(f: &mut Fields<'_>) -> Result<Self, ValidationError> {
        Ok(Self {
            device_list: f.required("devicelist")?,
            list: f.required("list")?,
            code: f.required("code")?,
        })
    }
}

// ── Device list ──────────────────────────────────────────────────────

/// Per-address counters of a listed device.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeviceIpDetails {
    #[serde(rename = "downspeed")]
    pub down_speed: i64,
    pub online: i64,
    pub active: i64,
    #[serde(rename = "upspeed")]
    pub up_speed: i64,
    pub ip: Ipv4Addr,
}

impl Record for DeviceIpDetails {
    const NAME: &'static str = "DeviceIpDetails";

    fn bind(f: &mut Fields<'_>) -> Result<Self, ValidationError> {
        Ok(Self {
            down_speed: f.required("downspeed")?,
            online: f.required("online")?,
            active: f.required("active")?,
            up_speed: f.required("upspeed")?,
            ip: f.required("ip")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeviceTrafficStatistics {
    #[serde(rename = "downspeed")]
    pub down_speed: i64,
    pub online: i64,
    #[serde(rename = "upspeed")]
    pub up_speed: i64,
}

impl Record for DeviceTrafficStatistics {
    const NAME: &'static str = "DeviceTrafficStatistics";

    fn bind(f: &mut Fields<'_>) -> Result<Self, ValidationError> {
        Ok(Self {
            down_speed: f.required("downspeed")?,
            online: f.required("online")?,
            up_speed: f.required("upspeed")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeviceListItem {
    pub mac: String,
    /// Name reported by the device itself.
    pub oname: String,
    #[serde(rename = "isap")]
    pub is_ap: i64,
    pub parent: String,
    pub authority: Map<String, Value>,
    pub push: i64,
    pub online: i64,
    pub name: String,
    pub times: i64,
    pub ip: Vec<DeviceIpDetails>,
    pub statistics: DeviceTrafficStatistics,
    pub icon: String,
    #[serde(rename = "type")]
    pub device_type: i64,
}

impl Record for DeviceListItem {
    const NAME: &'static str = "DeviceListItem";

    fn bind(f: &mut Fields<'_>) -> Result<Self, ValidationError> {
        Ok(Self {
            mac: f.required("mac")?,
            oname: f.required("oname")?,
            is_ap: f.required("isap")?,
            parent: f.required("parent")?,
            authority: f.required("authority")?,
            push: f.required("push")?,
            online: f.required("online")?,
            name: f.required("name")?,
            times: f.required("times")?,
            ip: f.required("ip")?,
            statistics: f.required("statistics")?,
            icon: f.required("icon")?,
            device_type: f.required("type")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeviceListResponse {
    /// MAC of the requesting client.
    pub mac: String,
    pub list: Vec<DeviceListItem>,
    pub code: i64,
}

impl Record for DeviceListResponse {
    const NAME: &'static str = "DeviceListResponse";

    fn bind(f: &mut Fields<'_>) -> Result<Self, ValidationError> {
        Ok(Self {
            mac: f.required("mac")?,
            list: f.required("list")?,
            code: f.required("code")?,
        })
    }
}
