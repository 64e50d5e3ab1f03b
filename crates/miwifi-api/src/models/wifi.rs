// ── WiFi radios ──

use serde::Serialize;
use serde_json::{Map, Value};

use crate::enums::WifiEncryption;
use crate::error::ValidationError;
use crate::schema::{Fields, Record};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WifiChannelInfo {
    pub bandwidth: Option<i64>,
    /// Channels the radio may use.
    #[serde(rename = "bandList")]
    pub band_list: Vec<i64>,
    pub channel: i64,
}

impl Record for WifiChannelInfo {
    const NAME: &'static str = "WifiChannelInfo";

    fn bind(f: &mut Fields<'_>) -> Result<Self, ValidationError> {
        Ok(Self {
            bandwidth: f.optional("bandwidth")?,
            band_list: f.required("bandList")?,
            channel: f.required("channel")?,
        })
    }
}

/// One radio interface from `wifi.info[]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WifiInterfaceInfo {
    pub ifname: String,
    #[serde(rename = "channelInfo")]
    pub channel_info: WifiChannelInfo,
    pub encryption: WifiEncryption,
    pub bandwidth: Option<i64>,
    #[serde(rename = "kickthreshold")]
    pub kick_threshold: i64,
    pub status: i64,
    pub mode: String,
    pub ssid: String,
    #[serde(rename = "weakthreshold")]
    pub weak_threshold: i64,
    pub device: String,
    /// 802.11ax (WiFi 6) enabled.
    pub ax: i64,
    pub hidden: i64,
    pub password: String,
    pub channel: i64,
    /// Transmit power profile, e.g. `"max"`.
    #[serde(rename = "txpwr")]
    pub tx_power: String,
    #[serde(rename = "weakenable")]
    pub weak_enable: i64,
    /// Beamforming.
    pub txbf: i64,
    pub signal: i64,
}

impl Record for WifiInterfaceInfo {
    const NAME: &'static str = "WifiInterfaceInfo";

    fn bind(f: &mut Fields<'_>) -> Result<Self, ValidationError> {
        Ok(Self {
            ifname: f.required("ifname")?,
            channel_info: f.required("channelInfo")?,
            encryption: f.required("encryption")?,
            bandwidth: f.optional("bandwidth")?,
            kick_threshold: f.required("kickthreshold")?,
            status: f.required("status")?,
            mode: f.required("mode")?,
            ssid: f.required("ssid")?,
            weak_threshold: f.required("weakthreshold")?,
            device: f.required("device")?,
            ax: f.required("ax")?,
            hidden: f.required("hidden")?,
            password: f.required("password")?,
            channel: f.required("channel")?,
            tx_power: f.required("txpwr")?,
            weak_enable: f.required("weakenable")?,
            txbf: f.required("txbf")?,
            signal: f.required("signal")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WifiDetails {
    /// Band steering ("dual-band merge") switch.
    pub bsd: i64,
    pub info: Vec<WifiInterfaceInfo>,
    pub code: i64,
}

impl Record for WifiDetails {
    const NAME: &'static str = "WifiDetails";

    fn bind(f: &mut Fields<'_>) -> Result<Self, ValidationError> {
        Ok(Self {
            bsd: f.required("bsd")?,
            info: f.required("info")?,
            code: f.required("code")?,
        })
    }
}

/// Guest WiFi sharing. `info` changes shape between firmware releases and is
/// kept opaque.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WifiShareInfoResponse {
    pub code: i64,
    pub info: Map<String, Value>,
}

impl Record for WifiShareInfoResponse {
    const NAME: &'static str = "WifiShareInfoResponse";

    fn bind(f: &mut Fields<'_>) -> Result<Self, ValidationError> {
        Ok(Self {
            code: f.required("code")?,
            info: f.required("info")?,
        })
    }
}
