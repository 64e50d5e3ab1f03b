// ── System status, time, naming, locale, QoS, acknowledgements ──

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::ValidationError;
use crate::scalar::{ByteCount, Uptime};
use crate::schema::{Fields, Record};

/// Dashboard summary. The per-band blobs arrive under the keys `2g` and `5g`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewStatusResponse {
    pub count: i64,
    pub code: i64,
    pub hardware: Map<String, Value>,
    #[serde(rename = "2g")]
    pub two_g: Map<String, Value>,
    #[serde(rename = "5g")]
    pub five_g: Map<String, Value>,
}

impl Record for NewStatusResponse {
    const NAME: &'static str = "NewStatusResponse";

    fn bind(f: &mut Fields<'_>) -> Result<Self, ValidationError> {
        Ok(Self {
            count: f.required("count")?,
            code: f.required("code")?,
            hardware: f.required("hardware")?,
            two_g: f.required("2g")?,
            five_g: f.required("5g")?,
        })
    }
}

// ── Time ─────────────────────────────────────────────────────────────

/// Router wall clock, broken down the way the firmware reports it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouterTime {
    pub min: i64,
    pub day: i64,
    /// Timezone table index.
    pub index: i64,
    pub month: i64,
    pub year: i64,
    pub sec: i64,
    pub hour: i64,
    pub timezone: String,
}

impl Record for RouterTime {
    const NAME: &'static str = "RouterTime";

    fn bind(f: &mut Fields<'_>) -> Result<Self, ValidationError> {
        Ok(Self {
            min: f.required("min")?,
            day: f.required("day")?,
            index: f.required("index")?,
            month: f.required("month")?,
            year: f.required("year")?,
            sec: f.required("sec")?,
            hour: f.required("hour")?,
            timezone: f.required("timezone")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeResponse {
    pub time: RouterTime,
    pub code: i64,
}

impl Record for TimeResponse {
    const NAME: &'static str = "TimeResponse";

    fn bind(f: &mut Fields<'_>) -> Result<Self, ValidationError> {
        Ok(Self {
            time: f.required("time")?,
            code: f.required("code")?,
        })
    }
}

// ── QoS ──────────────────────────────────────────────────────────────

/// QoS settings. Only the envelope is typed; every section is opaque.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QosInfo {
    pub band: Map<String, Value>,
    pub code: i64,
    pub status: Map<String, Value>,
    pub local: Map<String, Value>,
    pub guest: Map<String, Value>,
    pub list: Vec<Value>,
}

impl Record for QosInfo {
    const NAME: &'static str = "QosInfo";

    fn bind(f: &mut Fields<'_>) -> Result<Self, ValidationError> {
        Ok(Self {
            band: f.required("band")?,
            code: f.required("code")?,
            status: f.required("status")?,
            local: f.required("local")?,
            guest: f.required("guest")?,
            list: f.required("list")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouterName {
    pub code: i64,
    pub name: String,
    /// Free-form location label.
    pub local: String,
}

impl Record for RouterName {
    const NAME: &'static str = "RouterName";

    fn bind(f: &mut Fields<'_>) -> Result<Self, ValidationError> {
        Ok(Self {
            code: f.required("code")?,
            name: f.required("name")?,
            local: f.required("local")?,
        })
    }
}

// ── System status ────────────────────────────────────────────────────

/// Per-device bandwidth counters from the system status page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SystemDevice {
    pub mac: String,
    #[serde(rename = "maxdownloadspeed")]
    pub max_download_speed: ByteCount,
    #[serde(rename = "isap")]
    pub is_ap: Option<i64>,
    pub upload: ByteCount,
    #[serde(rename = "upspeed")]
    pub up_speed: ByteCount,
    #[serde(rename = "downspeed")]
    pub down_speed: ByteCount,
    pub online: i64,
    #[serde(rename = "devname")]
    pub dev_name: String,
    #[serde(rename = "maxuploadspeed")]
    pub max_upload_speed: ByteCount,
    pub download: ByteCount,
}

impl Record for SystemDevice {
    const NAME: &'static str = "SystemDevice";

    fn bind(f: &mut Fields<'_>) -> Result<Self, ValidationError> {
        Ok(Self {
            mac: f.required("mac")?,
            max_download_speed: f.required("maxdownloadspeed")?,
            is_ap: f.optional("isap")?,
            upload: f.required("upload")?,
            up_speed: f.required("upspeed")?,
            down_speed: f.required("downspeed")?,
            online: f.required("online")?,
            dev_name: f.required("devname")?,
            max_upload_speed: f.required("maxuploadspeed")?,
            download: f.required("download")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SystemStatusCpu {
    pub core: i64,
    /// Clock rate as rendered by the firmware, e.g. `"1.2GHz"`.
    pub hz: String,
    /// Load average. Integral on some firmware, fractional on most.
    pub load: f64,
}

impl Record for SystemStatusCpu {
    const NAME: &'static str = "SystemStatusCpu";

    fn bind(f: &mut Fields<'_>) -> Result<Self, ValidationError> {
        Ok(Self {
            core: f.required("core")?,
            hz: f.required("hz")?,
            load: f.required("load")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SystemStatusMemory {
    /// Fraction in use, `0.0..=1.0`.
    pub usage: f64,
    pub total: String,
    pub hz: String,
    #[serde(rename = "type")]
    pub memory_type: String,
}

impl Record for SystemStatusMemory {
    const NAME: &'static str = "SystemStatusMemory";

    fn bind(f: &mut Fields<'_>) -> Result<Self, ValidationError> {
        Ok(Self {
            usage: f.required("usage")?,
            total: f.required("total")?,
            hz: f.required("hz")?,
            memory_type: f.required("type")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SystemStatusHardware {
    pub mac: String,
    pub platform: String,
    pub version: String,
    /// Release channel (`release`, `stable`, ...).
    pub channel: String,
    #[serde(rename = "sn")]
    pub serial: String,
}

impl Record for SystemStatusHardware {
    const NAME: &'static str = "SystemStatusHardware";

    fn bind(f: &mut Fields<'_>) -> Result<Self, ValidationError> {
        Ok(Self {
            mac: f.required("mac")?,
            platform: f.required("platform")?,
            version: f.required("version")?,
            channel: f.required("channel")?,
            serial: f.required("sn")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SystemStatusWan {
    #[serde(rename = "downspeed")]
    pub down_speed: ByteCount,
    #[serde(rename = "maxdownloadspeed")]
    pub max_download_speed: ByteCount,
    #[serde(rename = "devname")]
    pub dev_name: Option<String>,
    pub upload: ByteCount,
    #[serde(rename = "upspeed")]
    pub up_speed: ByteCount,
    #[serde(rename = "maxuploadspeed")]
    pub max_upload_speed: ByteCount,
    pub download: ByteCount,
}

impl Record for SystemStatusWan {
    const NAME: &'static str = "SystemStatusWan";

    fn bind(f: &mut Fields<'_>) -> Result<Self, ValidationError> {
        Ok(Self {
            down_speed: f.required("downspeed")?,
            max_download_speed: f.required("maxdownloadspeed")?,
            dev_name: f.optional("devname")?,
            upload: f.required("upload")?,
            up_speed: f.required("upspeed")?,
            max_upload_speed: f.required("maxuploadspeed")?,
            download: f.required("download")?,
        })
    }
}

/// System status page: hardware identity, load, memory, WAN and per-device
/// bandwidth.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SystemStatusResponse {
    pub code: i64,
    pub count: Map<String, Value>,
    #[serde(rename = "upTime")]
    pub uptime: Uptime,
    pub hardware: SystemStatusHardware,
    pub dev: Vec<SystemDevice>,
    pub cpu: SystemStatusCpu,
    pub mem: SystemStatusMemory,
    pub wan: SystemStatusWan,
}

impl Record for SystemStatusResponse {
    const NAME: &'static str = "SystemStatusResponse";

    fn bind(f: &mut Fields<'_>) -> Result<Self, ValidationError> {
        Ok(Self {
            code: f.required("code")?,
            count: f.required("count")?,
            uptime: f.required("upTime")?,
            hardware: f.required("hardware")?,
            dev: f.required("dev")?,
            cpu: f.required("cpu")?,
            mem: f.required("mem")?,
            wan: f.required("wan")?,
        })
    }
}

// ── Locale ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationResponse {
    pub location: String,
    pub code: i64,
}

impl Record for LocationResponse {
    const NAME: &'static str = "LocationResponse";

    fn bind(f: &mut Fields<'_>) -> Result<Self, ValidationError> {
        Ok(Self {
            location: f.required("location")?,
            code: f.required("code")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanguageResponse {
    pub list: Vec<Map<String, Value>>,
    pub code: i64,
    /// Active language tag.
    pub lang: String,
}

impl Record for LanguageResponse {
    const NAME: &'static str = "LanguageResponse";

    fn bind(f: &mut Fields<'_>) -> Result<Self, ValidationError> {
        Ok(Self {
            list: f.required("list")?,
            code: f.required("code")?,
            lang: f.required("lang")?,
        })
    }
}

// ── Acknowledgements ─────────────────────────────────────────────────

/// Bare envelope returned by setters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BasicCodeResponse {
    pub code: i64,
}

impl Record for BasicCodeResponse {
    const NAME: &'static str = "BasicCodeResponse";

    fn bind(f: &mut Fields<'_>) -> Result<Self, ValidationError> {
        Ok(Self {
            code: f.required("code")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BasicStatusResponse {
    pub code: i64,
    pub status: i64,
}

impl Record for BasicStatusResponse {
    const NAME: &'static str = "BasicStatusResponse";

    fn bind(f: &mut Fields<'_>) -> Result<Self, ValidationError> {
        Ok(Self {
            code: f.required("code")?,
            status: f.required("status")?,
        })
    }
}
