// ── WAN / LAN / PPPoE / DHCP / DMZ / port forwarding ──
//
// Field names follow the firmware's JSON keys through `serde(rename)` so a
// validated record serializes back to the shape it was parsed from.

use std::net::Ipv4Addr;

use serde::Serialize;

use crate::error::ValidationError;
use crate::schema::{Fields, Record};

// ── Addressing ───────────────────────────────────────────────────────

/// Address/netmask pair as reported on WAN and DHCP objects.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IpAddress {
    pub mask: Ipv4Addr,
    pub address: Ipv4Addr,
}

impl Record for IpAddress {
    const NAME: &'static str = "IpAddress";

    fn bind(f: &mut Fields<'_>) -> Result<Self, ValidationError> {
        Ok(Self {
            mask: f.required("mask")?,
            address: f.required("address")?,
        })
    }
}

/// LAN-side variant of [`IpAddress`]; the firmware calls the address `ip` here.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ipv4Config {
    pub mask: Ipv4Addr,
    pub ip: Ipv4Addr,
}

impl Record for Ipv4Config {
    const NAME: &'static str = "Ipv4Config";

    fn bind(f: &mut Fields<'_>) -> Result<Self, ValidationError> {
        Ok(Self {
            mask: f.required("mask")?,
            ip: f.required("ip")?,
        })
    }
}

// ── PPPoE ────────────────────────────────────────────────────────────

/// PPPoE dial-up status.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PppoeStatus {
    pub proto: String,
    pub dns: Vec<String>,
    pub code: i64,
    #[serde(rename = "pppoename")]
    pub pppoe_name: String,
    #[serde(rename = "peerdns")]
    pub peer_dns: i64,
    pub ip: IpAddress,
    pub password: String,
    /// Custom DNS servers.
    #[serde(rename = "cdns")]
    pub custom_dns: Vec<String>,
    pub status: i64,
    #[serde(rename = "gw")]
    pub gateway: String,
}

impl Record for PppoeStatus {
    const NAME: &'static str = "PppoeStatus";

    fn bind(f: &mut Fields<'_>) -> Result<Self, ValidationError> {
        Ok(Self {
            proto: f.required("proto")?,
            dns: f.required("dns")?,
            code: f.required("code")?,
            pppoe_name: f.required("pppoename")?,
            peer_dns: f.required("peerdns")?,
            ip: f.required("ip")?,
            password: f.required("password")?,
            custom_dns: f.required("cdns")?,
            status: f.required("status")?,
            gateway: f.required("gw")?,
        })
    }
}

// ── WAN ──────────────────────────────────────────────────────────────

/// Per-link WAN settings (`wan.info.details`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WanInfoDetails {
    pub username: String,
    pub ifname: String,
    pub dns: Vec<String>,
    #[serde(rename = "wanType")]
    pub wan_type: String,
    pub mru: i64,
    pub service: String,
    pub password: String,
    /// Quoted on this object, unlike `PppoeStatus::peer_dns`.
    #[serde(rename = "peerdns")]
    pub peer_dns: String,
}

impl Record for WanInfoDetails {
    const NAME: &'static str = "WanInfoDetails";

    fn bind(f: &mut Fields<'_>) -> Result<Self, ValidationError> {
        Ok(Self {
            username: f.required("username")?,
            ifname: f.required("ifname")?,
            dns: f.required("dns")?,
            wan_type: f.required("wanType")?,
            mru: f.required("mru")?,
            service: f.required("service")?,
            password: f.required("password")?,
            peer_dns: f.required("peerdns")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ipv6Info {
    #[serde(rename = "wanType")]
    pub wan_type: String,
}

impl Record for Ipv6Info {
    const NAME: &'static str = "Ipv6Info";

    fn bind(f: &mut Fields<'_>) -> Result<Self, ValidationError> {
        Ok(Self {
            wan_type: f.required("wanType")?,
        })
    }
}

/// WAN link status (`wan.info`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WanInfo {
    pub mac: String,
    pub link: i64,
    pub details: WanInfoDetails,
    pub special: i64,
    #[serde(rename = "dnsAddrs1")]
    pub dns_addrs1: String,
    pub status: i64,
    pub internet_tag: i64,
    #[serde(rename = "dnsAddrs")]
    pub dns_addrs: String,
    pub uptime: i64,
    #[serde(rename = "gateWay")]
    pub gateway: String,
    pub ipv6_info: Ipv6Info,
    pub ipv6_show: i64,
    pub mtu: i64,
    pub ipv4: Vec<IpAddress>,
}

impl Record for WanInfo {
    const NAME: &'static str = "WanInfo";

    fn bind(f: &mut Fields<'_>) -> Result<Self, ValidationError> {
        Ok(Self {
            mac: f.required("mac")?,
            link: f.required("link")?,
            details: f.required("details")?,
            special: f.required("special")?,
            dns_addrs1: f.required("dnsAddrs1")?,
            status: f.required("status")?,
            internet_tag: f.required("internet_tag")?,
            dns_addrs: f.required("dnsAddrs")?,
            uptime: f.required("uptime")?,
            gateway: f.required("gateWay")?,
            ipv6_info: f.required("ipv6_info")?,
            ipv6_show: f.required("ipv6_show")?,
            mtu: f.required("mtu")?,
            ipv4: f.required("ipv4")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WanDetails {
    pub code: i64,
    pub info: WanInfo,
}

impl Record for WanDetails {
    const NAME: &'static str = "WanDetails";

    fn bind(f: &mut Fields<'_>) -> Result<Self, ValidationError> {
        Ok(Self {
            code: f.required("code")?,
            info: f.required("info")?,
        })
    }
}

// ── LAN / DHCP ───────────────────────────────────────────────────────

/// DHCP server pool.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanDhcpInfo {
    /// Lease time as the firmware renders it, e.g. `"12h"`.
    #[serde(rename = "leasetime")]
    pub lease_time: String,
    pub limit: i64,
    #[serde(rename = "leasetimeUnit")]
    pub lease_time_unit: String,
    pub start: i64,
    #[serde(rename = "leasetimeNum")]
    pub lease_time_num: i64,
    #[serde(rename = "lanIp")]
    pub lan_ip: Vec<IpAddress>,
    pub ignore: i64,
}

impl Record for LanDhcpInfo {
    const NAME: &'static str = "LanDhcpInfo";

    fn bind(f: &mut Fields<'_>) -> Result<Self, ValidationError> {
        Ok(Self {
            lease_time: f.required("leasetime")?,
            limit: f.required("limit")?,
            lease_time_unit: f.required("leasetimeUnit")?,
            start: f.required("start")?,
            lease_time_num: f.required("leasetimeNum")?,
            lan_ip: f.required("lanIp")?,
            ignore: f.required("ignore")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanDhcpDetails {
    pub code: i64,
    pub info: Vec<LanDhcpInfo>,
}

impl Record for LanDhcpDetails {
    const NAME: &'static str = "LanDhcpDetails";

    fn bind(f: &mut Fields<'_>) -> Result<Self, ValidationError> {
        Ok(Self {
            code: f.required("code")?,
            info: f.required("info")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanInfo {
    pub mac: String,
    pub uptime: i64,
    pub status: i64,
    #[serde(rename = "dnsAddrs")]
    pub dns_addrs: String,
    #[serde(rename = "dnsAddrs1")]
    pub dns_addrs1: String,
    pub ipv4: Vec<Ipv4Config>,
}

impl Record for LanInfo {
    const NAME: &'static str = "LanInfo";

    fn bind(f: &mut Fields<'_>) -> Result<Self, ValidationError> {
        Ok(Self {
            mac: f.required("mac")?,
            uptime: f.required("uptime")?,
            status: f.required("status")?,
            dns_addrs: f.required("dnsAddrs")?,
            dns_addrs1: f.required("dnsAddrs1")?,
            ipv4: f.required("ipv4")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanInfoDetails {
    pub code: i64,
    pub info: LanInfo,
    #[serde(rename = "linkList")]
    pub link_list: Vec<i64>,
}

impl Record for LanInfoDetails {
    const NAME: &'static str = "LanInfoDetails";

    fn bind(f: &mut Fields<'_>) -> Result<Self, ValidationError> {
        Ok(Self {
            code: f.required("code")?,
            info: f.required("info")?,
            link_list: f.required("linkList")?,
        })
    }
}

// ── DMZ / port forwarding ────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DmzResponse {
    pub status: i64,
    #[serde(rename = "lanip")]
    pub lan_ip: String,
    pub code: i64,
}

impl Record for DmzResponse {
    const NAME: &'static str = "DmzResponse";

    fn bind(f: &mut Fields<'_>) -> Result<Self, ValidationError> {
        Ok(Self {
            status: f.required("status")?,
            lan_ip: f.required("lanip")?,
            code: f.required("code")?,
        })
    }
}

/// One port-forwarding rule.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortForwardItem {
    /// Protocol selector code (TCP, UDP, both).
    pub proto: i64,
    pub name: String,
    #[serde(rename = "ftype")]
    pub forward_type: i64,
    #[serde(rename = "destport")]
    pub dest_port: i64,
    #[serde(rename = "srcport")]
    pub src_port: i64,
    #[serde(rename = "destip")]
    pub dest_ip: String,
}

impl Record for PortForwardItem {
    const NAME: &'static str = "PortForwardItem";

    fn bind(f: &mut Fields<'_>) -> Result<Self, ValidationError> {
        Ok(Self {
            proto: f.required("proto")?,
            name: f.required("name")?,
            forward_type: f.required("ftype")?,
            dest_port: f.required("destport")?,
            src_port: f.required("srcport")?,
            dest_ip: f.required("destip")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortForwardList {
    pub status: i64,
    pub list: Vec<PortForwardItem>,
    pub code: i64,
}

impl Record for PortForwardList {
    const NAME: &'static str = "PortForwardList";

    fn bind(f: &mut Fields<'_>) -> Result<Self, ValidationError> {
        Ok(Self {
            status: f.required("status")?,
            list: f.required("list")?,
            code: f.required("code")?,
        })
    }
}
