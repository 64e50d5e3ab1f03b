// Shared payload fixtures, shaped like real firmware responses.
#![allow(dead_code)]

use serde_json::{Value, json};

use miwifi_api::Endpoint;

// ── Network ─────────────────────────────────────────────────────────

pub fn wan() -> Value {
    json!({
        "code": 0,
        "info": {
            "mac": "8C:53:C3:00:11:22",
            "link": 1,
            "details": {
                "username": "isp-user",
                "ifname": "eth1",
                "dns": ["1.1.1.1", "8.8.8.8"],
                "wanType": "pppoe",
                "mru": "1480",
                "service": "",
                "password": "secret",
                "peerdns": "1"
            },
            "special": 0,
            "dnsAddrs1": "8.8.8.8",
            "status": 1,
            "internet_tag": 0,
            "dnsAddrs": "1.1.1.1",
            "uptime": 86400,
            "gateWay": "100.64.0.1",
            "ipv6_info": { "wanType": "off" },
            "ipv6_show": 0,
            "mtu": "1480",
            "ipv4": [{ "mask": "255.255.255.255", "address": "100.64.12.34" }]
        }
    })
}

pub fn pppoe_status() -> Value {
    json!({
        "proto": "pppoe",
        "dns": ["1.1.1.1"],
        "code": 0,
        "pppoename": "isp-user",
        "peerdns": 1,
        "ip": { "mask": "255.255.255.255", "address": "100.64.12.34" },
        "password": "secret",
        "cdns": [],
        "status": 2,
        "gw": "100.64.0.1"
    })
}

pub fn lan_dhcp() -> Value {
    json!({
        "code": 0,
        "info": [{
            "leasetime": "12h",
            "limit": 150,
            "leasetimeUnit": "h",
            "start": 5,
            "leasetimeNum": "12",
            "lanIp": [{ "mask": "255.255.255.0", "address": "192.168.31.1" }],
            "ignore": 0
        }]
    })
}

pub fn lan_info() -> Value {
    json!({
        "code": 0,
        "info": {
            "mac": "8C:53:C3:00:11:21",
            "uptime": 0,
            "status": 1,
            "dnsAddrs": "",
            "dnsAddrs1": "",
            "ipv4": [{ "mask": "255.255.255.0", "ip": "192.168.31.1" }]
        },
        "linkList": [1, 0, 0]
    })
}

pub fn dmz() -> Value {
    json!({ "status": 0, "lanip": "192.168.31.50", "code": 0 })
}

pub fn port_forward() -> Value {
    json!({
        "status": 0,
        "list": [
            { "proto": 1, "name": "ssh", "ftype": 1, "destport": 22, "srcport": 2222, "destip": "192.168.31.10" },
            { "proto": 3, "name": "game", "ftype": 1, "destport": "27015", "srcport": "27015", "destip": "192.168.31.11" }
        ],
        "code": 0
    })
}

// ── WiFi ────────────────────────────────────────────────────────────

fn radio(ifname: &str, channel: Value, encryption: &str) -> Value {
    json!({
        "ifname": ifname,
        "channelInfo": { "bandwidth": "80", "bandList": [36, 40, 44, 48], "channel": 36 },
        "encryption": encryption,
        "bandwidth": "80",
        "kickthreshold": 0,
        "status": "1",
        "mode": "Master",
        "ssid": "home",
        "weakthreshold": 0,
        "device": "wl0.network2",
        "ax": "1",
        "hidden": "0",
        "password": "correct horse",
        "channel": channel,
        "txpwr": "max",
        "weakenable": 0,
        "txbf": "3",
        "signal": -42
    })
}

pub fn wifi() -> Value {
    wifi_with_channels(json!("0"), json!(36))
}

/// Two radios with the given `channel` values.
pub fn wifi_with_channels(first: Value, second: Value) -> Value {
    json!({
        "bsd": 0,
        "info": [
            radio("wl1", first, "psk2"),
            radio("wl0", second, "mixed-psk")
        ],
        "code": 0
    })
}

pub fn wifi_share() -> Value {
    json!({ "code": 0, "info": { "guest": 0, "sns": ["wechat"], "data": { "timeout": "nil" } } })
}

// ── Devices ─────────────────────────────────────────────────────────

fn device_entry(mac: &str) -> Value {
    json!({
        "isap": 0,
        "parent": "",
        "added": 1,
        "ip": "192.168.31.23",
        "port": 1,
        "hostname": "laptop",
        "mac": mac,
        "origin_name": "laptop",
        "ptype": 1,
        "authority": { "wan": 1, "lan": 0, "admin": 1, "pridisk": 0 },
        "company": { "icon": "apple.png", "id": 1 },
        "push": 0,
        "name": "laptop",
        "times": 0,
        "type": "pc",
        "statistics": {
            "mac": mac,
            "maxdownloadspeed": "1048576",
            "upload": "9216",
            "upspeed": "0",
            "ip": "192.168.31.23",
            "downspeed": 128,
            "online": "3600",
            "dev": "wl1",
            "maxuploadspeed": 524_288,
            "download": "5242880"
        },
        "ctype": 1,
        "online": 1
    })
}

pub fn mac_filter() -> Value {
    json!({
        "weblist": [],
        "flist": [device_entry("AA:BB:CC:00:00:01")],
        "code": 0
    })
}

pub fn mac_bind() -> Value {
    json!({
        "devicelist": [device_entry("AA:BB:CC:00:00:02")],
        "list": [{ "mac": "AA:BB:CC:00:00:02", "tag": 2, "name": "nas", "ip": "192.168.31.2" }],
        "code": 0
    })
}

pub fn device_list() -> Value {
    json!({
        "mac": "AA:BB:CC:00:00:01",
        "list": [{
            "mac": "AA:BB:CC:00:00:03",
            "oname": "iPhone",
            "isap": 0,
            "parent": "",
            "authority": { "wan": 1, "lan": 0 },
            "push": 0,
            "online": 1,
            "name": "phone",
            "times": 0,
            "ip": [{ "downspeed": "0", "online": "120", "active": 1, "upspeed": "0", "ip": "192.168.31.40" }],
            "statistics": { "downspeed": "0", "online": "120", "upspeed": "0" },
            "icon": "",
            "type": 2
        }],
        "code": 0
    })
}

// ── VPN ─────────────────────────────────────────────────────────────

pub fn vpn_status() -> Value {
    json!({ "code": 0, "status": 0, "uptime": "1 day, 2:03:04" })
}

pub fn vpn() -> Value {
    vpn_with_current(json!({
        "username": "alice",
        "id": "1700000000",
        "password": "pw",
        "server": "vpn.example.net",
        "oname": "office",
        "proto": "l2tp",
        "auto": "1"
    }))
}

pub fn vpn_with_current(current: Value) -> Value {
    json!({
        "code": 0,
        "list": [{
            "username": "alice",
            "id": "1700000000",
            "password": "pw",
            "server": "vpn.example.net",
            "oname": "office",
            "proto": "l2tp"
        }, {
            "username": "bob",
            "id": "1700000001",
            "password": "pw",
            "server": "10.8.0.1",
            "oname": "nil",
            "proto": "pptp"
        }],
        "current": current
    })
}

pub fn vpn_create() -> Value {
    json!({
        "oname": "office",
        "proto": "pptp",
        "server": "vpn.example.net",
        "username": "alice",
        "password": "pw"
    })
}

pub fn smart_vpn() -> Value {
    json!({
        "code": 0,
        "info": {
            "status": 1,
            "mode": 2,
            "ulist": "nil",
            "mlist": ["AA:BB:CC:00:00:01"],
            "name": null,
            "switch": 1
        }
    })
}

// ── System ──────────────────────────────────────────────────────────

pub fn system_status() -> Value {
    json!({
        "code": 0,
        "count": { "all": 4, "online": 3 },
        "upTime": "3600.25",
        "hardware": {
            "mac": "8C:53:C3:00:11:20",
            "platform": "RA67",
            "version": "1.0.168",
            "channel": "release",
            "sn": "12345/A1B2C3"
        },
        "dev": [{
            "mac": "AA:BB:CC:00:00:01",
            "maxdownloadspeed": "2097152",
            "upload": "1024",
            "upspeed": "0",
            "downspeed": "1536",
            "online": "600",
            "devname": "laptop",
            "maxuploadspeed": "65536",
            "download": "10485760"
        }],
        "cpu": { "core": 2, "hz": "1.2GHz", "load": 0.0452 },
        "mem": { "usage": 0.47, "total": "256MB", "hz": "800MHz", "type": "DDR3" },
        "wan": {
            "downspeed": "2048",
            "maxdownloadspeed": "8388608",
            "devname": "nil",
            "upload": "104857600",
            "upspeed": "512",
            "maxuploadspeed": "1048576",
            "download": "1073741824"
        }
    })
}

pub fn new_status() -> Value {
    json!({
        "count": 4,
        "code": 0,
        "hardware": { "mac": "8C:53:C3:00:11:20", "platform": "RA67" },
        "2g": { "ssid": "home", "online_sta_count": 1 },
        "5g": { "ssid": "home-5G", "online_sta_count": 2 }
    })
}

pub fn time() -> Value {
    json!({
        "time": {
            "min": 5, "day": 19, "index": 0, "month": 10, "year": 2026,
            "sec": 42, "hour": 21, "timezone": "CST-8"
        },
        "code": 0
    })
}

pub fn router_name() -> Value {
    json!({ "code": 0, "name": "Xiaomi_1122", "local": "home" })
}

pub fn location() -> Value {
    json!({ "location": "CN", "code": 0 })
}

pub fn language() -> Value {
    json!({
        "list": [{ "lang": "zh_cn", "name": "简体中文" }, { "lang": "en", "name": "English" }],
        "code": 0,
        "lang": "en"
    })
}

pub fn qos() -> Value {
    json!({
        "band": { "upload": 100, "download": 1000 },
        "code": 0,
        "status": { "on": 1, "mode": 2 },
        "local": {},
        "guest": { "percent": 0.6 },
        "list": [{ "mac": "AA:BB:CC:00:00:01" }]
    })
}

pub fn basic_code() -> Value {
    json!({ "code": 0 })
}

pub fn basic_status() -> Value {
    json!({ "code": 0, "status": 1 })
}

/// One valid payload per registered endpoint.
pub fn all() -> Vec<(Endpoint, Value)> {
    vec![
        (Endpoint::Wan, wan()),
        (Endpoint::PppoeStatus, pppoe_status()),
        (Endpoint::LanDhcp, lan_dhcp()),
        (Endpoint::LanInfo, lan_info()),
        (Endpoint::Dmz, dmz()),
        (Endpoint::PortForward, port_forward()),
        (Endpoint::Wifi, wifi()),
        (Endpoint::WifiShare, wifi_share()),
        (Endpoint::MacFilter, mac_filter()),
        (Endpoint::MacBind, mac_bind()),
        (Endpoint::DeviceList, device_list()),
        (Endpoint::VpnStatus, vpn_status()),
        (Endpoint::Vpn, vpn()),
        (Endpoint::VpnCreate, vpn_create()),
        (Endpoint::SmartVpn, smart_vpn()),
        (Endpoint::SystemStatus, system_status()),
        (Endpoint::NewStatus, new_status()),
        (Endpoint::Time, time()),
        (Endpoint::RouterName, router_name()),
        (Endpoint::Location, location()),
        (Endpoint::Language, language()),
        (Endpoint::Qos, qos()),
        (Endpoint::BasicCode, basic_code()),
        (Endpoint::BasicStatus, basic_status()),
    ]
}
