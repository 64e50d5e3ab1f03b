// Typed records for every router API response.
//
// Each record binds its declared fields in order through `Record::bind` and
// serializes back under the same wire keys.

pub mod devices;
pub mod network;
pub mod system;
pub mod vpn;
pub mod wifi;

pub use devices::{
    DeviceEntry, DeviceIpDetails, DeviceListItem, DeviceListResponse, DeviceTrafficStatistics,
    MacBindEntry, MacBindInfo, MacFilterDeviceStatistics, MacFilterInfo,
};
pub use network::{
    DmzResponse, IpAddress, Ipv4Config, Ipv6Info, LanDhcpDetails, LanDhcpInfo, LanInfo,
    LanInfoDetails, PortForwardItem, PortForwardList, PppoeStatus, WanDetails, WanInfo,
    WanInfoDetails,
};
pub use system::{
    BasicCodeResponse, BasicStatusResponse, LanguageResponse, LocationResponse,
    NewStatusResponse, QosInfo, RouterName, RouterTime, SystemDevice, SystemStatusCpu,
    SystemStatusHardware, SystemStatusMemory, SystemStatusResponse, SystemStatusWan,
    TimeResponse,
};
pub use vpn::{
    SmartVpnInfo, SmartVpnInfoResponse, VpnCreateItem, VpnCurrentItem, VpnItem, VpnResponse,
    VpnStatusResponse,
};
pub use wifi::{WifiChannelInfo, WifiDetails, WifiInterfaceInfo, WifiShareInfoResponse};
