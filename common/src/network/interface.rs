use std::fmt;
use std::net::Ipv4Addr;

use pnet::datalink::{self, NetworkInterface};
use pnet::ipnetwork::IpNetwork;

/// One usable (interface, IPv4 address) pairing as reported by the OS.
///
/// Interface names are not guaranteed unique across entries: a multi-homed
/// interface produces one record per address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceAddr {
    pub name: String,
    pub addr: Ipv4Addr,
}

impl fmt::Display for InterfaceAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.name, self.addr)
    }
}

/// Queries the OS for every non-loopback IPv4 address.
///
/// Enumeration order is preserved. An empty result is a valid answer, not an
/// error; callers decide how to report it.
pub fn list() -> Vec<InterfaceAddr> {
    let interfaces = datalink::interfaces();
    tracing::debug!(total = interfaces.len(), "enumerated network interfaces");
    collect_ipv4(interfaces)
}

/// Filters an interface dump down to the addresses a device on the local
/// network could reach. Loopback interfaces are dropped wholesale; loopback
/// addresses on other interfaces are dropped individually.
pub fn collect_ipv4(interfaces: Vec<NetworkInterface>) -> Vec<InterfaceAddr> {
    interfaces
        .into_iter()
        .filter(|iface| !iface.is_loopback())
        .flat_map(|iface| {
            let name = iface.name;
            iface.ips.into_iter().filter_map(move |net| match net {
                IpNetwork::V4(v4) if !v4.ip().is_loopback() => Some(InterfaceAddr {
                    name: name.clone(),
                    addr: v4.ip(),
                }),
                _ => None,
            })
        })
        .collect()
}
