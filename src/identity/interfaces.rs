//! Outbound IPv4 selection over enumerated interfaces.

use std::net::Ipv4Addr;

use get_if_addrs::{IfAddr, Interface};

/// First IPv4 address on a non-loopback interface, in enumeration order.
pub fn first_ipv4(ifaces: &[Interface]) -> Option<Ipv4Addr> {
    ifaces
        .iter()
        .filter(|iface| !iface.is_loopback())
        .find_map(|iface| match &iface.addr {
            IfAddr::V4(v4) if !v4.ip.is_loopback() && !v4.ip.is_unspecified() => Some(v4.ip),
            _ => None,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use get_if_addrs::{Ifv4Addr, Ifv6Addr};
    use std::net::Ipv6Addr;

    fn v4(name: &str, ip: Ipv4Addr) -> Interface {
        Interface {
            name: name.to_string(),
            addr: IfAddr::V4(Ifv4Addr {
                ip,
                netmask: Ipv4Addr::new(255, 255, 255, 0),
                broadcast: None,
            }),
        }
    }

    fn v6(name: &str, ip: Ipv6Addr) -> Interface {
        Interface {
            name: name.to_string(),
            addr: IfAddr::V6(Ifv6Addr {
                ip,
                netmask: Ipv6Addr::UNSPECIFIED,
                broadcast: None,
            }),
        }
    }

    #[test]
    fn test_skips_loopback_and_ipv6() {
        let ifaces = vec![
            v4("lo", Ipv4Addr::LOCALHOST),
            v6("eth0", "fe80::1".parse().unwrap()),
            v4("eth0", Ipv4Addr::new(192, 168, 1, 20)),
            v4("wlan0", Ipv4Addr::new(10, 0, 0, 3)),
        ];
        assert_eq!(first_ipv4(&ifaces), Some(Ipv4Addr::new(192, 168, 1, 20)));
    }

    #[test]
    fn test_none_when_only_loopback() {
        let ifaces = vec![v4("lo", Ipv4Addr::LOCALHOST), v6("lo", Ipv6Addr::LOCALHOST)];
        assert_eq!(first_ipv4(&ifaces), None);
        assert_eq!(first_ipv4(&[]), None);
    }
}
