//! Network traversal helpers: iteration roots, alias ranges and prefix
//! display.

use std::net::{Ipv4Addr, Ipv6Addr};

use ipnetwork::{IpNetwork, Ipv4Network, Ipv6Network};

use crate::error::Result;

/// IPv6 ranges that alias the canonical IPv4 subtree at `::/96`.
///
/// GeoIP2 trees point the IPv4-mapped (`::ffff:0:0/96`), Teredo
/// (`2001::/32`) and 6to4 (`2002::/16`) ranges at the same nodes as
/// `::/96`; an unfiltered traversal would yield every IPv4 record up to
/// four times.
const ALIAS_RANGES: [(Ipv6Addr, u8); 3] = [
    (Ipv6Addr::new(0, 0, 0, 0, 0, 0xffff, 0, 0), 96),
    (Ipv6Addr::new(0x2001, 0, 0, 0, 0, 0, 0, 0), 32),
    (Ipv6Addr::new(0x2002, 0, 0, 0, 0, 0, 0, 0), 16),
];

/// Root CIDR covering the whole tree of a database with the given IP
/// version.
pub fn iteration_root(ip_version: u16) -> Result<IpNetwork> {
    let root = if ip_version == 4 {
        IpNetwork::V4(Ipv4Network::new(Ipv4Addr::UNSPECIFIED, 0)?)
    } else {
        IpNetwork::V6(Ipv6Network::new(Ipv6Addr::UNSPECIFIED, 0)?)
    };
    Ok(root)
}

/// Whether a traversed network lies inside one of the aliased IPv6 ranges.
pub fn is_aliased(net: &IpNetwork) -> bool {
    let v6 = match net {
        IpNetwork::V6(v6) => v6,
        IpNetwork::V4(_) => return false,
    };
    ALIAS_RANGES
        .iter()
        .any(|&(base, prefix)| v6.prefix() >= prefix && in_prefix(v6.network(), base, prefix))
}

/// Format a network the way the export prints it.
///
/// Networks inside the canonical `::/96` IPv4 subtree print in dotted IPv4
/// form with the mask length reduced by 96; everything else uses the plain
/// CIDR notation.
pub fn format_network(net: &IpNetwork) -> String {
    if let IpNetwork::V6(v6) = net {
        if v6.prefix() >= 96 {
            let octets = v6.network().octets();
            if octets[..12].iter().all(|&b| b == 0) {
                let v4 = Ipv4Addr::new(octets[12], octets[13], octets[14], octets[15]);
                return format!("{}/{}", v4, v6.prefix() - 96);
            }
        }
    }
    net.to_string()
}

/// Check whether the first `prefix` bits of `addr` and `base` agree.
fn in_prefix(addr: Ipv6Addr, base: Ipv6Addr, prefix: u8) -> bool {
    let mask = if prefix == 0 {
        0
    } else {
        u128::MAX << (128 - u32::from(prefix))
    };
    (u128::from(addr) & mask) == (u128::from(base) & mask)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v6(net: &str) -> IpNetwork {
        net.parse().unwrap()
    }

    #[test]
    fn test_iteration_root() {
        assert_eq!(iteration_root(4).unwrap().to_string(), "0.0.0.0/0");
        assert_eq!(iteration_root(6).unwrap().to_string(), "::/0");
    }

    #[test]
    fn test_aliased_ranges_are_skipped() {
        assert!(is_aliased(&v6("::ffff:1.2.3.0/120")));
        assert!(is_aliased(&v6("::ffff:0:0/96")));
        assert!(is_aliased(&v6("2001:0:4136::/48")));
        assert!(is_aliased(&v6("2002::/16")));
        assert!(is_aliased(&v6("2002:102:300::/40")));
    }

    #[test]
    fn test_canonical_networks_are_kept() {
        // The canonical IPv4 subtree itself
        assert!(!is_aliased(&v6("::102:300/120")));
        // Real IPv6 space, including 2001 space outside Teredo
        assert!(!is_aliased(&v6("2400:cb00::/32")));
        assert!(!is_aliased(&v6("2001:200::/32")));
        // A covering prefix shorter than the alias range
        assert!(!is_aliased(&v6("2000::/8")));
        // Plain IPv4 networks never alias
        assert!(!is_aliased(&"1.2.3.0/24".parse().unwrap()));
    }

    #[test]
    fn test_format_network_collapses_ipv4_subtree() {
        assert_eq!(format_network(&v6("::102:300/120")), "1.2.3.0/24");
        assert_eq!(format_network(&v6("::a00:0/104")), "10.0.0.0/8");
        assert_eq!(format_network(&v6("::1/128")), "0.0.0.1/32");
    }

    #[test]
    fn test_format_network_keeps_real_ipv6() {
        assert_eq!(format_network(&v6("2400:cb00::/32")), "2400:cb00::/32");
        // Prefixes shorter than /96 stay in IPv6 form even near zero
        assert_eq!(format_network(&v6("::/64")), "::/64");
        // IPv4-mapped space is not the canonical subtree
        assert_eq!(
            format_network(&v6("::ffff:1.2.3.0/120")),
            "::ffff:1.2.3.0/120"
        );
    }

    #[test]
    fn test_format_network_ipv4_passthrough() {
        let net: IpNetwork = "1.2.3.0/24".parse().unwrap();
        assert_eq!(format_network(&net), "1.2.3.0/24");
    }
}
