//! Client IP selection behind proxies
//!
//! Picks the visitor IP from the socket remote address and an
//! `X-Forwarded-For` chain, walking the chain right to left and skipping
//! hops inside the trusted proxy CIDRs. Framework-free: header values come
//! in as plain strings.

use ipnet::IpNet;
use std::net::IpAddr;

fn is_trusted(ip: IpAddr, trusted_proxies: &[IpNet]) -> bool {
    trusted_proxies.iter().any(|net| net.contains(&ip))
}

/// Select the client IP for a request.
///
/// With no trusted proxies configured the forwarded header is untrusted and
/// the socket address wins. Otherwise the socket address must itself be a
/// trusted proxy for the header to count, and the first address from the
/// right that is not a trusted proxy is the client.
pub fn extract_client_ip(
    socket_addr: IpAddr,
    forwarded_for: Option<&str>,
    trusted_proxies: &[IpNet],
) -> IpAddr {
    if trusted_proxies.is_empty() || !is_trusted(socket_addr, trusted_proxies) {
        return socket_addr;
    }

    let Some(header) = forwarded_for else {
        return socket_addr;
    };

    let chain: Vec<IpAddr> = header
        .split(',')
        .filter_map(|s| s.trim().parse::<IpAddr>().ok())
        .collect();

    chain
        .iter()
        .rev()
        .find(|ip| !is_trusted(**ip, trusted_proxies))
        .copied()
        .unwrap_or(socket_addr)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn net(s: &str) -> IpNet {
        s.parse().unwrap()
    }

    #[test]
    fn test_no_trusted_proxies_uses_socket() {
        let socket: IpAddr = "203.0.113.1".parse().unwrap();
        let result = extract_client_ip(socket, Some("198.51.100.2"), &[]);
        assert_eq!(result, socket);
    }

    #[test]
    fn test_untrusted_socket_ignores_header() {
        let socket: IpAddr = "203.0.113.1".parse().unwrap();
        let proxies = [net("10.0.0.0/8")];
        let result = extract_client_ip(socket, Some("198.51.100.2"), &proxies);
        assert_eq!(result, socket);
    }

    #[test]
    fn test_trusted_socket_walks_chain_from_right() {
        let socket: IpAddr = "10.0.0.5".parse().unwrap();
        let proxies = [net("10.0.0.0/8")];
        let result = extract_client_ip(
            socket,
            Some("198.51.100.2, 203.0.113.9, 10.0.0.7"),
            &proxies,
        );
        assert_eq!(result, "203.0.113.9".parse::<IpAddr>().unwrap());
    }

    #[test]
    fn test_all_hops_trusted_falls_back_to_socket() {
        let socket: IpAddr = "10.0.0.5".parse().unwrap();
        let proxies = [net("10.0.0.0/8")];
        let result = extract_client_ip(socket, Some("10.0.0.1, 10.0.0.2"), &proxies);
        assert_eq!(result, socket);
    }

    #[test]
    fn test_garbage_entries_are_skipped() {
        let socket: IpAddr = "10.0.0.5".parse().unwrap();
        let proxies = [net("10.0.0.0/8")];
        let result = extract_client_ip(socket, Some("unknown, 203.0.113.9"), &proxies);
        assert_eq!(result, "203.0.113.9".parse::<IpAddr>().unwrap());
    }
}
