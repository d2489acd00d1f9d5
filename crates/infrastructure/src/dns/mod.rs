pub mod forwarding;
pub mod server;
pub mod transport;
pub mod upstream_exchange;

pub use server::DnsServerHandler;
pub use upstream_exchange::UdpUpstreamExchange;
