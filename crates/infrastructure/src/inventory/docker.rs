use super::model::{to_workload, ContainerInspect, ContainerSummary};
use async_trait::async_trait;
use bytes::Bytes;
use futures::future::try_join_all;
use http_body_util::{BodyExt, Empty};
use hyper::header::HOST;
use hyper::{Method, Request, StatusCode};
use hyper_util::rt::TokioIo;
use name_resolver_application::ports::WorkloadInventory;
use name_resolver_domain::{DomainError, Filter, Workload};
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use std::time::Duration;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::net::TcpStream;
use tracing::{debug, warn};

pub const DOCKER_HOST_ENV: &str = "DOCKER_HOST";
pub const DEFAULT_DOCKER_HOST: &str = "unix:///var/run/docker.sock";

/// Where the Docker Engine API listens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DockerEndpoint {
    Unix(String),
    Tcp(String),
}

impl DockerEndpoint {
    /// Parses `unix:///path`, `tcp://host:port` or `http://host:port`.
    pub fn parse(host: &str) -> Result<Self, DomainError> {
        let host = host.trim();
        if let Some(path) = host.strip_prefix("unix://") {
            if path.is_empty() {
                return Err(DomainError::InventoryUnavailable(format!(
                    "empty socket path in docker host '{}'",
                    host
                )));
            }
            return Ok(Self::Unix(path.to_string()));
        }

        let authority = host
            .strip_prefix("tcp://")
            .or_else(|| host.strip_prefix("http://"))
            .ok_or_else(|| {
                DomainError::InventoryUnavailable(format!("unsupported docker host '{}'", host))
            })?;
        let authority = authority.trim_end_matches('/');
        if authority.is_empty() {
            return Err(DomainError::InventoryUnavailable(format!(
                "empty address in docker host '{}'",
                host
            )));
        }
        Ok(Self::Tcp(authority.to_string()))
    }

    /// Explicit host, then `DOCKER_HOST`, then the default socket.
    pub fn resolve(configured: Option<&str>) -> Result<Self, DomainError> {
        match configured {
            Some(host) => Self::parse(host),
            None => match std::env::var(DOCKER_HOST_ENV) {
                Ok(host) if !host.trim().is_empty() => Self::parse(&host),
                _ => Self::parse(DEFAULT_DOCKER_HOST),
            },
        }
    }
}

/// Workload inventory backed by the local Docker daemon.
pub struct DockerInventory {
    endpoint: DockerEndpoint,
    timeout: Duration,
}

impl DockerInventory {
    pub fn new(endpoint: DockerEndpoint, timeout: Duration) -> Self {
        Self { endpoint, timeout }
    }

    async fn list_containers(&self, filter: &Filter) -> Result<Vec<Workload>, DomainError> {
        let path = format!("/containers/json?filters={}", encode_filters(filter));
        let summaries: Vec<ContainerSummary> = match self.get_json(&path).await? {
            Some(summaries) => summaries,
            None => {
                return Err(DomainError::InventoryUnavailable(
                    "container list endpoint not found".to_string(),
                ))
            }
        };

        debug!(containers = summaries.len(), "Listed containers");

        let inspected = try_join_all(summaries.iter().map(|summary| async move {
            let path = format!("/containers/{}/json", summary.id);
            let inspect: Option<ContainerInspect> = self.get_json(&path).await?;
            Ok::<_, DomainError>(inspect.map(|inspect| to_workload(summary, inspect)))
        }))
        .await?;

        Ok(inspected.into_iter().flatten().collect())
    }

    /// `GET path` decoded as JSON. `None` on 404.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>, DomainError> {
        let (status, body) = match &self.endpoint {
            #[cfg(unix)]
            DockerEndpoint::Unix(socket) => {
                let stream = tokio::net::UnixStream::connect(socket)
                    .await
                    .map_err(|e| unavailable(format!("connect to {}: {}", socket, e)))?;
                send_get(stream, path).await?
            }
            #[cfg(not(unix))]
            DockerEndpoint::Unix(socket) => {
                return Err(unavailable(format!(
                    "unix sockets are not supported on this platform: {}",
                    socket
                )))
            }
            DockerEndpoint::Tcp(authority) => {
                let stream = TcpStream::connect(authority.as_str())
                    .await
                    .map_err(|e| unavailable(format!("connect to {}: {}", authority, e)))?;
                send_get(stream, path).await?
            }
        };

        if status == StatusCode::NOT_FOUND {
            warn!(path = %path, "Docker API returned 404, skipping");
            return Ok(None);
        }
        if !status.is_success() {
            return Err(unavailable(format!(
                "GET {} returned {}: {}",
                path,
                status,
                String::from_utf8_lossy(&body).trim()
            )));
        }

        serde_json::from_slice(&body)
            .map(Some)
            .map_err(|e| unavailable(format!("invalid JSON from GET {}: {}", path, e)))
    }
}

#[async_trait]
impl WorkloadInventory for DockerInventory {
    async fn list_workloads(&self, filter: &Filter) -> Result<Vec<Workload>, DomainError> {
        tokio::time::timeout(self.timeout, self.list_containers(filter))
            .await
            .map_err(|_| {
                unavailable(format!(
                    "Docker API did not answer within {}ms",
                    self.timeout.as_millis()
                ))
            })?
    }
}

async fn send_get<S>(stream: S, path: &str) -> Result<(StatusCode, Bytes), DomainError>
where
    S: AsyncRead + AsyncWrite + Unpin + Send + 'static,
{
    let (mut sender, connection) = hyper::client::conn::http1::handshake(TokioIo::new(stream))
        .await
        .map_err(|e| unavailable(format!("HTTP handshake failed: {}", e)))?;

    tokio::spawn(async move {
        if let Err(e) = connection.await {
            debug!(error = %e, "Docker API connection closed with error");
        }
    });

    let request = Request::builder()
        .method(Method::GET)
        .uri(path)
        .header(HOST, "docker")
        .body(Empty::<Bytes>::new())
        .map_err(|e| unavailable(format!("invalid request for {}: {}", path, e)))?;

    let response = sender
        .send_request(request)
        .await
        .map_err(|e| unavailable(format!("GET {} failed: {}", path, e)))?;

    let status = response.status();
    let body = response
        .into_body()
        .collect()
        .await
        .map_err(|e| unavailable(format!("reading body of GET {} failed: {}", path, e)))?
        .to_bytes();

    Ok((status, body))
}

/// URL-encoded `filters` query value: `{"label":[..],"name":[..]}`.
pub fn encode_filters(filter: &Filter) -> String {
    let mut filters: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    if !filter.labels.is_empty() {
        filters.insert("label", filter.labels.iter().map(String::as_str).collect());
    }
    if let Some(name) = filter.name() {
        filters.insert("name", vec![name]);
    }

    let json = serde_json::to_string(&filters).unwrap_or_else(|_| "{}".to_string());
    url::form_urlencoded::byte_serialize(json.as_bytes()).collect()
}

fn unavailable(reason: String) -> DomainError {
    DomainError::InventoryUnavailable(reason)
}
