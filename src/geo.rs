use crate::config::Config;
use crate::errors::AppError;
use maxminddb::geoip2;
use reqwest::Client;
use serde::Deserialize;
use std::net::IpAddr;
use std::time::Duration;

/// Hard ceiling on the remote lookup; a slow geolocation service must never
/// stall a quote submission.
const GEO_LOOKUP_TIMEOUT: Duration = Duration::from_secs(3);

/// Geolocation record attached to a submission. Every field is optional; the
/// local database has no ISP data and the remote service may omit anything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeoInfo {
    /// Country name.
    pub country: Option<String>,
    /// Region or state name.
    pub region: Option<String>,
    /// City name.
    pub city: Option<String>,
    /// Latitude in decimal degrees.
    pub latitude: Option<f64>,
    /// Longitude in decimal degrees.
    pub longitude: Option<f64>,
    /// IANA timezone name.
    pub timezone: Option<String>,
    /// Internet service provider, when the source knows it.
    pub isp: Option<String>,
}

impl GeoInfo {
    /// "City, Region, Country" with absent parts skipped; "Unknown" when empty.
    pub fn summary(&self) -> String {
        let parts: Vec<&str> = [&self.city, &self.region, &self.country]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .collect();
        if parts.is_empty() {
            "Unknown".to_string()
        } else {
            parts.join(", ")
        }
    }

    fn is_empty(&self) -> bool {
        self.country.is_none() && self.region.is_none() && self.city.is_none()
    }
}

/// Whether an already-normalized client IP is worth a remote lookup.
/// "Unknown" placeholders and loopback addresses are not.
pub fn is_routable(ip: &str) -> bool {
    ip != "Unknown" && !ip.starts_with("127.") && ip != "::1"
}

/// IP geolocation with a local-first strategy: a GeoLite2 database when one is
/// configured, then the remote JSON API as fallback. Both sources are optional
/// and every failure degrades to "no geolocation".
pub struct GeoService {
    reader: Option<maxminddb::Reader<Vec<u8>>>,
    client: Client,
    api_base: String,
}

impl GeoService {
    /// Creates the service from configuration.
    ///
    /// A missing or unreadable database file is logged and tolerated; lookups
    /// then rely on the remote API alone.
    pub fn new(config: &Config) -> Self {
        let reader = match &config.geoip_db_path {
            Some(path) => match maxminddb::Reader::open_readfile(path) {
                Ok(reader) => {
                    tracing::info!("GeoIP database loaded from {}", path);
                    Some(reader)
                }
                Err(e) => {
                    tracing::warn!(
                        "Could not open GeoIP database at {}: {} (remote lookups only)",
                        path,
                        e
                    );
                    None
                }
            },
            None => {
                tracing::debug!("No GeoIP database configured; remote lookups only");
                None
            }
        };

        Self {
            reader,
            client: Client::new(),
            api_base: config.geoip_api_url.clone(),
        }
    }

    /// Resolves geolocation for a normalized client IP, absorbing every failure.
    ///
    /// Local database first; if that yields nothing and the address is routable,
    /// one remote query bounded by [`GEO_LOOKUP_TIMEOUT`]. Returns `None` on any
    /// miss, timeout, transport error, or non-success payload.
    pub async fn resolve(&self, ip: &str) -> Option<GeoInfo> {
        if let Ok(addr) = ip.parse::<IpAddr>() {
            if let Some(info) = self.local_lookup(addr) {
                tracing::debug!("Local GeoIP hit for {}: {}", ip, info.summary());
                return Some(info);
            }
        }

        if !is_routable(ip) {
            tracing::debug!("Skipping remote geolocation for non-routable address {}", ip);
            return None;
        }

        match self.remote_lookup(ip).await {
            Ok(info) => {
                tracing::debug!("Remote geolocation for {}: {}", ip, info.summary());
                Some(info)
            }
            Err(e) => {
                tracing::warn!("Geolocation lookup failed for {}: {}", ip, e);
                None
            }
        }
    }

    /// Local GeoLite2 City lookup; `None` on no reader, no record, or a record
    /// with no usable place names.
    fn local_lookup(&self, addr: IpAddr) -> Option<GeoInfo> {
        let reader = self.reader.as_ref()?;
        let city: geoip2::City = reader.lookup(addr).ok()?;

        let info = GeoInfo {
            country: city
                .country
                .as_ref()
                .and_then(|c| c.names.as_ref())
                .and_then(|names| names.get("en"))
                .map(|s| s.to_string()),
            region: city
                .subdivisions
                .as_ref()
                .and_then(|subs| subs.first())
                .and_then(|sub| {
                    sub.names
                        .as_ref()
                        .and_then(|names| names.get("en"))
                        .copied()
                        .or(sub.iso_code)
                })
                .map(|s| s.to_string()),
            city: city
                .city
                .as_ref()
                .and_then(|c| c.names.as_ref())
                .and_then(|names| names.get("en"))
                .map(|s| s.to_string()),
            latitude: city.location.as_ref().and_then(|l| l.latitude),
            longitude: city.location.as_ref().and_then(|l| l.longitude),
            timezone: city
                .location
                .as_ref()
                .and_then(|l| l.time_zone)
                .map(|s| s.to_string()),
            // GeoLite2 City carries no ISP data
            isp: None,
        };

        if info.is_empty() {
            None
        } else {
            Some(info)
        }
    }

    /// One remote query against the ip-api.com JSON shape.
    async fn remote_lookup(&self, ip: &str) -> Result<GeoInfo, AppError> {
        let url = format!("{}/{}", self.api_base, ip);

        let response = self
            .client
            .get(&url)
            .timeout(GEO_LOOKUP_TIMEOUT)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AppError::ExternalApiError(format!(
                "Geolocation API returned status {}",
                response.status()
            )));
        }

        let body: RemoteGeoResponse = response.json().await.map_err(|e| {
            AppError::ExternalApiError(format!("Failed to parse geolocation response: {}", e))
        })?;

        if body.status != "success" {
            return Err(AppError::ExternalApiError(format!(
                "Geolocation API reported status '{}' for {}",
                body.status, ip
            )));
        }

        Ok(GeoInfo {
            country: body.country,
            region: body.region_name,
            city: body.city,
            latitude: body.lat,
            longitude: body.lon,
            timezone: body.timezone,
            isp: body.isp,
        })
    }
}

/// Response shape of the ip-api.com JSON endpoint.
#[derive(Debug, Deserialize)]
struct RemoteGeoResponse {
    status: String,
    country: Option<String>,
    #[serde(rename = "regionName")]
    region_name: Option<String>,
    city: Option<String>,
    lat: Option<f64>,
    lon: Option<f64>,
    timezone: Option<String>,
    isp: Option<String>,
}
