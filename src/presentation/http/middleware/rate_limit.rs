// src/presentation/http/middleware/rate_limit.rs
use ::governor::middleware::NoOpMiddleware;
use axum::body::Body;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor,
};

pub type WriteLimiter = GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware, Body>;

/// Per-client allowance on the write endpoints: `burst` requests up front,
/// then one more every `period_secs` seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteQuota {
    pub period_secs: u64,
    pub burst: u32,
}

impl Default for WriteQuota {
    fn default() -> Self {
        Self {
            period_secs: 2,
            burst: 10,
        }
    }
}

/// One limiter shared by every write route of a router, so a client's
/// allowance is spent across all of them. Clients are keyed by forwarded
/// headers or the peer address, which needs the server started with connect
/// info. `None` when either quota field is zero.
pub fn write_limiter(quota: WriteQuota) -> Option<WriteLimiter> {
    if quota.period_secs == 0 || quota.burst == 0 {
        return None;
    }

    let mut builder = GovernorConfigBuilder::default();
    builder.per_second(quota.period_secs);
    builder.burst_size(quota.burst);
    let config = builder.key_extractor(SmartIpKeyExtractor).finish()?;

    Some(GovernorLayer::new(config))
}
