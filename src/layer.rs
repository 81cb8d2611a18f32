//! Middleware that gives outgoing requests a default `User-Agent`.
//!
//! A request that already carries a `User-Agent` header, whatever its
//! value, is passed through untouched.
//!
//! ```
//! use http_useragent::{SetUserAgentLayer, UserAgent};
//! use tower::ServiceBuilder;
//! # use std::convert::Infallible;
//! # let http_client = tower::service_fn(|_: http::Request<()>| async {
//! #     Ok::<_, Infallible>(http::Response::new(()))
//! # });
//!
//! let ua = UserAgent::terraform("1.2.3");
//! let client = ServiceBuilder::new()
//!     .layer(SetUserAgentLayer::from_user_agent(&ua)?)
//!     .service(http_client);
//! # Ok::<(), http_useragent::Error>(())
//! ```

use crate::error::{Error, Result};
use crate::types::UserAgent;
use http::header::USER_AGENT;
use http::{HeaderValue, Request};
use std::task::{Context, Poll};
use tower::{Layer, Service};

/// Layer that applies [`SetUserAgent`].
#[derive(Debug, Clone)]
pub struct SetUserAgentLayer {
    user_agent: HeaderValue,
}

impl SetUserAgentLayer {
    pub fn new(user_agent: HeaderValue) -> Self {
        Self { user_agent }
    }

    pub fn from_user_agent(user_agent: &UserAgent) -> Result<Self> {
        Ok(Self::new(user_agent.to_header_value()?))
    }

}

impl TryFrom<&str> for SetUserAgentLayer {
    type Error = Error;

    fn try_from(user_agent: &str) -> Result<Self> {
        Ok(Self::new(HeaderValue::from_str(user_agent)?))
    }
}

impl<S> Layer<S> for SetUserAgentLayer {
    type Service = SetUserAgent<S>;

    fn layer(&self, inner: S) -> Self::Service {
        SetUserAgent {
            inner,
            user_agent: self.user_agent.clone(),
        }
    }
}

/// Sets `User-Agent` on requests that don't have one, then calls `inner`.
#[derive(Debug, Clone)]
pub struct SetUserAgent<S> {
    inner: S,
    user_agent: HeaderValue,
}

impl<S> SetUserAgent<S> {
    pub fn new(inner: S, user_agent: HeaderValue) -> Self {
        Self { inner, user_agent }
    }
}

impl<S, B> Service<Request<B>> for SetUserAgent<S>
where
    S: Service<Request<B>>,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<std::result::Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request<B>) -> Self::Future {
        if !req.headers().contains_key(USER_AGENT) {
            req.headers_mut().insert(USER_AGENT, self.user_agent.clone());
        }
        self.inner.call(req)
    }
}
