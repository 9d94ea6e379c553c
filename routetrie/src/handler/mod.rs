//! Defines types for routetrie handlers
//!
//! A function can be used directly as a handler through the blanket implementation of
//! `Handler`, but the trait can also be implemented directly for greater control. The tree itself
//! only stores handlers, it never calls them.
use std::fmt;
use std::sync::Arc;

use hyper::{Body, Request, Response};

use crate::router::params::Params;

/// A `Handler` receives a request that was routed to it, together with the values bound to the
/// dynamic segments of the matched template, and writes its answer into the response.
pub trait Handler: Send + Sync {
    /// Handles the request, writing into `res`.
    fn handle(&self, res: &mut Response<Body>, req: &Request<Body>, params: Params);
}

impl<F> Handler for F
where
    F: Fn(&mut Response<Body>, &Request<Body>, Params) + Send + Sync,
{
    fn handle(&self, res: &mut Response<Body>, req: &Request<Body>, params: Params) {
        self(res, req, params)
    }
}

/// Shared, type-erased handler reference. This is the default handler type stored in a `Tree`.
#[derive(Clone)]
pub struct Handle(Arc<dyn Handler>);

impl Handle {
    /// Wraps `handler` into a `Handle`.
    pub fn new<H>(handler: H) -> Self
    where
        H: Handler + 'static,
    {
        Handle(Arc::new(handler))
    }

    /// True if both handles refer to the same handler value.
    pub fn same(&self, other: &Handle) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Handler for Handle {
    fn handle(&self, res: &mut Response<Body>, req: &Request<Body>, params: Params) {
        self.0.handle(res, req, params)
    }
}

impl fmt::Debug for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Handle")
            .field(&Arc::as_ptr(&self.0))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::params::Param;
    use hyper::StatusCode;

    fn greet(res: &mut Response<Body>, _req: &Request<Body>, params: Params) {
        *res.status_mut() = StatusCode::ACCEPTED;
        *res.body_mut() = Body::from(format!("hello {}", params.by_name("name").unwrap_or("")));
    }

    #[test]
    fn functions_are_handlers() {
        let handle = Handle::new(greet);
        let req = Request::new(Body::empty());
        let mut res = Response::new(Body::empty());

        let params: Params = vec![Param::new("name", "world")].into();
        handle.handle(&mut res, &req, params);

        assert_eq!(res.status(), StatusCode::ACCEPTED);
    }

    #[test]
    fn identity_follows_the_shared_value() {
        let a = Handle::new(greet);
        let b = a.clone();
        let c = Handle::new(greet);

        assert!(a.same(&b));
        assert!(!a.same(&c));
    }
}
