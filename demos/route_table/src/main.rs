//! Declares a route table, validates every template up front and prints the resulting tree.
//!
//! Run with `RUST_LOG=routetrie=trace` to follow node creation.
use hyper::{Body, Request, Response, StatusCode};
use log::{error, info};

use routetrie::{build_tree_with, Handle, Params, RegistrationPolicy, Tree};

fn index(res: &mut Response<Body>, _req: &Request<Body>, _params: Params) {
    *res.body_mut() = Body::from("index");
}

fn show_user(res: &mut Response<Body>, _req: &Request<Body>, params: Params) {
    let id = params.by_name("id").unwrap_or_default();
    *res.body_mut() = Body::from(format!("user {}", id));
}

fn serve_asset(res: &mut Response<Body>, _req: &Request<Body>, params: Params) {
    match params.by_name("filepath") {
        Some(path) => *res.body_mut() = Body::from(format!("asset {}", path)),
        None => *res.status_mut() = StatusCode::NOT_FOUND,
    }
}

fn router(extra: &[String]) -> Result<Tree, routetrie::RegistrationError> {
    build_tree_with(RegistrationPolicy::CollectAll, |route| {
        route.add("/", Handle::new(index));
        route.scope("/users", |route| {
            route.add("/:id", Handle::new(show_user));
            route.add("/:id/posts/:post_id", Handle::new(show_user));
        });
        route.add("/assets/*filepath", Handle::new(serve_asset));

        for path in extra {
            route.add(path, Handle::new(index));
        }
    })
}

/// Extra templates may be passed on the command line to see how they are validated.
pub fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let extra: Vec<String> = std::env::args().skip(1).collect();

    match router(&extra) {
        Ok(tree) => {
            info!("registered {} route(s)", tree.route_count());
            print!("{}", tree);
            Ok(())
        }
        Err(e) => {
            for failure in e.errors() {
                error!("{}", failure);
            }
            Err(e.into())
        }
    }
}
