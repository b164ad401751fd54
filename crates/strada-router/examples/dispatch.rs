//! Wires the router to boxed async handlers and dispatches a few requests,
//! printing the route table that documentation tooling would see.
//!
//! Run with: `cargo run --example dispatch`

use std::future::Future;
use std::sync::Arc;

use futures::future::BoxFuture;
use strada_router::{paths_document, Method, PathParams, Router};

type Handler = Arc<dyn Fn(PathParams) -> BoxFuture<'static, String> + Send + Sync>;

fn boxed<F, Fut>(f: F) -> Handler
where
    F: Fn(PathParams) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = String> + Send + 'static,
{
    Arc::new(move |params| Box::pin(f(params)))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut router: Router<Handler> = Router::new();

    router.add_get("/", boxed(|_| async { "welcome".to_string() }))?;
    router.add_get(
        "/cats/:cat_id",
        boxed(|params: PathParams| async move {
            format!("cat #{}", params.get("cat_id").unwrap_or("?"))
        }),
    )?;
    router.add_get(
        "/static/*",
        boxed(|params: PathParams| async move {
            format!("serving file {:?}", params.get("tail").unwrap_or(""))
        }),
    )?;
    router.set_fallback(boxed(|_| async { "404".to_string() }))?;

    println!(
        "routes: {}",
        serde_json::to_string_pretty(&paths_document(&router))?
    );

    for (method, path) in [
        (Method::Get, "/"),
        (Method::Get, "/cats/19"),
        (Method::Get, "/static/css/site.css"),
        (Method::Post, "/cats/19"),
    ] {
        let found = router.find(method, path).expect("fallback is configured");
        let params = found.values().cloned().unwrap_or_default();
        let body = (found.handler())(params).await;
        println!("{method} {path} -> {body}");
    }

    Ok(())
}
