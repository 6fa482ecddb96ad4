//! Decodes a service configuration from YAML.
//!
//! Run with `RUST_LOG=strata_decoder=debug` to see why a document was
//! rejected.

use strata_decoder::prelude::*;
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
#[allow(dead_code)]
struct Upstream {
    name: String,
    url: String,
    weight: i64,
}

#[derive(Debug)]
#[allow(dead_code)]
enum Route {
    Static { prefix: String, root: String },
    Proxy { prefix: String, upstreams: Vec<Upstream> },
}

fn upstream() -> impl Decode<Output = Upstream> + Send + Sync + 'static {
    map3(
        |name, url, weight| Upstream { name, url, weight },
        field("name", string()),
        field("url", string()),
        optional_field("weight", int(), 1),
    )
}

fn route() -> BoxDecoder<Route> {
    map2(|prefix: String, kind: String| (prefix, kind), field("prefix", string()), field("kind", string()))
        .then(|(prefix, kind)| match kind.as_str() {
            "static" => field("root", string())
                .map(move |root| Route::Static { prefix: prefix.clone(), root })
                .boxed(),
            "proxy" => field("upstreams", list(upstream()))
                .map(move |upstreams| Route::Proxy { prefix: prefix.clone(), upstreams })
                .boxed(),
            other => fail(format!("unknown route kind '{other}'")).boxed(),
        })
        .boxed()
}

const GOOD: &str = r#"
- prefix: /assets
  kind: static
  root: /srv/www
- prefix: /api
  kind: proxy
  upstreams:
    - name: a
      url: http://10.0.0.1:8080
    - name: b
      url: http://10.0.0.2:8080
      weight: 3
"#;

const BAD: &str = r#"
- prefix: /api
  kind: proxy
  upstreams:
    - name: a
      url: http://10.0.0.1:8080
      weight: heavy
"#;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let routes = list(route());

    match decode_yaml(GOOD, &routes) {
        Ok(routes) => {
            for route in routes {
                println!("✓ {route:?}");
            }
        }
        Err(e) => println!("✗ Error: {e}"),
    }

    match decode_yaml(BAD, &routes) {
        Ok(routes) => println!("✓ unexpectedly accepted {} routes", routes.len()),
        Err(e) => println!("✗ rejected: {e}"),
    }
}
