use std::collections::BTreeMap;

use http_bridge::https::{request, RequestOptions};

// Usage: fetch <url> [method] [body]
fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let url = args.next().ok_or_else(|| anyhow::anyhow!("usage: fetch <url> [method] [body]"))?;
    let method = args.next();
    let data = args.next().map(String::into_bytes);

    let options = RequestOptions {
        data,
        method,
        headers: BTreeMap::from([("Accept".to_string(), "*/*".to_string())]),
    };

    let reply = request(&url, Some(options))?;

    println!("HTTP {}", reply.code);
    for (key, value) in &reply.headers {
        println!("{}: {}", key, value);
    }
    println!();
    println!("{}", String::from_utf8_lossy(&reply.body));

    Ok(())
}
