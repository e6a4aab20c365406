use crate::support::print_json_or_exit;
use serde_json::json;
use xke_kata::{HOST, PORT, url};

pub fn run(json_output: bool) {
    if json_output {
        let payload = json!({ "host": HOST, "port": PORT, "url": url() });
        print_json_or_exit(&payload, "constants");
    } else {
        println!("xke constants");
        println!("  Host: {HOST}");
        println!("  Port: {PORT}");
        println!("  URL: {}", url());
    }
}
