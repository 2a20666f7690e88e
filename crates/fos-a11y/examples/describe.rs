//! Example: speak every control in an HTML file
//!
//! `cargo run -p fos-a11y --example describe -- page.html`

use fos_a11y::{DocumentHost, DomUtil, HostTree};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let Some(path) = std::env::args().nth(1) else {
        eprintln!("usage: describe <file.html>");
        std::process::exit(2);
    };
    let html = match std::fs::read_to_string(&path) {
        Ok(html) => html,
        Err(e) => {
            eprintln!("{path}: {e}");
            std::process::exit(1);
        }
    };
    let doc = match fos_html::parse(&html) {
        Ok(doc) => doc,
        Err(e) => {
            eprintln!("{path}: {e}");
            std::process::exit(1);
        }
    };

    let host = DocumentHost::new(&doc);
    let util = DomUtil::new(&host);
    let spoken = util.scope(|util| {
        host.descendants(host.root())
            .filter(|&n| util.is_control(n) && util.is_visible(n))
            .map(|n| util.get_control_description(n).to_spoken())
            .collect::<Vec<_>>()
    });

    match spoken {
        Ok(lines) => lines.iter().for_each(|line| println!("{line}")),
        Err(e) => eprintln!("{e}"),
    }
}
