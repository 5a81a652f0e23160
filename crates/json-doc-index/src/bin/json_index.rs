//! `json-index` — index a JSON document and poke at it.
//!
//! Usage:
//!   json-index              # node count of the document on stdin
//!   json-index '<pattern>'  # key search; prints the match's breadcrumb
//!                           # path and its extracted subtree
//!
//! The document is read from stdin; `<pattern>` is a `*`-wildcard.

use json_doc_index::{estimate, CancelToken, DocIndex, SearchKind, SearchOutcome, ROOT_ID};
use std::io::{self, Read, Write};

fn main() {
    let pattern = std::env::args().nth(1);

    let mut buf = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut buf) {
        eprintln!("{e}");
        std::process::exit(1);
    }
    let value: serde_json::Value = match serde_json::from_str(&buf) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let mut index = DocIndex::new();
    let result = estimate(&value).and_then(|est| index.load(&value, est));
    if let Err(e) = result {
        eprintln!("{e}");
        std::process::exit(1);
    }
    println!("{} nodes", index.size());

    let Some(pattern) = pattern else { return };
    match index.search(&CancelToken::new(), ROOT_ID, &pattern, SearchKind::Key) {
        Ok(SearchOutcome::Found(id)) => {
            let crumbs: Vec<String> = index
                .path(id)
                .unwrap_or_default()
                .into_iter()
                .chain(std::iter::once(id))
                .filter_map(|n| index.node(n).ok())
                .map(|n| n.key.clone())
                .collect();
            println!("match at node {id}: {}", crumbs.join("/"));
            match index.extract(id) {
                Ok(bytes) => {
                    io::stdout().write_all(&bytes).unwrap();
                    io::stdout().write_all(b"\n").unwrap();
                }
                Err(e) => {
                    eprintln!("{e}");
                    std::process::exit(1);
                }
            }
        }
        Ok(SearchOutcome::NotFound) => println!("no match"),
        Ok(SearchOutcome::Canceled) => println!("canceled"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
