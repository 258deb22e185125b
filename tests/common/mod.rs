#![allow(dead_code)]

use {
    log::LevelFilter,
    simplelog::{Config, TestLogger},
};

pub const URLS: [&str; 6] = [
    "http://python.org/",
    "http://www.python.org/",
    "www.python.org/index.html",

    "http://www.foobar.com/docs/",

    "www.foobar.com/index.html",
    "http://foobar.com/index.php",
];

pub const UNKNOWN_URL: &str = "bogus";

const INDEX_PAGES: [&str; 8] = [
    "/index.html",
    "/index.htm",
    "/index.shtml",
    "/index.shtm",
    "/index.php",
    "/index.asp",
    "/index.aspx",
    "/index.jsp",
];

pub fn init_logger() {
    let _ = TestLogger::init(LevelFilter::Trace, Config::default());
}

/// Removes the protocol, a leading `www.`, a trailing index page and trailing slashes.
pub fn normalize(url: &&str) -> String {
    let url = url.trim().to_lowercase();

    let url = url.strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(&url);
    let url = url.strip_prefix("www.").unwrap_or(url);
    let url = INDEX_PAGES.iter()
        .find_map(|page| url.strip_suffix(*page).filter(|rest| !rest.is_empty()))
        .unwrap_or(url);

    url.trim_end_matches('/').to_owned()
}

/// Sorts the classes and the objects inside them so they can be compared.
pub fn sorted<T: Ord>(partitions: Vec<Vec<T>>) -> Vec<Vec<T>> {
    let mut partitions: Vec<Vec<T>> = partitions
        .into_iter()
        .map(|mut class| {
            class.sort();
            class
        })
        .collect();
    partitions.sort();

    partitions
}
