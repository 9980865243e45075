//! Test utilities and fixture builders for the challenge_fetcher test suite

use challenge_fetcher::FetcherConfig;
use std::path::Path;

/// A challenge page shaped like the site's: navigation, the title, an info
/// bar and the problem description.
#[allow(dead_code)]
pub fn challenge_page(title: &str, description: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>#{title} - Project Euler</title>
</head>
<body>
<div id="container">
    <div id="nav"><ul><li><a href="about">About</a></li><li><a href="archives">Archives</a></li></ul></div>
    <div id="content">
        <div class="center print"><img src="images/icons/print.png" alt="Print"></div>
        <h2>{title}</h2>
        <div id="problem_info"><span class="info">Published on Friday, 5th October 2001</span></div>
        <div class="problem_content" role="problem">
{description}
        </div>
    </div>
</div>
</body>
</html>"#
    )
}

/// The description of challenge 1 as served by the site
#[allow(dead_code)]
pub const PROBLEM_1_DESCRIPTION: &str = "<p>If we list all the natural numbers below $10$ that are multiples of $3$ or $5$, we get $3, 5, 6$ and $9$. The sum of these multiples is $23$.</p>\n<p>Find the sum of all the multiples of $3$ or $5$ below $1000$.</p>\n";

#[allow(dead_code)]
pub const PROBLEM_1_MARKDOWN: &str = "If we list all the natural numbers below $10$ that are multiples of $3$ or $5$, we get $3, 5, 6$ and $9$. The sum of these multiples is $23$.\n\nFind the sum of all the multiples of $3$ or $5$ below $1000$.";

/// Config for `start..=end` into `dir`, talking to `base_url` without retry delays
#[allow(dead_code)]
pub fn test_config(dir: &Path, base_url: &str, start: u32, end: u32) -> FetcherConfig {
    FetcherConfig::builder()
        .output_dir(dir)
        .challenge_range(start, end)
        .base_url(base_url)
        .max_retries(1)
        .request_timeout_secs(5)
        .build()
        .unwrap()
}
