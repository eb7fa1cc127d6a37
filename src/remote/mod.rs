mod client;
mod gist;
mod leetcode;

#[cfg(test)]
pub(crate) mod mock;

pub use client::{HttpClient, HttpRequest, Method, ReqwestClient};
pub use gist::{GITHUB_API_URL, GistSink, PublishSink, StdoutSink};
pub use leetcode::{
    FileStatsProvider, LEETCODE_GRAPHQL_URL, LeetCodeProvider, StatsProvider,
    parse_stats_response,
};
