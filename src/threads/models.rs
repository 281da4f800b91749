use std::io::Read;

use serde::de::{self, DeserializeOwned, Deserializer};
use serde::Deserialize;
use serde_json::{Map, Value};

/// GraphQL response envelope holding a pull request's review threads.
///
/// A level whose key is absent defaults to empty, so a document without
/// `data.repository.pullRequest.reviewThreads.nodes` simply has no threads.
/// A level that is present must be a JSON object (`nodes` an array); `null`
/// is rejected, since GraphQL reports a failed lookup that way.
#[derive(Debug, Default, Deserialize)]
pub struct ThreadsDocument {
    #[serde(default, deserialize_with = "object")]
    data: ResponseData,
}

#[derive(Debug, Default, Deserialize)]
struct ResponseData {
    #[serde(default, deserialize_with = "object")]
    repository: Repository,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Repository {
    #[serde(default, deserialize_with = "object")]
    pull_request: PullRequest,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PullRequest {
    #[serde(default, deserialize_with = "object")]
    review_threads: ReviewThreadConnection,
}

/// Nodes stay undecoded until the thread's status is known, so a skipped
/// thread never fails on the fields it is missing.
#[derive(Debug, Default, Deserialize)]
struct ReviewThreadConnection {
    #[serde(default)]
    nodes: Vec<Value>,
}

/// Decodes `T` only from a JSON object. Derived struct impls would also
/// accept an array.
fn object<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let map = Map::<String, Value>::deserialize(deserializer)?;
    T::deserialize(Value::Object(map)).map_err(de::Error::custom)
}

impl ThreadsDocument {
    pub fn from_reader<R: Read>(reader: R) -> serde_json::Result<Self> {
        let mut de = serde_json::Deserializer::from_reader(reader);
        let document = object(&mut de)?;
        de.end()?;
        Ok(document)
    }

    /// Raw thread nodes in document order.
    pub fn thread_nodes(&self) -> &[Value] {
        &self.data.repository.pull_request.review_threads.nodes
    }
}

/// Status flags read before anything else on a thread.
///
/// `isOutdated` is always required. `isResolved` only matters when the thread
/// is not outdated, so it may be absent on an outdated one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreadStatus {
    pub is_outdated: bool,
    pub is_resolved: Option<bool>,
}

impl ThreadStatus {
    /// `Some(true)` for outdated or resolved threads, `None` when the
    /// resolution is needed but missing.
    pub fn is_skipped(&self) -> Option<bool> {
        if self.is_outdated {
            Some(true)
        } else {
            self.is_resolved
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReviewThread {
    pub id: String,
    pub path: String,
    pub line: i64,
    pub comments: CommentsNode,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommentsNode {
    pub nodes: Vec<Comment>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Comment {
    pub body: String,
}

impl ReviewThread {
    /// The comment that opened the thread.
    pub fn first_comment(&self) -> Option<&Comment> {
        self.comments.nodes.first()
    }
}
