//! Post endpoints

use crate::{ApiClient, ClientResult};
use shared::models::{Post, PostPatch};
use shared::query::{ListQuery, Paginated};

impl ApiClient {
    /// List posts in the configured group.
    pub async fn list_posts(&self, query: &ListQuery) -> ClientResult<Paginated<Post>> {
        let group = self.group()?;
        self.get_with(&format!("groups/{group}/posts/"), query).await
    }

    /// Fetch a single post.
    pub async fn get_post(&self, post_id: &str) -> ClientResult<Post> {
        let group = self.group()?;
        self.get(&format!("groups/{group}/posts/{post_id}")).await
    }

    /// Partially update a post. `import_price` changes require an admin
    /// token; the backend rejects them otherwise.
    pub async fn patch_post(&self, post_id: &str, patch: &PostPatch) -> ClientResult<Post> {
        let group = self.group()?;
        self.patch(&format!("groups/{group}/posts/{post_id}"), patch)
            .await
    }
}
