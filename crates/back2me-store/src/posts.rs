use back2me_types::models::{AccountId, NewPost, Post, PostId};
use chrono::Utc;
use tracing::{debug, info};

use crate::query::{PostFilter, matches_search};
use crate::{Store, StoreResult};

impl Store {
    // -- Posts --

    /// Append a post. The owner is not checked against the account table.
    pub fn create_post(&self, owner_id: AccountId, new: NewPost) -> StoreResult<Post> {
        let post = self.write(|tables| {
            let now = Utc::now();
            tables
                .posts
                .insert_with(|id| Post {
                    id,
                    user_id: owner_id,
                    status: new.status,
                    item_name: new.item_name,
                    location: new.location,
                    place: new.place,
                    description: new.description,
                    image_url: new.image_url,
                    created_at: now,
                    updated_at: now,
                })
                .clone()
        })?;

        info!("Created {} post {} for account {}", post.status, post.id, owner_id);
        Ok(post)
    }

    pub fn get_post(&self, id: PostId) -> StoreResult<Option<Post>> {
        self.read(|tables| tables.posts.iter().find(|p| p.id == id).cloned())
    }

    /// Posts whose status equals `status`, or all posts when it is `"all"`
    /// or absent.
    pub fn list_posts(&self, status: Option<&str>) -> StoreResult<Vec<Post>> {
        self.filter_posts(&PostFilter::status(status))
    }

    pub fn filter_posts(&self, filter: &PostFilter) -> StoreResult<Vec<Post>> {
        let posts = self.read(|tables| {
            tables
                .posts
                .iter()
                .filter(|p| filter.matches(p))
                .cloned()
                .collect::<Vec<_>>()
        })?;
        debug!("Post listing {:?} matched {}", filter, posts.len());
        Ok(posts)
    }

    pub fn search_posts(&self, query: &str) -> StoreResult<Vec<Post>> {
        let query = query.to_lowercase();
        let posts = self.read(|tables| {
            tables
                .posts
                .iter()
                .filter(|p| matches_search(p, &query))
                .cloned()
                .collect::<Vec<_>>()
        })?;
        debug!("Search '{}' matched {} posts", query, posts.len());
        Ok(posts)
    }

    pub fn post_count(&self) -> StoreResult<usize> {
        self.read(|tables| tables.posts.len())
    }
}
