use super::*;

impl Kraken {
    /// Get a clip by its slug.
    ///
    /// Slugs are a single path segment of ASCII letters, digits, `-` and `_`;
    /// anything else is rejected before a request is built.
    pub async fn get_clip(&self, slug: &str) -> Result<Clip, TwitchError> {
        if !is_valid_slug(slug) {
            return Err(TwitchError::InvalidInput {
                operation: "get_clip",
                field: "slug",
            });
        }
        self.client
            .get_json(&format!("clips/{slug}"), RequestOptions::new())
            .await
    }

    /// Get the most popular clips. Pass the returned cursor back in
    /// [`TopClipsQuery::cursor`] for the next page.
    pub async fn get_top_clips(&self, query: &TopClipsQuery) -> Result<ClipList, TwitchError> {
        let clips: ClipList = self.client.get_json("clips/top", query.to_options()).await?;
        tracing::debug!(count = clips.clips.len(), "Fetched top clips");
        Ok(clips)
    }

    /// Get clips from channels the token's user follows.
    /// Requires the `user_read` scope.
    pub async fn get_followed_clips(
        &self,
        query: &FollowedClipsQuery,
    ) -> Result<ClipList, TwitchError> {
        tracing::warn!("Followed clips response shape is unverified; decoding leniently");
        let clips: ClipList = self
            .client
            .get_json("clips/followed", query.to_options())
            .await?;
        tracing::debug!(count = clips.clips.len(), "Fetched followed clips");
        Ok(clips)
    }
}

pub(super) fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
