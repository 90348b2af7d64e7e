use super::*;

impl Kraken {
    /// Get a channel by ID, or the token's own channel when `channel_id` is
    /// `None` or 0.
    pub async fn get_channel(&self, channel_id: Option<u64>) -> Result<Channel, TwitchError> {
        self.client
            .get_json(&channel_path(channel_id), RequestOptions::new())
            .await
    }

    pub async fn get_channel_followers(
        &self,
        channel_id: u64,
        query: &FollowersQuery,
    ) -> Result<ChannelFollowers, TwitchError> {
        let channel_id = require_id(channel_id, "get_channel_followers", "channel_id")?;
        let followers: ChannelFollowers = self
            .client
            .get_json(&format!("channels/{channel_id}/follows"), query.to_options())
            .await?;

        tracing::debug!(
            channel_id,
            count = followers.follows.len(),
            total = followers.total,
            "Fetched channel followers"
        );
        Ok(followers)
    }

    pub async fn get_channel_videos(
        &self,
        channel_id: u64,
        query: &ChannelVideosQuery,
    ) -> Result<VideoList, TwitchError> {
        let channel_id = require_id(channel_id, "get_channel_videos", "channel_id")?;
        let videos: VideoList = self
            .client
            .get_json(&format!("channels/{channel_id}/videos"), query.to_options())
            .await?;

        tracing::debug!(
            channel_id,
            count = videos.videos.len(),
            total = videos.total,
            "Fetched channel videos"
        );
        Ok(videos)
    }

    /// Update a channel's title, game, delay or feed setting.
    /// Requires the `channel_editor` scope.
    pub async fn update_channel(
        &self,
        channel_id: u64,
        update: &UpdateChannel,
    ) -> Result<Channel, TwitchError> {
        let channel_id = require_id(channel_id, "update_channel", "channel_id")?;
        let resp = self
            .client
            .put_form(&format!("channels/{channel_id}"), update, RequestOptions::new())
            .await?;

        tracing::info!(channel_id, "Updated channel");
        crate::decode::from_response(resp).await
    }
}

pub(super) fn channel_path(channel_id: Option<u64>) -> String {
    match channel_id {
        None | Some(0) => "channel".to_string(),
        Some(id) => format!("channels/{id}"),
    }
}
