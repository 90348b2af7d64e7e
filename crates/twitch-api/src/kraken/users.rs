use super::*;

impl Kraken {
    /// Get a user by ID, or the token's own user when `user_id` is `None` or 0.
    pub async fn get_user(&self, user_id: Option<u64>) -> Result<User, TwitchError> {
        self.client
            .get_json(&user_path(user_id), RequestOptions::new())
            .await
    }

    /// Get the channels a user follows.
    pub async fn get_user_follows(&self, user_id: u64) -> Result<UserFollows, TwitchError> {
        let user_id = require_id(user_id, "get_user_follows", "user_id")?;
        let follows: UserFollows = self
            .client
            .get_json(
                &format!("users/{user_id}/follows/channels"),
                RequestOptions::new(),
            )
            .await?;

        tracing::debug!(
            user_id,
            count = follows.follows.len(),
            total = follows.total,
            "Fetched followed channels"
        );
        Ok(follows)
    }
}

pub(super) fn user_path(user_id: Option<u64>) -> String {
    match user_id {
        None | Some(0) => "user".to_string(),
        Some(id) => format!("users/{id}"),
    }
}
