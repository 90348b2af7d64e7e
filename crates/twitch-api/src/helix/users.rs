use super::*;

impl Helix {
    /// Get users by ID and/or login. An empty query returns the token's user.
    pub async fn get_users(&self, query: &UsersQuery) -> Result<Vec<User>, TwitchError> {
        let resp: HelixResponse<User> = self.client.get_json("users", query.to_options()).await?;
        tracing::debug!(count = resp.data.len(), "Fetched users");
        Ok(resp.data)
    }
}
