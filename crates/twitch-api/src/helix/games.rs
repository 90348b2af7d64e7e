use super::*;

impl Helix {
    /// Look up games by name and/or ID.
    pub async fn get_games(&self, query: &GamesQuery) -> Result<Vec<Game>, TwitchError> {
        if query.is_empty() {
            return Err(TwitchError::InvalidInput {
                operation: "get_games",
                field: "names or ids",
            });
        }

        let resp: HelixResponse<Game> = self.client.get_json("games", query.to_options()).await?;
        tracing::debug!(count = resp.data.len(), "Fetched games");
        Ok(resp.data)
    }
}
