use super::*;

impl Helix {
    /// Get live streams matching `query`, one page at a time.
    pub async fn get_streams(&self, query: &StreamsQuery) -> Result<Page<Stream>, TwitchError> {
        let resp: HelixPaginatedResponse<Stream> =
            self.client.get_json("streams", query.to_options()).await?;
        let page = Page::from(resp);

        tracing::debug!(
            count = page.data.len(),
            has_more = page.cursor.is_some(),
            "Fetched streams"
        );
        Ok(page)
    }
}
