use super::*;

impl Kraken {
    /// List the ingest servers available for broadcasting.
    pub async fn get_ingest_server_list(&self) -> Result<IngestList, TwitchError> {
        let list: IngestList = self.client.get_json("ingests", RequestOptions::new()).await?;
        tracing::debug!(count = list.ingests.len(), "Fetched ingest servers");
        Ok(list)
    }
}
