use crate::{
    errors::Result,
    types::{PlaylistItem, PlaylistItemsPage, Track},
};

use super::SpotifyClient;

/// Maximum number of playlist items the Spotify Web API returns per request.
pub const PAGE_SIZE: u32 = 100;

impl SpotifyClient {
    /// Fetches every track in a playlist, regardless of its size.
    ///
    /// Pages through `GET /playlists/{id}/tracks` with a fixed limit of
    /// [`PAGE_SIZE`] items, starting at offset 0 and advancing the offset by
    /// the page size after each page. Items that are not proper tracks
    /// (podcast episodes, locally-uploaded files, unknown entry kinds) are
    /// silently skipped; everything else is normalized into a
    /// [`Track`](crate::types::Track).
    ///
    /// # Ordering
    ///
    /// The returned sequence preserves the API's page and in-page ordering.
    /// No sorting and no deduplication is applied: if the API yields the
    /// same track id twice due to inconsistent paging, it is kept twice.
    ///
    /// # Termination
    ///
    /// A page with fewer items than [`PAGE_SIZE`] is treated as the final
    /// page. A playlist whose length is an exact multiple of the page size
    /// therefore costs one extra request that returns an empty page.
    ///
    /// # Errors
    ///
    /// Any transport, authentication, or parsing error aborts the whole
    /// aggregation; there is no partial result and no resumption from the
    /// last successful offset. A playlist id that does not exist (including
    /// the empty id a trailing-slash URL produces) surfaces as an API error
    /// on the first page request.
    pub async fn playlist_tracks(&mut self, playlist_id: &str) -> Result<Vec<Track>> {
        let mut tracks: Vec<Track> = Vec::new();
        let mut offset: u32 = 0;

        loop {
            let page = self
                .playlist_items_page(playlist_id, offset, PAGE_SIZE)
                .await?;
            // Item count drives the cursor, not the number of usable tracks.
            let fetched = page.items.len();

            tracks.extend(page.items.into_iter().filter_map(PlaylistItem::into_track));

            if (fetched as u32) < PAGE_SIZE {
                break;
            }
            offset += PAGE_SIZE;
        }

        Ok(tracks)
    }

    async fn playlist_items_page(
        &mut self,
        playlist_id: &str,
        offset: u32,
        limit: u32,
    ) -> Result<PlaylistItemsPage> {
        let token = self.session.access_token(&self.http).await?;
        let api_url = format!(
            "{uri}/playlists/{id}/tracks?offset={offset}&limit={limit}",
            uri = self.api_url,
            id = playlist_id,
        );

        let response = self
            .http
            .get(&api_url)
            .bearer_auth(token)
            .send()
            .await?
            .error_for_status()?;

        let page = response.json::<PlaylistItemsPage>().await?;
        Ok(page)
    }
}
