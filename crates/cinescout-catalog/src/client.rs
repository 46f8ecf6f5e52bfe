use std::cmp::Ordering;
use std::time::Duration;

use cinescout_models::{
    CastMember, Genre, MovieRecord, Person, PersonCredit, PreferenceFilter, Video, WatchProvider,
};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::CatalogError;
use crate::params::{discover_params, regional_params, RegionalFilter};
use crate::types::{
    CreditsResponse, GenreList, Paged, PersonCreditsResponse, ProvidersResponse, VideosResponse,
};

const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";

/// Interactive use: a request that takes longer than this is treated as a
/// transport failure rather than left hanging.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const MAX_CAST: usize = 15;
const MAX_RELATED: usize = 10;
const MAX_PERSON_CREDITS: usize = 20;

/// Stateless client for the external movie catalog.
///
/// Every call carries the API key as a query parameter. List fetches never
/// error past this boundary; they log and return an empty list instead.
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    provider_regions: (String, String),
}

pub struct CatalogClientBuilder {
    api_key: String,
    base_url: String,
    timeout: Duration,
    provider_regions: (String, String),
}

impl CatalogClientBuilder {
    /// Overrides the catalog endpoint (tests point this at a mock server).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Preferred and fallback region for watch-provider resolution.
    pub fn provider_regions(
        mut self,
        primary: impl Into<String>,
        fallback: impl Into<String>,
    ) -> Self {
        self.provider_regions = (primary.into(), fallback.into());
        self
    }

    pub fn build(self) -> Result<CatalogClient, CatalogError> {
        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(CatalogError::Transport)?;

        Ok(CatalogClient {
            http,
            base_url: self.base_url,
            api_key: self.api_key,
            provider_regions: self.provider_regions,
        })
    }
}

impl CatalogClient {
    pub fn builder(api_key: impl Into<String>) -> CatalogClientBuilder {
        CatalogClientBuilder {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            provider_regions: ("IN".to_string(), "US".to_string()),
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<T, CatalogError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(url = %url, "catalog request");

        let resp = self
            .http
            .get(&url)
            .query(&[("api_key", self.api_key.as_str())])
            .query(query)
            .send()
            .await
            .map_err(CatalogError::Transport)?;

        let status = resp.status();
        if !status.is_success() {
            return Err(CatalogError::RemoteRejection { status });
        }

        resp.json().await.map_err(CatalogError::MalformedResponse)
    }

    async fn movie_list(&self, op: &str, path: &str, query: &[(String, String)]) -> Vec<MovieRecord> {
        match self.get_json::<Paged<MovieRecord>>(path, query).await {
            Ok(page) => page.results,
            Err(e) => {
                warn!(op, error = %e, "catalog list fetch failed, returning empty");
                Vec::new()
            }
        }
    }

    /// This week's trending movies, most popular first. Falls back to the
    /// all-time popular list when the trending endpoint fails; an empty
    /// result means "no data", never an error.
    pub async fn trending(&self) -> Vec<MovieRecord> {
        match self.get_json::<Paged<MovieRecord>>("/trending/movie/week", &[]).await {
            Ok(page) => page.results,
            Err(e) => {
                warn!(error = %e, "trending fetch failed, retrying against popular");
                self.movie_list("popular", "/movie/popular", &[]).await
            }
        }
    }

    /// Regional discovery shelf under a fixed filter.
    pub async fn regional(&self, filter: &RegionalFilter) -> Vec<MovieRecord> {
        self.movie_list("regional", "/discover/movie", &regional_params(filter))
            .await
    }

    /// Free-text movie search. A blank query returns immediately without
    /// touching the network.
    pub async fn search(&self, query: &str) -> Vec<MovieRecord> {
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }
        let params = [("query".to_string(), query.to_string())];
        self.movie_list("search", "/search/movie", &params).await
    }

    /// Preference-driven discovery, rating-descending unless the filter
    /// overrides the ordering.
    pub async fn discover(&self, filter: &PreferenceFilter) -> Vec<MovieRecord> {
        self.movie_list("discover", "/discover/movie", &discover_params(filter))
            .await
    }

    /// Full record for one movie. There is no safe empty substitute here, so
    /// failures propagate to the caller.
    pub async fn movie(&self, id: u64) -> Result<MovieRecord, CatalogError> {
        self.get_json(&format!("/movie/{id}"), &[]).await
    }

    /// Top-billed cast, capped to bound render cost.
    pub async fn credits(&self, id: u64) -> Vec<CastMember> {
        match self
            .get_json::<CreditsResponse>(&format!("/movie/{id}/credits"), &[])
            .await
        {
            Ok(mut resp) => {
                resp.cast.truncate(MAX_CAST);
                resp.cast
            }
            Err(e) => {
                warn!(id, error = %e, "credits fetch failed, returning empty");
                Vec::new()
            }
        }
    }

    /// Trailers and teasers only.
    pub async fn videos(&self, id: u64) -> Vec<Video> {
        match self
            .get_json::<VideosResponse>(&format!("/movie/{id}/videos"), &[])
            .await
        {
            Ok(resp) => resp.results.into_iter().filter(Video::is_promotional).collect(),
            Err(e) => {
                warn!(id, error = %e, "videos fetch failed, returning empty");
                Vec::new()
            }
        }
    }

    /// Subscription-tier watch providers, preferring the primary region and
    /// falling back to the secondary one. Exactly two steps, no negotiation.
    pub async fn providers(&self, id: u64) -> Vec<WatchProvider> {
        let mut resp = match self
            .get_json::<ProvidersResponse>(&format!("/movie/{id}/watch/providers"), &[])
            .await
        {
            Ok(resp) => resp,
            Err(e) => {
                warn!(id, error = %e, "providers fetch failed, returning empty");
                return Vec::new();
            }
        };

        let (primary, fallback) = &self.provider_regions;
        let offerings = resp
            .results
            .remove(primary)
            .or_else(|| resp.results.remove(fallback));
        offerings.and_then(|o| o.flatrate).unwrap_or_default()
    }

    /// Movies the catalog considers similar, capped at ten.
    pub async fn similar(&self, id: u64) -> Vec<MovieRecord> {
        let mut movies = self
            .movie_list("similar", &format!("/movie/{id}/similar"), &[])
            .await;
        movies.truncate(MAX_RELATED);
        movies
    }

    /// The catalog's own per-title recommendations, capped at ten.
    pub async fn recommendations(&self, id: u64) -> Vec<MovieRecord> {
        let mut movies = self
            .movie_list("recommendations", &format!("/movie/{id}/recommendations"), &[])
            .await;
        movies.truncate(MAX_RELATED);
        movies
    }

    /// Detail record for one person; failures propagate like `movie`.
    pub async fn person(&self, id: u64) -> Result<Person, CatalogError> {
        self.get_json(&format!("/person/{id}"), &[]).await
    }

    /// A person's movie credits, most popular first, capped at twenty.
    pub async fn person_credits(&self, id: u64) -> Vec<PersonCredit> {
        match self
            .get_json::<PersonCreditsResponse>(&format!("/person/{id}/movie_credits"), &[])
            .await
        {
            Ok(mut resp) => {
                resp.cast.sort_by(|a, b| {
                    b.popularity
                        .partial_cmp(&a.popularity)
                        .unwrap_or(Ordering::Equal)
                });
                resp.cast.truncate(MAX_PERSON_CREDITS);
                resp.cast
            }
            Err(e) => {
                warn!(id, error = %e, "person credits fetch failed, returning empty");
                Vec::new()
            }
        }
    }

    /// The catalog's genre id/name table.
    pub async fn genres(&self) -> Vec<Genre> {
        match self.get_json::<GenreList>("/genre/movie/list", &[]).await {
            Ok(list) => list.genres,
            Err(e) => {
                warn!(error = %e, "genre list fetch failed, returning empty");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cinescout_models::YearRange;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(server: &MockServer) -> CatalogClient {
        CatalogClient::builder("test-key")
            .base_url(server.uri())
            .build()
            .unwrap()
    }

    fn movie_json(id: u64, title: &str) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "title": title,
            "poster_path": "/p.jpg",
            "overview": "",
            "vote_average": 7.0,
            "release_date": "2020-01-01"
        })
    }

    fn page(movies: Vec<serde_json::Value>) -> serde_json::Value {
        serde_json::json!({ "page": 1, "results": movies })
    }

    #[tokio::test]
    async fn trending_falls_back_to_popular_on_server_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/trending/movie/week"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/movie/popular"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(page(vec![movie_json(1, "Popular One")])),
            )
            .mount(&server)
            .await;

        let movies = client(&server).trending().await;
        assert_eq!(movies.len(), 1);
        assert_eq!(movies[0].title, "Popular One");
    }

    #[tokio::test]
    async fn trending_degrades_to_empty_when_both_endpoints_fail() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        assert!(client(&server).trending().await.is_empty());
    }

    #[tokio::test]
    async fn blank_search_never_touches_the_network() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(page(vec![movie_json(1, "Unwanted")])),
            )
            .expect(0)
            .mount(&server)
            .await;

        assert!(client(&server).search("").await.is_empty());
        assert!(client(&server).search("   ").await.is_empty());
    }

    #[tokio::test]
    async fn search_sends_api_key_and_query() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search/movie"))
            .and(query_param("api_key", "test-key"))
            .and(query_param("query", "inception"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(page(vec![movie_json(27205, "Inception")])),
            )
            .expect(1)
            .mount(&server)
            .await;

        let movies = client(&server).search("inception").await;
        assert_eq!(movies.len(), 1);
        assert_eq!(movies[0].id, 27205);
    }

    #[tokio::test]
    async fn discover_sends_mapped_filter_params() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/discover/movie"))
            .and(query_param("sort_by", "vote_average.desc"))
            .and(query_param("vote_count.gte", "100"))
            .and(query_param("vote_average.gte", "8"))
            .and(query_param("with_genres", "28,12"))
            .and(query_param("primary_release_date.gte", "2000-01-01"))
            .and(query_param("primary_release_date.lte", "2010-12-31"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page(vec![])))
            .expect(1)
            .mount(&server)
            .await;

        let filter = PreferenceFilter {
            favorite_genres: vec![28, 12],
            min_rating: Some(8.0),
            year_range: Some(YearRange {
                min: 2000,
                max: 2010,
            }),
            ..Default::default()
        };
        client(&server).discover(&filter).await;
    }

    #[tokio::test]
    async fn movie_lookup_propagates_remote_rejection() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/movie/42"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let err = client(&server).movie(42).await.unwrap_err();
        assert!(matches!(
            err,
            CatalogError::RemoteRejection { status } if status.as_u16() == 404
        ));
    }

    #[tokio::test]
    async fn movie_lookup_flags_malformed_body() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/movie/42"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
            .mount(&server)
            .await;

        let err = client(&server).movie(42).await.unwrap_err();
        assert!(matches!(err, CatalogError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn credits_are_capped_at_fifteen() {
        let server = MockServer::start().await;
        let cast: Vec<_> = (0..20)
            .map(|i| serde_json::json!({ "id": i, "name": format!("Actor {i}") }))
            .collect();

        Mock::given(method("GET"))
            .and(path("/movie/7/credits"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "cast": cast })))
            .mount(&server)
            .await;

        let credits = client(&server).credits(7).await;
        assert_eq!(credits.len(), 15);
        assert_eq!(credits[0].name, "Actor 0");
    }

    #[tokio::test]
    async fn videos_keep_only_trailers_and_teasers() {
        let server = MockServer::start().await;
        let body = serde_json::json!({
            "results": [
                { "id": "a", "key": "k1", "name": "Official Trailer", "type": "Trailer" },
                { "id": "b", "key": "k2", "name": "Behind the Scenes", "type": "Featurette" },
                { "id": "c", "key": "k3", "name": "Teaser", "type": "Teaser" },
                { "id": "d", "key": "k4", "name": "Clip", "type": "Clip" }
            ]
        });

        Mock::given(method("GET"))
            .and(path("/movie/7/videos"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&server)
            .await;

        let videos = client(&server).videos(7).await;
        assert_eq!(videos.len(), 2);
        assert!(videos.iter().all(|v| v.is_promotional()));
    }

    #[tokio::test]
    async fn providers_prefer_primary_region() {
        let server = MockServer::start().await;
        let body = serde_json::json!({
            "results": {
                "IN": { "flatrate": [ { "provider_id": 8, "provider_name": "Netflix" } ] },
                "US": { "flatrate": [ { "provider_id": 9, "provider_name": "Prime Video" } ] }
            }
        });

        Mock::given(method("GET"))
            .and(path("/movie/7/watch/providers"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&server)
            .await;

        let providers = client(&server).providers(7).await;
        assert_eq!(providers.len(), 1);
        assert_eq!(providers[0].provider_name, "Netflix");
    }

    #[tokio::test]
    async fn providers_fall_back_to_second_region() {
        let server = MockServer::start().await;
        let body = serde_json::json!({
            "results": {
                "US": { "flatrate": [ { "provider_id": 9, "provider_name": "Prime Video" } ] }
            }
        });

        Mock::given(method("GET"))
            .and(path("/movie/7/watch/providers"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&server)
            .await;

        let providers = client(&server).providers(7).await;
        assert_eq!(providers.len(), 1);
        assert_eq!(providers[0].provider_name, "Prime Video");
    }

    #[tokio::test]
    async fn similar_is_capped_at_ten() {
        let server = MockServer::start().await;
        let movies: Vec<_> = (0..14).map(|i| movie_json(i, "Similar")).collect();

        Mock::given(method("GET"))
            .and(path("/movie/7/similar"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page(movies)))
            .mount(&server)
            .await;

        assert_eq!(client(&server).similar(7).await.len(), 10);
    }

    #[tokio::test]
    async fn person_credits_sorted_by_popularity() {
        let server = MockServer::start().await;
        let body = serde_json::json!({
            "cast": [
                { "id": 1, "title": "Minor Role", "popularity": 2.5 },
                { "id": 2, "title": "Breakout Hit", "popularity": 98.1 },
                { "id": 3, "title": "Mid Career", "popularity": 40.0 }
            ]
        });

        Mock::given(method("GET"))
            .and(path("/person/99/movie_credits"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&server)
            .await;

        let credits = client(&server).person_credits(99).await;
        assert_eq!(credits[0].title, "Breakout Hit");
        assert_eq!(credits[1].title, "Mid Career");
        assert_eq!(credits[2].title, "Minor Role");
    }

    #[tokio::test]
    async fn genre_table_maps_ids_to_names() {
        let server = MockServer::start().await;
        let body = serde_json::json!({
            "genres": [
                { "id": 28, "name": "Action" },
                { "id": 878, "name": "Science Fiction" }
            ]
        });

        Mock::given(method("GET"))
            .and(path("/genre/movie/list"))
            .and(query_param("api_key", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&server)
            .await;

        let genres = client(&server).genres().await;
        assert_eq!(genres.len(), 2);
        assert_eq!(genres[0].id, 28);
        assert_eq!(genres[1].name, "Science Fiction");
    }

    #[tokio::test]
    async fn genre_fetch_degrades_to_empty_on_server_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/genre/movie/list"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        assert!(client(&server).genres().await.is_empty());
    }
}
