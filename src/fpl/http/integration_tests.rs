//! HTTP integration tests with mocked FPL API responses
//!
//! These tests use realistic FPL payloads to:
//! 1. Exercise the request -> parse path for every endpoint
//! 2. Check memoization of bootstrap, fixtures and live data
//! 3. Verify error mapping for non-success responses

use super::*;
use crate::cli::types::{ElementId, FixtureId};
use crate::fpl::types::Chip;
use serde_json::json;
use wiremock::{
    matchers::{method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

fn create_bootstrap_response() -> serde_json::Value {
    json!({
        "events": [
            {"id": 1, "name": "Gameweek 1", "is_current": false, "finished": true},
            {"id": 2, "name": "Gameweek 2", "is_current": true, "finished": false}
        ],
        "elements": [
            {"id": 1, "web_name": "Raya", "first_name": "David", "second_name": "Raya",
             "team": 1, "element_type": 1, "now_cost": 55},
            {"id": 2, "web_name": "Haaland", "first_name": "Erling", "second_name": "Haaland",
             "team": 2, "element_type": 4, "now_cost": 145}
        ],
        "teams": [
            {"id": 1, "name": "Arsenal", "short_name": "ARS"},
            {"id": 2, "name": "Man City", "short_name": "MCI"}
        ],
        "total_players": 10000000
    })
}

fn client_for(server: &MockServer) -> FplClient {
    FplClient::new(FplConfig::default().with_base_url(server.uri())).unwrap()
}

#[cfg(test)]
mod http_integration_tests {
    use super::*;

    #[tokio::test]
    async fn test_bootstrap_with_mock_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/bootstrap-static/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(create_bootstrap_response()))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let bootstrap = client.bootstrap().await.expect("bootstrap should parse");

        assert_eq!(bootstrap.current_gameweek(), Gameweek::new(2));
        assert_eq!(bootstrap.elements.len(), 2);
        assert_eq!(bootstrap.elements[1].web_name, "Haaland");
        assert_eq!(bootstrap.teams[1].short_name, "MCI");
    }

    #[tokio::test]
    async fn test_bootstrap_is_fetched_once() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/bootstrap-static/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(create_bootstrap_response()))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let (a, b, c) = tokio::join!(client.bootstrap(), client.bootstrap(), client.bootstrap());
        assert!(a.is_ok() && b.is_ok() && c.is_ok());
        assert!(client.bootstrap().await.is_ok());
        // MockServer verifies `expect(1)` on drop
    }

    #[tokio::test]
    async fn test_fixtures_query_and_memoization() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/fixtures/"))
            .and(query_param("event", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": 11, "event": 2, "team_h": 1, "team_a": 2, "minutes": 90,
                 "finished": false, "finished_provisional": true, "started": true,
                 "stats": [{"identifier": "bps", "h": [{"element": 1, "value": 30}], "a": [{"element": 2, "value": 41}]}]}
            ])))
            .expect(2)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let fixtures = client.fixtures(Gameweek::new(2)).await.unwrap();
        assert_eq!(fixtures.len(), 1);
        assert_eq!(fixtures[0].id, FixtureId::new(11));
        assert!(fixtures[0].stat("bps").is_some());

        // memoized, then refetched after invalidation
        client.fixtures(Gameweek::new(2)).await.unwrap();
        client.invalidate_gameweek(Gameweek::new(2));
        client.fixtures(Gameweek::new(2)).await.unwrap();
    }

    #[tokio::test]
    async fn test_live_with_mock_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/event/2/live/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "elements": [
                    {"id": 2, "stats": {"minutes": 90, "total_points": 13, "bps": 41},
                     "explain": [{"fixture": 11, "stats": [
                        {"identifier": "minutes", "points": 2, "value": 90, "points_modification": 0},
                        {"identifier": "goals_scored", "points": 8, "value": 2, "points_modification": 0}
                     ]}]}
                ]
            })))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let live = client.live(Gameweek::new(2)).await.unwrap();

        assert_eq!(live.elements[0].id, ElementId::new(2));
        assert_eq!(live.elements[0].stats.minutes, 90);
        assert_eq!(live.elements[0].explain[0].stats.len(), 2);
    }

    #[tokio::test]
    async fn test_standings_page_param() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/leagues-classic/314/standings/"))
            .and(query_param("page_standings", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "league": {"id": 314, "name": "Office League"},
                "standings": {"has_next": false, "page": 2, "results": [
                    {"id": 5, "entry": 77, "rank": 51, "last_rank": 49,
                     "player_name": "Jo Park", "entry_name": "Park Life",
                     "event_total": 44, "total": 900}
                ]}
            })))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let page = client.standings(LeagueId::new(314), 2).await.unwrap();

        assert_eq!(page.league.name, "Office League");
        assert_eq!(page.standings.page, 2);
        assert_eq!(page.standings.results[0].entry, EntryId::new(77));
    }

    #[tokio::test]
    async fn test_picks_and_transfers() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/entry/77/event/2/picks/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "active_chip": "bboost",
                "entry_history": {"event": 2, "bank": 3, "value": 1001, "event_transfers": 1, "event_transfers_cost": 0},
                "picks": [{"element": 2, "position": 1, "multiplier": 2, "is_captain": true, "is_vice_captain": false}]
            })))
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/entry/77/transfers/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"element_in": 2, "element_out": 1, "event": 2}
            ])))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let picks = client.picks(EntryId::new(77), Gameweek::new(2)).await.unwrap();
        let transfers = client.transfers(EntryId::new(77)).await.unwrap();

        assert_eq!(picks.active_chip, Some(Chip::BenchBoost));
        assert_eq!(picks.entry_history.value, 1001);
        assert_eq!(transfers[0].element_in, ElementId::new(2));
    }

    #[tokio::test]
    async fn test_missing_entry_maps_to_entry_not_found() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/entry/404404/event/2/picks/"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({"detail": "Not found."})))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let result = client.picks(EntryId::new(404404), Gameweek::new(2)).await;

        match result {
            Err(FplError::EntryNotFound { entry }) => assert_eq!(entry, 404404),
            other => panic!("Expected EntryNotFound, got {:?}", other.map(|_| ())),
        }
    }

    #[tokio::test]
    async fn test_server_error_is_upstream_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/bootstrap-static/"))
            .respond_with(ResponseTemplate::new(503).set_body_string("The game is being updated."))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        match client.bootstrap().await {
            Err(FplError::Upstream { status, url }) => {
                assert_eq!(status, 503);
                assert!(url.ends_with("/bootstrap-static/"));
            }
            other => panic!("Expected Upstream error, got {:?}", other.map(|_| ())),
        }
    }

    #[tokio::test]
    async fn test_malformed_response_is_json_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/leagues-classic/1/standings/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"unexpected": "structure"})))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let result = client.standings(LeagueId::new(1), 1).await;
        assert!(matches!(result, Err(FplError::Json(_))));
    }
}
