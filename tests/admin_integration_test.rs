//! Admin match management over HTTP
//!
//! Authentication, the start/score/finish flow and error payloads.

use reqwest::{Client, Method};
use serde_json::{json, Value};
use uuid::Uuid;

use worldcup_tracker::db::TournamentStore;
use worldcup_tracker::models::game::GameState;

mod common;
use common::tournament_helpers::{kickoff, SeededTournament};
use common::utils::{make_admin_request, spawn_app};

#[tokio::test]
async fn admin_routes_require_a_valid_token() {
    let test_app = spawn_app().await;
    let client = Client::new();
    let match_id = Uuid::new_v4();

    let routes = vec![
        (Method::GET, "/api/admin/matches".to_string()),
        (Method::POST, format!("/api/admin/matches/{}/start", match_id)),
        (Method::PATCH, format!("/api/admin/matches/{}/score", match_id)),
        (Method::POST, format!("/api/admin/matches/{}/finish", match_id)),
    ];

    for (method, route) in routes {
        let response = client
            .request(method.clone(), test_app.url(&route))
            .send()
            .await
            .expect("Failed to send request");
        assert_eq!(401, response.status().as_u16(), "{} {} without token", method, route);

        let response = client
            .request(method.clone(), test_app.url(&route))
            .header("Authorization", "Bearer wrong-token")
            .send()
            .await
            .expect("Failed to send request");
        assert_eq!(401, response.status().as_u16(), "{} {} with wrong token", method, route);
    }
}

#[tokio::test]
async fn full_match_flow_start_score_finish() {
    let test_app = spawn_app().await;
    let client = Client::new();
    let t = SeededTournament::seed(&test_app.store);
    let game = t.add_group_game(&test_app.store, &t.france, &t.germany, kickoff(15, 16), GameState::Scheduled);

    // Start
    let response = make_admin_request(
        &client,
        Method::POST,
        &test_app.url(&format!("/api/admin/matches/{}/start", game.id)),
        None,
    ).await;
    assert_eq!(200, response.status().as_u16());
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Match started");
    assert_eq!(body["data"]["status"], "live");
    assert_eq!(body["data"]["homeScore"], 0);
    assert_eq!(body["data"]["awayScore"], 0);
    assert_eq!(body["data"]["homeTeam"]["code"], "FRA");

    // Score
    let response = make_admin_request(
        &client,
        Method::PATCH,
        &test_app.url(&format!("/api/admin/matches/{}/score", game.id)),
        Some(json!({ "homeScore": 2, "awayScore": 1 })),
    ).await;
    assert_eq!(200, response.status().as_u16());
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Score updated");
    assert_eq!(body["data"]["homeScore"], 2);
    assert_eq!(body["data"]["awayScore"], 1);
    assert_eq!(body["data"]["status"], "live");

    // Finish without a body keeps the live score
    let response = make_admin_request(
        &client,
        Method::POST,
        &test_app.url(&format!("/api/admin/matches/{}/finish", game.id)),
        None,
    ).await;
    assert_eq!(200, response.status().as_u16());
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Match finished");
    assert_eq!(body["data"]["status"], "finished");
    assert_eq!(body["data"]["homeScore"], 2);
    assert_eq!(body["data"]["awayScore"], 1);

    let stored = test_app.store.game(game.id).unwrap().unwrap();
    assert_eq!(stored.state, GameState::Finished { home: 2, away: 1 });
}

#[tokio::test]
async fn finish_with_partial_body_overrides_one_side() {
    let test_app = spawn_app().await;
    let client = Client::new();
    let t = SeededTournament::seed(&test_app.store);
    let game = t.add_group_game(
        &test_app.store, &t.france, &t.germany, kickoff(15, 16),
        GameState::Live { home: 1, away: 1 },
    );

    let response = make_admin_request(
        &client,
        Method::POST,
        &test_app.url(&format!("/api/admin/matches/{}/finish", game.id)),
        Some(json!({ "homeScore": 3 })),
    ).await;
    assert_eq!(200, response.status().as_u16());
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["data"]["homeScore"], 3);
    assert_eq!(body["data"]["awayScore"], 1);
}

#[tokio::test]
async fn invalid_transition_reports_current_status() {
    let test_app = spawn_app().await;
    let client = Client::new();
    let t = SeededTournament::seed(&test_app.store);
    let game = t.add_group_game(
        &test_app.store, &t.france, &t.germany, kickoff(15, 16),
        GameState::Finished { home: 2, away: 0 },
    );

    let response = make_admin_request(
        &client,
        Method::POST,
        &test_app.url(&format!("/api/admin/matches/{}/start", game.id)),
        None,
    ).await;
    assert_eq!(400, response.status().as_u16());
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["currentStatus"], "finished");

    let response = make_admin_request(
        &client,
        Method::PATCH,
        &test_app.url(&format!("/api/admin/matches/{}/score", game.id)),
        Some(json!({ "homeScore": 1, "awayScore": 0 })),
    ).await;
    assert_eq!(400, response.status().as_u16());
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["currentStatus"], "finished");
}

#[tokio::test]
async fn invalid_scores_are_rejected() {
    let test_app = spawn_app().await;
    let client = Client::new();
    let t = SeededTournament::seed(&test_app.store);
    let game = t.add_group_game(
        &test_app.store, &t.france, &t.germany, kickoff(15, 16),
        GameState::Live { home: 0, away: 0 },
    );
    let url = test_app.url(&format!("/api/admin/matches/{}/score", game.id));

    let bodies = vec![
        json!({ "homeScore": 1, "awayScore": -1 }),
        json!({ "homeScore": "two", "awayScore": 0 }),
        json!({ "homeScore": 1.5, "awayScore": 0 }),
        json!({ "homeScore": 1 }),
    ];

    for body in bodies {
        let response = make_admin_request(&client, Method::PATCH, &url, Some(body.clone())).await;
        assert_eq!(400, response.status().as_u16(), "body {} should be rejected", body);
        let payload: Value = response.json().await.unwrap();
        assert_eq!(payload["success"], false);
    }

    let stored = test_app.store.game(game.id).unwrap().unwrap();
    assert_eq!(stored.state, GameState::Live { home: 0, away: 0 });
}

#[tokio::test]
async fn unknown_match_returns_404() {
    let test_app = spawn_app().await;
    let client = Client::new();

    let response = make_admin_request(
        &client,
        Method::POST,
        &test_app.url(&format!("/api/admin/matches/{}/start", Uuid::new_v4())),
        None,
    ).await;
    assert_eq!(404, response.status().as_u16());
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Match not found");
}

#[tokio::test]
async fn admin_list_filters_by_status() {
    let test_app = spawn_app().await;
    let client = Client::new();
    let t = SeededTournament::seed(&test_app.store);
    t.add_group_game(&test_app.store, &t.france, &t.germany, kickoff(15, 16), GameState::Scheduled);
    t.add_group_game(&test_app.store, &t.brazil, &t.germany, kickoff(16, 16), GameState::Live { home: 0, away: 0 });
    t.add_group_game(&test_app.store, &t.france, &t.brazil, kickoff(17, 16), GameState::Finished { home: 1, away: 1 });

    let response = make_admin_request(
        &client,
        Method::GET,
        &test_app.url("/api/admin/matches?status=live"),
        None,
    ).await;
    assert_eq!(200, response.status().as_u16());
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["meta"]["total"], 1);
    assert_eq!(body["data"][0]["homeTeam"]["code"], "BRA");

    let response = make_admin_request(
        &client,
        Method::GET,
        &test_app.url("/api/admin/matches?limit=500"),
        None,
    ).await;
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["meta"]["total"], 3);
    assert_eq!(body["meta"]["limit"], 200);

    let response = make_admin_request(
        &client,
        Method::GET,
        &test_app.url("/api/admin/matches?status=postponed"),
        None,
    ).await;
    assert_eq!(400, response.status().as_u16());
}

#[tokio::test]
async fn negative_score_on_scheduled_match_reports_status_first() {
    let test_app = spawn_app().await;
    let client = Client::new();
    let t = SeededTournament::seed(&test_app.store);
    let game = t.add_group_game(&test_app.store, &t.france, &t.germany, kickoff(15, 16), GameState::Scheduled);

    let response = make_admin_request(
        &client,
        Method::PATCH,
        &test_app.url(&format!("/api/admin/matches/{}/score", game.id)),
        Some(json!({ "homeScore": 1, "awayScore": -1 })),
    ).await;
    assert_eq!(400, response.status().as_u16());
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["currentStatus"], "scheduled");

    let response = make_admin_request(
        &client,
        Method::POST,
        &test_app.url(&format!("/api/admin/matches/{}/finish", game.id)),
        Some(json!({ "homeScore": -3 })),
    ).await;
    assert_eq!(400, response.status().as_u16());
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["currentStatus"], "scheduled");

    let stored = test_app.store.game(game.id).unwrap().unwrap();
    assert_eq!(stored.state, GameState::Scheduled);
}
