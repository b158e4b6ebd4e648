use httpmock::prelude::*;
use serde_json::json;
use std::time::Duration;
use vhs_rental_client::adapters::{BackendClient, HttpMovieRepository};
use vhs_rental_client::{ClientSettings, FailureKind, Movie, MovieRepository, NewMovie};

fn repository(server: &MockServer) -> HttpMovieRepository {
    HttpMovieRepository::new(BackendClient::new(&server.base_url()).unwrap())
}

fn blade_runner() -> NewMovie {
    NewMovie {
        title: "Blade Runner".to_string(),
        topic_id: 3,
        topic_name: String::new(),
        year: 1982,
        summary: "Replicants on the run".to_string(),
        available: true,
    }
}

#[tokio::test]
async fn test_create_movie_posts_draft_and_returns_entity() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/movies").json_body(json!({
            "title": "Blade Runner",
            "topic_id": 3,
            "year": 1982,
            "summary": "Replicants on the run",
            "available": true
        }));
        then.status(201)
            .header("Content-Type", "application/json")
            .json_body(json!({
                "id": 12,
                "title": "Blade Runner",
                "topic_id": 3,
                "year": 1982,
                "summary": "Replicants on the run",
                "available": 1
            }));
    });

    let created = repository(&server)
        .create_movie(&blade_runner())
        .await
        .unwrap();

    api_mock.assert();
    assert_eq!(created, blade_runner().with_id(12));
}

#[tokio::test]
async fn test_get_all_movies_keeps_backend_order() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/movies");
        then.status(200).json_body(json!([
            {"id": 3, "title": "C", "topic_id": 1, "year": 2001, "summary": "", "available": true},
            {"id": 1, "title": "A", "topic_id": 1, "year": 1999, "summary": "", "available": "0"},
            {"id": 2, "title": "B", "topic_id": 2, "year": "2000", "summary": "", "available": 1}
        ]));
    });

    let movies = tokio_test::assert_ok!(repository(&server).get_all_movies().await);

    api_mock.assert();
    let ids: Vec<u64> = movies.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![3, 1, 2]);
    assert!(!movies[1].available);
    assert_eq!(movies[2].year, 2000);
}

#[tokio::test]
async fn test_get_movie_by_id_found() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/movies/12");
        then.status(200).json_body(json!({
            "id": "12", "title": "Blade Runner", "topic_id": "3", "topic": "Ciencia ficción",
            "year": 1982, "summary": "Replicants on the run", "available": "1"
        }));
    });

    let movie = repository(&server).get_movie_by_id(12).await.unwrap();
    let expected = NewMovie {
        topic_name: "Ciencia ficción".to_string(),
        ..blade_runner()
    };
    assert_eq!(movie, Some(expected.with_id(12)));
}

#[tokio::test]
async fn test_get_all_movies_with_joined_topic_names() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/movies");
        then.status(200).json_body(json!([
            {"id": 1, "title": "Alien", "topic_id": 4, "topic": "Terror", "year": 1979, "summary": "", "available": 1},
            {"id": 2, "title": "It", "topic": "Terror", "year": 1990, "summary": "", "available": 0}
        ]));
    });

    let movies = tokio_test::assert_ok!(repository(&server).get_all_movies().await);

    assert_eq!(movies.len(), 2);
    assert_eq!(movies[0].topic_id, 4);
    assert_eq!(movies[0].topic_name, "Terror");
    assert_eq!(movies[1].topic_id, 0);
    assert_eq!(movies[1].topic_name, "Terror");
}

#[tokio::test]
async fn test_get_movie_by_id_absent_bodies_are_not_found() {
    let server = MockServer::start();
    let empty = server.mock(|when, then| {
        when.method(GET).path("/movies/1");
        then.status(200).body("");
    });
    let null = server.mock(|when, then| {
        when.method(GET).path("/movies/2");
        then.status(200).body("null");
    });
    let no_rows = server.mock(|when, then| {
        when.method(GET).path("/movies/3");
        then.status(200).json_body(json!([]));
    });

    let repo = repository(&server);
    assert_eq!(repo.get_movie_by_id(1).await.unwrap(), None);
    assert_eq!(repo.get_movie_by_id(2).await.unwrap(), None);
    assert_eq!(repo.get_movie_by_id(3).await.unwrap(), None);

    empty.assert();
    null.assert();
    no_rows.assert();
}

#[tokio::test]
async fn test_get_movie_by_id_single_row_set() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/movies/12");
        then.status(200).json_body(json!([{
            "id": 12, "title": "Blade Runner", "topic_id": 3, "year": 1982,
            "summary": "Replicants on the run", "available": true
        }]));
    });

    let movie = repository(&server).get_movie_by_id(12).await.unwrap();
    assert_eq!(movie.map(|m| m.id), Some(12));
}

#[tokio::test]
async fn test_get_movie_by_id_failure_status_raises() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/movies/99");
        then.status(404).body("{\"message\":\"Movie not found\"}");
    });

    let err = repository(&server).get_movie_by_id(99).await.unwrap_err();

    assert_eq!(err.to_string(), "Error al obtener película por ID");
    assert!(err.is_not_found());
    assert_eq!(err.status(), Some(404));
    assert!(err.detail().unwrap().contains("Movie not found"));
}

#[tokio::test]
async fn test_update_movie_puts_to_entity_id() {
    let server = MockServer::start();
    let movie = Movie {
        available: false,
        ..blade_runner().with_id(12)
    };
    let api_mock = server.mock(|when, then| {
        when.method(PUT).path("/movies/12").json_body(json!({
            "id": 12,
            "title": "Blade Runner",
            "topic_id": 3,
            "year": 1982,
            "summary": "Replicants on the run",
            "available": false
        }));
        then.status(200).json_body(json!({
            "id": 12, "title": "Blade Runner (Final Cut)", "topic_id": 3, "year": 1982,
            "summary": "Replicants on the run", "available": false
        }));
    });

    let updated = repository(&server).update_movie(&movie).await.unwrap();

    api_mock.assert_hits(1);
    // The backend's body is returned as-is, even where it differs from the request.
    assert_eq!(updated.title, "Blade Runner (Final Cut)");
    assert_eq!(updated.id, 12);
}

#[tokio::test]
async fn test_delete_movie_success() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(DELETE).path("/movies/3");
        then.status(200).json_body(json!({"message": "deleted"}));
    });

    tokio_test::assert_ok!(repository(&server).delete_movie(3).await);
    api_mock.assert();
}

#[tokio::test]
async fn test_delete_movie_server_error_has_generic_message() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(DELETE).path("/movies/3");
        then.status(500).body("Fatal error: Uncaught PDOException");
    });

    let err = tokio_test::assert_err!(repository(&server).delete_movie(3).await);

    api_mock.assert();
    assert_eq!(err.to_string(), "Error al eliminar película");
    assert_eq!(err.kind(), Some(FailureKind::Server));
    assert_eq!(err.status(), Some(500));
    assert!(err.detail().unwrap().contains("PDOException"));
}

#[tokio::test]
async fn test_delete_movie_message_independent_of_cause() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(DELETE).path("/movies/4");
        then.status(409).json_body(json!({"error": "movie is on loan"}));
    });

    let err = repository(&server).delete_movie(4).await.unwrap_err();
    assert_eq!(err.to_string(), "Error al eliminar película");
    assert_eq!(err.kind(), Some(FailureKind::Validation));
}

#[tokio::test]
async fn test_undecodable_body_is_invalid_response() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/movies");
        then.status(200).body("<html>maintenance</html>");
    });

    let err = repository(&server).get_all_movies().await.unwrap_err();
    assert_eq!(err.to_string(), "Error al obtener películas");
    assert_eq!(err.kind(), Some(FailureKind::InvalidResponse));
}

#[tokio::test]
async fn test_unreachable_backend_is_network_failure() {
    // Nothing listens on the discard port.
    let repo = HttpMovieRepository::new(BackendClient::new("http://127.0.0.1:9").unwrap());

    let err = repo.create_movie(&blade_runner()).await.unwrap_err();
    assert_eq!(err.to_string(), "Error al crear película");
    assert_eq!(err.kind(), Some(FailureKind::Network));
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn test_configured_timeout() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/movies");
        then.status(200)
            .json_body(json!([]))
            .delay(Duration::from_secs(3));
    });

    let settings = ClientSettings::default().with_overrides(Some(server.base_url()), Some(1));
    let repo = HttpMovieRepository::new(BackendClient::from_config(&settings).unwrap());

    let err = repo.get_all_movies().await.unwrap_err();
    assert_eq!(err.kind(), Some(FailureKind::Timeout));
    assert_eq!(err.to_string(), "Error al obtener películas");
}

#[tokio::test]
async fn test_base_url_path_prefix() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/api/movies");
        then.status(200).json_body(json!([]));
    });

    let repo = HttpMovieRepository::new(BackendClient::new(&server.url("/api")).unwrap());
    assert!(repo.get_all_movies().await.unwrap().is_empty());
    api_mock.assert();
}
