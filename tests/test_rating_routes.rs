mod test_startup;

use serde_json::Value;
use test_startup::*;

#[actix_rt::test]
async fn lists_rating_rows_of_a_movie() {
    let app = spawn_app().await;
    app.insert_rating(1, 31, 2.5).await;
    app.insert_rating(2, 31, 4.0).await;
    app.insert_rating(3, 1029, 3.0).await;

    let res = app.get("/ratings/31").await;

    assert!(res.status().is_success());
    let rows = res.json::<Vec<Value>>().await.expect("Failed to parse the response body");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["ratingId"], 1);
    assert_eq!(rows[0]["movieId"], 31);
    assert_eq!(rows[0]["rating"], 2.5);
    assert_eq!(rows[1]["userId"], 102);
    assert!(rows[1]["timestamp"].is_i64());
}

#[actix_rt::test]
async fn movie_without_ratings_is_not_found() {
    let app = spawn_app().await;
    app.insert_rating(1, 31, 2.5).await;

    let res = app.get("/ratings/32").await;

    assert_eq!(res.status().as_u16(), 404);
    let body = res.json::<Value>().await.expect("Failed to parse the response body");
    assert_eq!(body["error"], "No ratings found");
}

#[actix_rt::test]
async fn non_numeric_movie_id_is_a_json_not_found() {
    let app = spawn_app().await;

    let res = app.get("/ratings/abc").await;

    assert_eq!(res.status().as_u16(), 404);
    let body = res.json::<Value>().await.expect("Failed to parse the response body");
    assert!(body["error"].is_string());
}
