// tests/facade.rs
//
// End-to-end through the Aoty facade: delegation, the JSON surface, and
// the faults single-field accessors are allowed to propagate.

mod common;

use std::collections::HashMap;

use aoty_scrape::config;
use aoty_scrape::scrape::{AlbumClient, ArtistClient, UserClient};
use aoty_scrape::{Aoty, Error};
use common::{artist_html, release_block, MapFetch};

fn facade(pages: HashMap<String, String>) -> Aoty {
    // the three clients are independent; share one page map for the test
    let (albums, _) = MapFetch::new(pages.clone());
    let (artists, _) = MapFetch::new(pages.clone());
    let (users, _) = MapFetch::new(pages);
    Aoty {
        albums: AlbumClient::with_fetcher(albums),
        artists: ArtistClient::with_fetcher(artists),
        users: UserClient::with_fetcher(users),
    }
}

#[test]
fn artist_surface_round_trip() {
    let mut pages = HashMap::new();
    pages.insert(config::artist_url("bjork"), artist_html("bjork"));
    let mut aoty = facade(pages);

    assert_eq!(aoty.artist_name("bjork").unwrap(), "bjork");
    assert_eq!(aoty.artist_critic_score("bjork").unwrap(), "85");
    assert_eq!(aoty.artist_user_score("bjork").unwrap(), "75");
    assert_eq!(aoty.artist_total_score("bjork").unwrap(), 80.0);
    assert_eq!(aoty.artist_follower_count("bjork").unwrap(), "1,234");
    assert_eq!(aoty.artist_details("bjork").unwrap(), "Formed in 1990");
    assert_eq!(aoty.artist_mixtapes("bjork").unwrap(), vec!["bjork Tape"]);
    assert_eq!(aoty.artist_eps("bjork").unwrap(), vec!["bjork EP"]);
    assert_eq!(aoty.artist_singles("bjork").unwrap(), vec!["bjork Single"]);
    assert_eq!(aoty.similar_artists("bjork").unwrap(), vec!["Friend of bjork"]);

    let text = aoty.artist_albums_json("bjork").unwrap();
    let v: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(v["albums"][0], "bjork LP1");

    let text = aoty.artist_total_score_json("bjork").unwrap();
    let v: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(v["total score"], 80.0);
}

#[test]
fn missing_required_category_surfaces_at_the_accessor() {
    // page with an Albums section only
    let html = concat!(
        r#"<h2>Albums</h2>"#,
        r#"<div class="albumRow"><div class="albumTitle">Only LP</div></div>"#,
    );
    let mut pages = HashMap::new();
    pages.insert(config::artist_url("obscure"), html.to_string());
    let mut aoty = facade(pages);

    assert_eq!(aoty.artist_albums("obscure").unwrap(), vec!["Only LP"]);
    match aoty.artist_mixtapes("obscure") {
        Err(Error::MissingCategory(cat)) => assert_eq!(cat, "Mixtapes"),
        other => panic!("expected MissingCategory, got {other:?}"),
    }
}

#[test]
fn non_integer_scores_fail_total_score_only() {
    let html = concat!(
        r#"<div class="artistCriticScore">NR</div>"#,
        r#"<div class="artistUserScore">75</div>"#,
    );
    let mut pages = HashMap::new();
    pages.insert(config::artist_url("unrated"), html.to_string());
    let mut aoty = facade(pages);

    // raw text accessor still works; only the arithmetic one rejects
    assert_eq!(aoty.artist_critic_score("unrated").unwrap(), "NR");
    assert!(matches!(
        aoty.artist_total_score("unrated"),
        Err(Error::InvalidNumeral(_))
    ));
}

#[test]
fn single_field_accessors_propagate_faults() {
    let mut aoty = facade(HashMap::new());
    assert!(matches!(
        aoty.artist_name("nobody"),
        Err(Error::Transport(_))
    ));
    assert!(matches!(
        aoty.user_rating_count("nobody"),
        Err(Error::Transport(_))
    ));
}

#[test]
fn upcoming_json_via_facade() {
    let page1 = [
        release_block("A1", "T1", "Jan 1"),
        release_block("A2", "T2", "Jan 2"),
    ]
    .join("\n");
    let mut pages = HashMap::new();
    pages.insert(config::upcoming_url(1), page1);
    let mut aoty = facade(pages);

    let releases = aoty.upcoming_releases_by_date(1, 1).unwrap();
    assert_eq!(releases.len(), 1);
    assert_eq!(releases[0].title, "T1");

    let text = aoty.upcoming_releases_by_page_json(1);
    let v: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(v["albums"][1]["release_date"], "Jan 2");

    // scan boundary converts instead of raising
    let text = aoty.upcoming_releases_by_count_json(100);
    let v: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(v["error"], "Page Limit Error");
}

#[test]
fn user_surface_json_keys() {
    let profile = format!(
        concat!(
            r#"<a href="/user/ada/ratings/"><div class="profileStat">9</div></a>"#,
            r#"<a href="/user/ada/reviews/"><div class="profileStat">2</div></a>"#,
            r#"<a href="/user/ada/lists/"><div class="profileStat">1</div></a>"#,
            r#"<a href="/user/ada/followers/"><div class="profileStat">4</div></a>"#,
            r#"<div class="aboutUser">hi</div>"#,
        ),
    );
    let mut pages = HashMap::new();
    pages.insert(config::user_url("ada"), profile);
    pages.insert(
        config::user_sub_url("ada", "/liked/albums/"),
        [
            r#"<div class="albumBlock"><div class="artistTitle">X</div><div class="albumTitle">Y</div></div>"#,
        ]
        .join(""),
    );
    let mut aoty = facade(pages);

    let v: serde_json::Value =
        serde_json::from_str(&aoty.user_rating_count_json("ada").unwrap()).unwrap();
    assert_eq!(v["ratings"], "9");

    let v: serde_json::Value =
        serde_json::from_str(&aoty.user_about_json("ada").unwrap()).unwrap();
    assert_eq!(v["about_user"], "hi");

    let v: serde_json::Value =
        serde_json::from_str(&aoty.user_liked_music_json("ada").unwrap()).unwrap();
    assert_eq!(v["liked music"][0], "X: Y");
}
