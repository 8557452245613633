//! End-to-end export tests: harvest from a mock server, then verify
//! the CSV contract on the resulting dataset.

use marquee::config::{Config, CrawlConfig, OutputConfig, SiteConfig};
use marquee::crawler::Coordinator;
use marquee::output::{compute_statistics, to_csv_string, write_csv};
use marquee::NullProgress;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_config(base_url: &str, total_pages: u32) -> Config {
    Config {
        site: SiteConfig {
            base_url: base_url.to_string(),
            total_pages,
            user_agent: "TestHarvester/1.0".to_string(),
        },
        crawl: CrawlConfig {
            delay_min_ms: 0,
            delay_max_ms: 1,
        },
        output: OutputConfig {
            csv_path: "./unused.csv".to_string(),
        },
    }
}

#[tokio::test]
async fn test_harvested_dataset_exports_to_csv() {
    let mock_server = MockServer::start().await;

    let body = r#"<html><body>
        <div class="el-card">
            <h2>First Movie</h2>
            <img class="cover" src="https://img.example.com/first.jpg">
            <p class="score">8.5</p>
            <div class="categories"><button>Drama</button><button>Crime</button></div>
        </div>
        <div class="el-card">
            <h2>Second Movie</h2>
            <img class="cover" src="https://img.example.com/second.jpg">
            <p class="score">9</p>
        </div>
    </body></html>"#;

    Mock::given(method("GET"))
        .and(path("/page/1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&mock_server)
        .await;

    let config = test_config(&format!("{}/page/", mock_server.uri()), 1);
    let coordinator = Coordinator::new(config).expect("Failed to create coordinator");
    let dataset = coordinator.run(&mut NullProgress).await;

    let csv = to_csv_string(&dataset);

    // BOM prefix, then exactly 1 header row + 2 data rows
    assert!(csv.starts_with('\u{feff}'));
    let lines: Vec<_> = csv.trim_start_matches('\u{feff}').lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "title,image_url,score,categories");

    // Scores as plain decimals, categories joined or defaulted
    assert_eq!(
        lines[1],
        "First Movie,https://img.example.com/first.jpg,8.5,\"Drama, Crime\""
    );
    assert_eq!(
        lines[2],
        "Second Movie,https://img.example.com/second.jpg,9.0,uncategorized"
    );

    // Statistics over the same dataset
    let stats = compute_statistics(&dataset);
    assert_eq!(stats.total_records, 2);
    assert!((stats.mean_score - 8.75).abs() < 1e-9);
    assert_eq!(stats.top, Some(("Second Movie".to_string(), 9.0)));

    // And the file on disk matches the in-memory rendering
    let dir = tempfile::tempdir().unwrap();
    let csv_path = dir.path().join("movies.csv");
    write_csv(&dataset, &csv_path).unwrap();
    assert_eq!(std::fs::read_to_string(&csv_path).unwrap(), csv);
}

#[tokio::test]
async fn test_empty_harvest_exports_header_only() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/page/1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html><body></body></html>"))
        .mount(&mock_server)
        .await;

    let config = test_config(&format!("{}/page/", mock_server.uri()), 1);
    let coordinator = Coordinator::new(config).expect("Failed to create coordinator");
    let dataset = coordinator.run(&mut NullProgress).await;

    assert!(dataset.is_empty());

    let csv = to_csv_string(&dataset);
    let lines: Vec<_> = csv.trim_start_matches('\u{feff}').lines().collect();
    assert_eq!(lines, vec!["title,image_url,score,categories"]);
}
