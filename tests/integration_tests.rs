use httpmock::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tempfile::TempDir;
use wuff::config::Overrides;
use wuff::domain::ports::{DownloadProgress, NoProgress};
use wuff::{DogExplorer, HttpDogSource, LocalStorage, SearchOutcome, Settings, WuffError};

const REGISTRY_CSV: &str = r#""StichtagDatJahr","DatenstandCd","HundenameText","GebDatHundJahr","SexHundCd","SexHundLang","SexHundSort","AnzHunde"
2015,"D","(Karl) Kaiser Karl vom Edersee",2013,"1","männlich",1,1
2015,"D","?",2009,"2","weiblich",2,1
2015,"D","?",2010,"2","weiblich",2,2
2017,"D","Rexi",2015,"2","weiblich",2,1
2017,"D","Rexli",1998,"1","männlich",1,1
2017,"D","Rey",2006,"1","männlich",1,1
2017,"D","Rey",2016,"1","männlich",1,1
2022,"D","Chloé",2021,"2","weiblich",2,1
2022,"D","Chloë",2016,"2","weiblich",2,1
2022,"D","Choco",2011,"1","männlich",1,1"#;

fn settings_for(server: &MockServer, output_dir: &str) -> Settings {
    Settings::load(
        None,
        Overrides {
            data_url: Some(server.url("/dogs.csv")),
            image_base_url: Some(server.url("/pics")),
            image_list_url: Some(server.url("/doggos")),
            allowed_image_suffixes: vec![".jpg".to_string(), ".png".to_string()],
            output_dir: Some(output_dir.to_string()),
        },
    )
    .unwrap()
}

fn mock_registry(server: &MockServer) -> httpmock::Mock<'_> {
    server.mock(|when, then| {
        when.method(GET).path("/dogs.csv");
        then.status(200)
            .header("Content-Type", "text/csv; charset=utf-8")
            .body(format!("\u{feff}{}", REGISTRY_CSV));
    })
}

#[tokio::test]
async fn test_end_to_end_find_and_stats() {
    let server = MockServer::start();
    let registry_mock = mock_registry(&server);
    let temp_dir = TempDir::new().unwrap();
    let settings = settings_for(&server, temp_dir.path().to_str().unwrap());

    let explorer = DogExplorer::new(HttpDogSource::new(&settings).unwrap());

    match explorer.find("Rey", None).await.unwrap() {
        SearchOutcome::Found { year, dogs } => {
            assert_eq!(year, 2017);
            assert_eq!(dogs.len(), 2);
        }
        other => panic!("unexpected outcome {:?}", other),
    }
    assert!(matches!(
        explorer.find("Rey", Some(2022)).await.unwrap(),
        SearchOutcome::NoYear { year: 2022, .. }
    ));

    let stats = explorer.stats(None).await.unwrap();
    assert_eq!(
        stats.name_longest.as_deref(),
        Some("(Karl) Kaiser Karl vom Edersee")
    );
    assert_eq!(stats.name_shortest.as_deref(), Some("Rey"));
    // unknown names are not counted
    assert_eq!(stats.dog_count_female, 3);
    assert_eq!(stats.dog_count_male, 5);
    assert_eq!(stats.first_year, Some(2015));
    assert_eq!(stats.last_year, Some(2022));
    assert_eq!(stats.top_names_male[0].name, "Rey");
    assert_eq!(stats.top_names_male[0].count, 2);

    let stats_2022 = explorer.stats(Some(2022)).await.unwrap();
    assert_eq!(stats_2022.dog_count_overall(), 3);

    // the registry is fetched once for all calls
    registry_mock.assert_hits(1);
}

#[tokio::test]
async fn test_end_to_end_create() {
    let server = MockServer::start();
    mock_registry(&server);
    let list_mock = server.mock(|when, then| {
        when.method(GET).path("/doggos");
        then.status(200).json_body(serde_json::json!([
            "00186969-c51d-462b-948b-30a7e1735908.mp4",
            "00564ba3-e5cb-4b2b-8d97-c65a9ef26c23.png",
            "00b417af-0b5f-42d7-9ad0-6aab6c3db491.webm"
        ]));
    });
    let png: &[u8] = b"\x89PNG\r\n\x1a\n<-PNG magic number.\nThis is definitely real PNG data!";
    let image_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/pics/00564ba3-e5cb-4b2b-8d97-c65a9ef26c23.png");
        then.status(200).header("Content-Type", "image/png").body(png);
    });

    let temp_dir = TempDir::new().unwrap();
    let settings = settings_for(&server, temp_dir.path().to_str().unwrap());
    let explorer = DogExplorer::new(HttpDogSource::new(&settings).unwrap());
    let images = HttpDogSource::new(&settings).unwrap();
    let storage = LocalStorage::new(temp_dir.path());
    let mut rng = StdRng::seed_from_u64(2024);

    let created = explorer
        .create(
            &images,
            &storage,
            &settings.allowed_image_suffixes,
            Some(2017),
            &mut NoProgress,
            &mut rng,
        )
        .await
        .unwrap();

    list_mock.assert();
    image_mock.assert();

    let file_name = created.picture.file_name().unwrap().to_str().unwrap();
    assert!(file_name.ends_with(".png"));
    assert!(file_name.starts_with(&format!(
        "{}_{}",
        created.dog.name, created.dog.birth_year
    )));
    assert!(["Rexi", "Rexli", "Rey"].contains(&created.dog.name.as_str()));
    assert_eq!(std::fs::read(&created.picture).unwrap(), png);
}

#[tokio::test]
async fn test_create_without_pictures() {
    let server = MockServer::start();
    mock_registry(&server);
    server.mock(|when, then| {
        when.method(GET).path("/doggos");
        then.status(200).json_body(serde_json::json!(["clip.mp4"]));
    });

    let temp_dir = TempDir::new().unwrap();
    let settings = settings_for(&server, temp_dir.path().to_str().unwrap());
    let explorer = DogExplorer::new(HttpDogSource::new(&settings).unwrap());
    let images = HttpDogSource::new(&settings).unwrap();
    let storage = LocalStorage::new(temp_dir.path());

    struct Unused;
    impl DownloadProgress for Unused {
        fn start(&mut self, _total: Option<u64>) {
            panic!("nothing should be downloaded");
        }
        fn advance(&mut self, _bytes: u64) {}
    }

    let result = explorer
        .create(
            &images,
            &storage,
            &settings.allowed_image_suffixes,
            None,
            &mut Unused,
            &mut StdRng::seed_from_u64(5),
        )
        .await;
    assert!(matches!(result, Err(WuffError::NoImages)));
}

#[tokio::test]
async fn test_wrong_data_source() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/dogs.csv");
        then.status(200).body("This,Data,Is,Wrong\n1,2,3,4\n5,6,7,8");
    });

    let temp_dir = TempDir::new().unwrap();
    let settings = settings_for(&server, temp_dir.path().to_str().unwrap());
    let explorer = DogExplorer::new(HttpDogSource::new(&settings).unwrap());

    let result = explorer.stats(None).await;
    assert!(matches!(result, Err(WuffError::MissingColumn { .. })));
}

#[tokio::test]
async fn test_registry_server_failure() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/dogs.csv");
        then.status(503);
    });

    let temp_dir = TempDir::new().unwrap();
    let settings = settings_for(&server, temp_dir.path().to_str().unwrap());
    let explorer = DogExplorer::new(HttpDogSource::new(&settings).unwrap());

    let err = explorer.find("Rey", None).await.unwrap_err();
    api_mock.assert();
    assert_eq!(err.exit_code(), 2);
}
