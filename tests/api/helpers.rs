use once_cell::sync::Lazy;
use somepage::configuration::get_configuration;
use somepage::startup::Server;
use somepage::telemetry;

static TRACING: Lazy<()> = Lazy::new(|| {
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = telemetry::get_subscriber("test_app", "info", std::io::stdout);
        telemetry::init_subscriber(subscriber);
    } else {
        let subscriber = telemetry::get_subscriber("test_app", "info", std::io::sink);
        telemetry::init_subscriber(subscriber);
    }
});

pub struct TestApp {
    pub port: u16,
    pub address: String,
}

pub async fn spawn_app() -> TestApp {
    Lazy::force(&TRACING);

    let mut configuration = get_configuration().expect("could not read configuration");
    // Port 0 lets the OS pick a free port for each test binary.
    configuration.application.port = 0;
    let server = Server::with_settings(configuration)
        .await
        .expect("error configuring server");
    let port = server.address().port();
    let app = TestApp {
        port,
        address: format!("http://localhost:{}", port),
    };
    tokio::spawn(async move { server.serve().await.unwrap() });
    app
}
