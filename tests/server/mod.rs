use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
use std::time::Duration;

/// Address of the running test server, e.g. `127.0.0.1:43127`
fn server_addr(req: &HttpRequest) -> String {
    req.app_config().local_addr().to_string()
}

fn html(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body)
}

/// A page linking to every kind of link target the server offers.
///
/// Links to `127.0.0.1:<port>` are internal when the page is fetched through
/// that address; links to `localhost:<port>` are external.
async fn index(req: HttpRequest) -> HttpResponse {
    let addr = server_addr(&req);
    let port = req.app_config().local_addr().port();

    html(format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>Local Test Page</title>
    <link rel="stylesheet" href="/static/site.css">
</head>
<body>
    <h1>Main</h1>
    <h2>Sub</h2>
    <h2>Another sub</h2>
    <h3>Deep</h3>
    <a href="http://{addr}/ok">ok</a>
    <a href="http://{addr}/not-found">missing</a>
    <a href="http://{addr}/server-error">broken</a>
    <a href="http://{addr}/redirect">moved</a>
    <a href="/ok">relative</a>
    <a href="mailto:someone@example.com">mail</a>
    <a href="tel:+15551234">call</a>
    <a href="http://localhost:{port}/ok">external ok</a>
    <a href="http://localhost:{port}/not-found">external missing</a>
</body>
</html>"#
    ))
}

async fn login(_req: HttpRequest) -> HttpResponse {
    html(
        r#"<!DOCTYPE html PUBLIC "-//W3C//DTD XHTML 1.0 Strict//EN" "http://www.w3.org/TR/xhtml1/DTD/xhtml1-strict.dtd">
<html><head><title>Sign in</title></head>
<body>
    <form action="/session" method="post">
        <input type="text" name="user" />
        <input type="password" name="pass" />
    </form>
</body></html>"#
            .to_string(),
    )
}

/// Page with a `<base>` pointing at the server itself
async fn based(req: HttpRequest) -> HttpResponse {
    let addr = server_addr(&req);
    html(format!(
        r#"<html><head><base href="http://{addr}/"></head>
<body><a href="ok">ok</a><a href="not-found">missing</a></body></html>"#
    ))
}

async fn moved(req: HttpRequest) -> HttpResponse {
    let port = req.app_config().local_addr().port();
    HttpResponse::Found()
        .append_header(("Location", format!("http://localhost:{}/", port)))
        .finish()
}

async fn slow() -> HttpResponse {
    tokio::time::sleep(Duration::from_secs(5)).await;
    HttpResponse::Ok().body("finally")
}

/// Starts a server on a free port and returns its base URL
/// (`http://127.0.0.1:<port>`)
pub async fn get_test_server_url() -> String {
    let http_server = HttpServer::new(|| {
        App::new()
            .route("/", web::get().to(index))
            .route("/login", web::get().to(login))
            .route("/based", web::get().to(based))
            .route("/moved", web::get().to(moved))
            .route("/slow", web::get().to(slow))
            .route(
                "/ok",
                web::get().to(|| async { HttpResponse::Ok().body("OK") }),
            )
            .route(
                "/created",
                web::get().to(|| async { HttpResponse::Created().body("Created") }),
            )
            .route(
                "/not-found",
                web::get().to(|| async { HttpResponse::NotFound().body("Not Found") }),
            )
            .route(
                "/forbidden",
                web::get().to(|| async { HttpResponse::Forbidden().body("Forbidden") }),
            )
            .route(
                "/server-error",
                web::get().to(|| async { HttpResponse::InternalServerError().body("Error") }),
            )
            .route(
                "/redirect",
                web::get().to(|| async {
                    HttpResponse::MovedPermanently()
                        .append_header(("Location", "/ok"))
                        .finish()
                }),
            )
    })
    .workers(2)
    .bind(("127.0.0.1", 0))
    .expect("Failed to bind test server");

    let addr = http_server
        .addrs()
        .first()
        .cloned()
        .expect("No address bound");
    let url = format!("http://{}", addr);

    let app_server = http_server.run();

    tokio::spawn(async move {
        if let Err(e) = app_server.await {
            eprintln!("Test server error: {}", e);
        }
    });

    url
}
