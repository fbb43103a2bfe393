//! The HTML page that the single-page frontend mounts into.

use axum::response::{IntoResponse, Response};
use maud::{DOCTYPE, Markup, html};

use crate::endpoints;

fn shell(title: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en"
        {
            head
            {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                script type="module" src={ (endpoints::STATIC) "/app.js" } {}
            }

            body
            {
                div id="app" {}

                noscript { "This app needs JavaScript to run." }
            }
        }
    }
}

/// Serve the frontend shell. The script mounts the root component and the
/// router into `#app`.
pub async fn get_app_shell() -> Response {
    shell("Saving").into_response()
}

#[cfg(test)]
mod tests {
    use scraper::Selector;

    use crate::{
        endpoints,
        test_utils::{assert_valid_html, get_test_server, parse_html_document},
    };

    #[tokio::test]
    async fn shell_has_mount_point_and_script() {
        let (server, _) = get_test_server();

        let response = server.get(endpoints::ROOT).await;

        response.assert_status_ok();
        let content_type = response.header("content-type");
        assert_eq!(content_type, "text/html; charset=utf-8");

        let html = parse_html_document(&response);
        assert_valid_html(&html);

        let mount_points = html.select(&Selector::parse("div#app").unwrap()).count();
        assert_eq!(mount_points, 1);

        let script = html
            .select(&Selector::parse("script").unwrap())
            .next()
            .expect("No script found");
        assert_eq!(script.value().attr("src"), Some("/static/app.js"));
    }
}
