use maud::{html, Markup, DOCTYPE};

pub const APP_TITLE: &str = "Оферти за земя";

pub fn desktop_layout(title: &str, user: Option<&str>, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="bg" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
            }
            body {
                header class="header" {
                    div class="title" { (APP_TITLE) }
                    @if let Some(user) = user {
                        form method="post" action="/logout" class="hstack" {
                            button type="submit" class="secondary" { "Изход (" (user) ")" }
                        }
                    }
                }
                (content)
            }
        }
    }
}
