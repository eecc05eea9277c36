use crate::auth::credentials::USERS;
use crate::templates::{card, desktop_layout};
use maud::{html, Markup};

pub fn login_page(username: &str, error: Option<&str>) -> Markup {
    desktop_layout(
        "Вход",
        None,
        html! {
            main class="container narrow" {
                (card("Вход", html! {
                    form method="post" action="/login" class="vstack" {
                        input name="username" placeholder="Потребител" value=(username) autocomplete="username";
                        input name="password" type="password" placeholder="Парола" autocomplete="current-password";
                        @if let Some(error) = error {
                            div class="small error" { (error) }
                        }
                        button type="submit" { "Влез" }
                    }
                    div class="small" {
                        "Демо: "
                        @for (i, (user, pass)) in USERS.iter().enumerate() {
                            @if i > 0 { " · " }
                            (user) " / " (pass)
                        }
                    }
                }))
            }
        },
    )
}
