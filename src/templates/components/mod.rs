use maud::{html, Markup};

pub mod error;

pub use error::html_error_response;

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        div class="card" {
            h2 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}

/// `<select>` with an "all" option followed by the observed values.
pub fn filter_select(name: &str, all_label: &str, options: &[String], selected: &str) -> Markup {
    html! {
        select name=(name) {
            option value="" selected[selected.is_empty()] { (all_label) }
            @for value in options {
                option value=(value) selected[value == selected] { (value) }
            }
        }
    }
}
