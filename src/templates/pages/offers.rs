use crate::domain::{ColumnVisibility, Offer, StructuredFilters, COLUMNS};
use crate::templates::{card, desktop_layout, filter_select};
use crate::templates::layouts::desktop::APP_TITLE;
use maud::{html, Markup};

pub struct OffersVm<'a> {
    pub user: &'a str,
    /// Add-form defaults.
    pub today: String,
    pub location: String,
    pub search: &'a str,
    pub filters: &'a StructuredFilters,
    pub locations: Vec<String>,
    pub categories: Vec<String>,
    pub years: Vec<String>,
    pub columns: &'a ColumnVisibility,
    pub rows: Vec<&'a Offer>,
}

pub fn offers_page(vm: &OffersVm) -> Markup {
    desktop_layout(
        APP_TITLE,
        Some(vm.user),
        html! {
            main class="container" {
                (add_form(vm))
                (filters_card(vm))
                (results_table(vm))
            }
        },
    )
}

fn text_input(name: &str, placeholder: &str, value: &str) -> Markup {
    html! {
        input name=(name) placeholder=(placeholder) value=(value);
    }
}

fn add_form(vm: &OffersVm) -> Markup {
    card(
        "Добавяне на оферта",
        html! {
            form method="post" action="/offers" class="grid cols-3" {
                input type="date" name="date" value=(vm.today);
                (text_input("location", "Землище", &vm.location))
                (text_input("name", "Име", ""))
                (text_input("phone", "Телефон", ""))
                (text_input("email", "Имейл", ""))
                (text_input("landPlace", "Местност", ""))
                (text_input("landId", "№ имот", ""))
                (text_input("area", "Дка (общо)", ""))
                (text_input("cultivableArea", "Обработваеми дка", ""))
                (text_input("pricePerDecare", "Цена/дка", ""))
                (text_input("category", "Категория", ""))
                (text_input("rent", "Аренда", ""))
                (text_input("contractUntil", "Договор до (година)", ""))
                (text_input("comment", "Коментар", ""))
                div class="full-row" {
                    button type="submit" { "Запиши" }
                }
            }
        },
    )
}

fn filters_card(vm: &OffersVm) -> Markup {
    card(
        "Търсене и филтри",
        html! {
            form method="post" action="/filters" class="grid cols-4" {
                input name="search" placeholder="Търси навсякъде..." value=(vm.search);
                (filter_select("location", "Всички землища", &vm.locations, &vm.filters.location))
                (filter_select("category", "Всички категории", &vm.categories, &vm.filters.category))
                (filter_select("contractUntil", "Всички години", &vm.years, &vm.filters.contract_until))
                button type="submit" { "Филтрирай" }
            }
            form method="post" action="/filters/reset" {
                button type="submit" class="secondary" { "Изчисти" }
            }

            div class="hstack wrap" {
                form method="post" action="/columns" class="hstack wrap" {
                    @for col in COLUMNS.iter() {
                        label class="checkbox" {
                            input type="checkbox" name="column" value=(col.label) checked[vm.columns.is_visible(col.label)];
                            span { (col.label) }
                        }
                    }
                    button type="submit" class="secondary" { "Колони" }
                }
                div class="hstack" {
                    a class="button secondary" href="/export/csv" { "Експорт в CSV" }
                    a class="button secondary" href="/export/buyer-csv" { "Експорт за купувач" }
                }
            }
        },
    )
}

fn results_table(vm: &OffersVm) -> Markup {
    let visible: Vec<_> = vm.columns.visible_columns().collect();

    html! {
        div class="card table-wrap" {
            table {
                thead {
                    tr {
                        @for col in &visible {
                            th { (col.label) }
                        }
                        th { "Действия" }
                    }
                }
                tbody {
                    @for offer in &vm.rows {
                        tr {
                            @for col in &visible {
                                td { (offer.display(col.field)) }
                            }
                            td {
                                form method="post" action="/offers/delete" {
                                    input type="hidden" name="id" value=(offer.id);
                                    button type="submit" class="danger" { "Изтрий" }
                                }
                            }
                        }
                    }
                    @if vm.rows.is_empty() {
                        tr {
                            td colspan=(visible.len() + 1) class="small" { "Няма намерени записи" }
                        }
                    }
                }
            }
        }
    }
}
