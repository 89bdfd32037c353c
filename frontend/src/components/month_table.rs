use signup_shared::grid::{GridCell, GridColumn, MonthGrid};
use signup_shared::{messages, VolunteerEntry};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct MonthTableProps {
    pub grid: MonthGrid,
}

/// One month: title, two header rows (weekday, date) and a row per slot.
#[function_component(MonthTable)]
pub fn month_table(props: &MonthTableProps) -> Html {
    let grid = &props.grid;

    html! {
        <section class="month-section">
            <div class="month-name">{ grid.label.clone() }</div>
            <div class="table-wrapper">
                <table role="grid">
                    <thead>
                        <tr>
                            { for grid.columns.iter().map(|column| html! {
                                <th scope="col">{ column.weekday.clone() }</th>
                            })}
                        </tr>
                        <tr class="date-row">
                            { for grid.columns.iter().map(|column| html! {
                                <th scope="col">{ column.date_display.clone() }</th>
                            })}
                        </tr>
                    </thead>
                    <tbody>
                        { for grid.rows.iter().map(|row| html! {
                            <tr>
                                { for grid.columns.iter().zip(row).map(|(column, cell)| render_cell(column, cell)) }
                            </tr>
                        })}
                    </tbody>
                </table>
            </div>
        </section>
    }
}

fn render_cell(column: &GridColumn, cell: &GridCell) -> Html {
    let date = column.iso_date.clone();

    match cell {
        GridCell::Filled(entry) => html! {
            <td class="filled" data-date={date}>{ render_entry(entry) }</td>
        },
        GridCell::AddControl { iso_date } => html! {
            <td class="empty" data-date={date}>
                <button type="button" class="add-btn" data-date={iso_date.clone()}>
                    <span aria-hidden="true">{ "+" }</span>
                    <span class="sr-only">{ messages::ADD_VOLUNTEER_LABEL }</span>
                </button>
            </td>
        },
        GridCell::Open | GridCell::Absent => html! {
            <td class="empty" data-date={date}></td>
        },
    }
}

fn render_entry(entry: &VolunteerEntry) -> Html {
    match entry.href.as_deref() {
        Some(href) if entry.opens_new_context() => html! {
            <a href={href.to_string()} target="_blank" rel="noopener noreferrer">
                { entry.label.clone() }
            </a>
        },
        Some(href) => html! {
            <a href={href.to_string()}>{ entry.label.clone() }</a>
        },
        None => html! { { entry.label.clone() } },
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use std::time::Duration;

    use gloo::timers::future::sleep;
    use signup_shared::grid::GridColumn;
    use wasm_bindgen_test::*;
    use web_sys::Element;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn column(iso_date: &str) -> GridColumn {
        GridColumn {
            iso_date: iso_date.to_string(),
            weekday: "Lunedì".to_string(),
            date_display: "10 marzo".to_string(),
        }
    }

    async fn render(grid: MonthGrid) -> Element {
        let host = gloo::utils::document().create_element("div").unwrap();
        yew::Renderer::<MonthTable>::with_root_and_props(host.clone(), MonthTableProps { grid })
            .render();
        sleep(Duration::ZERO).await;
        host
    }

    #[wasm_bindgen_test]
    async fn test_links_and_add_control() {
        let grid = MonthGrid {
            key: "2025-03".to_string(),
            label: "Marzo 2025".to_string(),
            columns: vec![column("2025-03-10")],
            rows: vec![
                vec![GridCell::Filled(VolunteerEntry::linked("Foo", "https://x.test/f"))],
                vec![GridCell::Filled(VolunteerEntry::linked("Anna", "mailto:a@b.test"))],
                vec![GridCell::Filled(VolunteerEntry::named("Mario"))],
                vec![GridCell::AddControl {
                    iso_date: "2025-03-10".to_string(),
                }],
            ],
        };
        let host = render(grid).await;

        let external = host.query_selector("a[href='https://x.test/f']").unwrap().unwrap();
        assert_eq!(external.text_content().as_deref(), Some("Foo"));
        assert_eq!(external.get_attribute("target").as_deref(), Some("_blank"));
        assert_eq!(
            external.get_attribute("rel").as_deref(),
            Some("noopener noreferrer")
        );

        let mail = host.query_selector("a[href='mailto:a@b.test']").unwrap().unwrap();
        assert_eq!(mail.get_attribute("target"), None);
        assert_eq!(mail.get_attribute("rel"), None);

        let filled = host.query_selector_all("td.filled").unwrap();
        assert_eq!(filled.length(), 3);

        let button = host.query_selector("td.empty button.add-btn").unwrap().unwrap();
        assert_eq!(button.get_attribute("data-date").as_deref(), Some("2025-03-10"));

        let title = host.query_selector(".month-name").unwrap().unwrap();
        assert_eq!(title.text_content().as_deref(), Some("Marzo 2025"));
    }

    #[wasm_bindgen_test]
    async fn test_open_and_absent_cells_have_no_control() {
        let grid = MonthGrid {
            key: "2025-03".to_string(),
            label: "Marzo 2025".to_string(),
            columns: vec![column("2025-03-10"), column("2025-03-11")],
            rows: vec![vec![GridCell::Open, GridCell::Absent]],
        };
        let host = render(grid).await;

        assert_eq!(host.query_selector_all("td.empty").unwrap().length(), 2);
        assert!(host.query_selector(".add-btn").unwrap().is_none());
    }
}
